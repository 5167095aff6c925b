pub struct EstimatorSettings {
    pub convergence_tolerance: f64,
    pub max_iterations: usize,
    pub initial_step: f64,
}

impl Default for EstimatorSettings {
    fn default() -> Self {
        Self {
            convergence_tolerance: 1e-6,
            max_iterations: 500,
            initial_step: 1.0,
        }
    }
}

#[derive(Clone)]
pub struct SimulationSettings {
    pub trials: usize,
    pub base_seed: u64,
    pub round_decimals: u32,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            trials: 100,
            base_seed: 42,
            round_decimals: 2,
        }
    }
}

pub struct DataSettings {
    pub roster_path: String,
    pub schedules_dir: String,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            roster_path: "data/roster.json".to_string(),
            schedules_dir: "data/schedules".to_string(),
        }
    }
}

pub struct AppConfig {
    pub estimator: EstimatorSettings,
    pub simulation: SimulationSettings,
    pub data: DataSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            estimator: EstimatorSettings::default(),
            simulation: SimulationSettings::default(),
            data: DataSettings::default(),
        }
    }
}
