use anyhow::{Context, Result};
use colored::Colorize;
use log::info;

use crate::config::settings::AppConfig;
use crate::domain::{GameRecord, Roster};
use crate::providers::{FileRosterSource, FileScheduleSource, RosterSource, ScheduleSource};
use crate::rating::{RatingEstimator, RatingFit, ranking};
use crate::simulation::{SeasonSimulator, Standing};

/// Runs the estimation and projection pipeline for one season.
pub struct ProjectionService {
    config: AppConfig,
    roster_source: Box<dyn RosterSource>,
    schedule_source: Box<dyn ScheduleSource>,
}

impl ProjectionService {
    pub fn new(config: AppConfig) -> Self {
        let roster_path =
            std::env::var("ROSTER_PATH").unwrap_or_else(|_| config.data.roster_path.clone());
        let schedules_dir =
            std::env::var("SCHEDULES_DIR").unwrap_or_else(|_| config.data.schedules_dir.clone());

        let roster_source = Box::new(FileRosterSource::new(roster_path));
        let schedule_source = Box::new(FileScheduleSource::new(schedules_dir));
        Self::with_sources(config, roster_source, schedule_source)
    }

    /// Inject collaborator implementations (in-memory sources in tests).
    pub fn with_sources(
        config: AppConfig,
        roster_source: Box<dyn RosterSource>,
        schedule_source: Box<dyn ScheduleSource>,
    ) -> Self {
        Self {
            config,
            roster_source,
            schedule_source,
        }
    }

    /// Estimate ratings and print the ranking for one season.
    pub fn run_rankings(&self, year: u16) -> Result<()> {
        let (roster, schedules) = self.load_season(year)?;
        let fit = self.estimate(&roster, &schedules)?;
        self.print_rankings(&roster, &fit);
        Ok(())
    }

    /// Estimate ratings, then project the remainder of the season.
    pub fn run_projection(&self, year: u16, trials: Option<usize>, seed: Option<u64>) -> Result<()> {
        let (roster, schedules) = self.load_season(year)?;
        let fit = self.estimate(&roster, &schedules)?;
        self.print_rankings(&roster, &fit);

        let mut settings = self.config.simulation.clone();
        if let Some(trials) = trials {
            settings.trials = trials;
        }
        if let Some(seed) = seed {
            settings.base_seed = seed;
        }

        let simulator = SeasonSimulator::from_settings(&settings);
        let standings = simulator.project(&roster, &schedules, &fit.ratings)?;
        self.print_standings(&standings);
        Ok(())
    }

    fn load_season(&self, year: u16) -> Result<(Roster, Vec<Vec<GameRecord>>)> {
        let records = self.roster_source.load().context("Failed to load roster")?;
        let roster = Roster::from_records(records)?;

        let mut schedules = Vec::with_capacity(roster.len());
        for competitor in roster.iter() {
            let rows = self
                .schedule_source
                .season_schedule(year, &competitor.id)
                .with_context(|| {
                    format!("Failed to load the {year} schedule for {}", competitor.id)
                })?;
            schedules.push(rows.iter().map(|row| row.to_game_record()).collect());
        }

        info!(
            "Loaded {} competitors and their schedules for season {}",
            roster.len(),
            year
        );
        Ok((roster, schedules))
    }

    fn estimate(&self, roster: &Roster, schedules: &[Vec<GameRecord>]) -> Result<RatingFit> {
        let estimator = RatingEstimator::from_settings(&self.config.estimator);
        let seed_ratings = vec![0.0; roster.len()];
        let fit = estimator.fit(roster, schedules, &seed_ratings)?;
        Ok(fit)
    }

    fn print_rankings(&self, roster: &Roster, fit: &RatingFit) {
        println!("{}", "Rankings".bold());
        for entry in ranking(roster, &fit.ratings) {
            println!("{}: {:.3}", entry.id, entry.rating);
        }
        if !fit.converged {
            println!(
                "{}",
                "(ratings are best-effort: the fit did not converge)".yellow()
            );
        }
    }

    fn print_standings(&self, standings: &[Standing]) {
        println!("\n{}", "Projected standings".bold());
        for row in standings {
            println!("{}: {}-{}", row.id, row.wins, row.losses);
        }
    }
}
