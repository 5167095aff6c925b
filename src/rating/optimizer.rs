use log::info;
use ndarray::Array1;

const ARMIJO_SLOPE: f64 = 1e-4;
const BACKTRACK_FACTOR: f64 = 0.5;
const MIN_STEP: f64 = 1e-12;

/// Differentiable objective evaluated over a parameter vector.
pub trait Objective {
    fn value(&self, theta: &Array1<f64>) -> f64;
    fn gradient(&self, theta: &Array1<f64>) -> Array1<f64>;
}

/// Result of a minimization run.
///
/// `converged == false` marks a best-effort solution cut off by the
/// iteration bound or a stalled line search; the solution is still the best
/// point visited.
#[derive(Debug, Clone)]
pub struct Minimization {
    pub solution: Array1<f64>,
    pub objective_value: f64,
    pub iterations: usize,
    pub converged: bool,
}

/// Continuous minimizer behind the rating fit.
///
/// Kept as a trait so tests can substitute a deterministic stub solver.
pub trait Optimizer {
    fn minimize(&self, objective: &dyn Objective, start: Array1<f64>) -> Minimization;
}

/// Steepest-descent minimizer with Armijo backtracking line search.
///
/// The iteration cap doubles as the cancellation bound: the fit never hangs,
/// it reports non-convergence instead.
#[derive(Debug, Clone)]
pub struct GradientDescent {
    pub max_iterations: usize,
    pub tolerance: f64,
    pub initial_step: f64,
}

impl GradientDescent {
    pub fn new(max_iterations: usize, tolerance: f64, initial_step: f64) -> Self {
        Self {
            max_iterations,
            tolerance,
            initial_step,
        }
    }
}

impl Default for GradientDescent {
    fn default() -> Self {
        Self::new(500, 1e-6, 1.0)
    }
}

impl Optimizer for GradientDescent {
    fn minimize(&self, objective: &dyn Objective, start: Array1<f64>) -> Minimization {
        let mut theta = start;
        let mut value = objective.value(&theta);
        let mut iterations = 0;

        while iterations < self.max_iterations {
            let gradient = objective.gradient(&theta);
            let gradient_norm = infinity_norm(&gradient);

            if gradient_norm < self.tolerance {
                info!("Minimizer converged after {} iterations", iterations);
                return Minimization {
                    solution: theta,
                    objective_value: value,
                    iterations,
                    converged: true,
                };
            }

            let squared_norm = gradient.dot(&gradient);
            let Some((next_theta, next_value)) =
                self.backtrack(objective, &theta, &gradient, value, squared_norm)
            else {
                // No admissible step left at this point.
                break;
            };

            theta = next_theta;
            value = next_value;
            iterations += 1;
        }

        Minimization {
            solution: theta,
            objective_value: value,
            iterations,
            converged: false,
        }
    }
}

impl GradientDescent {
    /// Shrink the step along the descent direction until the Armijo
    /// sufficient-decrease condition holds.
    fn backtrack(
        &self,
        objective: &dyn Objective,
        theta: &Array1<f64>,
        gradient: &Array1<f64>,
        current_value: f64,
        squared_norm: f64,
    ) -> Option<(Array1<f64>, f64)> {
        let mut step = self.initial_step;

        while step >= MIN_STEP {
            let candidate = theta - &(gradient * step);
            let candidate_value = objective.value(&candidate);

            if candidate_value <= current_value - ARMIJO_SLOPE * step * squared_norm {
                return Some((candidate, candidate_value));
            }
            step *= BACKTRACK_FACTOR;
        }

        None
    }
}

fn infinity_norm(values: &Array1<f64>) -> f64 {
    values.mapv(f64::abs).fold(0.0_f64, |a, &b| a.max(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// `f(x) = Σ (x_i - target_i)^2`
    struct Quadratic {
        target: Array1<f64>,
    }

    impl Objective for Quadratic {
        fn value(&self, theta: &Array1<f64>) -> f64 {
            (theta - &self.target).mapv(|d| d * d).sum()
        }

        fn gradient(&self, theta: &Array1<f64>) -> Array1<f64> {
            (theta - &self.target) * 2.0
        }
    }

    #[test]
    fn minimizes_a_quadratic_bowl() {
        let quadratic = Quadratic {
            target: Array1::from(vec![1.5, -2.0, 0.25]),
        };
        let solver = GradientDescent::default();

        let outcome = solver.minimize(&quadratic, Array1::zeros(3));

        assert!(outcome.converged);
        for (solved, expected) in outcome.solution.iter().zip(quadratic.target.iter()) {
            assert!((solved - expected).abs() < 1e-5);
        }
        assert!(outcome.objective_value < 1e-9);
    }

    #[test]
    fn iteration_bound_reports_non_convergence() {
        let quadratic = Quadratic {
            target: Array1::from(vec![100.0]),
        };
        let solver = GradientDescent::new(1, 1e-9, 1.0);

        let outcome = solver.minimize(&quadratic, Array1::zeros(1));

        assert!(!outcome.converged);
        assert_eq!(outcome.iterations, 1);
    }

    #[test]
    fn empty_parameter_vector_is_trivially_converged() {
        let quadratic = Quadratic {
            target: Array1::zeros(0),
        };
        let solver = GradientDescent::default();

        let outcome = solver.minimize(&quadratic, Array1::zeros(0));
        assert!(outcome.converged);
        assert_eq!(outcome.iterations, 0);
    }
}
