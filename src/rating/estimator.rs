use log::{info, warn};
use ndarray::Array1;

use crate::config::settings::EstimatorSettings;
use crate::domain::{GameRecord, Roster};
use crate::errors::LeagueError;

use super::objective::LogLikelihoodObjective;
use super::optimizer::{GradientDescent, Optimizer};
use super::outcome_index::build_outcome_index;

/// Maximum-likelihood rating vector, indexed like the roster.
///
/// `converged == false` means the optimizer hit its bound and the ratings
/// are best-effort; callers get a warning, never a crash.
#[derive(Debug, Clone)]
pub struct RatingFit {
    pub ratings: Vec<f64>,
    pub converged: bool,
    pub iterations: usize,
}

/// Fits latent strengths to decided outcomes under the logistic model.
pub struct RatingEstimator {
    optimizer: Box<dyn Optimizer>,
}

impl RatingEstimator {
    pub fn from_settings(settings: &EstimatorSettings) -> Self {
        Self::with_optimizer(Box::new(GradientDescent::new(
            settings.max_iterations,
            settings.convergence_tolerance,
            settings.initial_step,
        )))
    }

    /// Substitute a custom solver (deterministic stubs in tests).
    pub fn with_optimizer(optimizer: Box<dyn Optimizer>) -> Self {
        Self { optimizer }
    }

    /// Fit ratings to every decided contest, seeded from the current
    /// ratings (all zeros for a fresh league).
    pub fn fit(
        &self,
        roster: &Roster,
        schedules: &[Vec<GameRecord>],
        seed_ratings: &[f64],
    ) -> Result<RatingFit, LeagueError> {
        let index = build_outcome_index(roster, schedules)?;
        info!(
            "Fitting ratings for {} competitors over {} decided contests",
            roster.len(),
            index.len()
        );

        let start = Array1::from(seed_ratings.to_vec());
        if index.is_empty() {
            // Nothing to fit against; the seed is already the maximum.
            return Ok(RatingFit {
                ratings: start.to_vec(),
                converged: true,
                iterations: 0,
            });
        }

        let objective = LogLikelihoodObjective::new(&index);
        let outcome = self.optimizer.minimize(&objective, start);
        if !outcome.converged {
            warn!(
                "Rating fit stopped after {} iterations without converging; ratings are best-effort",
                outcome.iterations
            );
        }

        Ok(RatingFit {
            ratings: outcome.solution.to_vec(),
            converged: outcome.converged,
            iterations: outcome.iterations,
        })
    }
}

/// One row of the published ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct RankingEntry {
    pub rating: f64,
    pub id: String,
}

/// (rating, identifier) pairs in the league's published order: descending
/// by rating, ties by identifier descending.
pub fn ranking(roster: &Roster, ratings: &[f64]) -> Vec<RankingEntry> {
    let mut entries: Vec<RankingEntry> = roster
        .iter()
        .map(|competitor| RankingEntry {
            rating: ratings[competitor.index],
            id: competitor.id.clone(),
        })
        .collect();

    entries.sort_by(|a, b| b.rating.total_cmp(&a.rating).then(b.id.cmp(&a.id)));
    entries
}
