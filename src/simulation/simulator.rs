use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::config::settings::SimulationSettings;
use crate::domain::{Contest, GameRecord, Roster, collapse_schedules};
use crate::errors::LeagueError;
use crate::rating::model::win_probability;

use super::standings::{Standing, round_to, sort_standings};

/// Monte Carlo projection of final win/loss totals.
///
/// Trials are statistically independent given the rating vector, so they run
/// in parallel: each trial owns an isolated generator seeded from the base
/// seed plus the trial number, and accumulates into a trial-local tally.
/// The tallies are merged in trial order afterwards, which keeps the result
/// deterministic for a fixed seed and trial count.
pub struct SeasonSimulator {
    trials: usize,
    base_seed: u64,
    round_decimals: u32,
}

/// Per-trial win/loss buffers. Allocated fresh inside every run, so no
/// accumulator state survives between simulations.
struct TrialTally {
    wins: Vec<f64>,
    losses: Vec<f64>,
}

impl TrialTally {
    fn zeroed(competitors: usize) -> Self {
        Self {
            wins: vec![0.0; competitors],
            losses: vec![0.0; competitors],
        }
    }

    /// Credit one resolved contest to both participants at once.
    fn credit(&mut self, winner: usize, loser: usize, increment: f64) {
        self.wins[winner] += increment;
        self.losses[loser] += increment;
    }

    fn absorb(&mut self, other: &TrialTally) {
        for (total, value) in self.wins.iter_mut().zip(&other.wins) {
            *total += value;
        }
        for (total, value) in self.losses.iter_mut().zip(&other.losses) {
            *total += value;
        }
    }
}

impl SeasonSimulator {
    pub fn from_settings(settings: &SimulationSettings) -> Self {
        Self {
            trials: settings.trials,
            base_seed: settings.base_seed,
            round_decimals: settings.round_decimals,
        }
    }

    /// Project final standings over the full schedule.
    ///
    /// Decided contests contribute identically every trial; open contests
    /// are resolved by a single draw per contest per trial, applied to both
    /// participants, so one side's win is always the other side's loss.
    pub fn project(
        &self,
        roster: &Roster,
        schedules: &[Vec<GameRecord>],
        ratings: &[f64],
    ) -> Result<Vec<Standing>, LeagueError> {
        let contests = collapse_schedules(roster, schedules)?;
        info!(
            "Simulating {} contests across {} trials",
            contests.len(),
            self.trials
        );

        let increment = 1.0 / self.trials as f64;
        let tallies: Vec<TrialTally> = (0..self.trials)
            .into_par_iter()
            .map(|trial| self.run_trial(trial as u64, &contests, ratings, roster.len(), increment))
            .collect();

        let mut merged = TrialTally::zeroed(roster.len());
        for tally in &tallies {
            merged.absorb(tally);
        }

        Ok(self.standings(roster, &merged))
    }

    /// One full stochastic replay of the season.
    fn run_trial(
        &self,
        trial: u64,
        contests: &[Contest],
        ratings: &[f64],
        competitors: usize,
        increment: f64,
    ) -> TrialTally {
        let mut rng = StdRng::seed_from_u64(self.base_seed.wrapping_add(trial));
        let mut tally = TrialTally::zeroed(competitors);

        for contest in contests {
            match *contest {
                Contest::Decided { winner, loser } => tally.credit(winner, loser, increment),
                Contest::Open { home, away } => {
                    let probability = win_probability(ratings[home], ratings[away]);
                    let draw: f64 = rng.gen_range(0.0..1.0);
                    if draw < probability {
                        tally.credit(home, away, increment);
                    } else {
                        tally.credit(away, home, increment);
                    }
                }
            }
        }

        tally
    }

    fn standings(&self, roster: &Roster, tally: &TrialTally) -> Vec<Standing> {
        let mut rows: Vec<Standing> = roster
            .iter()
            .map(|competitor| Standing {
                id: competitor.id.clone(),
                wins: round_to(tally.wins[competitor.index], self.round_decimals),
                losses: round_to(tally.losses[competitor.index], self.round_decimals),
            })
            .collect();

        sort_standings(&mut rows);
        rows
    }
}
