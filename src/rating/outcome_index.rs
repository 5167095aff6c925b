use crate::domain::{Contest, GameRecord, Roster, collapse_schedules};
use crate::errors::LeagueError;

/// Parallel winner/loser roster indices, one entry per decided contest.
///
/// Rebuilt from the schedules on every fit; never persisted.
#[derive(Debug, Default)]
pub struct OutcomeIndex {
    pub winners: Vec<usize>,
    pub losers: Vec<usize>,
}

impl OutcomeIndex {
    pub fn len(&self) -> usize {
        self.winners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.winners.is_empty()
    }
}

/// Index every decided contest exactly once; pending games are excluded.
pub fn build_outcome_index(
    roster: &Roster,
    schedules: &[Vec<GameRecord>],
) -> Result<OutcomeIndex, LeagueError> {
    let mut index = OutcomeIndex::default();

    for contest in collapse_schedules(roster, schedules)? {
        if let Contest::Decided { winner, loser } = contest {
            index.winners.push(winner);
            index.losers.push(loser);
        }
    }

    Ok(index)
}
