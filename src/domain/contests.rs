use crate::domain::models::{GameOutcome, GameRecord, SideResult};
use crate::domain::roster::Roster;
use crate::errors::LeagueError;

/// One physical contest, listed exactly once for the whole league.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contest {
    /// Played game; resolves the same way every trial.
    Decided { winner: usize, loser: usize },
    /// Unplayed game; resolved by a single draw per trial for both sides.
    Open { home: usize, away: usize },
}

/// Collapse per-competitor schedules into one entry per physical contest.
///
/// Every game appears once in each participant's schedule. A game is taken
/// from the lower-indexed participant's perspective only (the entry is kept
/// when the opponent's roster index is greater than the owner's), which
/// removes the mirror duplicate while preserving the recorded outcome.
pub fn collapse_schedules(
    roster: &Roster,
    schedules: &[Vec<GameRecord>],
) -> Result<Vec<Contest>, LeagueError> {
    let mut contests = Vec::new();

    for (competitor, schedule) in roster.iter().zip(schedules) {
        for game in schedule {
            let opponent_index = roster.require_index(&competitor.id, &game.opponent)?;
            if opponent_index <= competitor.index {
                continue;
            }

            let contest = match game.outcome {
                GameOutcome::Decided(SideResult::Win) => Contest::Decided {
                    winner: competitor.index,
                    loser: opponent_index,
                },
                GameOutcome::Decided(SideResult::Loss) => Contest::Decided {
                    winner: opponent_index,
                    loser: competitor.index,
                },
                GameOutcome::Pending => Contest::Open {
                    home: competitor.index,
                    away: opponent_index,
                },
            };
            contests.push(contest);
        }
    }

    Ok(contests)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::CompetitorRecord;

    fn roster_of(ids: &[&str]) -> Roster {
        let records = ids
            .iter()
            .map(|id| CompetitorRecord {
                id: id.to_string(),
                league: "AL".to_string(),
                division: "East".to_string(),
            })
            .collect();
        Roster::from_records(records).unwrap()
    }

    fn decided(opponent: &str, result: SideResult) -> GameRecord {
        GameRecord {
            opponent: opponent.to_string(),
            outcome: GameOutcome::Decided(result),
        }
    }

    fn pending(opponent: &str) -> GameRecord {
        GameRecord {
            opponent: opponent.to_string(),
            outcome: GameOutcome::Pending,
        }
    }

    #[test]
    fn mirrored_schedules_collapse_to_one_contest_each() {
        let roster = roster_of(&["BOS", "NYY"]);
        // The same two games recorded symmetrically on both schedules.
        let schedules = vec![
            vec![decided("NYY", SideResult::Win), pending("NYY")],
            vec![decided("BOS", SideResult::Loss), pending("BOS")],
        ];

        let contests = collapse_schedules(&roster, &schedules).unwrap();

        assert_eq!(
            contests,
            vec![
                Contest::Decided { winner: 0, loser: 1 },
                Contest::Open { home: 0, away: 1 },
            ]
        );
    }

    #[test]
    fn outcome_is_kept_regardless_of_owning_side() {
        let roster = roster_of(&["BOS", "NYY"]);
        // BOS lost, so the winner must be the higher-indexed NYY even though
        // the kept entry comes from BOS's schedule.
        let schedules = vec![
            vec![decided("NYY", SideResult::Loss)],
            vec![decided("BOS", SideResult::Win)],
        ];

        let contests = collapse_schedules(&roster, &schedules).unwrap();
        assert_eq!(contests, vec![Contest::Decided { winner: 1, loser: 0 }]);
    }

    #[test]
    fn repeated_pairings_stay_distinct() {
        let roster = roster_of(&["BOS", "NYY"]);
        let schedules = vec![
            vec![
                decided("NYY", SideResult::Win),
                decided("NYY", SideResult::Loss),
            ],
            vec![
                decided("BOS", SideResult::Loss),
                decided("BOS", SideResult::Win),
            ],
        ];

        let contests = collapse_schedules(&roster, &schedules).unwrap();
        assert_eq!(contests.len(), 2);
    }

    #[test]
    fn unknown_opponent_fails_fast() {
        let roster = roster_of(&["BOS"]);
        let schedules = vec![vec![pending("MTL")]];

        let error = collapse_schedules(&roster, &schedules).unwrap_err();
        assert!(matches!(error, LeagueError::UnknownOpponent { .. }));
    }
}
