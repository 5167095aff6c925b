use std::collections::HashMap;

use crate::domain::models::{Competitor, CompetitorRecord};
use crate::errors::LeagueError;

/// Immutable roster with dense 0..N-1 indices and identifier lookup.
///
/// Index assignment follows the source order of the collaborator records, so
/// the roster position is also the rating-vector index.
#[derive(Debug, Clone)]
pub struct Roster {
    competitors: Vec<Competitor>,
    index_by_id: HashMap<String, usize>,
}

impl Roster {
    pub fn from_records(records: Vec<CompetitorRecord>) -> Result<Self, LeagueError> {
        let mut competitors = Vec::with_capacity(records.len());
        let mut index_by_id = HashMap::with_capacity(records.len());

        for (index, record) in records.into_iter().enumerate() {
            if index_by_id.insert(record.id.clone(), index).is_some() {
                return Err(LeagueError::DuplicateCompetitor(record.id));
            }
            competitors.push(Competitor {
                id: record.id,
                index,
                league: record.league,
                division: record.division,
            });
        }

        Ok(Self {
            competitors,
            index_by_id,
        })
    }

    pub fn len(&self) -> usize {
        self.competitors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.competitors.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Competitor> {
        self.competitors.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Competitor> {
        self.competitors.get(index)
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index_by_id.get(id).copied()
    }

    /// Resolve an opponent identifier or fail with the data-integrity error
    /// the estimator and simulator surface to their callers.
    pub fn require_index(&self, competitor: &str, opponent: &str) -> Result<usize, LeagueError> {
        self.index_of(opponent)
            .ok_or_else(|| LeagueError::UnknownOpponent {
                competitor: competitor.to_string(),
                opponent: opponent.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str) -> CompetitorRecord {
        CompetitorRecord {
            id: id.to_string(),
            league: "AL".to_string(),
            division: "East".to_string(),
        }
    }

    #[test]
    fn assigns_dense_indices_in_source_order() {
        let roster =
            Roster::from_records(vec![record("BOS"), record("NYY"), record("TBR")]).unwrap();

        assert_eq!(roster.len(), 3);
        for (position, competitor) in roster.iter().enumerate() {
            assert_eq!(competitor.index, position);
        }
        assert_eq!(roster.index_of("NYY"), Some(1));
    }

    #[test]
    fn rejects_duplicate_identifiers() {
        let result = Roster::from_records(vec![record("BOS"), record("BOS")]);
        assert_eq!(
            result.unwrap_err(),
            LeagueError::DuplicateCompetitor("BOS".to_string())
        );
    }

    #[test]
    fn unknown_opponent_is_a_lookup_error() {
        let roster = Roster::from_records(vec![record("BOS")]).unwrap();
        let error = roster.require_index("BOS", "MTL").unwrap_err();
        assert_eq!(
            error,
            LeagueError::UnknownOpponent {
                competitor: "BOS".to_string(),
                opponent: "MTL".to_string(),
            }
        );
    }
}
