use serde::{Deserialize, Serialize};

/// Result of one scheduled game, seen from the owning competitor's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SideResult {
    Win,
    Loss,
}

/// Outcome of one schedule entry, resolved once at ingestion.
///
/// No outcome-marker strings survive past this point; an unplayed game is
/// represented by the explicit `Pending` variant rather than a nullable
/// marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    Decided(SideResult),
    Pending,
}

impl GameOutcome {
    /// Classify an upstream outcome marker.
    ///
    /// An absent marker is the collaborator's sentinel for an unplayed game.
    /// Markers are matched by content so walk-off style annotations such as
    /// `"W-wo"` classify correctly; any other marker degrades to `Pending`
    /// rather than being misread as a result.
    pub fn from_marker(marker: Option<&str>) -> Self {
        match marker {
            Some(m) if m.contains('W') => GameOutcome::Decided(SideResult::Win),
            Some(m) if m.contains('L') => GameOutcome::Decided(SideResult::Loss),
            _ => GameOutcome::Pending,
        }
    }

    pub fn is_decided(&self) -> bool {
        matches!(self, GameOutcome::Decided(_))
    }
}

/// One entry in a competitor's schedule, in source order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRecord {
    pub opponent: String,
    pub outcome: GameOutcome,
}

/// League competitor. The index is the position in the roster and doubles
/// as the rating-vector index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Competitor {
    pub id: String,
    pub index: usize,
    pub league: String,
    pub division: String,
}

// --- Collaborator record structures ---

/// Raw roster record from the roster collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompetitorRecord {
    #[serde(rename = "Team")]
    pub id: String,
    #[serde(rename = "League")]
    pub league: String,
    #[serde(rename = "Division")]
    pub division: String,
}

/// Raw schedule row from the schedule collaborator.
///
/// A missing `W/L` marker means the game has not been played yet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleRecord {
    #[serde(rename = "Opp")]
    pub opponent: String,
    #[serde(rename = "W/L", default)]
    pub result: Option<String>,
}

impl ScheduleRecord {
    pub fn to_game_record(&self) -> GameRecord {
        GameRecord {
            opponent: self.opponent.clone(),
            outcome: GameOutcome::from_marker(self.result.as_deref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_classification() {
        assert_eq!(
            GameOutcome::from_marker(Some("W")),
            GameOutcome::Decided(SideResult::Win)
        );
        assert_eq!(
            GameOutcome::from_marker(Some("L")),
            GameOutcome::Decided(SideResult::Loss)
        );
        assert_eq!(
            GameOutcome::from_marker(Some("W-wo")),
            GameOutcome::Decided(SideResult::Win)
        );
        assert_eq!(
            GameOutcome::from_marker(Some("L-wo")),
            GameOutcome::Decided(SideResult::Loss)
        );
    }

    #[test]
    fn absent_marker_is_pending() {
        assert_eq!(GameOutcome::from_marker(None), GameOutcome::Pending);
    }

    #[test]
    fn unrecognized_marker_degrades_to_pending() {
        assert_eq!(GameOutcome::from_marker(Some("")), GameOutcome::Pending);
        assert_eq!(
            GameOutcome::from_marker(Some("postponed")),
            GameOutcome::Pending
        );
    }

    #[test]
    fn schedule_record_resolves_once() {
        let row = ScheduleRecord {
            opponent: "NYY".to_string(),
            result: Some("W".to_string()),
        };
        let game = row.to_game_record();
        assert_eq!(game.opponent, "NYY");
        assert!(game.outcome.is_decided());
    }
}
