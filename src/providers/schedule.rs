use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::info;

use crate::domain::ScheduleRecord;

/// Schedule collaborator, keyed by season year and competitor identifier.
pub trait ScheduleSource {
    fn season_schedule(&self, year: u16, competitor_id: &str) -> Result<Vec<ScheduleRecord>>;
}

/// Schedules read from JSON files laid out as `<dir>/<year>/<id>.json`.
pub struct FileScheduleSource {
    dir: PathBuf,
}

impl FileScheduleSource {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    fn schedule_path(&self, year: u16, competitor_id: &str) -> PathBuf {
        self.dir
            .join(year.to_string())
            .join(format!("{competitor_id}.json"))
    }
}

impl ScheduleSource for FileScheduleSource {
    fn season_schedule(&self, year: u16, competitor_id: &str) -> Result<Vec<ScheduleRecord>> {
        let path = self.schedule_path(year, competitor_id);
        let json = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read schedule file: {}", path.display()))?;

        let rows: Vec<ScheduleRecord> = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse schedule for {competitor_id}"))?;

        info!("Loaded {} schedule rows from {}", rows.len(), path.display());
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{GameOutcome, ScheduleRecord, SideResult};

    #[test]
    fn rows_parse_with_upstream_column_names() {
        let json = r#"[
            {"Opp": "NYY", "W/L": "W"},
            {"Opp": "NYY", "W/L": "L-wo"},
            {"Opp": "TBR", "W/L": null},
            {"Opp": "TBR"}
        ]"#;

        let rows: Vec<ScheduleRecord> = serde_json::from_str(json).unwrap();
        let outcomes: Vec<GameOutcome> =
            rows.iter().map(|r| r.to_game_record().outcome).collect();

        assert_eq!(
            outcomes,
            vec![
                GameOutcome::Decided(SideResult::Win),
                GameOutcome::Decided(SideResult::Loss),
                GameOutcome::Pending,
                GameOutcome::Pending,
            ]
        );
    }

    #[test]
    fn schedule_files_are_keyed_by_year_and_identifier() {
        let source = FileScheduleSource::new("data/schedules");
        let path = source.schedule_path(2022, "BOS");
        assert!(path.ends_with("2022/BOS.json"));
    }
}
