use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::info;

use crate::domain::CompetitorRecord;

/// Roster collaborator: ordered competitor records that define the league's
/// index assignment.
pub trait RosterSource {
    fn load(&self) -> Result<Vec<CompetitorRecord>>;
}

/// Roster read from a JSON file holding one array of records.
pub struct FileRosterSource {
    path: PathBuf,
}

impl FileRosterSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl RosterSource for FileRosterSource {
    fn load(&self) -> Result<Vec<CompetitorRecord>> {
        let json = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read roster file: {}", self.path.display()))?;

        let records: Vec<CompetitorRecord> =
            serde_json::from_str(&json).context("Failed to parse roster records")?;

        info!(
            "Loaded {} roster records from {}",
            records.len(),
            self.path.display()
        );
        Ok(records)
    }
}
