//! Ingest run reports

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Outcome of converting one catalog file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileReport {
    pub file: PathBuf,
    /// Where the JSON rendition was written.
    pub output: PathBuf,
    /// Number of records emitted.
    pub records: usize,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

/// A file that failed to convert; the batch continues past it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileFailure {
    pub file: PathBuf,
    pub error: String,
}

/// Summary of one batch run over a catalog directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub files: Vec<FileReport>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failed: Vec<FileFailure>,
}

impl BatchReport {
    /// Total records emitted across all converted files.
    pub fn records_total(&self) -> usize {
        self.files.iter().map(|f| f.records).sum()
    }
}
