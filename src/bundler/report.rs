use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Summary of one completed bundling run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BundleReport {
    pub output_path: PathBuf,
    pub files_bundled: usize,
    pub bytes_written: u64,
    pub language_filter: String,
    pub duration: Duration,
    pub bundled_at: DateTime<Utc>,
}

impl BundleReport {
    pub fn new(
        output_path: PathBuf,
        files_bundled: usize,
        bytes_written: u64,
        language_filter: String,
        duration: Duration,
    ) -> Self {
        Self {
            output_path,
            files_bundled,
            bytes_written,
            language_filter,
            duration,
            bundled_at: Utc::now(),
        }
    }
}
