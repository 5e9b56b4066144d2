//! Runtime configuration
//!
//! Assembled from CLI arguments; carries everything the command layer needs
//! to run a batch.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants::JSONS_DIR_NAME;
use crate::{Error, Result};

/// Complete runtime configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub processing: ProcessingConfig,
    pub logging: LoggingConfig,
}

/// Batch-processing settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingConfig {
    /// Songs directory holding the pack directories
    pub songs_path: PathBuf,
    /// Directory receiving the per-pack JSON documents
    pub output_path: PathBuf,
    /// Path for the combined document, when requested
    pub combined_output: Option<PathBuf>,
    /// Pretty-print JSON output
    pub pretty: bool,
    /// Parse and report without writing anything
    pub dry_run: bool,
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter: error, warn, info, debug, trace
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Build a configuration for indexing a Songs directory.
    ///
    /// The output directory defaults to `jsons/` inside the Songs directory,
    /// matching the layout the downstream catalog expects.
    pub fn for_indexing(songs_path: PathBuf, output_path: Option<PathBuf>) -> Self {
        let output_path = output_path.unwrap_or_else(|| songs_path.join(JSONS_DIR_NAME));
        Self {
            processing: ProcessingConfig {
                songs_path,
                output_path,
                combined_output: None,
                pretty: true,
                dry_run: false,
            },
            logging: LoggingConfig::default(),
        }
    }

    /// Validate paths before any work starts.
    pub fn validate(&self) -> Result<()> {
        if !self.processing.songs_path.exists() {
            return Err(Error::configuration(format!(
                "songs directory does not exist: {}",
                self.processing.songs_path.display()
            )));
        }
        if !self.processing.songs_path.is_dir() {
            return Err(Error::configuration(format!(
                "songs path is not a directory: {}",
                self.processing.songs_path.display()
            )));
        }
        Ok(())
    }
}
