//! Shared components for CLI commands
//!
//! This module contains common types, utilities, and functions used across
//! multiple CLI command implementations.

use crate::cli::args::IndexArgs;
use crate::config::Config;
use crate::{Error, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

/// Indexing statistics for reporting across all commands
#[derive(Debug, Clone, Default)]
pub struct IndexingStats {
    /// Number of packs processed
    pub packs_processed: usize,
    /// Number of songs parsed
    pub songs_parsed: usize,
    /// Number of charts indexed
    pub charts_indexed: u64,
    /// Number of stepfiles skipped (unreadable)
    pub files_skipped: usize,
    /// Number of songs parsed with degraded fields
    pub degraded_songs: usize,
    /// Total processing time
    pub processing_time: std::time::Duration,
    /// Output file sizes in bytes
    pub output_sizes: Vec<(String, u64)>,
}

impl IndexingStats {
    /// Calculate total output size in bytes
    pub fn total_output_size(&self) -> u64 {
        self.output_sizes.iter().map(|(_, size)| size).sum()
    }

    /// Format output size in human-readable format
    pub fn format_size(bytes: u64) -> String {
        const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
        let mut size = bytes as f64;
        let mut unit_index = 0;

        while size >= 1024.0 && unit_index < UNITS.len() - 1 {
            size /= 1024.0;
            unit_index += 1;
        }

        if unit_index == 0 {
            format!("{} {}", bytes, UNITS[unit_index])
        } else {
            format!("{:.2} {}", size, UNITS[unit_index])
        }
    }
}

/// Set up structured logging for a command
pub fn setup_logging(log_level: &str, quiet: bool) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("stepfile_indexer={}", log_level)));

    if quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        // Standard logging with timestamps
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Build the runtime configuration from index command arguments
pub fn load_configuration(args: &IndexArgs) -> Result<Config> {
    let mut config = Config::for_indexing(args.songs_path.clone(), args.output_path.clone());

    config.processing.pretty = !args.compact;
    config.processing.dry_run = args.dry_run;
    if args.combined {
        config.processing.combined_output = Some(
            crate::app::services::catalog_writer::combined_document_path(
                &config.processing.output_path,
            ),
        );
    }
    config.logging.level = args.get_log_level().to_string();

    config.validate()?;

    Ok(config)
}

/// Check if an error is critical enough to stop processing
pub fn is_critical_error(error: &Error) -> bool {
    matches!(
        error,
        Error::Configuration { .. } | Error::FileNotFound { .. }
    )
}

/// Create a progress bar with appropriate styling
pub fn create_progress_bar(total: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg} [{per_sec}] ETA: {eta}")
            .unwrap()
            .progress_chars("#>-"),
    );
    pb.set_message(message.to_string());
    pb
}
