//! Command-line argument definitions for the stepfile indexer
//!
//! This module defines the complete CLI interface using clap derive API.

use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the stepfile indexer
///
/// Parses StepMania `.sm` chart files from song pack directories and writes
/// per-pack JSON catalog documents for a downstream song browser.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "stepfile-indexer",
    version,
    about = "Index StepMania song packs into JSON catalog documents",
    long_about = "Parses StepMania .sm chart files from a Songs directory, extracts song \
                  metadata and per-difficulty note counts, groups songs by pack, and writes \
                  one JSON document per pack plus an optional combined catalog. Parsing is \
                  tolerant: malformed fields degrade to defaults instead of dropping songs."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the stepfile indexer
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Index a whole Songs directory into per-pack JSON documents
    Index(IndexArgs),
    /// Parse and report a single pack directory
    Pack(PackArgs),
    /// Merge per-pack JSON documents into the combined catalog
    Combine(CombineArgs),
}

/// Arguments for the index command (main batch processing)
#[derive(Debug, Clone, Parser)]
pub struct IndexArgs {
    /// Songs directory containing the pack directories
    ///
    /// Each subdirectory is treated as a song pack; each pack subdirectory
    /// as a song folder whose first .sm file is indexed.
    #[arg(value_name = "SONGS_DIR", help = "Songs directory containing pack directories")]
    pub songs_path: PathBuf,

    /// Output directory for per-pack JSON documents
    ///
    /// Cleared and recreated on every run. If not specified, defaults to
    /// a jsons/ directory inside the Songs directory.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        help = "Output directory for per-pack JSON documents"
    )]
    pub output_path: Option<PathBuf>,

    /// Also write the combined catalog document
    ///
    /// Writes allSongPacksJson.json into the output directory, keyed by
    /// pack name in discovery order.
    #[arg(long = "combined", help = "Also write the combined catalog document")]
    pub combined: bool,

    /// Write compact JSON instead of pretty-printed
    #[arg(long = "compact", help = "Write compact JSON output")]
    pub compact: bool,

    /// Perform a dry run without writing any files
    ///
    /// Parses and aggregates everything, then reports what would be written.
    #[arg(long = "dry-run", help = "Show what would be written without writing files")]
    pub dry_run: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the pack command (single-pack report)
#[derive(Debug, Clone, Parser)]
pub struct PackArgs {
    /// Pack directory to parse
    #[arg(value_name = "PACK_DIR", help = "Pack directory to parse and report")]
    pub pack_path: PathBuf,

    /// Output format for the pack report
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for the pack report"
    )]
    pub output_format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

/// Arguments for the combine command (catalog merge)
#[derive(Debug, Clone, Parser)]
pub struct CombineArgs {
    /// Directory containing the per-pack JSON documents
    #[arg(value_name = "JSONS_DIR", help = "Directory containing per-pack JSON documents")]
    pub jsons_path: PathBuf,

    /// Output file for the combined document
    ///
    /// If not specified, writes allSongPacksJson.json into the input
    /// directory. The output file is never read back as an input pack.
    #[arg(
        short = 'o',
        long = "output-file",
        value_name = "FILE",
        help = "Output file for the combined catalog document"
    )]
    pub output_file: Option<PathBuf>,

    /// Write compact JSON instead of pretty-printed
    #[arg(long = "compact", help = "Write compact JSON output")]
    pub compact: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

/// Output format options for machine-readable results
#[derive(Debug, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl IndexArgs {
    /// Validate the index command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.songs_path.exists() {
            return Err(Error::configuration(format!(
                "Songs directory does not exist: {}",
                self.songs_path.display()
            )));
        }

        if !self.songs_path.is_dir() {
            return Err(Error::configuration(format!(
                "Songs path is not a directory: {}",
                self.songs_path.display()
            )));
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show progress bars (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

impl PackArgs {
    /// Validate the pack command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.pack_path.exists() {
            return Err(Error::configuration(format!(
                "Pack directory does not exist: {}",
                self.pack_path.display()
            )));
        }

        if !self.pack_path.is_dir() {
            return Err(Error::configuration(format!(
                "Pack path is not a directory: {}",
                self.pack_path.display()
            )));
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

impl CombineArgs {
    /// Validate the combine command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.jsons_path.exists() {
            return Err(Error::configuration(format!(
                "JSON directory does not exist: {}",
                self.jsons_path.display()
            )));
        }

        if !self.jsons_path.is_dir() {
            return Err(Error::configuration(format!(
                "JSON path is not a directory: {}",
                self.jsons_path.display()
            )));
        }

        if let Some(output_file) = &self.output_file {
            if let Some(parent) = output_file.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    return Err(Error::configuration(format!(
                        "Output file directory does not exist: {}",
                        parent.display()
                    )));
                }
            }
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn index_args(songs_path: PathBuf) -> IndexArgs {
        IndexArgs {
            songs_path,
            output_path: None,
            combined: false,
            compact: false,
            dry_run: false,
            verbose: 0,
            quiet: false,
        }
    }

    #[test]
    fn test_index_args_validation() {
        let temp_dir = TempDir::new().unwrap();

        let args = index_args(temp_dir.path().to_path_buf());
        assert!(args.validate().is_ok());

        let invalid = index_args(PathBuf::from("/nonexistent/path"));
        assert!(invalid.validate().is_err());

        let file_path = temp_dir.path().join("file.txt");
        std::fs::write(&file_path, "x").unwrap();
        let invalid = index_args(file_path);
        assert!(invalid.validate().is_err());
    }

    #[test]
    fn test_log_level() {
        let temp_dir = TempDir::new().unwrap();
        let mut args = index_args(temp_dir.path().to_path_buf());

        // Default level
        assert_eq!(args.get_log_level(), "warn");

        // Verbose levels
        args.verbose = 1;
        assert_eq!(args.get_log_level(), "info");

        args.verbose = 2;
        assert_eq!(args.get_log_level(), "debug");

        args.verbose = 3;
        assert_eq!(args.get_log_level(), "trace");

        // Quiet mode
        args.quiet = true;
        assert_eq!(args.get_log_level(), "error");
    }

    #[test]
    fn test_show_progress() {
        let temp_dir = TempDir::new().unwrap();
        let mut args = index_args(temp_dir.path().to_path_buf());

        assert!(args.show_progress());

        args.quiet = true;
        assert!(!args.show_progress());
    }

    #[test]
    fn test_combine_args_validation() {
        let temp_dir = TempDir::new().unwrap();

        let args = CombineArgs {
            jsons_path: temp_dir.path().to_path_buf(),
            output_file: None,
            compact: false,
            verbose: 0,
        };
        assert!(args.validate().is_ok());

        let invalid = CombineArgs {
            jsons_path: PathBuf::from("/nonexistent"),
            output_file: None,
            compact: false,
            verbose: 0,
        };
        assert!(invalid.validate().is_err());

        let invalid = CombineArgs {
            jsons_path: temp_dir.path().to_path_buf(),
            output_file: Some(PathBuf::from("/nonexistent/dir/out.json")),
            compact: false,
            verbose: 0,
        };
        assert!(invalid.validate().is_err());
    }

    #[test]
    fn test_cli_parses_subcommands() {
        let args = Args::try_parse_from(["stepfile-indexer", "index", "/tmp", "--combined"])
            .unwrap();
        match args.get_command() {
            Commands::Index(index) => {
                assert_eq!(index.songs_path, PathBuf::from("/tmp"));
                assert!(index.combined);
            }
            _ => panic!("expected index command"),
        }

        let args = Args::try_parse_from(["stepfile-indexer", "pack", "/tmp", "--format", "json"])
            .unwrap();
        match args.get_command() {
            Commands::Pack(pack) => {
                assert_eq!(pack.output_format, OutputFormat::Json);
            }
            _ => panic!("expected pack command"),
        }
    }
}
