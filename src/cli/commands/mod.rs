//! CLI command implementations
//!
//! Each subcommand lives in its own module; `shared` carries the logging
//! setup, statistics, and progress-bar helpers they have in common.

pub mod combine;
pub mod index;
pub mod pack;
pub mod shared;

pub use shared::IndexingStats;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Dispatch the parsed CLI arguments to their command runner.
pub fn run(args: Args) -> Result<()> {
    match args.get_command() {
        Commands::Index(index_args) => {
            index::run_index(index_args)?;
        }
        Commands::Pack(pack_args) => {
            pack::run_pack(pack_args)?;
        }
        Commands::Combine(combine_args) => {
            combine::run_combine(combine_args)?;
        }
    }
    Ok(())
}
