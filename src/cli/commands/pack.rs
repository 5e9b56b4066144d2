//! Pack command implementation
//!
//! Parses a single pack directory and reports its contents without writing
//! any catalog documents.

use super::shared::setup_logging;
use crate::app::adapters::filesystem::discover_stepfiles;
use crate::app::models::SongRecord;
use crate::app::services::stepfile_parser::StepfileParser;
use crate::cli::args::{OutputFormat, PackArgs};
use crate::{Error, Result};
use colored::*;
use tracing::{debug, info, warn};

/// Pack command runner
pub fn run_pack(args: PackArgs) -> Result<Vec<SongRecord>> {
    setup_logging(args.get_log_level(), false)?;
    args.validate()?;

    let pack_name = pack_name_from_path(&args.pack_path)?;
    info!("Parsing pack: {}", pack_name);

    let songs = parse_pack(&args.pack_path, &pack_name)?;

    match args.output_format {
        OutputFormat::Human => print_pack_report(&pack_name, &songs),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&songs)
                .map_err(|e| Error::json_serialization("failed to serialize pack report".to_string(), e))?;
            println!("{}", json);
        }
    }

    Ok(songs)
}

/// Parse every song folder in one pack directory.
pub fn parse_pack(pack_path: &std::path::Path, pack_name: &str) -> Result<Vec<SongRecord>> {
    let parser = StepfileParser::new();
    let entries = discover_stepfiles(pack_path)?;
    debug!(pack = pack_name, songs = entries.len(), "discovered songs");

    let mut songs = Vec::with_capacity(entries.len());
    for entry in &entries {
        match parser.parse_file(&entry.stepfile_path, &entry.folder_name, pack_name) {
            Ok(outcome) => songs.push(outcome.song),
            Err(e) => warn!(
                "Skipping unreadable stepfile {}: {}",
                entry.stepfile_path.display(),
                e
            ),
        }
    }

    Ok(songs)
}

fn pack_name_from_path(pack_path: &std::path::Path) -> Result<String> {
    pack_path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .ok_or_else(|| {
            Error::configuration(format!(
                "Cannot derive pack name from path: {}",
                pack_path.display()
            ))
        })
}

/// Print a colored per-song listing of the pack
fn print_pack_report(pack_name: &str, songs: &[SongRecord]) {
    println!();
    println!("{}", format!("Pack: {}", pack_name).bright_green().bold());
    println!();

    for song in songs {
        println!(
            "  {} {} {}",
            song.title.bright_cyan(),
            format!("by {}", song.artist).bright_white(),
            format!("[{} BPM]", song.bpm).bright_black()
        );
        for chart in &song.charts {
            println!(
                "     {} {} {}",
                format!("{} {}", chart.difficulty, chart.rating).bright_yellow(),
                chart.game.bright_black(),
                format!(
                    "notes: {}, holds: {}, rolls: {}, mines: {}",
                    chart.note, chart.hold, chart.roll, chart.mine
                )
            );
        }
    }

    println!();
    println!(
        "{}",
        format!(
            "{} songs, {} charts",
            songs.len(),
            songs.iter().map(SongRecord::chart_count).sum::<usize>()
        )
        .bright_white()
    );
}
