//! Index command implementation
//!
//! This module contains the complete batch indexing workflow: discovery,
//! parsing, aggregation, and catalog document output.

use super::shared::{
    IndexingStats, create_progress_bar, is_critical_error, load_configuration, setup_logging,
};
use crate::app::adapters::filesystem::{discover_packs, discover_stepfiles};
use crate::app::services::catalog_writer::{CatalogWriter, WriterConfig};
use crate::app::services::pack_aggregator::{PackAggregator, PackedCollection};
use crate::app::services::stepfile_parser::StepfileParser;
use crate::cli::args::IndexArgs;
use crate::config::Config;
use crate::Result;
use indicatif::HumanDuration;
use std::time::Instant;
use tracing::{debug, error, info, warn};

/// Index command runner
///
/// Orchestrates the whole indexing workflow:
/// 1. Set up logging and configuration
/// 2. Discover packs and stepfiles
/// 3. Parse every stepfile and aggregate by pack
/// 4. Write per-pack documents (and optionally the combined catalog)
pub fn run_index(args: IndexArgs) -> Result<IndexingStats> {
    let start_time = Instant::now();

    setup_logging(args.get_log_level(), args.quiet)?;

    info!("Starting stepfile indexer");
    debug!("Command line arguments: {:?}", args);

    args.validate()?;
    let config = load_configuration(&args)?;
    debug!("Loaded configuration: {:?}", config);

    let (collection, mut stats) = parse_songs_directory(&config, args.show_progress())?;

    if config.processing.dry_run {
        stats.processing_time = start_time.elapsed();
        report_dry_run(&config, &collection, &stats);
        return Ok(stats);
    }

    // Write catalog documents
    let writer = CatalogWriter::new(WriterConfig {
        pretty: config.processing.pretty,
    });
    writer.prepare_output_dir(&config.processing.output_path)?;
    stats.output_sizes = writer.write_pack_documents(&collection, &config.processing.output_path)?;

    if let Some(combined_path) = &config.processing.combined_output {
        let size = writer.write_combined_document(&collection, combined_path)?;
        let name = combined_path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| combined_path.display().to_string());
        stats.output_sizes.push((name, size));
    }

    stats.processing_time = start_time.elapsed();

    if !args.quiet {
        print_final_report(&stats);
    }

    Ok(stats)
}

/// Parse every stepfile under the Songs directory into an aggregated
/// collection.
///
/// Unreadable files are skipped with a warning; only configuration-level
/// failures abort the batch.
pub fn parse_songs_directory(
    config: &Config,
    show_progress: bool,
) -> Result<(PackedCollection, IndexingStats)> {
    let mut stats = IndexingStats::default();

    let packs = discover_packs(&config.processing.songs_path)?;
    info!("Discovered {} packs", packs.len());

    // Collect song entries first so the progress bar has a total
    let mut work = Vec::new();
    for pack in &packs {
        match discover_stepfiles(&pack.path) {
            Ok(songs) => {
                debug!(pack = %pack.name, songs = songs.len(), "discovered songs");
                work.extend(songs.into_iter().map(|song| (pack.name.clone(), song)));
            }
            Err(e) => {
                error!("Failed to scan pack {}: {}", pack.name, e);
                if is_critical_error(&e) {
                    return Err(e);
                }
                stats.files_skipped += 1;
            }
        }
    }
    stats.packs_processed = packs.len();

    let progress_bar = if show_progress {
        Some(create_progress_bar(
            work.len() as u64,
            "Parsing stepfiles...",
        ))
    } else {
        None
    };

    let parser = StepfileParser::new();
    let mut aggregator = PackAggregator::new();

    for (pack_name, song) in &work {
        if let Some(pb) = &progress_bar {
            pb.set_message(format!("Parsing {}", song.folder_name));
        }

        match parser.parse_file(&song.stepfile_path, &song.folder_name, pack_name) {
            Ok(outcome) => {
                if !outcome.stats.is_clean() {
                    stats.degraded_songs += 1;
                }
                stats.songs_parsed += 1;
                aggregator.add_song(outcome.song);
            }
            Err(e) => {
                warn!(
                    "Skipping unreadable stepfile {}: {}",
                    song.stepfile_path.display(),
                    e
                );
                stats.files_skipped += 1;
            }
        }

        if let Some(pb) = &progress_bar {
            pb.inc(1);
        }
    }

    if let Some(pb) = &progress_bar {
        pb.finish_with_message(format!("Parsed {} stepfiles", stats.songs_parsed));
    }

    let (collection, agg_stats) = aggregator.finish();
    stats.charts_indexed = agg_stats.charts_stamped;

    info!(
        "Aggregation complete: {} packs, {} songs, {} charts",
        collection.pack_count(),
        collection.song_count(),
        stats.charts_indexed
    );

    Ok((collection, stats))
}

/// Report what a real run would write
fn report_dry_run(config: &Config, collection: &PackedCollection, stats: &IndexingStats) {
    info!("Dry run - no files will be written");

    println!("\nDry run: would write to {}", config.processing.output_path.display());
    for (pack_name, songs) in collection.iter() {
        println!(
            "   • {}.json ({} songs)",
            pack_name,
            songs.len()
        );
    }
    if let Some(combined) = &config.processing.combined_output {
        println!("   • {}", combined.display());
    }
    println!(
        "\n{} packs, {} songs, {} charts parsed in {}",
        stats.packs_processed,
        stats.songs_parsed,
        stats.charts_indexed,
        HumanDuration(stats.processing_time)
    );
}

/// Print the human-readable end-of-run summary
fn print_final_report(stats: &IndexingStats) {
    let duration = HumanDuration(stats.processing_time);
    let total_size = IndexingStats::format_size(stats.total_output_size());

    println!("\n🎉 Indexing Complete!");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📊 Indexing Summary:");
    println!("   • Packs processed: {}", stats.packs_processed);
    println!("   • Songs parsed: {}", stats.songs_parsed);
    println!("   • Charts indexed: {}", stats.charts_indexed);
    println!("   • Total output size: {}", total_size);
    println!("   • Processing time: {}", duration);

    if stats.degraded_songs > 0 {
        println!("⚠️  Songs with degraded fields: {}", stats.degraded_songs);
    }
    if stats.files_skipped > 0 {
        println!("⚠️  Files skipped: {}", stats.files_skipped);
    }

    if !stats.output_sizes.is_empty() {
        println!("\n📁 Output Files:");
        for (filename, size) in &stats.output_sizes {
            println!("   • {}: {}", filename, IndexingStats::format_size(*size));
        }
    }

    println!();
}
