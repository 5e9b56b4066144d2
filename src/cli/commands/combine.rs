//! Combine command implementation
//!
//! Merges already-written per-pack JSON documents into the combined catalog,
//! re-stamping chart identifiers in file order.

use super::shared::setup_logging;
use crate::app::models::SongRecord;
use crate::app::services::catalog_writer::{CatalogWriter, WriterConfig, combined_document_path};
use crate::app::services::pack_aggregator::PackedCollection;
use crate::cli::args::CombineArgs;
use crate::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use walkdir::WalkDir;

/// Combine command runner
pub fn run_combine(args: CombineArgs) -> Result<u64> {
    setup_logging(args.get_log_level(), false)?;
    args.validate()?;

    let output_path = args
        .output_file
        .clone()
        .unwrap_or_else(|| combined_document_path(&args.jsons_path));

    let collection = load_pack_documents(&args.jsons_path, &output_path)?;
    if collection.is_empty() {
        return Err(Error::aggregation(format!(
            "no pack documents found in {}",
            args.jsons_path.display()
        )));
    }

    let writer = CatalogWriter::new(WriterConfig {
        pretty: !args.compact,
    });
    let size = writer.write_combined_document(&collection, &output_path)?;

    println!(
        "Combined {} packs ({} songs, {} charts) into {}",
        collection.pack_count(),
        collection.song_count(),
        collection.chart_count(),
        output_path.display()
    );

    Ok(size)
}

/// Load every per-pack document in a directory, sorted by file name.
///
/// The combined output document is excluded from the inputs so reruns are
/// stable. Unreadable or malformed documents are skipped with a warning.
/// Chart identifiers are re-stamped sequentially across the merged set.
pub fn load_pack_documents(jsons_path: &Path, output_path: &Path) -> Result<PackedCollection> {
    let mut files: Vec<PathBuf> = WalkDir::new(jsons_path)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|path| {
            path.extension().and_then(|ext| ext.to_str()) == Some("json") && path != output_path
        })
        .collect();
    files.sort();

    let mut collection = PackedCollection::new();
    let mut next_id: u64 = 0;

    for path in &files {
        let pack_name = match path.file_stem() {
            Some(stem) => stem.to_string_lossy().to_string(),
            None => continue,
        };

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                warn!("Skipping unreadable document {}: {}", path.display(), e);
                continue;
            }
        };

        let mut songs: Vec<SongRecord> = match serde_json::from_str(&content) {
            Ok(songs) => songs,
            Err(e) => {
                warn!("Skipping malformed document {}: {}", path.display(), e);
                continue;
            }
        };

        if songs.is_empty() {
            warn!("Skipping empty pack document {}", path.display());
            continue;
        }

        for song in &mut songs {
            for chart in &mut song.charts {
                chart.id_num = Some(next_id);
                next_id += 1;
            }
        }

        info!(pack = %pack_name, songs = songs.len(), "merged pack document");
        collection.insert_pack(pack_name, songs);
    }

    Ok(collection)
}
