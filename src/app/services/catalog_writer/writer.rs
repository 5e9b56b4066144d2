//! JSON catalog document output

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::app::services::pack_aggregator::PackedCollection;
use crate::constants::COMBINED_DOCUMENT_NAME;
use crate::{Error, Result};

/// Output formatting options for catalog documents.
#[derive(Debug, Clone, Copy)]
pub struct WriterConfig {
    /// Pretty-print JSON output
    pub pretty: bool,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

/// Writes per-pack and combined catalog documents.
pub struct CatalogWriter {
    config: WriterConfig,
}

impl CatalogWriter {
    pub fn new(config: WriterConfig) -> Self {
        Self { config }
    }

    /// Clear and recreate the output directory.
    ///
    /// Stale pack documents from a previous run would otherwise survive a
    /// pack rename and pollute the combined catalog.
    pub fn prepare_output_dir(&self, output_dir: &Path) -> Result<()> {
        if output_dir.exists() {
            debug!(dir = %output_dir.display(), "clearing existing output directory");
            fs::remove_dir_all(output_dir).map_err(|e| {
                Error::io(
                    format!("failed to clear output directory {}", output_dir.display()),
                    e,
                )
            })?;
        }
        fs::create_dir_all(output_dir).map_err(|e| {
            Error::io(
                format!("failed to create output directory {}", output_dir.display()),
                e,
            )
        })?;
        Ok(())
    }

    /// Write one `<pack>.json` document per pack.
    ///
    /// Returns the written file names with their sizes in bytes.
    pub fn write_pack_documents(
        &self,
        collection: &PackedCollection,
        output_dir: &Path,
    ) -> Result<Vec<(String, u64)>> {
        let mut written = Vec::with_capacity(collection.pack_count());

        for (pack_name, songs) in collection.iter() {
            let file_name = pack_file_name(pack_name);
            let path = output_dir.join(&file_name);
            let size = self.write_document(&path, &songs)?;

            debug!(file = %path.display(), bytes = size, "wrote pack document");
            written.push((file_name, size));
        }

        info!(packs = written.len(), "pack documents written");
        Ok(written)
    }

    /// Write the combined document keyed by pack name.
    pub fn write_combined_document(
        &self,
        collection: &PackedCollection,
        output_path: &Path,
    ) -> Result<u64> {
        let size = self.write_document(output_path, collection)?;
        info!(file = %output_path.display(), bytes = size, "combined document written");
        Ok(size)
    }

    fn write_document<T: serde::Serialize>(&self, path: &Path, value: &T) -> Result<u64> {
        let file = File::create(path).map_err(|e| {
            Error::io(format!("failed to create {}", path.display()), e)
        })?;
        let mut writer = BufWriter::new(file);

        if self.config.pretty {
            serde_json::to_writer_pretty(&mut writer, value)
        } else {
            serde_json::to_writer(&mut writer, value)
        }
        .map_err(|e| Error::json_serialization(format!("failed to serialize {}", path.display()), e))?;

        writer
            .flush()
            .map_err(|e| Error::io(format!("failed to flush {}", path.display()), e))?;

        let size = fs::metadata(path)
            .map_err(|e| Error::io(format!("failed to stat {}", path.display()), e))?
            .len();
        Ok(size)
    }
}

/// Default path of the combined document inside an output directory.
pub fn combined_document_path(output_dir: &Path) -> PathBuf {
    output_dir.join(COMBINED_DOCUMENT_NAME)
}

/// File name for a pack document, with path separators neutralized.
pub fn pack_file_name(pack_name: &str) -> String {
    let safe: String = pack_name
        .chars()
        .map(|c| if c == '/' || c == '\\' { '_' } else { c })
        .collect();
    format!("{}.json", safe)
}
