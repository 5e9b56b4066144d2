//! Catalog document writer
//!
//! Persists the aggregated collection as one JSON array per pack plus an
//! optional combined object keyed by pack name.

pub mod writer;

pub use writer::{combined_document_path, pack_file_name, CatalogWriter, WriterConfig};
