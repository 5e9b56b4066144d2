//! Stepfile Indexer Library
//!
//! A Rust library for indexing StepMania song packs by parsing `.sm` stepfiles
//! into per-pack JSON catalog documents.
//!
//! This library provides tools for:
//! - Parsing `.sm` stepfiles with positional chart-window handling
//! - Extracting song metadata (title, subtitle, artist, BPM range)
//! - Counting judged notes, holds, rolls and mines per difficulty chart
//! - Grouping songs by pack with globally unique chart identifiers
//! - Writing per-pack and combined JSON catalog documents
//! - Best-effort error recovery that never drops a song record

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod catalog_writer;
        pub mod pack_aggregator;
        pub mod stepfile_parser;
    }
    pub mod adapters {
        pub mod filesystem;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{BpmRange, ChartRecord, SongRecord};
pub use config::Config;

/// Result type alias for the stepfile indexer
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for stepfile indexing operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Data validation error
    #[error("data validation error: {message}")]
    DataValidation { message: String },

    /// Configuration error
    #[error("configuration error: {message}")]
    Configuration { message: String },

    /// File not found
    #[error("file not found: {path}")]
    FileNotFound { path: String },

    /// Directory traversal error
    #[error("directory traversal error: {message}")]
    DirectoryTraversal {
        message: String,
        #[source]
        source: walkdir::Error,
    },

    /// JSON serialization error
    #[error("JSON serialization error: {message}")]
    JsonSerialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Pack aggregation error
    #[error("aggregation error: {message}")]
    Aggregation { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a data validation error
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a directory traversal error
    pub fn directory_traversal(message: impl Into<String>, source: walkdir::Error) -> Self {
        Self::DirectoryTraversal {
            message: message.into(),
            source,
        }
    }

    /// Create a JSON serialization error
    pub fn json_serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::JsonSerialization {
            message: message.into(),
            source,
        }
    }

    /// Create an aggregation error
    pub fn aggregation(message: impl Into<String>) -> Self {
        Self::Aggregation {
            message: message.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<walkdir::Error> for Error {
    fn from(error: walkdir::Error) -> Self {
        Self::DirectoryTraversal {
            message: "directory traversal failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::JsonSerialization {
            message: "JSON serialization failed".to_string(),
            source: error,
        }
    }
}
