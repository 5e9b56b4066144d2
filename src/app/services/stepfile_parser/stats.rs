//! Parse statistics and diagnostics for stepfile processing

use crate::app::models::SongRecord;

/// Outcome of parsing a single stepfile: the record plus its statistics.
#[derive(Debug, Clone)]
pub struct ParseOutcome {
    pub song: SongRecord,
    pub stats: ParseStats,
}

/// Statistics collected while parsing one stepfile.
///
/// Diagnostics record every degradation (defaulted field, skipped directive,
/// truncated window) without failing the parse.
#[derive(Debug, Clone, Default)]
pub struct ParseStats {
    /// Directive lines successfully matched in pass 1
    pub directive_lines: usize,
    /// `#NOTES:` markers located in pass 2
    pub charts_found: usize,
    /// Metadata fields replaced by their defaults
    pub defaulted_fields: usize,
    /// Chart windows whose note data fell outside the file
    pub truncated_windows: usize,
    /// Human-readable degradation messages
    pub diagnostics: Vec<String>,
}

impl ParseStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a degradation message
    pub fn push_diagnostic(&mut self, message: impl Into<String>) {
        self.diagnostics.push(message.into());
    }

    /// Record a field that fell back to its default
    pub fn field_defaulted(&mut self, field: &str, reason: &str) {
        self.defaulted_fields += 1;
        self.push_diagnostic(format!("{} defaulted: {}", field, reason));
    }

    /// True when the file parsed without any degradation
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}
