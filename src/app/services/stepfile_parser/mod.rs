//! StepMania `.sm` stepfile parser
//!
//! Two-pass, line-indexed, and deliberately tolerant: header directives are
//! matched per line, chart metadata is positional after each `#NOTES:`
//! marker, and every degradation substitutes a default instead of failing
//! the file.

pub mod bpm;
pub mod directives;
pub mod folder_name;
pub mod note_counter;
pub mod parser;
pub mod stats;

pub use parser::StepfileParser;
pub use stats::{ParseOutcome, ParseStats};

#[cfg(test)]
pub mod tests;
