//! Folder-name fallback extraction
//!
//! Song folders in the wild are commonly named `Title [stepper]`,
//! `Title (stepper)` or `Title {stepper}`. These yield fallback values used
//! only when the stepfile itself leaves the title directive out or a chart's
//! stepper field blank.

use regex::Regex;
use std::sync::LazyLock;

static BRACKET_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(.*)\[(.*)\]").unwrap());
static PAREN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(.*)\((.*)\)").unwrap());
static BRACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(.*)\{(.*)\}").unwrap());

// Precedence when several bracket styles appear: {} over () over [].
fn capture(folder_name: &str) -> Option<(String, String)> {
    for re in [&*BRACE_RE, &*PAREN_RE, &*BRACKET_RE] {
        if let Some(caps) = re.captures(folder_name) {
            return Some((caps[1].to_string(), caps[2].to_string()));
        }
    }
    None
}

/// Title portion of a `Title [stepper]`-style folder name, trimmed.
pub fn song_title_from_folder(folder_name: &str) -> Option<String> {
    capture(folder_name).map(|(title, _)| title.trim().to_string())
}

/// Stepper portion of a `Title [stepper]`-style folder name.
pub fn stepper_from_folder(folder_name: &str) -> Option<String> {
    capture(folder_name).map(|(_, stepper)| stepper)
}
