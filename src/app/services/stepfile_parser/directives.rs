//! Pass 1: header directive scanning
//!
//! Stepfile headers carry `#KEY:value;` directives. Only the four that feed
//! the catalog are extracted; anything else on a `#` line is ignored, and an
//! individually malformed directive never aborts the scan.

use super::stats::ParseStats;
use regex::Regex;
use std::sync::LazyLock;

static TITLE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#TITLE:(.*);$").unwrap());
static SUBTITLE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#SUBTITLE:(.*);$").unwrap());
static ARTIST_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#ARTIST:(.*);$").unwrap());
static BPMS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#BPMS:(.*);$").unwrap());

/// Song-level metadata extracted from the directive lines.
///
/// Every field is optional here; the parser applies defaults and folder
/// fallbacks afterwards.
#[derive(Debug, Clone, Default)]
pub struct SongHeader {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub artist: Option<String>,
    /// Raw `#BPMS` value, still in `offset=bpm,offset=bpm` form
    pub bpm_raw: Option<String>,
}

/// Scan every line for the four catalog directives.
///
/// Later occurrences of a directive overwrite earlier ones, matching a
/// full-file scan that keeps assigning on each match.
pub fn scan_directives(lines: &[&str], stats: &mut ParseStats) -> SongHeader {
    let mut header = SongHeader::default();

    for line in lines {
        if !line.starts_with('#') {
            continue;
        }

        if let Some(caps) = TITLE_RE.captures(line) {
            header.title = Some(caps[1].to_string());
            stats.directive_lines += 1;
        } else if let Some(caps) = SUBTITLE_RE.captures(line) {
            header.subtitle = Some(caps[1].to_string());
            stats.directive_lines += 1;
        } else if let Some(caps) = ARTIST_RE.captures(line) {
            header.artist = Some(caps[1].to_string());
            stats.directive_lines += 1;
        } else if let Some(caps) = BPMS_RE.captures(line) {
            header.bpm_raw = Some(caps[1].to_string());
            stats.directive_lines += 1;
        }
    }

    header
}
