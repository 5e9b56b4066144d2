//! Pass 2: note window location, chart headers, and row counting
//!
//! Chart layout is positional. For a `#NOTES:` marker at line `p`, the four
//! metadata lines sit at `p+1..=p+4`, the radar-values line at `p+5` is
//! skipped, and note data spans `p+6` up to (but not including) the line
//! before the next marker, or up to the last line of the file for the final
//! chart.

use super::stats::ParseStats;
use crate::constants::{defaults, glyphs, NOTES_MARKER, NOTE_DATA_OFFSET};

/// Span of one chart inside the file, in 0-based line indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoteWindow {
    /// Index of the `#NOTES:` marker line
    pub marker: usize,
    /// First note-data line (inclusive)
    pub start: usize,
    /// One past the last note-data line (exclusive)
    pub end: usize,
}

/// The four positional metadata fields following a marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartHeader {
    pub game: String,
    pub stepper: String,
    pub difficulty: String,
    pub rating: u32,
}

/// Aggregate glyph counts for one chart window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoteCounts {
    pub note: u32,
    pub hold: u32,
    pub roll: u32,
    pub mine: u32,
}

/// Locate every chart window by its `#NOTES:` marker.
///
/// Markers are recognized with leading whitespace tolerated. Window ends are
/// derived from the following marker, so the list must be built in one pass
/// over all markers before counting begins.
pub fn locate_note_windows(lines: &[&str]) -> Vec<NoteWindow> {
    let markers: Vec<usize> = lines
        .iter()
        .enumerate()
        .filter(|(_, line)| line.trim_start().starts_with(NOTES_MARKER))
        .map(|(idx, _)| idx)
        .collect();

    markers
        .iter()
        .enumerate()
        .map(|(i, &marker)| {
            let start = marker + NOTE_DATA_OFFSET;
            let end = match markers.get(i + 1) {
                Some(&next_marker) => next_marker.saturating_sub(1),
                None => lines.len().saturating_sub(1),
            };
            NoteWindow { marker, start, end }
        })
        .collect()
}

/// Read the four metadata lines after a marker.
///
/// Failures are field-local: a missing line or an unparseable rating defaults
/// that one field and leaves the rest intact. A blank stepper falls back to
/// the folder-derived stepper before the catch-all default.
pub fn read_chart_header(
    lines: &[&str],
    window: &NoteWindow,
    folder_stepper: Option<&str>,
    stats: &mut ParseStats,
) -> ChartHeader {
    let field = |offset: usize| -> Option<String> {
        lines
            .get(window.marker + offset)
            .map(|line| line.trim().trim_matches(':').to_string())
    };

    let game = match field(1) {
        Some(value) if !value.is_empty() => value,
        _ => {
            stats.field_defaulted("game", "missing or blank game-type line");
            defaults::GAME.to_string()
        }
    };

    let stepper = match field(2) {
        Some(value) if !value.is_empty() => value,
        _ => match folder_stepper {
            Some(fallback) => fallback.to_string(),
            None => {
                stats.field_defaulted("stepper", "blank and no folder fallback");
                defaults::STEPPER.to_string()
            }
        },
    };

    let difficulty = match field(3) {
        Some(value) if !value.is_empty() => value,
        _ => {
            stats.field_defaulted("difficulty", "missing or blank difficulty line");
            defaults::DIFFICULTY.to_string()
        }
    };

    let rating = match field(4) {
        Some(value) => match value.parse::<u32>() {
            Ok(rating) => rating,
            Err(_) => {
                stats.field_defaulted("rating", &format!("'{}' is not a number", value));
                defaults::RATING
            }
        },
        None => {
            stats.field_defaulted("rating", "missing rating line");
            defaults::RATING
        }
    };

    ChartHeader {
        game,
        stepper,
        difficulty,
        rating,
    }
}

/// Count note glyphs over a window's data rows.
///
/// A window whose start lies beyond the file counts as all-zero; the chart
/// record is still emitted. Simultaneous taps, hold heads, and roll heads on
/// one row judge as a single note.
pub fn count_note_rows(lines: &[&str], window: &NoteWindow, stats: &mut ParseStats) -> NoteCounts {
    let mut counts = NoteCounts::default();

    if window.start >= lines.len() {
        stats.truncated_windows += 1;
        stats.push_diagnostic(format!(
            "chart at line {} has no note data (file ends at line {})",
            window.marker + 1,
            lines.len()
        ));
        return counts;
    }

    // Adjacent markers can leave the window empty or inverted
    let end = window.end.min(lines.len());
    if window.start >= end {
        return counts;
    }

    for row in &lines[window.start..end] {
        if is_skippable_row(row) {
            continue;
        }

        let taps = count_glyph(row, glyphs::TAP);
        let holds = count_glyph(row, glyphs::HOLD_HEAD);
        let rolls = count_glyph(row, glyphs::ROLL_HEAD);

        if taps + holds + rolls > 0 {
            counts.note += 1;
        }
        counts.hold += holds;
        counts.roll += rolls;
        counts.mine += count_glyph(row, glyphs::MINE);
    }

    counts
}

/// Rows that carry no countable note data.
///
/// Measure separators, chart terminators, comments, and indented
/// non-data lines are skipped; tail glyphs pass through but count nowhere.
fn is_skippable_row(row: &str) -> bool {
    let Some(first) = row.chars().next() else {
        return true;
    };
    row.starts_with("//") || first == ',' || first == ';' || first.is_whitespace()
}

fn count_glyph(row: &str, glyph: char) -> u32 {
    row.chars().filter(|c| *c == glyph).count() as u32
}
