//! Tests for window location, chart headers, and row counting

use crate::app::services::stepfile_parser::note_counter::{
    count_note_rows, locate_note_windows, read_chart_header, NoteWindow,
};
use crate::app::services::stepfile_parser::stats::ParseStats;

use super::two_chart_stepfile;

fn as_lines(source: &str) -> Vec<&str> {
    source.lines().collect()
}

#[test]
fn test_locates_all_markers_in_order() {
    let source = two_chart_stepfile();
    let lines = as_lines(&source);
    let windows = locate_note_windows(&lines);

    assert_eq!(windows.len(), 2);
    assert_eq!(windows[0].marker, 5);
    assert_eq!(windows[1].marker, 17);
    assert!(windows[0].marker < windows[1].marker);
}

#[test]
fn test_window_bounds() {
    let source = two_chart_stepfile();
    let lines = as_lines(&source);
    let windows = locate_note_windows(&lines);

    // Non-final window ends one line before the next marker
    assert_eq!(windows[0].start, 11);
    assert_eq!(windows[0].end, 16);
    // Final window ends at the last line of the file
    assert_eq!(windows[1].start, 23);
    assert_eq!(windows[1].end, lines.len() - 1);
}

#[test]
fn test_indented_marker_recognized() {
    let lines = vec!["#TITLE:x;", "   #NOTES:", "a", "b"];
    let windows = locate_note_windows(&lines);

    assert_eq!(windows.len(), 1);
    assert_eq!(windows[0].marker, 1);
}

#[test]
fn test_no_markers_no_windows() {
    let lines = vec!["#TITLE:x;", "#BPMS:0=120;"];
    assert!(locate_note_windows(&lines).is_empty());
}

#[test]
fn test_header_fields_trimmed_of_colons() {
    let source = two_chart_stepfile();
    let lines = as_lines(&source);
    let windows = locate_note_windows(&lines);
    let mut stats = ParseStats::new();

    let header = read_chart_header(&lines, &windows[0], None, &mut stats);

    assert_eq!(header.game, "dance-single");
    assert_eq!(header.stepper, "Alice");
    assert_eq!(header.difficulty, "Hard");
    assert_eq!(header.rating, 9);
    assert!(stats.is_clean());
}

#[test]
fn test_blank_stepper_uses_folder_fallback() {
    let source = two_chart_stepfile();
    let lines = as_lines(&source);
    let windows = locate_note_windows(&lines);
    let mut stats = ParseStats::new();

    let header = read_chart_header(&lines, &windows[1], Some("NoteWizard"), &mut stats);

    assert_eq!(header.stepper, "NoteWizard");
    assert_eq!(header.game, "dance-double");
    assert_eq!(header.rating, 11);
}

#[test]
fn test_blank_stepper_without_fallback_defaults() {
    let source = two_chart_stepfile();
    let lines = as_lines(&source);
    let windows = locate_note_windows(&lines);
    let mut stats = ParseStats::new();

    let header = read_chart_header(&lines, &windows[1], None, &mut stats);

    assert_eq!(header.stepper, "unspecified");
    assert_eq!(stats.defaulted_fields, 1);
}

#[test]
fn test_bad_rating_defaults_without_disturbing_other_fields() {
    let lines = vec![
        "#NOTES:",
        "     dance-single:",
        "     Carol:",
        "     Medium:",
        "     seven:",
        "     0,0,0,0,0:",
    ];
    let windows = locate_note_windows(&lines);
    let mut stats = ParseStats::new();

    let header = read_chart_header(&lines, &windows[0], None, &mut stats);

    assert_eq!(header.rating, 0);
    assert_eq!(header.game, "dance-single");
    assert_eq!(header.stepper, "Carol");
    assert_eq!(header.difficulty, "Medium");
    assert!(!stats.is_clean());
}

#[test]
fn test_counts_first_window() {
    let source = two_chart_stepfile();
    let lines = as_lines(&source);
    let windows = locate_note_windows(&lines);
    let mut stats = ParseStats::new();

    let counts = count_note_rows(&lines, &windows[0], &mut stats);

    // "1000" and "0100" judge one note each; "0033" carries only tails
    assert_eq!(counts.note, 2);
    assert_eq!(counts.hold, 0);
    assert_eq!(counts.roll, 0);
    assert_eq!(counts.mine, 0);
}

#[test]
fn test_counts_second_window() {
    let source = two_chart_stepfile();
    let lines = as_lines(&source);
    let windows = locate_note_windows(&lines);
    let mut stats = ParseStats::new();

    let counts = count_note_rows(&lines, &windows[1], &mut stats);

    assert_eq!(counts.note, 2);
    assert_eq!(counts.hold, 1);
    assert_eq!(counts.roll, 1);
    assert_eq!(counts.mine, 1);
}

#[test]
fn test_jump_collapses_to_one_note() {
    let lines = vec!["1100", "1241", "0000"];
    let window = NoteWindow {
        marker: 0,
        start: 0,
        end: 3,
    };
    let mut stats = ParseStats::new();

    let counts = count_note_rows(&lines, &window, &mut stats);

    assert_eq!(counts.note, 2);
    assert_eq!(counts.hold, 1);
    assert_eq!(counts.roll, 1);
}

#[test]
fn test_skippable_rows() {
    let lines = vec![
        "",
        "// measure 12",
        ",",
        ";",
        "  1000",
        "1000",
    ];
    let window = NoteWindow {
        marker: 0,
        start: 0,
        end: 6,
    };
    let mut stats = ParseStats::new();

    let counts = count_note_rows(&lines, &window, &mut stats);

    // Only the unindented "1000" row counts
    assert_eq!(counts.note, 1);
}

#[test]
fn test_truncated_window_counts_zero() {
    let lines = vec!["#NOTES:", "     dance-single:", "     A:"];
    let window = NoteWindow {
        marker: 0,
        start: 6,
        end: 2,
    };
    let mut stats = ParseStats::new();

    let counts = count_note_rows(&lines, &window, &mut stats);

    assert_eq!(counts.note, 0);
    assert_eq!(counts.hold, 0);
    assert_eq!(counts.roll, 0);
    assert_eq!(counts.mine, 0);
    assert_eq!(stats.truncated_windows, 1);
}

#[test]
fn test_mines_count_even_without_notes() {
    let lines = vec!["M00M", "0000"];
    let window = NoteWindow {
        marker: 0,
        start: 0,
        end: 2,
    };
    let mut stats = ParseStats::new();

    let counts = count_note_rows(&lines, &window, &mut stats);

    assert_eq!(counts.mine, 2);
    assert_eq!(counts.note, 0);
}

#[test]
fn test_adjacent_markers_yield_empty_window() {
    let mut lines = vec!["#NOTES:", "#NOTES:"];
    for _ in 0..20 {
        lines.push("1000");
    }
    let windows = locate_note_windows(&lines);
    let mut stats = ParseStats::new();

    // First window is inverted (end before start); counts stay zero
    let counts = count_note_rows(&lines, &windows[0], &mut stats);
    assert_eq!(counts.note, 0);

    let counts = count_note_rows(&lines, &windows[1], &mut stats);
    assert!(counts.note > 0);
}
