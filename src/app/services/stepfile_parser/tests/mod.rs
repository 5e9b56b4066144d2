//! Test fixtures and helpers for stepfile parser testing

mod bpm_tests;
mod note_counter_tests;

/// Build stepfile content from individual lines.
pub fn stepfile_from_lines(lines: &[&str]) -> String {
    lines.join("\n")
}

/// A two-chart stepfile with known counts.
///
/// Chart 1 (dance-single, Alice, Hard 9): note=2.
/// Chart 2 (dance-double, blank stepper, Challenge 11): note=2, hold=1,
/// roll=1, mine=1.
pub fn two_chart_stepfile() -> String {
    stepfile_from_lines(&[
        "#TITLE:Candy Galaxy;",
        "#SUBTITLE:Extended Mix;",
        "#ARTIST:DJ Comet;",
        "#BPMS:0.000=150.000,32.000=150.000;",
        "",
        "#NOTES:",
        "     dance-single:",
        "     Alice:",
        "     Hard:",
        "     9:",
        "     0.5,0.5,0.5,0.5,0.5:",
        "1000",
        "0100",
        ",",
        "0033",
        ";",
        "",
        "#NOTES:",
        "     dance-double:",
        "     :",
        "     Challenge:",
        "     11:",
        "     0.5,0.5,0.5,0.5,0.5:",
        "20001000",
        "30000000",
        "M0004000",
        ";",
    ])
}

/// A minimal single-chart stepfile.
pub fn minimal_stepfile() -> String {
    stepfile_from_lines(&[
        "#TITLE:Minimal;",
        "#ARTIST:Nobody;",
        "#BPMS:0.000=120.000;",
        "#NOTES:",
        "     dance-single:",
        "     Bob:",
        "     Easy:",
        "     2:",
        "     0,0,0,0,0:",
        "1000",
        ";",
    ])
}
