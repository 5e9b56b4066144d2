//! Tests for tempo-map reduction

use crate::app::models::BpmRange;
use crate::app::services::stepfile_parser::bpm::parse_bpm_string;

#[test]
fn test_single_change_is_constant() {
    assert_eq!(
        parse_bpm_string("0.000=150.000").unwrap(),
        BpmRange::Constant(150)
    );
}

#[test]
fn test_equal_changes_collapse_to_constant() {
    assert_eq!(
        parse_bpm_string("0.000=150.000,64.000=150.000").unwrap(),
        BpmRange::Constant(150)
    );
}

#[test]
fn test_differing_changes_give_range() {
    assert_eq!(
        parse_bpm_string("0.000=120.000,32.000=180.000,64.000=150.000").unwrap(),
        BpmRange::Range { min: 120, max: 180 }
    );
}

#[test]
fn test_values_rounded_per_change() {
    // 149.6 rounds up, 149.4 rounds down
    assert_eq!(
        parse_bpm_string("0=149.6,8=149.4").unwrap(),
        BpmRange::Range { min: 149, max: 150 }
    );
}

#[test]
fn test_rounding_collapses_near_equal_values() {
    assert_eq!(
        parse_bpm_string("0=150.1,8=149.9").unwrap(),
        BpmRange::Constant(150)
    );
}

#[test]
fn test_missing_separator_is_error() {
    assert!(parse_bpm_string("150.000").is_err());
}

#[test]
fn test_non_numeric_value_is_error() {
    assert!(parse_bpm_string("0.000=fast").is_err());
}

#[test]
fn test_sentinel_zero_map() {
    assert_eq!(parse_bpm_string("0=0").unwrap(), BpmRange::Constant(0));
}
