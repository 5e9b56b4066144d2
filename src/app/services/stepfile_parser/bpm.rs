//! BPM tempo-map reduction

use crate::app::models::BpmRange;
use crate::{Error, Result};

/// Reduce a raw `#BPMS` value to a [`BpmRange`].
///
/// The value is a comma-separated list of `offset=bpm` changes. Each bpm is
/// parsed as a float and rounded to the nearest integer; equal rounded
/// extremes collapse to a constant tempo.
pub fn parse_bpm_string(raw: &str) -> Result<BpmRange> {
    let mut rounded = Vec::new();

    for change in raw.split(',') {
        let value = change.split('=').nth(1).ok_or_else(|| {
            Error::data_validation(format!("BPM change '{}' has no '=' separator", change.trim()))
        })?;

        let bpm: f64 = value.trim().parse().map_err(|_| {
            Error::data_validation(format!("BPM value '{}' is not a number", value.trim()))
        })?;

        rounded.push(bpm.round() as i32);
    }

    BpmRange::from_rounded_values(&rounded)
        .ok_or_else(|| Error::data_validation("empty BPM tempo map".to_string()))
}
