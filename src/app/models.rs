//! Data models for stepfile indexing
//!
//! This module contains the core data structures representing a parsed song
//! and its difficulty charts, matching the persisted JSON catalog format:
//! song objects carry `title, subtitle, artist, bpm, charts, pack`; chart
//! objects carry `stepper, difficulty, game, rating, mine, note, roll, hold,
//! idNum`.

use crate::{Error, Result};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

// =============================================================================
// BPM Range
// =============================================================================

/// Tempo of a song, reduced from its declared tempo map.
///
/// Serialized as a one-element array `[bpm]` for a constant tempo, or a
/// two-element array `[min, max]` when the rounded extremes differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BpmRange {
    /// All rounded tempo-map values are equal
    Constant(i32),
    /// Rounded extremes differ; `min < max` holds by construction
    Range { min: i32, max: i32 },
}

impl BpmRange {
    /// Reduce a list of per-change rounded BPM values to a range.
    ///
    /// Returns `None` for an empty list. Equal rounded extremes collapse to
    /// [`BpmRange::Constant`].
    pub fn from_rounded_values(values: &[i32]) -> Option<Self> {
        let min = *values.iter().min()?;
        let max = *values.iter().max()?;
        if min == max {
            Some(BpmRange::Constant(min))
        } else {
            Some(BpmRange::Range { min, max })
        }
    }

    /// Lowest rounded BPM in the range
    pub fn min(&self) -> i32 {
        match self {
            BpmRange::Constant(v) => *v,
            BpmRange::Range { min, .. } => *min,
        }
    }

    /// Highest rounded BPM in the range
    pub fn max(&self) -> i32 {
        match self {
            BpmRange::Constant(v) => *v,
            BpmRange::Range { max, .. } => *max,
        }
    }

    /// Validate the range ordering invariant
    pub fn validate(&self) -> Result<()> {
        if let BpmRange::Range { min, max } = self {
            if min >= max {
                return Err(Error::data_validation(format!(
                    "BPM range [{}, {}] must have min < max",
                    min, max
                )));
            }
        }
        Ok(())
    }
}

impl fmt::Display for BpmRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BpmRange::Constant(v) => write!(f, "{}", v),
            BpmRange::Range { min, max } => write!(f, "{}-{}", min, max),
        }
    }
}

impl Serialize for BpmRange {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            BpmRange::Constant(v) => {
                let mut seq = serializer.serialize_seq(Some(1))?;
                seq.serialize_element(v)?;
                seq.end()
            }
            BpmRange::Range { min, max } => {
                let mut seq = serializer.serialize_seq(Some(2))?;
                seq.serialize_element(min)?;
                seq.serialize_element(max)?;
                seq.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for BpmRange {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let values = Vec::<i32>::deserialize(deserializer)?;
        match values.as_slice() {
            [v] => Ok(BpmRange::Constant(*v)),
            [min, max] if min < max => Ok(BpmRange::Range {
                min: *min,
                max: *max,
            }),
            _ => Err(serde::de::Error::custom(
                "bpm must be [bpm] or [min, max] with min < max",
            )),
        }
    }
}

// =============================================================================
// Chart Record
// =============================================================================

/// A single charted difficulty with its aggregate note counts.
///
/// Counts are unsigned, so the non-negativity invariant holds by type. A
/// fully unparseable chart window yields an all-zero record rather than a
/// missing one. `id_num` is absent until the aggregator stamps it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartRecord {
    /// Credited chart author
    pub stepper: String,

    /// Difficulty name (e.g., "Hard", "Challenge")
    pub difficulty: String,

    /// Step-style identifier (e.g., "dance-single")
    pub game: String,

    /// Numeric difficulty rating
    pub rating: u32,

    /// Mine glyph count over all note rows
    pub mine: u32,

    /// Judged note count; simultaneous taps in one row collapse to one
    pub note: u32,

    /// Roll-head glyph count over all note rows
    pub roll: u32,

    /// Hold-head glyph count over all note rows
    pub hold: u32,

    /// Batch-global chart identifier, assigned by the pack aggregator
    #[serde(rename = "idNum", skip_serializing_if = "Option::is_none", default)]
    pub id_num: Option<u64>,
}

impl ChartRecord {
    /// Check whether all four counters are zero
    pub fn is_empty(&self) -> bool {
        self.note == 0 && self.hold == 0 && self.roll == 0 && self.mine == 0
    }
}

// =============================================================================
// Song Record
// =============================================================================

/// One indexed song: metadata plus its charts in file order.
///
/// A record is always produced per stepfile, possibly heavily defaulted; no
/// parse failure drops a song.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SongRecord {
    /// Song title from `#TITLE`, or the folder-derived fallback
    pub title: String,

    /// Song subtitle from `#SUBTITLE`
    pub subtitle: String,

    /// Song artist from `#ARTIST`
    pub artist: String,

    /// Reduced tempo range from `#BPMS`
    pub bpm: BpmRange,

    /// Difficulty charts in order of appearance in the stepfile
    pub charts: Vec<ChartRecord>,

    /// Name of the containing song pack
    pub pack: String,
}

impl SongRecord {
    /// Number of charted difficulties
    pub fn chart_count(&self) -> usize {
        self.charts.len()
    }

    /// Validate record invariants
    pub fn validate(&self) -> Result<()> {
        self.bpm.validate()
    }
}
