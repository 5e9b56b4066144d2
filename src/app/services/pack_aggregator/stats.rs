//! Aggregation statistics

/// Counters for one aggregation batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AggregationStats {
    /// Songs grouped into a pack
    pub songs_grouped: usize,
    /// Songs rejected for an empty pack name
    pub songs_skipped: usize,
    /// Charts stamped with an identifier
    pub charts_stamped: u64,
}

impl AggregationStats {
    pub fn new() -> Self {
        Self::default()
    }
}
