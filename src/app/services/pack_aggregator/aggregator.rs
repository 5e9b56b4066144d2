//! Chart identifier assignment and pack grouping

use tracing::{debug, warn};

use super::collection::PackedCollection;
use super::stats::AggregationStats;
use crate::app::models::SongRecord;

/// Groups parsed songs by pack and stamps every chart with a batch-global
/// identifier.
///
/// Identifiers start at 0 and increase by one per chart in the order songs
/// are added, so a single aggregator instance must own a whole batch.
/// Feeding songs in a fixed order makes the assignment deterministic.
#[derive(Debug, Default)]
pub struct PackAggregator {
    next_id: u64,
    collection: PackedCollection,
    stats: AggregationStats,
}

impl PackAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stamp a song's charts and group it into its pack.
    ///
    /// A song with an empty pack name is dropped with a warning; its charts
    /// receive no identifiers.
    pub fn add_song(&mut self, mut song: SongRecord) {
        if song.pack.is_empty() {
            warn!(title = %song.title, "skipping song with empty pack name");
            self.stats.songs_skipped += 1;
            return;
        }

        for chart in &mut song.charts {
            chart.id_num = Some(self.next_id);
            self.next_id += 1;
            self.stats.charts_stamped += 1;
        }

        debug!(
            title = %song.title,
            pack = %song.pack,
            charts = song.charts.len(),
            "grouped song"
        );
        self.stats.songs_grouped += 1;
        self.collection.append_song(song);
    }

    /// Next identifier to be assigned
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    pub fn stats(&self) -> &AggregationStats {
        &self.stats
    }

    /// Consume the aggregator, yielding the grouped collection and counters.
    pub fn finish(self) -> (PackedCollection, AggregationStats) {
        (self.collection, self.stats)
    }
}
