//! Test helpers for pack aggregation

mod aggregator_tests;

use crate::app::models::{BpmRange, ChartRecord, SongRecord};

/// Build a song with the given number of unstamped charts.
pub fn song_with_charts(title: &str, pack: &str, chart_count: usize) -> SongRecord {
    let charts = (0..chart_count)
        .map(|i| ChartRecord {
            stepper: "S".to_string(),
            difficulty: format!("D{}", i),
            game: "dance-single".to_string(),
            rating: i as u32,
            mine: 0,
            note: 10,
            roll: 0,
            hold: 0,
            id_num: None,
        })
        .collect();

    SongRecord {
        title: title.to_string(),
        subtitle: "".to_string(),
        artist: "A".to_string(),
        bpm: BpmRange::Constant(140),
        charts,
        pack: pack.to_string(),
    }
}
