//! Tests for identifier assignment and grouping

use crate::app::services::pack_aggregator::PackAggregator;

use super::song_with_charts;

#[test]
fn test_ids_are_a_bijection_from_zero() {
    let mut aggregator = PackAggregator::new();
    aggregator.add_song(song_with_charts("a", "P1", 3));
    aggregator.add_song(song_with_charts("b", "P2", 2));
    aggregator.add_song(song_with_charts("c", "P1", 1));

    let (collection, stats) = aggregator.finish();
    assert_eq!(stats.charts_stamped, 6);

    let mut ids: Vec<u64> = collection
        .iter()
        .flat_map(|(_, songs)| songs.iter())
        .flat_map(|song| song.charts.iter())
        .map(|chart| chart.id_num.unwrap())
        .collect();
    ids.sort_unstable();

    assert_eq!(ids, vec![0, 1, 2, 3, 4, 5]);
}

#[test]
fn test_ids_follow_insertion_order() {
    let mut aggregator = PackAggregator::new();
    aggregator.add_song(song_with_charts("first", "P", 2));
    aggregator.add_song(song_with_charts("second", "P", 2));

    let (collection, _) = aggregator.finish();
    let songs = collection.get("P").unwrap();

    assert_eq!(songs[0].charts[0].id_num, Some(0));
    assert_eq!(songs[0].charts[1].id_num, Some(1));
    assert_eq!(songs[1].charts[0].id_num, Some(2));
    assert_eq!(songs[1].charts[1].id_num, Some(3));
}

#[test]
fn test_assignment_is_deterministic() {
    let run = || {
        let mut aggregator = PackAggregator::new();
        for (title, pack, charts) in [("x", "A", 2), ("y", "B", 1), ("z", "A", 3)] {
            aggregator.add_song(song_with_charts(title, pack, charts));
        }
        let (collection, _) = aggregator.finish();
        serde_json::to_string(&collection).unwrap()
    };

    assert_eq!(run(), run());
}

#[test]
fn test_empty_pack_name_is_skipped() {
    let mut aggregator = PackAggregator::new();
    aggregator.add_song(song_with_charts("orphan", "", 2));
    aggregator.add_song(song_with_charts("kept", "P", 1));

    let (collection, stats) = aggregator.finish();

    assert_eq!(stats.songs_skipped, 1);
    assert_eq!(stats.songs_grouped, 1);
    assert_eq!(collection.song_count(), 1);
    // Skipped songs consume no identifiers
    assert_eq!(collection.get("P").unwrap()[0].charts[0].id_num, Some(0));
}

#[test]
fn test_chartless_song_is_grouped_without_ids() {
    let mut aggregator = PackAggregator::new();
    aggregator.add_song(song_with_charts("empty", "P", 0));
    aggregator.add_song(song_with_charts("full", "P", 1));

    assert_eq!(aggregator.next_id(), 1);
    let (collection, stats) = aggregator.finish();

    assert_eq!(stats.songs_grouped, 2);
    assert_eq!(collection.get("P").unwrap()[1].charts[0].id_num, Some(0));
}
