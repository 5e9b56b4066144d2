//! Ordered pack-to-songs mapping

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::HashMap;

use crate::app::models::SongRecord;

/// Mapping from pack name to its songs, ordered by first occurrence.
///
/// Serializes as a JSON object whose keys appear in insertion order, so the
/// combined catalog document is stable across runs.
#[derive(Debug, Clone, Default)]
pub struct PackedCollection {
    order: Vec<String>,
    packs: HashMap<String, Vec<SongRecord>>,
}

impl PackedCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one song to its pack, creating the pack on first sight.
    pub fn append_song(&mut self, song: SongRecord) {
        let pack = song.pack.clone();
        if !self.packs.contains_key(&pack) {
            self.order.push(pack.clone());
        }
        self.packs.entry(pack).or_default().push(song);
    }

    /// Insert a whole pack document.
    ///
    /// A colliding pack name is overwritten wholesale but keeps its original
    /// position in the ordering.
    pub fn insert_pack(&mut self, name: String, songs: Vec<SongRecord>) {
        if !self.packs.contains_key(&name) {
            self.order.push(name.clone());
        }
        self.packs.insert(name, songs);
    }

    pub fn get(&self, name: &str) -> Option<&[SongRecord]> {
        self.packs.get(name).map(Vec::as_slice)
    }

    /// Packs in first-occurrence order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[SongRecord])> {
        self.order
            .iter()
            .filter_map(|name| self.packs.get(name).map(|songs| (name.as_str(), songs.as_slice())))
    }

    pub fn pack_count(&self) -> usize {
        self.order.len()
    }

    pub fn song_count(&self) -> usize {
        self.packs.values().map(Vec::len).sum()
    }

    pub fn chart_count(&self) -> usize {
        self.packs
            .values()
            .flat_map(|songs| songs.iter())
            .map(SongRecord::chart_count)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl Serialize for PackedCollection {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.order.len()))?;
        for (name, songs) in self.iter() {
            map.serialize_entry(name, songs)?;
        }
        map.end()
    }
}
