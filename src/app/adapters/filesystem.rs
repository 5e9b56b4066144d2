//! Filesystem discovery for song packs and stepfiles
//!
//! A Songs directory contains pack directories; each pack contains song
//! folders; each song folder carries one or more `.sm` files of which the
//! first (by name) is indexed. Traversal is sorted by name throughout so
//! identifier assignment is reproducible.

use std::path::{Path, PathBuf};

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;
use walkdir::WalkDir;

use crate::constants::{JSONS_DIR_NAME, STEPFILE_EXTENSION};
use crate::{Error, Result};

static STEPFILE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"(?i)\.{}$", STEPFILE_EXTENSION)).unwrap());

/// One pack directory inside the Songs directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackEntry {
    pub name: String,
    pub path: PathBuf,
}

/// One song folder with its chosen stepfile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongEntry {
    pub folder_name: String,
    pub stepfile_path: PathBuf,
}

/// Whether a file name looks like a stepfile (case-insensitive extension).
pub fn is_stepfile(file_name: &str) -> bool {
    STEPFILE_RE.is_match(file_name)
}

/// Enumerate pack directories directly under the Songs directory, sorted.
///
/// The output directory (`jsons`) lives inside the Songs directory in the
/// default layout and must not be mistaken for a pack.
pub fn discover_packs(songs_path: &Path) -> Result<Vec<PackEntry>> {
    if !songs_path.is_dir() {
        return Err(Error::file_not_found(songs_path.display().to_string()));
    }

    let mut packs = Vec::new();
    for entry in WalkDir::new(songs_path)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        if !entry.file_type().is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_string();
        if name == JSONS_DIR_NAME {
            continue;
        }
        packs.push(PackEntry {
            name,
            path: entry.into_path(),
        });
    }

    debug!(packs = packs.len(), dir = %songs_path.display(), "discovered packs");
    Ok(packs)
}

/// Enumerate song folders inside a pack, sorted, keeping the first stepfile
/// of each folder.
///
/// Folders without any stepfile are skipped silently; packs commonly hold
/// stray folders for banners or courses.
pub fn discover_stepfiles(pack_path: &Path) -> Result<Vec<SongEntry>> {
    if !pack_path.is_dir() {
        return Err(Error::file_not_found(pack_path.display().to_string()));
    }

    let mut songs = Vec::new();
    for entry in WalkDir::new(pack_path)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        if !entry.file_type().is_dir() {
            continue;
        }

        let folder_name = entry.file_name().to_string_lossy().to_string();
        if let Some(stepfile_path) = first_stepfile(entry.path())? {
            songs.push(SongEntry {
                folder_name,
                stepfile_path,
            });
        }
    }

    Ok(songs)
}

fn first_stepfile(song_folder: &Path) -> Result<Option<PathBuf>> {
    for entry in WalkDir::new(song_folder)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        if entry.file_type().is_file() && is_stepfile(&entry.file_name().to_string_lossy()) {
            return Ok(Some(entry.into_path()));
        }
    }
    Ok(None)
}
