//! Application constants for the stepfile indexer
//!
//! This module contains the defaults substituted for unparseable fields,
//! the note-glyph alphabet, and the positional layout of `.sm` chart blocks.

// =============================================================================
// Field Defaults
// =============================================================================

/// Default values substituted when a field is absent or unparseable
pub mod defaults {
    /// Song title when no `#TITLE` directive is present and the folder name
    /// carries no recognizable title
    pub const TITLE: &str = "untitled";

    /// Song subtitle when no `#SUBTITLE` directive is present
    pub const SUBTITLE: &str = "";

    /// Song artist when no `#ARTIST` directive is present
    pub const ARTIST: &str = "Unknown Artist";

    /// Chart author credit when the stepper field is blank or missing
    pub const STEPPER: &str = "unspecified";

    /// Difficulty name when the chart header is unparseable
    pub const DIFFICULTY: &str = "Easy";

    /// Step-style identifier when the chart header is unparseable
    pub const GAME: &str = "dance-single";

    /// Difficulty rating when the rating line is unparseable
    pub const RATING: u32 = 0;
}

// =============================================================================
// Note Glyphs
// =============================================================================

/// Note-grid glyphs as defined by the `.sm` format
pub mod glyphs {
    /// A tap note
    pub const TAP: char = '1';

    /// The head of a hold
    pub const HOLD_HEAD: char = '2';

    /// The tail terminating a hold or roll (contributes to no counter)
    pub const TAIL: char = '3';

    /// The head of a roll
    pub const ROLL_HEAD: char = '4';

    /// A mine
    pub const MINE: char = 'M';
}

// =============================================================================
// Chart Block Layout
// =============================================================================

/// Marker opening a chart block
pub const NOTES_MARKER: &str = "#NOTES:";

/// Offset from a `#NOTES:` marker to the first note-grid row.
///
/// The marker is followed by five sub-field lines (step style, stepper
/// credit, difficulty name, difficulty rating, radar values) before note
/// data begins. Only the first four are read; the radar line is skipped.
pub const NOTE_DATA_OFFSET: usize = 6;

// =============================================================================
// Output Layout
// =============================================================================

/// Name of the per-pack JSON output directory inside the Songs directory
pub const JSONS_DIR_NAME: &str = "jsons";

/// File name of the combined all-packs JSON document
pub const COMBINED_DOCUMENT_NAME: &str = "allSongPacksJson.json";

/// File extension (lowercased) of stepfiles to index
pub const STEPFILE_EXTENSION: &str = "sm";
