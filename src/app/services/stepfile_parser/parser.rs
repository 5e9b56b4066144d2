//! Two-pass stepfile parser
//!
//! Pass 1 scans header directives; pass 2 locates `#NOTES:` windows and
//! counts note glyphs per chart. Every file yields exactly one song record,
//! however degraded; only an unreadable file is an error.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use super::bpm::parse_bpm_string;
use super::directives::scan_directives;
use super::folder_name::{song_title_from_folder, stepper_from_folder};
use super::note_counter::{count_note_rows, locate_note_windows, read_chart_header};
use super::stats::{ParseOutcome, ParseStats};
use crate::app::models::{BpmRange, ChartRecord, SongRecord};
use crate::constants::defaults;
use crate::{Error, Result};

/// Parser for StepMania `.sm` chart files.
///
/// Stateless between files; the song-folder name and pack name are supplied
/// per call because they feed the fallback chain and the output record.
#[derive(Debug, Default)]
pub struct StepfileParser;

impl StepfileParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse a stepfile on disk.
    ///
    /// The file is read as raw bytes and decoded lossily; chart files predate
    /// any encoding convention and a stray byte must not drop a song.
    pub fn parse_file(
        &self,
        path: &Path,
        folder_name: &str,
        pack_name: &str,
    ) -> Result<ParseOutcome> {
        let bytes = fs::read(path).map_err(|e| {
            Error::io(format!("failed to read stepfile {}", path.display()), e)
        })?;
        let source = String::from_utf8_lossy(&bytes);

        debug!(file = %path.display(), bytes = bytes.len(), "parsing stepfile");
        Ok(self.parse_source(&source, folder_name, pack_name))
    }

    /// Parse stepfile content already in memory.
    ///
    /// Infallible: the degradation rules guarantee a record for any input,
    /// down to the empty string.
    pub fn parse_source(&self, source: &str, folder_name: &str, pack_name: &str) -> ParseOutcome {
        let lines: Vec<&str> = source.lines().collect();
        let mut stats = ParseStats::new();

        let header = scan_directives(&lines, &mut stats);

        let title = header
            .title
            .or_else(|| song_title_from_folder(folder_name))
            .unwrap_or_else(|| {
                stats.field_defaulted("title", "no directive and no folder pattern");
                defaults::TITLE.to_string()
            });
        let subtitle = header.subtitle.unwrap_or_else(|| defaults::SUBTITLE.to_string());
        let artist = header.artist.unwrap_or_else(|| {
            stats.field_defaulted("artist", "no #ARTIST directive");
            defaults::ARTIST.to_string()
        });

        let bpm = self.resolve_bpm(header.bpm_raw.as_deref(), &mut stats);
        let charts = self.extract_charts(&lines, folder_name, &mut stats);

        if !stats.is_clean() {
            warn!(
                folder = folder_name,
                degradations = stats.diagnostics.len(),
                "stepfile parsed with degraded fields"
            );
        }

        ParseOutcome {
            song: SongRecord {
                title,
                subtitle,
                artist,
                bpm,
                charts,
                pack: pack_name.to_string(),
            },
            stats,
        }
    }

    /// Reduce the raw tempo map, degrading to a zero tempo on any failure.
    fn resolve_bpm(&self, bpm_raw: Option<&str>, stats: &mut ParseStats) -> BpmRange {
        match bpm_raw {
            Some(raw) => match parse_bpm_string(raw) {
                Ok(range) => range,
                Err(e) => {
                    stats.field_defaulted("bpm", &format!("unparseable tempo map: {}", e));
                    BpmRange::Constant(0)
                }
            },
            None => {
                stats.field_defaulted("bpm", "no #BPMS directive");
                BpmRange::Constant(0)
            }
        }
    }

    fn extract_charts(
        &self,
        lines: &[&str],
        folder_name: &str,
        stats: &mut ParseStats,
    ) -> Vec<ChartRecord> {
        let folder_stepper = stepper_from_folder(folder_name);
        let windows = locate_note_windows(lines);
        stats.charts_found = windows.len();

        windows
            .iter()
            .map(|window| {
                let header =
                    read_chart_header(lines, window, folder_stepper.as_deref(), stats);
                let counts = count_note_rows(lines, window, stats);

                ChartRecord {
                    stepper: header.stepper,
                    difficulty: header.difficulty,
                    game: header.game,
                    rating: header.rating,
                    mine: counts.mine,
                    note: counts.note,
                    roll: counts.roll,
                    hold: counts.hold,
                    id_num: None,
                }
            })
            .collect()
    }
}
