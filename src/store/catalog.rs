//! Song catalog, loaded from the songs file

use crate::model::Song;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// The full set of known songs.
///
/// Loaded once at startup and immutable afterward, so positions into it
/// are stable handles for the lifetime of the process.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    songs: Vec<Song>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the catalog from the songs file, one `name,artist` per line.
    ///
    /// Failure to open the file is logged and yields an empty catalog;
    /// it is never fatal. Lines with fewer than two fields are skipped
    /// with a warning. Fields beyond the second are ignored.
    pub fn load(path: &Path) -> Self {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) => {
                log::warn!("Failed to open songs file {:?}: {}", path, e);
                return Self::new();
            }
        };

        let mut songs = Vec::new();
        for (line_no, line) in BufReader::new(file).lines().enumerate() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    log::warn!("Failed to read songs file {:?}: {}", path, e);
                    break;
                }
            };

            match parse_song_line(&line) {
                Some(song) => songs.push(song),
                None => {
                    if !line.is_empty() {
                        log::warn!(
                            "Skipping malformed song line {} in {:?}: {:?}",
                            line_no + 1,
                            path,
                            line
                        );
                    }
                }
            }
        }

        log::info!("Loaded {} songs from {:?}", songs.len(), path);
        Self { songs }
    }

    /// Get the song at a catalog position, bounds-checked
    pub fn by_index(&self, index: usize) -> Option<&Song> {
        self.songs.get(index)
    }

    /// Find the first song with this exact name (case-sensitive).
    ///
    /// Returns the catalog position together with the song so playlist
    /// entries can hold the position as a handle.
    pub fn by_name(&self, name: &str) -> Option<(usize, &Song)> {
        self.songs
            .iter()
            .enumerate()
            .find(|(_, song)| song.name == name)
    }

    /// All songs, in catalog order
    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    /// Total number of songs
    pub fn len(&self) -> usize {
        self.songs.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    /// Build a catalog directly from songs (tests and tools)
    pub fn from_songs(songs: Vec<Song>) -> Self {
        Self { songs }
    }
}

/// Parse a single `name,artist` line. Extra fields are ignored.
fn parse_song_line(line: &str) -> Option<Song> {
    let mut fields = line.split(',');
    let name = fields.next()?;
    let artist = fields.next()?;
    Some(Song::new(name, artist))
}
