//! Playlist collection, loaded from and persisted to the playlists file

use crate::error::Error;
use crate::model::{Playlist, PlaylistEntry};
use crate::store::Catalog;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// All named playlists plus the file backing them.
///
/// Every persist is a full-file rewrite: the file format has no way to
/// address a single playlist, so saving one saves all of them.
#[derive(Debug)]
pub struct PlaylistStore {
    /// Backing file, rewritten on every save
    path: PathBuf,

    /// All playlists, in file order
    playlists: Vec<Playlist>,
}

impl PlaylistStore {
    /// Create an empty store backed by the given file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            playlists: Vec::new(),
        }
    }

    /// Load the playlist collection from its file.
    ///
    /// Each line is `name,song1,song2,...,`; song names are resolved
    /// against the catalog, and names that do not resolve are kept as
    /// [`PlaylistEntry::Missing`] so a later save round-trips them.
    /// Failure to open the file is logged and yields an empty collection;
    /// it is never fatal.
    pub fn load(path: impl Into<PathBuf>, catalog: &Catalog) -> Self {
        let path = path.into();
        let file = match File::open(&path) {
            Ok(file) => file,
            Err(e) => {
                log::warn!("Failed to open playlists file {:?}: {}", path, e);
                return Self::new(path);
            }
        };

        let mut playlists = Vec::new();
        for line in BufReader::new(file).lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    log::warn!("Failed to read playlists file {:?}: {}", path, e);
                    break;
                }
            };

            if let Some(playlist) = parse_playlist_line(&line, catalog) {
                playlists.push(playlist);
            }
        }

        log::info!("Loaded {} playlists from {:?}", playlists.len(), path);
        Self { path, playlists }
    }

    /// Persist the whole collection, overwriting the file.
    ///
    /// Format quirk preserved from the original files: every field,
    /// including the last song, is followed by a comma. In-memory state
    /// is unaffected whether or not the write succeeds.
    pub fn save(&self, catalog: &Catalog) -> Result<(), Error> {
        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);

        for playlist in &self.playlists {
            write!(writer, "{},", playlist.name)?;
            for entry in &playlist.entries {
                match entry {
                    PlaylistEntry::Song(index) => match catalog.by_index(*index) {
                        Some(song) => write!(writer, "{},", song.name)?,
                        None => {
                            log::warn!(
                                "Playlist {:?} references catalog index {} out of bounds, skipping",
                                playlist.name,
                                index
                            );
                        }
                    },
                    PlaylistEntry::Missing(name) => write!(writer, "{},", name)?,
                }
            }
            writeln!(writer)?;
        }

        writer.flush()?;
        log::info!(
            "Saved {} playlists to {:?}",
            self.playlists.len(),
            self.path
        );
        Ok(())
    }

    /// Append a new empty playlist.
    ///
    /// Fails if a playlist with that exact name already exists.
    /// Uniqueness is enforced only here; duplicates present in the file
    /// survive load, and name lookup returns the first match.
    /// Does not persist.
    pub fn create(&mut self, name: &str) -> Result<(), Error> {
        if self.by_name(name).is_some() {
            return Err(Error::DuplicatePlaylist(name.to_string()));
        }
        self.playlists.push(Playlist::new(name));
        Ok(())
    }

    /// Remove the playlist at a position. Does not persist.
    pub fn remove(&mut self, index: usize) -> Playlist {
        self.playlists.remove(index)
    }

    /// Get the playlist at a position, bounds-checked
    pub fn by_index(&self, index: usize) -> Option<&Playlist> {
        self.playlists.get(index)
    }

    /// Find the first playlist with this exact name (case-sensitive)
    pub fn by_name(&self, name: &str) -> Option<(usize, &Playlist)> {
        self.playlists
            .iter()
            .enumerate()
            .find(|(_, playlist)| playlist.name == name)
    }

    /// Mutable access to the playlist at a position
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Playlist> {
        self.playlists.get_mut(index)
    }

    /// All playlists, in collection order
    pub fn playlists(&self) -> &[Playlist] {
        &self.playlists
    }

    /// Total number of playlists
    pub fn len(&self) -> usize {
        self.playlists.len()
    }

    /// Check if the collection is empty
    pub fn is_empty(&self) -> bool {
        self.playlists.is_empty()
    }
}

/// Parse a single playlist line against the catalog.
///
/// Trailing empty fields (the artifacts of the trailing-comma format)
/// are dropped; interior fields are looked up verbatim.
fn parse_playlist_line(line: &str, catalog: &Catalog) -> Option<Playlist> {
    let mut fields: Vec<&str> = line.split(',').collect();
    while fields.last() == Some(&"") {
        fields.pop();
    }

    let mut fields = fields.into_iter();
    let name = fields.next()?;
    let mut playlist = Playlist::new(name);

    for song_name in fields {
        match catalog.by_name(song_name) {
            Some((index, _)) => playlist.add_song(index),
            None => {
                log::debug!(
                    "Playlist {:?} references unknown song {:?}",
                    playlist.name,
                    song_name
                );
                playlist.add_entry(PlaylistEntry::Missing(song_name.to_string()));
            }
        }
    }

    Some(playlist)
}
