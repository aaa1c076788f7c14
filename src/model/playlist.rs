use serde::{Deserialize, Serialize};

/// Represents a playlist
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    /// Playlist name
    pub name: String,

    /// Playlist entries (ordered)
    pub entries: Vec<PlaylistEntry>,
}

/// Entry in a playlist, referencing a song in the catalog.
///
/// The catalog is append-only and immutable after load, so a position
/// into it is a stable handle. A name that did not resolve at load time
/// is kept verbatim so that saving round-trips the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaylistEntry {
    /// Index of a resolved song in the catalog
    Song(usize),

    /// Song name that was not found in the catalog at load time
    Missing(String),
}

impl Playlist {
    /// Create a new empty playlist
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    /// Append a resolved catalog song to this playlist
    pub fn add_song(&mut self, catalog_index: usize) {
        self.entries.push(PlaylistEntry::Song(catalog_index));
    }

    /// Append an entry (resolved or missing) to this playlist
    pub fn add_entry(&mut self, entry: PlaylistEntry) {
        self.entries.push(entry);
    }

    /// Number of entries in this playlist
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if playlist is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
