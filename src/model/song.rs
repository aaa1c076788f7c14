use serde::{Deserialize, Serialize};
use std::fmt;

/// A single song: a (name, artist) pair, immutable after construction.
///
/// Lookup throughout the crate is by exact, case-sensitive name match.
/// Duplicate names are permitted; first match wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    /// Song title
    pub name: String,

    /// Artist name
    pub artist: String,
}

impl Song {
    /// Create a new song
    pub fn new(name: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            artist: artist.into(),
        }
    }
}

impl fmt::Display for Song {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.name, self.artist)
    }
}
