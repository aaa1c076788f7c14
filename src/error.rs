//! Error taxonomy for playlist operations
//!
//! Lookup failures and create collisions are ordinary values the
//! front-end turns into messages; nothing here is ever fatal.

use thiserror::Error;

/// Errors returned by store and player operations
#[derive(Debug, Error)]
pub enum Error {
    /// Song index out of catalog bounds
    #[error("no song at index {0}")]
    SongIndex(usize),

    /// Song name not present in the catalog
    #[error("no song named \"{0}\"")]
    SongName(String),

    /// Playlist index out of collection bounds
    #[error("no playlist at index {0}")]
    PlaylistIndex(usize),

    /// Playlist name not present in the collection
    #[error("no playlist named \"{0}\"")]
    PlaylistName(String),

    /// Create collision: playlist names must be unique at creation time
    #[error("a playlist named \"{0}\" already exists")]
    DuplicatePlaylist(String),

    /// Save failure; in-memory state is unaffected
    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),
}
