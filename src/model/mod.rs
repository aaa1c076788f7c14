//! Unified data model for the playlist manager
//!
//! This module defines data structures that are independent of
//! both the flat-file storage format and the console front-end.

mod song;
mod playlist;

pub use song::Song;
pub use playlist::{Playlist, PlaylistEntry};
