//! Playdeck - flat-file playlist manager
//!
//! Loads a song catalog and named playlists from comma-separated text
//! files, supports create/play/save/delete and adding songs by index
//! or name, and persists playlist changes back to disk. "Playing" a
//! song prints its state; there is no audio backend.

pub mod error;
pub mod model;
pub mod player;
pub mod store;

pub use error::Error;
pub use player::{NowPlaying, Player, Selector};
pub use store::{Catalog, PlaylistStore};
