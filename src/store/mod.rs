//! Flat-file stores for the catalog and the playlist collection
//!
//! Both files are comma-separated and line-oriented, with no escaping:
//! a literal comma inside a name or artist corrupts parsing. That is an
//! accepted limitation of the format.

mod catalog;
mod playlists;

pub use catalog::Catalog;
pub use playlists::PlaylistStore;
