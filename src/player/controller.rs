use super::Selector;
use crate::error::Error;
use crate::model::{Playlist, PlaylistEntry, Song};
use crate::store::{Catalog, PlaylistStore};
use std::path::Path;

/// The player: owns both stores plus the "what is playing" state.
///
/// Lookup failures abort the operation with an [`Error`] and leave all
/// state untouched; nothing here panics on user input.
#[derive(Debug)]
pub struct Player {
    catalog: Catalog,
    playlists: PlaylistStore,

    /// Position of the current playlist in the collection, if any
    current_playlist: Option<usize>,

    /// Position of the current song within the current playlist.
    /// `None` unless `current_playlist` is set and non-empty.
    current_song: Option<usize>,
}

/// Result of a play command: what got selected and what is audible
#[derive(Debug, Clone)]
pub struct NowPlaying {
    /// Name of the playlist that became current
    pub playlist: String,

    /// The song at position 0, or `None` if the playlist is empty or
    /// its first entry does not resolve against the catalog
    pub song: Option<Song>,
}

impl Player {
    /// Create a player over already-loaded stores
    pub fn new(catalog: Catalog, playlists: PlaylistStore) -> Self {
        Self {
            catalog,
            playlists,
            current_playlist: None,
            current_song: None,
        }
    }

    /// Load both stores from their files and build a player.
    ///
    /// Missing or unreadable files degrade to empty collections; this
    /// never fails.
    pub fn load(songs_path: &Path, playlists_path: &Path) -> Self {
        let catalog = Catalog::load(songs_path);
        let playlists = PlaylistStore::load(playlists_path, &catalog);
        Self::new(catalog, playlists)
    }

    /// Every catalog song, in catalog order
    pub fn list_songs(&self) -> &[Song] {
        self.catalog.songs()
    }

    /// Every playlist, in collection order
    pub fn list_playlists(&self) -> &[Playlist] {
        self.playlists.playlists()
    }

    /// Create a new empty playlist. Not persisted until a save.
    pub fn create_playlist(&mut self, name: &str) -> Result<(), Error> {
        self.playlists.create(name)?;
        log::debug!("Created playlist {:?}", name);
        Ok(())
    }

    /// Make a playlist current and start it from the top.
    ///
    /// An empty playlist still becomes current, but nothing plays.
    pub fn play_playlist(&mut self, selector: &Selector) -> Result<NowPlaying, Error> {
        let index = self.resolve_playlist(selector)?;
        self.current_playlist = Some(index);

        let playlist = self
            .playlists
            .by_index(index)
            .ok_or(Error::PlaylistIndex(index))?;

        if playlist.is_empty() {
            self.current_song = None;
            return Ok(NowPlaying {
                playlist: playlist.name.clone(),
                song: None,
            });
        }

        self.current_song = Some(0);
        let song = match &playlist.entries[0] {
            PlaylistEntry::Song(catalog_index) => self.catalog.by_index(*catalog_index).cloned(),
            PlaylistEntry::Missing(name) => {
                log::warn!(
                    "Playlist {:?} starts with unresolved song {:?}",
                    playlist.name,
                    name
                );
                None
            }
        };

        Ok(NowPlaying {
            playlist: playlist.name.clone(),
            song,
        })
    }

    /// Persist the collection on behalf of one playlist.
    ///
    /// The file format cannot address a single playlist, so any save
    /// rewrites everything; the selector only provides the not-found
    /// check and the name to confirm. Returns the resolved name.
    pub fn save_playlist(&mut self, selector: &Selector) -> Result<String, Error> {
        let index = self.resolve_playlist(selector)?;
        let name = self
            .playlists
            .by_index(index)
            .ok_or(Error::PlaylistIndex(index))?
            .name
            .clone();

        self.playlists.save(&self.catalog)?;
        Ok(name)
    }

    /// Remove a playlist and persist immediately. Returns the name.
    pub fn delete_playlist(&mut self, selector: &Selector) -> Result<String, Error> {
        let index = self.resolve_playlist(selector)?;
        let removed = self.playlists.remove(index);

        // Keep current-playlist state valid across the removal
        match self.current_playlist {
            Some(current) if current == index => {
                self.current_playlist = None;
                self.current_song = None;
            }
            Some(current) if current > index => {
                self.current_playlist = Some(current - 1);
            }
            _ => {}
        }

        self.playlists.save(&self.catalog)?;
        log::debug!("Deleted playlist {:?}", removed.name);
        Ok(removed.name)
    }

    /// Append a song to a playlist, in memory only.
    ///
    /// Resolves the playlist first, then the song, so the error names
    /// whichever lookup failed. A save is required to make it durable.
    pub fn add_song(
        &mut self,
        playlist_selector: &Selector,
        song_selector: &Selector,
    ) -> Result<(), Error> {
        let playlist_index = self.resolve_playlist(playlist_selector)?;
        let song_index = self.resolve_song(song_selector)?;
        log::debug!(
            "Adding song {} to playlist {}",
            song_selector,
            playlist_selector
        );

        if let Some(playlist) = self.playlists.get_mut(playlist_index) {
            playlist.add_song(song_index);
        }
        Ok(())
    }

    /// The song currently playing, if any
    pub fn now_playing(&self) -> Option<&Song> {
        let playlist = self.playlists.by_index(self.current_playlist?)?;
        match playlist.entries.get(self.current_song?)? {
            PlaylistEntry::Song(catalog_index) => self.catalog.by_index(*catalog_index),
            PlaylistEntry::Missing(_) => None,
        }
    }

    fn resolve_playlist(&self, selector: &Selector) -> Result<usize, Error> {
        match selector {
            Selector::Index(index) => {
                if *index < self.playlists.len() {
                    Ok(*index)
                } else {
                    Err(Error::PlaylistIndex(*index))
                }
            }
            Selector::Name(name) => self
                .playlists
                .by_name(name)
                .map(|(index, _)| index)
                .ok_or_else(|| Error::PlaylistName(name.clone())),
        }
    }

    fn resolve_song(&self, selector: &Selector) -> Result<usize, Error> {
        match selector {
            Selector::Index(index) => {
                if *index < self.catalog.len() {
                    Ok(*index)
                } else {
                    Err(Error::SongIndex(*index))
                }
            }
            Selector::Name(name) => self
                .catalog
                .by_name(name)
                .map(|(index, _)| index)
                .ok_or_else(|| Error::SongName(name.clone())),
        }
    }
}
