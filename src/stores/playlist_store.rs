//! Playlist store - named playlists copied out of the catalog

use std::collections::HashSet;

use parking_lot::RwLock;
use tracing::{debug, info};

use super::CatalogStore;
use crate::error::{Error, Result};
use crate::models::Playlist;

/// In-memory playlists, kept in creation order
pub struct PlaylistStore {
    playlists: RwLock<Vec<Playlist>>,
}

impl PlaylistStore {
    pub fn new() -> Self {
        Self {
            playlists: RwLock::new(Vec::new()),
        }
    }

    /// Playlist names in insertion order
    pub fn list_names(&self) -> Vec<String> {
        self.playlists
            .read()
            .iter()
            .map(|p| p.name.clone())
            .collect()
    }

    /// Create (or replace) a playlist from catalog keys
    ///
    /// Every catalog entry whose `"title - artist"` key is in `song_keys` is
    /// copied, in catalog order. An existing playlist with the same name is
    /// replaced in place.
    pub fn create(
        &self,
        name: &str,
        song_keys: &HashSet<String>,
        catalog: &CatalogStore,
    ) -> Result<Playlist> {
        if name.is_empty() {
            debug!("rejecting playlist: empty name");
            return Err(Error::MissingField("name"));
        }
        if song_keys.is_empty() {
            debug!("rejecting playlist '{}': no songs selected", name);
            return Err(Error::EmptySelection);
        }

        // catalog lock is released before the playlist lock is taken
        let songs: Vec<_> = catalog
            .all()
            .into_iter()
            .filter(|s| song_keys.contains(&s.key()))
            .collect();

        let playlist = Playlist::new(name.to_string(), songs);

        let mut playlists = self.playlists.write();
        match playlists.iter_mut().find(|p| p.name == name) {
            Some(existing) => {
                info!("Replaced playlist '{}' ({} songs)", name, playlist.count());
                *existing = playlist.clone();
            }
            None => {
                info!("Created playlist '{}' ({} songs)", name, playlist.count());
                playlists.push(playlist.clone());
            }
        }

        Ok(playlist)
    }

    /// Get a playlist by name
    pub fn get(&self, name: &str) -> Result<Playlist> {
        self.playlists
            .read()
            .iter()
            .find(|p| p.name == name)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("Playlist '{}'", name)))
    }

    pub fn is_empty(&self) -> bool {
        self.playlists.read().is_empty()
    }
}

impl Default for PlaylistStore {
    fn default() -> Self {
        Self::new()
    }
}
