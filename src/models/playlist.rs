//! Playlist model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Song;

/// A named, ordered selection of catalog songs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    /// Playlist name (unique within the store)
    pub name: String,
    /// Songs copied out of the catalog at creation time
    #[serde(default)]
    pub songs: Vec<Song>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Playlist {
    /// Create a new playlist
    pub fn new(name: String, songs: Vec<Song>) -> Self {
        Self {
            name,
            songs,
            created_at: Utc::now(),
        }
    }

    /// Number of songs
    pub fn count(&self) -> usize {
        self.songs.len()
    }
}

impl PartialEq for Playlist {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.songs == other.songs
    }
}

impl Eq for Playlist {}
