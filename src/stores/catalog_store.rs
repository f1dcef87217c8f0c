//! Catalog store - the ordered, append-only list of known songs

use std::collections::BTreeSet;

use parking_lot::RwLock;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::models::{NewSong, Song};

struct CatalogInner {
    songs: Vec<Song>,
    next_id: u32,
}

/// In-memory catalog of songs
pub struct CatalogStore {
    inner: RwLock<CatalogInner>,
}

impl CatalogStore {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(CatalogInner {
                songs: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Create a catalog pre-filled with `songs`, in order
    pub fn with_songs(songs: Vec<NewSong>) -> Result<Self> {
        let store = Self::new();
        for song in songs {
            store.append(song)?;
        }
        Ok(store)
    }

    /// Distinct moods present in the catalog, sorted
    pub fn list_moods(&self) -> BTreeSet<&'static str> {
        self.inner
            .read()
            .songs
            .iter()
            .map(|s| s.mood.as_str())
            .collect()
    }

    /// Songs whose mood is exactly `mood`, in insertion order
    pub fn filter_by_mood(&self, mood: &str) -> Vec<Song> {
        self.inner
            .read()
            .songs
            .iter()
            .filter(|s| s.mood.as_str() == mood)
            .cloned()
            .collect()
    }

    /// Validate and append a song to the end of the catalog
    pub fn append(&self, new: NewSong) -> Result<Song> {
        if new.title.trim().is_empty() {
            debug!("rejecting catalog append: empty title");
            return Err(Error::MissingField("title"));
        }
        if new.artist.trim().is_empty() {
            debug!("rejecting catalog append: empty artist");
            return Err(Error::MissingField("artist"));
        }
        if new.mood.trim().is_empty() {
            return Err(Error::MissingField("mood"));
        }
        if new.source.is_empty() {
            debug!("rejecting catalog append: empty source");
            return Err(Error::MissingField("source"));
        }
        let mood = new.mood.parse()?;

        let mut inner = self.inner.write();
        let song = Song {
            id: inner.next_id,
            title: new.title,
            artist: new.artist,
            mood,
            source: new.source,
        };
        inner.next_id += 1;
        inner.songs.push(song.clone());

        info!("Added '{}' by {} ({})", song.title, song.artist, song.mood);
        Ok(song)
    }

    /// Snapshot of every song
    pub fn all(&self) -> Vec<Song> {
        self.inner.read().songs.clone()
    }

    /// `"title - artist"` keys, in catalog order
    pub fn song_keys(&self) -> Vec<String> {
        self.inner.read().songs.iter().map(Song::key).collect()
    }

    /// Number of songs
    pub fn len(&self) -> usize {
        self.inner.read().songs.len()
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SongSource;
    use crate::stores::seed::seed_songs;
    use crate::config::SourceMode;
    use std::path::Path;

    fn seeded() -> CatalogStore {
        CatalogStore::with_songs(seed_songs(SourceMode::Link, Path::new("mp3"))).unwrap()
    }

    fn new_song(title: &str, artist: &str, mood: &str) -> NewSong {
        NewSong {
            title: title.to_string(),
            artist: artist.to_string(),
            mood: mood.to_string(),
            source: SongSource::SourceLink("https://open.spotify.com/track/xyz".to_string()),
        }
    }

    #[test]
    fn test_list_moods_sorted() {
        let store = seeded();
        let moods: Vec<_> = store.list_moods().into_iter().collect();
        assert_eq!(moods, vec!["Energetic", "Happy", "Relaxed", "Romantic", "Sad"]);
    }

    #[test]
    fn test_filter_by_mood_exact() {
        let store = seeded();
        let happy = store.filter_by_mood("Happy");
        assert_eq!(happy.len(), 1);
        assert_eq!(happy[0].title, "Happier");
        assert_eq!(happy[0].artist, "Marshmello");

        assert!(store.filter_by_mood("happy").is_empty());
        assert!(store.filter_by_mood("Hap").is_empty());
        assert!(store.filter_by_mood("Angry").is_empty());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let store = seeded();
        assert_eq!(store.filter_by_mood("Sad"), store.filter_by_mood("Sad"));
    }

    #[test]
    fn test_append_lands_at_end_of_filter() {
        let store = seeded();
        store.append(new_song("X", "Y", "Sad")).unwrap();

        let sad = store.filter_by_mood("Sad");
        let titles: Vec<_> = sad.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Someone You Loved", "X"]);
        assert!(sad.iter().all(|s| s.mood.as_str() == "Sad"));
    }

    #[test]
    fn test_append_assigns_increasing_ids() {
        let store = seeded();
        let song = store.append(new_song("X", "Y", "Happy")).unwrap();
        assert_eq!(song.id, 6);
        let again = store.append(new_song("X", "Y", "Happy")).unwrap();
        assert_eq!(again.id, 7);
        // duplicates are accepted
        assert_eq!(store.filter_by_mood("Happy").len(), 3);
    }

    #[test]
    fn test_append_rejects_missing_fields() {
        let store = seeded();

        let err = store.append(new_song("", "Y", "Sad")).unwrap_err();
        assert!(matches!(err, Error::MissingField("title")));

        let err = store.append(new_song("X", "  ", "Sad")).unwrap_err();
        assert!(matches!(err, Error::MissingField("artist")));

        let mut song = new_song("X", "Y", "Sad");
        song.source = SongSource::SourceLink(String::new());
        let err = store.append(song).unwrap_err();
        assert!(matches!(err, Error::MissingField("source")));

        let err = store.append(new_song("X", "Y", "Grumpy")).unwrap_err();
        assert!(matches!(err, Error::InvalidMood(_)));

        assert_eq!(store.len(), 5);
    }

    #[test]
    fn test_song_keys_in_catalog_order() {
        let store = seeded();
        let keys = store.song_keys();
        assert_eq!(keys.first().unwrap(), "Blinding Lights - The Weeknd");
        assert_eq!(keys.last().unwrap(), "Weightless - Marconi Union");
    }
}
