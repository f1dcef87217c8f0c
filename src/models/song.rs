//! Song model

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::Mood;

/// Where a song's audio comes from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SongSource {
    /// External streaming link
    SourceLink(String),
    /// Local audio file
    SourceFile(PathBuf),
}

impl SongSource {
    pub fn is_empty(&self) -> bool {
        match self {
            SongSource::SourceLink(url) => url.trim().is_empty(),
            SongSource::SourceFile(path) => path.as_os_str().is_empty(),
        }
    }
}

/// A catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    /// Catalog-assigned id
    pub id: u32,
    pub title: String,
    pub artist: String,
    pub mood: Mood,
    #[serde(flatten)]
    pub source: SongSource,
}

impl Song {
    /// The `"title - artist"` key used by the playlist picker
    pub fn key(&self) -> String {
        song_key(&self.title, &self.artist)
    }
}

/// Unvalidated input for a catalog append
#[derive(Debug, Clone)]
pub struct NewSong {
    pub title: String,
    pub artist: String,
    pub mood: String,
    pub source: SongSource,
}

/// Format a selection key
pub fn song_key(title: &str, artist: &str) -> String {
    format!("{} - {}", title, artist)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_format() {
        let song = Song {
            id: 1,
            title: "Weightless".to_string(),
            artist: "Marconi Union".to_string(),
            mood: Mood::Relaxed,
            source: SongSource::SourceFile(PathBuf::from("mp3/5.mp3")),
        };
        assert_eq!(song.key(), "Weightless - Marconi Union");
    }

    #[test]
    fn test_source_is_flattened() {
        let song = Song {
            id: 4,
            title: "Happier".to_string(),
            artist: "Marshmello".to_string(),
            mood: Mood::Happy,
            source: SongSource::SourceLink("https://example.com/track/abc".to_string()),
        };
        let value = serde_json::to_value(&song).unwrap();
        assert_eq!(value["source_link"], "https://example.com/track/abc");
        assert_eq!(value["mood"], "Happy");
        assert!(value.get("source_file").is_none());
    }

    #[test]
    fn test_blank_source_is_empty() {
        assert!(SongSource::SourceLink("   ".to_string()).is_empty());
        assert!(SongSource::SourceFile(PathBuf::new()).is_empty());
        assert!(!SongSource::SourceLink("x".to_string()).is_empty());
    }
}
