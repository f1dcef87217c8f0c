//! Serializers for converting internal models to API responses
//!
//! Songs are rendered together with a player descriptor so the client can
//! either embed the streaming link or point an audio element at `/media`.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::AUDIO_FORMAT;
use crate::models::{Mood, Playlist, Song, SongSource};

/// How the client should play a song
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Player {
    Embed { url: String },
    Audio { url: String, format: &'static str },
}

#[derive(Debug, Clone, Serialize)]
pub struct SongResponse {
    pub id: u32,
    pub key: String,
    pub title: String,
    pub artist: String,
    pub mood: Mood,
    #[serde(flatten)]
    pub source: SongSource,
    pub player: Player,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlaylistResponse {
    pub name: String,
    pub count: usize,
    pub created_at: DateTime<Utc>,
    pub songs: Vec<SongResponse>,
}

/// Player for a song given the configured embed prefix
pub fn player_for(source: &SongSource, embed_base: &str) -> Player {
    match source {
        SongSource::SourceLink(link) => {
            let track_id = link
                .split('?')
                .next()
                .unwrap_or(link)
                .trim_end_matches('/')
                .rsplit('/')
                .next()
                .unwrap_or_default();
            Player::Embed {
                url: format!("{}/{}", embed_base.trim_end_matches('/'), track_id),
            }
        }
        SongSource::SourceFile(path) => {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            Player::Audio {
                url: format!("/media/{}", name),
                format: AUDIO_FORMAT,
            }
        }
    }
}

pub fn serialize_song(song: &Song, embed_base: &str) -> SongResponse {
    SongResponse {
        id: song.id,
        key: song.key(),
        title: song.title.clone(),
        artist: song.artist.clone(),
        mood: song.mood,
        source: song.source.clone(),
        player: player_for(&song.source, embed_base),
    }
}

pub fn serialize_songs(songs: &[Song], embed_base: &str) -> Vec<SongResponse> {
    songs.iter().map(|s| serialize_song(s, embed_base)).collect()
}

pub fn serialize_playlist(playlist: &Playlist, embed_base: &str) -> PlaylistResponse {
    PlaylistResponse {
        name: playlist.name.clone(),
        count: playlist.count(),
        created_at: playlist.created_at,
        songs: serialize_songs(&playlist.songs, embed_base),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const BASE: &str = "https://open.spotify.com/embed/track";

    #[test]
    fn test_embed_uses_last_segment() {
        let source =
            SongSource::SourceLink("https://open.spotify.com/track/2dpaYNEQHiRxtZbfNsse99".into());
        assert_eq!(
            player_for(&source, BASE),
            Player::Embed {
                url: "https://open.spotify.com/embed/track/2dpaYNEQHiRxtZbfNsse99".to_string()
            }
        );
    }

    #[test]
    fn test_embed_drops_query_and_trailing_slash() {
        let source = SongSource::SourceLink("https://open.spotify.com/track/abc123/?si=xyz".into());
        assert_eq!(
            player_for(&source, "https://embed.example/track/"),
            Player::Embed {
                url: "https://embed.example/track/abc123".to_string()
            }
        );
    }

    #[test]
    fn test_local_file_player() {
        let source = SongSource::SourceFile(PathBuf::from("/srv/moodlist/mp3/4.mp3"));
        let player = player_for(&source, BASE);
        assert_eq!(
            player,
            Player::Audio {
                url: "/media/4.mp3".to_string(),
                format: "audio/mp3"
            }
        );
        let value = serde_json::to_value(&player).unwrap();
        assert_eq!(value["kind"], "audio");
    }
}
