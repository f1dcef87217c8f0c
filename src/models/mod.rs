//! Data models for moodlist
//!
//! This module contains the core data structures shared by the stores and the API.

mod mood;
mod playlist;
mod song;

pub use mood::Mood;
pub use playlist::Playlist;
pub use song::{NewSong, Song, SongSource};
