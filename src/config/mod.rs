//! Configuration module for moodlist
//!
//! This module contains the application configuration structures and path management.

mod app_config;
mod paths;

pub use app_config::{AppConfig, SourceMode};
pub use paths::Paths;

/// Mime type reported for local audio files
pub const AUDIO_FORMAT: &str = "audio/mp3";
