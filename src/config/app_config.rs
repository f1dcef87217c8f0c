//! Application configuration for moodlist
//!
//! This module handles the settings stored in settings.json.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::Paths;

/// How songs get their audio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SourceMode {
    /// External streaming links played through an embed
    #[default]
    Link,
    /// Local files played through an audio element
    File,
}

/// Settings structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Audio source variant
    #[serde(default)]
    pub source_mode: SourceMode,

    /// Directory uploaded files are written to (defaults to `<config>/mp3`)
    #[serde(default)]
    pub media_dir: Option<PathBuf>,

    /// Upload size cap in megabytes
    #[serde(default = "default_max_upload_mb")]
    pub max_upload_mb: usize,

    /// Accepted upload extensions, lowercase, without the dot
    #[serde(default = "default_allowed_extensions")]
    pub allowed_extensions: Vec<String>,

    /// Prefix for streaming-link embeds
    #[serde(default = "default_embed_base")]
    pub embed_base: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            source_mode: SourceMode::default(),
            media_dir: None,
            max_upload_mb: default_max_upload_mb(),
            allowed_extensions: default_allowed_extensions(),
            embed_base: default_embed_base(),
        }
    }
}

impl AppConfig {
    /// Load configuration from file, writing defaults if it does not exist
    pub fn load(paths: &Paths) -> Result<Self> {
        let settings_path = paths.settings_path();

        if settings_path.exists() {
            let content =
                std::fs::read_to_string(&settings_path).context("Failed to read settings file")?;
            let mut config: AppConfig =
                serde_json::from_str(&content).context("Failed to parse settings file")?;

            // extensions are compared lowercase
            for ext in &mut config.allowed_extensions {
                *ext = ext.trim_start_matches('.').to_lowercase();
            }

            Ok(config)
        } else {
            let config = Self::default();
            config.save(paths)?;
            Ok(config)
        }
    }

    /// Save configuration to file
    pub fn save(&self, paths: &Paths) -> Result<()> {
        let content = serde_json::to_string_pretty(self).context("Failed to serialize settings")?;
        std::fs::write(paths.settings_path(), content).context("Failed to write settings file")?;
        Ok(())
    }

    /// Resolved media directory
    pub fn media_dir(&self, paths: &Paths) -> PathBuf {
        self.media_dir
            .clone()
            .unwrap_or_else(|| paths.default_media_dir())
    }

    /// Upload size cap in bytes
    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_mb.saturating_mul(1024 * 1024)
    }
}

// Default value functions for serde

fn default_max_upload_mb() -> usize {
    50
}

fn default_allowed_extensions() -> Vec<String> {
    vec!["mp3".to_string()]
}

fn default_embed_base() -> String {
    "https://open.spotify.com/embed/track".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.source_mode, SourceMode::Link);
        assert_eq!(config.allowed_extensions, vec!["mp3"]);
        assert_eq!(config.max_upload_bytes(), 50 * 1024 * 1024);
    }

    #[test]
    fn test_load_writes_defaults_then_reads_back() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::new(Some(temp_dir.path().to_path_buf())).unwrap();

        let config = AppConfig::load(&paths).unwrap();
        assert!(paths.settings_path().exists());
        assert_eq!(config.media_dir(&paths), paths.default_media_dir());

        std::fs::write(
            paths.settings_path(),
            r#"{"sourceMode":"file","allowedExtensions":[".MP3","ogg"]}"#,
        )
        .unwrap();
        let config = AppConfig::load(&paths).unwrap();
        assert_eq!(config.source_mode, SourceMode::File);
        assert_eq!(config.allowed_extensions, vec!["mp3", "ogg"]);
        assert_eq!(config.embed_base, "https://open.spotify.com/embed/track");
    }
}
