//! Path management for moodlist
//!
//! This module manages the filesystem paths used by the application.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Manages all filesystem paths for the application
#[derive(Debug, Clone)]
pub struct Paths {
    /// Config directory path
    config_dir: PathBuf,
}

impl Paths {
    /// Resolve the config directory and create it along with the default media dir
    pub fn new(config_override: Option<PathBuf>) -> Result<Self> {
        // Determine config parent directory
        let config_parent = if let Some(ref path) = config_override {
            path.clone()
        } else if let Ok(exe) = std::env::current_exe() {
            exe.parent().unwrap_or(Path::new(".")).to_path_buf()
        } else {
            directories::ProjectDirs::from("", "", "moodlist")
                .map(|dirs| dirs.config_dir().to_path_buf())
                .unwrap_or_else(|| PathBuf::from("."))
        };

        // Determine config directory name
        let config_dir_name = if is_home_dir(&config_parent) {
            ".moodlist"
        } else {
            "moodlist"
        };

        let paths = Self {
            config_dir: config_parent.join(config_dir_name),
        };

        paths.create_directories()?;

        Ok(paths)
    }

    fn create_directories(&self) -> Result<()> {
        std::fs::create_dir_all(&self.config_dir)
            .with_context(|| format!("Failed to create {}", self.config_dir.display()))?;
        std::fs::create_dir_all(self.default_media_dir())?;
        Ok(())
    }

    /// Get the config directory
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Get the settings file path
    pub fn settings_path(&self) -> PathBuf {
        self.config_dir.join("settings.json")
    }

    /// Get the default directory for uploaded and seeded audio
    pub fn default_media_dir(&self) -> PathBuf {
        self.config_dir.join("mp3")
    }
}

/// Check if a path is in the user's home directory
fn is_home_dir(path: &Path) -> bool {
    directories::UserDirs::new()
        .map(|dirs| path.starts_with(dirs.home_dir()))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_paths_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::new(Some(temp_dir.path().to_path_buf())).unwrap();

        assert!(paths.config_dir().exists());
        assert!(paths.default_media_dir().exists());
        assert!(paths.config_dir().starts_with(temp_dir.path()));
        assert!(paths.settings_path().ends_with("settings.json"));
    }
}
