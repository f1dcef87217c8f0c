//! File storage for uploaded audio
//!
//! Uploads go through the [`FileStorage`] trait so the catalog never touches the
//! filesystem itself.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use tracing::info;

use crate::error::{Error, Result};
use crate::utils::filesystem::{extension_of, has_allowed_extension, sanitize_file_name};

/// Persists uploaded bytes and returns where they landed
pub trait FileStorage: Send + Sync {
    fn save(&self, bytes: &[u8], name: &str) -> Result<PathBuf>;

    /// Upper bound on accepted upload size in bytes
    fn max_size(&self) -> usize;

    /// Check a file name before any bytes are read
    fn accepts(&self, name: &str) -> Result<()>;
}

/// Writes uploads into a local media directory
pub struct LocalFileStorage {
    media_dir: PathBuf,
    allowed_extensions: Vec<String>,
    max_size: usize,
}

impl LocalFileStorage {
    pub fn new(media_dir: PathBuf, allowed_extensions: Vec<String>, max_size: usize) -> Self {
        Self {
            media_dir,
            allowed_extensions,
            max_size,
        }
    }

    /// Pick a path inside the media dir that does not clobber an earlier upload
    fn target_path(&self, file_name: &str) -> PathBuf {
        let candidate = self.media_dir.join(file_name);
        if !candidate.exists() {
            return candidate;
        }
        let prefix = uuid::Uuid::new_v4().simple().to_string();
        self.media_dir.join(format!("{}_{}", &prefix[..8], file_name))
    }
}

impl FileStorage for LocalFileStorage {
    fn save(&self, bytes: &[u8], name: &str) -> Result<PathBuf> {
        self.accepts(name)?;
        if bytes.len() > self.max_size {
            return Err(Error::UploadTooLarge(self.max_size));
        }

        let file_name = sanitize_file_name(name).ok_or(Error::MissingField("file"))?;
        fs::create_dir_all(&self.media_dir)?;

        let path = self.target_path(&file_name);
        let mut file = fs::File::create(&path)?;
        file.write_all(bytes)?;

        info!("Saved upload {} ({} bytes)", path.display(), bytes.len());
        Ok(path)
    }

    fn max_size(&self) -> usize {
        self.max_size
    }

    fn accepts(&self, name: &str) -> Result<()> {
        let file_name = sanitize_file_name(name).ok_or(Error::MissingField("file"))?;
        if has_allowed_extension(&file_name, &self.allowed_extensions) {
            Ok(())
        } else {
            Err(Error::UnsupportedFile(
                extension_of(&file_name).unwrap_or(file_name),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn storage(dir: &TempDir) -> LocalFileStorage {
        LocalFileStorage::new(dir.path().join("mp3"), vec!["mp3".to_string()], 16)
    }

    #[test]
    fn test_save_writes_bytes() {
        let dir = TempDir::new().unwrap();
        let storage = storage(&dir);

        let path = storage.save(b"ID3abc", "song.mp3").unwrap();
        assert_eq!(path, dir.path().join("mp3").join("song.mp3"));
        assert_eq!(fs::read(&path).unwrap(), b"ID3abc");
    }

    #[test]
    fn test_same_name_does_not_overwrite() {
        let dir = TempDir::new().unwrap();
        let storage = storage(&dir);

        let first = storage.save(b"one", "song.mp3").unwrap();
        let second = storage.save(b"two", "song.mp3").unwrap();

        assert_ne!(first, second);
        assert!(second.file_name().unwrap().to_string_lossy().ends_with("_song.mp3"));
        assert_eq!(fs::read(&first).unwrap(), b"one");
        assert_eq!(fs::read(&second).unwrap(), b"two");
    }

    #[test]
    fn test_rejects_bad_uploads() {
        let dir = TempDir::new().unwrap();
        let storage = storage(&dir);

        assert!(matches!(
            storage.save(b"x", "notes.txt"),
            Err(Error::UnsupportedFile(ext)) if ext == "txt"
        ));
        assert!(matches!(
            storage.save(&[0u8; 17], "big.mp3"),
            Err(Error::UploadTooLarge(16))
        ));
        assert!(matches!(
            storage.save(b"x", ""),
            Err(Error::MissingField("file"))
        ));
        assert!(!dir.path().join("mp3").join("notes.txt").exists());
    }

    #[test]
    fn test_path_components_are_stripped() {
        let dir = TempDir::new().unwrap();
        let storage = storage(&dir);

        let path = storage.save(b"x", "../../escape.mp3").unwrap();
        assert_eq!(path, dir.path().join("mp3").join("escape.mp3"));
    }
}
