//! Error types shared by the stores, file storage and API layer

use thiserror::Error;

/// Failures surfaced to the current view
#[derive(Debug, Error)]
pub enum Error {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Please select at least one song to create a playlist.")]
    EmptySelection,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unknown mood: {0}")]
    InvalidMood(String),

    #[error("Unsupported file: {0}")]
    UnsupportedFile(String),

    #[error("Upload exceeds the {0} byte limit")]
    UploadTooLarge(usize),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Whether this is a user input problem rather than a server fault
    pub fn is_validation(&self) -> bool {
        !matches!(self, Error::Io(_) | Error::NotFound(_))
    }
}
