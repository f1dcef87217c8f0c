//! Shared application state handed to every request handler

use std::path::PathBuf;
use std::sync::Arc;

use crate::config::AppConfig;
use crate::error::Result;
use crate::storage::FileStorage;
use crate::stores::seed::seed_songs;
use crate::stores::{CatalogStore, PlaylistStore};

pub struct AppState {
    pub config: AppConfig,
    pub catalog: CatalogStore,
    pub playlists: PlaylistStore,
    pub storage: Arc<dyn FileStorage>,
    /// Directory `/media` serves from
    pub media_dir: PathBuf,
}

impl AppState {
    /// Build the stores, seeding the catalog for the configured source mode
    pub fn new(config: AppConfig, media_dir: PathBuf, storage: Arc<dyn FileStorage>) -> Result<Self> {
        let catalog = CatalogStore::with_songs(seed_songs(config.source_mode, &media_dir))?;

        Ok(Self {
            config,
            catalog,
            playlists: PlaylistStore::new(),
            storage,
            media_dir,
        })
    }

    pub fn embed_base(&self) -> &str {
        &self.config.embed_base
    }
}
