//! In-memory stores for the song catalog and user playlists

mod catalog_store;
mod playlist_store;
pub mod seed;

pub use catalog_store::CatalogStore;
pub use playlist_store::PlaylistStore;
