//! REST API routes for moodlist

pub mod browse;
mod error;
pub mod media;
pub mod playlist;
pub mod track;
pub mod view;

use actix_web::web;

/// Configure all API routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        // Full screen state per view
        .service(web::scope("/view").configure(view::configure))
        // Browse routes
        .service(web::scope("/browse").configure(browse::configure))
        // Playlist routes
        .service(web::scope("/playlists").configure(playlist::configure))
        // Catalog and add-track routes
        .service(web::scope("/tracks").configure(track::configure))
        // Local audio
        .service(web::scope("/media").configure(media::configure));
}
