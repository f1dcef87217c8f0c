//! Playlist API routes

use actix_web::{get, post, web, HttpResponse, Responder};
use serde::Deserialize;
use std::collections::HashSet;

use crate::error::Error;
use crate::serializers::serialize_playlist;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreatePlaylistBody {
    #[serde(default)]
    pub name: String,
    /// Selected `"title - artist"` keys
    #[serde(default)]
    pub songs: Vec<String>,
}

/// GET /playlists
#[get("")]
pub async fn list_playlists(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "names": state.playlists.list_names(),
    }))
}

/// POST /playlists
#[post("")]
pub async fn create_playlist(
    state: web::Data<AppState>,
    body: web::Json<CreatePlaylistBody>,
) -> Result<HttpResponse, Error> {
    let body = body.into_inner();
    let keys: HashSet<String> = body.songs.into_iter().collect();

    let playlist = state.playlists.create(&body.name, &keys, &state.catalog)?;

    Ok(HttpResponse::Created().json(serde_json::json!({
        "msg": format!("Playlist '{}' created successfully!", playlist.name),
        "playlist": serialize_playlist(&playlist, state.embed_base()),
    })))
}

/// GET /playlists/<name>
#[get("/{name}")]
pub async fn get_playlist(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, Error> {
    let playlist = state.playlists.get(&path)?;
    Ok(HttpResponse::Ok().json(serialize_playlist(&playlist, state.embed_base())))
}

/// Configure playlist routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_playlists)
        .service(create_playlist)
        .service(get_playlist);
}
