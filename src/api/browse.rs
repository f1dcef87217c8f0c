//! Browse-by-mood routes

use actix_web::{get, web, HttpResponse, Responder};

use crate::core::navigation::NO_SONGS_FOR_MOOD;
use crate::serializers::serialize_songs;
use crate::state::AppState;

/// GET /browse/moods
#[get("/moods")]
pub async fn list_moods(state: web::Data<AppState>) -> impl Responder {
    let moods: Vec<_> = state.catalog.list_moods().into_iter().collect();
    HttpResponse::Ok().json(serde_json::json!({ "moods": moods }))
}

/// GET /browse/<mood>
#[get("/{mood}")]
pub async fn songs_for_mood(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let mood = path.into_inner();
    let songs = state.catalog.filter_by_mood(&mood);

    let mut body = serde_json::json!({
        "mood": mood,
        "songs": serialize_songs(&songs, state.embed_base()),
    });
    if songs.is_empty() {
        body["message"] = NO_SONGS_FOR_MOOD.into();
    }

    HttpResponse::Ok().json(body)
}

/// Configure browse routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_moods).service(songs_for_mood);
}
