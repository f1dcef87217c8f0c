//! Track routes: catalog listing and the two ways of adding a song

use actix_multipart::Multipart;
use actix_web::{get, post, web, HttpResponse, Responder};
use futures::StreamExt;
use serde::Deserialize;
use tracing::warn;

use crate::error::Error;
use crate::models::{Mood, NewSong, Song, SongSource};
use crate::serializers::{serialize_song, serialize_songs};
use crate::state::AppState;

const LINK_FIELDS_MISSING: &str = "Please fill in all the fields.";
const UPLOAD_FIELDS_MISSING: &str = "Please fill in all the fields and upload a valid MP3 file.";

#[derive(Debug, Deserialize)]
pub struct AddLinkBody {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub artist: String,
    #[serde(default)]
    pub mood: String,
    #[serde(default)]
    pub link: String,
}

/// Multipart fields collected from an upload
#[derive(Debug, Default)]
struct UploadForm {
    file: Option<(String, Vec<u8>)>,
    title: String,
    artist: String,
    mood: String,
}

impl UploadForm {
    fn is_complete(&self) -> bool {
        let has_file = self
            .file
            .as_ref()
            .map(|(name, bytes)| !name.is_empty() && !bytes.is_empty())
            .unwrap_or(false);
        has_file
            && !self.title.trim().is_empty()
            && !self.artist.trim().is_empty()
            && !self.mood.is_empty()
    }
}

fn added(state: &AppState, song: &Song) -> HttpResponse {
    HttpResponse::Created().json(serde_json::json!({
        "msg": format!("'{}' by {} added to the music library!", song.title, song.artist),
        "song": serialize_song(song, state.embed_base()),
    }))
}

fn missing_fields(msg: &str) -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({ "error": msg }))
}

/// GET /tracks
#[get("")]
pub async fn list_tracks(state: web::Data<AppState>) -> impl Responder {
    let songs = state.catalog.all();
    HttpResponse::Ok().json(serde_json::json!({
        "total": songs.len(),
        "tracks": serialize_songs(&songs, state.embed_base()),
    }))
}

/// GET /tracks/keys
///
/// `"title - artist"` keys offered by the playlist picker.
#[get("/keys")]
pub async fn song_keys(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "options": state.catalog.song_keys(),
    }))
}

/// POST /tracks
#[post("")]
pub async fn add_link_track(
    state: web::Data<AppState>,
    body: web::Json<AddLinkBody>,
) -> Result<HttpResponse, Error> {
    let body = body.into_inner();

    let new = NewSong {
        title: body.title,
        artist: body.artist,
        mood: body.mood,
        source: SongSource::SourceLink(body.link),
    };

    match state.catalog.append(new) {
        Ok(song) => Ok(added(&state, &song)),
        Err(Error::MissingField(_)) => Ok(missing_fields(LINK_FIELDS_MISSING)),
        Err(e) => Err(e),
    }
}

/// POST /tracks/upload
#[post("/upload")]
pub async fn upload_track(
    state: web::Data<AppState>,
    mut payload: Multipart,
) -> Result<HttpResponse, Error> {
    let max_size = state.storage.max_size();
    let mut form = UploadForm::default();

    while let Some(item) = payload.next().await {
        let mut field = match item {
            Ok(field) => field,
            Err(e) => {
                warn!("malformed upload: {}", e);
                return Ok(HttpResponse::BadRequest()
                    .json(serde_json::json!({ "error": "Malformed upload" })));
            }
        };

        let disp = field.content_disposition().clone();
        let name = disp.get_name().map(|s| s.to_string()).unwrap_or_default();
        let filename = disp.get_filename().map(|s| s.to_string());

        // reject the wrong kind of file before buffering it
        if name == "file" {
            if let Some(ref f) = filename {
                state.storage.accepts(f)?;
            }
        }

        let mut bytes = Vec::new();
        while let Some(chunk) = field.next().await {
            match chunk {
                Ok(data) => {
                    if bytes.len() + data.len() > max_size {
                        return Err(Error::UploadTooLarge(max_size));
                    }
                    bytes.extend_from_slice(&data);
                }
                Err(e) => {
                    warn!("upload interrupted: {}", e);
                    return Ok(HttpResponse::BadRequest()
                        .json(serde_json::json!({ "error": "Malformed upload" })));
                }
            }
        }

        match name.as_str() {
            "file" => form.file = Some((filename.unwrap_or_default(), bytes)),
            "title" => form.title = String::from_utf8_lossy(&bytes).to_string(),
            "artist" => form.artist = String::from_utf8_lossy(&bytes).to_string(),
            "mood" => form.mood = String::from_utf8_lossy(&bytes).trim().to_string(),
            _ => {}
        }
    }

    if !form.is_complete() {
        return Ok(missing_fields(UPLOAD_FIELDS_MISSING));
    }
    // an unknown mood must not leave an orphaned file behind
    form.mood.parse::<Mood>()?;

    let Some((filename, bytes)) = form.file else {
        return Ok(missing_fields(UPLOAD_FIELDS_MISSING));
    };
    let path = state.storage.save(&bytes, &filename)?;

    let song = state.catalog.append(NewSong {
        title: form.title,
        artist: form.artist,
        mood: form.mood,
        source: SongSource::SourceFile(path),
    })?;

    Ok(added(&state, &song))
}

/// Configure track routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_tracks)
        .service(song_keys)
        .service(add_link_track)
        .service(upload_track);
}
