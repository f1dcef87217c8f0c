//! Local audio serving for file-sourced songs

use actix_files::NamedFile;
use actix_web::{get, web};

use crate::error::Error;
use crate::state::AppState;
use crate::utils::filesystem::sanitize_file_name;

/// GET /media/<filename>
///
/// Range requests are handled by `NamedFile`.
#[get("/{filename}")]
pub async fn serve_media(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<NamedFile, Error> {
    let requested = path.into_inner();
    let name = sanitize_file_name(&requested)
        .ok_or_else(|| Error::NotFound(format!("Media '{}'", requested)))?;

    let file_path = state.media_dir.join(&name);
    if !file_path.is_file() {
        return Err(Error::NotFound(format!("Media '{}'", name)));
    }

    Ok(NamedFile::open(file_path)?)
}

/// Configure media routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(serve_media);
}
