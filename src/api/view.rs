//! View routes: one full screen state per request

use actix_web::{get, web, HttpResponse};

use crate::core::{render, View, ViewQuery};
use crate::error::Error;
use crate::state::AppState;

/// GET /view/<view>
#[get("/{view}")]
pub async fn get_view(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<ViewQuery>,
) -> Result<HttpResponse, Error> {
    let view: View = path.parse()?;
    let rendered = render(view, &state, &query)?;
    Ok(HttpResponse::Ok().json(rendered))
}

/// Configure view routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(get_view);
}
