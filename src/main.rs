//! moodlist - browse songs by mood and build playlists from a small catalog

mod api;
mod config;
mod core;
mod error;
mod models;
mod serializers;
mod state;
mod storage;
mod stores;
mod utils;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use crate::config::{AppConfig, Paths, SourceMode};
use crate::state::AppState;
use crate::storage::LocalFileStorage;

/// moodlist - mood-based music playlists
#[derive(Parser, Debug)]
#[command(name = "moodlist")]
#[command(version)]
#[command(about = "A small mood-based music catalog and playlist server")]
struct Args {
    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on
    #[arg(long, default_value_t = 1970)]
    port: u16,

    /// Enable debug mode
    #[arg(long)]
    debug: bool,

    /// Path to config directory
    #[arg(long)]
    config: Option<PathBuf>,

    /// Audio source variant, overrides settings.json
    #[arg(long, value_enum)]
    mode: Option<SourceMode>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::new(format!("{},actix_server=warn", log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .init();

    info!("moodlist v{} starting...", env!("CARGO_PKG_VERSION"));

    let paths = Paths::new(args.config)?;
    info!("Config directory: {:?}", paths.config_dir());

    let mut config = AppConfig::load(&paths)?;
    if let Some(mode) = args.mode {
        config.source_mode = mode;
    }

    let media_dir = config.media_dir(&paths);
    std::fs::create_dir_all(&media_dir)
        .with_context(|| format!("Failed to create media dir {}", media_dir.display()))?;
    info!("Source mode: {:?}, media directory: {:?}", config.source_mode, media_dir);

    let storage = Arc::new(LocalFileStorage::new(
        media_dir.clone(),
        config.allowed_extensions.clone(),
        config.max_upload_bytes(),
    ));

    let state = AppState::new(config, media_dir, storage).context("Failed to seed catalog")?;
    info!("Catalog loaded with {} songs", state.catalog.len());

    serve(args.host, args.port, state).await
}

async fn serve(host: String, port: u16, state: AppState) -> Result<()> {
    use actix_cors::Cors;
    use actix_web::{middleware, web, App, HttpServer};

    let state = web::Data::new(state);
    let addr = format!("{}:{}", host, port);
    info!("Server listening on http://{}", addr);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .app_data(state.clone())
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(api::configure)
    })
    .bind(addr)?
    .run()
    .await?;

    Ok(())
}
