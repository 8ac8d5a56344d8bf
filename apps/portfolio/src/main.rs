mod assets;
mod config;
mod content;
mod errors;
mod render;
mod routes;
mod session;
mod state;
mod theme;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::assets::{executable_dir, FsAssets};
use crate::config::Config;
use crate::content::load_content;
use crate::routes::build_router;
use crate::session::SessionStore;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting portfolio v{}", env!("CARGO_PKG_VERSION"));

    let content = load_content(config.content_path.as_deref())?;

    let base_dir = match &config.asset_dir {
        Some(dir) => dir.clone(),
        None => executable_dir().context("Could not determine the executable's directory")?,
    };
    let assets = FsAssets::new(base_dir);
    info!(
        "Assets resolve from {} then the working directory",
        assets.base_dir().display()
    );

    info!(
        "Page '{}' ({} layout), photo '{}', CV '{}'",
        config.page.title,
        config.page.layout.as_str(),
        config.page.profile_photo,
        config.page.cv_filename
    );

    let state = AppState {
        content: Arc::new(content),
        assets: Arc::new(assets),
        page: Arc::new(config.page.clone()),
        sessions: SessionStore::new(Duration::from_secs(config.session_ttl_secs)),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
