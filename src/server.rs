//! HTTP server: database, engine, API routes, and optional static hosting.

use anyhow::{Context, Result};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};

use crate::api::{self, AppState};
use crate::config::{expand_tilde, ThreadsConfig};
use crate::db;
use crate::engine::Engine;

/// Open the store and build the engine once for the life of the server.
pub fn build_state(config: &ThreadsConfig) -> Result<AppState> {
    let db_path = config.resolved_db_path();
    let conn = db::open_database(&db_path)?;
    tracing::info!(db = %db_path.display(), "database ready");

    let engine = Engine::new(config.engine.clone());
    Ok(AppState::new(conn, engine))
}

/// API routes with CORS, falling back to the built UI when `static_dir` is set.
pub fn app(config: &ThreadsConfig, state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut app = api::router(state);

    if let Some(dir) = &config.server.static_dir {
        let dir = expand_tilde(dir);
        tracing::info!(dir = %dir.display(), "serving static files");
        let index = dir.join("index.html");
        app = app.fallback_service(ServeDir::new(&dir).fallback(ServeFile::new(index)));
    }

    app.layer(cors)
}

/// Serve the API until ctrl-c.
pub async fn serve(config: ThreadsConfig) -> Result<()> {
    let bind_addr = config.bind_addr();
    let state = build_state(&config)?;
    let app = app(&config, state);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    tracing::info!(addr = %bind_addr, "thought threads listening at http://{bind_addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "failed to listen for ctrl-c");
                std::future::pending::<()>().await;
            }
            tracing::info!("shutting down server");
        })
        .await?;

    Ok(())
}
