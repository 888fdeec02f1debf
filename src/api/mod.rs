//! JSON API consumed by the graph UI.
//!
//! Every handler hands its store work to [`with_store`], which runs it on the
//! blocking pool while holding the connection lock. One lock per request
//! keeps each snapshot, plan, and write sequence atomic with respect to other
//! requests.

pub mod error;

use std::sync::{Arc, Mutex};

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::routing::{get, patch};
use axum::{Json, Router};
use rusqlite::Connection;
use serde::{Deserialize, Serialize};

use crate::engine::{Engine, ThoughtId};
use crate::thoughts::store::AddThoughtResult;
use crate::thoughts::types::Graph;
use crate::thoughts::{forget, graph, store};
pub use error::ApiError;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Mutex<Connection>>,
    pub engine: Arc<Engine>,
}

impl AppState {
    pub fn new(conn: Connection, engine: Engine) -> Self {
        Self {
            db: Arc::new(Mutex::new(conn)),
            engine: Arc::new(engine),
        }
    }
}

/// All `/api` routes, without CORS or static hosting.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/thoughts",
            get(list_thoughts).post(add_thought).delete(clear_thoughts),
        )
        .route("/api/thoughts/{id}", axum::routing::delete(delete_thought))
        .route("/api/thoughts/{id}/position", patch(update_position))
        .route("/api/health", get(health))
        .with_state(state)
}

/// Run store work on the blocking pool with the connection locked.
async fn with_store<T, F>(state: &AppState, failure: &'static str, work: F) -> Result<T, ApiError>
where
    T: Send + 'static,
    F: FnOnce(&mut Connection, &Engine) -> anyhow::Result<T> + Send + 'static,
{
    let db = Arc::clone(&state.db);
    let engine = Arc::clone(&state.engine);

    tokio::task::spawn_blocking(move || {
        let mut conn = db
            .lock()
            .map_err(|e| anyhow::anyhow!("db lock poisoned: {e}"))?;
        work(&mut *conn, engine.as_ref())
    })
    .await
    .map_err(|e| ApiError::internal(failure, e))?
    .map_err(|e| ApiError::internal(failure, e))
}

// ============ GET /api/thoughts ============

async fn list_thoughts(State(state): State<AppState>) -> Result<Json<Graph>, ApiError> {
    let graph = with_store(&state, "Failed to fetch thoughts", |conn, _| graph::graph(conn)).await?;
    Ok(Json(graph))
}

// ============ POST /api/thoughts ============

#[derive(Debug, Deserialize)]
pub struct AddThoughtRequest {
    pub content: Option<String>,
}

async fn add_thought(
    State(state): State<AppState>,
    request: Result<Json<AddThoughtRequest>, JsonRejection>,
) -> Result<Json<AddThoughtResult>, ApiError> {
    let Json(request) = request?;
    let content = match request.content {
        Some(content) if !content.trim().is_empty() => content,
        _ => return Err(ApiError::BadRequest("Content is required".into())),
    };

    let result = with_store(&state, "Failed to add thought", move |conn, engine| {
        store::add_thought(conn, engine, &content)
    })
    .await?;
    Ok(Json(result))
}

// ============ DELETE /api/thoughts/{id} ============

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub deleted: bool,
    pub connections_removed: u64,
}

async fn delete_thought(
    State(state): State<AppState>,
    id: Result<Path<ThoughtId>, PathRejection>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let Path(id) = id?;
    let result = with_store(&state, "Failed to delete thought", move |conn, _| {
        forget::delete_thought(conn, id)
    })
    .await?;
    Ok(Json(DeleteResponse {
        success: true,
        deleted: result.deleted,
        connections_removed: result.connections_removed,
    }))
}

// ============ PATCH /api/thoughts/{id}/position ============

#[derive(Debug, Deserialize)]
pub struct PositionRequest {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Serialize)]
pub struct PositionResponse {
    pub success: bool,
    pub updated: bool,
}

async fn update_position(
    State(state): State<AppState>,
    id: Result<Path<ThoughtId>, PathRejection>,
    position: Result<Json<PositionRequest>, JsonRejection>,
) -> Result<Json<PositionResponse>, ApiError> {
    let Path(id) = id?;
    let Json(position) = position?;
    let updated = with_store(&state, "Failed to update position", move |conn, _| {
        store::update_position(conn, id, position.x, position.y)
    })
    .await?;
    Ok(Json(PositionResponse {
        success: true,
        updated,
    }))
}

// ============ DELETE /api/thoughts ============

#[derive(Debug, Serialize)]
pub struct ClearResponse {
    pub success: bool,
    pub thoughts_removed: u64,
    pub connections_removed: u64,
}

async fn clear_thoughts(State(state): State<AppState>) -> Result<Json<ClearResponse>, ApiError> {
    let result = with_store(&state, "Failed to clear thoughts", |conn, _| forget::clear_all(conn)).await?;
    Ok(Json(ClearResponse {
        success: true,
        thoughts_removed: result.thoughts_removed,
        connections_removed: result.connections_removed,
    }))
}

// ============ GET /api/health ============

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
