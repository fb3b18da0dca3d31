//! HTTP surface of the sitewright service
//!
//! File operations are command-style endpoints with JSON bodies rather
//! than path parameters, so names containing `/` need no escaping.

pub mod export;
pub mod files;
pub mod generate;
pub mod preview;
pub mod sessions;

use std::sync::Arc;

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::CorsLayer;

use crate::state::AppState;
use crate::templates::{TemplateInfo, TEMPLATES};

/// Build the service router
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/templates", get(list_templates))
        .route("/api/enhance", post(generate::enhance))
        .route("/api/sessions", post(sessions::create))
        .route(
            "/api/sessions/:id",
            get(sessions::show).delete(sessions::remove),
        )
        .route("/api/sessions/:id/name", post(sessions::rename))
        .route("/api/sessions/:id/prompt", post(generate::prompt))
        .route("/api/sessions/:id/files/add", post(files::add))
        .route("/api/sessions/:id/files/update", post(files::update))
        .route("/api/sessions/:id/files/remove", post(files::remove))
        .route("/api/sessions/:id/files/rename", post(files::rename))
        .route("/api/sessions/:id/files/select", post(files::select))
        .route("/api/sessions/:id/preview", get(preview::document))
        .route("/api/sessions/:id/frame", get(preview::frame))
        .route("/api/sessions/:id/export", get(export::download))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let backend_ready = state.client.health_check().await;
    Json(serde_json::json!({
        "status": "ok",
        "backendReady": backend_ready,
    }))
}

async fn list_templates() -> Json<&'static [TemplateInfo]> {
    Json(TEMPLATES)
}
