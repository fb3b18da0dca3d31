//! File operation endpoints (command style, JSON bodies)

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::{AppState, SessionView};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileBody {
    pub name: String,
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameBody {
    pub name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenameFileBody {
    pub from: String,
    pub to: String,
}

pub async fn add(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(body): Json<FileBody>,
) -> Result<Json<SessionView>, ApiError> {
    Ok(Json(state.add_file(id, &body.name, &body.content).await?))
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(body): Json<FileBody>,
) -> Result<Json<SessionView>, ApiError> {
    Ok(Json(state.edit_file(id, &body.name, &body.content).await?))
}

pub async fn remove(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(body): Json<NameBody>,
) -> Result<Json<SessionView>, ApiError> {
    Ok(Json(state.remove_file(id, &body.name).await?))
}

pub async fn rename(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(body): Json<RenameFileBody>,
) -> Result<Json<SessionView>, ApiError> {
    Ok(Json(state.rename_file(id, &body.from, &body.to).await?))
}

pub async fn select(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(body): Json<NameBody>,
) -> Result<Json<SessionView>, ApiError> {
    Ok(Json(state.select_file(id, &body.name).await?))
}
