//! Prompt submission and enhancement endpoints

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::{AppState, PromptOutcome};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptBody {
    pub prompt: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhanceResponse {
    pub prompt: String,
}

/// Submit a prompt to the generation collaborator
///
/// A failed generation still answers 200: the failure lands in the chat
/// transcript and `succeeded` is false. Only a concurrent submission is
/// an HTTP error (409).
pub async fn prompt(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(body): Json<PromptBody>,
) -> Result<Json<PromptOutcome>, ApiError> {
    Ok(Json(state.run_generation(id, &body.prompt).await?))
}

/// Enhance a raw prompt; falls back to the original text on failure
pub async fn enhance(
    State(state): State<Arc<AppState>>,
    Json(body): Json<PromptBody>,
) -> Json<EnhanceResponse> {
    Json(EnhanceResponse {
        prompt: state.client.enhance(&body.prompt).await,
    })
}
