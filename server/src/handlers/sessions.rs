//! Session lifecycle endpoints

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::{AppState, SessionView};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenameBody {
    pub name: String,
}

pub async fn create(State(state): State<Arc<AppState>>) -> (StatusCode, Json<SessionView>) {
    (StatusCode::CREATED, Json(state.create_session().await))
}

pub async fn show(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, ApiError> {
    Ok(Json(state.session_view(id).await?))
}

pub async fn remove(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.remove_session(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn rename(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(body): Json<RenameBody>,
) -> Result<Json<SessionView>, ApiError> {
    Ok(Json(state.rename_project(id, &body.name).await?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServerConfig;
    use generation::{GenerationClient, StaticBackend};

    fn test_state() -> Arc<AppState> {
        let client = GenerationClient::new(Box::new(StaticBackend::failing("unused")));
        Arc::new(AppState::new(client, ServerConfig::default()))
    }

    #[tokio::test]
    async fn test_create_then_show() {
        let state = test_state();

        let (status, Json(view)) = create(State(Arc::clone(&state))).await;
        assert_eq!(status, StatusCode::CREATED);

        let Json(fetched) = show(State(Arc::clone(&state)), Path(view.id)).await.unwrap();
        assert_eq!(fetched.id, view.id);
        assert_eq!(fetched.project.name(), "untitled-project");
    }

    #[tokio::test]
    async fn test_remove_then_show_is_404() {
        let state = test_state();
        let (_, Json(view)) = create(State(Arc::clone(&state))).await;

        let status = remove(State(Arc::clone(&state)), Path(view.id)).await.unwrap();
        assert_eq!(status, StatusCode::NO_CONTENT);

        let err = show(State(state), Path(view.id)).await.unwrap_err();
        assert!(matches!(err, ApiError::SessionNotFound(_)));
    }

    #[tokio::test]
    async fn test_rename_project() {
        let state = test_state();
        let (_, Json(view)) = create(State(Arc::clone(&state))).await;

        let Json(renamed) = rename(
            State(state),
            Path(view.id),
            Json(RenameBody {
                name: "my-site".to_string(),
            }),
        )
        .await
        .unwrap();

        assert_eq!(renamed.project.name(), "my-site");
    }
}
