//! HTTP error mapping for the service layer

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use uuid::Uuid;

use project_model::ProjectError;
use sitewright_export::ExportError;

/// Errors a request handler can surface to the client
///
/// Generation failures are deliberately absent: they are surfaced
/// in-band as chat notifications, never as HTTP errors.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("unknown session {0}")]
    SessionNotFound(Uuid),

    #[error("a generation request is already in flight for this session")]
    GenerationInFlight,

    #[error(transparent)]
    Project(#[from] ProjectError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::SessionNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::GenerationInFlight => StatusCode::CONFLICT,
            ApiError::Project(ProjectError::DuplicateFile(_)) => StatusCode::CONFLICT,
            ApiError::Project(ProjectError::FileNotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Project(ProjectError::InvalidFileName(_))
            | ApiError::Project(ProjectError::EmptyProjectName) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ApiError::Export(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}
