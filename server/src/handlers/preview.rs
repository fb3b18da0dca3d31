//! Preview endpoints: the rendered document and its sandboxed frame

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::response::Html;
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

/// The self-contained preview document (or the fallback document)
pub async fn document(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Html<String>, ApiError> {
    Ok(Html(state.render_preview(id).await?))
}

/// A minimal shell page embedding the preview in a sandboxed iframe
///
/// The sandbox permits scripts and form submission but never top-level
/// navigation; this page is the rendering boundary the core delivers
/// documents into.
pub async fn frame(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Html<String>, ApiError> {
    let title = {
        let sessions = state.sessions.read().await;
        let session = sessions.get(&id).ok_or(ApiError::SessionNotFound(id))?;
        session.project.name().to_string()
    };
    let sandbox = state.sandbox.attribute_value();
    Ok(Html(format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>{title} live preview</title>
  <style>html,body{{margin:0;height:100%;}}iframe{{border:none;width:100%;height:100%;background:#fff;}}</style>
</head>
<body>
  <iframe src="/api/sessions/{id}/preview" sandbox="{sandbox}" title="Project Preview"></iframe>
</body>
</html>
"#
    )))
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
    async fn test_frame_embeds_sandboxed_iframe() {
        let state = test_state();
        let id = state.create_session().await.id;

        let Html(page) = frame(State(Arc::clone(&state)), Path(id)).await.unwrap();

        assert!(page.contains(&format!("/api/sessions/{id}/preview")));
        assert!(page.contains("sandbox=\"allow-scripts"));
        assert!(!page.contains("allow-top-navigation"));
    }

    #[tokio::test]
    async fn test_preview_of_placeholder_is_fallback() {
        let state = test_state();
        let id = state.create_session().await.id;

        let Html(doc) = document(State(state), Path(id)).await.unwrap();
        assert!(doc.contains("No Preview Available"));
    }
}
