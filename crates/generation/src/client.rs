//! Generation client - the single entry point for both collaborator calls
//!
//! The client owns prompt construction and response parsing; the backend
//! underneath is a plain transport. Generation failures never leak a
//! panic: they surface as `GenerationError` for the caller to turn into
//! a chat notification, and prompt enhancement swallows failures
//! entirely, falling back to the caller's original text.

use crate::backend::{BackendError, GenerationBackend};
use crate::prompt;
use crate::types::{CompletionFormat, GenerationRequest, GenerationResponse};

/// Error types for generation calls
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("Backend error: {0}")]
    Backend(#[from] BackendError),

    #[error("model reply was not the expected JSON: {0}")]
    MalformedResponse(String),
}

/// Client wrapping a generation backend
pub struct GenerationClient {
    backend: Box<dyn GenerationBackend>,
}

impl GenerationClient {
    pub fn new(backend: Box<dyn GenerationBackend>) -> Self {
        Self { backend }
    }

    /// Name of the underlying backend, for logs
    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    /// Whether the underlying backend is responding
    pub async fn health_check(&self) -> bool {
        self.backend.health_check().await
    }

    /// Generate or modify a project from a prompt
    ///
    /// Any failure - transport, API status, unparseable reply - returns
    /// an error without partial results; the caller's project model must
    /// stay untouched until this returns `Ok`.
    pub async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResponse, GenerationError> {
        let system = prompt::build_system_prompt(&request.existing_files);
        let raw = self
            .backend
            .complete(&system, &request.prompt, CompletionFormat::Json)
            .await?;

        let cleaned = strip_code_fences(&raw);
        let response: GenerationResponse = serde_json::from_str(cleaned)
            .map_err(|err| GenerationError::MalformedResponse(err.to_string()))?;
        log::debug!(
            "generation returned {} file(s) via {}",
            response.files.len(),
            self.backend.name()
        );
        Ok(response)
    }

    /// Enhance a raw prompt into a detailed one
    ///
    /// On any failure the original text is returned unchanged - this is
    /// the required fallback, not an error surfaced to the user.
    pub async fn enhance(&self, original: &str) -> String {
        if original.trim().is_empty() {
            return original.to_string();
        }
        match self
            .backend
            .complete(prompt::ENHANCE_SYSTEM_PROMPT, original, CompletionFormat::Text)
            .await
        {
            Ok(text) if !text.trim().is_empty() => text.trim().to_string(),
            Ok(_) => original.to_string(),
            Err(err) => {
                log::warn!("prompt enhancement failed, keeping original: {err}");
                original.to_string()
            }
        }
    }
}

/// Strip a surrounding markdown code fence, if the model added one
/// despite being told not to
fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the info string ("json", "html", ...) on the opening fence
    let rest = match rest.split_once('\n') {
        Some((_, body)) => body,
        None => rest,
    };
    rest.strip_suffix("```").map(str::trim).unwrap_or(trimmed)
}
