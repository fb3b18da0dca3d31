//! Pluggable generation backend abstraction
//!
//! This module provides a trait-based abstraction over chat-completion
//! endpoints. The shipped backend speaks the OpenAI-compatible HTTP API;
//! `StaticBackend` serves tests and offline demos. All backends implement
//! the same interface, so the client never knows which one is active.

pub mod openai;
pub mod static_backend;

use async_trait::async_trait;

use crate::types::CompletionFormat;

pub use openai::OpenAiCompatBackend;
pub use static_backend::StaticBackend;

/// Error types for backend operations
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error {status}: {body}")]
    Api { status: u16, body: String },

    #[error("model returned an empty completion")]
    EmptyCompletion,

    #[error("backend unavailable: {0}")]
    Unavailable(String),
}

/// The core trait that all generation backends must implement
///
/// A backend is a thin transport: it takes fully-built prompts and
/// returns the raw completion text. Prompt construction and response
/// parsing live in the client layer.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    /// Human-readable name for logs and diagnostics
    fn name(&self) -> &'static str;

    /// Health check - verify the backend is responding
    async fn health_check(&self) -> bool;

    /// Run one completion and return its text
    async fn complete(
        &self,
        system: &str,
        user: &str,
        format: CompletionFormat,
    ) -> Result<String, BackendError>;
}
