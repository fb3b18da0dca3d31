//! Generation - the external generative-model collaborators
//!
//! This crate owns both calls the builder makes to a language model:
//!
//! - **Project generation**: user prompt + existing files in, a strict
//!   JSON `GenerationResponse` (explanation + file list) out.
//! - **Prompt enhancement**: plain text in, enhanced text out - with the
//!   original text returned unchanged on any failure.
//!
//! Backends are pluggable behind the `GenerationBackend` trait; the
//! shipped backend speaks the OpenAI-compatible chat-completions API
//! (llama.cpp server, Ollama, LM Studio, hosted endpoints). The model is
//! treated as fallible and untrusted: responses are fence-stripped,
//! parsed defensively, and missing fields fall back to defaults.

pub mod backend;
pub mod client;
pub mod prompt;
pub mod types;

// Re-exports for convenience
pub use backend::{BackendError, GenerationBackend, OpenAiCompatBackend, StaticBackend};
pub use client::{GenerationClient, GenerationError};
pub use types::{CompletionFormat, GenerationRequest, GenerationResponse};
