//! Wire types for the generation collaborators
//!
//! `GenerationResponse` is the external contract: every field the model
//! might omit carries a serde default, so a sparse-but-valid reply never
//! becomes a parse failure.

use serde::{Deserialize, Serialize};

use project_model::{IncomingFile, ProjectFile};

/// What the caller wants generated
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// The user's natural-language prompt
    pub prompt: String,
    /// Current project files, passed as context so edits stay consistent
    pub existing_files: Vec<ProjectFile>,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>, existing_files: Vec<ProjectFile>) -> Self {
        Self {
            prompt: prompt.into(),
            existing_files,
        }
    }
}

/// The model's reply to a generation request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResponse {
    /// Suggested project name (kebab-case), adopted only while the
    /// project still carries its placeholder name
    #[serde(default)]
    pub project_name: Option<String>,
    /// Message for the chat transcript
    #[serde(default)]
    pub explanation: String,
    /// Generated or edited files; empty when the model only answered a
    /// question
    #[serde(default)]
    pub files: Vec<IncomingFile>,
}

/// How the completion text should be shaped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionFormat {
    /// Free-form text (prompt enhancement)
    Text,
    /// Strict JSON object (project generation)
    Json,
}

// ─── OpenAI-compatible chat-completions wire format ─────────────────

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Chat completion request (OpenAI-compatible)
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_format: Option<ResponseFormat>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResponseFormat {
    #[serde(rename = "type")]
    pub format_type: String,
}

impl ResponseFormat {
    pub fn json_object() -> Self {
        Self {
            format_type: "json_object".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChoiceMessage {
    pub content: Option<String>,
}
