//! OpenAI-compatible chat-completions backend
//!
//! Works against any server exposing `/v1/chat/completions`: llama.cpp
//! server, Ollama, LM Studio, or a hosted endpoint. The API key is
//! optional because local servers typically do not require one.

use async_trait::async_trait;

use super::{BackendError, GenerationBackend};
use crate::types::{ChatMessage, ChatRequest, ChatResponse, CompletionFormat, ResponseFormat};

/// Backend speaking the OpenAI-compatible HTTP API
pub struct OpenAiCompatBackend {
    /// HTTP client for API requests
    http_client: reqwest::Client,
    /// Base URL of the server, without the `/v1` suffix
    base_url: String,
    /// Model identifier passed through on every request
    model: String,
    /// Bearer token; omitted entirely when None
    api_key: Option<String>,
}

impl OpenAiCompatBackend {
    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            http_client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.into(),
            api_key: None,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Endpoint for one completion call
    fn completions_url(&self) -> String {
        format!("{}/v1/chat/completions", self.base_url)
    }
}

#[async_trait]
impl GenerationBackend for OpenAiCompatBackend {
    fn name(&self) -> &'static str {
        "openai-compatible"
    }

    async fn health_check(&self) -> bool {
        let url = format!("{}/v1/models", self.base_url);
        match self.http_client.get(&url).send().await {
            Ok(resp) => resp.status().is_success(),
            Err(_) => false,
        }
    }

    async fn complete(
        &self,
        system: &str,
        user: &str,
        format: CompletionFormat,
    ) -> Result<String, BackendError> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage::system(system), ChatMessage::user(user)],
            stream: false,
            temperature: None,
            response_format: match format {
                CompletionFormat::Json => Some(ResponseFormat::json_object()),
                CompletionFormat::Text => None,
            },
        };

        let mut builder = self.http_client.post(self.completions_url()).json(&request);
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key);
        }

        let response = builder.send().await.map_err(BackendError::Http)?;
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(BackendError::Api { status, body });
        }

        let parsed: ChatResponse = response.json().await.map_err(BackendError::Http)?;
        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(BackendError::EmptyCompletion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_name() {
        let backend = OpenAiCompatBackend::new("http://127.0.0.1:8080", "test-model");
        assert_eq!(backend.name(), "openai-compatible");
    }

    #[test]
    fn test_base_url_trailing_slash_normalized() {
        let backend = OpenAiCompatBackend::new("http://127.0.0.1:8080/", "test-model");
        assert_eq!(
            backend.completions_url(),
            "http://127.0.0.1:8080/v1/chat/completions"
        );
    }
}
