//! A canned backend that never touches the network
//!
//! Useful for tests and for exercising the full session flow offline.

use async_trait::async_trait;

use super::{BackendError, GenerationBackend};
use crate::types::CompletionFormat;

/// Backend returning a fixed reply (or a fixed failure) for every call
pub struct StaticBackend {
    reply: Result<String, String>,
}

impl StaticBackend {
    /// A backend that answers every completion with `text`
    pub fn replying(text: impl Into<String>) -> Self {
        Self {
            reply: Ok(text.into()),
        }
    }

    /// A backend that fails every completion with `reason`
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            reply: Err(reason.into()),
        }
    }
}

#[async_trait]
impl GenerationBackend for StaticBackend {
    fn name(&self) -> &'static str {
        "static"
    }

    async fn health_check(&self) -> bool {
        self.reply.is_ok()
    }

    async fn complete(
        &self,
        _system: &str,
        _user: &str,
        _format: CompletionFormat,
    ) -> Result<String, BackendError> {
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(reason) => Err(BackendError::Unavailable(reason.clone())),
        }
    }
}
