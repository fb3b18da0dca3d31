//! Service configuration
//!
//! Everything is environment-driven with workable local defaults: by
//! default the service binds to localhost and talks to an Ollama-style
//! OpenAI-compatible endpoint on its standard port.

use std::env;

/// Runtime configuration for the sitewright service
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the HTTP service binds to
    pub bind_addr: String,
    /// Base URL of the OpenAI-compatible generation endpoint
    pub backend_url: String,
    /// Model identifier passed through on every generation call
    pub model: String,
    /// Bearer token for hosted endpoints; local servers need none
    pub api_key: Option<String>,
    /// Quiet period after the last edit before the preview refreshes
    pub debounce_ms: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:4173".to_string(),
            backend_url: "http://127.0.0.1:11434".to_string(),
            model: "qwen2.5-coder".to_string(),
            api_key: None,
            debounce_ms: 1000,
        }
    }
}

impl ServerConfig {
    /// Load configuration from `SITEWRIGHT_*` environment variables,
    /// falling back to defaults for anything unset
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            bind_addr: env_or("SITEWRIGHT_BIND", defaults.bind_addr),
            backend_url: env_or("SITEWRIGHT_BACKEND_URL", defaults.backend_url),
            model: env_or("SITEWRIGHT_MODEL", defaults.model),
            api_key: env::var("SITEWRIGHT_API_KEY").ok().filter(|v| !v.is_empty()),
            debounce_ms: env::var("SITEWRIGHT_DEBOUNCE_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.debounce_ms),
        }
    }
}

fn env_or(key: &str, default: String) -> String {
    env::var(key).ok().filter(|v| !v.is_empty()).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr, "127.0.0.1:4173");
        assert_eq!(config.debounce_ms, 1000);
        assert!(config.api_key.is_none());
    }

    // Single test: the env vars are process-global and cargo runs tests
    // concurrently
    #[test]
    fn test_env_overrides_and_fallbacks() {
        env::set_var("SITEWRIGHT_MODEL", "test-model");
        env::set_var("SITEWRIGHT_DEBOUNCE_MS", "250");
        let config = ServerConfig::from_env();
        assert_eq!(config.model, "test-model");
        assert_eq!(config.debounce_ms, 250);

        env::set_var("SITEWRIGHT_DEBOUNCE_MS", "not-a-number");
        let config = ServerConfig::from_env();
        assert_eq!(config.debounce_ms, 1000);

        env::remove_var("SITEWRIGHT_MODEL");
        env::remove_var("SITEWRIGHT_DEBOUNCE_MS");
    }
}
