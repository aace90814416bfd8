//! Configuration for the completion client.
//!
//! Built once at startup (typically from the process environment) and passed
//! into [`CompletionClient::new`](super::CompletionClient::new); nothing reads
//! ambient globals at request time.

use std::time::Duration;

/// Default chat-completion endpoint.
pub const DEFAULT_API_URL: &str = "https://api.cerebras.ai/v1/chat/completions";

/// Default model identifier.
pub const DEFAULT_MODEL: &str = "llama3.1-8b";

/// How many trailing conversation messages are forwarded upstream.
pub const DEFAULT_MAX_HISTORY: usize = 12;

const DEFAULT_TEMPERATURE: f32 = 0.2;
const DEFAULT_MAX_TOKENS: u32 = 512;
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Environment variable holding the API credential.
pub const API_KEY_ENV: &str = "CEREBRAS_API_KEY";
/// Environment variable overriding the endpoint URL.
pub const API_URL_ENV: &str = "CEREBRAS_API_URL";
/// Environment variable overriding the model identifier.
pub const MODEL_ENV: &str = "CEREBRAS_MODEL";

/// Configuration for the completion client.
#[derive(Clone, Debug)]
pub struct CompletionConfig {
    /// API credential; absence is surfaced as a configuration error on first use.
    pub api_key: Option<String>,
    /// Chat-completion endpoint URL.
    pub api_url: String,
    /// Model identifier sent with every request.
    pub model: String,
    /// Sampling temperature.
    pub temperature: f32,
    /// Output token budget.
    pub max_tokens: u32,
    /// Sliding window over the conversation: only this many trailing messages
    /// are forwarded.
    pub max_history: usize,
    /// Total request timeout for the outbound call.
    pub request_timeout: Duration,
    /// Connection timeout for the outbound call.
    pub connect_timeout: Duration,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: DEFAULT_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            max_history: DEFAULT_MAX_HISTORY,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        }
    }
}

impl CompletionConfig {
    /// Create a config with default settings and no credential.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a config from the process environment.
    ///
    /// Reads `CEREBRAS_API_KEY` plus optional `CEREBRAS_API_URL` and
    /// `CEREBRAS_MODEL` overrides. An empty credential counts as unset.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.api_key = std::env::var(API_KEY_ENV).ok().filter(|k| !k.is_empty());
        if let Ok(url) = std::env::var(API_URL_ENV) {
            config.api_url = url;
        }
        if let Ok(model) = std::env::var(MODEL_ENV) {
            config.model = model;
        }
        config
    }

    /// Set the API credential.
    #[must_use]
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the endpoint URL.
    #[must_use]
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    /// Set the model identifier.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the total request timeout.
    #[must_use]
    pub const fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CompletionConfig::default();
        assert!(config.api_key.is_none());
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.max_history, 12);
        assert_eq!(config.max_tokens, 512);
        assert!((config.temperature - 0.2).abs() < f32::EPSILON);
    }

    #[test]
    fn test_config_builder() {
        let config = CompletionConfig::new()
            .with_api_key("test-key")
            .with_api_url("http://localhost:9999/v1/chat/completions")
            .with_model("test-model")
            .with_request_timeout(Duration::from_secs(5));

        assert_eq!(config.api_key.as_deref(), Some("test-key"));
        assert_eq!(config.api_url, "http://localhost:9999/v1/chat/completions");
        assert_eq!(config.model, "test-model");
        assert_eq!(config.request_timeout, Duration::from_secs(5));
    }
}
