//! Completion client for the upstream chat endpoint.
//!
//! One synchronous request/response pass per call: assemble the system prompt
//! plus the truncated history, POST to the configured chat-completion
//! endpoint, extract the first choice's message content. No retry, no
//! streaming, no state kept between calls.

pub mod config;
pub mod error;
pub mod prompt;
pub mod types;

pub use config::CompletionConfig;
pub use error::CompletionError;
pub use types::{ChatMessage, ChatRole};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Abstraction over reply generation.
///
/// [`CompletionClient`] is the production implementation; request handlers are
/// written against the trait so they can be exercised with a stubbed upstream.
#[async_trait]
pub trait ReplyGenerator: Send + Sync {
    /// Produce the model's raw reply text for an ordered conversation.
    async fn generate_reply(&self, history: &[ChatMessage]) -> Result<String, CompletionError>;
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

/// HTTP client for the upstream chat-completion endpoint.
pub struct CompletionClient {
    config: CompletionConfig,
    http: reqwest::Client,
}

impl CompletionClient {
    /// Create a client from the given configuration.
    ///
    /// The HTTP client is built once, with explicit connect and request
    /// timeouts so a stalled upstream cannot hold a request forever.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: CompletionConfig) -> Result<Self, CompletionError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self { config, http })
    }

    /// Credential check performed before any network I/O, so a missing key is
    /// reported as a configuration failure rather than a transport one.
    fn api_key(&self) -> Result<&str, CompletionError> {
        self.config
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or(CompletionError::MissingApiKey)
    }
}

#[async_trait]
impl ReplyGenerator for CompletionClient {
    async fn generate_reply(&self, history: &[ChatMessage]) -> Result<String, CompletionError> {
        let api_key = self.api_key()?;

        let request = ChatCompletionRequest {
            model: &self.config.model,
            messages: prompt::assemble_messages(history, self.config.max_history),
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        };

        let response = self
            .http
            .post(&self.config.api_url)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("completion endpoint returned {status}: {body}");
            return Err(CompletionError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        let decoded: ChatCompletionResponse = response.json().await?;
        decoded
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(CompletionError::MalformedResponse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_credential_fails_before_any_network_io() {
        // Endpoint is unroutable on purpose: the call must fail on the
        // credential check, not on the transport.
        let config = CompletionConfig::new().with_api_url("http://192.0.2.1:1/unreachable");
        let client = CompletionClient::new(config).unwrap();

        let err = client
            .generate_reply(&[ChatMessage::user("hello")])
            .await
            .unwrap_err();
        assert!(matches!(err, CompletionError::MissingApiKey));
    }

    #[tokio::test]
    async fn test_empty_credential_counts_as_missing() {
        let config = CompletionConfig::new()
            .with_api_key("")
            .with_api_url("http://192.0.2.1:1/unreachable");
        let client = CompletionClient::new(config).unwrap();

        let err = client.generate_reply(&[]).await.unwrap_err();
        assert!(matches!(err, CompletionError::MissingApiKey));
    }

    #[test]
    fn test_outbound_payload_shape() {
        let history: Vec<ChatMessage> =
            (0..15).map(|i| ChatMessage::user(format!("m{i}"))).collect();
        let request = ChatCompletionRequest {
            model: "llama3.1-8b",
            messages: prompt::assemble_messages(&history, 12),
            temperature: 0.2,
            max_tokens: 512,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "llama3.1-8b");
        assert_eq!(value["max_tokens"], 512);
        // f32 widens when stored in a Value, so compare approximately.
        let temperature = value["temperature"].as_f64().unwrap();
        assert!((temperature - 0.2).abs() < 1e-6);

        // System prompt plus the last 12 of 15 messages.
        let messages = value["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 13);
        assert_eq!(messages[0]["role"], "system");
        assert_eq!(messages[1]["content"], "m3");
        assert_eq!(messages[12]["content"], "m14");
    }

    #[test]
    fn test_forwarded_roles_are_always_valid() {
        // Roles enter through the typed boundary, so whatever was in the
        // inbound JSON has already been normalized by the time it is here.
        let history: Vec<ChatMessage> = serde_json::from_str(
            r#"[
                {"role": "customer", "content": "a"},
                {"role": "assistant", "content": "b"},
                {"content": "c"}
            ]"#,
        )
        .unwrap();

        let request = ChatCompletionRequest {
            model: "llama3.1-8b",
            messages: prompt::assemble_messages(&history, 12),
            temperature: 0.2,
            max_tokens: 512,
        };
        let value = serde_json::to_value(&request).unwrap();
        let messages = value["messages"].as_array().unwrap();
        assert_eq!(messages[1]["role"], "user");
        assert_eq!(messages[2]["role"], "assistant");
        assert_eq!(messages[3]["role"], "user");
    }

    #[test]
    fn test_response_decoding() {
        let decoded: ChatCompletionResponse = serde_json::from_str(
            r#"{"choices": [{"message": {"role": "assistant", "content": "hi there"}}]}"#,
        )
        .unwrap();
        assert_eq!(decoded.choices[0].message.content, "hi there");

        let empty: ChatCompletionResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert!(empty.choices.is_empty());
    }
}
