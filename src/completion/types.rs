//! Typed conversation messages exchanged with the completion endpoint.

use serde::{Deserialize, Deserializer, Serialize};

/// Author of a conversation message.
///
/// The upstream API only accepts `user`, `assistant` and `system`; anything
/// else is normalized to `user` at the inbound boundary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    /// The customer.
    #[default]
    User,
    /// The model.
    Assistant,
    /// The injected system instruction.
    System,
}

impl ChatRole {
    /// Parse a role string, falling back to `User` for unknown values.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "assistant" => Self::Assistant,
            "system" => Self::System,
            _ => Self::User,
        }
    }

    /// Wire representation of the role.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
            Self::System => "system",
        }
    }
}

impl<'de> Deserialize<'de> for ChatRole {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Unknown roles degrade to `user` instead of rejecting the payload.
        let value = String::deserialize(deserializer)?;
        Ok(Self::parse(&value))
    }
}

/// One role-tagged message in a conversation.
///
/// Exists only for the duration of a single request; no identity, no
/// timestamps, no persistence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Message author; absent or unknown roles fall back to `user`.
    #[serde(default)]
    pub role: ChatRole,
    /// Message text.
    pub content: String,
}

impl ChatMessage {
    /// Create a message with the given role.
    pub fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Create a `user` message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(ChatRole::User, content)
    }

    /// Create a `system` message.
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(ChatRole::System, content)
    }
}
