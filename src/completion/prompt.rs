//! System prompt and outbound message assembly.

use super::types::{ChatMessage, ChatRole};

/// Fixed instruction prepended to every conversation sent upstream.
pub const SYSTEM_PROMPT: &str = "You are a helpful customer support assistant.

Rules:
1. Always acknowledge the customer's issue with empathy.
2. Ask 2-4 clarifying questions.
3. Provide general safe next steps.
4. Do not make guarantees or promises.
5. Do not invent facts.
6. If information is missing, ask for it.
7. Use friendly and professional tone.
";

/// Build the upstream message list: the system prompt followed by a sliding
/// window over the most recent `max_history` conversation messages.
///
/// Truncation keeps the tail of the conversation; there is no summarization.
#[must_use]
pub fn assemble_messages(history: &[ChatMessage], max_history: usize) -> Vec<ChatMessage> {
    let start = history.len().saturating_sub(max_history);
    let window = &history[start..];

    let mut messages = Vec::with_capacity(window.len() + 1);
    messages.push(ChatMessage::system(SYSTEM_PROMPT));
    messages.extend_from_slice(window);
    messages
}
