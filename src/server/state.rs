//! Application state shared across all request handlers.

use std::sync::Arc;

use crate::completion::{CompletionClient, CompletionConfig, ReplyGenerator};
use crate::safety::ReplySanitizer;

/// Shared application state.
///
/// Immutable after startup; requests never coordinate through it.
pub struct AppState {
    /// Upstream reply generator.
    pub completion: Arc<dyn ReplyGenerator>,
    /// Sanitizer applied to every reply before it leaves the service.
    pub sanitizer: ReplySanitizer,
}

impl AppState {
    /// Create the application state from a completion configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client or the sanitizer patterns cannot
    /// be built.
    pub fn new(
        config: CompletionConfig,
    ) -> Result<Arc<Self>, Box<dyn std::error::Error + Send + Sync>> {
        let completion = CompletionClient::new(config)
            .map_err(|e| format!("Failed to create completion client: {e}"))?;
        let sanitizer = ReplySanitizer::new()
            .map_err(|e| format!("Failed to compile sanitizer patterns: {e}"))?;

        Ok(Arc::new(Self {
            completion: Arc::new(completion),
            sanitizer,
        }))
    }

    /// Assemble state from explicit parts.
    ///
    /// Used by tests to swap in a stubbed reply generator.
    #[must_use]
    pub fn with_generator(completion: Arc<dyn ReplyGenerator>, sanitizer: ReplySanitizer) -> Arc<Self> {
        Arc::new(Self {
            completion,
            sanitizer,
        })
    }
}
