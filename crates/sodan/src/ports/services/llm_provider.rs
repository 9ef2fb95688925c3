//! LLM Provider Port
//!
//! Abstract interface for hosted text-generation models.
//! One instance is built at startup and shared by every request.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{ModelSettings, Prompt};

/// Classified failure of a model invocation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Rate limited by provider")]
    RateLimited { retry_after: Option<Duration> },

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Timed out after {0:?}")]
    Timeout(Duration),

    #[error("Request cancelled")]
    Cancelled,
}

/// LLM Provider interface
///
/// Implementations must not retry on their own; callers decide what a
/// failure means.
///
/// # Example
///
/// ```rust,ignore
/// use sodan::ports::LlmProvider;
///
/// struct OpenAiProvider { /* ... */ }
///
/// #[async_trait]
/// impl LlmProvider for OpenAiProvider {
///     async fn complete(&self, prompt: &Prompt, settings: &ModelSettings)
///         -> Result<String, ModelError> {
///         // Call the chat completions API
///     }
///     // ...
/// }
/// ```
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Send the prompt and return the generated text unmodified
    async fn complete(&self, prompt: &Prompt, settings: &ModelSettings)
        -> Result<String, ModelError>;

    /// Get the provider name (e.g., "openai")
    fn provider_name(&self) -> &str;
}
