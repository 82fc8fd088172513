//! LLM types — provider-neutral request/response shapes, the streaming
//! alias, and the client trait the tutor service depends on.

use std::pin::Pin;

use futures::Stream;
use serde::{Deserialize, Serialize};

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by LLM client operations.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),

    /// The required API key environment variable is not set.
    #[error("missing API key: env var {var} not set")]
    MissingApiKey { var: String },

    /// The HTTP request to the LLM provider failed.
    #[error("API request failed: {0}")]
    ApiRequest(String),

    /// The LLM provider returned a non-success HTTP status.
    #[error("API response error: status {status}")]
    ApiResponse { status: u16, body: String },

    /// The LLM provider response body could not be deserialized.
    #[error("API response parse failed: {0}")]
    ApiParse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// A streamed response broke off or carried an error event.
    #[error("stream failed: {0}")]
    Stream(String),
}

impl LlmError {
    /// Short human-readable description for status lines.
    #[must_use]
    pub fn localized(&self) -> &'static str {
        match self {
            Self::ConfigParse(_) => "The tutor is misconfigured",
            Self::MissingApiKey { .. } => "No API key is configured for the tutor",
            Self::ApiRequest(_) | Self::Stream(_) => "The tutor could not be reached",
            Self::ApiResponse { .. } => "The tutor service rejected the request",
            Self::ApiParse(_) => "The tutor sent an unreadable reply",
            Self::HttpClientBuild(_) => "The HTTP client could not start",
        }
    }
}

// =============================================================================
// MESSAGES
// =============================================================================

/// Speaker of a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

/// One role-tagged turn of conversation history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub text: String,
}

impl Message {
    #[must_use]
    pub fn user(text: impl Into<String>) -> Self {
        Self { role: Role::User, text: text.into() }
    }

    #[must_use]
    pub fn model(text: impl Into<String>) -> Self {
        Self { role: Role::Model, text: text.into() }
    }
}

/// Everything a provider needs for one completion.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatRequest {
    /// System instruction (tutoring context).
    pub system: String,
    /// Prior turns, oldest first. Does not include `message`.
    pub history: Vec<Message>,
    /// The new user question.
    pub message: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl ChatRequest {
    /// History followed by the new user message.
    pub fn turns(&self) -> impl Iterator<Item = (Role, &str)> {
        self.history
            .iter()
            .map(|m| (m.role, m.text.as_str()))
            .chain(std::iter::once((Role::User, self.message.as_str())))
    }
}

/// Result of a single-shot completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatResponse {
    pub text: String,
    pub model: String,
    pub stop_reason: Option<String>,
}

/// Lazy, finite sequence of reply fragments in arrival order.
///
/// Dropping the stream closes the underlying HTTP body.
pub type TextStream = Pin<Box<dyn Stream<Item = Result<String, LlmError>> + Send>>;

// =============================================================================
// TRAIT
// =============================================================================

/// Provider-neutral chat interface. Implemented by [`super::LlmClient`] and
/// by test doubles.
#[async_trait::async_trait]
pub trait LlmChat: Send + Sync {
    /// Request one complete reply.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or the response is malformed.
    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, LlmError>;

    /// Request a streamed reply.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent or the provider answers
    /// with a non-success status. Failures after the first byte arrive as
    /// `Err` items on the stream.
    async fn chat_stream(&self, request: &ChatRequest) -> Result<TextStream, LlmError>;
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
