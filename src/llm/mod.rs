//! LLM — multi-provider adapter for the tutoring chat.
//!
//! DESIGN
//! ======
//! Configured from environment variables. The `LlmClient` enum dispatches to
//! Gemini, Anthropic or `OpenAI` based on `LLM_PROVIDER`. Everything above
//! this module talks to the provider-neutral [`LlmChat`] trait, so tests
//! swap in a mock without touching the network.

pub mod anthropic;
pub mod config;
pub mod gemini;
mod http;
pub mod openai;
pub mod sse;
pub mod types;

use config::{LlmConfig, LlmProviderKind};
pub use types::{ChatRequest, ChatResponse, LlmChat, LlmError, Message, Role, TextStream};

// =============================================================================
// CLIENT DISPATCH
// =============================================================================

/// Concrete LLM client that dispatches to the configured provider.
pub struct LlmClient {
    inner: LlmProvider,
    model: String,
}

enum LlmProvider {
    Gemini(gemini::GeminiClient),
    Anthropic(anthropic::AnthropicClient),
    OpenAi(openai::OpenAiClient),
}

impl LlmClient {
    /// Build an LLM client from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider is unknown, the API key is missing,
    /// or the HTTP client fails to build.
    pub fn from_env() -> Result<Self, LlmError> {
        Self::from_config(&LlmConfig::from_env()?)
    }

    /// Build an LLM client from a parsed typed config.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing or the HTTP client fails
    /// to build.
    pub fn from_config(config: &LlmConfig) -> Result<Self, LlmError> {
        let key = config.require_key()?.to_string();
        let base_url = config.base_url.clone();
        let inner = match config.provider {
            LlmProviderKind::Gemini => LlmProvider::Gemini(gemini::GeminiClient::new(key, base_url, config.timeouts)?),
            LlmProviderKind::Anthropic => {
                LlmProvider::Anthropic(anthropic::AnthropicClient::new(key, base_url, config.timeouts)?)
            }
            LlmProviderKind::OpenAi => LlmProvider::OpenAi(openai::OpenAiClient::new(key, base_url, config.timeouts)?),
        };
        Ok(Self { inner, model: config.model.clone() })
    }

    /// Return the configured model name.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait::async_trait]
impl LlmChat for LlmClient {
    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, LlmError> {
        match &self.inner {
            LlmProvider::Gemini(c) => c.chat(&self.model, request).await,
            LlmProvider::Anthropic(c) => c.chat(&self.model, request).await,
            LlmProvider::OpenAi(c) => c.chat(&self.model, request).await,
        }
    }

    async fn chat_stream(&self, request: &ChatRequest) -> Result<TextStream, LlmError> {
        match &self.inner {
            LlmProvider::Gemini(c) => c.chat_stream(&self.model, request).await,
            LlmProvider::Anthropic(c) => c.chat_stream(&self.model, request).await,
            LlmProvider::OpenAi(c) => c.chat_stream(&self.model, request).await,
        }
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
