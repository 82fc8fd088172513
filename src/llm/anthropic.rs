//! Anthropic Messages API client.
//!
//! Thin HTTP wrapper for `/v1/messages`, single-shot and streamed. Pure
//! parsing in `parse_response` / `parse_stream_event` for testability.

use serde::{Deserialize, Serialize};

use super::config::LlmTimeouts;
use super::http;
use super::sse::{self, SseEvent};
use super::types::{ChatRequest, ChatResponse, LlmError, Role, TextStream};

const API_VERSION: &str = "2023-06-01";

// =============================================================================
// CLIENT
// =============================================================================

pub struct AnthropicClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl AnthropicClient {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(api_key: String, base_url: String, timeouts: LlmTimeouts) -> Result<Self, LlmError> {
        Ok(Self { http: http::client(timeouts)?, api_key, base_url })
    }

    fn post(&self, model: &str, request: &ChatRequest, stream: bool) -> reqwest::RequestBuilder {
        self.http
            .post(format!("{}/messages", self.base_url))
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .json(&build_request(model, request, stream))
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the response is malformed.
    pub async fn chat(&self, model: &str, request: &ChatRequest) -> Result<ChatResponse, LlmError> {
        let text = http::send_for_text(self.post(model, request, false)).await?;
        parse_response(&text)
    }

    /// # Errors
    ///
    /// Returns an error if the request cannot be sent or is rejected.
    pub async fn chat_stream(&self, model: &str, request: &ChatRequest) -> Result<TextStream, LlmError> {
        let response = http::send(self.post(model, request, true)).await?;
        Ok(sse::text_stream(response.bytes_stream(), parse_stream_event))
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Debug, Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    #[serde(skip_serializing_if = "str::is_empty")]
    system: &'a str,
    messages: Vec<ApiMessage<'a>>,
    temperature: f32,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    stream: bool,
}

#[derive(Debug, Serialize)]
struct ApiMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    content: Vec<ContentBlock>,
    model: String,
    #[serde(default)]
    stop_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
enum ContentBlock {
    #[serde(rename = "text")]
    Text { text: String },
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
enum StreamEvent {
    #[serde(rename = "content_block_delta")]
    ContentBlockDelta { delta: Delta },
    #[serde(rename = "error")]
    Error { error: ApiErrorBody },
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
enum Delta {
    #[serde(rename = "text_delta")]
    Text { text: String },
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: String,
}

fn role_name(role: Role) -> &'static str {
    match role {
        Role::User => "user",
        Role::Model => "assistant",
    }
}

fn build_request<'a>(model: &'a str, request: &'a ChatRequest, stream: bool) -> ApiRequest<'a> {
    ApiRequest {
        model,
        max_tokens: request.max_tokens,
        system: &request.system,
        messages: request
            .turns()
            .map(|(role, content)| ApiMessage { role: role_name(role), content })
            .collect(),
        temperature: request.temperature,
        stream,
    }
}

// =============================================================================
// PARSING
// =============================================================================

fn parse_response(json: &str) -> Result<ChatResponse, LlmError> {
    let api: ApiResponse = serde_json::from_str(json).map_err(|e| LlmError::ApiParse(e.to_string()))?;
    let text = api
        .content
        .into_iter()
        .filter_map(|block| match block {
            ContentBlock::Text { text } => Some(text),
            ContentBlock::Unknown => None,
        })
        .collect();
    Ok(ChatResponse { text, model: api.model, stop_reason: api.stop_reason })
}

fn parse_stream_event(event: &SseEvent) -> Result<Option<String>, LlmError> {
    let parsed: StreamEvent = serde_json::from_str(&event.data).map_err(|e| LlmError::ApiParse(e.to_string()))?;
    match parsed {
        StreamEvent::ContentBlockDelta { delta: Delta::Text { text } } => Ok(Some(text)),
        StreamEvent::Error { error } => Err(LlmError::Stream(error.message)),
        StreamEvent::ContentBlockDelta { delta: Delta::Other } | StreamEvent::Other => Ok(None),
    }
}

#[cfg(test)]
#[path = "anthropic_test.rs"]
mod tests;
