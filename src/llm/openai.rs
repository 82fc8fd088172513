//! `OpenAI` Chat Completions client.
//!
//! Thin HTTP wrapper for `/chat/completions`; works with any compatible
//! endpoint via `LLM_BASE_URL`. Streams end with a `[DONE]` data line.

use serde::{Deserialize, Serialize};

use super::config::LlmTimeouts;
use super::http;
use super::sse::{self, SseEvent};
use super::types::{ChatRequest, ChatResponse, LlmError, Role, TextStream};

// =============================================================================
// CLIENT
// =============================================================================

pub struct OpenAiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl OpenAiClient {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(api_key: String, base_url: String, timeouts: LlmTimeouts) -> Result<Self, LlmError> {
        Ok(Self { http: http::client(timeouts)?, api_key, base_url })
    }

    fn post(&self, model: &str, request: &ChatRequest, stream: bool) -> reqwest::RequestBuilder {
        self.http
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
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
    messages: Vec<ApiMessage<'a>>,
    max_tokens: u32,
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
    #[serde(default)]
    choices: Vec<Choice>,
    #[serde(default)]
    model: String,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct StreamChunk {
    #[serde(default)]
    choices: Vec<StreamChoice>,
}

#[derive(Debug, Deserialize)]
struct StreamChoice {
    #[serde(default)]
    delta: StreamDelta,
}

#[derive(Debug, Default, Deserialize)]
struct StreamDelta {
    #[serde(default)]
    content: Option<String>,
}

fn role_name(role: Role) -> &'static str {
    match role {
        Role::User => "user",
        Role::Model => "assistant",
    }
}

fn build_request<'a>(model: &'a str, request: &'a ChatRequest, stream: bool) -> ApiRequest<'a> {
    let system = (!request.system.is_empty()).then(|| ApiMessage { role: "system", content: &request.system });
    let messages = system
        .into_iter()
        .chain(request.turns().map(|(role, content)| ApiMessage { role: role_name(role), content }))
        .collect();
    ApiRequest { model, messages, max_tokens: request.max_tokens, temperature: request.temperature, stream }
}

// =============================================================================
// PARSING
// =============================================================================

fn parse_response(json: &str) -> Result<ChatResponse, LlmError> {
    let api: ApiResponse = serde_json::from_str(json).map_err(|e| LlmError::ApiParse(e.to_string()))?;
    let choice = api
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| LlmError::ApiParse("response has no choices".into()))?;
    Ok(ChatResponse {
        text: choice.message.content.unwrap_or_default(),
        model: api.model,
        stop_reason: choice.finish_reason,
    })
}

fn parse_stream_event(event: &SseEvent) -> Result<Option<String>, LlmError> {
    let chunk: StreamChunk = serde_json::from_str(&event.data).map_err(|e| LlmError::ApiParse(e.to_string()))?;
    let text: String = chunk.choices.into_iter().filter_map(|c| c.delta.content).collect();
    Ok((!text.is_empty()).then_some(text))
}

#[cfg(test)]
#[path = "openai_test.rs"]
mod tests;
