//! Google Gemini `generateContent` client.
//!
//! Thin HTTP wrapper for `models/{model}:generateContent` and its SSE
//! variant `:streamGenerateContent?alt=sse`. Pure parsing in
//! `parse_response` / `parse_stream_event` for testability.

use serde::{Deserialize, Serialize};

use super::config::LlmTimeouts;
use super::http;
use super::sse::{self, SseEvent};
use super::types::{ChatRequest, ChatResponse, LlmError, Role, TextStream};

// =============================================================================
// CLIENT
// =============================================================================

pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(api_key: String, base_url: String, timeouts: LlmTimeouts) -> Result<Self, LlmError> {
        Ok(Self { http: http::client(timeouts)?, api_key, base_url })
    }

    fn post(&self, model: &str, method: &str, request: &ChatRequest) -> reqwest::RequestBuilder {
        let url = format!("{}/models/{model}:{method}", self.base_url);
        self.http
            .post(url)
            .header("x-goog-api-key", &self.api_key)
            .json(&build_request(request))
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the response is malformed.
    pub async fn chat(&self, model: &str, request: &ChatRequest) -> Result<ChatResponse, LlmError> {
        let text = http::send_for_text(self.post(model, "generateContent", request)).await?;
        parse_response(&text, model)
    }

    /// # Errors
    ///
    /// Returns an error if the request cannot be sent or is rejected.
    pub async fn chat_stream(&self, model: &str, request: &ChatRequest) -> Result<TextStream, LlmError> {
        let response = http::send(self.post(model, "streamGenerateContent?alt=sse", request)).await?;
        Ok(sse::text_stream(response.bytes_stream(), parse_stream_event))
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ApiRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<ApiContent<'a>>,
    contents: Vec<ApiContent<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct ApiContent<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'static str>,
    parts: Vec<ApiPart<'a>>,
}

#[derive(Debug, Serialize)]
struct ApiPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    model_version: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    thought: bool,
}

fn role_name(role: Role) -> &'static str {
    match role {
        Role::User => "user",
        Role::Model => "model",
    }
}

fn build_request(request: &ChatRequest) -> ApiRequest<'_> {
    let system_instruction = (!request.system.is_empty())
        .then(|| ApiContent { role: None, parts: vec![ApiPart { text: &request.system }] });
    let contents = request
        .turns()
        .map(|(role, text)| ApiContent { role: Some(role_name(role)), parts: vec![ApiPart { text }] })
        .collect();
    ApiRequest {
        system_instruction,
        contents,
        generation_config: GenerationConfig {
            temperature: request.temperature,
            max_output_tokens: request.max_tokens,
        },
    }
}

// =============================================================================
// PARSING
// =============================================================================

impl ApiResponse {
    /// Visible text of the first candidate.
    fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        Some(
            content
                .parts
                .iter()
                .filter(|p| !p.thought)
                .filter_map(|p| p.text.as_deref())
                .collect(),
        )
    }
}

fn parse_response(json: &str, model: &str) -> Result<ChatResponse, LlmError> {
    let api: ApiResponse = serde_json::from_str(json).map_err(|e| LlmError::ApiParse(e.to_string()))?;
    let text = api
        .text()
        .ok_or_else(|| LlmError::ApiParse("response has no candidates".into()))?;
    let stop_reason = api.candidates.first().and_then(|c| c.finish_reason.clone());
    Ok(ChatResponse { text, model: api.model_version.unwrap_or_else(|| model.to_string()), stop_reason })
}

fn parse_stream_event(event: &SseEvent) -> Result<Option<String>, LlmError> {
    let api: ApiResponse = serde_json::from_str(&event.data).map_err(|e| LlmError::ApiParse(e.to_string()))?;
    Ok(api.text())
}

#[cfg(test)]
#[path = "gemini_test.rs"]
mod tests;
