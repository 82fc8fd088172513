//! Shared HTTP plumbing for the provider clients.

use std::time::Duration;

use super::config::LlmTimeouts;
use super::types::LlmError;

/// Build a client with the configured timeouts.
pub(crate) fn client(timeouts: LlmTimeouts) -> Result<reqwest::Client, LlmError> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(timeouts.request_secs))
        .connect_timeout(Duration::from_secs(timeouts.connect_secs))
        .build()
        .map_err(|e| LlmError::HttpClientBuild(e.to_string()))
}

/// Send a request and reject non-success statuses with their body.
pub(crate) async fn send(request: reqwest::RequestBuilder) -> Result<reqwest::Response, LlmError> {
    let response = request.send().await.map_err(|e| LlmError::ApiRequest(e.to_string()))?;
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    tracing::warn!(status = status.as_u16(), "llm request rejected");
    Err(LlmError::ApiResponse { status: status.as_u16(), body })
}

/// Send a request and read the whole success body.
pub(crate) async fn send_for_text(request: reqwest::RequestBuilder) -> Result<String, LlmError> {
    send(request)
        .await?
        .text()
        .await
        .map_err(|e| LlmError::ApiRequest(e.to_string()))
}
