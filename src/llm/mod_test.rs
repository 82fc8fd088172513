use super::*;
use crate::llm::config::LlmTimeouts;

fn config(provider: LlmProviderKind, api_key: Option<&str>) -> LlmConfig {
    LlmConfig {
        provider,
        key_var: provider.default_key_var().to_string(),
        api_key: api_key.map(String::from),
        model: provider.default_model().to_string(),
        base_url: provider.default_base_url().to_string(),
        temperature: 0.7,
        max_tokens: 1024,
        timeouts: LlmTimeouts { request_secs: 5, connect_secs: 1 },
    }
}

#[test]
fn client_requires_key() {
    let err = LlmClient::from_config(&config(LlmProviderKind::Gemini, None)).err().unwrap();
    assert!(matches!(err, LlmError::MissingApiKey { var } if var == "GEMINI_API_KEY"));
}

#[test]
fn client_builds_for_every_provider() {
    for provider in [LlmProviderKind::Gemini, LlmProviderKind::Anthropic, LlmProviderKind::OpenAi] {
        let client = LlmClient::from_config(&config(provider, Some("key"))).unwrap();
        assert_eq!(client.model(), provider.default_model());
    }
}
