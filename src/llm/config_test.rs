#![allow(clippy::float_cmp)]

use std::collections::HashMap;

use super::*;

fn config(vars: &[(&str, &str)]) -> Result<LlmConfig, LlmError> {
    let map: HashMap<String, String> = vars.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
    LlmConfig::from_lookup(|key| map.get(key).cloned())
}

#[test]
fn defaults_to_gemini() {
    let cfg = config(&[("GEMINI_API_KEY", "g-key")]).unwrap();
    assert_eq!(cfg.provider, LlmProviderKind::Gemini);
    assert_eq!(cfg.model, "gemini-3-flash-preview");
    assert_eq!(cfg.base_url, DEFAULT_GEMINI_BASE_URL);
    assert_eq!(cfg.key_var, "GEMINI_API_KEY");
    assert_eq!(cfg.api_key.as_deref(), Some("g-key"));
    assert_eq!(cfg.temperature, DEFAULT_LLM_TEMPERATURE);
    assert_eq!(cfg.max_tokens, DEFAULT_LLM_MAX_TOKENS);
    assert_eq!(
        cfg.timeouts,
        LlmTimeouts { request_secs: DEFAULT_LLM_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_LLM_CONNECT_TIMEOUT_SECS }
    );
}

#[test]
fn missing_key_is_not_fatal() {
    let cfg = config(&[]).unwrap();
    assert!(cfg.api_key.is_none());
    let err = cfg.require_key().unwrap_err();
    assert!(matches!(err, LlmError::MissingApiKey { var } if var == "GEMINI_API_KEY"));
}

#[test]
fn blank_key_counts_as_missing() {
    let cfg = config(&[("GEMINI_API_KEY", "  ")]).unwrap();
    assert!(cfg.api_key.is_none());
}

#[test]
fn parses_openai_overrides() {
    let cfg = config(&[
        ("LLM_PROVIDER", "openai"),
        ("LLM_API_KEY_ENV", "TEST_KEY"),
        ("TEST_KEY", "sk-test"),
        ("LLM_MODEL", "gpt-4.1-mini"),
        ("LLM_BASE_URL", "https://example.test/v1/"),
        ("LLM_TEMPERATURE", "0.2"),
        ("LLM_MAX_TOKENS", "256"),
        ("LLM_REQUEST_TIMEOUT_SECS", "30"),
        ("LLM_CONNECT_TIMEOUT_SECS", "3"),
    ])
    .unwrap();
    assert_eq!(cfg.provider, LlmProviderKind::OpenAi);
    assert_eq!(cfg.require_key().unwrap(), "sk-test");
    assert_eq!(cfg.model, "gpt-4.1-mini");
    assert_eq!(cfg.base_url, "https://example.test/v1");
    assert_eq!(cfg.temperature, 0.2);
    assert_eq!(cfg.max_tokens, 256);
    assert_eq!(cfg.timeouts, LlmTimeouts { request_secs: 30, connect_secs: 3 });
}

#[test]
fn anthropic_uses_its_own_key_var() {
    let cfg = config(&[("LLM_PROVIDER", "anthropic"), ("ANTHROPIC_API_KEY", "a-key")]).unwrap();
    assert_eq!(cfg.provider, LlmProviderKind::Anthropic);
    assert_eq!(cfg.model, "claude-sonnet-4-5-20250929");
    assert_eq!(cfg.base_url, DEFAULT_ANTHROPIC_BASE_URL);
    assert_eq!(cfg.api_key.as_deref(), Some("a-key"));
}

#[test]
fn invalid_numbers_fall_back() {
    let cfg = config(&[("LLM_MAX_TOKENS", "lots"), ("LLM_REQUEST_TIMEOUT_SECS", "-5")]).unwrap();
    assert_eq!(cfg.max_tokens, DEFAULT_LLM_MAX_TOKENS);
    assert_eq!(cfg.timeouts.request_secs, DEFAULT_LLM_REQUEST_TIMEOUT_SECS);
}

#[test]
fn unknown_provider_is_an_error() {
    let err = config(&[("LLM_PROVIDER", "mystery")]).unwrap_err();
    assert!(matches!(err, LlmError::ConfigParse(msg) if msg.contains("mystery")));
}
