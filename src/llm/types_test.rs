use super::*;

fn request() -> ChatRequest {
    ChatRequest {
        system: "sys".into(),
        history: vec![Message::user("what is a limit?"), Message::model("a value approached")],
        message: "and a derivative?".into(),
        max_tokens: 64,
        temperature: 0.5,
    }
}

#[test]
fn turns_end_with_new_message() {
    let req = request();
    let turns: Vec<_> = req.turns().collect();
    assert_eq!(
        turns,
        vec![
            (Role::User, "what is a limit?"),
            (Role::Model, "a value approached"),
            (Role::User, "and a derivative?"),
        ]
    );
}

#[test]
fn turns_without_history() {
    let mut req = request();
    req.history.clear();
    assert_eq!(req.turns().count(), 1);
}

#[test]
fn role_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Model).unwrap(), "\"model\"");
    let msg: Message = serde_json::from_str(r#"{"role":"user","text":"hi"}"#).unwrap();
    assert_eq!(msg, Message::user("hi"));
}

#[test]
fn error_display_includes_detail() {
    let err = LlmError::MissingApiKey { var: "GEMINI_API_KEY".into() };
    assert_eq!(err.to_string(), "missing API key: env var GEMINI_API_KEY not set");
    let err = LlmError::ApiResponse { status: 429, body: "slow down".into() };
    assert_eq!(err.to_string(), "API response error: status 429");
}

#[test]
fn localized_groups_transport_failures() {
    assert_eq!(LlmError::ApiRequest("x".into()).localized(), LlmError::Stream("y".into()).localized());
    assert_ne!(LlmError::ApiParse("x".into()).localized(), LlmError::ApiRequest("x".into()).localized());
}
