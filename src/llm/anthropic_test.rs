use super::*;
use crate::llm::types::Message;

fn request() -> ChatRequest {
    ChatRequest {
        system: "tutor".into(),
        history: vec![Message::user("q1"), Message::model("a1")],
        message: "q2".into(),
        max_tokens: 256,
        temperature: 0.3,
    }
}

fn event(data: serde_json::Value) -> SseEvent {
    SseEvent { event: data["type"].as_str().map(String::from), data: data.to_string() }
}

#[test]
fn request_maps_model_role_to_assistant() {
    let req = request();
    let body = serde_json::to_value(build_request("claude-test", &req, false)).unwrap();
    assert_eq!(body["model"], "claude-test");
    assert_eq!(body["system"], "tutor");
    assert_eq!(body["messages"][1]["role"], "assistant");
    assert_eq!(body["messages"][2]["content"], "q2");
    assert!(body.get("stream").is_none());
}

#[test]
fn streaming_request_sets_flag() {
    let req = request();
    let body = serde_json::to_value(build_request("m", &req, true)).unwrap();
    assert_eq!(body["stream"], true);
}

#[test]
fn parse_text_response() {
    let json = serde_json::json!({
        "id": "msg_1",
        "type": "message",
        "role": "assistant",
        "content": [
            { "type": "text", "text": "Hello " },
            { "type": "some_future_type", "data": {} },
            { "type": "text", "text": "world" }
        ],
        "model": "claude-sonnet-4-5-20250929",
        "stop_reason": "end_turn",
        "usage": { "input_tokens": 10, "output_tokens": 5 }
    })
    .to_string();
    let resp = parse_response(&json).unwrap();
    assert_eq!(resp.text, "Hello world");
    assert_eq!(resp.model, "claude-sonnet-4-5-20250929");
    assert_eq!(resp.stop_reason.as_deref(), Some("end_turn"));
}

#[test]
fn parse_invalid_json() {
    assert!(matches!(parse_response("{broken"), Err(LlmError::ApiParse(_))));
}

#[test]
fn stream_text_delta() {
    let ev = event(serde_json::json!({
        "type": "content_block_delta",
        "index": 0,
        "delta": { "type": "text_delta", "text": "Consider" }
    }));
    assert_eq!(parse_stream_event(&ev).unwrap().as_deref(), Some("Consider"));
}

#[test]
fn stream_bookkeeping_events_are_skipped() {
    for data in [
        serde_json::json!({ "type": "message_start", "message": {} }),
        serde_json::json!({ "type": "ping" }),
        serde_json::json!({ "type": "content_block_delta", "index": 0, "delta": { "type": "input_json_delta", "partial_json": "{" } }),
        serde_json::json!({ "type": "message_stop" }),
    ] {
        assert_eq!(parse_stream_event(&event(data)).unwrap(), None);
    }
}

#[test]
fn stream_error_event() {
    let ev = event(serde_json::json!({
        "type": "error",
        "error": { "type": "overloaded_error", "message": "Overloaded" }
    }));
    assert!(matches!(parse_stream_event(&ev), Err(LlmError::Stream(msg)) if msg == "Overloaded"));
}
