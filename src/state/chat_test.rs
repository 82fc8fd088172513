use time::macros::datetime;

use super::*;

const NOW: OffsetDateTime = datetime!(2024-03-01 12:00:00 UTC);

fn fallbacks(chat: &ChatState) -> usize {
    chat.messages().iter().filter(|m| m.content == FALLBACK_REPLY).count()
}

#[test]
fn begin_appends_user_message() {
    let mut chat = ChatState::new();
    let turn = chat.begin("  what is a limit?  ", NOW).unwrap();
    assert_eq!(turn.question, "what is a limit?");
    assert!(turn.history.is_empty());
    assert!(chat.is_waiting());
    assert_eq!(chat.messages().len(), 1);
    assert_eq!(chat.messages()[0].role, Role::User);
    assert_eq!(chat.messages()[0].timestamp, 1_709_294_400_000);
}

#[test]
fn blank_question_is_rejected() {
    let mut chat = ChatState::new();
    assert_eq!(chat.begin("   ", NOW), Err(ChatError::Empty));
    assert!(chat.messages().is_empty());
    assert!(!chat.is_waiting());
}

#[test]
fn second_send_while_streaming_is_rejected() {
    let mut chat = ChatState::new();
    chat.begin("first", NOW).unwrap();
    chat.start_reply(NOW);
    chat.push_fragment("part", NOW);
    let before = chat.messages().to_vec();
    assert_eq!(chat.begin("second", NOW), Err(ChatError::Busy));
    assert_eq!(chat.messages(), before.as_slice());
}

#[test]
fn fragments_append_in_order() {
    let mut chat = ChatState::new();
    chat.begin("q", NOW).unwrap();
    chat.start_reply(NOW);
    assert_eq!(chat.messages()[1].content, "");
    for part in ["The ", "slope ", "is 2x."] {
        chat.push_fragment(part, NOW);
    }
    chat.finish();
    assert!(!chat.is_waiting());
    assert_eq!(chat.messages().len(), 2);
    assert_eq!(chat.messages()[1].role, Role::Model);
    assert_eq!(chat.messages()[1].content, "The slope is 2x.");
}

#[test]
fn fragment_without_start_opens_reply() {
    let mut chat = ChatState::new();
    chat.begin("q", NOW).unwrap();
    chat.push_fragment("hi", NOW);
    assert_eq!(chat.messages()[1].content, "hi");
}

#[test]
fn failure_appends_one_fallback_and_clears_waiting() {
    let mut chat = ChatState::new();
    chat.begin("q", NOW).unwrap();
    chat.start_reply(NOW);
    chat.fail(NOW);
    assert!(!chat.is_waiting());
    assert_eq!(fallbacks(&chat), 1);
    assert_eq!(chat.messages().len(), 2);
    chat.fail(NOW);
    assert_eq!(fallbacks(&chat), 1);
}

#[test]
fn failure_keeps_partial_reply() {
    let mut chat = ChatState::new();
    chat.begin("q", NOW).unwrap();
    chat.push_fragment("partial", NOW);
    chat.fail(NOW);
    let contents: Vec<&str> = chat.messages().iter().map(|m| m.content.as_str()).collect();
    assert_eq!(contents, vec!["q", "partial", FALLBACK_REPLY]);
}

#[test]
fn cancel_keeps_partial_and_allows_next_turn() {
    let mut chat = ChatState::new();
    let first = chat.begin("q", NOW).unwrap();
    chat.push_fragment("half an ans", NOW);
    chat.cancel();
    assert!(!chat.is_waiting());
    assert_eq!(chat.messages()[1].content, "half an ans");

    chat.push_fragment("late", NOW);
    assert_eq!(chat.messages()[1].content, "half an ans");

    let second = chat.begin("again", NOW).unwrap();
    assert_ne!(first.id, second.id);
    assert!(chat.is_current(second.id));
    assert!(!chat.is_current(first.id));
    assert_eq!(second.history.len(), 2);
}

#[test]
fn empty_reply_is_dropped_on_finish() {
    let mut chat = ChatState::new();
    chat.begin("q", NOW).unwrap();
    chat.start_reply(NOW);
    chat.finish();
    assert_eq!(chat.messages().len(), 1);
}

#[test]
fn empty_until_first_question() {
    let mut chat = ChatState::new();
    assert!(chat.is_empty());
    chat.begin("why?", NOW).unwrap();
    assert!(!chat.is_empty());
    chat.cancel();
    assert!(!chat.is_empty());
}

#[test]
fn error_messages() {
    assert_eq!(ChatError::Busy.to_string(), "a reply is still streaming");
    assert_ne!(ChatError::Empty.localized(), ChatError::Busy.localized());
}
