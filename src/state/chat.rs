//! Chat transcript and the in-flight reply.
//!
//! Messages are only ever appended, except that a model reply which never
//! received a fragment is removed again when its turn ends. A turn moves
//! through `begin` (user message appended, waiting set), `start_reply` (empty
//! model message appended), any number of `push_fragment` calls, and exactly
//! one of `finish`, `fail` or `cancel`. Only one turn may be in flight.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use time::OffsetDateTime;

use crate::llm::Role;

/// Appended when the completion transport fails.
pub const FALLBACK_REPLY: &str = "Sorry — the derivation hit a little turbulence. Please try again in a moment.";

/// Starter questions offered while the transcript is empty.
pub const QUICK_QUESTIONS: [&str; 3] = ["Why is there a ½?", "What is the geometric meaning?", "How is it derived?"];

/// Why a question was not sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ChatError {
    #[error("question is empty")]
    Empty,
    #[error("a reply is still streaming")]
    Busy,
}

impl ChatError {
    #[must_use]
    pub fn localized(self) -> &'static str {
        match self {
            Self::Empty => "Type a question first",
            Self::Busy => "Wait for the current answer",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
    /// Unix milliseconds.
    pub timestamp: i64,
}

impl ChatMessage {
    #[must_use]
    pub fn new(role: Role, content: impl Into<String>, now: OffsetDateTime) -> Self {
        Self { role, content: content.into(), timestamp: unix_millis(now) }
    }
}

fn unix_millis(now: OffsetDateTime) -> i64 {
    i64::try_from(now.unix_timestamp_nanos() / 1_000_000).unwrap_or(i64::MAX)
}

/// A question accepted by [`ChatState::begin`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatTurn {
    /// Identifies this turn's events; stale events carry an older id.
    pub id: u64,
    pub question: String,
    /// Transcript before the question, oldest first.
    pub history: Vec<ChatMessage>,
}

#[derive(Debug, Default)]
pub struct ChatState {
    messages: Vec<ChatMessage>,
    /// Id of the turn in flight.
    active: Option<u64>,
    /// Index of the model message being streamed into.
    reply: Option<usize>,
    next_id: u64,
}

impl ChatState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Whether quick questions should be offered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty() && !self.is_waiting()
    }

    /// Whether a reply is pending.
    #[must_use]
    pub fn is_waiting(&self) -> bool {
        self.active.is_some()
    }

    /// Whether `turn` is the one in flight.
    #[must_use]
    pub fn is_current(&self, turn: u64) -> bool {
        self.active == Some(turn)
    }

    /// Accept a question and append it to the transcript.
    ///
    /// # Errors
    ///
    /// [`ChatError::Empty`] for a blank question, [`ChatError::Busy`] while
    /// another turn is in flight. The transcript is unchanged in both cases.
    pub fn begin(&mut self, question: &str, now: OffsetDateTime) -> Result<ChatTurn, ChatError> {
        let question = question.trim();
        if question.is_empty() {
            return Err(ChatError::Empty);
        }
        if self.is_waiting() {
            return Err(ChatError::Busy);
        }
        let history = self.messages.clone();
        self.messages.push(ChatMessage::new(Role::User, question, now));
        let id = self.next_id;
        self.next_id += 1;
        self.active = Some(id);
        self.reply = None;
        Ok(ChatTurn { id, question: question.to_string(), history })
    }

    /// Append the empty model message fragments stream into.
    pub fn start_reply(&mut self, now: OffsetDateTime) {
        if self.is_waiting() && self.reply.is_none() {
            self.messages.push(ChatMessage::new(Role::Model, "", now));
            self.reply = Some(self.messages.len() - 1);
        }
    }

    /// Append a fragment to the reply, starting it if needed.
    pub fn push_fragment(&mut self, fragment: &str, now: OffsetDateTime) {
        if !self.is_waiting() {
            return;
        }
        self.start_reply(now);
        if let Some(msg) = self.reply.and_then(|i| self.messages.get_mut(i)) {
            msg.content.push_str(fragment);
        }
    }

    /// The reply completed normally.
    pub fn finish(&mut self) {
        self.drop_empty_reply();
        self.settle();
    }

    /// The transport failed: append the fallback message.
    pub fn fail(&mut self, now: OffsetDateTime) {
        if !self.is_waiting() {
            return;
        }
        self.drop_empty_reply();
        self.messages.push(ChatMessage::new(Role::Model, FALLBACK_REPLY, now));
        self.settle();
    }

    /// Stop waiting; whatever streamed so far stays in the transcript.
    pub fn cancel(&mut self) {
        if self.is_waiting() {
            tracing::debug!(turn = ?self.active, "chat reply cancelled");
        }
        self.drop_empty_reply();
        self.settle();
    }

    fn drop_empty_reply(&mut self) {
        if let Some(i) = self.reply.take() {
            if self.messages.get(i).is_some_and(|m| m.content.is_empty()) {
                self.messages.remove(i);
            }
        }
    }

    fn settle(&mut self) {
        self.active = None;
        self.reply = None;
    }
}
