//! Tutor service — pedagogical context → LLM request → streamed reply.
//!
//! DESIGN
//! ======
//! The UI captures a [`TutorContext`] from the workspace when a question is
//! sent, builds a [`ChatRequest`] from it plus the transcript, and hands the
//! request to [`spawn_reply`]. The spawned task forwards [`ChatEvent`]s over
//! an unbounded channel; the UI loop applies them to its [`ChatState`] in
//! arrival order. Cancelling aborts the task, which drops the stream and
//! with it the HTTP body.

use std::fmt::Write;
use std::sync::Arc;

use curriculum::TopicId;
use futures::StreamExt;
use time::OffsetDateTime;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::llm::config::{DEFAULT_LLM_MAX_TOKENS, DEFAULT_LLM_TEMPERATURE, LlmConfig};
use crate::llm::{ChatRequest, LlmChat, LlmError, Message, TextStream};
use crate::state::{ChatMessage, ChatState, ChatTurn, Workspace};

/// Persona every system instruction starts with.
pub const TUTOR_PERSONA: &str = "You are the Intuition Math Architect, an AI calculus tutor. \
Explain why each formula looks the way it does, with special attention to where it comes from \
and what it builds on. Work in the style of 3Blue1Brown: geometric intuition first, algebraic \
derivation second.";

// =============================================================================
// CONTEXT
// =============================================================================

/// Snapshot of what the learner is looking at.
#[derive(Debug, Clone, PartialEq)]
pub struct TutorContext {
    pub topic: TopicId,
    pub topic_name: &'static str,
    pub strategy: &'static str,
    pub step_title: &'static str,
    pub step_expression: &'static str,
    pub step_explanation: &'static str,
    pub visual_summary: String,
}

impl TutorContext {
    #[must_use]
    pub fn capture(workspace: &Workspace) -> Self {
        let manifest = workspace.manifest();
        let step = workspace.step();
        Self {
            topic: workspace.topic,
            topic_name: manifest.name,
            strategy: manifest.tutor_prompt,
            step_title: step.title,
            step_expression: step.expression,
            step_explanation: step.explanation,
            visual_summary: workspace.visual.summary(manifest.param_labels),
        }
    }

    #[must_use]
    pub fn step_line(&self) -> String {
        format!(
            "Current Step: {}, Expression: {}, Logic: {}",
            self.step_title, self.step_expression, self.step_explanation
        )
    }

    #[must_use]
    pub fn build_system_instruction(&self) -> String {
        let mut out = String::from(TUTOR_PERSONA);
        out.push_str("\n\n");
        let _ = writeln!(out, "Topic: {}", self.topic_name);
        if !self.strategy.is_empty() {
            let _ = writeln!(out, "Teaching strategy: {}", self.strategy);
        }
        let _ = writeln!(out, "\nCurrent step state: {}", self.step_line());
        let _ = write!(out, "Current plot state: {}", self.visual_summary);
        out
    }
}

// =============================================================================
// REQUEST
// =============================================================================

/// Sampling settings carried into every request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReplySettings {
    pub max_tokens: u32,
    pub temperature: f32,
}

impl Default for ReplySettings {
    fn default() -> Self {
        Self { max_tokens: DEFAULT_LLM_MAX_TOKENS, temperature: DEFAULT_LLM_TEMPERATURE }
    }
}

impl From<&LlmConfig> for ReplySettings {
    fn from(config: &LlmConfig) -> Self {
        Self { max_tokens: config.max_tokens, temperature: config.temperature }
    }
}

/// Role-tagged transcript; empty messages are skipped.
#[must_use]
pub fn build_history(messages: &[ChatMessage]) -> Vec<Message> {
    messages
        .iter()
        .filter(|m| !m.content.trim().is_empty())
        .map(|m| Message { role: m.role, text: m.content.clone() })
        .collect()
}

#[must_use]
pub fn build_request(context: &TutorContext, turn: &ChatTurn, settings: ReplySettings) -> ChatRequest {
    ChatRequest {
        system: context.build_system_instruction(),
        history: build_history(&turn.history),
        message: turn.question.clone(),
        max_tokens: settings.max_tokens,
        temperature: settings.temperature,
    }
}

// =============================================================================
// STREAMING
// =============================================================================

/// Open a streamed reply.
///
/// # Errors
///
/// Returns the provider error when the request cannot be started.
pub async fn ask(llm: &dyn LlmChat, request: &ChatRequest) -> Result<TextStream, LlmError> {
    info!(history = request.history.len(), question_len = request.message.len(), "tutor: request started");
    llm.chat_stream(request).await.inspect_err(|e| warn!(error = %e, "tutor: request failed"))
}

/// Pump `stream` into `chat` until it ends.
///
/// # Errors
///
/// Returns the first stream error after the fallback message is appended.
pub async fn drive(mut stream: TextStream, chat: &mut ChatState) -> Result<(), LlmError> {
    chat.start_reply(OffsetDateTime::now_utc());
    while let Some(item) = stream.next().await {
        match item {
            Ok(fragment) => chat.push_fragment(&fragment, OffsetDateTime::now_utc()),
            Err(e) => {
                warn!(error = %e, "tutor: stream failed");
                chat.fail(OffsetDateTime::now_utc());
                return Err(e);
            }
        }
    }
    chat.finish();
    Ok(())
}

/// Progress of a spawned reply, tagged with its turn id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatEvent {
    Started { turn: u64 },
    Fragment { turn: u64, text: String },
    Finished { turn: u64 },
    Failed { turn: u64, error: String },
}

impl ChatEvent {
    #[must_use]
    pub fn turn(&self) -> u64 {
        match self {
            Self::Started { turn } | Self::Fragment { turn, .. } | Self::Finished { turn } | Self::Failed { turn, .. } => {
                *turn
            }
        }
    }

    /// Apply to `chat`; events from a turn that is no longer current are
    /// dropped. Returns whether the event was applied.
    pub fn apply(&self, chat: &mut ChatState, now: OffsetDateTime) -> bool {
        if !chat.is_current(self.turn()) {
            return false;
        }
        match self {
            Self::Started { .. } => chat.start_reply(now),
            Self::Fragment { text, .. } => chat.push_fragment(text, now),
            Self::Finished { .. } => chat.finish(),
            Self::Failed { .. } => chat.fail(now),
        }
        true
    }
}

/// Handle to a reply task.
#[derive(Debug)]
pub struct ReplyHandle {
    pub turn: u64,
    task: JoinHandle<()>,
}

impl ReplyHandle {
    /// Abort the task; the stream and its HTTP body are dropped.
    pub fn cancel(&self) {
        info!(turn = self.turn, "tutor: reply cancelled");
        self.task.abort();
    }
}

/// Stream a reply on a tokio task, forwarding events to `events`.
pub fn spawn_reply(
    llm: Arc<dyn LlmChat>,
    request: ChatRequest,
    turn: u64,
    events: UnboundedSender<ChatEvent>,
) -> ReplyHandle {
    let task = tokio::spawn(async move {
        let mut stream = match ask(llm.as_ref(), &request).await {
            Ok(stream) => stream,
            Err(e) => {
                let _ = events.send(ChatEvent::Failed { turn, error: e.to_string() });
                return;
            }
        };
        if events.send(ChatEvent::Started { turn }).is_err() {
            return;
        }
        let mut fragments = 0usize;
        while let Some(item) = stream.next().await {
            let event = match item {
                Ok(text) => {
                    fragments += 1;
                    ChatEvent::Fragment { turn, text }
                }
                Err(e) => {
                    warn!(turn, error = %e, "tutor: stream failed");
                    let _ = events.send(ChatEvent::Failed { turn, error: e.to_string() });
                    return;
                }
            };
            if events.send(event).is_err() {
                return;
            }
        }
        info!(turn, fragments, "tutor: reply finished");
        let _ = events.send(ChatEvent::Finished { turn });
    });
    ReplyHandle { turn, task }
}

#[cfg(test)]
#[path = "tutor_test.rs"]
mod tests;
