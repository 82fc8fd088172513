//! Server-sent events decoding for streamed completions.
//!
//! All three providers stream `text/event-stream` bodies. [`SseDecoder`]
//! buffers raw bytes until a blank line closes an event, so a network chunk
//! may split an event (or a multi-byte character) anywhere. [`text_stream`]
//! turns a byte stream into a [`TextStream`] using a provider-specific
//! extractor.

use std::collections::VecDeque;
use std::fmt::Display;
use std::pin::Pin;

use futures::{Stream, StreamExt};

use super::types::{LlmError, TextStream};

/// Data payload that ends an OpenAI-style stream.
pub const DONE_SENTINEL: &str = "[DONE]";

/// One decoded event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SseEvent {
    /// Value of the `event:` field, if any.
    pub event: Option<String>,
    /// `data:` lines joined with `\n`.
    pub data: String,
}

/// Incremental event-stream parser.
#[derive(Debug, Default)]
pub struct SseDecoder {
    buffer: Vec<u8>,
}

impl SseDecoder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a chunk and return every event it completes.
    pub fn push(&mut self, chunk: &[u8]) -> Vec<SseEvent> {
        self.buffer.extend(chunk.iter().copied().filter(|&b| b != b'\r'));
        let mut events = Vec::new();
        while let Some(end) = self.buffer.windows(2).position(|w| w == b"\n\n") {
            let block: Vec<u8> = self.buffer.drain(..end + 2).collect();
            if let Some(event) = parse_block(&block[..end]) {
                events.push(event);
            }
        }
        events
    }

    /// Flush a trailing event that was not followed by a blank line.
    pub fn finish(&mut self) -> Option<SseEvent> {
        let block = std::mem::take(&mut self.buffer);
        parse_block(&block)
    }
}

fn parse_block(block: &[u8]) -> Option<SseEvent> {
    let text = String::from_utf8_lossy(block);
    let mut event = None;
    let mut data: Option<String> = None;
    for line in text.lines() {
        if line.starts_with(':') {
            continue;
        }
        let (field, value) = line.split_once(':').unwrap_or((line, ""));
        let value = value.strip_prefix(' ').unwrap_or(value);
        match field {
            "event" => event = Some(value.to_string()),
            "data" => match data.as_mut() {
                Some(d) => {
                    d.push('\n');
                    d.push_str(value);
                }
                None => data = Some(value.to_string()),
            },
            _ => {}
        }
    }
    data.map(|data| SseEvent { event, data })
}

// =============================================================================
// STREAM ADAPTER
// =============================================================================

/// Maps one event to an optional text fragment, or a provider error.
pub type Extractor = fn(&SseEvent) -> Result<Option<String>, LlmError>;

struct SseState<S> {
    body: Pin<Box<S>>,
    decoder: SseDecoder,
    pending: VecDeque<Result<String, LlmError>>,
    extract: Extractor,
    done: bool,
}

impl<S> SseState<S> {
    fn accept(&mut self, events: impl IntoIterator<Item = SseEvent>) {
        for event in events {
            if self.done {
                return;
            }
            if event.data.trim() == DONE_SENTINEL {
                self.done = true;
                return;
            }
            match (self.extract)(&event) {
                Ok(Some(text)) if !text.is_empty() => self.pending.push_back(Ok(text)),
                Ok(_) => {}
                Err(e) => {
                    self.pending.push_back(Err(e));
                    self.done = true;
                }
            }
        }
    }
}

/// Decode a byte stream of server-sent events into text fragments.
///
/// The stream ends at the end of the body, at a `[DONE]` sentinel, or after
/// the first error.
pub fn text_stream<S, B, E>(body: S, extract: Extractor) -> TextStream
where
    S: Stream<Item = Result<B, E>> + Send + 'static,
    B: AsRef<[u8]>,
    E: Display,
{
    let state = SseState {
        body: Box::pin(body),
        decoder: SseDecoder::new(),
        pending: VecDeque::new(),
        extract,
        done: false,
    };
    let stream = futures::stream::unfold(state, |mut st| async move {
        loop {
            if let Some(item) = st.pending.pop_front() {
                return Some((item, st));
            }
            if st.done {
                return None;
            }
            match st.body.next().await {
                Some(Ok(chunk)) => {
                    let events = st.decoder.push(chunk.as_ref());
                    st.accept(events);
                }
                Some(Err(e)) => {
                    st.pending.push_back(Err(LlmError::Stream(e.to_string())));
                    st.done = true;
                }
                None => {
                    let tail = st.decoder.finish();
                    st.accept(tail);
                    st.done = true;
                }
            }
        }
    });
    Box::pin(stream)
}

#[cfg(test)]
#[path = "sse_test.rs"]
mod tests;
