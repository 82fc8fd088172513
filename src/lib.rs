//! Intuition — an interactive calculus tutor for the terminal.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`state`] | [`state::Workspace`] reducer and [`state::ChatState`] transcript |
//! | [`services`] | Tutor context capture and the streaming reply task |
//! | [`llm`] | Gemini / Anthropic / `OpenAI` clients behind [`llm::LlmChat`] |
//! | [`ui`] | ratatui panes, key bindings and the event loop |
//! | [`logging`] | File-backed tracing subscriber |
//!
//! The expression engine lives in the `expr` crate, topic data in
//! `curriculum`, and plotting in `canvas`.

pub mod llm;
pub mod logging;
pub mod services;
pub mod state;
pub mod ui;
