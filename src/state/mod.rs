//! Application state: the navigation/plot workspace and the chat log.
//!
//! Both containers are plain data mutated only through their own methods.
//! The UI loop owns one of each; nothing here is shared across tasks.

pub mod chat;
pub mod workspace;

pub use chat::{ChatError, ChatMessage, ChatState, ChatTurn};
pub use workspace::{Action, Workspace};
