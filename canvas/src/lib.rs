//! Plot engine for the calculus workspace.
//!
//! Turns a [`curriculum::VisualState`] into a list of world-space drawing
//! primitives and paints them onto a terminal braille canvas. The engine owns
//! the pan/zoom camera and gesture tracking; the application owns the state and
//! feeds camera changes back as [`engine::Action`]s.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | [`engine::EngineCore`]: viewport, gestures, frame building |
//! | [`camera`] | Pan/zoom camera over a [`curriculum::ViewTransform`] |
//! | [`scale`] | Linear scales, transform rescaling, nice ticks |
//! | [`input`] | Pointer types and the gesture state machine |
//! | [`plot`] | Cached compiled function, derivatives, Taylor polynomial |
//! | [`sample`] | Fixed-step path sampling with gap splitting |
//! | [`numeric`] | Root bracketing, bisection, Simpson quadrature |
//! | [`overlay`] | Per-topic overlay strategies and their registry |
//! | [`scene`] | Drawing primitives and colours |
//! | [`render`] | Paints a frame into a ratatui canvas context |
//! | [`consts`] | Shared numeric constants (scale extent, base domain, etc.) |

pub mod camera;
pub mod consts;
pub mod engine;
pub mod input;
pub mod numeric;
pub mod overlay;
pub mod plot;
pub mod render;
pub mod sample;
pub mod scale;
pub mod scene;

pub use engine::{Action, EngineCore, PlotFrame};
