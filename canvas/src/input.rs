//! Pointer input types and the gesture state machine.
//!
//! The plot has exactly one drag gesture (pan) and one wheel gesture (zoom).
//! `InputState` is the gesture tracked between pointer-down and pointer-up,
//! carrying the previous pointer position so each move yields a delta.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::camera::Point;

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button.
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button.
    Secondary,
}

impl Button {
    /// Whether a press of this button starts a pan.
    #[must_use]
    pub fn pans(self) -> bool {
        matches!(self, Self::Primary | Self::Middle)
    }
}

/// Wheel / trackpad scroll delta in notches.
#[derive(Debug, Clone, Copy)]
pub struct WheelDelta {
    /// Vertical scroll amount (positive = down, away from the user).
    pub dy: f64,
}

impl WheelDelta {
    /// One notch toward the user (zoom in).
    pub const UP: Self = Self { dy: -1.0 };
    /// One notch away from the user (zoom out).
    pub const DOWN: Self = Self { dy: 1.0 };
}

/// Active gesture.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The user is dragging the plot.
    Panning {
        /// Screen-space position of the previous pointer event.
        last_screen: Point,
    },
}

impl InputState {
    #[must_use]
    pub fn is_panning(&self) -> bool {
        matches!(self, Self::Panning { .. })
    }
}
