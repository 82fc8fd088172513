//! Visualization parameters.
//!
//! [`VisualState`] is the mutable record the plot redraws from. Topic
//! defaults arrive as a [`VisualDefaults`] (const, lives in the registry) and
//! storyline steps nudge the state through a partial [`VisualHint`].

#[cfg(test)]
#[path = "visual_test.rs"]
mod visual_test;

use crate::topic::TopicId;

/// Highest Taylor order the UI allows.
pub const MAX_ORDER: u32 = 20;

// =============================================================================
// VIEW TRANSFORM
// =============================================================================

/// Affine pan/zoom in pixel space: `screen = k * p + (x, y)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    pub k: f64,
    pub x: f64,
    pub y: f64,
}

impl ViewTransform {
    pub const IDENTITY: Self = Self { k: 1.0, x: 0.0, y: 0.0 };

    #[must_use]
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

// =============================================================================
// VISUAL STATE
// =============================================================================

/// Everything the plot needs to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct VisualState {
    pub topic: TopicId,
    /// Source text; only validated by parsing.
    pub function: String,
    /// Expansion or reference point.
    pub x0: f64,
    /// Taylor order, `0..=MAX_ORDER`.
    pub order: u32,
    /// Topic-dependent parameter (ε, h, segment count, ...).
    pub param1: f64,
    /// Topic-dependent parameter (δ, Δx, level, ...).
    pub param2: f64,
    pub view: ViewTransform,
}

impl VisualState {
    /// Set the order from unchecked input, clamping to `0..=MAX_ORDER`.
    pub fn set_order(&mut self, order: i64) {
        self.order = u32::try_from(order.clamp(0, i64::from(MAX_ORDER))).unwrap_or(0);
    }

    /// Set x0, ignoring non-finite input.
    pub fn set_x0(&mut self, x0: f64) {
        if x0.is_finite() {
            self.x0 = x0;
        }
    }

    /// Set a free parameter, ignoring non-finite input.
    pub fn set_param(&mut self, slot: ParamSlot, value: f64) {
        if !value.is_finite() {
            return;
        }
        match slot {
            ParamSlot::One => self.param1 = value,
            ParamSlot::Two => self.param2 = value,
        }
    }

    /// One-line description for prompts and status bars.
    #[must_use]
    pub fn summary(&self, labels: [Option<&str>; 2]) -> String {
        let mut out = format!("Function: {}, x0: {:.2}, Order: {}", self.function, self.x0, self.order);
        for (label, value) in labels.iter().zip([self.param1, self.param2]) {
            if let Some(label) = label {
                out.push_str(&format!(", {label}: {value:.3}"));
            }
        }
        out
    }
}

/// Which free parameter an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamSlot {
    One,
    Two,
}

// =============================================================================
// DEFAULTS
// =============================================================================

/// Const-constructible topic defaults.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualDefaults {
    pub function: &'static str,
    pub x0: f64,
    pub order: u32,
    pub param1: f64,
    pub param2: f64,
}

impl VisualDefaults {
    #[must_use]
    pub const fn new(function: &'static str) -> Self {
        Self { function, x0: 1.0, order: 0, param1: 0.5, param2: 0.3 }
    }

    #[must_use]
    pub const fn x0(mut self, x0: f64) -> Self {
        self.x0 = x0;
        self
    }

    #[must_use]
    pub const fn order(mut self, order: u32) -> Self {
        self.order = order;
        self
    }

    #[must_use]
    pub const fn param1(mut self, v: f64) -> Self {
        self.param1 = v;
        self
    }

    #[must_use]
    pub const fn param2(mut self, v: f64) -> Self {
        self.param2 = v;
        self
    }

    /// Materialize for `topic` with the given view.
    #[must_use]
    pub fn to_state(&self, topic: TopicId, view: ViewTransform) -> VisualState {
        VisualState {
            topic,
            function: self.function.to_string(),
            x0: self.x0,
            order: self.order.min(MAX_ORDER),
            param1: self.param1,
            param2: self.param2,
            view,
        }
    }
}

// =============================================================================
// HINT
// =============================================================================

/// Partial override merged into the current state when a step is selected.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VisualHint {
    pub function: Option<&'static str>,
    pub x0: Option<f64>,
    pub order: Option<u32>,
    pub param1: Option<f64>,
    pub param2: Option<f64>,
}

impl VisualHint {
    pub const NONE: Self = Self { function: None, x0: None, order: None, param1: None, param2: None };

    #[must_use]
    pub const fn function(mut self, f: &'static str) -> Self {
        self.function = Some(f);
        self
    }

    #[must_use]
    pub const fn x0(mut self, v: f64) -> Self {
        self.x0 = Some(v);
        self
    }

    #[must_use]
    pub const fn order(mut self, v: u32) -> Self {
        self.order = Some(v);
        self
    }

    #[must_use]
    pub const fn param1(mut self, v: f64) -> Self {
        self.param1 = Some(v);
        self
    }

    #[must_use]
    pub const fn param2(mut self, v: f64) -> Self {
        self.param2 = Some(v);
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::NONE
    }

    /// Overwrite only the fields this hint specifies.
    pub fn apply_to(&self, state: &mut VisualState) {
        if let Some(f) = self.function {
            state.function = f.to_string();
        }
        if let Some(x0) = self.x0 {
            state.set_x0(x0);
        }
        if let Some(order) = self.order {
            state.set_order(i64::from(order));
        }
        if let Some(v) = self.param1 {
            state.set_param(ParamSlot::One, v);
        }
        if let Some(v) = self.param2 {
            state.set_param(ParamSlot::Two, v);
        }
    }
}
