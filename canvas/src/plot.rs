//! Compiled view of the current function.
//!
//! Parsing, differentiating and expanding are the only expensive steps in a
//! frame, so a [`PlotModel`] is built once per distinct
//! `(function, x0, order, topic)` and reused while only the camera or the
//! overlay parameters change.

#[cfg(test)]
#[path = "plot_test.rs"]
mod plot_test;

use curriculum::{TopicId, VisualState};
use expr::{Compiled, ExprError, TaylorPolynomial};

use crate::numeric::central_slope;

/// Cache key: the inputs that change what gets compiled.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ModelKey {
    function: String,
    x0_bits: u64,
    order: u32,
    topic: TopicId,
}

impl ModelKey {
    fn of(state: &VisualState) -> Self {
        Self { function: state.function.clone(), x0_bits: state.x0.to_bits(), order: state.order, topic: state.topic }
    }
}

/// Everything evaluable about the current function.
#[derive(Debug, Clone)]
pub struct PlotModel {
    key: ModelKey,
    compiled: Result<Compiled, ExprError>,
    derivative: Option<Compiled>,
    partials: Option<(Compiled, Compiled)>,
    taylor: Option<TaylorPolynomial>,
}

impl PlotModel {
    /// Parse and compile `state.function` for `state.topic`.
    ///
    /// Never fails: a parse or compile error is stored and reported through
    /// [`PlotModel::error`]. A failed derivative falls back to numeric slopes.
    #[must_use]
    pub fn build(state: &VisualState) -> Self {
        let key = ModelKey::of(state);
        let vars = state.topic.variables();
        let parsed = expr::parse(&state.function);

        let compiled = parsed.as_ref().map_err(Clone::clone).and_then(|e| e.compile(vars));
        let mut derivative = None;
        let mut partials = None;
        let mut taylor = None;

        if let (Ok(tree), Ok(_)) = (&parsed, &compiled) {
            if state.topic.is_two_variable() {
                let dx = tree.derivative("x").and_then(|d| d.compile(vars));
                let dy = tree.derivative("y").and_then(|d| d.compile(vars));
                if let (Ok(dx), Ok(dy)) = (dx, dy) {
                    partials = Some((dx, dy));
                }
            } else {
                match tree.derivative("x").and_then(|d| d.compile(vars)) {
                    Ok(d) => derivative = Some(d),
                    Err(e) => tracing::debug!(error = %e, "symbolic derivative unavailable; using numeric slope"),
                }
            }
            if state.topic.is_expansion() {
                let poly = TaylorPolynomial::expand(tree, "x", state.x0, state.order);
                if let Some(reason) = poly.truncation() {
                    tracing::debug!(
                        kept = poly.coefficients().len(),
                        requested = state.order + 1,
                        reason = %reason,
                        "taylor expansion truncated"
                    );
                }
                taylor = Some(poly);
            }
        }

        match &compiled {
            Ok(_) => tracing::debug!(function = %state.function, topic = %state.topic, "plot model compiled"),
            Err(e) => tracing::debug!(function = %state.function, error = %e, "plot model rejected"),
        }

        Self { key, compiled, derivative, partials, taylor }
    }

    /// Whether this model was built from the same function inputs as `state`.
    #[must_use]
    pub fn matches(&self, state: &VisualState) -> bool {
        self.key == ModelKey::of(state)
    }

    #[must_use]
    pub fn compiled(&self) -> Option<&Compiled> {
        match &self.compiled {
            Ok(c) => Some(c),
            Err(_) => None,
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&ExprError> {
        self.compiled.as_ref().err()
    }

    /// Short user-facing message for the inline error indicator.
    #[must_use]
    pub fn error_message(&self) -> Option<&'static str> {
        self.error().map(ExprError::localized)
    }

    #[must_use]
    pub fn taylor(&self) -> Option<&TaylorPolynomial> {
        self.taylor.as_ref()
    }

    /// `f(x)` if finite.
    #[must_use]
    pub fn eval(&self, x: f64) -> Option<f64> {
        let y = self.compiled()?.eval_x(x);
        y.is_finite().then_some(y)
    }

    /// `F(x, y)` if finite.
    #[must_use]
    pub fn eval_xy(&self, x: f64, y: f64) -> Option<f64> {
        let v = self.compiled()?.eval(&[x, y]);
        v.is_finite().then_some(v)
    }

    /// `f'(x)`, symbolic when available.
    #[must_use]
    pub fn slope(&self, x: f64) -> Option<f64> {
        if let Some(d) = &self.derivative {
            let m = d.eval_x(x);
            if m.is_finite() {
                return Some(m);
            }
        }
        let f = self.compiled()?;
        central_slope(|t| f.eval_x(t), x)
    }

    /// `∇F(x, y)` for two-variable functions.
    #[must_use]
    pub fn gradient(&self, x: f64, y: f64) -> Option<(f64, f64)> {
        let (dx, dy) = self.partials.as_ref()?;
        let g = (dx.eval(&[x, y]), dy.eval(&[x, y]));
        (g.0.is_finite() && g.1.is_finite()).then_some(g)
    }
}
