//! Per-topic overlay strategies.
//!
//! DESIGN
//! ======
//! Each topic gets one [`Overlay`] that reads the visual state and appends
//! its own primitives (and status notes) to the scene. Strategies share no
//! state; the [`OverlayRegistry`] maps a [`TopicId`] to its strategy, and
//! [`strategy_for`] is an exhaustive match so a new topic cannot ship
//! without deciding what it draws.
//!
//! Parameter meanings per topic:
//!
//! | Topic | `param1` | `param2` |
//! |-------|----------|----------|
//! | limit definition | ε | δ |
//! | one-sided limit | approach distance h | |
//! | infinite limit | window half-width | threshold M |
//! | squeeze | window half-width | |
//! | infinitesimal comparison | reference degree n | |
//! | IVT | interval width | level N |
//! | derivative basics | h | |
//! | linear approximation | Δx | |
//! | mean value | interval width | |
//! | L'Hôpital | h | |
//! | Riemann sums | rectangle count | sample position in `[0, 1]` |
//! | FTC | upper limit | slice width |
//! | substitution | interval width | |
//! | area between curves | interval width | level |
//! | volume of rotation | disk count | interval length |
//! | separable DE | y0 | Euler step |
//! | logistic DE | K | |
//! | gradient | arrow scale | marked point y |

mod derivatives;
mod fields;
mod integrals;
mod limits;
mod series;


use std::collections::HashMap;

use curriculum::{TopicId, VisualState};

use crate::consts::{EPSILON_DELTA_SAMPLES, JUMP_VIEW_HEIGHTS, SAMPLE_STEPS};
use crate::plot::PlotModel;
use crate::sample::sample_path;
use crate::scene::{Rgb, Scene};

pub use derivatives::{CriticalPoints, LinearApprox, Lhopital, MeanValue, Secant, Tangent};
pub use fields::{GradientField, Logistic, SlopeField};
pub use integrals::{Accumulation, AreaBetween, Disks, Riemann, ShadedArea};
pub use limits::{Asymptote, EpsilonDelta, IntermediateValue, OneSided, PowerComparison, Squeeze};
pub use series::{PartialSums, TaylorCurve};

// =============================================================================
// CONTEXT
// =============================================================================

/// What an overlay can see and where it draws.
pub struct OverlayContext<'a> {
    pub model: &'a PlotModel,
    /// Visible world x-interval, ascending.
    pub x_domain: (f64, f64),
    /// Visible world y-interval, ascending.
    pub y_domain: (f64, f64),
    /// World units per pixel along x and y.
    pub px: (f64, f64),
    pub scene: &'a mut Scene,
}

impl OverlayContext<'_> {
    /// `f(x)` if finite.
    #[must_use]
    pub fn f(&self, x: f64) -> Option<f64> {
        self.model.eval(x)
    }

    /// `f'(x)` if finite.
    #[must_use]
    pub fn slope(&self, x: f64) -> Option<f64> {
        self.model.slope(x)
    }

    /// Vertical distance that splits a sampled path.
    #[must_use]
    pub fn jump_limit(&self) -> f64 {
        JUMP_VIEW_HEIGHTS * (self.y_domain.1 - self.y_domain.0)
    }

    /// Sample `g` across the visible x-domain and draw it.
    pub fn curve(&mut self, g: impl Fn(f64) -> f64, colour: Rgb, dashed: bool) {
        let domain = self.x_domain;
        self.curve_on(g, domain, colour, dashed);
    }

    /// Sample `g` across `domain` and draw it.
    pub fn curve_on(&mut self, g: impl Fn(f64) -> f64, domain: (f64, f64), colour: Rgb, dashed: bool) {
        let segments = sample_path(g, domain, SAMPLE_STEPS, self.jump_limit());
        self.scene.paths(segments, colour, dashed);
    }

    /// Horizontal line across the view.
    pub fn hline(&mut self, y: f64, colour: Rgb, dashed: bool) {
        if y.is_finite() {
            let (a, b) = self.x_domain;
            self.scene.path(vec![(a, y), (b, y)], colour, dashed);
        }
    }

    /// Vertical line across the view.
    pub fn vline(&mut self, x: f64, colour: Rgb, dashed: bool) {
        if x.is_finite() {
            let (a, b) = self.y_domain;
            self.scene.path(vec![(x, a), (x, b)], colour, dashed);
        }
    }

    /// Line of slope `m` through `at`, across the view.
    pub fn line_through(&mut self, at: (f64, f64), m: f64, colour: Rgb, dashed: bool) {
        if !(at.0.is_finite() && at.1.is_finite() && m.is_finite()) {
            return;
        }
        let (a, b) = self.x_domain;
        let y = |x: f64| at.1 + m * (x - at.0);
        self.scene.path(vec![(a, y(a)), (b, y(b))], colour, dashed);
    }

    /// Hatch the region between `lower` and `upper` over `[a, b]`.
    ///
    /// One column every two pixels; undefined columns are skipped.
    pub fn shade(&mut self, a: f64, b: f64, lower: impl Fn(f64) -> f64, upper: impl Fn(f64) -> f64, colour: Rgb) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let step = 2.0 * self.px.0;
        if !(lo.is_finite() && hi.is_finite() && step.is_finite() && step > 0.0) {
            return;
        }
        let lo = lo.max(self.x_domain.0);
        let hi = hi.min(self.x_domain.1);
        let mut x = lo;
        while x <= hi {
            let (y0, y1) = (lower(x), upper(x));
            if y0.is_finite() && y1.is_finite() {
                self.scene.column(x, y0, y1, colour);
            }
            x += step;
        }
    }

    /// A world-space offset of `(dx, dy)` pixels.
    #[must_use]
    pub fn pixels(&self, dx: f64, dy: f64) -> (f64, f64) {
        (dx * self.px.0, dy * self.px.1)
    }
}

/// Three-decimal readout, or "undefined".
#[must_use]
pub fn fmt_value(v: Option<f64>) -> String {
    match v {
        Some(v) => format!("{v:.3}"),
        None => "undefined".to_string(),
    }
}

// =============================================================================
// STRATEGY
// =============================================================================

/// Topic-specific drawing on top of the base plot.
pub trait Overlay {
    fn draw(&self, ctx: &mut OverlayContext<'_>, state: &VisualState);
}

/// The strategy each topic uses.
#[must_use]
pub fn strategy_for(topic: TopicId) -> Box<dyn Overlay> {
    match topic {
        TopicId::LimitDefinition => Box::new(EpsilonDelta),
        TopicId::LimitOneSided => Box::new(OneSided),
        TopicId::LimitInfinite => Box::new(Asymptote),
        TopicId::SqueezeTheorem => Box::new(Squeeze),
        TopicId::InfinitesimalCompare => Box::new(PowerComparison),
        TopicId::IvtTheorems => Box::new(IntermediateValue),
        TopicId::DerivativeBasic => Box::new(Secant),
        TopicId::DerivativeRules | TopicId::ChainRule | TopicId::ImplicitDiff | TopicId::RelatedRates => {
            Box::new(Tangent)
        }
        TopicId::LinearApprox => Box::new(LinearApprox),
        TopicId::MvtLagrange => Box::new(MeanValue),
        TopicId::LhopitalRule => Box::new(Lhopital),
        TopicId::Optimization => Box::new(CriticalPoints),
        TopicId::IntegralBasic => Box::new(Riemann),
        TopicId::Ftc => Box::new(Accumulation),
        TopicId::IntegrationSubstitution => Box::new(ShadedArea),
        TopicId::AreaBetweenCurves => Box::new(AreaBetween),
        TopicId::VolumeRotation => Box::new(Disks),
        TopicId::DeSeparable => Box::new(SlopeField),
        TopicId::DeLogistic => Box::new(Logistic),
        TopicId::SeriesConvergence => Box::new(PartialSums),
        TopicId::TaylorSeries => Box::new(TaylorCurve),
        TopicId::GradientVector => Box::new(GradientField),
    }
}

/// Topic → overlay lookup.
pub struct OverlayRegistry {
    overlays: HashMap<TopicId, Box<dyn Overlay>>,
}

impl Default for OverlayRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

impl OverlayRegistry {
    /// A registry with nothing registered.
    #[must_use]
    pub fn empty() -> Self {
        Self { overlays: HashMap::new() }
    }

    /// Every topic mapped to [`strategy_for`].
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self::empty();
        for topic in TopicId::ALL {
            registry.register(topic, strategy_for(topic));
        }
        registry
    }

    /// Install or replace the strategy for `topic`.
    pub fn register(&mut self, topic: TopicId, overlay: Box<dyn Overlay>) {
        self.overlays.insert(topic, overlay);
    }

    #[must_use]
    pub fn contains(&self, topic: TopicId) -> bool {
        self.overlays.contains_key(&topic)
    }

    /// Run the strategy for `state.topic`, if one is registered.
    pub fn draw(&self, ctx: &mut OverlayContext<'_>, state: &VisualState) {
        if let Some(overlay) = self.overlays.get(&state.topic) {
            overlay.draw(ctx, state);
        }
    }
}

// =============================================================================
// EPSILON-DELTA VERDICT
// =============================================================================

/// Outcome of the ε-δ window check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Safe,
    Fail,
}

impl Verdict {
    #[must_use]
    pub fn colour(self) -> Rgb {
        match self {
            Self::Safe => Rgb::GOOD,
            Self::Fail => Rgb::BAD,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Safe => "safe",
            Self::Fail => "fail",
        }
    }
}

/// Does every sample in the punctured δ-window stay within ε of `f(x0)`?
///
/// A non-finite `f(x0)` or sample fails. A non-positive δ is an empty window
/// and passes.
#[must_use]
pub fn epsilon_delta_verdict(f: impl Fn(f64) -> f64, x0: f64, epsilon: f64, delta: f64) -> Verdict {
    let limit = f(x0);
    if !(limit.is_finite() && epsilon.is_finite() && delta.is_finite()) {
        return Verdict::Fail;
    }
    if delta <= 0.0 {
        return Verdict::Safe;
    }
    let n = EPSILON_DELTA_SAMPLES;
    for i in (0..=n).filter(|&i| 2 * i != n) {
        let x = x0 - delta + 2.0 * delta * i as f64 / n as f64;
        let y = f(x);
        if !y.is_finite() || (y - limit).abs() > epsilon {
            return Verdict::Fail;
        }
    }
    Verdict::Safe
}
