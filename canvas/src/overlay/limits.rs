//! Limits and continuity.

use curriculum::VisualState;

use super::{Overlay, OverlayContext, Verdict, epsilon_delta_verdict, fmt_value};
use crate::consts::LIMIT_PROBE;
use crate::numeric::bisect;
use crate::sample::linspace;
use crate::scene::Rgb;

/// Samples per side when checking a window.
const WINDOW_SAMPLES: usize = 100;

/// Highest reference power for infinitesimal comparison.
const MAX_POWER: i32 = 10;

/// ε-band around `L = f(x0)`, δ-band around `x0`, and the verdict box.
pub struct EpsilonDelta;

impl Overlay for EpsilonDelta {
    fn draw(&self, ctx: &mut OverlayContext<'_>, state: &VisualState) {
        let (x0, eps, delta) = (state.x0, state.param1.abs(), state.param2.abs());
        let model = ctx.model;
        let verdict = epsilon_delta_verdict(|x| model.eval(x).unwrap_or(f64::NAN), x0, eps, delta);

        ctx.vline(x0 - delta, Rgb::ACCENT, true);
        ctx.vline(x0 + delta, Rgb::ACCENT, true);

        let Some(limit) = ctx.f(x0) else {
            ctx.scene.note(format!("L = f({x0:.3}) is undefined: {}", verdict.label()));
            return;
        };
        ctx.hline(limit - eps, Rgb::ACCENT, true);
        ctx.hline(limit + eps, Rgb::ACCENT, true);
        ctx.scene.rect((x0 - delta, limit - eps), (x0 + delta, limit + eps), verdict.colour());
        ctx.scene.marker((x0, limit), verdict.colour());
        let outcome = match verdict {
            Verdict::Safe => "every x in the δ-window stays inside the ε-band",
            Verdict::Fail => "some x in the δ-window escapes the ε-band",
        };
        ctx.scene.note(format!("ε = {eps:.3}, δ = {delta:.3}, L = {limit:.3}: {} ({outcome})", verdict.label()));
    }
}

/// Probes approaching `x0` from each side.
pub struct OneSided;

impl Overlay for OneSided {
    fn draw(&self, ctx: &mut OverlayContext<'_>, state: &VisualState) {
        let (x0, h) = (state.x0, state.param1.abs());
        ctx.vline(x0, Rgb::MUTED, true);
        let left = ctx.f(x0 - h);
        let right = ctx.f(x0 + h);
        for (x, y, colour) in [(x0 - h, left, Rgb::ACCENT), (x0 + h, right, Rgb::GOOD)] {
            if let Some(y) = y {
                ctx.scene.dashed_line((x, y), (x0, y), colour);
                ctx.scene.marker((x, y), colour);
            }
        }
        ctx.scene.note(format!("f(x0 - h) = {}, f(x0 + h) = {}", fmt_value(left), fmt_value(right)));
        if let (Some(l), Some(r)) = (left, right) {
            ctx.scene.note(format!("gap between sides: {:.3}", (r - l).abs()));
        }
    }
}

/// Vertical asymptote at `x0` and the threshold `y = M`.
pub struct Asymptote;

impl Overlay for Asymptote {
    fn draw(&self, ctx: &mut OverlayContext<'_>, state: &VisualState) {
        let (x0, w, m) = (state.x0, state.param1.abs(), state.param2);
        ctx.vline(x0, Rgb::BAD, true);
        ctx.vline(x0 - w, Rgb::MUTED, true);
        ctx.vline(x0 + w, Rgb::MUTED, true);
        ctx.hline(m, Rgb::ACCENT, true);

        if w <= 0.0 {
            return;
        }
        let model = ctx.model;
        let clears = linspace(0.0, w, WINDOW_SAMPLES)
            .skip(1)
            .flat_map(|t| [x0 - t, x0 + t])
            .filter_map(|x| model.eval(x))
            .all(|y| y.abs() > m.abs());
        let outcome = if clears { "|f(x)| exceeds M across the window" } else { "|f(x)| falls below M inside the window" };
        ctx.scene.note(format!("M = {m:.3}, window ±{w:.3}: {outcome}"));
    }
}

/// Bounds `±(x - x0)²` pinching the function.
pub struct Squeeze;

impl Overlay for Squeeze {
    fn draw(&self, ctx: &mut OverlayContext<'_>, state: &VisualState) {
        let (x0, w) = (state.x0, state.param1.abs());
        ctx.curve(|x| (x - x0).powi(2), Rgb::ACCENT, true);
        ctx.curve(|x| -(x - x0).powi(2), Rgb::ACCENT, true);
        ctx.vline(x0 - w, Rgb::MUTED, true);
        ctx.vline(x0 + w, Rgb::MUTED, true);

        let model = ctx.model;
        let squeezed = linspace(x0 - w, x0 + w, 2 * WINDOW_SAMPLES)
            .filter_map(|x| model.eval(x).map(|y| (x, y)))
            .all(|(x, y)| y.abs() <= (x - x0).powi(2) + 1e-12);
        let outcome = if squeezed { "f stays between the bounds" } else { "f escapes the bounds" };
        ctx.scene.note(format!("window ±{w:.3}: {outcome}"));
    }
}

/// Reference infinitesimal `(x - x0)^n` and the ratio against it.
pub struct PowerComparison;

impl Overlay for PowerComparison {
    fn draw(&self, ctx: &mut OverlayContext<'_>, state: &VisualState) {
        let x0 = state.x0;
        let n = if state.param1.is_finite() { (state.param1.round() as i32).clamp(1, MAX_POWER) } else { 1 };
        ctx.curve(|x| (x - x0).powi(n), Rgb::SECONDARY, true);

        let t = 1e-3;
        let ratio = ctx.f(x0 + t).map(|y| y / t.powi(n)).filter(|r| r.is_finite());
        ctx.scene.note(format!("f(x) / (x - x0)^{n} near x0: {}", fmt_value(ratio)));
    }
}

/// Interval `[x0, x0 + width]`, level `N` and the bisected crossing.
pub struct IntermediateValue;

impl Overlay for IntermediateValue {
    fn draw(&self, ctx: &mut OverlayContext<'_>, state: &VisualState) {
        let (a, b) = (state.x0, state.x0 + state.param1);
        let level = state.param2;
        ctx.vline(a, Rgb::MUTED, true);
        ctx.vline(b, Rgb::MUTED, true);
        ctx.scene.line((a, level), (b, level), Rgb::ACCENT);
        for x in [a, b] {
            if let Some(y) = ctx.f(x) {
                ctx.scene.marker((x, y), Rgb::INK);
            }
        }

        let model = ctx.model;
        match bisect(|x| model.eval(x).map_or(f64::NAN, |y| y - level), a, b) {
            Some(c) => {
                ctx.scene.marker((c, level), Rgb::GOOD);
                ctx.scene.note(format!("f(c) = {level:.3} at c ≈ {c:.4}"));
            }
            None => {
                let (fa, fb) = (fmt_value(ctx.f(a)), fmt_value(ctx.f(b)));
                ctx.scene.note(format!("N = {level:.3} is not between f(a) = {fa} and f(b) = {fb}"));
            }
        }
    }
}

/// Two-sided numeric estimate of `lim f(x)` as `x → x0`.
pub(super) fn limit_estimate(ctx: &OverlayContext<'_>, x0: f64) -> Option<f64> {
    match (ctx.f(x0 - LIMIT_PROBE), ctx.f(x0 + LIMIT_PROBE)) {
        (Some(l), Some(r)) => Some(0.5 * (l + r)),
        (Some(v), None) | (None, Some(v)) => Some(v),
        (None, None) => None,
    }
}
