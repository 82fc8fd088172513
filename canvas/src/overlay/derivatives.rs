//! Derivatives and their applications.

use curriculum::VisualState;

use super::limits::limit_estimate;
use super::{Overlay, OverlayContext, fmt_value};
use crate::consts::SAMPLE_STEPS;
use crate::numeric::roots;
use crate::scene::Rgb;

/// Most critical points listed in the notes.
const MAX_LISTED: usize = 6;

/// Half-length of the horizontal tangent drawn at a critical point, in pixels.
const FLAT_TANGENT_PX: f64 = 12.0;

/// Secant through `x0` and `x0 + h`, with the tangent for comparison.
pub struct Secant;

impl Overlay for Secant {
    fn draw(&self, ctx: &mut OverlayContext<'_>, state: &VisualState) {
        let (x0, h) = (state.x0, state.param1);
        let Some(y0) = ctx.f(x0) else {
            ctx.scene.note("f(x0) is undefined");
            return;
        };
        let tangent = ctx.slope(x0);
        if let Some(m) = tangent {
            ctx.line_through((x0, y0), m, Rgb::GOOD, true);
        }
        ctx.scene.marker((x0, y0), Rgb::INK);

        let secant = if h == 0.0 { None } else { ctx.f(x0 + h).map(|y1| ((y1 - y0) / h, y1)) };
        if let Some((m, y1)) = secant {
            ctx.line_through((x0, y0), m, Rgb::ACCENT, false);
            ctx.scene.marker((x0 + h, y1), Rgb::ACCENT);
        }
        ctx.scene.note(format!(
            "secant slope (h = {h:.3}) = {}, tangent slope = {}",
            fmt_value(secant.map(|(m, _)| m)),
            fmt_value(tangent)
        ));
    }
}

/// Tangent line at `x0` with a slope readout.
pub struct Tangent;

impl Overlay for Tangent {
    fn draw(&self, ctx: &mut OverlayContext<'_>, state: &VisualState) {
        let x0 = state.x0;
        let (Some(y0), Some(m)) = (ctx.f(x0), ctx.slope(x0)) else {
            ctx.scene.note("no tangent at x0");
            return;
        };
        ctx.line_through((x0, y0), m, Rgb::ACCENT, false);
        ctx.scene.marker((x0, y0), Rgb::INK);
        let (dx, dy) = ctx.pixels(3.0, 4.0);
        ctx.scene.label((x0 + dx, y0 + dy), format!("m = {m:.3}"), Rgb::ACCENT);
        ctx.scene.note(format!("f'({x0:.3}) = {m:.4}"));
    }
}

/// Tangent line and the error at `x0 + Δx`.
pub struct LinearApprox;

impl Overlay for LinearApprox {
    fn draw(&self, ctx: &mut OverlayContext<'_>, state: &VisualState) {
        let (x0, dx) = (state.x0, state.param1);
        let (Some(y0), Some(m)) = (ctx.f(x0), ctx.slope(x0)) else {
            ctx.scene.note("no tangent at x0");
            return;
        };
        ctx.line_through((x0, y0), m, Rgb::ACCENT, false);
        ctx.scene.marker((x0, y0), Rgb::INK);

        let x1 = x0 + dx;
        let linear = y0 + m * dx;
        ctx.scene.marker((x1, linear), Rgb::ACCENT);
        match ctx.f(x1) {
            Some(actual) => {
                ctx.scene.line((x1, linear), (x1, actual), Rgb::BAD);
                ctx.scene.marker((x1, actual), Rgb::INK);
                ctx.scene.note(format!(
                    "L(x0 + Δx) = {linear:.4}, f(x0 + Δx) = {actual:.4}, error = {:.4}",
                    (actual - linear).abs()
                ));
            }
            None => ctx.scene.note(format!("L(x0 + Δx) = {linear:.4}, f(x0 + Δx) is undefined")),
        }
    }
}

/// Chord on `[x0, x0 + width]` and the parallel tangent at `c`.
pub struct MeanValue;

impl Overlay for MeanValue {
    fn draw(&self, ctx: &mut OverlayContext<'_>, state: &VisualState) {
        let (a, b) = (state.x0, state.x0 + state.param1);
        let (Some(fa), Some(fb)) = (ctx.f(a), ctx.f(b)) else {
            ctx.scene.note("f is undefined at an endpoint");
            return;
        };
        if a == b {
            return;
        }
        ctx.scene.line((a, fa), (b, fb), Rgb::ACCENT);
        ctx.scene.marker((a, fa), Rgb::INK);
        ctx.scene.marker((b, fb), Rgb::INK);

        let chord = (fb - fa) / (b - a);
        let model = ctx.model;
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        let found = roots(|x| model.slope(x).map_or(f64::NAN, |m| m - chord), lo, hi, SAMPLE_STEPS)
            .into_iter()
            .find(|&c| c > lo && c < hi);
        match found.and_then(|c| ctx.f(c).map(|y| (c, y))) {
            Some((c, fc)) => {
                ctx.line_through((c, fc), chord, Rgb::GOOD, true);
                ctx.scene.marker((c, fc), Rgb::GOOD);
                ctx.scene.note(format!("chord slope = {chord:.4} = f'(c) at c ≈ {c:.4}"));
            }
            None => ctx.scene.note(format!("chord slope = {chord:.4}; no interior point found")),
        }
    }
}

/// Secants sampled at `x0 ± h` and the limit they approach.
pub struct Lhopital;

impl Overlay for Lhopital {
    fn draw(&self, ctx: &mut OverlayContext<'_>, state: &VisualState) {
        let (x0, h) = (state.x0, state.param1.abs());
        ctx.vline(x0, Rgb::MUTED, true);
        let left = ctx.f(x0 - h);
        let right = ctx.f(x0 + h);
        for (x, y) in [(x0 - h, left), (x0 + h, right)] {
            if let Some(y) = y {
                ctx.scene.marker((x, y), Rgb::ACCENT);
            }
        }
        let limit = limit_estimate(ctx, x0);
        if let Some(l) = limit {
            ctx.hline(l, Rgb::GOOD, true);
        }
        ctx.scene.note(format!("f(x0 - h) = {}, f(x0 + h) = {}", fmt_value(left), fmt_value(right)));
        ctx.scene.note(format!("limit ≈ {}", fmt_value(limit)));
    }
}

/// Critical points where `f'` changes sign, with horizontal tangents.
pub struct CriticalPoints;

impl Overlay for CriticalPoints {
    fn draw(&self, ctx: &mut OverlayContext<'_>, _state: &VisualState) {
        let model = ctx.model;
        let (lo, hi) = ctx.x_domain;
        let found = roots(|x| model.slope(x).unwrap_or(f64::NAN), lo, hi, SAMPLE_STEPS);
        let nudge = (hi - lo) / SAMPLE_STEPS as f64 / 2.0;
        let (half, _) = ctx.pixels(FLAT_TANGENT_PX, 0.0);

        let mut listed = 0;
        for c in found {
            let Some(fc) = ctx.f(c) else { continue };
            let before = model.slope(c - nudge).unwrap_or(0.0);
            let after = model.slope(c + nudge).unwrap_or(0.0);
            let (kind, colour) = if before > 0.0 && after < 0.0 {
                ("max", Rgb::ACCENT)
            } else if before < 0.0 && after > 0.0 {
                ("min", Rgb::GOOD)
            } else {
                ("flat", Rgb::MUTED)
            };
            ctx.scene.line((c - half, fc), (c + half, fc), colour);
            ctx.scene.marker((c, fc), colour);
            let (dx, dy) = ctx.pixels(2.0, 4.0);
            ctx.scene.label((c + dx, fc + dy), kind, colour);
            if listed < MAX_LISTED {
                ctx.scene.note(format!("{kind} at x ≈ {c:.4}, f = {fc:.4}"));
                listed += 1;
            }
        }
        if listed == 0 {
            ctx.scene.note("no critical points in view");
        }
    }
}
