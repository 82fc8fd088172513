//! Differential equations and vector fields.

use curriculum::VisualState;

use super::{Overlay, OverlayContext};
use crate::consts::{FIELD_COLUMNS, FIELD_ROWS, MAX_EULER_STEPS, MIN_EULER_STEP, SAMPLE_STEPS, SLOPE_TICK_PX};
use crate::numeric::roots;
use crate::scene::Rgb;

/// Fallback arrow scale when the parameter is unusable.
const DEFAULT_ARROW_SCALE: f64 = 0.15;

/// Euler paths stop once they leave the view by this many view heights.
const ESCAPE_VIEW_HEIGHTS: f64 = 50.0;

/// Cell centres of the field grid over the visible window.
fn grid(ctx: &OverlayContext<'_>) -> Vec<(f64, f64)> {
    let (x0, x1) = ctx.x_domain;
    let (y0, y1) = ctx.y_domain;
    let (cw, ch) = ((x1 - x0) / FIELD_COLUMNS as f64, (y1 - y0) / FIELD_ROWS as f64);
    (0..FIELD_COLUMNS)
        .flat_map(|i| (0..FIELD_ROWS).map(move |j| (x0 + cw * (i as f64 + 0.5), y0 + ch * (j as f64 + 0.5))))
        .collect()
}

/// Scale a world vector so its on-screen length is at most `max_px`.
fn clamp_on_screen(ctx: &OverlayContext<'_>, v: (f64, f64), max_px: f64) -> (f64, f64) {
    let len_px = (v.0 / ctx.px.0).hypot(v.1 / ctx.px.1);
    if len_px.is_finite() && len_px > max_px {
        let s = max_px / len_px;
        (v.0 * s, v.1 * s)
    } else {
        v
    }
}

/// Scale a world vector to exactly `len_px` on screen.
fn resize_on_screen(ctx: &OverlayContext<'_>, v: (f64, f64), len_px: f64) -> Option<(f64, f64)> {
    let current = (v.0 / ctx.px.0).hypot(v.1 / ctx.px.1);
    (current.is_finite() && current > 0.0).then(|| (v.0 * len_px / current, v.1 * len_px / current))
}

/// Slope field of `y' = F(x, y)` and the Euler path through `(x0, y0)`.
pub struct SlopeField;

impl SlopeField {
    /// Walk Euler steps of size `h` (negative walks left) until the path
    /// leaves the view or the field is undefined.
    fn walk(ctx: &OverlayContext<'_>, start: (f64, f64), h: f64) -> Vec<(f64, f64)> {
        let (xl, xr) = ctx.x_domain;
        let (yb, yt) = ctx.y_domain;
        let escape = ESCAPE_VIEW_HEIGHTS * (yt - yb);
        let mut points = vec![start];
        let (mut x, mut y) = start;
        for _ in 0..MAX_EULER_STEPS {
            if x < xl || x > xr {
                break;
            }
            let Some(slope) = ctx.model.eval_xy(x, y) else { break };
            y += h * slope;
            x += h;
            if !y.is_finite() || y < yb - escape || y > yt + escape {
                break;
            }
            points.push((x, y));
        }
        points
    }
}

impl Overlay for SlopeField {
    fn draw(&self, ctx: &mut OverlayContext<'_>, state: &VisualState) {
        let half = SLOPE_TICK_PX / 2.0;
        for (x, y) in grid(ctx) {
            let Some(s) = ctx.model.eval_xy(x, y) else { continue };
            let Some((dx, dy)) = resize_on_screen(ctx, (1.0, s), half) else { continue };
            ctx.scene.line((x - dx, y - dy), (x + dx, y + dy), Rgb::MUTED);
        }

        let (x0, y0) = (state.x0, state.param1);
        let h = if state.param2.is_finite() { state.param2.abs().max(MIN_EULER_STEP) } else { MIN_EULER_STEP };
        let mut path = Self::walk(ctx, (x0, y0), -h);
        path.reverse();
        path.pop();
        path.extend(Self::walk(ctx, (x0, y0), h));
        ctx.scene.path(path, Rgb::ACCENT, false);
        ctx.scene.marker((x0, y0), Rgb::INK);
        ctx.scene.note(format!("Euler path from ({x0:.2}, {y0:.2}) with step {h:.3}"));
    }
}

/// Carrying capacity `y = K` and the inflection where the curve crosses `K/2`.
pub struct Logistic;

impl Overlay for Logistic {
    fn draw(&self, ctx: &mut OverlayContext<'_>, state: &VisualState) {
        let k = state.param1;
        ctx.hline(k, Rgb::GOOD, true);
        ctx.hline(k / 2.0, Rgb::SECONDARY, true);

        let model = ctx.model;
        let (lo, hi) = ctx.x_domain;
        let crossing = roots(|x| model.eval(x).map_or(f64::NAN, |y| y - k / 2.0), lo, hi, SAMPLE_STEPS)
            .into_iter()
            .next();
        match crossing {
            Some(c) => {
                ctx.scene.marker((c, k / 2.0), Rgb::ACCENT);
                let (dx, dy) = ctx.pixels(2.0, 4.0);
                ctx.scene.label((c + dx, k / 2.0 + dy), "K/2", Rgb::ACCENT);
                ctx.scene.note(format!("K = {k:.3}; growth is fastest at x ≈ {c:.4}"));
            }
            None => ctx.scene.note(format!("K = {k:.3}; the curve does not cross K/2 in view")),
        }
    }
}

/// Gradient arrows of `F(x, y)` and a marked arrow at `(x0, y)`.
pub struct GradientField;

impl Overlay for GradientField {
    fn draw(&self, ctx: &mut OverlayContext<'_>, state: &VisualState) {
        let scale = if state.param1.is_finite() && state.param1 > 0.0 { state.param1 } else { DEFAULT_ARROW_SCALE };
        let cell_px = ((ctx.x_domain.1 - ctx.x_domain.0) / ctx.px.0 / FIELD_COLUMNS as f64)
            .min((ctx.y_domain.1 - ctx.y_domain.0) / ctx.px.1 / FIELD_ROWS as f64);

        for (x, y) in grid(ctx) {
            let Some((gx, gy)) = ctx.model.gradient(x, y) else { continue };
            let (dx, dy) = clamp_on_screen(ctx, (gx * scale, gy * scale), 0.9 * cell_px);
            ctx.scene.arrow((x, y), (x + dx, y + dy), Rgb::MUTED);
        }

        let point = (state.x0, state.param2);
        ctx.scene.marker(point, Rgb::INK);
        match ctx.model.gradient(point.0, point.1) {
            Some((gx, gy)) => {
                let (dx, dy) = clamp_on_screen(ctx, (gx * scale, gy * scale), 3.0 * cell_px);
                ctx.scene.arrow(point, (point.0 + dx, point.1 + dy), Rgb::ACCENT);
                ctx.scene.note(format!(
                    "∇F({:.2}, {:.2}) = ({gx:.3}, {gy:.3}), |∇F| = {:.3}",
                    point.0,
                    point.1,
                    gx.hypot(gy)
                ));
            }
            None => ctx.scene.note(format!("∇F({:.2}, {:.2}) is undefined", point.0, point.1)),
        }
    }
}
