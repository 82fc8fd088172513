//! Integrals: Riemann sums, accumulated area, volumes.

use std::f64::consts::PI;

use curriculum::VisualState;

use super::{Overlay, OverlayContext, fmt_value};
use crate::consts::{MAX_PARTITIONS, QUADRATURE_PANELS, RIEMANN_SPAN};
use crate::numeric::simpson;
use crate::scene::Rgb;

/// Most rotation disks drawn.
const MAX_DISKS: usize = 60;

/// Disks above this count skip their sample markers.
const MARKER_LIMIT: usize = 50;

/// Disk ellipse width as a fraction of its slice.
const DISK_ASPECT: f64 = 0.3;

/// Rounded, clamped partition count from a free-form parameter.
fn partitions(value: f64, max: usize) -> usize {
    if value.is_finite() { (value.round().max(1.0) as usize).min(max) } else { 1 }
}

/// Riemann rectangles on `[x0, x0 + 5]`.
pub struct Riemann;

impl Overlay for Riemann {
    fn draw(&self, ctx: &mut OverlayContext<'_>, state: &VisualState) {
        let n = partitions(state.param1, MAX_PARTITIONS);
        let t = if state.param2.is_finite() { state.param2.clamp(0.0, 1.0) } else { 0.5 };
        let (a, b) = (state.x0, state.x0 + RIEMANN_SPAN);
        let dx = RIEMANN_SPAN / n as f64;

        let mut sum = 0.0;
        let mut defined = true;
        for i in 0..n {
            let left = a + dx * i as f64;
            let xs = left + t * dx;
            match ctx.f(xs) {
                Some(h) => {
                    ctx.scene.rect((left, 0.0), (left + dx, h), Rgb::ACCENT);
                    if n <= MARKER_LIMIT {
                        ctx.scene.marker((xs, h), Rgb::INK);
                    }
                    sum += h * dx;
                }
                None => defined = false,
            }
        }

        let model = ctx.model;
        let exact = simpson(|x| model.eval(x).unwrap_or(f64::NAN), a, b, QUADRATURE_PANELS);
        let sum = defined.then_some(sum);
        ctx.scene.note(format!("n = {n}, sample at {t:.2}: Σ f(x*)Δx = {}", fmt_value(sum)));
        ctx.scene.note(format!("∫ over [{a:.2}, {b:.2}] = {}", fmt_value(exact)));
    }
}

/// Area accumulated from `x0` up to `x`, and a slice of width `Δx` at `x`.
pub struct Accumulation;

impl Overlay for Accumulation {
    fn draw(&self, ctx: &mut OverlayContext<'_>, state: &VisualState) {
        let (a, x, dx) = (state.x0, state.param1, state.param2);
        let model = ctx.model;
        let f = |t: f64| model.eval(t).unwrap_or(f64::NAN);
        ctx.shade(a, x, |_| 0.0, f, Rgb::ACCENT);
        ctx.vline(x, Rgb::SECONDARY, true);

        let fx = ctx.f(x);
        if let Some(h) = fx {
            ctx.scene.marker((x, h), Rgb::INK);
            if dx > 0.0 {
                ctx.scene.rect((x, 0.0), (x + dx, h), Rgb::GOOD);
            }
        }
        let area = simpson(f, a, x, QUADRATURE_PANELS);
        ctx.scene.note(format!("A(x) = ∫ from {a:.2} to {x:.2} = {}", fmt_value(area)));
        if dx > 0.0 {
            ctx.scene.note(format!("slice f(x)Δx = {} ≈ A(x + Δx) - A(x)", fmt_value(fx.map(|h| h * dx))));
        }
    }
}

/// Shaded area on `[x0, x0 + width]`.
pub struct ShadedArea;

impl Overlay for ShadedArea {
    fn draw(&self, ctx: &mut OverlayContext<'_>, state: &VisualState) {
        let (a, b) = (state.x0, state.x0 + state.param1);
        let model = ctx.model;
        let f = |t: f64| model.eval(t).unwrap_or(f64::NAN);
        ctx.shade(a, b, |_| 0.0, f, Rgb::ACCENT);
        ctx.vline(a, Rgb::MUTED, true);
        ctx.vline(b, Rgb::MUTED, true);
        let area = simpson(f, a, b, QUADRATURE_PANELS);
        ctx.scene.note(format!("∫ over [{a:.2}, {b:.2}] = {}", fmt_value(area)));
    }
}

/// Area between `f` and the line `y = level` on `[x0, x0 + width]`.
pub struct AreaBetween;

impl Overlay for AreaBetween {
    fn draw(&self, ctx: &mut OverlayContext<'_>, state: &VisualState) {
        let (a, b, level) = (state.x0, state.x0 + state.param1, state.param2);
        let model = ctx.model;
        let f = |t: f64| model.eval(t).unwrap_or(f64::NAN);
        ctx.hline(level, Rgb::ACCENT, true);
        ctx.shade(a, b, |_| level, f, Rgb::SECONDARY);
        let area = simpson(|t| (f(t) - level).abs(), a, b, QUADRATURE_PANELS).map(f64::abs);
        ctx.scene.note(format!("∫ |f(x) - {level:.2}| over [{a:.2}, {b:.2}] = {}", fmt_value(area)));
    }
}

/// Mirrored curve and rotation disks on `[x0, x0 + length]`.
pub struct Disks;

impl Overlay for Disks {
    fn draw(&self, ctx: &mut OverlayContext<'_>, state: &VisualState) {
        let model = ctx.model;
        ctx.curve(|x| model.eval(x).map_or(f64::NAN, |y| -y), Rgb::FUNCTION, true);

        let (a, len) = (state.x0, state.param2);
        if !(len.is_finite() && len > 0.0) {
            ctx.scene.note("interval length must be positive");
            return;
        }
        let n = partitions(state.param1, MAX_DISKS);
        let dx = len / n as f64;
        ctx.vline(a, Rgb::MUTED, true);
        ctx.vline(a + len, Rgb::MUTED, true);

        let mut sum = 0.0;
        for i in 0..n {
            let xm = a + dx * (i as f64 + 0.5);
            if let Some(r) = ctx.f(xm).map(f64::abs) {
                ctx.scene.ellipse((xm, 0.0), dx * DISK_ASPECT, r, Rgb::ACCENT);
                sum += PI * r * r * dx;
            }
        }
        let exact = simpson(|x| model.eval(x).map_or(f64::NAN, |y| PI * y * y), a, a + len, QUADRATURE_PANELS);
        ctx.scene.note(format!("{n} disks: π Σ r²Δx = {sum:.4}"));
        ctx.scene.note(format!("π ∫ f² over [{a:.2}, {:.2}] = {}", a + len, fmt_value(exact)));
    }
}
