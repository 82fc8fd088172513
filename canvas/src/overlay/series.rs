//! Series: partial sums and Taylor polynomials.

use curriculum::VisualState;

use super::{Overlay, OverlayContext};
use crate::scene::Rgb;

/// Terms `a(n) = f(n)` and partial sums `S_n` for `n = 1..=N`, `N = max(order, 1)`.
pub struct PartialSums;

impl Overlay for PartialSums {
    fn draw(&self, ctx: &mut OverlayContext<'_>, state: &VisualState) {
        let terms = state.order.max(1);
        let mut sums = Vec::with_capacity(terms as usize);
        let mut total = 0.0;
        for n in 1..=terms {
            let x = f64::from(n);
            let Some(a) = ctx.f(x) else {
                ctx.scene.note(format!("a({n}) is undefined; summation stops"));
                break;
            };
            ctx.scene.marker((x, a), Rgb::ACCENT);
            total += a;
            sums.push((x, total));
        }
        if sums.is_empty() {
            return;
        }
        for &p in &sums {
            ctx.scene.marker(p, Rgb::GOOD);
        }
        let count = sums.len();
        ctx.scene.path(sums, Rgb::GOOD, false);
        ctx.hline(total, Rgb::SECONDARY, true);
        ctx.scene.note(format!("S_{count} = {total:.5}"));
    }
}

/// Reconstructed Taylor polynomial of the requested order.
pub struct TaylorCurve;

impl Overlay for TaylorCurve {
    fn draw(&self, ctx: &mut OverlayContext<'_>, state: &VisualState) {
        let model = ctx.model;
        let Some(poly) = model.taylor() else { return };
        if poly.coefficients().is_empty() {
            ctx.scene.note("no Taylor coefficients at x0");
            return;
        }
        ctx.curve(|x| poly.evaluate(x), Rgb::GOOD, false);
        if let Some(y0) = ctx.f(state.x0) {
            ctx.scene.marker((state.x0, y0), Rgb::GOOD);
        }
        let kept = poly.coefficients().len();
        ctx.scene.note(format!("P_{} about x0 = {:.2}: {kept} coefficients", poly.requested_order(), poly.center()));
        if let Some(reason) = poly.truncation() {
            ctx.scene.note(format!("expansion stopped after {kept} terms: {}", reason.localized()));
        }
    }
}
