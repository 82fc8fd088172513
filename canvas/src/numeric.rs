//! Small numeric routines the overlays lean on.
//!
//! Everything here is total: bad input or non-finite samples produce `None`
//! or an empty result, never a panic.

#[cfg(test)]
#[path = "numeric_test.rs"]
mod numeric_test;

use crate::consts::BISECT_ITERATIONS;
use crate::sample::linspace;

/// Residual above which a bracketed "root" is treated as a discontinuity.
const ROOT_TOLERANCE: f64 = 1e-6;

/// Refine a sign change of `g` inside `[a, b]`.
///
/// Requires finite endpoint values of opposite sign (or an exact zero).
#[must_use]
pub fn bisect(g: impl Fn(f64) -> f64, a: f64, b: f64) -> Option<f64> {
    let (mut lo, mut hi) = (a, b);
    let (mut g_lo, g_hi) = (g(lo), g(hi));
    if !(g_lo.is_finite() && g_hi.is_finite()) {
        return None;
    }
    if g_lo == 0.0 {
        return Some(lo);
    }
    if g_hi == 0.0 {
        return Some(hi);
    }
    if g_lo.signum() == g_hi.signum() {
        return None;
    }
    for _ in 0..BISECT_ITERATIONS {
        let mid = 0.5 * (lo + hi);
        let g_mid = g(mid);
        if !g_mid.is_finite() {
            return None;
        }
        if g_mid == 0.0 {
            return Some(mid);
        }
        if g_mid.signum() == g_lo.signum() {
            lo = mid;
            g_lo = g_mid;
        } else {
            hi = mid;
        }
    }
    Some(0.5 * (lo + hi))
}

/// Every root of `g` found by scanning `[a, b]` in `steps` slices.
///
/// Sign changes across a pole are rejected by checking the residual.
#[must_use]
pub fn roots(g: impl Fn(f64) -> f64, a: f64, b: f64, steps: usize) -> Vec<f64> {
    let xs: Vec<f64> = linspace(a, b, steps).collect();
    let mut found: Vec<f64> = Vec::new();
    for pair in xs.windows(2) {
        let (x0, x1) = (pair[0], pair[1]);
        let (g0, g1) = (g(x0), g(x1));
        if !(g0.is_finite() && g1.is_finite()) {
            continue;
        }
        let bracketed = g1 == 0.0 || (g0 != 0.0 && g0.signum() != g1.signum());
        if !bracketed {
            continue;
        }
        if let Some(root) = bisect(&g, x0, x1) {
            let duplicate = found.last().is_some_and(|&last| (root - last).abs() < 1e-9);
            if !duplicate && g(root).abs() <= ROOT_TOLERANCE {
                found.push(root);
            }
        }
    }
    found
}

/// Composite Simpson's rule over `[a, b]`; `None` if any sample is non-finite.
#[must_use]
pub fn simpson(g: impl Fn(f64) -> f64, a: f64, b: f64, panels: usize) -> Option<f64> {
    if !(a.is_finite() && b.is_finite()) {
        return None;
    }
    if a == b {
        return Some(0.0);
    }
    let n = (panels.max(2) + 1) & !1;
    let h = (b - a) / n as f64;
    let mut sum = 0.0;
    for i in 0..=n {
        let y = g(a + h * i as f64);
        if !y.is_finite() {
            return None;
        }
        let weight = if i == 0 || i == n {
            1.0
        } else if i % 2 == 1 {
            4.0
        } else {
            2.0
        };
        sum += weight * y;
    }
    Some(sum * h / 3.0)
}

/// Central-difference slope of `g` at `x`.
#[must_use]
pub fn central_slope(g: impl Fn(f64) -> f64, x: f64) -> Option<f64> {
    let h = 1e-5 * (1.0 + x.abs());
    let m = (g(x + h) - g(x - h)) / (2.0 * h);
    m.is_finite().then_some(m)
}
