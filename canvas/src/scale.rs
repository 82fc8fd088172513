//! Linear scales between world coordinates and pixels.
//!
//! A [`LinearScale`] maps a world interval (the domain) onto a pixel
//! interval (the range). Applying the camera produces a new scale whose
//! domain is whatever world interval now lands on the same pixels, which is
//! how the visible window is derived after every pan or zoom.

#[cfg(test)]
#[path = "scale_test.rs"]
mod scale_test;

use crate::camera::Camera;

/// Hard cap on tick output, guarding against degenerate domains.
const MAX_TICKS: usize = 1_000;

/// Affine map from `domain` onto `range`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    #[must_use]
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    #[must_use]
    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    #[must_use]
    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// World value to pixel.
    #[must_use]
    pub fn map(&self, v: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d1 == d0 {
            return (r0 + r1) / 2.0;
        }
        r0 + (v - d0) / (d1 - d0) * (r1 - r0)
    }

    /// Pixel to world value.
    #[must_use]
    pub fn invert(&self, px: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if r1 == r0 {
            return (d0 + d1) / 2.0;
        }
        d0 + (px - r0) / (r1 - r0) * (d1 - d0)
    }

    /// The horizontal scale as seen through `camera`.
    #[must_use]
    pub fn rescale_x(&self, camera: &Camera) -> Self {
        let (r0, r1) = self.range;
        let domain = (self.invert(camera.invert_x(r0)), self.invert(camera.invert_x(r1)));
        Self { domain, range: self.range }
    }

    /// The vertical scale as seen through `camera`.
    #[must_use]
    pub fn rescale_y(&self, camera: &Camera) -> Self {
        let (r0, r1) = self.range;
        let domain = (self.invert(camera.invert_y(r0)), self.invert(camera.invert_y(r1)));
        Self { domain, range: self.range }
    }

    /// Domain as `(min, max)` regardless of orientation.
    #[must_use]
    pub fn extent(&self) -> (f64, f64) {
        let (a, b) = self.domain;
        if a <= b { (a, b) } else { (b, a) }
    }

    /// Roughly `count` round values covering the domain, ascending.
    ///
    /// Steps are 1, 2 or 5 times a power of ten.
    #[must_use]
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (lo, hi) = self.extent();
        let Some(step) = tick_step(lo, hi, count) else {
            return Vec::new();
        };
        let first = (lo / step).ceil();
        let last = (hi / step).floor();
        if !(first.is_finite() && last.is_finite()) || last < first {
            return Vec::new();
        }
        let n = ((last - first) as usize + 1).min(MAX_TICKS);
        (0..n).map(|i| (first + i as f64) * step).collect()
    }
}

/// Nice step size for `count` ticks across `[lo, hi]`.
#[must_use]
pub fn tick_step(lo: f64, hi: f64, count: usize) -> Option<f64> {
    if count == 0 || !(lo.is_finite() && hi.is_finite()) || hi <= lo {
        return None;
    }
    let raw = (hi - lo) / count as f64;
    let power = raw.log10().floor();
    let base = 10f64.powf(power);
    let error = raw / base;
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    let step = factor * base;
    (step.is_finite() && step > 0.0).then_some(step)
}
