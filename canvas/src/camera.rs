//! Pan/zoom camera.
//!
//! The camera is the math half of [`ViewTransform`]: the transform itself is
//! plain data stored in the visual state, and every operation here reads one
//! and produces another. Screen space is braille-pixel space with y pointing
//! down, and `screen = zoom * p + pan`.

#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use curriculum::ViewTransform;

use crate::consts::{MAX_ZOOM, MIN_ZOOM};

/// A point in screen (pixel) space or untransformed base space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Camera state for pan/zoom over the plot surface.
///
/// `pan_x` / `pan_y` are in pixels. `zoom` is a scale factor (1.0 = no zoom)
/// kept inside `[MIN_ZOOM, MAX_ZOOM]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub pan_x: f64,
    pub pan_y: f64,
    pub zoom: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self { pan_x: 0.0, pan_y: 0.0, zoom: 1.0 }
    }
}

impl From<ViewTransform> for Camera {
    fn from(t: ViewTransform) -> Self {
        let zoom = if t.k.is_finite() && t.k > 0.0 { t.k.clamp(MIN_ZOOM, MAX_ZOOM) } else { 1.0 };
        let pan_x = if t.x.is_finite() { t.x } else { 0.0 };
        let pan_y = if t.y.is_finite() { t.y } else { 0.0 };
        Self { pan_x, pan_y, zoom }
    }
}

impl From<Camera> for ViewTransform {
    fn from(c: Camera) -> Self {
        Self { k: c.zoom, x: c.pan_x, y: c.pan_y }
    }
}

impl Camera {
    /// Map a transformed screen point back to base space.
    #[must_use]
    pub fn screen_to_base(&self, screen: Point) -> Point {
        Point { x: (screen.x - self.pan_x) / self.zoom, y: (screen.y - self.pan_y) / self.zoom }
    }

    /// Map a base-space point to transformed screen space.
    #[must_use]
    pub fn base_to_screen(&self, base: Point) -> Point {
        Point { x: base.x * self.zoom + self.pan_x, y: base.y * self.zoom + self.pan_y }
    }

    /// Invert just the x component.
    #[must_use]
    pub fn invert_x(&self, x: f64) -> f64 {
        (x - self.pan_x) / self.zoom
    }

    /// Invert just the y component.
    #[must_use]
    pub fn invert_y(&self, y: f64) -> f64 {
        (y - self.pan_y) / self.zoom
    }

    /// Translate by a screen-space delta.
    #[must_use]
    pub fn panned(self, dx: f64, dy: f64) -> Self {
        Self { pan_x: self.pan_x + dx, pan_y: self.pan_y + dy, ..self }
    }

    /// Scale by `factor` keeping the screen point `anchor` fixed.
    ///
    /// The resulting zoom is clamped to the scale extent; at the limit this
    /// is a no-op.
    #[must_use]
    pub fn zoomed_about(self, anchor: Point, factor: f64) -> Self {
        if !factor.is_finite() || factor <= 0.0 {
            return self;
        }
        let zoom = (self.zoom * factor).clamp(MIN_ZOOM, MAX_ZOOM);
        if zoom == self.zoom {
            return self;
        }
        let base = self.screen_to_base(anchor);
        Self { pan_x: anchor.x - base.x * zoom, pan_y: anchor.y - base.y * zoom, zoom }
    }
}
