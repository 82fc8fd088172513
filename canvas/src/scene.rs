//! World-space drawing primitives.
//!
//! Overlays and the engine append to a [`Scene`]; the painter in
//! [`crate::render`] is the only consumer. Coordinates are world units, so a
//! scene is independent of the terminal size it ends up on.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

/// An sRGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// The plotted function.
    pub const FUNCTION: Self = Self(59, 130, 246);
    /// Construction lines: secants, bands, sample points.
    pub const ACCENT: Self = Self(245, 158, 11);
    /// Passing checks, tangents, reconstructed curves.
    pub const GOOD: Self = Self(16, 185, 129);
    /// Failing checks and error segments.
    pub const BAD: Self = Self(239, 68, 68);
    /// Secondary construction (reference curves, slices).
    pub const SECONDARY: Self = Self(167, 139, 250);
    /// Anchor markers and labels.
    pub const INK: Self = Self(229, 231, 235);
    pub const AXIS: Self = Self(156, 163, 175);
    pub const GRID: Self = Self(55, 65, 81);
    /// Field ticks and arrows.
    pub const MUTED: Self = Self(107, 114, 128);
}

/// One thing to draw.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// Connected polyline.
    Path { points: Vec<(f64, f64)>, colour: Rgb, dashed: bool },
    /// Axis-aligned rectangle outline spanning two corners.
    Rect { from: (f64, f64), to: (f64, f64), colour: Rgb },
    /// Vertical hatch line used to shade regions.
    Column { x: f64, y0: f64, y1: f64, colour: Rgb },
    Ellipse { centre: (f64, f64), rx: f64, ry: f64, colour: Rgb },
    /// Point highlight.
    Marker { at: (f64, f64), colour: Rgb },
    Arrow { from: (f64, f64), to: (f64, f64), colour: Rgb },
    Label { at: (f64, f64), text: String, colour: Rgb },
}

/// Primitives in paint order plus one-line readouts for the status area.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    pub primitives: Vec<Primitive>,
    pub notes: Vec<String>,
}

impl Scene {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.primitives.clear();
        self.notes.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    pub fn push(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }

    /// Add a polyline. Empty input is dropped.
    pub fn path(&mut self, points: Vec<(f64, f64)>, colour: Rgb, dashed: bool) {
        if !points.is_empty() {
            self.push(Primitive::Path { points, colour, dashed });
        }
    }

    /// Add every sampled segment as its own polyline.
    pub fn paths(&mut self, segments: Vec<Vec<(f64, f64)>>, colour: Rgb, dashed: bool) {
        for points in segments {
            self.path(points, colour, dashed);
        }
    }

    pub fn line(&mut self, from: (f64, f64), to: (f64, f64), colour: Rgb) {
        self.path(vec![from, to], colour, false);
    }

    pub fn dashed_line(&mut self, from: (f64, f64), to: (f64, f64), colour: Rgb) {
        self.path(vec![from, to], colour, true);
    }

    pub fn rect(&mut self, from: (f64, f64), to: (f64, f64), colour: Rgb) {
        self.push(Primitive::Rect { from, to, colour });
    }

    pub fn column(&mut self, x: f64, y0: f64, y1: f64, colour: Rgb) {
        self.push(Primitive::Column { x, y0, y1, colour });
    }

    pub fn ellipse(&mut self, centre: (f64, f64), rx: f64, ry: f64, colour: Rgb) {
        self.push(Primitive::Ellipse { centre, rx, ry, colour });
    }

    pub fn marker(&mut self, at: (f64, f64), colour: Rgb) {
        self.push(Primitive::Marker { at, colour });
    }

    pub fn arrow(&mut self, from: (f64, f64), to: (f64, f64), colour: Rgb) {
        self.push(Primitive::Arrow { from, to, colour });
    }

    pub fn label(&mut self, at: (f64, f64), text: impl Into<String>, colour: Rgb) {
        self.push(Primitive::Label { at, text: text.into(), colour });
    }

    /// Add a readout line for the status area.
    pub fn note(&mut self, text: impl Into<String>) {
        self.notes.push(text.into());
    }

    /// Count primitives matching `pred`.
    #[must_use]
    pub fn count(&self, pred: impl Fn(&Primitive) -> bool) -> usize {
        self.primitives.iter().filter(|p| pred(p)).count()
    }
}
