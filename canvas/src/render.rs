//! Paints a [`PlotFrame`] onto a ratatui braille canvas.
//!
//! Lines are clipped to the visible window before they reach ratatui, and
//! dashes are cut in pixel space so they look the same at every zoom level.
//! Paint order: hatch columns, then strokes, then markers and labels on top.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::f64::consts::TAU;

use ratatui::style::{Color, Style};
use ratatui::symbols::Marker;
use ratatui::text::Span;
use ratatui::widgets::Block;
use ratatui::widgets::canvas::{Canvas, Context, Line, Points};

use crate::consts::DASH_PX;
use crate::engine::PlotFrame;
use crate::scene::{Primitive, Rgb};

type Seg = ((f64, f64), (f64, f64));

/// Ellipses are drawn as this many chords.
const ELLIPSE_SEGMENTS: usize = 32;

/// Arrow head length in pixels.
const ARROW_HEAD_PX: f64 = 3.0;

/// Upper bound on dashes per segment.
const MAX_DASHES: usize = 2_000;

#[must_use]
pub fn colour(c: Rgb) -> Color {
    Color::Rgb(c.0, c.1, c.2)
}

/// A braille canvas widget showing `frame`.
pub fn plot_canvas<'a>(frame: &'a PlotFrame, block: Block<'a>) -> Canvas<'a, impl Fn(&mut Context<'_>) + 'a> {
    Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .x_bounds([frame.x_domain.0, frame.x_domain.1])
        .y_bounds([frame.y_domain.0, frame.y_domain.1])
        .paint(move |ctx| paint(ctx, frame))
}

/// Draw every primitive of `frame` into `ctx`.
pub fn paint(ctx: &mut Context<'_>, frame: &PlotFrame) {
    let painter = Painter {
        x: frame.x_domain,
        y: frame.y_domain,
        px: (
            (frame.x_domain.1 - frame.x_domain.0) / frame.width_px.max(1.0),
            (frame.y_domain.1 - frame.y_domain.0) / frame.height_px.max(1.0),
        ),
    };

    for p in &frame.scene.primitives {
        if let Primitive::Column { x, y0, y1, colour: c } = p {
            painter.segment(ctx, ((*x, *y0), (*x, *y1)), colour(*c), false);
        }
    }
    ctx.layer();

    for p in &frame.scene.primitives {
        match p {
            Primitive::Path { points, colour: c, dashed } => painter.path(ctx, points, colour(*c), *dashed),
            Primitive::Rect { from, to, colour: c } => {
                let corners = [*from, (to.0, from.1), *to, (from.0, to.1), *from];
                painter.path(ctx, &corners, colour(*c), false);
            }
            Primitive::Ellipse { centre, rx, ry, colour: c } => {
                let points: Vec<(f64, f64)> = (0..=ELLIPSE_SEGMENTS)
                    .map(|i| {
                        let t = TAU * i as f64 / ELLIPSE_SEGMENTS as f64;
                        (centre.0 + rx * t.cos(), centre.1 + ry * t.sin())
                    })
                    .collect();
                painter.path(ctx, &points, colour(*c), false);
            }
            Primitive::Arrow { from, to, colour: c } => painter.arrow(ctx, *from, *to, colour(*c)),
            Primitive::Column { .. } | Primitive::Marker { .. } | Primitive::Label { .. } => {}
        }
    }
    ctx.layer();

    for p in &frame.scene.primitives {
        match p {
            Primitive::Marker { at, colour: c } if painter.contains(*at) => {
                ctx.print(at.0, at.1, Span::styled("●", Style::default().fg(colour(*c))));
            }
            Primitive::Label { at, text, colour: c } if painter.contains(*at) => {
                ctx.print(at.0, at.1, Span::styled(text.clone(), Style::default().fg(colour(*c))));
            }
            _ => {}
        }
    }
}

/// Visible window plus pixel size.
struct Painter {
    x: (f64, f64),
    y: (f64, f64),
    px: (f64, f64),
}

impl Painter {
    fn contains(&self, p: (f64, f64)) -> bool {
        p.0 >= self.x.0 && p.0 <= self.x.1 && p.1 >= self.y.0 && p.1 <= self.y.1
    }

    fn path(&self, ctx: &mut Context<'_>, points: &[(f64, f64)], color: Color, dashed: bool) {
        if let [only] = points {
            if self.contains(*only) {
                ctx.draw(&Points { coords: &[*only], color });
            }
            return;
        }
        for pair in points.windows(2) {
            self.segment(ctx, (pair[0], pair[1]), color, dashed);
        }
    }

    fn segment(&self, ctx: &mut Context<'_>, seg: Seg, color: Color, dashed: bool) {
        let Some(seg) = clip(seg, self.x, self.y) else { return };
        if dashed {
            for ((x1, y1), (x2, y2)) in dashes(seg, self.px, DASH_PX) {
                ctx.draw(&Line { x1, y1, x2, y2, color });
            }
        } else {
            let ((x1, y1), (x2, y2)) = seg;
            ctx.draw(&Line { x1, y1, x2, y2, color });
        }
    }

    fn arrow(&self, ctx: &mut Context<'_>, from: (f64, f64), to: (f64, f64), color: Color) {
        self.segment(ctx, (from, to), color, false);
        // head in pixel space so it is not squashed by the aspect ratio
        let (dx, dy) = ((to.0 - from.0) / self.px.0, (to.1 - from.1) / self.px.1);
        let len = dx.hypot(dy);
        if !(len.is_finite() && len > ARROW_HEAD_PX) {
            return;
        }
        let (ux, uy) = (dx / len, dy / len);
        for side in [1.0, -1.0] {
            let (s, c) = (side * 0.45_f64).sin_cos();
            let (hx, hy) = (-(ux * c - uy * s), -(ux * s + uy * c));
            let tip = (to.0 + hx * ARROW_HEAD_PX * self.px.0, to.1 + hy * ARROW_HEAD_PX * self.px.1);
            self.segment(ctx, (to, tip), color, false);
        }
    }
}

/// Clip a segment to the window (Liang–Barsky). `None` if nothing is visible.
#[must_use]
pub fn clip(seg: Seg, x: (f64, f64), y: (f64, f64)) -> Option<Seg> {
    let ((x1, y1), (x2, y2)) = seg;
    if ![x1, y1, x2, y2].iter().all(|v| v.is_finite()) {
        return None;
    }
    let (dx, dy) = (x2 - x1, y2 - y1);
    let mut t0 = 0.0_f64;
    let mut t1 = 1.0_f64;
    for (p, q) in [(-dx, x1 - x.0), (dx, x.1 - x1), (-dy, y1 - y.0), (dy, y.1 - y1)] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            t0 = t0.max(r);
        } else {
            t1 = t1.min(r);
        }
        if t0 > t1 {
            return None;
        }
    }
    Some(((x1 + t0 * dx, y1 + t0 * dy), (x1 + t1 * dx, y1 + t1 * dy)))
}

/// Split a segment into dashes of `dash_px` on, `dash_px` off.
#[must_use]
pub fn dashes(seg: Seg, px: (f64, f64), dash_px: f64) -> Vec<Seg> {
    let ((x1, y1), (x2, y2)) = seg;
    let len_px = ((x2 - x1) / px.0).hypot((y2 - y1) / px.1);
    if !(len_px.is_finite() && dash_px > 0.0) || len_px <= dash_px {
        return vec![seg];
    }
    let count = ((len_px / dash_px).ceil() as usize).min(2 * MAX_DASHES);
    let at = |t: f64| (x1 + (x2 - x1) * t, y1 + (y2 - y1) * t);
    (0..count)
        .step_by(2)
        .map(|i| {
            let a = i as f64 * dash_px / len_px;
            let b = ((i + 1) as f64 * dash_px / len_px).min(1.0);
            (at(a), at(b))
        })
        .collect()
}
