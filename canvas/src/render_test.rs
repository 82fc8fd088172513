use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::{Block, Widget};

use curriculum::{TopicId, ViewTransform, registry};

use super::*;
use crate::engine::EngineCore;

const WINDOW: ((f64, f64), (f64, f64)) = ((-1.0, 1.0), (-1.0, 1.0));

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-12
}

// --- clip ---

#[test]
fn clip_keeps_inside_segment() {
    let seg = ((-0.5, 0.0), (0.5, 0.2));
    assert_eq!(clip(seg, WINDOW.0, WINDOW.1), Some(seg));
}

#[test]
fn clip_trims_crossing_segment() {
    let Some(((x1, y1), (x2, y2))) = clip(((-3.0, 0.0), (3.0, 0.0)), WINDOW.0, WINDOW.1) else {
        panic!("segment crosses the window");
    };
    assert!(approx_eq(x1, -1.0) && approx_eq(x2, 1.0));
    assert!(approx_eq(y1, 0.0) && approx_eq(y2, 0.0));
}

#[test]
fn clip_drops_outside_segment() {
    assert_eq!(clip(((2.0, 2.0), (3.0, 5.0)), WINDOW.0, WINDOW.1), None);
    assert_eq!(clip(((-5.0, 2.0), (5.0, 2.0)), WINDOW.0, WINDOW.1), None);
}

#[test]
fn clip_rejects_non_finite() {
    assert_eq!(clip(((0.0, f64::NAN), (0.5, 0.5)), WINDOW.0, WINDOW.1), None);
}

// --- dashes ---

#[test]
fn short_segment_is_one_dash() {
    let seg = ((0.0, 0.0), (0.3, 0.0));
    assert_eq!(dashes(seg, (0.1, 0.1), 4.0), vec![seg]);
}

#[test]
fn long_segment_alternates() {
    // 20 px long, 4 px dashes: on at 0-4, 8-12, 16-20
    let parts = dashes(((0.0, 0.0), (2.0, 0.0)), (0.1, 0.1), 4.0);
    assert_eq!(parts.len(), 3);
    assert!(approx_eq(parts[1].0.0, 0.8) && approx_eq(parts[1].1.0, 1.2));
    assert!(approx_eq(parts[2].1.0, 2.0));
}

// --- widget ---

#[test]
fn plot_canvas_draws_into_buffer() {
    let mut engine = EngineCore::new();
    engine.set_viewport(76.0, 32.0);
    let state = registry::manifest(TopicId::LimitDefinition).default_visual_state(ViewTransform::IDENTITY);
    let frame = engine.frame(&state);

    let area = Rect::new(0, 0, 40, 10);
    let mut buf = Buffer::empty(area);
    plot_canvas(&frame, Block::default()).render(area, &mut buf);
    assert!(buf.content.iter().any(|cell| cell.symbol() != " "));
}

#[test]
fn colour_maps_rgb() {
    assert_eq!(colour(Rgb(1, 2, 3)), Color::Rgb(1, 2, 3));
}
