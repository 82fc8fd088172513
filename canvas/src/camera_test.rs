#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn point_approx_eq(a: Point, b: Point) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

// --- Defaults and conversion ---

#[test]
fn camera_default_is_identity() {
    let cam = Camera::default();
    assert_eq!(ViewTransform::from(cam), ViewTransform::IDENTITY);
}

#[test]
fn camera_from_transform_copies_fields() {
    let cam = Camera::from(ViewTransform { k: 2.0, x: 10.0, y: -4.0 });
    assert_eq!(cam, Camera { pan_x: 10.0, pan_y: -4.0, zoom: 2.0 });
}

#[test]
fn camera_from_transform_clamps_zoom() {
    assert_eq!(Camera::from(ViewTransform { k: 500.0, x: 0.0, y: 0.0 }).zoom, MAX_ZOOM);
    assert_eq!(Camera::from(ViewTransform { k: 0.01, x: 0.0, y: 0.0 }).zoom, MIN_ZOOM);
}

#[test]
fn camera_from_transform_repairs_garbage() {
    let cam = Camera::from(ViewTransform { k: f64::NAN, x: f64::INFINITY, y: 3.0 });
    assert_eq!(cam, Camera { pan_x: 0.0, pan_y: 3.0, zoom: 1.0 });
}

// --- Mapping ---

#[test]
fn screen_to_base_with_pan_and_zoom() {
    let cam = Camera { pan_x: 20.0, pan_y: 10.0, zoom: 2.0 };
    assert!(point_approx_eq(cam.screen_to_base(Point::new(20.0, 10.0)), Point::new(0.0, 0.0)));
    assert!(point_approx_eq(cam.screen_to_base(Point::new(0.0, 0.0)), Point::new(-10.0, -5.0)));
}

#[test]
fn base_to_screen_with_pan_and_zoom() {
    let cam = Camera { pan_x: 20.0, pan_y: 10.0, zoom: 3.0 };
    // 5*3 + 20 = 35, 5*3 + 10 = 25
    assert!(point_approx_eq(cam.base_to_screen(Point::new(5.0, 5.0)), Point::new(35.0, 25.0)));
}

#[test]
fn round_trip_fractional_zoom() {
    let cam = Camera { pan_x: 13.7, pan_y: -42.3, zoom: 0.75 };
    let p = Point::new(333.3, -999.9);
    assert!(point_approx_eq(cam.screen_to_base(cam.base_to_screen(p)), p));
}

#[test]
fn invert_components_match_point_inverse() {
    let cam = Camera { pan_x: 7.0, pan_y: -3.0, zoom: 4.0 };
    let p = cam.screen_to_base(Point::new(15.0, 9.0));
    assert!(approx_eq(cam.invert_x(15.0), p.x));
    assert!(approx_eq(cam.invert_y(9.0), p.y));
}

// --- Gestures ---

#[test]
fn panned_adds_delta() {
    let cam = Camera::default().panned(5.0, -2.0);
    assert_eq!(cam, Camera { pan_x: 5.0, pan_y: -2.0, zoom: 1.0 });
}

#[test]
fn zoom_about_keeps_anchor_fixed() {
    let cam = Camera { pan_x: 12.0, pan_y: 8.0, zoom: 1.5 };
    let anchor = Point::new(80.0, 40.0);
    let before = cam.screen_to_base(anchor);
    let zoomed = cam.zoomed_about(anchor, 2.0);
    assert!(approx_eq(zoomed.zoom, 3.0));
    assert!(point_approx_eq(zoomed.screen_to_base(anchor), before));
}

#[test]
fn zoom_about_clamps_to_extent() {
    let cam = Camera::default().zoomed_about(Point::new(0.0, 0.0), 1_000.0);
    assert_eq!(cam.zoom, MAX_ZOOM);
    let cam = Camera::default().zoomed_about(Point::new(0.0, 0.0), 0.0001);
    assert_eq!(cam.zoom, MIN_ZOOM);
}

#[test]
fn zoom_about_ignores_bad_factor() {
    let cam = Camera { pan_x: 1.0, pan_y: 2.0, zoom: 3.0 };
    assert_eq!(cam.zoomed_about(Point::new(0.0, 0.0), f64::NAN), cam);
    assert_eq!(cam.zoomed_about(Point::new(0.0, 0.0), -1.0), cam);
}
