use super::*;

#[test]
fn smooth_curve_is_one_path() {
    let segments = sample_path(|x| x * x, (-1.0, 1.0), 300, f64::INFINITY);
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].len(), 301);
}

#[test]
fn endpoints_are_included() {
    let segments = sample_path(|x| x, (-2.0, 3.0), 10, f64::INFINITY);
    let path = &segments[0];
    assert!((path[0].0 + 2.0).abs() < 1e-12);
    assert!((path[path.len() - 1].0 - 3.0).abs() < 1e-12);
}

#[test]
fn non_finite_samples_split_the_path() {
    // sqrt is NaN on the left half
    let segments = sample_path(f64::sqrt, (-1.0, 1.0), 10, f64::INFINITY);
    assert_eq!(segments.len(), 1);
    assert!(segments[0].iter().all(|&(x, _)| x >= 0.0));

    // ln(|x|) is -inf exactly at 0, which sits on a sample
    let segments = sample_path(|x: f64| x.abs().ln(), (-1.0, 1.0), 10, f64::INFINITY);
    assert_eq!(segments.len(), 2);
}

#[test]
fn large_jump_splits_the_path() {
    let segments = sample_path(|x| 1.0 / x, (-1.0, 1.0), 9, 10.0);
    assert_eq!(segments.len(), 2);
    assert!(segments[0].iter().all(|&(x, _)| x < 0.0));
    assert!(segments[1].iter().all(|&(x, _)| x > 0.0));
}

#[test]
fn all_undefined_yields_nothing() {
    assert!(sample_path(|_| f64::NAN, (0.0, 1.0), 50, f64::INFINITY).is_empty());
}

#[test]
fn zero_steps_still_samples_both_ends() {
    let segments = sample_path(|x| x, (0.0, 1.0), 0, f64::INFINITY);
    assert_eq!(segments[0].len(), 2);
}

#[test]
fn linspace_spans_both_ends() {
    let xs: Vec<f64> = linspace(0.0, 1.0, 4).collect();
    assert_eq!(xs, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
}
