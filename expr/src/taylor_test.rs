#![allow(clippy::float_cmp)]

use super::*;
use crate::parse;

#[test]
fn factorial_values() {
    assert_eq!(factorial(0), 1.0);
    assert_eq!(factorial(1), 1.0);
    assert_eq!(factorial(5), 120.0);
    assert_eq!(factorial(10), 3_628_800.0);
    assert!(factorial(170).is_finite());
    assert!(factorial(171).is_infinite());
}

#[test]
fn exp_coefficients_are_reciprocal_factorials() {
    let poly = TaylorPolynomial::expand(&parse("exp(x)").unwrap(), "x", 0.0, 8);
    assert_eq!(poly.coefficients().len(), 9);
    for (k, c) in poly.coefficients().iter().enumerate() {
        let expected = 1.0 / factorial(u32::try_from(k).unwrap());
        assert!((c - expected).abs() < 1e-15, "k = {k}");
    }
    assert!(!poly.is_truncated());
}

#[test]
fn exp_error_shrinks_with_order_and_grows_with_distance() {
    let f = parse("exp(x)").unwrap();
    let err = |order: u32, x: f64| (TaylorPolynomial::expand(&f, "x", 0.0, order).evaluate(x) - x.exp()).abs();

    assert!(err(8, 0.5) < 1e-8);
    assert!(err(2, 0.5) > err(5, 0.5));
    assert!(err(5, 0.5) > err(8, 0.5));
    assert!(err(3, 2.0) > err(3, 0.5));
}

#[test]
fn sin_odd_coefficients() {
    let poly = TaylorPolynomial::expand(&parse("sin(x)").unwrap(), "x", 0.0, 5);
    let c = poly.coefficients();
    assert!(c[0].abs() < 1e-15);
    assert!((c[1] - 1.0).abs() < 1e-15);
    assert!(c[2].abs() < 1e-15);
    assert!((c[3] + 1.0 / 6.0).abs() < 1e-15);
    assert!((c[5] - 1.0 / 120.0).abs() < 1e-15);
}

#[test]
fn polynomial_about_nonzero_center_is_exact() {
    let f = parse("x^3 - 3x").unwrap();
    let poly = TaylorPolynomial::expand(&f, "x", 1.0, 3);
    for x in [-2.0, 0.0, 0.5, 3.0] {
        let expected: f64 = x * x * x - 3.0 * x;
        assert!((poly.evaluate(x) - expected).abs() < 1e-9);
    }
}

#[test]
fn order_zero_is_constant() {
    let poly = TaylorPolynomial::expand(&parse("cos(x)").unwrap(), "x", 0.0, 0);
    assert_eq!(poly.coefficients(), &[1.0]);
    assert_eq!(poly.evaluate(3.0), 1.0);
}

#[test]
fn singular_center_truncates() {
    let poly = TaylorPolynomial::expand(&parse("1 / x").unwrap(), "x", 0.0, 3);
    assert!(poly.coefficients().is_empty());
    assert_eq!(poly.truncation(), Some(&ExprError::NonFinite));
    assert!(poly.evaluate(1.0).is_nan());
}

#[test]
fn foreign_variable_truncates() {
    let poly = TaylorPolynomial::expand(&parse("x + y").unwrap(), "x", 0.0, 2);
    assert!(matches!(poly.truncation(), Some(ExprError::UnknownVariable(_))));
}

#[test]
fn geometric_series_coefficients() {
    let poly = TaylorPolynomial::expand(&parse("1 / (1 - x)").unwrap(), "x", 0.0, 5);
    for c in poly.coefficients() {
        assert!((c - 1.0).abs() < 1e-12);
    }
}

/// Relative comparison for coefficients that grow like `2^k`.
fn assert_rel(actual: f64, expected: f64, k: usize) {
    let rel = ((actual - expected) / expected).abs();
    assert!(rel < 1e-9, "k = {k}: {actual} vs {expected}");
}

#[test]
fn log_one_plus_x_high_order_matches_closed_form() {
    // c_0 = ln 1.5, c_k = (-1)^(k+1) / (k * 1.5^k)
    let order = 16;
    let poly = TaylorPolynomial::expand(&parse("ln(1 + x)").unwrap(), "x", 0.5, order);
    assert!(!poly.is_truncated(), "{:?}", poly.truncation());
    assert_eq!(poly.coefficients().len(), order as usize + 1);

    assert_rel(poly.coefficients()[0], 1.5_f64.ln(), 0);
    for (k, c) in poly.coefficients().iter().enumerate().skip(1) {
        let kf = f64::from(u32::try_from(k).unwrap());
        let sign = if k % 2 == 1 { 1.0 } else { -1.0 };
        assert_rel(*c, sign / (kf * 1.5_f64.powf(kf)), k);
    }
    assert!((poly.evaluate(0.7) - 1.7_f64.ln()).abs() < 1e-12);
}

#[test]
fn geometric_series_high_order_matches_closed_form() {
    // f^(k)(x) = k! / (1 - x)^(k+1), so c_k = 2^(k+1) at x0 = 0.5
    let order = 16;
    let poly = TaylorPolynomial::expand(&parse("1/(1-x)").unwrap(), "x", 0.5, order);
    assert!(!poly.is_truncated(), "{:?}", poly.truncation());
    assert_eq!(poly.coefficients().len(), order as usize + 1);

    for (k, c) in poly.coefficients().iter().enumerate() {
        let expected = 2.0_f64.powi(i32::try_from(k).unwrap() + 1);
        assert_rel(*c, expected, k);
    }
}

#[test]
fn from_coefficients_evaluates() {
    let poly = TaylorPolynomial::from_coefficients(2.0, vec![1.0, 2.0, 3.0]);
    assert_eq!(poly.requested_order(), 2);
    assert_eq!(poly.evaluate(3.0), 6.0);
}
