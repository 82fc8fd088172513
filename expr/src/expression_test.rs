#![allow(clippy::float_cmp)]

use super::*;
use crate::parse;

fn deriv(src: &str) -> Expr {
    parse(src).unwrap().derivative("x").unwrap()
}

fn deriv_at(src: &str, x: f64) -> f64 {
    deriv(src).compile(&["x"]).unwrap().eval_x(x)
}

/// Central difference for cross-checking the symbolic result.
fn numeric(src: &str, x: f64) -> f64 {
    let f = parse(src).unwrap().compile(&["x"]).unwrap();
    let h = 1e-6;
    (f.eval_x(x + h) - f.eval_x(x - h)) / (2.0 * h)
}

#[test]
fn power_rule() {
    assert!((deriv_at("x^2", 3.0) - 6.0).abs() < 1e-12);
    assert!((deriv_at("x^3 - 3x", 2.0) - 9.0).abs() < 1e-12);
}

#[test]
fn constants_vanish() {
    assert_eq!(deriv_at("5", 1.0), 0.0);
    assert_eq!(deriv_at("pi^2", 1.0), 0.0);
}

#[test]
fn agrees_with_central_difference() {
    for (src, x) in [
        ("sin(x^2)", 0.8),
        ("sqrt(x)", 4.0),
        ("x^2 * sin(1/x)", 0.5),
        ("1 / (1 + e^(-x))", 0.3),
        ("2x * e^(x^2)", 0.4),
        ("tan(x)", 0.2),
        ("atan(x)", 1.1),
        ("x^x", 1.5),
        ("2^x", 0.7),
        ("ln(x) / x", 2.0),
        ("log10(x)", 3.0),
        ("tanh(x)", 0.4),
        ("asin(x)", 0.3),
        ("sqrt(25 - x^2)", 3.0),
    ] {
        let symbolic = deriv_at(src, x);
        let approx = numeric(src, x);
        assert!((symbolic - approx).abs() < 1e-5, "{src} at {x}: {symbolic} vs {approx}");
    }
}

#[test]
fn partial_derivative_treats_other_variable_as_constant() {
    let expr = parse("x^2 + 3x*y + y^2").unwrap();
    let dx = expr.derivative("x").unwrap().compile(&["x", "y"]).unwrap();
    let dy = expr.derivative("y").unwrap().compile(&["x", "y"]).unwrap();
    assert!((dx.eval(&[1.0, 2.0]) - 8.0).abs() < 1e-12);
    assert!((dy.eval(&[1.0, 2.0]) - 7.0).abs() < 1e-12);
}

#[test]
fn derivative_keeps_free_identifiers() {
    let d = parse("x + y").unwrap().derivative("x").unwrap();
    assert!(d.depends_on("y"));
    assert!(matches!(d.compile(&["x"]), Err(ExprError::UnknownVariable(_))));
}

#[test]
fn repeated_derivatives_of_exp_stay_small() {
    let mut e = parse("exp(x)").unwrap();
    for _ in 0..20 {
        e = e.derivative("x").unwrap();
    }
    assert!(e.node_count() < 10, "{e}");
    assert!((e.compile(&["x"]).unwrap().eval_x(1.0) - std::f64::consts::E).abs() < 1e-12);
}

#[test]
fn debug_shows_normalized_text() {
    let shown = format!("{:?}", parse("2x").unwrap());
    assert!(shown.contains("2*x"), "{shown}");
}
