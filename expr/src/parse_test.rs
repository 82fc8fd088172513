use super::*;

fn eval_at(src: &str, x: f64) -> f64 {
    parse(src).unwrap().compile(&["x"]).unwrap().eval(&[x])
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn normalized(src: &str) -> String {
    normalize(&tokenize(src).unwrap()).unwrap().text
}

// =============================================================
// Normalization
// =============================================================

#[test]
fn juxtaposition_becomes_explicit_product() {
    assert_eq!(normalized("2x"), "2*x");
    assert_eq!(normalized("2(x+1)"), "2*(x + 1)");
    assert_eq!(normalized("(x+1)(x-1)"), "(x + 1)*(x - 1)");
    assert_eq!(normalized("2 sin(x)"), "2*sin(x)");
    assert_eq!(normalized("x(x+1)"), "x*(x + 1)");
}

#[test]
fn aliases_resolve_to_backend_names() {
    assert_eq!(normalized("log(x)"), "ln(x)");
    assert_eq!(normalized("arctan(x)"), "atan(x)");
}

#[test]
fn constants_become_literals() {
    assert_eq!(normalized("pi"), std::f64::consts::PI.to_string());
    assert_eq!(normalized("2e"), format!("2*{}", std::f64::consts::E));
}

#[test]
fn unary_sign_runs_collapse() {
    assert_eq!(normalized("--x"), "x");
    assert_eq!(normalized("-+-x"), "x");
    assert_eq!(normalized("x - -x"), "x - -x");
}

#[test]
fn symbols_are_listed_once_in_order() {
    let n = normalize(&tokenize("y*x + y").unwrap()).unwrap();
    assert_eq!(n.symbols, vec!["y".to_string(), "x".to_string()]);
}

// =============================================================
// Evaluation through the backend
// =============================================================

#[test]
fn precedence_of_sum_and_product() {
    assert!(close(eval_at("1 + 2 * x", 3.0), 7.0));
}

#[test]
fn power_is_right_associative() {
    assert!(close(eval_at("2^3^x", 2.0), 512.0));
}

#[test]
fn unary_minus_binds_looser_than_power() {
    assert!(close(eval_at("-x^2", 3.0), -9.0));
}

#[test]
fn coefficient_against_variable() {
    assert!(close(eval_at("2x", 3.0), 6.0));
    assert!(close(eval_at("0.5x + 1", 4.0), 3.0));
    assert!(close(eval_at("x^2 - 2x", 3.0), 3.0));
    assert!(close(eval_at("2x^2", 3.0), 18.0));
}

#[test]
fn juxtaposition_has_product_precedence() {
    assert!(close(eval_at("1/2x", 4.0), 2.0));
}

#[test]
fn adjacent_groups_multiply() {
    assert!(close(eval_at("(x+1)(x-1)", 3.0), 8.0));
    assert!(close(eval_at("x(x+1)", 2.0), 6.0));
    assert!(close(eval_at("2 sin(x)", std::f64::consts::FRAC_PI_2), 2.0));
}

#[test]
fn constants_evaluate() {
    assert!(close(eval_at("e^x", 1.0), std::f64::consts::E));
    assert!(close(eval_at("tau / 2", 0.0), std::f64::consts::PI));
}

#[test]
fn default_functions_parse() {
    for src in [
        "x^2",
        "x / abs(x)",
        "1 / x",
        "1 / x^2",
        "x^2 * sin(1/x)",
        "sqrt(25 - x^2)",
        "sin(x^2)",
        "x^2 - 2x",
        "sin(x) / x",
        "x^3 - 3x",
        "x^3 - x - 1",
        "-x^2 + 4x",
        "2x * e^(x^2)",
        "6 / (1 + e^(-x))",
        "1 / (1 - x)",
        "exp(x)",
        "0.1*x^2 + 1",
    ] {
        assert!(parse(src).is_ok(), "failed to parse {src}");
    }
}

// =============================================================
// Errors
// =============================================================

#[test]
fn empty_input_is_unexpected_end() {
    assert_eq!(parse("").unwrap_err(), ExprError::UnexpectedEnd);
}

#[test]
fn dangling_operator() {
    assert_eq!(parse("x +").unwrap_err(), ExprError::UnexpectedEnd);
    assert_eq!(parse("x^").unwrap_err(), ExprError::UnexpectedEnd);
}

#[test]
fn unbalanced_paren() {
    assert_eq!(parse("(x + 1").unwrap_err(), ExprError::UnexpectedEnd);
    assert!(matches!(parse("x + 1)"), Err(ExprError::UnexpectedToken { pos: 5, .. })));
}

#[test]
fn misplaced_operators_point_at_the_token() {
    assert!(matches!(parse("x +* 2"), Err(ExprError::UnexpectedToken { pos: 3, .. })));
    assert!(matches!(parse("()"), Err(ExprError::UnexpectedToken { pos: 1, .. })));
    assert!(matches!(parse("sin x"), Err(ExprError::UnexpectedToken { pos: 4, .. })));
}

#[test]
fn unknown_function_is_reported() {
    assert_eq!(parse("foo(x)").unwrap_err(), ExprError::UnknownFunction("foo".into()));
}

#[test]
fn argument_lists_are_rejected() {
    assert!(matches!(parse("sin(x, 2)"), Err(ExprError::UnexpectedToken { pos: 5, .. })));
}

#[test]
fn syntax_errors_localize() {
    assert_eq!(parse("x +* 2").unwrap_err().localized(), "Syntax error");
}

// =============================================================
// Resource limits
// =============================================================

#[test]
fn nesting_at_the_limit_is_accepted() {
    let src = format!("{}x{}", "(".repeat(MAX_NESTING), ")".repeat(MAX_NESTING));
    assert!(close(eval_at(&src, 2.0), 2.0));
}

#[test]
fn nesting_past_the_limit_is_a_syntax_error() {
    let src = format!("{}x{}", "(".repeat(MAX_NESTING + 1), ")".repeat(MAX_NESTING + 1));
    let err = parse(&src).unwrap_err();
    assert_eq!(err, ExprError::TooDeep { limit: MAX_NESTING });
    assert_eq!(err.localized(), "Syntax error");
}

#[test]
fn exponent_chains_count_toward_nesting() {
    let src = format!("x{}", "^x".repeat(MAX_NESTING + 1));
    assert_eq!(parse(&src).unwrap_err(), ExprError::TooDeep { limit: MAX_NESTING });
    // A sum of many short chains is flat.
    let flat = ["x^2"; 100].join(" + ");
    assert!(parse(&flat).is_ok());
}

#[test]
fn hostile_paren_run_fails_without_overflowing() {
    let src = format!("{}x{}", "(".repeat(200_000), ")".repeat(200_000));
    let err = parse(&src).unwrap_err();
    assert!(err.is_syntax());
    assert_eq!(err.localized(), "Syntax error");

    // Same shape within the length cap hits the nesting limit instead.
    let src = format!("{}x", "(".repeat(MAX_LENGTH - 1));
    assert_eq!(parse(&src).unwrap_err(), ExprError::TooDeep { limit: MAX_NESTING });
}

#[test]
fn long_sign_runs_stay_flat() {
    let src = format!("{}x", "-".repeat(MAX_LENGTH - 2));
    assert!(close(eval_at(&src, 3.0), 3.0));
    let src = format!("{}x", "-".repeat(MAX_LENGTH - 3));
    assert!(close(eval_at(&src, 3.0), -3.0));
}
