use super::*;

fn kinds(input: &str) -> Vec<TokenKind> {
    tokenize(input).unwrap().into_iter().map(|t| t.kind).collect()
}

#[test]
fn tokenizes_polynomial() {
    assert_eq!(
        kinds("x^2 - 2x"),
        vec![
            TokenKind::Ident("x".into()),
            TokenKind::Caret,
            TokenKind::Number(2.0),
            TokenKind::Minus,
            TokenKind::Number(2.0),
            TokenKind::Ident("x".into()),
        ]
    );
}

#[test]
fn number_forms() {
    assert_eq!(kinds(".5"), vec![TokenKind::Number(0.5)]);
    assert_eq!(kinds("0.25"), vec![TokenKind::Number(0.25)]);
    assert_eq!(kinds("1e-3"), vec![TokenKind::Number(0.001)]);
    assert_eq!(kinds("2E2"), vec![TokenKind::Number(200.0)]);
}

#[test]
fn dangling_exponent_marker_is_constant_e() {
    assert_eq!(kinds("2e"), vec![TokenKind::Number(2.0), TokenKind::Ident("e".into())]);
    assert_eq!(
        kinds("2e^x"),
        vec![TokenKind::Number(2.0), TokenKind::Ident("e".into()), TokenKind::Caret, TokenKind::Ident("x".into())]
    );
}

#[test]
fn double_star_is_power() {
    assert_eq!(kinds("x**3"), vec![TokenKind::Ident("x".into()), TokenKind::Caret, TokenKind::Number(3.0)]);
}

#[test]
fn positions_are_byte_offsets() {
    let tokens = tokenize("  sin( x )").unwrap();
    assert_eq!(tokens[0].pos, 2);
    assert_eq!(tokens[1].pos, 5);
    assert_eq!(tokens[2].pos, 7);
    assert_eq!(tokens[3].pos, 9);
}

#[test]
fn rejects_unknown_character() {
    let err = tokenize("x # 2").unwrap_err();
    assert_eq!(err, ExprError::UnexpectedChar { ch: '#', pos: 2 });
}

#[test]
fn rejects_second_decimal_point() {
    assert!(matches!(tokenize("1.2.3"), Err(ExprError::UnexpectedChar { ch: '.', .. })));
}

#[test]
fn empty_input_has_no_tokens() {
    assert!(tokenize("   ").unwrap().is_empty());
}
