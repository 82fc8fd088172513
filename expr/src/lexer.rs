//! Tokenizer for the expression grammar.
//!
//! Produces a flat token list with byte offsets so the parser can point at
//! the offending position. Whitespace is insignificant. `**` is accepted as
//! an alias for `^`.

#[cfg(test)]
#[path = "lexer_test.rs"]
mod lexer_test;

use crate::error::ExprError;

#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    Number(f64),
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    LParen,
    RParen,
    Comma,
}

impl TokenKind {
    /// Source-like rendering used in error messages.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Ident(name) => name.clone(),
            Self::Plus => "+".into(),
            Self::Minus => "-".into(),
            Self::Star => "*".into(),
            Self::Slash => "/".into(),
            Self::Caret => "^".into(),
            Self::LParen => "(".into(),
            Self::RParen => ")".into(),
            Self::Comma => ",".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// Byte offset of the first character.
    pub pos: usize,
}

/// Split `input` into tokens.
///
/// # Errors
///
/// Returns [`ExprError::UnexpectedChar`] for characters outside the grammar
/// and for malformed numbers such as `1.2.3`.
pub fn tokenize(input: &str) -> Result<Vec<Token>, ExprError> {
    let bytes = input.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        let c = bytes[i];
        let start = i;

        if c.is_ascii_whitespace() {
            i += 1;
            continue;
        }

        if c.is_ascii_digit() || (c == b'.' && bytes.get(i + 1).is_some_and(u8::is_ascii_digit)) {
            i = scan_number(bytes, i)?;
            let text = &input[start..i];
            let value = text
                .parse::<f64>()
                .map_err(|_| ExprError::UnexpectedChar { ch: char::from(c), pos: start })?;
            tokens.push(Token { kind: TokenKind::Number(value), pos: start });
            continue;
        }

        if c.is_ascii_alphabetic() || c == b'_' {
            while i < bytes.len() && (bytes[i].is_ascii_alphanumeric() || bytes[i] == b'_') {
                i += 1;
            }
            tokens.push(Token { kind: TokenKind::Ident(input[start..i].to_string()), pos: start });
            continue;
        }

        let kind = match c {
            b'+' => TokenKind::Plus,
            b'-' => TokenKind::Minus,
            b'*' if bytes.get(i + 1) == Some(&b'*') => {
                i += 1;
                TokenKind::Caret
            }
            b'*' => TokenKind::Star,
            b'/' => TokenKind::Slash,
            b'^' => TokenKind::Caret,
            b'(' => TokenKind::LParen,
            b')' => TokenKind::RParen,
            b',' => TokenKind::Comma,
            _ => {
                let ch = input[start..].chars().next().unwrap_or(char::REPLACEMENT_CHARACTER);
                return Err(ExprError::UnexpectedChar { ch, pos: start });
            }
        };
        i += 1;
        tokens.push(Token { kind, pos: start });
    }

    Ok(tokens)
}

/// Scan a decimal literal starting at `i`, returning the end offset.
///
/// An exponent marker is only consumed when digits follow it, so `2e` stays
/// the number `2` followed by the constant `e`.
fn scan_number(bytes: &[u8], mut i: usize) -> Result<usize, ExprError> {
    let mut seen_dot = false;
    while i < bytes.len() {
        match bytes[i] {
            b'0'..=b'9' => i += 1,
            b'.' if !seen_dot => {
                seen_dot = true;
                i += 1;
            }
            b'.' => return Err(ExprError::UnexpectedChar { ch: '.', pos: i }),
            _ => break,
        }
    }

    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        if j < bytes.len() && bytes[j].is_ascii_digit() {
            while j < bytes.len() && bytes[j].is_ascii_digit() {
                j += 1;
            }
            i = j;
        }
    }

    Ok(i)
}
