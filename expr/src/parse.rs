//! Front end: validate user text and hand it to the symbolic backend.
//!
//! The scan is a single pass over the token list with no recursion, so
//! hostile input cannot exhaust the stack before the backend's own
//! recursive parser sees it. Along the way it
//!
//! - rejects misplaced operators and unbalanced parentheses with a byte
//!   position,
//! - caps nesting (open parentheses plus right-associative `^` chains) at
//!   [`MAX_NESTING`] and source length at [`MAX_LENGTH`],
//! - folds `pi`, `e`, `tau` into literals and resolves function aliases,
//! - makes implicit multiplication explicit (`2x`, `2(x+1)`, `(x+1)(x-1)`,
//!   `2 sin(x)`, `x(x+1)`).
//!
//! Juxtaposition becomes an ordinary `*`, so `1/2x` reads as `(1/2)x`.
//! Runs of unary signs collapse to one.

#[cfg(test)]
#[path = "parse_test.rs"]
mod parse_test;

use crate::error::ExprError;
use crate::expression::Expr;
use crate::func::{Func, constant};
use crate::lexer::{Token, TokenKind, tokenize};

/// Deepest accepted nesting of parentheses and exponent chains.
pub const MAX_NESTING: usize = 64;

/// Longest accepted source text in bytes.
pub const MAX_LENGTH: usize = 1024;

/// Parse an expression string.
///
/// # Errors
///
/// Returns a syntax-class [`ExprError`] for malformed input, unknown function
/// names, or input nested or sized beyond the limits above.
pub fn parse(input: &str) -> Result<Expr, ExprError> {
    if input.len() > MAX_LENGTH {
        return Err(ExprError::TooLong { limit: MAX_LENGTH });
    }
    let tokens = tokenize(input)?;
    let Normalized { text, symbols } = normalize(&tokens)?;
    Expr::from_text(text, symbols)
}

/// Backend-ready text plus the free identifiers it mentions.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Normalized {
    pub text: String,
    pub symbols: Vec<String>,
}

/// What the scan has just emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Prev {
    Start,
    Operator,
    Open,
    Func,
    Operand,
}

impl Prev {
    fn wants_operand(self) -> bool {
        matches!(self, Self::Start | Self::Operator | Self::Open)
    }
}

/// Per-level exponent-chain counters. Index 0 is the top level.
struct Nesting {
    chains: Vec<usize>,
}

impl Nesting {
    fn new() -> Self {
        Self { chains: vec![0] }
    }

    fn depth(&self) -> usize {
        self.chains.len() - 1 + self.chains.iter().sum::<usize>()
    }

    fn check(&self) -> Result<(), ExprError> {
        if self.depth() > MAX_NESTING { Err(ExprError::TooDeep { limit: MAX_NESTING }) } else { Ok(()) }
    }

    fn open(&mut self) -> Result<(), ExprError> {
        self.chains.push(0);
        self.check()
    }

    /// Returns false when there is no group to close.
    fn close(&mut self) -> bool {
        if self.chains.len() == 1 {
            return false;
        }
        self.chains.pop();
        true
    }

    fn power(&mut self) -> Result<(), ExprError> {
        if let Some(chain) = self.chains.last_mut() {
            *chain += 1;
        }
        self.check()
    }

    fn binary(&mut self) {
        if let Some(chain) = self.chains.last_mut() {
            *chain = 0;
        }
    }

    fn is_balanced(&self) -> bool {
        self.chains.len() == 1
    }
}

fn unexpected(tok: &Token) -> ExprError {
    ExprError::UnexpectedToken { found: tok.kind.describe(), pos: tok.pos }
}

pub(crate) fn normalize(tokens: &[Token]) -> Result<Normalized, ExprError> {
    let mut text = String::with_capacity(tokens.len() * 2);
    let mut symbols: Vec<String> = Vec::new();
    let mut nesting = Nesting::new();
    let mut prev = Prev::Start;
    let mut negate = false;

    for (i, tok) in tokens.iter().enumerate() {
        // Anything that begins an operand: juxtaposition multiplies, and a
        // pending unary sign is flushed in front of it.
        if matches!(tok.kind, TokenKind::Number(_) | TokenKind::Ident(_) | TokenKind::LParen) {
            match prev {
                Prev::Func if tok.kind != TokenKind::LParen => return Err(unexpected(tok)),
                Prev::Operand => text.push('*'),
                _ => {}
            }
            if negate {
                text.push('-');
                negate = false;
            }
        }

        match &tok.kind {
            TokenKind::Number(n) => {
                if !n.is_finite() {
                    return Err(unexpected(tok));
                }
                push_number(&mut text, *n);
                prev = Prev::Operand;
            }
            TokenKind::Ident(name) => {
                if let Some(func) = Func::from_name(name) {
                    text.push_str(func.name());
                    prev = Prev::Func;
                } else if let Some(value) = constant(name) {
                    push_number(&mut text, value);
                    prev = Prev::Operand;
                } else {
                    let called = tokens.get(i + 1).is_some_and(|t| t.kind == TokenKind::LParen);
                    // Single letters followed by a group multiply: `x(x+1)`.
                    if called && name.len() > 1 {
                        return Err(ExprError::UnknownFunction(name.clone()));
                    }
                    if !symbols.iter().any(|s| s == name) {
                        symbols.push(name.clone());
                    }
                    text.push_str(name);
                    prev = Prev::Operand;
                }
            }
            TokenKind::LParen => {
                nesting.open()?;
                text.push('(');
                prev = Prev::Open;
            }
            TokenKind::RParen => {
                if prev != Prev::Operand || !nesting.close() {
                    return Err(unexpected(tok));
                }
                text.push(')');
            }
            TokenKind::Plus | TokenKind::Minus => {
                if prev == Prev::Func {
                    return Err(unexpected(tok));
                }
                if prev.wants_operand() {
                    negate ^= tok.kind == TokenKind::Minus;
                } else {
                    nesting.binary();
                    text.push_str(if tok.kind == TokenKind::Plus { " + " } else { " - " });
                    prev = Prev::Operator;
                }
            }
            TokenKind::Star | TokenKind::Slash => {
                if prev != Prev::Operand {
                    return Err(unexpected(tok));
                }
                nesting.binary();
                text.push(if tok.kind == TokenKind::Star { '*' } else { '/' });
                prev = Prev::Operator;
            }
            TokenKind::Caret => {
                if prev != Prev::Operand {
                    return Err(unexpected(tok));
                }
                nesting.power()?;
                text.push('^');
                prev = Prev::Operator;
            }
            TokenKind::Comma => return Err(unexpected(tok)),
        }
    }

    if prev != Prev::Operand || !nesting.is_balanced() {
        return Err(ExprError::UnexpectedEnd);
    }
    Ok(Normalized { text, symbols })
}

/// Literals always carry a digit before any exponent, so `1e-3` prints as
/// `0.001` and never collides with the constant `e`.
fn push_number(text: &mut String, value: f64) {
    text.push_str(&value.to_string());
}
