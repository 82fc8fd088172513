//! Expression engine for the calculus workbench.
//!
//! Turns a user-typed function string into something the plot can call and
//! the storyline can reason about. The algebra (tree, symbolic derivative,
//! simplification, compiled evaluation) comes from `symb_anafis`; this crate
//! adds the forgiving front end the function editor needs, bounded resource
//! use on hostile input, user-facing error messages, and Taylor expansion.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`lexer`] | Tokenizer with byte positions for error reporting |
//! | [`parse`] | Validation, nesting limits, implicit multiplication |
//! | [`func`] | Accepted function names and constants |
//! | [`expression`] | [`Expr`] over the backend tree, derivatives |
//! | [`eval`] | Compilation to [`Compiled`] and numeric evaluation |
//! | [`taylor`] | Factorials and [`TaylorPolynomial`] expansion |
//! | [`error`] | [`ExprError`] |

pub mod error;
pub mod eval;
pub mod expression;
pub mod func;
pub mod lexer;
pub mod parse;
pub mod taylor;

pub use error::ExprError;
pub use eval::Compiled;
pub use expression::Expr;
pub use func::Func;
pub use parse::parse;
pub use taylor::{TaylorPolynomial, factorial};
