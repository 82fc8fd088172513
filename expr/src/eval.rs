//! Compilation to a reusable evaluator.
//!
//! The plot samples a function a few hundred times per frame, so the tree is
//! compiled once with its variables bound to argument slots. Evaluation is
//! total: a wrong argument count or a domain error reads as a non-finite
//! value, never a panic.

#[cfg(test)]
#[path = "eval_test.rs"]
mod eval_test;

use std::fmt;
use std::sync::Arc;

use symb_anafis::CompiledEvaluator;

use crate::error::ExprError;
use crate::expression::Expr;

/// A compiled expression with variables bound by position.
#[derive(Clone)]
pub struct Compiled {
    evaluator: Arc<CompiledEvaluator>,
    arity: usize,
}

impl Expr {
    /// Bind `vars` to argument slots in the given order.
    ///
    /// # Errors
    ///
    /// Returns [`ExprError::UnknownVariable`] for an identifier not in `vars`
    /// and [`ExprError::Compile`] when the backend cannot build an evaluator.
    pub fn compile(&self, vars: &[&str]) -> Result<Compiled, ExprError> {
        if let Some(stray) = self.variables().iter().find(|s| !vars.contains(&s.as_str())) {
            return Err(ExprError::UnknownVariable(stray.clone()));
        }
        let evaluator =
            CompiledEvaluator::compile(self.tree(), vars, None).map_err(|e| ExprError::Compile(format!("{e:?}")))?;
        Ok(Compiled { evaluator: Arc::new(evaluator), arity: vars.len() })
    }
}

impl Compiled {
    /// Evaluate with `args` in binding order. A wrong argument count is NaN.
    #[must_use]
    pub fn eval(&self, args: &[f64]) -> f64 {
        if args.len() != self.arity {
            return f64::NAN;
        }
        self.evaluator.evaluate(args)
    }

    /// Single-variable shorthand.
    #[must_use]
    pub fn eval_x(&self, x: f64) -> f64 {
        self.eval(&[x])
    }

    /// Like [`Compiled::eval`], but a non-finite result is an error.
    ///
    /// # Errors
    ///
    /// Returns [`ExprError::NonFinite`] for NaN or infinite results.
    pub fn try_eval(&self, args: &[f64]) -> Result<f64, ExprError> {
        let v = self.eval(args);
        if v.is_finite() { Ok(v) } else { Err(ExprError::NonFinite) }
    }

    #[must_use]
    pub fn arity(&self) -> usize {
        self.arity
    }
}

impl fmt::Debug for Compiled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Compiled").field("arity", &self.arity).finish_non_exhaustive()
    }
}
