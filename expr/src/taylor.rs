//! Factorials and Taylor expansion.
//!
//! `c_k = f^(k)(x0) / k!` for `k = 0..=order`, computed by repeated symbolic
//! differentiation. The expansion degrades instead of failing: the first
//! derivative that cannot be taken (or evaluates to a non-finite value)
//! ends the coefficient list and the reason is kept for the caller to log.

#[cfg(test)]
#[path = "taylor_test.rs"]
mod taylor_test;

use crate::expression::Expr;
use crate::error::ExprError;

/// `n!` as a float. Exact up to `n = 22`, finite up to `n = 170`.
#[must_use]
pub fn factorial(n: u32) -> f64 {
    (2..=n).fold(1.0, |acc, k| acc * f64::from(k))
}

/// A truncated power series centred at `center`.
#[derive(Debug, Clone, PartialEq)]
pub struct TaylorPolynomial {
    center: f64,
    coefficients: Vec<f64>,
    requested_order: u32,
    truncation: Option<ExprError>,
}

impl TaylorPolynomial {
    /// Expand `expr` in `var` about `center` up to `order`.
    #[must_use]
    pub fn expand(expr: &Expr, var: &str, center: f64, order: u32) -> Self {
        let mut coefficients = Vec::with_capacity(order as usize + 1);
        let mut truncation = None;
        let mut current = expr.clone();

        for k in 0..=order {
            let value = match current.compile(&[var]) {
                Ok(program) => program.eval(&[center]),
                Err(e) => {
                    truncation = Some(e);
                    break;
                }
            };
            if !value.is_finite() {
                truncation = Some(ExprError::NonFinite);
                break;
            }
            coefficients.push(value / factorial(k));

            if k < order {
                match current.derivative(var) {
                    Ok(next) => current = next,
                    Err(e) => {
                        truncation = Some(e);
                        break;
                    }
                }
            }
        }

        Self { center, coefficients, requested_order: order, truncation }
    }

    /// Build from precomputed coefficients.
    #[must_use]
    pub fn from_coefficients(center: f64, coefficients: Vec<f64>) -> Self {
        let requested_order = u32::try_from(coefficients.len().saturating_sub(1)).unwrap_or(u32::MAX);
        Self { center, coefficients, requested_order, truncation: None }
    }

    /// `P(x) = Σ c_k (x - x0)^k` by Horner's rule. An empty series is NaN.
    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        if self.coefficients.is_empty() {
            return f64::NAN;
        }
        let dx = x - self.center;
        self.coefficients.iter().rev().fold(0.0, |acc, c| acc * dx + c)
    }

    #[must_use]
    pub fn center(&self) -> f64 {
        self.center
    }

    #[must_use]
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    #[must_use]
    pub fn requested_order(&self) -> u32 {
        self.requested_order
    }

    /// True when fewer than `requested_order + 1` coefficients were produced.
    #[must_use]
    pub fn is_truncated(&self) -> bool {
        self.truncation.is_some()
    }

    /// Why the expansion stopped early, if it did.
    #[must_use]
    pub fn truncation(&self) -> Option<&ExprError> {
        self.truncation.as_ref()
    }
}
