//! Parsed expression backed by the `symb_anafis` tree.
//!
//! The backend owns the algebra: tree construction, differentiation and the
//! simplification that keeps repeated derivatives small. This type keeps the
//! normalized source text next to the tree so derivatives can be taken from
//! text, plus the list of free identifiers the front end saw so compilation
//! can report an unbound name by itself.

#[cfg(test)]
#[path = "expression_test.rs"]
mod expression_test;

use std::collections::HashSet;
use std::fmt;

use symb_anafis::Diff;

use crate::error::ExprError;

/// Recursion limit handed to the differentiator.
const DIFF_MAX_DEPTH: usize = 256;

/// Node limit handed to the differentiator.
const DIFF_MAX_NODES: usize = 200_000;

/// Largest derivative tree kept. Beyond this evaluation cost outgrows the
/// frame budget.
pub const NODE_BUDGET: usize = 20_000;

/// A parsed expression.
#[derive(Clone)]
pub struct Expr {
    text: String,
    tree: symb_anafis::Expr,
    symbols: Vec<String>,
}

impl Expr {
    /// Build from backend-ready text.
    ///
    /// # Errors
    ///
    /// Returns [`ExprError::Syntax`] when the backend parser rejects `text`.
    pub(crate) fn from_text(text: String, symbols: Vec<String>) -> Result<Self, ExprError> {
        let tree = backend_parse(&text, &symbols).map_err(ExprError::Syntax)?;
        Ok(Self { text, tree, symbols })
    }

    /// Backend tree, for callers that want the full `symb_anafis` API.
    #[must_use]
    pub fn tree(&self) -> &symb_anafis::Expr {
        &self.tree
    }

    /// Free identifiers in order of first appearance.
    #[must_use]
    pub fn variables(&self) -> &[String] {
        &self.symbols
    }

    #[must_use]
    pub fn depends_on(&self, var: &str) -> bool {
        self.symbols.iter().any(|s| s == var)
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.tree.node_count()
    }

    /// Symbolic derivative with respect to `var`; other identifiers are held
    /// constant.
    ///
    /// # Errors
    ///
    /// Returns [`ExprError::Unsupported`] when the backend cannot
    /// differentiate and [`ExprError::TooComplex`] when the result exceeds
    /// [`NODE_BUDGET`].
    pub fn derivative(&self, var: &str) -> Result<Self, ExprError> {
        let known = long_names(&self.symbols);
        let text = Diff::new()
            .max_depth(DIFF_MAX_DEPTH)
            .max_nodes(DIFF_MAX_NODES)
            .diff_str(&self.text, var, &known)
            .map_err(|e| ExprError::Unsupported(format!("{e:?}")))?;
        let tree = backend_parse(&text, &self.symbols).map_err(ExprError::Unsupported)?;
        if tree.node_count() > NODE_BUDGET {
            return Err(ExprError::TooComplex(NODE_BUDGET));
        }
        Ok(Self { text, tree, symbols: self.symbols.clone() })
    }
}

/// Multi-letter identifiers, which the backend would otherwise split into
/// products of single letters.
fn long_names(symbols: &[String]) -> Vec<&str> {
    symbols.iter().filter(|s| s.len() > 1).map(String::as_str).collect()
}

fn backend_parse(text: &str, symbols: &[String]) -> Result<symb_anafis::Expr, String> {
    let known: HashSet<String> = long_names(symbols).into_iter().map(str::to_string).collect();
    symb_anafis::parse(text, &known, &HashSet::new(), None).map_err(|e| format!("{e:?}"))
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tree)
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Expr").field("text", &self.text).field("symbols", &self.symbols).finish()
    }
}
