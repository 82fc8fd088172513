//! Error type shared by every stage of the expression pipeline.

/// Errors produced while parsing, compiling, evaluating, or differentiating.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ExprError {
    /// The lexer met a character outside the grammar.
    #[error("unexpected character '{ch}' at {pos}")]
    UnexpectedChar { ch: char, pos: usize },

    /// A token that cannot appear at this position.
    #[error("unexpected token '{found}' at {pos}")]
    UnexpectedToken { found: String, pos: usize },

    /// Input ended in the middle of an expression.
    #[error("unexpected end of input")]
    UnexpectedEnd,

    /// A call names a function the engine does not know.
    #[error("unknown function '{0}'")]
    UnknownFunction(String),

    /// Parentheses, signs or exponents nest deeper than the parser allows.
    #[error("expression nests deeper than {limit} levels")]
    TooDeep { limit: usize },

    /// Source text longer than the parser accepts.
    #[error("expression longer than {limit} bytes")]
    TooLong { limit: usize },

    /// The symbolic backend rejected text the front end let through.
    #[error("symbolic parser rejected input: {0}")]
    Syntax(String),

    /// An identifier is neither a constant nor one of the bound variables.
    #[error("unknown variable '{0}'")]
    UnknownVariable(String),

    /// The backend could not build an evaluator for the tree.
    #[error("cannot compile expression: {0}")]
    Compile(String),

    /// Evaluation produced NaN or an infinity.
    #[error("evaluation produced a non-finite value")]
    NonFinite,

    /// The backend could not differentiate the expression.
    #[error("cannot differentiate: {0}")]
    Unsupported(String),

    /// A derivative grew past the node budget.
    #[error("derivative grew beyond {0} nodes")]
    TooComplex(usize),
}

impl ExprError {
    /// True for errors raised while reading the source text.
    #[must_use]
    pub fn is_syntax(&self) -> bool {
        matches!(
            self,
            Self::UnexpectedChar { .. }
                | Self::UnexpectedToken { .. }
                | Self::UnexpectedEnd
                | Self::UnknownFunction(_)
                | Self::TooDeep { .. }
                | Self::TooLong { .. }
                | Self::Syntax(_)
        )
    }

    /// Short user-facing message shown next to the function editor.
    #[must_use]
    pub fn localized(&self) -> &'static str {
        if self.is_syntax() {
            return "Syntax error";
        }
        match self {
            Self::UnknownVariable(_) => "Unknown variable",
            Self::NonFinite | Self::Compile(_) => "Undefined value",
            _ => "Derivative unavailable",
        }
    }
}
