//! The closed set of calculus topics.

#[cfg(test)]
#[path = "topic_test.rs"]
mod topic_test;

use std::fmt;
use std::str::FromStr;

/// Identifier of one calculus concept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TopicId {
    LimitDefinition,
    LimitOneSided,
    LimitInfinite,
    SqueezeTheorem,
    InfinitesimalCompare,
    IvtTheorems,
    DerivativeBasic,
    DerivativeRules,
    ChainRule,
    ImplicitDiff,
    RelatedRates,
    LinearApprox,
    MvtLagrange,
    LhopitalRule,
    Optimization,
    IntegralBasic,
    Ftc,
    IntegrationSubstitution,
    AreaBetweenCurves,
    VolumeRotation,
    DeSeparable,
    DeLogistic,
    SeriesConvergence,
    TaylorSeries,
    GradientVector,
}

/// Returned by [`TopicId::from_str`] for unknown identifiers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown topic '{0}'")]
pub struct ParseTopicError(pub String);

impl TopicId {
    /// Topic shown on startup and used when a lookup misses.
    pub const DEFAULT: Self = Self::LimitDefinition;

    pub const ALL: [Self; 25] = [
        Self::LimitDefinition,
        Self::LimitOneSided,
        Self::LimitInfinite,
        Self::SqueezeTheorem,
        Self::InfinitesimalCompare,
        Self::IvtTheorems,
        Self::DerivativeBasic,
        Self::DerivativeRules,
        Self::ChainRule,
        Self::ImplicitDiff,
        Self::RelatedRates,
        Self::LinearApprox,
        Self::MvtLagrange,
        Self::LhopitalRule,
        Self::Optimization,
        Self::IntegralBasic,
        Self::Ftc,
        Self::IntegrationSubstitution,
        Self::AreaBetweenCurves,
        Self::VolumeRotation,
        Self::DeSeparable,
        Self::DeLogistic,
        Self::SeriesConvergence,
        Self::TaylorSeries,
        Self::GradientVector,
    ];

    /// Stable textual identifier, e.g. `"TAYLOR_SERIES"`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::LimitDefinition => "LIMIT_DEFINITION",
            Self::LimitOneSided => "LIMIT_ONESIDED",
            Self::LimitInfinite => "LIMIT_INFINITE",
            Self::SqueezeTheorem => "SQUEEZE_THEOREM",
            Self::InfinitesimalCompare => "INFINITESIMAL_COMPARE",
            Self::IvtTheorems => "IVT_THEOREMS",
            Self::DerivativeBasic => "DERIVATIVE_BASIC",
            Self::DerivativeRules => "DERIVATIVE_RULES",
            Self::ChainRule => "CHAIN_RULE",
            Self::ImplicitDiff => "IMPLICIT_DIFF",
            Self::RelatedRates => "RELATED_RATES",
            Self::LinearApprox => "LINEAR_APPROX",
            Self::MvtLagrange => "MVT_LAGRANGE",
            Self::LhopitalRule => "LHOPITAL_RULE",
            Self::Optimization => "OPTIMIZATION",
            Self::IntegralBasic => "INTEGRAL_BASIC",
            Self::Ftc => "FTC",
            Self::IntegrationSubstitution => "INTEGRATION_SUBSTITUTION",
            Self::AreaBetweenCurves => "AREA_BETWEEN_CURVES",
            Self::VolumeRotation => "VOLUME_ROTATION",
            Self::DeSeparable => "DE_SEPARABLE",
            Self::DeLogistic => "DE_LOGISTIC",
            Self::SeriesConvergence => "SERIES_CONVERGENCE",
            Self::TaylorSeries => "TAYLOR_SERIES",
            Self::GradientVector => "GRADIENT_VECTOR",
        }
    }

    /// Topics whose function string is `F(x, y)` rather than `f(x)`.
    #[must_use]
    pub fn is_two_variable(self) -> bool {
        matches!(self, Self::DeSeparable | Self::GradientVector)
    }

    /// Topics that plot a reconstructed Taylor polynomial.
    #[must_use]
    pub fn is_expansion(self) -> bool {
        matches!(self, Self::TaylorSeries)
    }

    /// Variable names the function string is compiled against.
    #[must_use]
    pub fn variables(self) -> &'static [&'static str] {
        if self.is_two_variable() { &["x", "y"] } else { &["x"] }
    }
}

impl fmt::Display for TopicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TopicId {
    type Err = ParseTopicError;

    /// Case-insensitive; `-` is accepted for `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_uppercase().replace('-', "_");
        // Older catalogs spelled this one without the second "I".
        if wanted == "INFINTESIMAL_COMPARE" {
            return Ok(Self::InfinitesimalCompare);
        }
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == wanted)
            .ok_or_else(|| ParseTopicError(s.to_string()))
    }
}
