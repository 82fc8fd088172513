//! Topic registry.
//!
//! Pure lookups over `'static` manifests. Every [`TopicId`] maps to exactly
//! one manifest (the `match` below is exhaustive), and textual lookups that
//! miss fall back to [`TopicId::DEFAULT`] instead of failing.

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;

mod applications;
mod derivatives;
mod equations;
mod geometry;
mod integrals;
mod limits;
mod multivariable;
mod series;

use crate::manifest::TopicManifest;
use crate::step::DerivationStep;
use crate::topic::TopicId;

/// Manifest for `id`.
#[must_use]
pub fn manifest(id: TopicId) -> &'static TopicManifest {
    match id {
        TopicId::LimitDefinition => &limits::LIMIT_DEFINITION,
        TopicId::LimitOneSided => &limits::LIMIT_ONESIDED,
        TopicId::LimitInfinite => &limits::LIMIT_INFINITE,
        TopicId::SqueezeTheorem => &limits::SQUEEZE_THEOREM,
        TopicId::InfinitesimalCompare => &limits::INFINITESIMAL_COMPARE,
        TopicId::IvtTheorems => &limits::IVT_THEOREMS,
        TopicId::DerivativeBasic => &derivatives::DERIVATIVE_BASIC,
        TopicId::DerivativeRules => &derivatives::DERIVATIVE_RULES,
        TopicId::ChainRule => &derivatives::CHAIN_RULE,
        TopicId::ImplicitDiff => &derivatives::IMPLICIT_DIFF,
        TopicId::RelatedRates => &derivatives::RELATED_RATES,
        TopicId::LinearApprox => &derivatives::LINEAR_APPROX,
        TopicId::MvtLagrange => &applications::MVT_LAGRANGE,
        TopicId::LhopitalRule => &applications::LHOPITAL_RULE,
        TopicId::Optimization => &applications::OPTIMIZATION,
        TopicId::IntegralBasic => &integrals::INTEGRAL_BASIC,
        TopicId::Ftc => &integrals::FTC,
        TopicId::IntegrationSubstitution => &integrals::INTEGRATION_SUBSTITUTION,
        TopicId::AreaBetweenCurves => &geometry::AREA_BETWEEN_CURVES,
        TopicId::VolumeRotation => &geometry::VOLUME_ROTATION,
        TopicId::DeSeparable => &equations::DE_SEPARABLE,
        TopicId::DeLogistic => &equations::DE_LOGISTIC,
        TopicId::SeriesConvergence => &series::SERIES_CONVERGENCE,
        TopicId::TaylorSeries => &series::TAYLOR_SERIES,
        TopicId::GradientVector => &multivariable::GRADIENT_VECTOR,
    }
}

/// Manifest for a textual id; unknown ids yield the default topic.
#[must_use]
pub fn lookup(id: &str) -> &'static TopicManifest {
    manifest(id.parse().unwrap_or(TopicId::DEFAULT))
}

/// Step `step_id` of `topic`, or the placeholder step.
#[must_use]
pub fn step(topic: TopicId, step_id: &str) -> &'static DerivationStep {
    manifest(topic).step(step_id)
}

#[must_use]
pub fn find_step(topic: TopicId, step_id: &str) -> Option<&'static DerivationStep> {
    manifest(topic).find_step(step_id)
}

#[must_use]
pub fn first_step(topic: TopicId) -> &'static DerivationStep {
    manifest(topic).first_step()
}

/// All manifests in enumeration order.
pub fn all() -> impl Iterator<Item = &'static TopicManifest> {
    TopicId::ALL.into_iter().map(manifest)
}
