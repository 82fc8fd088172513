//! Unit 7: infinite series.

use crate::manifest::TopicManifest;
use crate::step::{DerivationStep, Prerequisite};
use crate::topic::TopicId;
use crate::visual::{VisualDefaults, VisualHint};

const LIMITS: &[Prerequisite] = &[Prerequisite::topic("Limits", TopicId::LimitDefinition)];
const TANGENT_LINE: &[Prerequisite] = &[Prerequisite::step("Locally straight", TopicId::LinearApprox, "la1")];

pub(super) static SERIES_CONVERGENCE: TopicManifest = TopicManifest {
    id: TopicId::SeriesConvergence,
    name: "Convergence of Series",
    defaults: VisualDefaults::new("1 / x^2").x0(1.0).order(10),
    param_labels: [None, None],
    tutor_prompt: "Explain a series as a sequence of partial sums. The series converges when \
        those running totals settle toward a single height.",
    steps: &[
        DerivationStep::new("sc1", "Running Totals")
            .goal("Partial sums")
            .assumption("aₙ = 1/n²")
            .expression("Sₙ = a₁ + … + aₙ")
            .explanation("Each new term adds a little less; the totals climb ever more slowly.")
            .requires(LIMITS),
        DerivationStep::new("sc2", "Settling Down")
            .goal("Convergence")
            .expression("Σ 1/n² = π²/6")
            .explanation("The partial sums approach a ceiling they never cross.")
            .hint(VisualHint::NONE.order(20)),
        DerivationStep::new("sc3", "A Divergent Cousin")
            .goal("Terms shrinking is not enough")
            .expression("Σ 1/n = ∞")
            .explanation("The harmonic terms also shrink to zero, yet the totals grow without bound.")
            .hint(VisualHint::NONE.function("1 / x").order(20)),
    ],
};

pub(super) static TAYLOR_SERIES: TopicManifest = TopicManifest {
    id: TopicId::TaylorSeries,
    name: "Taylor Series: Function Cloning",
    defaults: VisualDefaults::new("exp(x)").x0(0.0).order(1).param1(0.0).param2(0.0),
    param_labels: [None, None],
    tutor_prompt: "Explain Taylor Series as approximating a complex function by matching its \
        derivatives at a single point. Each higher order term adds more 'curviness' to match \
        the original.",
    steps: &[
        DerivationStep::new("t0", "Matching the Height")
            .goal("Pass through the point")
            .assumption("P(a) = f(a)")
            .expression("P₀(x) = f(a)")
            .explanation("To clone a function, the copy must at least start at the same height.")
            .hint(VisualHint::NONE.order(0)),
        DerivationStep::new("t1", "Linear Approximation")
            .goal("Match value & slope")
            .assumption("P'(a) = f'(a)")
            .expression("f(a) + f'(a)(x-a)")
            .explanation("Start with a tangent line. It matches the value and first derivative.")
            .hint(VisualHint::NONE.order(1))
            .requires(TANGENT_LINE),
        DerivationStep::new("t2", "Curvature Matching")
            .goal("Add quadratic term")
            .assumption("P''(a) = f''(a)")
            .expression("...+ f''(a)/2 * (x-a)^2")
            .explanation("Add the second derivative to match how the function curves.")
            .hint(VisualHint::NONE.order(2)),
        DerivationStep::new("t3", "Infinite Detail")
            .goal("Higher order terms")
            .assumption("P⁽ⁿ⁾(a) = f⁽ⁿ⁾(a)")
            .expression("Σ f^(n)(a)/n! * (x-a)^n")
            .explanation("As we add terms, the polynomial \"clones\" the original function over a wider range.")
            .hint(VisualHint::NONE.order(8))
            .action("Move x0 and watch the clone rebuild itself around the new centre."),
    ],
};
