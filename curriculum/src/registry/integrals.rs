//! Unit 4: integration.

use crate::manifest::TopicManifest;
use crate::step::{DerivationStep, Prerequisite};
use crate::topic::TopicId;
use crate::visual::{VisualDefaults, VisualHint};

const RIEMANN: &[Prerequisite] = &[Prerequisite::topic("Riemann sums", TopicId::IntegralBasic)];
const FTC_LINK: &[Prerequisite] = &[
    Prerequisite::topic("Riemann sums", TopicId::IntegralBasic),
    Prerequisite::step("Tangency", TopicId::DerivativeBasic, "d3"),
];
const CHAIN: &[Prerequisite] = &[Prerequisite::topic("Chain rule", TopicId::ChainRule)];

pub(super) static INTEGRAL_BASIC: TopicManifest = TopicManifest {
    id: TopicId::IntegralBasic,
    name: "Riemann Sums",
    defaults: VisualDefaults::new("x^2").x0(1.0).param1(10.0).param2(0.0),
    param_labels: [Some("n"), Some("sample")],
    tutor_prompt: "Explain the definite integral as the limit of rectangle sums: slice the area \
        into strips, approximate each by a rectangle, and refine.",
    steps: &[
        DerivationStep::new("r1", "Chopping the Area")
            .goal("Approximate with rectangles")
            .assumption("n equal slices")
            .expression("Σ f(xᵢ) Δx")
            .explanation("A handful of rectangles gives a rough estimate of the area under the curve.")
            .hint(VisualHint::NONE.param1(4.0)),
        DerivationStep::new("r2", "Refining")
            .goal("More, thinner rectangles")
            .assumption("Δx = (b - a) / n")
            .expression("n → ∞")
            .explanation("Doubling the slices halves each width; the jagged top hugs the curve ever closer.")
            .hint(VisualHint::NONE.param1(40.0))
            .action("Switch the sample point between left (0), middle (0.5) and right (1)."),
        DerivationStep::new("r3", "The Integral")
            .goal("Take the limit")
            .expression("∫ₐᵇ f(x) dx = lim Σ f(xᵢ) Δx")
            .explanation("Every choice of sample point converges to the same number: the area.")
            .hint(VisualHint::NONE.param1(200.0).param2(0.5)),
    ],
};

pub(super) static FTC: TopicManifest = TopicManifest {
    id: TopicId::Ftc,
    name: "Fundamental Theorem of Calculus",
    defaults: VisualDefaults::new("0.1*x^2 + 1").x0(0.0).param1(3.0).param2(0.0),
    param_labels: [Some("x"), Some("Δx")],
    tutor_prompt: "Explain the link between area and derivatives. The rate at which area under \
        a curve increases is exactly the height of the curve at that point.",
    steps: &[
        DerivationStep::new("f1", "The Area Accumulator")
            .goal("Define A(x)")
            .expression("∫ f(t) dt")
            .explanation("Consider the area from a fixed point to a variable point x.")
            .hint(VisualHint::NONE.param1(2.0))
            .requires(FTC_LINK),
        DerivationStep::new("f2", "The Micro-Slice")
            .goal("Add Δx")
            .expression("ΔA ≈ f(x)Δx")
            .explanation("A tiny increase in x adds a tiny slice of area, roughly a rectangle of height f(x).")
            .hint(VisualHint::NONE.param1(3.0).param2(0.1)),
        DerivationStep::new("f3", "The Grand Connection")
            .goal("A'(x) = f(x)")
            .expression("d/dx ∫ f(t)dt = f(x)")
            .explanation("The derivative of the area function IS the original function.")
            .hint(VisualHint::NONE.param1(3.0).param2(0.01)),
    ],
};

pub(super) static INTEGRATION_SUBSTITUTION: TopicManifest = TopicManifest {
    id: TopicId::IntegrationSubstitution,
    name: "Substitution (u-sub)",
    defaults: VisualDefaults::new("2x * e^(x^2)").x0(0.0).param1(1.0).param2(0.0),
    param_labels: [Some("width"), None],
    tutor_prompt: "Explain u-substitution as the chain rule run backwards: spot an inner \
        function whose derivative is sitting right beside it.",
    steps: &[
        DerivationStep::new("u1", "Spot the Inner Function")
            .goal("Choose u")
            .assumption("u = x², du = 2x dx")
            .expression("∫ 2x·e^(x²) dx")
            .explanation("The factor 2x is exactly the derivative of the exponent x².")
            .requires(CHAIN),
        DerivationStep::new("u2", "Change Variables")
            .goal("Integrate in u")
            .expression("∫ eᵘ du = eᵘ + C")
            .explanation("In the u-world the integrand is plain eᵘ; the shaded area equals e^(b²) - e^(a²).")
            .hint(VisualHint::NONE.param1(1.2))
            .requires(RIEMANN),
    ],
};
