//! Unit 2: the derivative.

use crate::manifest::TopicManifest;
use crate::step::{DerivationStep, Prerequisite};
use crate::topic::TopicId;
use crate::visual::{VisualDefaults, VisualHint};

const LIMITS: &[Prerequisite] = &[Prerequisite::topic("Limits", TopicId::LimitDefinition)];
const TANGENT: &[Prerequisite] = &[Prerequisite::step("Tangency", TopicId::DerivativeBasic, "d3")];
const RULES: &[Prerequisite] = &[
    Prerequisite::topic("Product rule", TopicId::DerivativeRules),
    Prerequisite::label("Composition of functions"),
];
const CHAIN: &[Prerequisite] = &[Prerequisite::topic("Chain rule", TopicId::ChainRule)];

pub(super) static DERIVATIVE_BASIC: TopicManifest = TopicManifest {
    id: TopicId::DerivativeBasic,
    name: "The Derivative: Instantaneous Change",
    defaults: VisualDefaults::new("0.5*x^2").x0(1.0).param1(2.0).param2(0.0),
    param_labels: [Some("h"), None],
    tutor_prompt: "Explain the derivative as the slope of the tangent line. Describe the secant \
        line collapsing into a tangent line as h approaches 0.",
    steps: &[
        DerivationStep::new("d1", "Average Velocity")
            .goal("Secant line slope")
            .assumption("Δx = h")
            .expression("Δy / Δx")
            .explanation("The slope between two points is the average rate of change.")
            .hint(VisualHint::NONE.param1(1.5)),
        DerivationStep::new("d2", "Shrinking the Gap")
            .goal("h → 0")
            .assumption("h gets ever smaller")
            .expression("lim h→0 [f(x+h) - f(x)] / h")
            .explanation("Bring the second point closer and closer to the first point.")
            .hint(VisualHint::NONE.param1(0.2))
            .requires(LIMITS)
            .action("Keep shrinking h and watch the secant settle onto the tangent."),
        DerivationStep::new("d3", "Tangency")
            .goal("The Instantaneous Rate")
            .assumption("the secant vanishes")
            .expression("f'(x)")
            .explanation(
                "At the limit, the secant becomes the tangent line, representing the rate at exactly one point.",
            )
            .hint(VisualHint::NONE.param1(0.01)),
    ],
};

pub(super) static DERIVATIVE_RULES: TopicManifest = TopicManifest {
    id: TopicId::DerivativeRules,
    name: "Product and Quotient Rules",
    defaults: VisualDefaults::new("x^2 * sin(x)").x0(1.0),
    param_labels: [None, None],
    tutor_prompt: "Explain the product rule with a growing rectangle whose sides are f and g: \
        the new area is two thin strips plus a negligible corner.",
    steps: &[
        DerivationStep::new("dr1", "A Growing Rectangle")
            .goal("Picture f·g as an area")
            .assumption("f, g differentiable")
            .expression("d(fg) = f dg + g df + df dg")
            .explanation("Nudging x stretches both sides; the area gains two strips and a tiny corner.")
            .requires(TANGENT),
        DerivationStep::new("dr2", "Dropping the Corner")
            .goal("Product rule")
            .expression("(fg)' = f'g + fg'")
            .explanation("The corner df·dg shrinks twice as fast as the strips, so it disappears in the limit.")
            .action("Slide x0 and compare the tangent slope with f'g + fg'."),
        DerivationStep::new("dr3", "Quotients")
            .goal("Quotient rule")
            .expression("(f/g)' = (f'g - fg') / g²")
            .explanation("Write f/g as f·g⁻¹ and apply the product rule with the chain rule on g⁻¹.")
            .hint(VisualHint::NONE.function("sin(x) / x")),
    ],
};

pub(super) static CHAIN_RULE: TopicManifest = TopicManifest {
    id: TopicId::ChainRule,
    name: "Chain Rule",
    defaults: VisualDefaults::new("sin(x^2)").x0(1.0),
    param_labels: [None, None],
    tutor_prompt: "Explain the chain rule as stacked number lines: a nudge to x is stretched by \
        the inner function, then stretched again by the outer one.",
    steps: &[
        DerivationStep::new("c1", "Nested Machines")
            .goal("Decompose the function")
            .assumption("u = x²")
            .expression("f(x) = sin(u)")
            .explanation("Feed x into the inner machine, then feed its output into the outer one.")
            .requires(RULES),
        DerivationStep::new("c2", "Multiplying Stretches")
            .goal("Chain the rates")
            .expression("dy/dx = dy/du · du/dx")
            .explanation("Each machine scales a small nudge; the total scaling is the product.")
            .action("Move x0 outward and see the tangent steepen as 2x grows."),
    ],
};

pub(super) static IMPLICIT_DIFF: TopicManifest = TopicManifest {
    id: TopicId::ImplicitDiff,
    name: "Implicit Differentiation",
    defaults: VisualDefaults::new("sqrt(4 - x^2)").x0(1.0),
    param_labels: [None, None],
    tutor_prompt: "Explain implicit differentiation on the circle x² + y² = 4: differentiate \
        both sides while treating y as a hidden function of x.",
    steps: &[
        DerivationStep::new("i1", "A Curve Without a Formula")
            .goal("Work with x² + y² = 4")
            .assumption("y = y(x) near the point")
            .expression("x² + y² = 4")
            .explanation("We plot the upper half, but the relation itself never solves for y.")
            .requires(CHAIN),
        DerivationStep::new("i2", "Differentiate Both Sides")
            .goal("Solve for dy/dx")
            .expression("2x + 2y·y' = 0 ⇒ y' = -x/y")
            .explanation("The chain rule turns y² into 2y·y'; the slope comes out in terms of both coordinates.")
            .hint(VisualHint::NONE.x0(1.5)),
    ],
};

pub(super) static RELATED_RATES: TopicManifest = TopicManifest {
    id: TopicId::RelatedRates,
    name: "Related Rates",
    defaults: VisualDefaults::new("sqrt(25 - x^2)").x0(3.0),
    param_labels: [None, None],
    tutor_prompt: "Explain related rates with a sliding ladder of length 5: the foot's distance \
        x and the top's height y are tied together, so their rates are tied too.",
    steps: &[
        DerivationStep::new("rr1", "The Sliding Ladder")
            .goal("Relate the quantities")
            .assumption("x² + y² = 25")
            .expression("y = √(25 - x²)")
            .explanation("As the foot slides out, the top slides down along this curve."),
        DerivationStep::new("rr2", "Relating the Rates")
            .goal("Differentiate in time")
            .expression("x·dx/dt + y·dy/dt = 0")
            .explanation("The tangent slope -x/y converts the foot's speed into the top's speed.")
            .hint(VisualHint::NONE.x0(4.0))
            .requires(CHAIN),
    ],
};

pub(super) static LINEAR_APPROX: TopicManifest = TopicManifest {
    id: TopicId::LinearApprox,
    name: "Linear Approximation and Differentials",
    defaults: VisualDefaults::new("sqrt(x)").x0(4.0).param1(0.5).param2(0.0),
    param_labels: [Some("Δx"), None],
    tutor_prompt: "Explain linearization as zooming in until the curve looks straight; the \
        tangent line is then a cheap stand-in for the function nearby.",
    steps: &[
        DerivationStep::new("la1", "Locally Straight")
            .goal("Replace f by its tangent")
            .assumption("Δx small")
            .expression("L(x) = f(a) + f'(a)(x - a)")
            .explanation("Zoomed in far enough, a smooth curve is indistinguishable from its tangent.")
            .requires(TANGENT),
        DerivationStep::new("la2", "Measuring the Error")
            .goal("Compare f and L")
            .expression("f(a + Δx) - L(a + Δx)")
            .explanation("The gap between curve and tangent shrinks like Δx², far faster than Δx itself.")
            .hint(VisualHint::NONE.param1(2.0))
            .action("Shrink Δx and watch the error segment collapse."),
    ],
};
