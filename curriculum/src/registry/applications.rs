//! Unit 3: applications of the derivative.

use crate::manifest::TopicManifest;
use crate::step::{DerivationStep, Prerequisite};
use crate::topic::TopicId;
use crate::visual::{VisualDefaults, VisualHint};

const SLOPE: &[Prerequisite] = &[Prerequisite::topic("The derivative", TopicId::DerivativeBasic)];
const LINEARIZE: &[Prerequisite] = &[Prerequisite::topic("Linear approximation", TopicId::LinearApprox)];

pub(super) static MVT_LAGRANGE: TopicManifest = TopicManifest {
    id: TopicId::MvtLagrange,
    name: "Mean Value Theorem",
    defaults: VisualDefaults::new("x^2 - 2x").x0(0.0).param1(3.0).param2(0.0),
    param_labels: [Some("b - a"), None],
    tutor_prompt: "Explain the mean value theorem with a road trip: if your average speed was \
        60, at some instant the speedometer read exactly 60.",
    steps: &[
        DerivationStep::new("mvt1", "The Average Slope")
            .goal("Draw the chord")
            .assumption("f continuous on [a, b]")
            .expression("[f(b) - f(a)] / (b - a)")
            .explanation("The chord joining the endpoints carries the average rate of change.")
            .requires(SLOPE),
        DerivationStep::new("mvt2", "A Parallel Tangent")
            .goal("Find c")
            .assumption("f differentiable on (a, b)")
            .expression("f'(c) = [f(b) - f(a)] / (b - a)")
            .explanation("Slide a line parallel to the chord; where it last touches the curve, the tangent matches.")
            .action("Change b - a and follow where c lands."),
        DerivationStep::new("mvt3", "Rolle's Special Case")
            .goal("Level endpoints")
            .assumption("f(a) = f(b)")
            .expression("f'(c) = 0")
            .explanation("When the chord is flat, some tangent must be flat too.")
            .hint(VisualHint::NONE.function("cos(x)").x0(0.0).param1(6.283)),
    ],
};

pub(super) static LHOPITAL_RULE: TopicManifest = TopicManifest {
    id: TopicId::LhopitalRule,
    name: "L'Hôpital's Rule",
    defaults: VisualDefaults::new("sin(x) / x").x0(0.0).param1(0.5).param2(0.0),
    param_labels: [Some("h"), None],
    tutor_prompt: "Explain L'Hôpital's rule by zooming into 0/0: near the point both numerator \
        and denominator look like their tangent lines, so their ratio is the ratio of slopes.",
    steps: &[
        DerivationStep::new("lh1", "Zero over Zero")
            .goal("An indeterminate form")
            .assumption("f(a) = g(a) = 0")
            .expression("sin(x) / x at x = 0")
            .explanation("The formula breaks at the point, yet the graph clearly heads somewhere.")
            .requires(LINEARIZE),
        DerivationStep::new("lh2", "Ratio of Slopes")
            .goal("Linearize top and bottom")
            .expression("lim f/g = lim f'/g'")
            .explanation("Near a, f ≈ f'(a)(x - a) and g ≈ g'(a)(x - a); the (x - a) cancels.")
            .hint(VisualHint::NONE.param1(0.05))
            .action("Shrink h and read off the value both sample points agree on."),
    ],
};

pub(super) static OPTIMIZATION: TopicManifest = TopicManifest {
    id: TopicId::Optimization,
    name: "Optimization",
    defaults: VisualDefaults::new("-x^2 + 4x").x0(2.0),
    param_labels: [None, None],
    tutor_prompt: "Explain optimization as hunting for flat tangents: at a peak or valley of a \
        smooth function the slope must be zero.",
    steps: &[
        DerivationStep::new("o1", "Flat Tangents")
            .goal("Critical points")
            .assumption("f differentiable")
            .expression("f'(x) = 0")
            .explanation("At the top of a hill the tangent is horizontal; candidates live where f' vanishes.")
            .requires(SLOPE),
        DerivationStep::new("o2", "Peaks versus Valleys")
            .goal("Classify with concavity")
            .expression("f''(x) < 0 ⇒ maximum")
            .explanation("Bending down means a peak; bending up means a valley.")
            .hint(VisualHint::NONE.function("x^3 - 3x").x0(1.0)),
    ],
};
