//! Unit 6: first-order differential equations.

use crate::manifest::TopicManifest;
use crate::step::{DerivationStep, Prerequisite};
use crate::topic::TopicId;
use crate::visual::{VisualDefaults, VisualHint};

const SEPARABLE: &[Prerequisite] = &[Prerequisite::topic("Separable equations", TopicId::DeSeparable)];
const SLOPE: &[Prerequisite] = &[Prerequisite::topic("The derivative", TopicId::DerivativeBasic)];

pub(super) static DE_SEPARABLE: TopicManifest = TopicManifest {
    id: TopicId::DeSeparable,
    name: "Separable Equations",
    defaults: VisualDefaults::new("-x * y").x0(0.0).param1(2.0).param2(0.1),
    param_labels: [Some("y0"), Some("step")],
    tutor_prompt: "Explain a differential equation as a field of tiny arrows. A solution is a \
        curve that follows the arrows everywhere; separation of variables finds it exactly.",
    steps: &[
        DerivationStep::new("de1", "The Slope Field")
            .goal("Read y' = F(x, y)")
            .assumption("F(x, y) = -x·y")
            .expression("dy/dx = -xy")
            .explanation("At every point the equation dictates a slope; together they form a field.")
            .requires(SLOPE),
        DerivationStep::new("de2", "Following the Arrows")
            .goal("Euler's method")
            .assumption("step size h")
            .expression("yₙ₊₁ = yₙ + h·F(xₙ, yₙ)")
            .explanation("Walk a small step along the local arrow, then look again.")
            .hint(VisualHint::NONE.param2(0.5))
            .action("Shrink the step and watch the path smooth out."),
        DerivationStep::new("de3", "Separate and Integrate")
            .goal("Exact solution")
            .expression("dy/y = -x dx ⇒ y = C·e^(-x²/2)")
            .explanation("Gathering y on one side and x on the other turns the equation into two integrals.")
            .hint(VisualHint::NONE.param2(0.02)),
    ],
};

pub(super) static DE_LOGISTIC: TopicManifest = TopicManifest {
    id: TopicId::DeLogistic,
    name: "Logistic Growth",
    defaults: VisualDefaults::new("4 / (1 + e^(-x))").x0(0.0).param1(4.0).param2(0.0),
    param_labels: [Some("K"), None],
    tutor_prompt: "Explain logistic growth as exponential growth that feels the ceiling: the \
        growth rate is largest halfway to the carrying capacity.",
    steps: &[
        DerivationStep::new("lg1", "Growth with a Ceiling")
            .goal("The logistic equation")
            .assumption("carrying capacity K")
            .expression("dP/dt = rP(1 - P/K)")
            .explanation("Small populations grow almost exponentially; crowding slows them near K.")
            .requires(SEPARABLE),
        DerivationStep::new("lg2", "The Inflection Point")
            .goal("Fastest growth")
            .expression("P = K/2")
            .explanation("The curve is steepest exactly halfway up, where it switches from bending up to bending down.")
            .hint(VisualHint::NONE.function("6 / (1 + e^(-x))").param1(6.0)),
    ],
};
