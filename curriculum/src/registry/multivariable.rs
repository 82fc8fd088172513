//! Unit 8: a preview of multivariable calculus.

use crate::manifest::TopicManifest;
use crate::step::{DerivationStep, Prerequisite};
use crate::topic::TopicId;
use crate::visual::{VisualDefaults, VisualHint};

const SLOPE: &[Prerequisite] = &[Prerequisite::topic("The derivative", TopicId::DerivativeBasic)];

pub(super) static GRADIENT_VECTOR: TopicManifest = TopicManifest {
    id: TopicId::GradientVector,
    name: "The Gradient Field",
    defaults: VisualDefaults::new("x^2 - y^2").x0(1.0).param1(0.15).param2(1.0),
    param_labels: [Some("scale"), Some("y")],
    tutor_prompt: "Explain the gradient as the direction of steepest ascent on a landscape \
        F(x, y); its length is how steep that climb is.",
    steps: &[
        DerivationStep::new("g1", "Partial Slopes")
            .goal("Freeze one variable")
            .assumption("y held fixed")
            .expression("∂F/∂x, ∂F/∂y")
            .explanation("Walking east or north alone, the landscape has an ordinary slope in each direction.")
            .requires(SLOPE),
        DerivationStep::new("g2", "Steepest Ascent")
            .goal("Combine the slopes")
            .expression("∇F = (∂F/∂x, ∂F/∂y)")
            .explanation("The arrow built from both partial slopes points straight uphill.")
            .action("Move the marked point with x0 and the y parameter."),
        DerivationStep::new("g3", "A Bowl")
            .goal("Compare landscapes")
            .expression("F = x² + y²")
            .explanation("For a bowl every arrow points away from the bottom, growing with distance.")
            .hint(VisualHint::NONE.function("x^2 + y^2")),
    ],
};
