//! Unit 5: geometric applications of the integral.

use crate::manifest::TopicManifest;
use crate::step::{DerivationStep, Prerequisite};
use crate::topic::TopicId;
use crate::visual::{VisualDefaults, VisualHint};

const RIEMANN: &[Prerequisite] = &[Prerequisite::topic("Riemann sums", TopicId::IntegralBasic)];

pub(super) static AREA_BETWEEN_CURVES: TopicManifest = TopicManifest {
    id: TopicId::AreaBetweenCurves,
    name: "Area Between Curves",
    defaults: VisualDefaults::new("x^2").x0(-2.0).param1(4.0).param2(4.0),
    param_labels: [Some("width"), Some("level")],
    tutor_prompt: "Explain area between curves as stacking thin vertical strips whose height \
        is top minus bottom.",
    steps: &[
        DerivationStep::new("ab1", "Top Minus Bottom")
            .goal("Height of a strip")
            .assumption("g(x) ≥ f(x) on [a, b]")
            .expression("h(x) = g(x) - f(x)")
            .explanation("Each vertical strip spans from the lower curve to the upper one.")
            .requires(RIEMANN),
        DerivationStep::new("ab2", "Summing the Strips")
            .goal("Integrate the gap")
            .expression("A = ∫ₐᵇ [g(x) - f(x)] dx")
            .explanation("Here the upper curve is the line y = 4; the area between is 32/3.")
            .action("Raise the level and widen the interval to keep the region closed."),
    ],
};

pub(super) static VOLUME_ROTATION: TopicManifest = TopicManifest {
    id: TopicId::VolumeRotation,
    name: "Volumes of Revolution",
    defaults: VisualDefaults::new("sqrt(x)").x0(0.0).param1(10.0).param2(4.0),
    param_labels: [Some("disks"), Some("length")],
    tutor_prompt: "Explain the disk method: spinning a thin strip around the x-axis sweeps out \
        a coin of radius f(x) and thickness dx.",
    steps: &[
        DerivationStep::new("v1", "Spin a Strip")
            .goal("One disk")
            .assumption("radius r = f(x)")
            .expression("dV = π f(x)² dx")
            .explanation("Rotating a single strip around the axis produces a thin coin.")
            .hint(VisualHint::NONE.param1(4.0))
            .requires(RIEMANN),
        DerivationStep::new("v2", "Stack the Coins")
            .goal("Integrate the disks")
            .expression("V = π ∫ₐᵇ f(x)² dx")
            .explanation("Adding ever thinner coins gives the exact volume; for √x on [0, 4] it is 8π.")
            .hint(VisualHint::NONE.param1(30.0)),
    ],
};
