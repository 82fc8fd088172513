//! Unit 1: limits and continuity.

use crate::manifest::TopicManifest;
use crate::step::{DerivationStep, Prerequisite};
use crate::topic::TopicId;
use crate::visual::{VisualDefaults, VisualHint};

const EPSILON_DELTA: &[Prerequisite] = &[Prerequisite::topic("ε-δ limits", TopicId::LimitDefinition)];
const EPSILON_CHALLENGE: &[Prerequisite] =
    &[Prerequisite::step("The epsilon challenge", TopicId::LimitDefinition, "l2")];

pub(super) static LIMIT_DEFINITION: TopicManifest = TopicManifest {
    id: TopicId::LimitDefinition,
    name: "ε-δ Definition of Limit",
    defaults: VisualDefaults::new("x^2").x0(2.0).param1(0.8).param2(0.5),
    param_labels: [Some("ε"), Some("δ")],
    tutor_prompt: "You are a math tutor explaining limits using epsilon-delta. Focus on the \
        challenge-response nature: given an epsilon (vertical tolerance), we find a delta \
        (horizontal range).",
    steps: &[
        DerivationStep::new("l1", "Targeting a Point")
            .goal("Observe x approaching c")
            .assumption("x ≠ c")
            .expression("x → 2, f(x) → 4")
            .explanation("We want to formalize what it means to \"infinitely approach\" a value.")
            .hint(VisualHint::NONE.param1(0.8).param2(0.6)),
        DerivationStep::new("l2", "The Epsilon Challenge")
            .goal("Define vertical error")
            .assumption("ε > 0")
            .expression("|f(x) - L| < ε")
            .explanation("Imagine a skeptic sets a tolerance window ε around the limit L.")
            .hint(VisualHint::NONE.param1(0.3))
            .action("Shrink ε and watch the δ box turn red when it no longer fits."),
        DerivationStep::new("l3", "The Delta Response")
            .goal("Find horizontal range")
            .assumption("δ > 0")
            .expression("0 < |x - c| < δ")
            .explanation(
                "Can we find a range δ such that every x inside it maps to a value inside the ε-window?",
            )
            .hint(VisualHint::NONE.param1(0.3).param2(0.15))
            .action("Tighten δ until the box turns green again."),
    ],
};

pub(super) static LIMIT_ONESIDED: TopicManifest = TopicManifest {
    id: TopicId::LimitOneSided,
    name: "One-Sided Limits",
    defaults: VisualDefaults::new("x / abs(x)").x0(0.0).param1(0.5).param2(0.0),
    param_labels: [Some("h"), None],
    tutor_prompt: "Explain one-sided limits by walking toward the point from the left and from \
        the right separately. A two-sided limit exists only when both walks arrive at the same height.",
    steps: &[
        DerivationStep::new("lo1", "Left and Right")
            .goal("Handle a jump")
            .assumption("x → a⁻ vs x → a⁺")
            .expression("lim⁻ ≠ lim⁺")
            .explanation("The heights approached from each side must agree for the limit to exist.")
            .requires(EPSILON_DELTA),
        DerivationStep::new("lo2", "Closing In")
            .goal("Shrink the approach distance")
            .assumption("h → 0⁺")
            .expression("f(a - h), f(a + h)")
            .explanation("Even at a tiny distance the two sample points stay a full unit apart: the jump never heals.")
            .hint(VisualHint::NONE.param1(0.05)),
    ],
};

pub(super) static LIMIT_INFINITE: TopicManifest = TopicManifest {
    id: TopicId::LimitInfinite,
    name: "Infinite Limits and Asymptotes",
    defaults: VisualDefaults::new("1 / x").x0(0.0).param1(1.0).param2(4.0),
    param_labels: [Some("window"), Some("M")],
    tutor_prompt: "Describe infinite limits as a contest: for every height M, the function \
        climbs past it once x is close enough to the asymptote.",
    steps: &[
        DerivationStep::new("li1", "Vertical Asymptote")
            .goal("Describe explosive growth")
            .assumption("1/x, x → 0")
            .expression("f(x) → ∞")
            .explanation("As the denominator shrinks, the whole quotient grows without bound."),
        DerivationStep::new("li2", "Beating Any Height")
            .goal("Formalize unboundedness")
            .assumption("M > 0")
            .expression("0 < x < 1/M ⇒ f(x) > M")
            .explanation("Raise the bar M as high as you like; a narrow enough window still clears it.")
            .hint(VisualHint::NONE.param2(8.0))
            .action("Raise M and see how far the window must shrink."),
    ],
};

pub(super) static SQUEEZE_THEOREM: TopicManifest = TopicManifest {
    id: TopicId::SqueezeTheorem,
    name: "Squeeze Theorem",
    defaults: VisualDefaults::new("x^2 * sin(1/x)").x0(0.0).param1(1.0).param2(0.0),
    param_labels: [Some("window"), None],
    tutor_prompt: "Use the 'two bodyguards' analogy. If two functions that bound another \
        function both go to the same limit, the middle one must too.",
    steps: &[
        DerivationStep::new("s1", "The Oscillating Function")
            .goal("Analyze complexity")
            .expression("f(x) = x²sin(1/x)")
            .explanation("This function oscillates wildly near 0, making direct limits hard.")
            .hint(VisualHint::NONE.param1(1.0)),
        DerivationStep::new("s2", "The Enclosure")
            .goal("Bounding functions")
            .assumption("|sin(1/x)| ≤ 1")
            .expression("-x² ≤ f(x) ≤ x²")
            .explanation("We find two simpler functions that always stay above and below the target.")
            .hint(VisualHint::NONE.param1(1.0)),
        DerivationStep::new("s3", "The Pinch")
            .goal("Convergence at 0")
            .expression("lim g(x) = lim h(x) = 0")
            .explanation("As both bounds approach 0, the oscillating function has nowhere else to go.")
            .hint(VisualHint::NONE.param1(0.1))
            .requires(EPSILON_CHALLENGE),
    ],
};

pub(super) static INFINITESIMAL_COMPARE: TopicManifest = TopicManifest {
    id: TopicId::InfinitesimalCompare,
    name: "Comparing Infinitesimals",
    defaults: VisualDefaults::new("sin(x)").x0(0.0).param1(1.0).param2(0.0),
    param_labels: [Some("n"), None],
    tutor_prompt: "Compare how fast quantities vanish. Two infinitesimals are of the same order \
        when their ratio tends to a finite nonzero number; zoom in to make it visible.",
    steps: &[
        DerivationStep::new("inf1", "Same Speed")
            .goal("Compare with a power of x")
            .assumption("x → 0")
            .expression("sin(x) ~ x")
            .explanation("Near zero the sine curve hugs the line y = x: both vanish at the same rate.")
            .hint(VisualHint::NONE.function("sin(x)").param1(1.0))
            .action("Zoom in on the origin until the two curves merge."),
        DerivationStep::new("inf2", "Vanishing Faster")
            .goal("Higher-order infinitesimal")
            .assumption("x → 0")
            .expression("1 - cos(x) = o(x)")
            .explanation("Some zeros disappear faster than others: 1 - cos(x) keeps pace with x²/2, not x.")
            .hint(VisualHint::NONE.function("1 - cos(x)").param1(2.0)),
    ],
};

pub(super) static IVT_THEOREMS: TopicManifest = TopicManifest {
    id: TopicId::IvtTheorems,
    name: "Intermediate Value Theorem",
    defaults: VisualDefaults::new("x^3 - x - 1").x0(0.0).param1(2.0).param2(0.0),
    param_labels: [Some("b - a"), Some("N")],
    tutor_prompt: "Explain the intermediate value theorem as crossing a road: a continuous path \
        from one side to the other must touch every line in between.",
    steps: &[
        DerivationStep::new("ivt1", "Opposite Sides")
            .goal("Continuity as a guarantee")
            .assumption("f continuous on [a, b]")
            .expression("f(a) < N < f(b)")
            .explanation("To cross the road you must pass through the middle of it."),
        DerivationStep::new("ivt2", "Hunting the Crossing")
            .goal("Locate c with f(c) = N")
            .assumption("bisection")
            .expression("∃ c ∈ (a, b): f(c) = N")
            .explanation("Halving the interval and keeping the half with a sign change pins the crossing down.")
            .hint(VisualHint::NONE.param2(2.0))
            .action("Move the level N and watch the crossing follow it."),
    ],
};
