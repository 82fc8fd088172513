//! Derivation steps: the cards of a topic's storyline.

use crate::topic::TopicId;
use crate::visual::VisualHint;

/// Cross-topic reference shown under a step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prerequisite {
    pub name: &'static str,
    /// Topic to jump to; `None` renders as a plain label.
    pub topic: Option<TopicId>,
    /// Step to open in that topic; `None` opens its first step.
    pub step: Option<&'static str>,
}

impl Prerequisite {
    #[must_use]
    pub const fn topic(name: &'static str, topic: TopicId) -> Self {
        Self { name, topic: Some(topic), step: None }
    }

    #[must_use]
    pub const fn step(name: &'static str, topic: TopicId, step: &'static str) -> Self {
        Self { name, topic: Some(topic), step: Some(step) }
    }

    #[must_use]
    pub const fn label(name: &'static str) -> Self {
        Self { name, topic: None, step: None }
    }
}

/// One card in the guided storyline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivationStep {
    /// Unique within the owning topic.
    pub id: &'static str,
    pub title: &'static str,
    pub goal: &'static str,
    pub assumption: &'static str,
    pub expression: &'static str,
    pub explanation: &'static str,
    pub completed: bool,
    pub prerequisites: &'static [Prerequisite],
    pub hint: VisualHint,
    /// What the learner should try on the plot.
    pub action_hint: Option<&'static str>,
}

/// Returned by lookups that miss.
pub static PLACEHOLDER_STEP: DerivationStep = DerivationStep::new("", "Untitled");

impl DerivationStep {
    #[must_use]
    pub const fn new(id: &'static str, title: &'static str) -> Self {
        Self {
            id,
            title,
            goal: "",
            assumption: "",
            expression: "",
            explanation: "",
            completed: true,
            prerequisites: &[],
            hint: VisualHint::NONE,
            action_hint: None,
        }
    }

    #[must_use]
    pub const fn goal(mut self, goal: &'static str) -> Self {
        self.goal = goal;
        self
    }

    #[must_use]
    pub const fn assumption(mut self, assumption: &'static str) -> Self {
        self.assumption = assumption;
        self
    }

    #[must_use]
    pub const fn expression(mut self, expression: &'static str) -> Self {
        self.expression = expression;
        self
    }

    #[must_use]
    pub const fn explanation(mut self, explanation: &'static str) -> Self {
        self.explanation = explanation;
        self
    }

    #[must_use]
    pub const fn hint(mut self, hint: VisualHint) -> Self {
        self.hint = hint;
        self
    }

    #[must_use]
    pub const fn requires(mut self, prerequisites: &'static [Prerequisite]) -> Self {
        self.prerequisites = prerequisites;
        self
    }

    #[must_use]
    pub const fn action(mut self, action: &'static str) -> Self {
        self.action_hint = Some(action);
        self
    }

    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.id.is_empty()
    }
}
