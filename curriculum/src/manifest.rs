//! Topic manifests.

use crate::step::{DerivationStep, PLACEHOLDER_STEP};
use crate::topic::TopicId;
use crate::visual::{ViewTransform, VisualDefaults, VisualState};

/// Static description of one topic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TopicManifest {
    pub id: TopicId,
    pub name: &'static str,
    pub defaults: VisualDefaults,
    /// Labels for `param1` / `param2`; `None` when the topic ignores the slot.
    pub param_labels: [Option<&'static str>; 2],
    /// Never empty for registry manifests.
    pub steps: &'static [DerivationStep],
    /// Teaching strategy appended to the tutor's system instruction.
    pub tutor_prompt: &'static str,
}

impl TopicManifest {
    /// Fresh visual state for this topic, keeping the caller's view.
    #[must_use]
    pub fn default_visual_state(&self, view: ViewTransform) -> VisualState {
        self.defaults.to_state(self.id, view)
    }

    #[must_use]
    pub fn find_step(&self, id: &str) -> Option<&'static DerivationStep> {
        self.steps.iter().find(|s| s.id == id)
    }

    /// The step with `id`, or the placeholder.
    #[must_use]
    pub fn step(&self, id: &str) -> &'static DerivationStep {
        self.find_step(id).unwrap_or(&PLACEHOLDER_STEP)
    }

    #[must_use]
    pub fn first_step(&self) -> &'static DerivationStep {
        self.steps.first().unwrap_or(&PLACEHOLDER_STEP)
    }

    /// Position of `id` in the storyline.
    #[must_use]
    pub fn step_index(&self, id: &str) -> Option<usize> {
        self.steps.iter().position(|s| s.id == id)
    }
}
