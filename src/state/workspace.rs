//! Navigation and plot state with pure reducer transitions.
//!
//! DESIGN
//! ======
//! A [`Workspace`] is the single source of truth for which unit is being
//! browsed, which topic and step are active, and the [`VisualState`] the
//! plot is drawn from. Every change goes through [`Action`]; transitions are
//! total, and references that do not resolve degrade to no-ops (or to the
//! default topic for unknown topic names).

#[cfg(test)]
#[path = "workspace_test.rs"]
mod workspace_test;

use curriculum::{DerivationStep, ParamSlot, TopicId, TopicManifest, ViewTransform, VisualState, catalog, registry};

/// Every transition the UI can request.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Browse another unit (index into the catalog). The active topic stays.
    SelectUnit(usize),
    SelectTopic(TopicId),
    /// Textual topic id; unknown ids select the default topic.
    SelectTopicByName(String),
    SelectStep(String),
    /// Follow a prerequisite link; `step` falls back to the first step.
    JumpToPrerequisite { topic: TopicId, step: Option<String> },
    SetFunction(String),
    SetX0(f64),
    SetOrder(i64),
    SetParam1(f64),
    SetParam2(f64),
    NudgeX0(f64),
    NudgeOrder(i64),
    NudgeParam1(f64),
    NudgeParam2(f64),
    SetView(ViewTransform),
    ResetView,
}

/// Active topic, step, browsed unit and plot parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Workspace {
    /// Index of the browsed unit in [`catalog::UNITS`].
    pub unit: usize,
    pub topic: TopicId,
    /// Always an id from the active topic's step list.
    pub step_id: &'static str,
    pub visual: VisualState,
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new(TopicId::DEFAULT)
    }
}

impl Workspace {
    /// Workspace opened on `topic` at its first step.
    #[must_use]
    pub fn new(topic: TopicId) -> Self {
        let manifest = registry::manifest(topic);
        Self {
            unit: catalog::unit_index_of(topic),
            topic,
            step_id: manifest.first_step().id,
            visual: manifest.default_visual_state(ViewTransform::IDENTITY),
        }
    }

    #[must_use]
    pub fn manifest(&self) -> &'static TopicManifest {
        registry::manifest(self.topic)
    }

    #[must_use]
    pub fn step(&self) -> &'static DerivationStep {
        registry::step(self.topic, self.step_id)
    }

    /// Position of the active step in the storyline.
    #[must_use]
    pub fn step_index(&self) -> usize {
        self.manifest().step_index(self.step_id).unwrap_or(0)
    }

    /// New workspace with `action` applied.
    #[must_use]
    pub fn reduce(&self, action: Action) -> Self {
        let mut next = self.clone();
        next.apply(action);
        next
    }

    /// Apply `action` in place.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::SelectUnit(unit) => {
                if unit < catalog::UNITS.len() {
                    self.unit = unit;
                }
            }
            Action::SelectTopic(topic) => self.switch_topic(topic, None),
            Action::SelectTopicByName(name) => self.switch_topic(registry::lookup(&name).id, None),
            Action::SelectStep(id) => self.select_step(&id),
            Action::JumpToPrerequisite { topic, step } => self.switch_topic(topic, step.as_deref()),
            Action::SetFunction(function) => self.visual.function = function,
            Action::SetX0(x0) => self.visual.set_x0(x0),
            Action::SetOrder(order) => self.visual.set_order(order),
            Action::SetParam1(v) => self.visual.set_param(ParamSlot::One, v),
            Action::SetParam2(v) => self.visual.set_param(ParamSlot::Two, v),
            Action::NudgeX0(dx) => self.visual.set_x0(self.visual.x0 + dx),
            Action::NudgeOrder(delta) => self.visual.set_order(i64::from(self.visual.order).saturating_add(delta)),
            Action::NudgeParam1(dv) => self.visual.set_param(ParamSlot::One, self.visual.param1 + dv),
            Action::NudgeParam2(dv) => self.visual.set_param(ParamSlot::Two, self.visual.param2 + dv),
            Action::SetView(view) => self.visual.view = view,
            Action::ResetView => self.visual.view = ViewTransform::IDENTITY,
        }
    }

    fn switch_topic(&mut self, topic: TopicId, step: Option<&str>) {
        let manifest = registry::manifest(topic);
        let view = self.visual.view;
        self.topic = topic;
        self.unit = catalog::unit_index_of(topic);
        self.visual = manifest.default_visual_state(view);
        self.step_id = manifest.first_step().id;
        tracing::debug!(topic = %topic, "topic selected");
        if let Some(id) = step {
            self.select_step(id);
        }
    }

    fn select_step(&mut self, id: &str) {
        let Some(step) = registry::find_step(self.topic, id) else {
            tracing::debug!(topic = %self.topic, step = id, "unknown step ignored");
            return;
        };
        self.step_id = step.id;
        step.hint.apply_to(&mut self.visual);
    }
}
