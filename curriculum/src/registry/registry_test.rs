use std::collections::HashSet;

use super::*;
use crate::catalog;
use crate::visual::ViewTransform;

#[test]
fn every_topic_maps_to_its_own_manifest() {
    for topic in TopicId::ALL {
        assert_eq!(manifest(topic).id, topic);
    }
}

#[test]
fn every_topic_has_steps_with_unique_ids() {
    for m in all() {
        assert!(!m.steps.is_empty(), "{} has no steps", m.id);
        let ids: HashSet<&str> = m.steps.iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), m.steps.len(), "{} has duplicate step ids", m.id);
        assert!(m.steps.iter().all(|s| !s.is_placeholder()));
    }
}

#[test]
fn every_default_and_hint_function_parses() {
    for m in all() {
        let topic = m.id;
        let default = expr::parse(m.defaults.function).and_then(|e| e.compile(topic.variables()));
        assert!(default.is_ok(), "{topic}: default '{}' -> {default:?}", m.defaults.function);
        for step in m.steps {
            if let Some(f) = step.hint.function {
                let hinted = expr::parse(f).and_then(|e| e.compile(topic.variables()));
                assert!(hinted.is_ok(), "{topic}/{}: hint '{f}' -> {hinted:?}", step.id);
            }
        }
    }
}

#[test]
fn prerequisites_point_at_real_steps() {
    for m in all() {
        for step in m.steps {
            for pre in step.prerequisites {
                if let (Some(topic), Some(step_id)) = (pre.topic, pre.step) {
                    assert!(find_step(topic, step_id).is_some(), "{}/{} -> {topic}/{step_id}", m.id, step.id);
                }
            }
        }
    }
}

#[test]
fn lookup_by_text() {
    assert_eq!(lookup("FTC").id, TopicId::Ftc);
    assert_eq!(lookup("NOT_A_TOPIC").id, TopicId::DEFAULT);
}

#[test]
fn missing_step_is_placeholder() {
    let s = step(TopicId::Ftc, "zz");
    assert!(s.is_placeholder());
    assert_eq!(s.title, "Untitled");
    assert_eq!(s.explanation, "");
    assert!(find_step(TopicId::Ftc, "zz").is_none());
}

#[test]
fn limit_definition_defaults() {
    let m = manifest(TopicId::LimitDefinition);
    let state = m.default_visual_state(ViewTransform::IDENTITY);
    assert_eq!(state.function, "x^2");
    assert!((state.x0 - 2.0).abs() < f64::EPSILON);
    assert!((state.param1 - 0.8).abs() < f64::EPSILON);
    assert!((state.param2 - 0.5).abs() < f64::EPSILON);
    assert_eq!(first_step(TopicId::LimitDefinition).id, "l1");
}

#[test]
fn taylor_steps_raise_the_order() {
    let m = manifest(TopicId::TaylorSeries);
    let orders: Vec<Option<u32>> = m.steps.iter().map(|s| s.hint.order).collect();
    assert_eq!(orders, vec![Some(0), Some(1), Some(2), Some(8)]);
}

#[test]
fn registry_and_catalog_agree() {
    let in_catalog: HashSet<TopicId> = catalog::all_entries().map(|e| e.id).collect();
    let in_registry: HashSet<TopicId> = all().map(|m| m.id).collect();
    assert_eq!(in_catalog, in_registry);
}
