use super::*;

#[test]
fn every_topic_appears_exactly_once() {
    for topic in TopicId::ALL {
        let n = all_entries().filter(|e| e.id == topic).count();
        assert_eq!(n, 1, "{topic} appears {n} times");
    }
}

#[test]
fn unit_of_finds_the_containing_unit() {
    assert_eq!(unit_of(TopicId::TaylorSeries).short_name, "SER");
    assert_eq!(unit_of(TopicId::Ftc).id, "u4");
    assert_eq!(unit_of(TopicId::GradientVector).short_name, "MULTI");
    assert_eq!(unit_index_of(TopicId::ChainRule), 1);
}

#[test]
fn short_names_in_tab_order() {
    let names: Vec<&str> = UNITS.iter().map(|u| u.short_name).collect();
    assert_eq!(names, ["LIM", "DIFF", "APP", "INT", "GEO", "DE", "SER", "MULTI"]);
}

#[test]
fn find_unit_by_id() {
    assert_eq!(find_unit("u6").map(|u| u.short_name), Some("DE"));
    assert!(find_unit("u9").is_none());
}

#[test]
fn labels_come_from_the_catalog() {
    assert_eq!(label_of(TopicId::SqueezeTheorem), "Squeeze theorem");
}

#[test]
fn all_topics_starts_with_limits_and_covers_the_enum() {
    let topics: Vec<TopicId> = all_topics().collect();
    assert_eq!(topics.len(), TopicId::ALL.len());
    assert_eq!(topics.first(), Some(&TopicId::LimitDefinition));
}
