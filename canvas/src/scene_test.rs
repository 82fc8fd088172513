use super::*;

#[test]
fn empty_path_is_dropped() {
    let mut scene = Scene::new();
    scene.path(Vec::new(), Rgb::FUNCTION, false);
    assert!(scene.is_empty());
}

#[test]
fn paths_adds_one_primitive_per_segment() {
    let mut scene = Scene::new();
    scene.paths(vec![vec![(0.0, 0.0), (1.0, 1.0)], vec![], vec![(2.0, 2.0)]], Rgb::FUNCTION, false);
    assert_eq!(scene.len(), 2);
}

#[test]
fn dashed_line_is_a_dashed_path() {
    let mut scene = Scene::new();
    scene.dashed_line((0.0, 0.0), (1.0, 0.0), Rgb::ACCENT);
    assert_eq!(
        scene.primitives[0],
        Primitive::Path { points: vec![(0.0, 0.0), (1.0, 0.0)], colour: Rgb::ACCENT, dashed: true }
    );
}

#[test]
fn clear_drops_primitives_and_notes() {
    let mut scene = Scene::new();
    scene.marker((0.0, 0.0), Rgb::INK);
    scene.note("hello");
    scene.clear();
    assert!(scene.is_empty());
    assert!(scene.notes.is_empty());
}

#[test]
fn count_filters_by_kind() {
    let mut scene = Scene::new();
    scene.marker((0.0, 0.0), Rgb::INK);
    scene.marker((1.0, 0.0), Rgb::GOOD);
    scene.label((0.0, 0.0), "x0", Rgb::INK);
    assert_eq!(scene.count(|p| matches!(p, Primitive::Marker { .. })), 2);
}
