use super::*;

#[test]
fn default_state_is_idle() {
    assert_eq!(InputState::default(), InputState::Idle);
    assert!(!InputState::Idle.is_panning());
}

#[test]
fn panning_reports_itself() {
    let state = InputState::Panning { last_screen: Point::new(1.0, 2.0) };
    assert!(state.is_panning());
}

#[test]
fn primary_and_middle_pan() {
    assert!(Button::Primary.pans());
    assert!(Button::Middle.pans());
    assert!(!Button::Secondary.pans());
}

#[test]
fn wheel_presets_point_opposite_ways() {
    assert!(WheelDelta::UP.dy < 0.0);
    assert!(WheelDelta::DOWN.dy > 0.0);
}
