#![allow(clippy::float_cmp)]

use crossterm::event::KeyEventState;

use super::*;

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

// --- Global ---

#[test]
fn ctrl_c_quits_everywhere() {
    for focus in [Focus::Navigator, Focus::Plot, Focus::Chat, Focus::Function] {
        assert_eq!(map_key(focus, ctrl('c')), Some(Command::Quit));
    }
}

#[test]
fn tab_cycles_focus() {
    assert_eq!(map_key(Focus::Chat, press(KeyCode::Tab)), Some(Command::FocusNext));
    assert_eq!(Focus::Navigator.next(), Focus::Plot);
    assert_eq!(Focus::Chat.next(), Focus::Navigator);
    assert_eq!(Focus::Navigator.prev(), Focus::Chat);
    assert_eq!(Focus::Function.next(), Focus::Navigator);
}

#[test]
fn releases_are_ignored() {
    let key = KeyEvent { code: KeyCode::Char('q'), modifiers: KeyModifiers::NONE, kind: KeyEventKind::Release, state: KeyEventState::NONE };
    assert_eq!(map_key(Focus::Plot, key), None);
}

// --- Text panes ---

#[test]
fn text_panes_capture_letters() {
    assert_eq!(map_key(Focus::Chat, press(KeyCode::Char('q'))), Some(Command::Insert('q')));
    assert_eq!(map_key(Focus::Function, press(KeyCode::Char('^'))), Some(Command::Insert('^')));
    assert_eq!(map_key(Focus::Chat, press(KeyCode::Enter)), Some(Command::Submit));
    assert_eq!(map_key(Focus::Function, press(KeyCode::Esc)), Some(Command::Cancel));
    assert_eq!(map_key(Focus::Chat, press(KeyCode::Backspace)), Some(Command::Backspace));
}

#[test]
fn function_keys_pick_quick_questions_in_chat() {
    assert_eq!(map_key(Focus::Chat, press(KeyCode::F(1))), Some(Command::QuickQuestion(0)));
    assert_eq!(map_key(Focus::Chat, press(KeyCode::F(3))), Some(Command::QuickQuestion(2)));
    assert_eq!(map_key(Focus::Chat, press(KeyCode::F(4))), None);
    assert_eq!(map_key(Focus::Function, press(KeyCode::F(1))), None);
}

// --- Navigator ---

#[test]
fn navigator_moves_cursor_and_units() {
    assert_eq!(map_key(Focus::Navigator, press(KeyCode::Down)), Some(Command::CursorDown));
    assert_eq!(map_key(Focus::Navigator, press(KeyCode::Char('k'))), Some(Command::CursorUp));
    assert_eq!(map_key(Focus::Navigator, press(KeyCode::Right)), Some(Command::UnitNext));
    assert_eq!(map_key(Focus::Navigator, press(KeyCode::Enter)), Some(Command::Choose));
}

#[test]
fn digits_follow_prerequisites() {
    assert_eq!(map_key(Focus::Navigator, press(KeyCode::Char('1'))), Some(Command::FollowPrerequisite(0)));
    assert_eq!(map_key(Focus::Navigator, press(KeyCode::Char('3'))), Some(Command::FollowPrerequisite(2)));
    assert_eq!(map_key(Focus::Navigator, press(KeyCode::Char('0'))), None);
}

#[test]
fn step_keys_work_outside_text_panes() {
    for focus in [Focus::Navigator, Focus::Plot] {
        assert_eq!(map_key(focus, press(KeyCode::Char(']'))), Some(Command::StepNext));
        assert_eq!(map_key(focus, press(KeyCode::Char('f'))), Some(Command::EditFunction));
    }
}

// --- Plot ---

#[test]
fn plot_keys() {
    assert_eq!(map_key(Focus::Plot, press(KeyCode::Left)), Some(Command::Pan(PAN_STEP_PX, 0.0)));
    assert_eq!(map_key(Focus::Plot, press(KeyCode::Char('+'))), Some(Command::ZoomIn));
    assert_eq!(map_key(Focus::Plot, press(KeyCode::Char('0'))), Some(Command::ResetView));
    assert_eq!(map_key(Focus::Plot, press(KeyCode::Char('X'))), Some(Command::NudgeX0(X0_STEP)));
    assert_eq!(map_key(Focus::Plot, press(KeyCode::Char('o'))), Some(Command::NudgeOrder(-1)));
    assert_eq!(map_key(Focus::Plot, press(KeyCode::Char('B'))), Some(Command::NudgeParam2(1.0)));
}

// --- Helpers ---

#[test]
fn nudge_step_scales_with_value() {
    assert_eq!(nudge_step(8.0), 1.0);
    assert!((nudge_step(0.5) - 0.05).abs() < 1e-12);
    assert_eq!(nudge_step(0.0), 0.01);
    assert!((nudge_step(-2.5) - 0.25).abs() < 1e-12);
}

#[test]
fn cell_to_pixel_maps_cell_centres() {
    let area = Rect::new(10, 5, 20, 10);
    assert_eq!(cell_to_pixel(area, 10, 5), Some(Point::new(1.0, 2.0)));
    assert_eq!(cell_to_pixel(area, 12, 6), Some(Point::new(5.0, 6.0)));
    assert_eq!(cell_to_pixel(area, 9, 5), None);
    assert_eq!(cell_to_pixel(area, 30, 5), None);
    assert_eq!(cell_to_pixel(area, 10, 15), None);
}
