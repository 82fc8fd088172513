//! Keyboard and mouse translation.
//!
//! Key handling is a pure function of the focused pane and the key event so
//! the bindings can be tested without a terminal.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use canvas::camera::Point;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::Rect;

/// Pixels the plot moves per arrow key.
pub const PAN_STEP_PX: f64 = 8.0;
/// Plot units x0 moves per key press.
pub const X0_STEP: f64 = 0.1;

/// Which pane receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Navigator,
    Plot,
    Chat,
    /// Editing the function string.
    Function,
}

impl Focus {
    /// Tab order; the function editor is modal and not part of it.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Navigator => Self::Plot,
            Self::Plot => Self::Chat,
            Self::Chat | Self::Function => Self::Navigator,
        }
    }

    #[must_use]
    pub fn prev(self) -> Self {
        match self {
            Self::Navigator => Self::Chat,
            Self::Plot | Self::Function => Self::Navigator,
            Self::Chat => Self::Plot,
        }
    }

    /// Whether printable keys go into a text buffer.
    #[must_use]
    pub fn is_text(self) -> bool {
        matches!(self, Self::Chat | Self::Function)
    }
}

/// What a key asks the application to do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Quit,
    FocusNext,
    FocusPrev,
    EditFunction,
    CursorUp,
    CursorDown,
    UnitPrev,
    UnitNext,
    /// Select the topic under the navigator cursor.
    Choose,
    StepPrev,
    StepNext,
    /// Follow the n-th (0-based) prerequisite of the active step.
    FollowPrerequisite(usize),
    Pan(f64, f64),
    ZoomIn,
    ZoomOut,
    ResetView,
    NudgeX0(f64),
    NudgeOrder(i64),
    /// Direction only; the size depends on the current value.
    NudgeParam1(f64),
    NudgeParam2(f64),
    /// Put the n-th (0-based) quick question into the prompt.
    QuickQuestion(usize),
    Insert(char),
    Backspace,
    Submit,
    /// Leave the editor, or stop a streaming reply.
    Cancel,
}

/// Map a key press in `focus` to a command.
#[must_use]
pub fn map_key(focus: Focus, key: KeyEvent) -> Option<Command> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c' | 'q') => Some(Command::Quit),
            _ => None,
        };
    }
    match key.code {
        KeyCode::Tab => return Some(Command::FocusNext),
        KeyCode::BackTab => return Some(Command::FocusPrev),
        _ => {}
    }
    if focus == Focus::Chat {
        if let KeyCode::F(n @ 1..=3) = key.code {
            return Some(Command::QuickQuestion(usize::from(n) - 1));
        }
    }
    if focus.is_text() {
        return text_key(key.code);
    }
    if let Some(cmd) = shared_key(key.code) {
        return Some(cmd);
    }
    match focus {
        Focus::Navigator => navigator_key(key.code),
        Focus::Plot => plot_key(key.code),
        Focus::Chat | Focus::Function => None,
    }
}

fn text_key(code: KeyCode) -> Option<Command> {
    match code {
        KeyCode::Char(c) => Some(Command::Insert(c)),
        KeyCode::Backspace => Some(Command::Backspace),
        KeyCode::Enter => Some(Command::Submit),
        KeyCode::Esc => Some(Command::Cancel),
        _ => None,
    }
}

fn shared_key(code: KeyCode) -> Option<Command> {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        KeyCode::Char('f') => Some(Command::EditFunction),
        KeyCode::Char('[') => Some(Command::StepPrev),
        KeyCode::Char(']') => Some(Command::StepNext),
        _ => None,
    }
}

fn navigator_key(code: KeyCode) -> Option<Command> {
    match code {
        KeyCode::Up | KeyCode::Char('k') => Some(Command::CursorUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Command::CursorDown),
        KeyCode::Left | KeyCode::Char('h') => Some(Command::UnitPrev),
        KeyCode::Right | KeyCode::Char('l') => Some(Command::UnitNext),
        KeyCode::Enter => Some(Command::Choose),
        KeyCode::Char(c @ '1'..='9') => c.to_digit(10).map(|d| Command::FollowPrerequisite(d as usize - 1)),
        _ => None,
    }
}

fn plot_key(code: KeyCode) -> Option<Command> {
    match code {
        KeyCode::Left => Some(Command::Pan(PAN_STEP_PX, 0.0)),
        KeyCode::Right => Some(Command::Pan(-PAN_STEP_PX, 0.0)),
        KeyCode::Up => Some(Command::Pan(0.0, PAN_STEP_PX)),
        KeyCode::Down => Some(Command::Pan(0.0, -PAN_STEP_PX)),
        KeyCode::Char('+' | '=') => Some(Command::ZoomIn),
        KeyCode::Char('-') => Some(Command::ZoomOut),
        KeyCode::Char('0' | 'r') => Some(Command::ResetView),
        KeyCode::Char('x') => Some(Command::NudgeX0(-X0_STEP)),
        KeyCode::Char('X') => Some(Command::NudgeX0(X0_STEP)),
        KeyCode::Char('o') => Some(Command::NudgeOrder(-1)),
        KeyCode::Char('O') => Some(Command::NudgeOrder(1)),
        KeyCode::Char('a') => Some(Command::NudgeParam1(-1.0)),
        KeyCode::Char('A') => Some(Command::NudgeParam1(1.0)),
        KeyCode::Char('b') => Some(Command::NudgeParam2(-1.0)),
        KeyCode::Char('B') => Some(Command::NudgeParam2(1.0)),
        _ => None,
    }
}

/// Step size for a free parameter: whole counts move by one, everything
/// else by a tenth of its magnitude.
#[must_use]
pub fn nudge_step(value: f64) -> f64 {
    if value.abs() >= 1.0 && value.fract() == 0.0 { 1.0 } else { (value.abs() * 0.1).max(0.01) }
}

/// Centre of terminal cell (`col`, `row`) in braille pixels of `area`, or
/// `None` outside it.
#[must_use]
pub fn cell_to_pixel(area: Rect, col: u16, row: u16) -> Option<Point> {
    let inside = col >= area.x && col < area.x + area.width && row >= area.y && row < area.y + area.height;
    inside.then(|| Point::new(f64::from(col - area.x) * 2.0 + 1.0, f64::from(row - area.y) * 4.0 + 2.0))
}
