//! Terminal front end.
//!
//! DESIGN
//! ======
//! One synchronous loop owns all state. Each tick it drains finished chat
//! events, redraws every pane from the [`Workspace`] and [`ChatState`], and
//! polls the terminal for at most [`TICK`]. Keys become [`Command`]s through
//! [`input::map_key`]; mouse gestures over the plot go to the canvas engine,
//! whose view changes are dispatched back into the workspace.

pub mod input;
pub mod view;

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use std::io;
use std::sync::Arc;
use std::time::Duration;

use canvas::consts::ZOOM_STEP;
use canvas::input::{Button, WheelDelta};
use canvas::{Action as PlotAction, EngineCore};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::Frame;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use time::OffsetDateTime;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::info;

use crate::llm::LlmChat;
use crate::services::tutor::{ChatEvent, ReplyHandle, ReplySettings, TutorContext, build_request, spawn_reply};
use crate::state::chat::QUICK_QUESTIONS;
use crate::state::{Action, ChatState, Workspace};
use input::{Command, Focus, cell_to_pixel, map_key, nudge_step};

/// Upper bound on how long a key press waits to be seen.
pub const TICK: Duration = Duration::from_millis(50);

const HELP: &str = "Tab pane · f edit f(x) · [ ] steps · 1-9 prerequisite · arrows/drag pan · +/-/wheel zoom · x/o/a/b adjust · q quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiOptions {
    /// Capture mouse events for drag and wheel gestures.
    pub mouse: bool,
}

/// Application state plus the handles the event loop needs.
pub struct App {
    workspace: Workspace,
    chat: ChatState,
    engine: EngineCore,
    llm: Option<Arc<dyn LlmChat>>,
    settings: ReplySettings,
    focus: Focus,
    /// Navigator row within the browsed unit.
    cursor: usize,
    function_buffer: String,
    question_buffer: String,
    reply: Option<ReplyHandle>,
    events_tx: UnboundedSender<ChatEvent>,
    events_rx: UnboundedReceiver<ChatEvent>,
    status: String,
    plot_area: Rect,
    quit: bool,
}

impl App {
    /// `llm` is `None` when no provider is configured; questions then get
    /// the fallback reply.
    #[must_use]
    pub fn new(workspace: Workspace, llm: Option<Arc<dyn LlmChat>>, settings: ReplySettings) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let mut app = Self {
            workspace,
            chat: ChatState::new(),
            engine: EngineCore::new(),
            llm,
            settings,
            focus: Focus::Navigator,
            cursor: 0,
            function_buffer: String::new(),
            question_buffer: String::new(),
            reply: None,
            events_tx,
            events_rx,
            status: String::new(),
            plot_area: Rect::default(),
            quit: false,
        };
        app.sync_cursor();
        app
    }

    /// Message shown in the status line until the next one replaces it.
    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }

    #[must_use]
    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    #[must_use]
    pub fn chat(&self) -> &ChatState {
        &self.chat
    }

    #[must_use]
    pub fn focus(&self) -> Focus {
        self.focus
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    fn dispatch(&mut self, action: Action) {
        let topic = self.workspace.topic;
        self.workspace.apply(action);
        if self.workspace.topic != topic {
            info!(from = %topic, to = %self.workspace.topic, "topic switched");
            self.sync_cursor();
        }
    }

    fn dispatch_plot(&mut self, action: PlotAction) {
        if let PlotAction::ViewChanged(view) = action {
            self.dispatch(Action::SetView(view));
        }
    }

    fn sync_cursor(&mut self) {
        let topic = self.workspace.topic;
        self.cursor = curriculum::catalog::UNITS
            .get(self.workspace.unit)
            .and_then(|u| u.topics().position(|e| e.id == topic))
            .unwrap_or(0);
    }

    fn browsed_topics(&self) -> Vec<curriculum::TopicId> {
        curriculum::catalog::UNITS
            .get(self.workspace.unit)
            .map(|u| u.topics().map(|e| e.id).collect())
            .unwrap_or_default()
    }

    // =========================================================================
    // COMMANDS
    // =========================================================================

    pub fn handle_command(&mut self, command: Command) {
        match command {
            Command::Quit => {
                self.cancel_reply();
                self.quit = true;
            }
            Command::FocusNext => self.focus = self.focus.next(),
            Command::FocusPrev => self.focus = self.focus.prev(),
            Command::EditFunction => {
                self.function_buffer.clone_from(&self.workspace.visual.function);
                self.focus = Focus::Function;
            }
            Command::CursorUp => self.cursor = self.cursor.saturating_sub(1),
            Command::CursorDown => {
                let last = self.browsed_topics().len().saturating_sub(1);
                self.cursor = (self.cursor + 1).min(last);
            }
            Command::UnitPrev | Command::UnitNext => {
                let count = curriculum::catalog::UNITS.len();
                let unit = if command == Command::UnitNext {
                    (self.workspace.unit + 1) % count
                } else {
                    (self.workspace.unit + count - 1) % count
                };
                self.dispatch(Action::SelectUnit(unit));
                self.cursor = 0;
            }
            Command::Choose => {
                if let Some(&topic) = self.browsed_topics().get(self.cursor) {
                    self.dispatch(Action::SelectTopic(topic));
                }
            }
            Command::StepPrev | Command::StepNext => self.step_by(if command == Command::StepNext { 1 } else { -1 }),
            Command::FollowPrerequisite(n) => self.follow_prerequisite(n),
            Command::Pan(dx, dy) => {
                let action = self.engine.pan_by(dx, dy);
                self.dispatch_plot(action);
            }
            Command::ZoomIn | Command::ZoomOut => {
                let factor = if command == Command::ZoomIn { ZOOM_STEP } else { ZOOM_STEP.recip() };
                let action = self.engine.zoom_by(factor);
                self.dispatch_plot(action);
            }
            Command::ResetView => self.dispatch(Action::ResetView),
            Command::NudgeX0(dx) => self.dispatch(Action::NudgeX0(dx)),
            Command::NudgeOrder(delta) => self.dispatch(Action::NudgeOrder(delta)),
            Command::NudgeParam1(dir) => {
                let step = nudge_step(self.workspace.visual.param1);
                self.dispatch(Action::NudgeParam1(dir * step));
            }
            Command::NudgeParam2(dir) => {
                let step = nudge_step(self.workspace.visual.param2);
                self.dispatch(Action::NudgeParam2(dir * step));
            }
            Command::QuickQuestion(n) => self.quick_question(n),
            Command::Insert(c) => self.buffer().push(c),
            Command::Backspace => {
                self.buffer().pop();
            }
            Command::Submit => self.submit(),
            Command::Cancel => self.cancel(),
        }
    }

    fn buffer(&mut self) -> &mut String {
        match self.focus {
            Focus::Function => &mut self.function_buffer,
            _ => &mut self.question_buffer,
        }
    }

    fn step_by(&mut self, delta: isize) {
        let steps = self.workspace.manifest().steps;
        let Some(index) = self.workspace.step_index().checked_add_signed(delta) else {
            return;
        };
        if let Some(step) = steps.get(index) {
            self.dispatch(Action::SelectStep(step.id.to_string()));
        }
    }

    fn follow_prerequisite(&mut self, n: usize) {
        let Some(prereq) = self.workspace.step().prerequisites.get(n) else {
            return;
        };
        match prereq.topic {
            Some(topic) => {
                self.dispatch(Action::JumpToPrerequisite { topic, step: prereq.step.map(String::from) });
                self.status = format!("Jumped to {}", prereq.name);
            }
            None => self.status = format!("{} has no page of its own", prereq.name),
        }
    }

    fn submit(&mut self) {
        match self.focus {
            Focus::Function => {
                let function = std::mem::take(&mut self.function_buffer);
                self.dispatch(Action::SetFunction(function));
                self.focus = Focus::Plot;
            }
            Focus::Chat => self.send_question(),
            Focus::Navigator | Focus::Plot => {}
        }
    }

    fn cancel(&mut self) {
        match self.focus {
            Focus::Function => {
                self.function_buffer.clear();
                self.focus = Focus::Plot;
            }
            Focus::Chat if self.chat.is_waiting() => self.cancel_reply(),
            Focus::Chat => self.question_buffer.clear(),
            Focus::Navigator | Focus::Plot => {}
        }
    }

    // =========================================================================
    // CHAT
    // =========================================================================

    /// Offered only until the first question is asked.
    fn quick_question(&mut self, n: usize) {
        if !self.chat.is_empty() {
            return;
        }
        if let Some(question) = QUICK_QUESTIONS.get(n) {
            self.question_buffer = (*question).to_string();
            self.focus = Focus::Chat;
        }
    }

    fn send_question(&mut self) {
        let now = OffsetDateTime::now_utc();
        let turn = match self.chat.begin(&self.question_buffer, now) {
            Ok(turn) => turn,
            Err(e) => {
                self.status = e.localized().to_string();
                return;
            }
        };
        self.question_buffer.clear();
        let Some(llm) = self.llm.clone() else {
            self.chat.fail(now);
            self.status = "Tutor offline: set an API key to chat".to_string();
            return;
        };
        let request = build_request(&TutorContext::capture(&self.workspace), &turn, self.settings);
        self.reply = Some(spawn_reply(llm, request, turn.id, self.events_tx.clone()));
    }

    fn cancel_reply(&mut self) {
        if let Some(reply) = self.reply.take() {
            reply.cancel();
        }
        self.chat.cancel();
    }

    /// Apply every chat event that has arrived since the last tick.
    pub fn drain_chat_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            if !event.apply(&mut self.chat, OffsetDateTime::now_utc()) {
                continue;
            }
            match event {
                ChatEvent::Finished { .. } => self.reply = None,
                ChatEvent::Failed { error, .. } => {
                    self.reply = None;
                    self.status = format!("Tutor error: {error}");
                }
                ChatEvent::Started { .. } | ChatEvent::Fragment { .. } => {}
            }
        }
    }

    // =========================================================================
    // MOUSE
    // =========================================================================

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let area = view::inner(self.plot_area);
        if area.width == 0 || area.height == 0 {
            return;
        }
        let inside = cell_to_pixel(area, mouse.column, mouse.row);
        let col = mouse.column.clamp(area.x, area.x + area.width - 1);
        let row = mouse.row.clamp(area.y, area.y + area.height - 1);
        let Some(clamped) = cell_to_pixel(area, col, row) else {
            return;
        };
        let action = match mouse.kind {
            MouseEventKind::Down(button) => {
                if inside.is_none() {
                    return;
                }
                self.focus = Focus::Plot;
                self.engine.on_pointer_down(clamped, plot_button(button))
            }
            MouseEventKind::Drag(_) => self.engine.on_pointer_move(clamped),
            MouseEventKind::Up(button) => self.engine.on_pointer_up(clamped, plot_button(button)),
            MouseEventKind::ScrollUp => match inside {
                Some(p) => self.engine.on_wheel(p, WheelDelta::UP),
                None => return,
            },
            MouseEventKind::ScrollDown => match inside {
                Some(p) => self.engine.on_wheel(p, WheelDelta::DOWN),
                None => return,
            },
            _ => return,
        };
        self.dispatch_plot(action);
    }

    // =========================================================================
    // DRAW
    // =========================================================================

    pub fn draw(&mut self, frame: &mut Frame<'_>) {
        let panes = view::layout(frame.size());
        self.plot_area = panes.plot;
        let plot_inner = view::inner(panes.plot);
        self.engine
            .set_viewport(f64::from(plot_inner.width) * 2.0, f64::from(plot_inner.height) * 4.0);
        let plot = self.engine.frame(&self.workspace.visual);

        let focus = self.focus;
        frame.render_widget(view::navigator(&self.workspace, self.cursor, focus == Focus::Navigator), panes.navigator);
        frame.render_widget(view::steps(&self.workspace, false), panes.steps);
        let title = format!("y = {}", self.workspace.visual.function);
        frame.render_widget(canvas::render::plot_canvas(&plot, view::pane(&title, focus == Focus::Plot)), panes.plot);
        let editor = (focus == Focus::Function).then_some(self.function_buffer.as_str());
        frame.render_widget(
            view::controls(&self.workspace, &plot, editor, focus == Focus::Function),
            panes.controls,
        );
        frame.render_widget(view::chat(&self.chat, panes.chat, false), panes.chat);
        frame.render_widget(
            view::prompt(&self.question_buffer, focus == Focus::Chat, self.chat.is_waiting()),
            panes.prompt,
        );
        let status = if self.status.is_empty() { HELP } else { self.status.as_str() };
        frame.render_widget(view::status(status), panes.status);
    }
}

fn plot_button(button: MouseButton) -> Button {
    match button {
        MouseButton::Left => Button::Primary,
        MouseButton::Middle => Button::Middle,
        MouseButton::Right => Button::Secondary,
    }
}

// =============================================================================
// TERMINAL
// =============================================================================

/// Restores the terminal when dropped, including on early return.
struct TerminalGuard {
    mouse: bool,
}

impl TerminalGuard {
    fn enter(mouse: bool) -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        if mouse {
            execute!(stdout, EnableMouseCapture)?;
        }
        Ok(Self { mouse })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        if self.mouse {
            let _ = execute!(stdout, DisableMouseCapture);
        }
        let _ = execute!(stdout, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

/// Run the UI until the user quits. Must be called inside a tokio runtime.
///
/// # Errors
///
/// Returns an error if the terminal cannot be acquired or drawn to.
pub fn run(mut app: App, options: UiOptions) -> io::Result<()> {
    let _guard = TerminalGuard::enter(options.mouse)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    terminal.clear()?;

    while !app.should_quit() {
        app.drain_chat_events();
        terminal.draw(|frame| app.draw(frame))?;
        if !event::poll(TICK)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) => {
                if let Some(command) = map_key(app.focus(), key) {
                    app.handle_command(command);
                }
            }
            Event::Mouse(mouse) => app.handle_mouse(mouse),
            _ => {}
        }
    }
    terminal.show_cursor()?;
    Ok(())
}
