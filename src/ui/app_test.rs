#![allow(clippy::float_cmp)]

use std::time::Duration;

use crossterm::event::KeyModifiers;
use curriculum::{TopicId, ViewTransform, catalog};
use futures::stream;
use ratatui::backend::TestBackend;

use super::*;
use crate::llm::{ChatRequest, ChatResponse, LlmError, TextStream};
use crate::state::chat::FALLBACK_REPLY;

struct EchoLlm;

#[async_trait::async_trait]
impl LlmChat for EchoLlm {
    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, LlmError> {
        Ok(ChatResponse { text: request.message.clone(), model: "echo".into(), stop_reason: None })
    }

    async fn chat_stream(&self, request: &ChatRequest) -> Result<TextStream, LlmError> {
        let parts = vec![Ok("you asked: ".to_string()), Ok(request.message.clone())];
        Ok(Box::pin(stream::iter(parts)))
    }
}

fn app(topic: TopicId) -> App {
    App::new(Workspace::new(topic), None, ReplySettings::default())
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_command(Command::Insert(c));
    }
}

fn drawn(app: &mut App) {
    let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
    terminal.draw(|frame| app.draw(frame)).unwrap();
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent { kind, column, row, modifiers: KeyModifiers::NONE }
}

// --- Navigation ---

#[test]
fn steps_advance_and_stop_at_ends() {
    let mut app = app(TopicId::TaylorSeries);
    app.handle_command(Command::StepPrev);
    assert_eq!(app.workspace().step_id, "t0");
    app.handle_command(Command::StepNext);
    app.handle_command(Command::StepNext);
    assert_eq!(app.workspace().step_id, "t2");
    assert_eq!(app.workspace().visual.order, 2);
}

#[test]
fn unit_change_then_choose_selects_first_topic() {
    let mut app = app(TopicId::LimitDefinition);
    let next = (app.workspace().unit + 1) % catalog::UNITS.len();
    app.handle_command(Command::UnitNext);
    app.handle_command(Command::Choose);
    let expected = catalog::UNITS[next].topics().next().unwrap().id;
    assert_eq!(app.workspace().topic, expected);
}

#[test]
fn cursor_stays_in_unit() {
    let mut app = app(TopicId::LimitDefinition);
    for _ in 0..50 {
        app.handle_command(Command::CursorDown);
    }
    app.handle_command(Command::Choose);
    let last = catalog::unit_of(TopicId::LimitDefinition).topics().last().unwrap().id;
    assert_eq!(app.workspace().topic, last);
}

#[test]
fn linked_prerequisite_jumps() {
    let mut app = app(TopicId::DerivativeRules);
    app.handle_command(Command::FollowPrerequisite(0));
    assert_eq!(app.workspace().topic, TopicId::DerivativeBasic);
    assert_eq!(app.workspace().step_id, "d3");
}

#[test]
fn label_prerequisite_only_reports() {
    let mut app = app(TopicId::ChainRule);
    app.handle_command(Command::FollowPrerequisite(1));
    assert_eq!(app.workspace().topic, TopicId::ChainRule);
    app.handle_command(Command::FollowPrerequisite(9));
    assert_eq!(app.workspace().topic, TopicId::ChainRule);
}

// --- Plot ---

#[test]
fn function_editor_commits_on_submit() {
    let mut app = app(TopicId::LimitDefinition);
    app.handle_command(Command::EditFunction);
    assert_eq!(app.focus(), Focus::Function);
    for _ in 0..app.workspace().visual.function.len() {
        app.handle_command(Command::Backspace);
    }
    type_text(&mut app, "sin(x)");
    app.handle_command(Command::Submit);
    assert_eq!(app.workspace().visual.function, "sin(x)");
    assert_eq!(app.focus(), Focus::Plot);
}

#[test]
fn function_editor_cancel_discards() {
    let mut app = app(TopicId::LimitDefinition);
    let before = app.workspace().visual.function.clone();
    app.handle_command(Command::EditFunction);
    type_text(&mut app, "+1");
    app.handle_command(Command::Cancel);
    assert_eq!(app.workspace().visual.function, before);
}

#[test]
fn zoom_and_reset_update_view() {
    let mut app = app(TopicId::LimitDefinition);
    drawn(&mut app);
    app.handle_command(Command::ZoomIn);
    assert_eq!(app.workspace().visual.view.k, ZOOM_STEP);
    app.handle_command(Command::ResetView);
    assert_eq!(app.workspace().visual.view, ViewTransform::IDENTITY);
}

#[test]
fn params_nudge_by_magnitude() {
    let mut app = app(TopicId::LimitDefinition);
    let p1 = app.workspace().visual.param1;
    app.handle_command(Command::NudgeParam1(1.0));
    assert!((app.workspace().visual.param1 - (p1 + nudge_step(p1))).abs() < 1e-12);
}

#[test]
fn wheel_over_plot_zooms_and_drag_pans() {
    let mut app = app(TopicId::LimitDefinition);
    drawn(&mut app);
    let area = view::inner(app.plot_area);
    let (col, row) = (area.x + area.width / 2, area.y + area.height / 2);

    app.handle_mouse(mouse(MouseEventKind::ScrollUp, col, row));
    assert_eq!(app.workspace().visual.view.k, ZOOM_STEP);

    drawn(&mut app);
    let before = app.workspace().visual.view;
    app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), col, row));
    app.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), col + 3, row));
    app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), col + 3, row));
    assert_eq!(app.workspace().visual.view.x, before.x + 6.0);
    assert_eq!(app.focus(), Focus::Plot);
}

#[test]
fn wheel_outside_plot_is_ignored() {
    let mut app = app(TopicId::LimitDefinition);
    drawn(&mut app);
    app.handle_mouse(mouse(MouseEventKind::ScrollUp, 0, 0));
    assert_eq!(app.workspace().visual.view, ViewTransform::IDENTITY);
}

// --- Chat ---

#[test]
fn offline_question_gets_fallback() {
    let mut app = app(TopicId::LimitDefinition);
    app.handle_command(Command::FocusNext);
    app.handle_command(Command::FocusNext);
    assert_eq!(app.focus(), Focus::Chat);
    type_text(&mut app, "what is epsilon?");
    app.handle_command(Command::Submit);
    let messages = app.chat().messages();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[1].content, FALLBACK_REPLY);
    assert!(!app.chat().is_waiting());
}

#[test]
fn blank_question_is_not_sent() {
    let mut app = app(TopicId::LimitDefinition);
    app.focus = Focus::Chat;
    type_text(&mut app, "   ");
    app.handle_command(Command::Submit);
    assert!(app.chat().messages().is_empty());
}

#[test]
fn quick_question_fills_prompt_until_first_question() {
    let mut app = app(TopicId::LimitDefinition);
    app.handle_command(Command::QuickQuestion(1));
    assert_eq!(app.focus(), Focus::Chat);
    assert_eq!(app.question_buffer, "What is the geometric meaning?");

    app.handle_command(Command::Submit);
    assert_eq!(app.chat().messages()[0].content, "What is the geometric meaning?");
    app.handle_command(Command::QuickQuestion(0));
    assert!(app.question_buffer.is_empty());
}

#[test]
fn quick_question_out_of_range_is_ignored() {
    let mut app = app(TopicId::LimitDefinition);
    app.handle_command(Command::QuickQuestion(7));
    assert!(app.question_buffer.is_empty());
    assert_eq!(app.focus(), Focus::Navigator);
}

#[tokio::test]
async fn online_question_streams_reply() {
    let llm: Arc<dyn LlmChat> = Arc::new(EchoLlm);
    let mut app = App::new(Workspace::default(), Some(llm), ReplySettings::default());
    app.focus = Focus::Chat;
    type_text(&mut app, "why?");
    app.handle_command(Command::Submit);
    assert!(app.chat().is_waiting());

    for _ in 0..100 {
        app.drain_chat_events();
        if !app.chat().is_waiting() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    assert!(!app.chat().is_waiting());
    assert_eq!(app.chat().messages().last().unwrap().content, "you asked: why?");
}

#[test]
fn draw_renders_every_pane() {
    let mut app = app(TopicId::TaylorSeries);
    let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
    terminal.draw(|frame| app.draw(frame)).unwrap();
    let text: String = terminal.backend().buffer().content.iter().map(|c| c.symbol()).collect();
    assert!(text.contains("Topics"));
    assert!(text.contains("Controls"));
    assert!(text.contains("Tutor"));
    assert!(text.contains("y = exp(x)"));
}
