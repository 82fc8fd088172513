//! Pane layout and widget builders.
//!
//! Every builder is a pure function of application state so a frame can be
//! rendered into a test buffer.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use canvas::PlotFrame;
use curriculum::{TopicId, catalog};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::llm::Role;
use crate::state::chat::QUICK_QUESTIONS;
use crate::state::{ChatState, Workspace};

/// Screen regions, recomputed every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Panes {
    pub navigator: Rect,
    pub steps: Rect,
    pub plot: Rect,
    pub controls: Rect,
    pub chat: Rect,
    pub prompt: Rect,
    pub status: Rect,
}

#[must_use]
pub fn layout(area: Rect) -> Panes {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(24), Constraint::Min(30), Constraint::Percentage(30)])
        .split(rows[0]);
    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(45), Constraint::Min(5)])
        .split(columns[0]);
    let centre = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(7)])
        .split(columns[1]);
    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(3)])
        .split(columns[2]);
    Panes {
        navigator: left[0],
        steps: left[1],
        plot: centre[0],
        controls: centre[1],
        chat: right[0],
        prompt: right[1],
        status: rows[1],
    }
}

/// Inside of a bordered pane.
#[must_use]
pub fn inner(area: Rect) -> Rect {
    Block::default().borders(Borders::ALL).inner(area)
}

#[must_use]
pub fn pane(title: &str, focused: bool) -> Block<'static> {
    let border = if focused { Style::default().fg(Color::Cyan) } else { Style::default().fg(Color::DarkGray) };
    Block::default().title(format!(" {title} ")).borders(Borders::ALL).border_style(border)
}

fn dim() -> Style {
    Style::default().fg(Color::DarkGray)
}

fn bold() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

// =============================================================================
// NAVIGATION
// =============================================================================

pub fn navigator(ws: &Workspace, cursor: usize, focused: bool) -> Paragraph<'static> {
    let mut units = Vec::new();
    for (i, unit) in catalog::UNITS.iter().enumerate() {
        let style = if i == ws.unit { bold().fg(Color::Yellow) } else { dim() };
        units.push(Span::styled(unit.short_name, style));
        units.push(Span::raw(" "));
    }
    let mut lines = vec![Line::from(units)];

    let Some(unit) = catalog::UNITS.get(ws.unit) else {
        return Paragraph::new(lines).block(pane("Topics", focused));
    };
    lines.push(Line::from(Span::styled(unit.name, bold())));
    let mut index = 0;
    for chapter in unit.chapters {
        lines.push(Line::from(Span::styled(chapter.name, dim())));
        for entry in chapter.topics {
            let marker = if entry.id == ws.topic { "● " } else { "  " };
            let mut style = Style::default();
            if focused && index == cursor {
                style = style.add_modifier(Modifier::REVERSED);
            }
            if entry.id == ws.topic {
                style = style.fg(Color::Yellow);
            }
            lines.push(Line::from(vec![Span::raw(marker), Span::styled(entry.label, style)]));
            index += 1;
        }
    }
    Paragraph::new(lines).block(pane("Topics", focused))
}

pub fn steps(ws: &Workspace, focused: bool) -> Paragraph<'static> {
    let manifest = ws.manifest();
    let active = ws.step_index();
    let mut lines = Vec::new();
    for (i, step) in manifest.steps.iter().enumerate() {
        let (dot, style) = match i.cmp(&active) {
            std::cmp::Ordering::Less => ("◉", dim()),
            std::cmp::Ordering::Equal => ("●", bold().fg(Color::Cyan)),
            std::cmp::Ordering::Greater => ("○", Style::default()),
        };
        lines.push(Line::from(vec![Span::styled(format!("{dot} "), style), Span::styled(step.title, style)]));
        if i + 1 < manifest.steps.len() {
            lines.push(Line::from(Span::styled("│", dim())));
        }
    }

    let step = ws.step();
    lines.push(Line::raw(""));
    for (label, text) in [("Goal", step.goal), ("Assume", step.assumption), ("Formula", step.expression)] {
        if !text.is_empty() {
            lines.push(Line::from(vec![Span::styled(format!("{label}: "), dim()), Span::raw(text)]));
        }
    }
    if !step.explanation.is_empty() {
        lines.push(Line::raw(step.explanation));
    }
    if let Some(hint) = step.action_hint {
        lines.push(Line::from(Span::styled(format!("Try: {hint}"), Style::default().fg(Color::Green))));
    }
    for (i, prereq) in step.prerequisites.iter().enumerate() {
        let style = if prereq.topic.is_some() { Style::default().fg(Color::Magenta) } else { dim() };
        lines.push(Line::from(Span::styled(format!("[{}] {}", i + 1, prereq.name), style)));
    }
    Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(pane(manifest.name, focused))
}

// =============================================================================
// PLOT CONTROLS
// =============================================================================

/// Parameters, overlay notes and the parse error under the plot.
pub fn controls(ws: &Workspace, plot: &PlotFrame, editor: Option<&str>, focused: bool) -> Paragraph<'static> {
    let visual = &ws.visual;
    let mut lines = Vec::new();
    let function = match editor {
        Some(buffer) => Line::from(vec![
            Span::styled("f = ", dim()),
            Span::styled(format!("{buffer}▏"), Style::default().fg(Color::Yellow)),
        ]),
        None => Line::from(vec![Span::styled("f = ", dim()), Span::styled(visual.function.clone(), bold())]),
    };
    lines.push(function);
    if let Some(error) = plot.error {
        lines.push(Line::from(Span::styled(error, Style::default().fg(Color::Red))));
    }
    let mut params = vec![Span::raw(format!("x0 = {:.2}", visual.x0))];
    if visual.topic.is_expansion() || visual.topic == TopicId::SeriesConvergence {
        params.push(Span::raw(format!("  order = {}", visual.order)));
    }
    let labels = ws.manifest().param_labels;
    for (label, value) in labels.iter().zip([visual.param1, visual.param2]) {
        if let Some(label) = label {
            params.push(Span::raw(format!("  {label} = {value:.3}")));
        }
    }
    lines.push(Line::from(params));
    for note in &plot.scene.notes {
        lines.push(Line::from(Span::styled(note.clone(), Style::default().fg(Color::Cyan))));
    }
    Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(pane("Controls", focused))
}

// =============================================================================
// CHAT
// =============================================================================

/// Greedy word wrap to `width` columns; words longer than a line are split.
#[must_use]
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut out = Vec::new();
    for paragraph in text.split('\n') {
        let mut line = String::new();
        let mut len = 0;
        for word in paragraph.split_whitespace() {
            let mut chars: Vec<char> = word.chars().collect();
            if len > 0 && len + 1 + chars.len() > width {
                out.push(std::mem::take(&mut line));
                len = 0;
            }
            while chars.len() > width {
                let rest = chars.split_off(width);
                out.push(chars.into_iter().collect());
                chars = rest;
                len = 0;
            }
            if len > 0 {
                line.push(' ');
                len += 1;
            }
            len += chars.len();
            line.extend(chars);
        }
        out.push(line);
    }
    out
}

/// Transcript lines wrapped to `width`, newest at the bottom of `height`.
pub fn chat(chat: &ChatState, area: Rect, focused: bool) -> Paragraph<'static> {
    let body = inner(area);
    let width = usize::from(body.width);
    let mut lines: Vec<Line<'static>> = Vec::new();
    if chat.is_empty() {
        lines.push(Line::from(Span::styled("Quick questions", dim())));
        for (i, question) in QUICK_QUESTIONS.iter().enumerate() {
            lines.push(Line::from(vec![
                Span::styled(format!("F{} ", i + 1), bold().fg(Color::Yellow)),
                Span::raw(*question),
            ]));
        }
    }
    for msg in chat.messages() {
        let (who, style) = match msg.role {
            Role::User => ("you", bold().fg(Color::Yellow)),
            Role::Model => ("tutor", bold().fg(Color::Cyan)),
        };
        lines.push(Line::from(Span::styled(who, style)));
        lines.extend(wrap_text(&msg.content, width).into_iter().map(Line::raw));
        lines.push(Line::raw(""));
    }
    if chat.is_waiting() {
        lines.push(Line::from(Span::styled("tutor is thinking…", dim())));
    }
    let overflow = lines.len().saturating_sub(usize::from(body.height));
    let scroll = u16::try_from(overflow).unwrap_or(u16::MAX);
    Paragraph::new(lines).scroll((scroll, 0)).block(pane("Tutor", focused))
}

pub fn prompt(buffer: &str, focused: bool, waiting: bool) -> Paragraph<'static> {
    let line = if buffer.is_empty() && !focused {
        Line::from(Span::styled("Tab here to ask a question", dim()))
    } else if focused {
        Line::raw(format!("{buffer}▏"))
    } else {
        Line::raw(buffer.to_string())
    };
    let title = if waiting { "Ask (Esc stops the reply)" } else { "Ask" };
    Paragraph::new(line).block(pane(title, focused))
}

pub fn status(text: &str) -> Paragraph<'static> {
    Paragraph::new(Line::from(Span::styled(text.to_string(), dim())))
}
