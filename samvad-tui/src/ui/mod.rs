//! UI rendering
//!
//! Pure rendering functions that transform state into terminal frames.
//! Render functions have no side effects; the only stateful widget is the
//! modal textarea, which the event loop owns and passes in by reference.

pub mod forum;
pub mod thoughts;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use tui_textarea::TextArea;

use crate::app::{AppState, Screen};

/// Render the application UI
pub fn render(frame: &mut Frame, state: &AppState, textarea: &TextArea) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Tab bar
            Constraint::Min(3),    // Screen content
            Constraint::Length(3), // Status bar
        ])
        .split(area);

    render_tab_bar(frame, chunks[0], state);

    match state.current_screen {
        Screen::Forum => forum::render(frame, chunks[1], state),
        Screen::Thoughts => thoughts::render(frame, chunks[1], state),
    }

    render_status_bar(frame, chunks[2], state);

    // Overlays stack on top of everything.
    if state.forum.ask_modal.is_some() {
        render_ask_modal(frame, area, state, textarea);
    }
    if state.forum.answer_modal.is_some() {
        render_answer_modal(frame, area, state, textarea);
    }
    if state.help_visible {
        render_help_overlay(frame, area);
    }
    if let Some(ref error) = state.error {
        render_error_overlay(frame, area, error);
    }
}

fn render_tab_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let tab = |label: &str, screen: Screen| {
        if state.current_screen == screen {
            Span::styled(
                format!(" {} ", label),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(format!(" {} ", label), Style::default().fg(Color::Gray))
        }
    };

    let line = Line::from(vec![
        tab("Forum", Screen::Forum),
        Span::raw(" "),
        tab("Thoughts", Screen::Thoughts),
        Span::styled("  (Tab to switch)", Style::default().fg(Color::DarkGray)),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let content = if let Some(ref message) = state.status.message {
        vec![Line::from(Span::styled(
            message.clone(),
            Style::default().fg(Color::Green),
        ))]
    } else {
        let hints = match state.current_screen {
            Screen::Forum if state.forum.search_focused => {
                "Type to search | Enter/Esc: done".to_string()
            }
            Screen::Forum => {
                "a: Ask | r: Answer | /: Search | c: Category | l/u/d: Vote | F1: Help | q: Quit"
                    .to_string()
            }
            Screen::Thoughts => "j/k: Select | l/u: Vote | F1: Help | q: Quit".to_string(),
        };
        vec![Line::from(Span::styled(
            hints,
            Style::default().fg(Color::Gray),
        ))]
    };

    let block = Block::default().borders(Borders::ALL);
    frame.render_widget(Paragraph::new(content).block(block), area);
}

fn render_ask_modal(frame: &mut Frame, area: Rect, state: &AppState, textarea: &TextArea) {
    let popup = centered_rect(70, 60, area);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .title(" Ask a Question ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Text input
            Constraint::Length(1), // Category picker
            Constraint::Length(1), // Hints
        ])
        .split(inner);

    frame.render_widget(textarea, chunks[0]);

    if let Some(ref modal) = state.forum.ask_modal {
        let category_line = Line::from(vec![
            Span::raw("Category: "),
            Span::styled(
                modal.category.as_str(),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  (Ctrl+K to change)", Style::default().fg(Color::DarkGray)),
        ]);
        frame.render_widget(Paragraph::new(category_line), chunks[1]);
    }

    let hints = Line::from(Span::styled(
        "Ctrl+S: Add | Esc: Cancel",
        Style::default().fg(Color::Gray),
    ));
    frame.render_widget(Paragraph::new(hints), chunks[2]);
}

fn render_answer_modal(frame: &mut Frame, area: Rect, state: &AppState, textarea: &TextArea) {
    let popup = centered_rect(70, 50, area);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .title(" Add an Answer ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Question being answered
            Constraint::Min(3),    // Text input
            Constraint::Length(1), // Hints
        ])
        .split(inner);

    if let Some(ref modal) = state.forum.answer_modal {
        let question_text = state
            .questions
            .iter()
            .find(|q| q.id == modal.question_id)
            .map(|q| q.text.as_str())
            .unwrap_or("");
        let header = Line::from(vec![
            Span::styled("Q: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(question_text),
        ]);
        frame.render_widget(Paragraph::new(header), chunks[0]);
    }

    frame.render_widget(textarea, chunks[1]);

    let hints = Line::from(Span::styled(
        "Ctrl+S: Add | Esc: Cancel",
        Style::default().fg(Color::Gray),
    ));
    frame.render_widget(Paragraph::new(hints), chunks[2]);
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup = centered_rect(60, 70, area);

    let help_text = vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Global:"),
        Line::from("  q        - Quit"),
        Line::from("  F1       - Toggle help"),
        Line::from("  Tab      - Switch tab"),
        Line::from("  F2 / F3  - Forum / Thoughts"),
        Line::from(""),
        Line::from("Forum:"),
        Line::from("  j/k      - Select question"),
        Line::from("  J/K      - Select answer"),
        Line::from("  l/u/d    - Like / unlike / dislike question"),
        Line::from("  L/D      - Like / dislike answer"),
        Line::from("  /        - Search"),
        Line::from("  c        - Cycle category filter"),
        Line::from("  a        - Ask a question"),
        Line::from("  r        - Answer selected question"),
        Line::from(""),
        Line::from("Thoughts:"),
        Line::from("  j/k, l/u - Select and vote"),
        Line::from(""),
        Line::from("Press Esc or F1 to close"),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(Clear, popup);
    frame.render_widget(help, popup);
}

fn render_error_overlay(frame: &mut Frame, area: Rect, error: &str) {
    let popup = centered_rect(70, 30, area);

    let error_text = vec![
        Line::from(Span::styled(
            "Error",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(error),
        Line::from(""),
        Line::from("Press Esc to dismiss"),
    ];

    let widget = Paragraph::new(error_text)
        .block(
            Block::default()
                .title(" Error ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Center);

    frame.render_widget(Clear, popup);
    frame.render_widget(widget, popup);
}

/// Render a centered loading placeholder (cosmetic startup delay)
pub(crate) fn render_loading(frame: &mut Frame, area: Rect, message: &str) {
    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            message.to_string(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
    ])
    .alignment(Alignment::Center);

    frame.render_widget(text, area);
}

/// Glyph helpers honoring the unicode fallback
pub(crate) fn like_glyph(state: &AppState) -> &'static str {
    if state.config.unicode_enabled {
        "👍"
    } else {
        "+"
    }
}

pub(crate) fn dislike_glyph(state: &AppState) -> &'static str {
    if state.config.unicode_enabled {
        "👎"
    } else {
        "-"
    }
}

/// Helper to create centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
