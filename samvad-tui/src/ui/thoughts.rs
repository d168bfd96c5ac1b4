//! Thoughts tab rendering: practitioner reflections with like counts

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use super::{like_glyph, render_loading};
use crate::app::AppState;

/// Render the thoughts screen
pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    if state.thoughts_screen.loading {
        render_loading(frame, area, "Loading thoughts...");
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(3),    // List
        ])
        .split(area);

    let header = Paragraph::new(Line::from(Span::styled(
        "Thoughts & Ideas",
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(header, chunks[0]);

    let items: Vec<ListItem> = state
        .thoughts
        .iter()
        .map(|thought| {
            let lines = vec![
                Line::from(Span::raw(format!("\"{}\"", thought.thought))),
                Line::from(vec![
                    Span::styled(
                        format!("— {}", thought.doctor),
                        Style::default().fg(Color::Gray),
                    ),
                    Span::styled(
                        format!("   {} {}", like_glyph(state), thought.likes),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]),
                Line::from(""),
            ];
            ListItem::new(lines)
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(" Expert Thoughts ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut list_state = ListState::default();
    list_state.select(Some(state.thoughts_screen.selected));

    frame.render_stateful_widget(list, chunks[1], &mut list_state);
}
