//! Forum tab rendering: banner, search, category filter, question list

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use libsamvad::types::{Category, CategoryFilter, Question};

use super::{dislike_glyph, like_glyph, render_loading};
use crate::app::AppState;

/// Render the forum screen
pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    if state.forum.loading {
        render_loading(frame, area, "Loading forum discussions...");
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Banner
            Constraint::Length(3), // Search bar
            Constraint::Length(1), // Category filter
            Constraint::Min(3),    // Question list
        ])
        .split(area);

    render_banner(frame, chunks[0]);
    render_search_bar(frame, chunks[1], state);
    render_category_filter(frame, chunks[2], state);
    render_question_list(frame, chunks[3], state);
}

fn render_banner(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "Welcome to Samvad Forum",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Join discussions, ask questions, and learn from the community.",
            Style::default().fg(Color::Gray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_search_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let border = if state.forum.search_focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Green)
    };

    let content = if state.forum.search.is_empty() && !state.forum.search_focused {
        Span::styled(
            "Search questions... (press /)",
            Style::default().fg(Color::DarkGray),
        )
    } else {
        Span::raw(state.forum.search.as_str())
    };

    let widget = Paragraph::new(Line::from(content)).block(
        Block::default()
            .title(" Search ")
            .borders(Borders::ALL)
            .border_style(border),
    );
    frame.render_widget(widget, area);
}

fn render_category_filter(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut spans = Vec::new();
    let mut push = |label: &str, active: bool| {
        let style = if active {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Green)
        };
        spans.push(Span::styled(format!(" {} ", label), style));
        spans.push(Span::raw(" "));
    };

    push("All", state.forum.category == CategoryFilter::All);
    for category in Category::ALL {
        push(
            category.as_str(),
            state.forum.category == CategoryFilter::Only(category),
        );
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_question_list(frame: &mut Frame, area: Rect, state: &AppState) {
    let visible = state.visible_questions();

    let block = Block::default()
        .title(" Trending Discussions ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    if visible.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No questions found.",
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC),
        )))
        .block(block)
        .alignment(Alignment::Center);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = visible
        .iter()
        .enumerate()
        .map(|(idx, question)| question_item(state, question, idx == state.forum.selected))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut list_state = ListState::default();
    list_state.select(Some(state.forum.selected));

    frame.render_stateful_widget(list, area, &mut list_state);
}

fn question_item<'a>(state: &AppState, question: &'a Question, selected: bool) -> ListItem<'a> {
    let mut lines = Vec::new();

    lines.push(Line::from(Span::styled(
        question.category.as_str(),
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        question.text.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        format!(
            "{} {}   {} {}   {} answers",
            like_glyph(state),
            question.likes,
            dislike_glyph(state),
            question.dislikes,
            question.answers.len()
        ),
        Style::default().fg(Color::Gray),
    )));

    for (idx, answer) in question.answers.iter().enumerate() {
        let cursor = if selected && idx == state.forum.answer_cursor {
            "▸ "
        } else {
            "  "
        };
        lines.push(Line::from(vec![
            Span::raw(format!("  {}", cursor)),
            Span::styled(answer.text.clone(), Style::default().fg(Color::Green)),
            Span::styled(
                format!(
                    "   {} {}  {} {}",
                    like_glyph(state),
                    answer.likes,
                    dislike_glyph(state),
                    answer.dislikes
                ),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }

    lines.push(Line::from(""));

    ListItem::new(lines)
}
