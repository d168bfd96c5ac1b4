//! samvad-tui - Terminal UI for the Samvad community forum
//!
//! Two tabbed feeds (Q&A forum and expert thoughts) over a single shared
//! in-memory store: category filtering, free-text search, votes, and
//! modal creation flows for questions and answers.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders};
use tui_textarea::TextArea;

use samvad_tui::{
    app::{event::EventHandler, event::TuiEvent, key_to_action, reduce, Action, AppState, Screen},
    error::Result,
    services::ServiceHandle,
    terminal::{install_panic_hook, restore_terminal, setup_terminal, Tui},
    ui,
};

use libsamvad::service::StoreEvent;
use libsamvad::SamvadError;

/// Cosmetic startup delay per screen
const LOADING_DELAY: Duration = Duration::from_secs(1);

fn main() -> Result<()> {
    // Errors only; anything louder would fight the alternate screen.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("error")),
        )
        .with_writer(std::io::stderr)
        .init();

    install_panic_hook();

    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal);
    restore_terminal(terminal)?;

    result
}

fn run_app(terminal: &mut Tui) -> Result<()> {
    let services = ServiceHandle::new()?;
    let mut store_events = services.subscribe();

    // The snapshot is ready immediately; the loading placeholders are a
    // cosmetic delay, not real work.
    let mut state = AppState::new();
    // The config file's tick rate applies unless the env var overrode it.
    if std::env::var("SAMVAD_TUI_TICK_MS").is_err() {
        state.config.tick_rate_ms = services.tick_rate_ms();
    }
    state = refresh(&services, state);

    let mut textarea = TextArea::default();

    let forum_loading_started = Instant::now();
    let mut thoughts_loading_started: Option<Instant> = None;

    let event_handler = EventHandler::new(state.config.tick_rate_ms);

    loop {
        terminal.draw(|frame| ui::render(frame, &state, &textarea))?;

        let tui_event = event_handler.next()?;

        let action = match tui_event {
            TuiEvent::Key(key) => {
                if state.modal_open() && !is_modal_hotkey(key) {
                    // Let the textarea consume the key, then sync its
                    // content into state.
                    textarea.input(key);
                    let content = textarea.lines().join("\n");
                    if state.forum.ask_modal.is_some() {
                        Some(Action::AskInputChanged(content))
                    } else {
                        Some(Action::AnswerInputChanged(content))
                    }
                } else {
                    key_to_action(&state, key)
                }
            }
            TuiEvent::Resize(w, h) => Some(Action::Resize(w, h)),
            TuiEvent::Tick => Some(Action::Tick),
        };

        let Some(action) = action else {
            continue;
        };

        // A freshly opened modal starts from an empty textarea.
        if matches!(action, Action::OpenAskModal | Action::OpenAnswerModal) {
            textarea = modal_textarea(&action);
        }

        state = reduce(state, action.clone());

        // Side effects for the semantic action.
        match action {
            Action::Tick => {
                if state.forum.loading && forum_loading_started.elapsed() >= LOADING_DELAY {
                    state = reduce(state, Action::LoadingFinished(Screen::Forum));
                }
                if let Some(started) = thoughts_loading_started {
                    if state.thoughts_screen.loading && started.elapsed() >= LOADING_DELAY {
                        state = reduce(state, Action::LoadingFinished(Screen::Thoughts));
                    }
                }
            }

            Action::NavigateTo(Screen::Thoughts) => {
                // The thoughts tab shows its loading placeholder from the
                // first time it becomes visible.
                if thoughts_loading_started.is_none() {
                    thoughts_loading_started = Some(Instant::now());
                }
            }

            Action::LikeSelected => {
                match state.current_screen {
                    Screen::Forum => {
                        if let Some(id) = state.selected_question().map(|q| q.id) {
                            services.like_question(id)?;
                        }
                    }
                    Screen::Thoughts => {
                        if let Some(id) = state.selected_thought().map(|t| t.id) {
                            services.like_thought(id)?;
                        }
                    }
                }
                state = refresh(&services, state);
            }

            Action::UnlikeSelected => {
                match state.current_screen {
                    Screen::Forum => {
                        if let Some(id) = state.selected_question().map(|q| q.id) {
                            services.unlike_question(id)?;
                        }
                    }
                    Screen::Thoughts => {
                        if let Some(id) = state.selected_thought().map(|t| t.id) {
                            services.unlike_thought(id)?;
                        }
                    }
                }
                state = refresh(&services, state);
            }

            Action::DislikeSelected => {
                // Thoughts carry no dislike counter; only the forum reacts.
                if state.current_screen == Screen::Forum {
                    if let Some(id) = state.selected_question().map(|q| q.id) {
                        services.dislike_question(id)?;
                        state = refresh(&services, state);
                    }
                }
            }

            Action::LikeSelectedAnswer | Action::DislikeSelectedAnswer => {
                let target = state
                    .selected_question()
                    .map(|q| q.id)
                    .zip(state.selected_answer().map(|a| a.id));
                if let Some((question_id, answer_id)) = target {
                    if matches!(action, Action::LikeSelectedAnswer) {
                        services.like_answer(question_id, answer_id)?;
                    } else {
                        services.dislike_answer(question_id, answer_id)?;
                    }
                    state = refresh(&services, state);
                }
            }

            Action::SubmitAsk => {
                if let Some(modal) = state.forum.ask_modal.clone() {
                    match services.ask(&modal.text, modal.category) {
                        Ok(_) => {
                            state = reduce(state, Action::CloseAskModal);
                            state = refresh(&services, state);
                        }
                        Err(SamvadError::InvalidInput(message)) => {
                            state = reduce(state, Action::ShowError(message));
                        }
                        Err(e) => {
                            state = reduce(state, Action::ShowError(e.to_string()));
                        }
                    }
                }
            }

            Action::SubmitAnswer => {
                if let Some(modal) = state.forum.answer_modal.clone() {
                    match services.answer(modal.question_id, &modal.text) {
                        Ok(_) => {
                            state = reduce(state, Action::CloseAnswerModal);
                            state = refresh(&services, state);
                        }
                        Err(SamvadError::InvalidInput(message)) => {
                            state = reduce(state, Action::ShowError(message));
                        }
                        Err(e) => {
                            state = reduce(state, Action::ShowError(e.to_string()));
                        }
                    }
                }
            }

            _ => {}
        }

        // Surface store events in the status bar.
        while let Ok(event) = store_events.try_recv() {
            tracing::trace!(?event, "store event");
            let message = match event {
                StoreEvent::QuestionAsked { .. } => Some("Question posted.".to_string()),
                StoreEvent::AnswerAdded { .. } => Some("Answer added.".to_string()),
                StoreEvent::PostLiked { likes, .. } | StoreEvent::PostUnliked { likes, .. } => {
                    Some(format!("Likes: {}", likes))
                }
                StoreEvent::QuestionDisliked { dislikes, .. } => {
                    Some(format!("Dislikes: {}", dislikes))
                }
                StoreEvent::AnswerVoted { .. } => Some("Vote recorded.".to_string()),
                StoreEvent::DataSeeded { .. } | StoreEvent::CommentAdded { .. } => None,
            };
            if let Some(message) = message {
                state = reduce(state, Action::SetStatus(message));
            }
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Pull a fresh snapshot into the app state
fn refresh(services: &ServiceHandle, state: AppState) -> AppState {
    let (questions, thoughts) = services.snapshot();
    reduce(state, Action::DataRefreshed { questions, thoughts })
}

/// Keys that reach the keymap even while a modal textarea has focus
fn is_modal_hotkey(key: KeyEvent) -> bool {
    matches!(
        (key.code, key.modifiers),
        (KeyCode::Esc, _)
            | (KeyCode::Char('s'), KeyModifiers::CONTROL)
            | (KeyCode::Char('k'), KeyModifiers::CONTROL)
            | (KeyCode::Char('c'), KeyModifiers::CONTROL)
    )
}

/// Fresh textarea configured for the modal being opened
fn modal_textarea(action: &Action) -> TextArea<'static> {
    let mut textarea = TextArea::default();
    let placeholder = match action {
        Action::OpenAskModal => "Type your question here",
        _ => "Type your answer here",
    };
    textarea.set_placeholder_text(placeholder);
    textarea.set_block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green)),
    );
    textarea
}
