//! Keybindings
//!
//! Translates raw key events into semantic actions, taking the current
//! state into account (text entry, open modals, overlays). Keeping the
//! translation out of the reducer means the event loop sees the semantic
//! action too and can run the matching side effect.
//!
//! Keys that belong to an open modal's text input never reach this map;
//! the event loop feeds them to the textarea and emits `*InputChanged`.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::actions::{Action, Screen};
use super::state::AppState;

/// Map a key event to an action, or `None` when the key does nothing
pub fn key_to_action(state: &AppState, key: KeyEvent) -> Option<Action> {
    // Ctrl+C always quits, even mid-input.
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Action::Quit);
    }

    // Overlays swallow everything except their dismiss keys.
    if state.error.is_some() {
        return match key.code {
            KeyCode::Esc | KeyCode::Enter => Some(Action::DismissError),
            _ => None,
        };
    }
    if state.help_visible {
        return match key.code {
            KeyCode::Esc | KeyCode::F(1) => Some(Action::HideHelp),
            _ => None,
        };
    }

    // Modal hotkeys (text keys were already consumed by the textarea).
    if state.forum.ask_modal.is_some() {
        return match (key.code, key.modifiers) {
            (KeyCode::Esc, _) => Some(Action::CloseAskModal),
            (KeyCode::Char('s'), KeyModifiers::CONTROL) => Some(Action::SubmitAsk),
            (KeyCode::Char('k'), KeyModifiers::CONTROL) => Some(Action::CycleAskCategory),
            _ => None,
        };
    }
    if state.forum.answer_modal.is_some() {
        return match (key.code, key.modifiers) {
            (KeyCode::Esc, _) => Some(Action::CloseAnswerModal),
            (KeyCode::Char('s'), KeyModifiers::CONTROL) => Some(Action::SubmitAnswer),
            _ => None,
        };
    }

    // Search entry: edits happen here, not in the textarea.
    if state.current_screen == Screen::Forum && state.forum.search_focused {
        return match key.code {
            KeyCode::Esc | KeyCode::Enter => Some(Action::BlurSearch),
            KeyCode::Backspace => {
                let mut search = state.forum.search.clone();
                search.pop();
                Some(Action::SearchChanged(search))
            }
            KeyCode::Char(c) => {
                let mut search = state.forum.search.clone();
                search.push(c);
                Some(Action::SearchChanged(search))
            }
            _ => None,
        };
    }

    // Global keys.
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::NONE) => return Some(Action::Quit),
        (KeyCode::F(1), _) => return Some(Action::ShowHelp),
        (KeyCode::F(2), _) => return Some(Action::NavigateTo(Screen::Forum)),
        (KeyCode::F(3), _) => return Some(Action::NavigateTo(Screen::Thoughts)),
        (KeyCode::Tab, _) => {
            return Some(Action::NavigateTo(state.current_screen.other()));
        }
        _ => {}
    }

    // Screen-specific keys.
    match state.current_screen {
        Screen::Forum => forum_key(key),
        Screen::Thoughts => thoughts_key(key),
    }
}

fn forum_key(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('/') => Some(Action::FocusSearch),
        KeyCode::Char('c') => Some(Action::CycleCategory),
        KeyCode::Char('j') | KeyCode::Down => Some(Action::SelectNext),
        KeyCode::Char('k') | KeyCode::Up => Some(Action::SelectPrev),
        KeyCode::Char('J') => Some(Action::SelectNextAnswer),
        KeyCode::Char('K') => Some(Action::SelectPrevAnswer),
        KeyCode::Char('l') => Some(Action::LikeSelected),
        KeyCode::Char('u') => Some(Action::UnlikeSelected),
        KeyCode::Char('d') => Some(Action::DislikeSelected),
        KeyCode::Char('L') => Some(Action::LikeSelectedAnswer),
        KeyCode::Char('D') => Some(Action::DislikeSelectedAnswer),
        KeyCode::Char('a') => Some(Action::OpenAskModal),
        KeyCode::Char('r') => Some(Action::OpenAnswerModal),
        _ => None,
    }
}

fn thoughts_key(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => Some(Action::SelectNext),
        KeyCode::Char('k') | KeyCode::Up => Some(Action::SelectPrev),
        KeyCode::Char('l') => Some(Action::LikeSelected),
        KeyCode::Char('u') => Some(Action::UnlikeSelected),
        _ => None,
    }
}
