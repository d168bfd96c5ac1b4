//! Pure reducer function for state transitions
//!
//! Following the shape `(State, Action) -> State`: the reducer computes new
//! state values and nothing else. All business logic and store mutation
//! happens outside, in the event loop; the results come back in as
//! `DataRefreshed` and overlay actions.

use super::actions::{Action, Screen};
use super::state::{AnswerModalState, AppState, AskModalState, StatusBarState};

/// Pure reducer function
///
/// Takes current state and an action, returns new state. Deterministic:
/// no I/O, no clock, no store access.
pub fn reduce(state: AppState, action: Action) -> AppState {
    match action {
        // === UI events ===
        Action::Tick => state,
        Action::Resize(_, _) => state, // Terminal auto-handles resize

        // === Navigation ===
        Action::NavigateTo(screen) => AppState {
            current_screen: screen,
            ..state
        },

        Action::Quit => AppState {
            should_quit: true,
            ..state
        },

        Action::ShowHelp => AppState {
            help_visible: true,
            ..state
        },

        Action::HideHelp => AppState {
            help_visible: false,
            ..state
        },

        Action::LoadingFinished(screen) => match screen {
            Screen::Forum => {
                let mut forum = state.forum.clone();
                forum.loading = false;
                AppState { forum, ..state }
            }
            Screen::Thoughts => {
                let mut thoughts_screen = state.thoughts_screen.clone();
                thoughts_screen.loading = false;
                AppState {
                    thoughts_screen,
                    ..state
                }
            }
        },

        // === Forum screen ===
        Action::FocusSearch => {
            let mut forum = state.forum.clone();
            forum.search_focused = true;
            AppState { forum, ..state }
        }

        Action::BlurSearch => {
            let mut forum = state.forum.clone();
            forum.search_focused = false;
            AppState { forum, ..state }
        }

        Action::SearchChanged(search) => {
            let mut forum = state.forum.clone();
            forum.search = search;
            forum.selected = 0;
            forum.answer_cursor = 0;
            AppState { forum, ..state }
        }

        Action::CycleCategory => {
            let mut forum = state.forum.clone();
            forum.category = forum.category.next();
            forum.selected = 0;
            forum.answer_cursor = 0;
            AppState { forum, ..state }
        }

        Action::SelectNext => match state.current_screen {
            Screen::Forum => {
                let last = state.visible_questions().len().saturating_sub(1);
                let mut forum = state.forum.clone();
                forum.selected = (forum.selected + 1).min(last);
                forum.answer_cursor = 0;
                AppState { forum, ..state }
            }
            Screen::Thoughts => {
                let last = state.thoughts.len().saturating_sub(1);
                let mut thoughts_screen = state.thoughts_screen.clone();
                thoughts_screen.selected = (thoughts_screen.selected + 1).min(last);
                AppState {
                    thoughts_screen,
                    ..state
                }
            }
        },

        Action::SelectPrev => match state.current_screen {
            Screen::Forum => {
                let mut forum = state.forum.clone();
                forum.selected = forum.selected.saturating_sub(1);
                forum.answer_cursor = 0;
                AppState { forum, ..state }
            }
            Screen::Thoughts => {
                let mut thoughts_screen = state.thoughts_screen.clone();
                thoughts_screen.selected = thoughts_screen.selected.saturating_sub(1);
                AppState {
                    thoughts_screen,
                    ..state
                }
            }
        },

        Action::SelectNextAnswer => {
            let last = state
                .selected_question()
                .map(|q| q.answers.len().saturating_sub(1))
                .unwrap_or(0);
            let mut forum = state.forum.clone();
            forum.answer_cursor = (forum.answer_cursor + 1).min(last);
            AppState { forum, ..state }
        }

        Action::SelectPrevAnswer => {
            let mut forum = state.forum.clone();
            forum.answer_cursor = forum.answer_cursor.saturating_sub(1);
            AppState { forum, ..state }
        }

        // === Votes ===
        // Resolved against the selection by the event loop; the resulting
        // snapshot arrives as DataRefreshed.
        Action::LikeSelected
        | Action::UnlikeSelected
        | Action::DislikeSelected
        | Action::LikeSelectedAnswer
        | Action::DislikeSelectedAnswer => state,

        // === Ask modal ===
        Action::OpenAskModal => {
            let mut forum = state.forum.clone();
            forum.ask_modal = Some(AskModalState::default());
            AppState { forum, ..state }
        }

        Action::CloseAskModal => {
            let mut forum = state.forum.clone();
            forum.ask_modal = None;
            AppState { forum, ..state }
        }

        Action::AskInputChanged(text) => {
            let mut forum = state.forum.clone();
            if let Some(modal) = forum.ask_modal.as_mut() {
                modal.text = text;
            }
            AppState { forum, ..state }
        }

        Action::CycleAskCategory => {
            let mut forum = state.forum.clone();
            if let Some(modal) = forum.ask_modal.as_mut() {
                modal.category = modal.next_category();
            }
            AppState { forum, ..state }
        }

        // Submission happens in the event loop
        Action::SubmitAsk => state,

        // === Answer modal ===
        Action::OpenAnswerModal => match state.selected_question() {
            Some(question) => {
                let modal = AnswerModalState {
                    question_id: question.id,
                    text: String::new(),
                };
                let mut forum = state.forum.clone();
                forum.answer_modal = Some(modal);
                AppState { forum, ..state }
            }
            None => state,
        },

        Action::CloseAnswerModal => {
            let mut forum = state.forum.clone();
            forum.answer_modal = None;
            AppState { forum, ..state }
        }

        Action::AnswerInputChanged(text) => {
            let mut forum = state.forum.clone();
            if let Some(modal) = forum.answer_modal.as_mut() {
                modal.text = text;
            }
            AppState { forum, ..state }
        }

        Action::SubmitAnswer => state,

        // === Data round trips ===
        Action::DataRefreshed { questions, thoughts } => {
            let mut next = AppState {
                questions,
                thoughts,
                ..state
            };
            let visible = next.visible_questions().len();
            next.forum.selected = next.forum.selected.min(visible.saturating_sub(1));
            let answers = next
                .selected_question()
                .map(|q| q.answers.len())
                .unwrap_or(0);
            next.forum.answer_cursor = next.forum.answer_cursor.min(answers.saturating_sub(1));
            next.thoughts_screen.selected = next
                .thoughts_screen
                .selected
                .min(next.thoughts.len().saturating_sub(1));
            next
        }

        // === Overlays ===
        Action::ShowError(error) => AppState {
            error: Some(error),
            ..state
        },

        Action::DismissError => AppState {
            error: None,
            ..state
        },

        Action::SetStatus(message) => AppState {
            status: StatusBarState {
                message: Some(message),
            },
            ..state
        },

        Action::ClearStatus => AppState {
            status: StatusBarState { message: None },
            ..state
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use libsamvad::types::{Category, CategoryFilter, Question};

    fn with_questions(state: AppState, questions: Vec<Question>) -> AppState {
        reduce(
            state,
            Action::DataRefreshed {
                questions,
                thoughts: Vec::new(),
            },
        )
    }

    fn three_questions() -> Vec<Question> {
        vec![
            Question::new(1, Category::Health, "How to improve immunity?".to_string()),
            Question::new(2, Category::Ayurveda, "Best herbs for digestion?".to_string()),
            Question::new(3, Category::Ayurveda, "Can Ayurveda help with migraines?".to_string()),
        ]
    }

    #[test]
    fn test_reducer_is_pure() {
        let state = AppState::new();
        let state_clone = state.clone();

        let new_state = reduce(state_clone.clone(), Action::SetStatus("Test".to_string()));

        assert!(state_clone.status.message.is_none());
        assert_eq!(new_state.status.message, Some("Test".to_string()));
    }

    #[test]
    fn test_quit_action() {
        let state = AppState::new();
        assert!(!state.should_quit);

        let new_state = reduce(state, Action::Quit);
        assert!(new_state.should_quit);
    }

    #[test]
    fn test_navigate_between_tabs() {
        let state = AppState::new();
        assert_eq!(state.current_screen, Screen::Forum);

        let state = reduce(state, Action::NavigateTo(Screen::Thoughts));
        assert_eq!(state.current_screen, Screen::Thoughts);
    }

    #[test]
    fn test_loading_finished_per_screen() {
        let state = AppState::new();
        assert!(state.forum.loading);
        assert!(state.thoughts_screen.loading);

        let state = reduce(state, Action::LoadingFinished(Screen::Forum));
        assert!(!state.forum.loading);
        assert!(state.thoughts_screen.loading);
    }

    #[test]
    fn test_search_change_resets_selection() {
        let mut state = with_questions(AppState::new(), three_questions());
        state.forum.selected = 2;

        let state = reduce(state, Action::SearchChanged("herbs".to_string()));

        assert_eq!(state.forum.search, "herbs");
        assert_eq!(state.forum.selected, 0);
    }

    #[test]
    fn test_cycle_category_wraps_back_to_all() {
        let mut state = AppState::new();
        assert_eq!(state.forum.category, CategoryFilter::All);

        for _ in 0..Category::ALL.len() {
            state = reduce(state, Action::CycleCategory);
            assert_ne!(state.forum.category, CategoryFilter::All);
        }
        state = reduce(state, Action::CycleCategory);
        assert_eq!(state.forum.category, CategoryFilter::All);
    }

    #[test]
    fn test_selection_clamps_to_visible_list() {
        let state = with_questions(AppState::new(), three_questions());

        let state = reduce(state, Action::SelectNext);
        let state = reduce(state, Action::SelectNext);
        let state = reduce(state, Action::SelectNext);
        let state = reduce(state, Action::SelectNext);

        assert_eq!(state.forum.selected, 2);
    }

    #[test]
    fn test_selection_respects_filter() {
        let state = with_questions(AppState::new(), three_questions());
        // Ayurveda filter leaves two visible questions.
        let state = reduce(state, Action::CycleCategory);
        let state = reduce(state, Action::CycleCategory);
        assert_eq!(
            state.forum.category,
            CategoryFilter::Only(Category::Ayurveda)
        );

        let state = reduce(state, Action::SelectNext);
        let state = reduce(state, Action::SelectNext);

        assert_eq!(state.forum.selected, 1);
        assert_eq!(state.selected_question().map(|q| q.id), Some(3));
    }

    #[test]
    fn test_select_prev_saturates_at_zero() {
        let state = with_questions(AppState::new(), three_questions());

        let state = reduce(state, Action::SelectPrev);

        assert_eq!(state.forum.selected, 0);
    }

    #[test]
    fn test_ask_modal_lifecycle() {
        let state = AppState::new();
        let state = reduce(state, Action::OpenAskModal);
        assert!(state.forum.ask_modal.is_some());

        let state = reduce(state, Action::AskInputChanged("What is Ayurveda?".to_string()));
        assert_eq!(
            state.forum.ask_modal.as_ref().map(|m| m.text.as_str()),
            Some("What is Ayurveda?")
        );

        let state = reduce(state, Action::CycleAskCategory);
        assert_eq!(
            state.forum.ask_modal.as_ref().map(|m| m.category),
            Some(Category::Ayurveda)
        );

        let state = reduce(state, Action::CloseAskModal);
        assert!(state.forum.ask_modal.is_none());
    }

    #[test]
    fn test_answer_modal_requires_a_selection() {
        let state = AppState::new();

        let state = reduce(state, Action::OpenAnswerModal);
        assert!(state.forum.answer_modal.is_none());

        let state = with_questions(state, three_questions());
        let state = reduce(state, Action::OpenAnswerModal);
        assert_eq!(
            state.forum.answer_modal.as_ref().map(|m| m.question_id),
            Some(1)
        );
    }

    #[test]
    fn test_data_refresh_clamps_selections() {
        let mut state = with_questions(AppState::new(), three_questions());
        state.forum.selected = 2;

        let state = reduce(
            state,
            Action::DataRefreshed {
                questions: vec![Question::new(9, Category::Health, "Only one".to_string())],
                thoughts: Vec::new(),
            },
        );

        assert_eq!(state.forum.selected, 0);
    }

    #[test]
    fn test_error_overlay_round_trip() {
        let state = AppState::new();
        let state = reduce(state, Action::ShowError("Please enter a question.".to_string()));
        assert_eq!(state.error.as_deref(), Some("Please enter a question."));

        let state = reduce(state, Action::DismissError);
        assert!(state.error.is_none());
    }
}
