//! Application state
//!
//! Immutable state structure; all transitions happen through the reducer
//! (see `reducer.rs`). The question/thought vectors are a read snapshot of
//! the shared forum store, refreshed after every mutation — there is no
//! screen-local copy with its own mutation rules.

use libsamvad::service::query::filter_questions;
use libsamvad::service::FeedFilter;
use libsamvad::types::{Answer, Category, CategoryFilter, Question, Thought};

use super::actions::Screen;

/// Root application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Should the application quit?
    pub should_quit: bool,

    /// Current active tab
    pub current_screen: Screen,

    /// Help overlay visible?
    pub help_visible: bool,

    /// Error overlay content
    pub error: Option<String>,

    /// Status bar state
    pub status: StatusBarState,

    /// Read snapshot of the question feed
    pub questions: Vec<Question>,

    /// Read snapshot of the thoughts feed
    pub thoughts: Vec<Thought>,

    /// Forum tab state
    pub forum: ForumScreenState,

    /// Thoughts tab state
    pub thoughts_screen: ThoughtsScreenState,

    /// UI configuration
    pub config: UiConfig,
}

/// Forum tab state
#[derive(Debug, Clone)]
pub struct ForumScreenState {
    /// Cosmetic startup loading placeholder still showing?
    pub loading: bool,

    /// Active category filter
    pub category: CategoryFilter,

    /// Free-text search query
    pub search: String,

    /// Search bar has key focus?
    pub search_focused: bool,

    /// Selection index into the *visible* (filtered) question list
    pub selected: usize,

    /// Answer cursor within the selected question
    pub answer_cursor: usize,

    /// Ask-a-question modal, when open
    pub ask_modal: Option<AskModalState>,

    /// Add-an-answer modal, when open
    pub answer_modal: Option<AnswerModalState>,
}

/// State of the ask-a-question modal
#[derive(Debug, Clone)]
pub struct AskModalState {
    pub text: String,
    pub category: Category,
}

impl Default for AskModalState {
    fn default() -> Self {
        Self {
            text: String::new(),
            category: Category::ALL[0],
        }
    }
}

impl AskModalState {
    /// Advance the category picker, wrapping around
    pub fn next_category(&self) -> Category {
        let idx = Category::ALL
            .iter()
            .position(|c| *c == self.category)
            .unwrap_or(0);
        Category::ALL[(idx + 1) % Category::ALL.len()]
    }
}

/// State of the add-an-answer modal
#[derive(Debug, Clone)]
pub struct AnswerModalState {
    pub question_id: u64,
    pub text: String,
}

/// Thoughts tab state
#[derive(Debug, Clone)]
pub struct ThoughtsScreenState {
    /// Cosmetic startup loading placeholder still showing?
    pub loading: bool,

    /// Selection index into the thoughts list
    pub selected: usize,
}

/// Status bar state
#[derive(Debug, Clone, Default)]
pub struct StatusBarState {
    /// Current status message
    pub message: Option<String>,
}

/// UI configuration
#[derive(Debug, Clone)]
pub struct UiConfig {
    /// Use colors?
    pub colors_enabled: bool,

    /// Use unicode symbols (false = ASCII fallback)
    pub unicode_enabled: bool,

    /// Tick rate in milliseconds
    pub tick_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        let colors_enabled = std::env::var("NO_COLOR").is_err()
            && std::env::var("SAMVAD_TUI_NO_COLOR").is_err();

        let unicode_enabled = colors_enabled;

        let tick_rate_ms = std::env::var("SAMVAD_TUI_TICK_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(100);

        Self {
            colors_enabled,
            unicode_enabled,
            tick_rate_ms,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            should_quit: false,
            current_screen: Screen::Forum,
            help_visible: false,
            error: None,
            status: StatusBarState::default(),
            questions: Vec::new(),
            thoughts: Vec::new(),
            forum: ForumScreenState::default(),
            thoughts_screen: ThoughtsScreenState::default(),
            config: UiConfig::default(),
        }
    }
}

impl Default for ForumScreenState {
    fn default() -> Self {
        Self {
            loading: true,
            category: CategoryFilter::All,
            search: String::new(),
            search_focused: false,
            selected: 0,
            answer_cursor: 0,
            ask_modal: None,
            answer_modal: None,
        }
    }
}

impl Default for ThoughtsScreenState {
    fn default() -> Self {
        Self {
            loading: true,
            selected: 0,
        }
    }
}

impl AppState {
    /// Create new application state with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// The feed filter currently applied to the forum tab
    pub fn feed_filter(&self) -> FeedFilter {
        FeedFilter {
            category: self.forum.category,
            search: self.forum.search.clone(),
        }
    }

    /// Questions visible under the current filter, in feed order
    pub fn visible_questions(&self) -> Vec<&Question> {
        filter_questions(&self.questions, &self.feed_filter())
    }

    /// The question under the selection cursor, if any
    pub fn selected_question(&self) -> Option<&Question> {
        self.visible_questions()
            .get(self.forum.selected)
            .copied()
    }

    /// The answer under the answer cursor, if any
    pub fn selected_answer(&self) -> Option<&Answer> {
        self.selected_question()
            .and_then(|q| q.answers.get(self.forum.answer_cursor))
    }

    /// The thought under the thoughts-tab selection, if any
    pub fn selected_thought(&self) -> Option<&Thought> {
        self.thoughts.get(self.thoughts_screen.selected)
    }

    /// Whether a creation modal is open
    pub fn modal_open(&self) -> bool {
        self.forum.ask_modal.is_some() || self.forum.answer_modal.is_some()
    }
}
