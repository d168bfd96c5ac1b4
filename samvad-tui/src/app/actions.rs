//! Actions for the reducer pattern
//!
//! All state transitions are triggered by actions: immutable values that
//! describe what should happen. Key events are translated into these
//! actions by the keymap (see `keymap.rs`) so the reducer and the event
//! loop's side-effect dispatch both see the same semantic action.

use libsamvad::types::{Question, Thought};

/// Actions that trigger state transitions
#[derive(Debug, Clone)]
pub enum Action {
    // === UI events ===
    /// Periodic tick; drives the loading placeholders
    Tick,

    /// Terminal resize event
    Resize(u16, u16),

    // === Navigation ===
    /// Switch to a different screen
    NavigateTo(Screen),

    /// Quit the application
    Quit,

    /// Show help overlay
    ShowHelp,

    /// Hide help overlay
    HideHelp,

    /// A screen's cosmetic loading delay elapsed
    LoadingFinished(Screen),

    // === Forum screen ===
    /// Give the search bar key focus
    FocusSearch,

    /// Return key focus to the question list
    BlurSearch,

    /// Search text changed (full replacement)
    SearchChanged(String),

    /// Advance the category filter: All -> Health -> ... -> All
    CycleCategory,

    /// Move the question selection down
    SelectNext,

    /// Move the question selection up
    SelectPrev,

    /// Move the answer cursor down within the selected question
    SelectNextAnswer,

    /// Move the answer cursor up within the selected question
    SelectPrevAnswer,

    // === Votes ===
    // Resolved against the current selection by the event loop; the
    // reducer passes them through unchanged.
    LikeSelected,
    UnlikeSelected,
    DislikeSelected,
    LikeSelectedAnswer,
    DislikeSelectedAnswer,

    // === Ask modal ===
    OpenAskModal,
    CloseAskModal,
    AskInputChanged(String),
    CycleAskCategory,
    /// Submission is a side effect; handled by the event loop
    SubmitAsk,

    // === Answer modal ===
    OpenAnswerModal,
    CloseAnswerModal,
    AnswerInputChanged(String),
    /// Submission is a side effect; handled by the event loop
    SubmitAnswer,

    // === Data round trips ===
    /// Fresh read snapshot after a mutation
    DataRefreshed {
        questions: Vec<Question>,
        thoughts: Vec<Thought>,
    },

    // === Overlays ===
    ShowError(String),
    DismissError,
    SetStatus(String),
    ClearStatus,
}

/// Screen/tab identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Q&A forum feed
    Forum,
    /// Expert thoughts feed
    Thoughts,
}

impl Screen {
    /// The other tab
    pub fn other(&self) -> Screen {
        match self {
            Screen::Forum => Screen::Thoughts,
            Screen::Thoughts => Screen::Forum,
        }
    }
}
