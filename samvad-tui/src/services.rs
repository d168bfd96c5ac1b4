//! Service layer adapter for the TUI
//!
//! Thin synchronous wrapper over `ForumService` that matches what the
//! event loop needs: snapshot reads after every mutation, and the
//! original UI's silent treatment of votes on entries that vanished from
//! under the cursor (`NotFound` is swallowed here, on purpose).

use libsamvad::service::{EventReceiver, ForumService};
use libsamvad::types::{Answer, Category, Question, Thought};
use libsamvad::{Config, SamvadError, SeedData};

use crate::error::Result;

/// Service handle for TUI operations
pub struct ServiceHandle {
    service: ForumService,
    tick_rate_ms: u64,
}

impl ServiceHandle {
    /// Create a handle backed by the configured (or bundled) seed
    ///
    /// # Errors
    ///
    /// Returns an error if a present config or seed file cannot be read.
    pub fn new() -> Result<Self> {
        let config = Config::load_or_default()?;
        let tick_rate_ms = config.ui.tick_rate_ms;
        Ok(Self {
            service: ForumService::from_config(config)?,
            tick_rate_ms,
        })
    }

    /// Create a handle from an in-memory seed (tests)
    pub fn from_seed(seed: SeedData) -> Self {
        Self {
            service: ForumService::from_seed(seed),
            tick_rate_ms: libsamvad::config::UiConfig::default().tick_rate_ms,
        }
    }

    /// Tick rate from the config file
    pub fn tick_rate_ms(&self) -> u64 {
        self.tick_rate_ms
    }

    /// Subscribe to store change events
    pub fn subscribe(&self) -> EventReceiver {
        self.service.subscribe()
    }

    /// Current feeds, cloned for rendering
    pub fn snapshot(&self) -> (Vec<Question>, Vec<Thought>) {
        let state = self.service.snapshot();
        (state.questions, state.thoughts)
    }

    /// Ask a new question; `InvalidInput` propagates to the error overlay
    pub fn ask(&self, text: &str, category: Category) -> libsamvad::Result<Question> {
        self.service.questions().ask(text, category)
    }

    /// Answer a question; `InvalidInput` propagates to the error overlay
    pub fn answer(&self, question_id: u64, text: &str) -> libsamvad::Result<Answer> {
        self.service.questions().answer(question_id, text)
    }

    pub fn like_question(&self, id: u64) -> Result<()> {
        ignore_not_found(self.service.questions().like(id))
    }

    pub fn unlike_question(&self, id: u64) -> Result<()> {
        ignore_not_found(self.service.questions().unlike(id))
    }

    pub fn dislike_question(&self, id: u64) -> Result<()> {
        ignore_not_found(self.service.questions().dislike(id))
    }

    pub fn like_answer(&self, question_id: u64, answer_id: u64) -> Result<()> {
        ignore_not_found(self.service.questions().like_answer(question_id, answer_id))
    }

    pub fn dislike_answer(&self, question_id: u64, answer_id: u64) -> Result<()> {
        ignore_not_found(
            self.service
                .questions()
                .dislike_answer(question_id, answer_id),
        )
    }

    pub fn like_thought(&self, id: u64) -> Result<()> {
        ignore_not_found(self.service.thoughts().like(id))
    }

    pub fn unlike_thought(&self, id: u64) -> Result<()> {
        ignore_not_found(self.service.thoughts().unlike(id))
    }
}

/// Treat a vote on a missing entry as a no-op
fn ignore_not_found(result: libsamvad::Result<()>) -> Result<()> {
    match result {
        Err(SamvadError::NotFound { .. }) => Ok(()),
        other => Ok(other?),
    }
}
