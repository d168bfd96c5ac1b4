//! Thought service: targeted mutations for the expert thoughts feed

use super::events::EventBus;
use super::{lock_store, SharedStore};
use crate::error::Result;
use crate::types::{Collection, Thought};

/// Service for liking and commenting on practitioner thoughts
///
/// Thoughts are read-mostly: they arrive with the seed and are never
/// created at runtime, so the surface is just votes and comments.
#[derive(Clone)]
pub struct ThoughtService {
    store: SharedStore,
    events: EventBus,
}

impl ThoughtService {
    pub fn new(store: SharedStore, events: EventBus) -> Self {
        Self { store, events }
    }

    /// Current thoughts in feed order
    pub fn list(&self) -> Vec<Thought> {
        lock_store(&self.store).state().thoughts.clone()
    }

    /// Like a thought
    pub fn like(&self, id: u64) -> Result<()> {
        super::like_post(&self.store, &self.events, Collection::Thoughts, id)
    }

    /// Remove a like from a thought (clamped at zero)
    pub fn unlike(&self, id: u64) -> Result<()> {
        super::unlike_post(&self.store, &self.events, Collection::Thoughts, id)
    }

    /// Append a free-form comment to a thought
    pub fn comment(&self, id: u64, comment: String) -> Result<()> {
        super::add_comment(&self.store, &self.events, Collection::Thoughts, id, comment)
    }
}
