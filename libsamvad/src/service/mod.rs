//! Service layer for Samvad
//!
//! A clean, testable API over the forum store that can be consumed by
//! multiple interfaces (TUI, CLI) without code duplication.
//!
//! # Architecture
//!
//! The layer follows a facade pattern with `ForumService` as the entry
//! point, coordinating specialized sub-services over one shared store:
//!
//! - `QuestionService`: creation flows and votes for the Q&A feed
//! - `ThoughtService`: votes and comments for the thoughts feed
//! - `QueryService`: category/search filtering
//! - `ValidationService`: content validation before submission
//! - `EventBus`: change notification distribution
//!
//! # Example
//!
//! ```no_run
//! use libsamvad::service::ForumService;
//! use libsamvad::types::Category;
//!
//! # fn example() -> libsamvad::Result<()> {
//! let service = ForumService::new()?;
//!
//! let question = service.questions().ask("What is Ayurveda?", Category::Health)?;
//! service.questions().like(question.id)?;
//! # Ok(())
//! # }
//! ```

pub mod events;
pub mod query;
pub mod questions;
pub mod thoughts;
pub mod validation;

// Re-export commonly used types
pub use events::{EventBus, EventReceiver, StoreEvent};
pub use query::FeedFilter;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use self::query::QueryService;
use self::questions::QuestionService;
use self::thoughts::ThoughtService;
use self::validation::ValidationService;
use crate::config::Config;
use crate::error::{Result, SamvadError};
use crate::seed::SeedData;
use crate::store::{Action, ForumState, ForumStore};
use crate::types::{Collection, IdAllocator};

/// The store handle shared by all sub-services
pub(crate) type SharedStore = Arc<Mutex<ForumStore>>;

/// Lock the store, recovering from a poisoned mutex
///
/// The reducer cannot panic mid-transition in any interesting way (it owns
/// its inputs), so a poisoned lock still holds a coherent state.
pub(crate) fn lock_store(store: &SharedStore) -> MutexGuard<'_, ForumStore> {
    store.lock().unwrap_or_else(PoisonError::into_inner)
}

pub(crate) fn like_post(
    store: &SharedStore,
    events: &EventBus,
    collection: Collection,
    id: u64,
) -> Result<()> {
    let mut guard = lock_store(store);
    if !guard.state().contains(collection, id) {
        return Err(SamvadError::NotFound { collection, id });
    }
    guard.dispatch(Action::LikePost { collection, id });
    let likes = post_likes(guard.state(), collection, id);
    drop(guard);

    events.emit(StoreEvent::PostLiked {
        collection,
        id,
        likes,
    });
    Ok(())
}

pub(crate) fn unlike_post(
    store: &SharedStore,
    events: &EventBus,
    collection: Collection,
    id: u64,
) -> Result<()> {
    let mut guard = lock_store(store);
    if !guard.state().contains(collection, id) {
        return Err(SamvadError::NotFound { collection, id });
    }
    guard.dispatch(Action::UnlikePost { collection, id });
    let likes = post_likes(guard.state(), collection, id);
    drop(guard);

    events.emit(StoreEvent::PostUnliked {
        collection,
        id,
        likes,
    });
    Ok(())
}

pub(crate) fn add_comment(
    store: &SharedStore,
    events: &EventBus,
    collection: Collection,
    id: u64,
    comment: String,
) -> Result<()> {
    let mut guard = lock_store(store);
    if !guard.state().contains(collection, id) {
        return Err(SamvadError::NotFound { collection, id });
    }
    guard.dispatch(Action::AddComment {
        collection,
        id,
        comment,
    });
    drop(guard);

    events.emit(StoreEvent::CommentAdded { collection, id });
    Ok(())
}

fn post_likes(state: &ForumState, collection: Collection, id: u64) -> u32 {
    match collection {
        Collection::Questions => state.question(id).map(|q| q.likes).unwrap_or(0),
        Collection::Thoughts => state.thought(id).map(|t| t.likes).unwrap_or(0),
    }
}

/// Main service facade that coordinates all sub-services
///
/// Owns the shared store and hands out sub-service references. The store
/// lives exactly as long as the facade; dropping it discards all state.
pub struct ForumService {
    store: SharedStore,
    questions: QuestionService,
    thoughts: ThoughtService,
    query: QueryService,
    validation: ValidationService,
    event_bus: EventBus,
}

impl ForumService {
    /// Create a service with the default configuration
    ///
    /// Loads the config file when one exists (falling back to defaults
    /// otherwise) and seeds the store from the configured seed file or the
    /// bundled dataset.
    ///
    /// # Errors
    ///
    /// Returns an error if a present config file or seed file cannot be
    /// read or parsed.
    pub fn new() -> Result<Self> {
        let config = Config::load_or_default()?;
        Self::from_config(config)
    }

    /// Create a service from an explicit configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configured seed file cannot be read or
    /// parsed.
    pub fn from_config(config: Config) -> Result<Self> {
        let seed = match &config.seed.path {
            Some(path) => SeedData::load(path)?,
            None => SeedData::bundled()?,
        };
        Ok(Self::from_seed(seed))
    }

    /// Create a service seeded from an in-memory document
    ///
    /// This is the constructor tests use; it never touches the filesystem.
    pub fn from_seed(seed: SeedData) -> Self {
        let allocator = Arc::new(IdAllocator::new());
        allocator.bump_past(seed.max_id());

        let questions = seed.questions.as_ref().map(Vec::len).unwrap_or(0);
        let thoughts = seed.thoughts.as_ref().map(Vec::len).unwrap_or(0);

        let mut store = ForumStore::new();
        store.dispatch(Action::SetData(seed));
        let store: SharedStore = Arc::new(Mutex::new(store));

        let event_bus = EventBus::new(100);
        let validation = ValidationService::new();

        let service = Self {
            questions: QuestionService::new(
                Arc::clone(&store),
                Arc::clone(&allocator),
                validation.clone(),
                event_bus.clone(),
            ),
            thoughts: ThoughtService::new(Arc::clone(&store), event_bus.clone()),
            query: QueryService::new(Arc::clone(&store)),
            validation,
            event_bus,
            store,
        };

        service.event_bus.emit(StoreEvent::DataSeeded {
            questions,
            thoughts,
        });
        tracing::debug!(questions, thoughts, "forum store seeded");

        service
    }

    /// Access the question service
    pub fn questions(&self) -> &QuestionService {
        &self.questions
    }

    /// Access the thought service
    pub fn thoughts(&self) -> &ThoughtService {
        &self.thoughts
    }

    /// Access the query service
    pub fn query(&self) -> &QueryService {
        &self.query
    }

    /// Access the validation service
    pub fn validation(&self) -> &ValidationService {
        &self.validation
    }

    /// Subscribe to store change events
    pub fn subscribe(&self) -> EventReceiver {
        self.event_bus.subscribe()
    }

    /// A cloned snapshot of the full state, for read-side rendering
    pub fn snapshot(&self) -> ForumState {
        lock_store(&self.store).state().clone()
    }
}
