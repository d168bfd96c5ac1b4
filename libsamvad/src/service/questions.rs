//! Question service: creation flows and targeted mutations for the Q&A feed

use std::sync::Arc;

use super::events::{EventBus, StoreEvent};
use super::validation::{ContentKind, ValidationRequest, ValidationService};
use super::{lock_store, SharedStore};
use crate::error::{Result, SamvadError};
use crate::store::Action;
use crate::types::{Answer, Category, Collection, IdAllocator, Question};

/// Service for asking questions, answering them, and voting on both
///
/// All input validation and id allocation happens here, before dispatch;
/// the reducer itself stays pure. Targeted mutations on ids that do not
/// exist return `NotFound` rather than silently succeeding; callers that
/// want the store's silent semantics can ignore that error.
#[derive(Clone)]
pub struct QuestionService {
    store: SharedStore,
    allocator: Arc<IdAllocator>,
    validation: ValidationService,
    events: EventBus,
}

impl QuestionService {
    pub fn new(
        store: SharedStore,
        allocator: Arc<IdAllocator>,
        validation: ValidationService,
        events: EventBus,
    ) -> Self {
        Self {
            store,
            allocator,
            validation,
            events,
        }
    }

    /// Current questions in feed order (newest first)
    pub fn list(&self) -> Vec<Question> {
        lock_store(&self.store).state().questions.clone()
    }

    /// Ask a new question
    ///
    /// The text is trimmed; empty input is rejected with a user-visible
    /// `InvalidInput` and leaves state unchanged. The created question is
    /// prepended to the feed with a fresh id and zeroed counters.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when the text fails validation.
    pub fn ask(&self, text: &str, category: Category) -> Result<Question> {
        let response = self.validation.validate(&ValidationRequest {
            content: text.to_string(),
            kind: ContentKind::Question,
        });
        if !response.valid {
            return Err(SamvadError::InvalidInput(response.errors.join(", ")));
        }

        let question = Question::new(self.allocator.next(), category, text.trim().to_string());

        let mut store = lock_store(&self.store);
        store.dispatch(Action::AddQuestion(question.clone()));
        drop(store);

        self.events.emit(StoreEvent::QuestionAsked {
            id: question.id,
            category,
        });
        tracing::info!(id = question.id, category = %category, "question asked");

        Ok(question)
    }

    /// Answer an existing question
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for empty text and `NotFound` when no
    /// question with `question_id` exists.
    pub fn answer(&self, question_id: u64, text: &str) -> Result<Answer> {
        let response = self.validation.validate(&ValidationRequest {
            content: text.to_string(),
            kind: ContentKind::Answer,
        });
        if !response.valid {
            return Err(SamvadError::InvalidInput(response.errors.join(", ")));
        }

        let mut store = lock_store(&self.store);
        if !store.state().contains(Collection::Questions, question_id) {
            return Err(SamvadError::NotFound {
                collection: Collection::Questions,
                id: question_id,
            });
        }

        let answer = Answer::new(self.allocator.next(), text.trim().to_string());
        store.dispatch(Action::AddAnswer {
            question_id,
            answer: answer.clone(),
        });
        drop(store);

        self.events.emit(StoreEvent::AnswerAdded {
            question_id,
            answer_id: answer.id,
        });
        tracing::info!(question_id, answer_id = answer.id, "answer added");

        Ok(answer)
    }

    /// Like a question
    pub fn like(&self, id: u64) -> Result<()> {
        super::like_post(&self.store, &self.events, Collection::Questions, id)
    }

    /// Remove a like from a question (clamped at zero)
    pub fn unlike(&self, id: u64) -> Result<()> {
        super::unlike_post(&self.store, &self.events, Collection::Questions, id)
    }

    /// Dislike a question
    pub fn dislike(&self, id: u64) -> Result<()> {
        let mut store = lock_store(&self.store);
        if !store.state().contains(Collection::Questions, id) {
            return Err(SamvadError::NotFound {
                collection: Collection::Questions,
                id,
            });
        }
        store.dispatch(Action::DislikeQuestion { id });
        let dislikes = store.state().question(id).map(|q| q.dislikes).unwrap_or(0);
        drop(store);

        self.events.emit(StoreEvent::QuestionDisliked { id, dislikes });
        Ok(())
    }

    /// Append a free-form comment to a question
    pub fn comment(&self, id: u64, comment: String) -> Result<()> {
        super::add_comment(&self.store, &self.events, Collection::Questions, id, comment)
    }

    /// Like an answer
    pub fn like_answer(&self, question_id: u64, answer_id: u64) -> Result<()> {
        self.vote_answer(
            question_id,
            answer_id,
            Action::LikeAnswer {
                question_id,
                answer_id,
            },
        )
    }

    /// Dislike an answer
    pub fn dislike_answer(&self, question_id: u64, answer_id: u64) -> Result<()> {
        self.vote_answer(
            question_id,
            answer_id,
            Action::DislikeAnswer {
                question_id,
                answer_id,
            },
        )
    }

    fn vote_answer(&self, question_id: u64, answer_id: u64, action: Action) -> Result<()> {
        let mut store = lock_store(&self.store);
        let known = store
            .state()
            .question(question_id)
            .is_some_and(|q| q.answers.iter().any(|a| a.id == answer_id));
        if !known {
            return Err(SamvadError::NotFound {
                collection: Collection::Questions,
                id: answer_id,
            });
        }
        store.dispatch(action);
        drop(store);

        self.events.emit(StoreEvent::AnswerVoted {
            question_id,
            answer_id,
        });
        Ok(())
    }
}
