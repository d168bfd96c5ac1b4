//! Feed filtering and search
//!
//! The visible question set is the subset passing two independent
//! predicates: a category match (with an `All` wildcard) and a
//! case-insensitive substring match on the question text. A linear scan
//! per query; there is no ranking, pagination, or indexing.

use super::{lock_store, SharedStore};
use crate::types::{CategoryFilter, Question, Thought};

/// Filter applied to the question feed
#[derive(Debug, Clone, Default)]
pub struct FeedFilter {
    pub category: CategoryFilter,
    pub search: String,
}

impl FeedFilter {
    /// Whether `question` is visible under this filter
    ///
    /// An empty search string matches everything.
    pub fn matches(&self, question: &Question) -> bool {
        let category_match = self.category.matches(question.category);
        let search_match = question
            .text
            .to_lowercase()
            .contains(&self.search.to_lowercase());
        category_match && search_match
    }
}

/// Filter a slice of questions, preserving order
pub fn filter_questions<'a>(questions: &'a [Question], filter: &FeedFilter) -> Vec<&'a Question> {
    questions.iter().filter(|q| filter.matches(q)).collect()
}

/// Read-side service over the shared store
#[derive(Clone)]
pub struct QueryService {
    store: SharedStore,
}

impl QueryService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// Questions passing `filter`, in feed order
    pub fn questions(&self, filter: &FeedFilter) -> Vec<Question> {
        lock_store(&self.store)
            .state()
            .questions
            .iter()
            .filter(|q| filter.matches(q))
            .cloned()
            .collect()
    }

    /// The thoughts feed, unfiltered
    pub fn thoughts(&self) -> Vec<Thought> {
        lock_store(&self.store).state().thoughts.clone()
    }
}
