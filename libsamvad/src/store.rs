//! The forum state store
//!
//! A single state container for the `questions` and `thoughts` collections,
//! mutated exclusively through tagged actions and a pure reducer:
//! `(ForumState, Action) -> ForumState`.
//!
//! The reducer has no side effects: no I/O, no clock, no id generation.
//! Questions and answers arrive fully constructed (the service layer
//! validates text and allocates ids before dispatching). Actions that
//! target an id not present in the state leave the state unchanged; that
//! silent-absorb contract is deliberate and relied on by every front end.

use serde::{Deserialize, Serialize};

use crate::seed::SeedData;
use crate::types::{Answer, Collection, Question, Thought};

/// Root forum state: the single source of truth for both feeds
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ForumState {
    pub questions: Vec<Question>,
    pub thoughts: Vec<Thought>,
}

impl ForumState {
    /// Create empty, unseeded state
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a question by id
    pub fn question(&self, id: u64) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    /// Look up a thought by id
    pub fn thought(&self, id: u64) -> Option<&Thought> {
        self.thoughts.iter().find(|t| t.id == id)
    }

    /// Whether a post with `id` exists in `collection`
    pub fn contains(&self, collection: Collection, id: u64) -> bool {
        match collection {
            Collection::Questions => self.question(id).is_some(),
            Collection::Thoughts => self.thought(id).is_some(),
        }
    }
}

/// Actions that trigger state transitions
///
/// The tagged-dispatch surface is the only way state changes. Every view
/// goes through the same actions; there are no screen-local copies.
#[derive(Debug, Clone)]
pub enum Action {
    /// Replace the collections present in the payload wholesale; absent
    /// collections are untouched. Used once at startup.
    SetData(SeedData),

    /// Increment a post's like counter
    LikePost { collection: Collection, id: u64 },

    /// Decrement a post's like counter, clamped at zero
    UnlikePost { collection: Collection, id: u64 },

    /// Increment a question's dislike counter (thoughts carry none)
    DislikeQuestion { id: u64 },

    /// Append a free-form comment to a post
    AddComment {
        collection: Collection,
        id: u64,
        comment: String,
    },

    /// Prepend a new question to the feed
    AddQuestion(Question),

    /// Append a new answer to the matching question
    AddAnswer { question_id: u64, answer: Answer },

    /// Increment an answer's like counter
    LikeAnswer { question_id: u64, answer_id: u64 },

    /// Increment an answer's dislike counter
    DislikeAnswer { question_id: u64, answer_id: u64 },
}

/// Pure reducer function
///
/// Takes current state and an action, returns new state. Deterministic:
/// same inputs, same output. Unknown ids are absorbed silently.
pub fn reduce(state: ForumState, action: Action) -> ForumState {
    match action {
        Action::SetData(seed) => ForumState {
            questions: seed.questions.unwrap_or(state.questions),
            thoughts: seed.thoughts.unwrap_or(state.thoughts),
        },

        Action::LikePost { collection, id } => match collection {
            Collection::Questions => map_question(state, id, |q| Question {
                likes: q.likes.saturating_add(1),
                ..q
            }),
            Collection::Thoughts => map_thought(state, id, |t| Thought {
                likes: t.likes.saturating_add(1),
                ..t
            }),
        },

        Action::UnlikePost { collection, id } => match collection {
            Collection::Questions => map_question(state, id, |q| Question {
                likes: q.likes.saturating_sub(1),
                ..q
            }),
            Collection::Thoughts => map_thought(state, id, |t| Thought {
                likes: t.likes.saturating_sub(1),
                ..t
            }),
        },

        Action::DislikeQuestion { id } => map_question(state, id, |q| Question {
            dislikes: q.dislikes.saturating_add(1),
            ..q
        }),

        Action::AddComment {
            collection,
            id,
            comment,
        } => match collection {
            Collection::Questions => map_question(state, id, |mut q| {
                q.comments.push(comment.clone());
                q
            }),
            Collection::Thoughts => map_thought(state, id, |mut t| {
                t.comments.push(comment.clone());
                t
            }),
        },

        Action::AddQuestion(question) => {
            let ForumState { questions, thoughts } = state;
            let mut next = Vec::with_capacity(questions.len() + 1);
            next.push(question);
            next.extend(questions);
            ForumState {
                questions: next,
                thoughts,
            }
        }

        Action::AddAnswer {
            question_id,
            answer,
        } => map_question(state, question_id, |mut q| {
            q.answers.push(answer.clone());
            q
        }),

        Action::LikeAnswer {
            question_id,
            answer_id,
        } => map_answer(state, question_id, answer_id, |a| Answer {
            likes: a.likes.saturating_add(1),
            ..a
        }),

        Action::DislikeAnswer {
            question_id,
            answer_id,
        } => map_answer(state, question_id, answer_id, |a| Answer {
            dislikes: a.dislikes.saturating_add(1),
            ..a
        }),
    }
}

fn map_question<F>(state: ForumState, id: u64, f: F) -> ForumState
where
    F: Fn(Question) -> Question,
{
    let ForumState { questions, thoughts } = state;
    ForumState {
        questions: questions
            .into_iter()
            .map(|q| if q.id == id { f(q) } else { q })
            .collect(),
        thoughts,
    }
}

fn map_thought<F>(state: ForumState, id: u64, f: F) -> ForumState
where
    F: Fn(Thought) -> Thought,
{
    let ForumState { questions, thoughts } = state;
    ForumState {
        questions,
        thoughts: thoughts
            .into_iter()
            .map(|t| if t.id == id { f(t) } else { t })
            .collect(),
    }
}

fn map_answer<F>(state: ForumState, question_id: u64, answer_id: u64, f: F) -> ForumState
where
    F: Fn(Answer) -> Answer,
{
    map_question(state, question_id, |mut q| {
        q.answers = std::mem::take(&mut q.answers)
            .into_iter()
            .map(|a| if a.id == answer_id { f(a) } else { a })
            .collect();
        q
    })
}

/// Owning wrapper around `ForumState`
///
/// An explicitly constructed store handed to consumers by reference; the
/// lifecycle is create → seed (`SetData`) → mutate until process exit.
#[derive(Debug, Default)]
pub struct ForumStore {
    state: ForumState,
}

impl ForumStore {
    pub fn new() -> Self {
        Self {
            state: ForumState::new(),
        }
    }

    /// Read access to the current state
    pub fn state(&self) -> &ForumState {
        &self.state
    }

    /// Apply an action through the reducer
    pub fn dispatch(&mut self, action: Action) {
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;

    fn seeded() -> ForumState {
        let seed = SeedData {
            questions: Some(vec![
                {
                    let mut q =
                        Question::new(1, Category::Health, "How to improve immunity?".to_string());
                    q.likes = 2;
                    q.answers
                        .push(Answer::new(101, "Eat healthy and sleep well.".to_string()));
                    q
                },
                Question::new(2, Category::Ayurveda, "Best herbs for digestion?".to_string()),
            ]),
            thoughts: Some(vec![Thought {
                id: 1,
                doctor: "Dr. Sharma".to_string(),
                thought: "Ayurveda is a holistic approach to health.".to_string(),
                likes: 15,
                comments: Vec::new(),
            }]),
        };
        reduce(ForumState::new(), Action::SetData(seed))
    }

    #[test]
    fn test_reducer_is_pure() {
        let state = seeded();
        let before = state.clone();

        let after = reduce(
            state.clone(),
            Action::LikePost {
                collection: Collection::Questions,
                id: 1,
            },
        );

        assert_eq!(state, before);
        assert_ne!(after, before);
    }

    #[test]
    fn test_set_data_replaces_present_collections_only() {
        let state = seeded();

        let replacement = SeedData {
            questions: Some(vec![Question::new(
                9,
                Category::Nutrition,
                "Is ghee healthy?".to_string(),
            )]),
            thoughts: None,
        };
        let after = reduce(state, Action::SetData(replacement));

        assert_eq!(after.questions.len(), 1);
        assert_eq!(after.questions[0].id, 9);
        // Thoughts were absent from the payload, so they survive.
        assert_eq!(after.thoughts.len(), 1);
    }

    #[test]
    fn test_like_post_increments_exactly_one_post() {
        let state = seeded();

        let after = reduce(
            state,
            Action::LikePost {
                collection: Collection::Questions,
                id: 1,
            },
        );

        assert_eq!(after.question(1).unwrap().likes, 3);
        assert_eq!(after.question(2).unwrap().likes, 0);
        assert_eq!(after.thought(1).unwrap().likes, 15);
    }

    #[test]
    fn test_like_post_leaves_other_fields_untouched() {
        let state = seeded();
        let before = state.question(1).unwrap().clone();

        let after = reduce(
            state,
            Action::LikePost {
                collection: Collection::Questions,
                id: 1,
            },
        );
        let touched = after.question(1).unwrap();

        assert_eq!(touched.text, before.text);
        assert_eq!(touched.dislikes, before.dislikes);
        assert_eq!(touched.answers, before.answers);
    }

    #[test]
    fn test_like_post_on_unknown_id_is_a_no_op() {
        let state = seeded();
        let before = state.clone();

        let after = reduce(
            state,
            Action::LikePost {
                collection: Collection::Questions,
                id: 999,
            },
        );

        assert_eq!(after, before);
    }

    #[test]
    fn test_like_post_targets_the_named_collection() {
        // Question id 1 and thought id 1 coexist; only the thought moves.
        let state = seeded();

        let after = reduce(
            state,
            Action::LikePost {
                collection: Collection::Thoughts,
                id: 1,
            },
        );

        assert_eq!(after.thought(1).unwrap().likes, 16);
        assert_eq!(after.question(1).unwrap().likes, 2);
    }

    #[test]
    fn test_unlike_post_clamps_at_zero() {
        let state = seeded();

        // Question 2 already has zero likes.
        let after = reduce(
            state,
            Action::UnlikePost {
                collection: Collection::Questions,
                id: 2,
            },
        );

        assert_eq!(after.question(2).unwrap().likes, 0);
    }

    #[test]
    fn test_unlike_post_decrements_by_one() {
        let state = seeded();

        let after = reduce(
            state,
            Action::UnlikePost {
                collection: Collection::Thoughts,
                id: 1,
            },
        );

        assert_eq!(after.thought(1).unwrap().likes, 14);
    }

    #[test]
    fn test_dislike_question_increments_dislikes() {
        let state = seeded();

        let after = reduce(state, Action::DislikeQuestion { id: 1 });

        assert_eq!(after.question(1).unwrap().dislikes, 1);
        assert_eq!(after.question(1).unwrap().likes, 2);
    }

    #[test]
    fn test_add_comment_appends_in_order() {
        let state = seeded();

        let after = reduce(
            state,
            Action::AddComment {
                collection: Collection::Questions,
                id: 1,
                comment: "first".to_string(),
            },
        );
        let after = reduce(
            after,
            Action::AddComment {
                collection: Collection::Questions,
                id: 1,
                comment: "second".to_string(),
            },
        );

        let comments = &after.question(1).unwrap().comments;
        assert_eq!(comments.len(), 2);
        assert_eq!(comments[0], "first");
        assert_eq!(comments[1], "second");
    }

    #[test]
    fn test_add_comment_on_unknown_id_is_a_no_op() {
        let state = seeded();
        let before = state.clone();

        let after = reduce(
            state,
            Action::AddComment {
                collection: Collection::Thoughts,
                id: 77,
                comment: "hello".to_string(),
            },
        );

        assert_eq!(after, before);
    }

    #[test]
    fn test_add_question_prepends() {
        let state = seeded();

        let question = Question::new(50, Category::Health, "What is Ayurveda?".to_string());
        let after = reduce(state, Action::AddQuestion(question));

        assert_eq!(after.questions.len(), 3);
        assert_eq!(after.questions[0].id, 50);
        assert_eq!(after.questions[0].text, "What is Ayurveda?");
        // Existing questions keep their relative order.
        assert_eq!(after.questions[1].id, 1);
        assert_eq!(after.questions[2].id, 2);
    }

    #[test]
    fn test_add_answer_appends_to_matching_question() {
        let state = seeded();

        let answer = Answer::new(200, "Try warm water in the morning.".to_string());
        let after = reduce(
            state,
            Action::AddAnswer {
                question_id: 1,
                answer,
            },
        );

        let answers = &after.question(1).unwrap().answers;
        assert_eq!(answers.len(), 2);
        assert_eq!(answers[0].id, 101);
        assert_eq!(answers[1].id, 200);
    }

    #[test]
    fn test_add_answer_to_unknown_question_is_a_no_op() {
        let state = seeded();
        let before = state.clone();

        let after = reduce(
            state,
            Action::AddAnswer {
                question_id: 404,
                answer: Answer::new(200, "Lost answer".to_string()),
            },
        );

        assert_eq!(after, before);
    }

    #[test]
    fn test_answer_votes_touch_only_the_target() {
        let state = seeded();

        let after = reduce(
            state,
            Action::LikeAnswer {
                question_id: 1,
                answer_id: 101,
            },
        );
        let after = reduce(
            after,
            Action::DislikeAnswer {
                question_id: 1,
                answer_id: 101,
            },
        );

        let answer = &after.question(1).unwrap().answers[0];
        assert_eq!(answer.likes, 1);
        assert_eq!(answer.dislikes, 1);
        assert_eq!(after.question(1).unwrap().likes, 2);
    }

    #[test]
    fn test_answer_vote_with_wrong_question_is_a_no_op() {
        let state = seeded();
        let before = state.clone();

        let after = reduce(
            state,
            Action::LikeAnswer {
                question_id: 2,
                answer_id: 101,
            },
        );

        assert_eq!(after, before);
    }

    #[test]
    fn test_store_dispatch_applies_reducer() {
        let mut store = ForumStore::new();
        store.dispatch(Action::SetData(SeedData {
            questions: Some(vec![Question::new(
                1,
                Category::Ayurveda,
                "Foo".to_string(),
            )]),
            thoughts: None,
        }));
        store.dispatch(Action::LikePost {
            collection: Collection::Questions,
            id: 1,
        });

        assert_eq!(store.state().question(1).unwrap().likes, 1);
    }

    #[test]
    fn test_state_contains() {
        let state = seeded();

        assert!(state.contains(Collection::Questions, 1));
        assert!(state.contains(Collection::Thoughts, 1));
        assert!(!state.contains(Collection::Thoughts, 2));
    }
}
