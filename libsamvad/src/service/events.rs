//! Event system for store change notifications
//!
//! An in-process event bus that tells subscribers what just changed in the
//! forum store, without blocking the mutation path.
//!
//! The bus uses `tokio::sync::broadcast` for multi-subscriber support.
//! Emission is non-blocking: with no subscribers the event is dropped
//! immediately, and a lagging subscriber loses oldest events rather than
//! stalling the emitter. Synchronous consumers (the TUI event loop) drain
//! with `try_recv`; no async runtime is required on the emit side.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::types::{Category, Collection};

/// Event receiver type alias
pub type EventReceiver = broadcast::Receiver<StoreEvent>;

/// Event bus for distributing store change events
#[derive(Clone)]
pub struct EventBus {
    sender: broadcast::Sender<StoreEvent>,
}

impl EventBus {
    /// Create a new event bus with the given per-subscriber buffer capacity
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Subscribe to events emitted after this call
    pub fn subscribe(&self) -> EventReceiver {
        self.sender.subscribe()
    }

    /// Emit an event to all subscribers
    ///
    /// Never blocks and never fails; an event with no listeners is dropped.
    pub fn emit(&self, event: StoreEvent) {
        let _ = self.sender.send(event);
    }

    /// Number of active subscribers (debugging/metrics only)
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

/// Events describing completed store mutations
///
/// Cloneable and serializable so consumers can log them or feed them into
/// UI update loops.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StoreEvent {
    /// Initial seed applied
    DataSeeded { questions: usize, thoughts: usize },

    /// A new question entered the feed
    QuestionAsked { id: u64, category: Category },

    /// A new answer was attached to a question
    AnswerAdded { question_id: u64, answer_id: u64 },

    /// A post's like counter moved up
    PostLiked {
        collection: Collection,
        id: u64,
        likes: u32,
    },

    /// A post's like counter moved down (clamped at zero)
    PostUnliked {
        collection: Collection,
        id: u64,
        likes: u32,
    },

    /// A question's dislike counter moved up
    QuestionDisliked { id: u64, dislikes: u32 },

    /// An answer's vote counters moved
    AnswerVoted { question_id: u64, answer_id: u64 },

    /// A comment was appended to a post
    CommentAdded { collection: Collection, id: u64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_event_emission_and_subscription() {
        let bus = EventBus::new(10);
        let mut receiver = bus.subscribe();

        bus.emit(StoreEvent::DataSeeded {
            questions: 5,
            thoughts: 3,
        });

        match receiver.recv().await.unwrap() {
            StoreEvent::DataSeeded { questions, thoughts } => {
                assert_eq!(questions, 5);
                assert_eq!(thoughts, 3);
            }
            other => panic!("Wrong event type received: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_multiple_subscribers_see_the_same_event() {
        let bus = EventBus::new(10);
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();

        bus.emit(StoreEvent::PostLiked {
            collection: Collection::Thoughts,
            id: 1,
            likes: 16,
        });

        for rx in [&mut rx1, &mut rx2] {
            match rx.recv().await.unwrap() {
                StoreEvent::PostLiked {
                    collection,
                    id,
                    likes,
                } => {
                    assert_eq!(collection, Collection::Thoughts);
                    assert_eq!(id, 1);
                    assert_eq!(likes, 16);
                }
                other => panic!("Wrong event type received: {:?}", other),
            }
        }
    }

    #[tokio::test]
    async fn test_emit_without_subscribers_does_not_block() {
        let bus = EventBus::new(10);

        bus.emit(StoreEvent::CommentAdded {
            collection: Collection::Questions,
            id: 2,
        });

        assert_eq!(bus.subscriber_count(), 0);
    }

    #[test]
    fn test_try_recv_from_sync_context() {
        // The TUI drains events without a runtime; make sure that works.
        let bus = EventBus::new(10);
        let mut receiver = bus.subscribe();

        bus.emit(StoreEvent::QuestionDisliked { id: 4, dislikes: 3 });

        assert!(matches!(
            receiver.try_recv(),
            Ok(StoreEvent::QuestionDisliked { id: 4, dislikes: 3 })
        ));
        assert!(receiver.try_recv().is_err());
    }

    #[test]
    fn test_event_serialization() {
        let event = StoreEvent::QuestionAsked {
            id: 12,
            category: Category::Ayurveda,
        };

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("question_asked"));
        assert!(json.contains("Ayurveda"));

        let back: StoreEvent = serde_json::from_str(&json).unwrap();
        assert!(matches!(back, StoreEvent::QuestionAsked { id: 12, .. }));
    }
}
