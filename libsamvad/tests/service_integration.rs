//! Integration tests for ForumService
//!
//! Tests the service layer as a whole, including interactions between
//! sub-services and the event bus.

use libsamvad::service::{FeedFilter, ForumService, StoreEvent};
use libsamvad::types::{Category, CategoryFilter, Collection};
use libsamvad::{SamvadError, SeedData};

/// Build a service from a small in-memory seed
fn setup_test_service() -> ForumService {
    let seed = SeedData::from_json_str(
        r#"{
            "questions": [
                {
                    "id": 1,
                    "category": "Health",
                    "text": "How to improve immunity?",
                    "likes": 2,
                    "dislikes": 0,
                    "answers": [
                        { "id": 11, "text": "Eat healthy and sleep well.", "likes": 0, "dislikes": 0 }
                    ]
                },
                {
                    "id": 2,
                    "category": "Ayurveda",
                    "text": "Best herbs for digestion?",
                    "likes": 1,
                    "dislikes": 1,
                    "answers": []
                }
            ],
            "thoughts": [
                { "id": 1, "doctor": "Dr. Sharma", "thought": "Ayurveda is a holistic approach to health.", "likes": 15 }
            ]
        }"#,
    )
    .unwrap();

    ForumService::from_seed(seed)
}

#[test]
fn test_service_initialization_snapshot() {
    let service = setup_test_service();
    let snapshot = service.snapshot();

    assert_eq!(snapshot.questions.len(), 2);
    assert_eq!(snapshot.thoughts.len(), 1);
}

#[test]
fn test_service_accessor_methods() {
    let service = setup_test_service();

    let _questions = service.questions();
    let _thoughts = service.thoughts();
    let _query = service.query();
    let _validation = service.validation();
    let _receiver = service.subscribe();
}

#[test]
fn test_ask_prepends_with_fresh_id() {
    let service = setup_test_service();

    let created = service
        .questions()
        .ask("What is Ayurveda?", Category::Health)
        .unwrap();

    let questions = service.questions().list();
    assert_eq!(questions.len(), 3);
    assert_eq!(questions[0].id, created.id);
    assert_eq!(questions[0].text, "What is Ayurveda?");
    assert_eq!(questions[0].category, Category::Health);
    assert_eq!(questions[0].likes, 0);
    assert!(questions[0].answers.is_empty());

    // The id was never used by the seed.
    assert!(questions[1..].iter().all(|q| q.id != created.id));
}

#[test]
fn test_ask_empty_text_is_rejected_and_state_unchanged() {
    let service = setup_test_service();

    let result = service.questions().ask("   ", Category::Ayurveda);

    assert!(matches!(result, Err(SamvadError::InvalidInput(_))));
    assert_eq!(service.questions().list().len(), 2);
}

#[test]
fn test_answer_flow() {
    let service = setup_test_service();

    let answer = service
        .questions()
        .answer(1, "Try warm water in the morning.")
        .unwrap();

    let questions = service.questions().list();
    let q = questions.iter().find(|q| q.id == 1).unwrap();
    assert_eq!(q.answers.len(), 2);
    assert_eq!(q.answers[1].id, answer.id);
    assert_eq!(q.answers[1].likes, 0);
}

#[test]
fn test_answer_unknown_question_is_not_found() {
    let service = setup_test_service();

    let result = service.questions().answer(404, "Nobody will read this.");

    assert!(matches!(
        result,
        Err(SamvadError::NotFound {
            collection: Collection::Questions,
            id: 404
        })
    ));
}

#[test]
fn test_like_unlike_dislike_round_trip() {
    let service = setup_test_service();

    service.questions().like(1).unwrap();
    service.questions().like(1).unwrap();
    service.questions().unlike(1).unwrap();
    service.questions().dislike(1).unwrap();

    let snapshot = service.snapshot();
    let q = snapshot.question(1).unwrap();
    assert_eq!(q.likes, 3);
    assert_eq!(q.dislikes, 1);
}

#[test]
fn test_unlike_clamps_at_zero() {
    let service = setup_test_service();

    // Thought starts at 15 likes; question 2 sits at 1.
    service.questions().unlike(2).unwrap();
    service.questions().unlike(2).unwrap();

    assert_eq!(service.snapshot().question(2).unwrap().likes, 0);
}

#[test]
fn test_like_unknown_id_is_not_found_and_state_unchanged() {
    let service = setup_test_service();
    let before = service.snapshot();

    let result = service.thoughts().like(999);

    assert!(matches!(result, Err(SamvadError::NotFound { .. })));
    assert_eq!(service.snapshot(), before);
}

#[test]
fn test_answer_votes() {
    let service = setup_test_service();

    service.questions().like_answer(1, 11).unwrap();
    service.questions().dislike_answer(1, 11).unwrap();

    let snapshot = service.snapshot();
    let answer = &snapshot.question(1).unwrap().answers[0];
    assert_eq!(answer.likes, 1);
    assert_eq!(answer.dislikes, 1);

    // Answer id under the wrong question is not found.
    assert!(service.questions().like_answer(2, 11).is_err());
}

#[test]
fn test_comments_append_in_order() {
    let service = setup_test_service();

    service
        .thoughts()
        .comment(1, "Thank you, doctor.".to_string())
        .unwrap();
    service
        .thoughts()
        .comment(1, "Very insightful.".to_string())
        .unwrap();

    let thoughts = service.thoughts().list();
    assert_eq!(
        thoughts[0].comments,
        vec!["Thank you, doctor.", "Very insightful."]
    );
}

#[test]
fn test_query_filters_by_category_and_search() {
    let service = setup_test_service();

    let filter = FeedFilter {
        category: CategoryFilter::Only(Category::Ayurveda),
        search: "HERBS".to_string(),
    };
    let visible = service.query().questions(&filter);

    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, 2);
}

#[test]
fn test_events_flow_from_mutations() {
    let service = setup_test_service();
    let mut receiver = service.subscribe();

    let created = service
        .questions()
        .ask("Does yoga help with sleep?", Category::MentalWellness)
        .unwrap();
    service.thoughts().like(1).unwrap();

    match receiver.try_recv().unwrap() {
        StoreEvent::QuestionAsked { id, category } => {
            assert_eq!(id, created.id);
            assert_eq!(category, Category::MentalWellness);
        }
        other => panic!("Unexpected event: {:?}", other),
    }
    match receiver.try_recv().unwrap() {
        StoreEvent::PostLiked {
            collection,
            id,
            likes,
        } => {
            assert_eq!(collection, Collection::Thoughts);
            assert_eq!(id, 1);
            assert_eq!(likes, 16);
        }
        other => panic!("Unexpected event: {:?}", other),
    }
}

#[test]
fn test_failed_mutations_emit_no_events() {
    let service = setup_test_service();
    let mut receiver = service.subscribe();

    let _ = service.questions().like(999);
    let _ = service.questions().ask("", Category::Health);

    assert!(receiver.try_recv().is_err());
}

#[test]
fn test_from_config_with_seed_file() {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"questions": [{{"id": 7, "category": "Nutrition", "text": "Is ghee healthy?", "likes": 0, "dislikes": 0, "answers": []}}]}}"#
    )
    .unwrap();

    let config = libsamvad::Config {
        seed: libsamvad::config::SeedConfig {
            path: Some(file.path().to_str().unwrap().to_string()),
        },
        ui: Default::default(),
    };

    let service = ForumService::from_config(config).unwrap();
    let snapshot = service.snapshot();

    assert_eq!(snapshot.questions.len(), 1);
    assert_eq!(snapshot.questions[0].id, 7);
    assert!(snapshot.thoughts.is_empty());
}

#[test]
fn test_fresh_ids_exceed_seed_ids_even_with_large_seed_ids() {
    let seed = SeedData::from_json_str(
        r#"{"questions": [{"id": 99999999999999, "category": "Health", "text": "Foo", "likes": 0, "dislikes": 0, "answers": []}]}"#,
    )
    .unwrap();
    let service = ForumService::from_seed(seed);

    let created = service.questions().ask("Bar", Category::Health).unwrap();
    assert!(created.id > 99999999999999);
}
