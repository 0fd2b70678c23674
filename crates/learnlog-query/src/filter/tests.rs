//! Tests for the item filter, ported from the backend's unit suite.

use chrono::Utc;
use learnlog_model::InteractionLog;

use super::by_item;

fn make_log(id: i64, learner_id: i64, item_id: i64) -> InteractionLog {
    InteractionLog::new(id, learner_id, item_id, "attempt")
}

// ==================== Pass-Through Tests ====================

#[test]
fn test_returns_all_when_item_id_is_none() {
    let interactions = vec![make_log(1, 1, 1), make_log(2, 2, 2)];

    let result = by_item(&interactions, None);

    assert_eq!(result, interactions.iter().collect::<Vec<_>>());
}

#[test]
fn test_pass_through_keeps_length_and_order() {
    let interactions = vec![make_log(3, 1, 1), make_log(1, 2, 2), make_log(2, 3, 3)];

    let ids: Vec<i64> = by_item(&interactions, None)
        .iter()
        .map(|log| log.id)
        .collect();

    assert_eq!(ids, vec![3, 1, 2]);
}

#[test]
fn test_empty_input_without_key_yields_empty() {
    let interactions: Vec<InteractionLog> = vec![];

    let result = by_item(&interactions, None);

    assert!(result.is_empty());
}

// ==================== Matching Tests ====================

#[test]
fn test_returns_empty_for_empty_input() {
    let interactions: Vec<InteractionLog> = vec![];

    let result = by_item(&interactions, Some(1));

    assert!(result.is_empty());
}

#[test]
fn test_returns_interaction_with_matching_id() {
    let interactions = vec![make_log(1, 1, 1), make_log(2, 2, 2)];

    let result = by_item(&interactions, Some(1));

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, 1);
}

#[test]
fn test_returns_multiple_interactions_with_matching_ids() {
    let interactions = vec![
        make_log(1, 1, 1),
        make_log(2, 2, 2),
        make_log(3, 1, 1),
        make_log(4, 3, 3),
    ];

    let result = by_item(&interactions, Some(1));

    assert_eq!(result.len(), 2);
    assert!(result.iter().all(|log| log.item_id == 1));

    let ids: Vec<i64> = result.iter().map(|log| log.id).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn test_returns_empty_when_no_interactions_match() {
    let interactions = vec![make_log(1, 1, 1), make_log(2, 2, 2), make_log(3, 3, 3)];

    let result = by_item(&interactions, Some(99));

    assert!(result.is_empty());
}

// ==================== Field Irrelevance Tests ====================

#[test]
fn test_includes_interaction_with_different_learner_but_matching_item() {
    // learner_id is not a factor in item filtering: record 3 has a different
    // learner than record 1 but the same item, and both must come back.
    let interactions = vec![
        make_log(1, 1, 1),
        make_log(2, 2, 2),
        make_log(3, 2, 1),
        make_log(4, 1, 3),
    ];

    let result = by_item(&interactions, Some(1));

    assert_eq!(result.len(), 2);
    assert!(result.iter().all(|log| log.item_id == 1));
    assert!(result
        .iter()
        .any(|log| log.id == 3 && log.learner_id == 2 && log.item_id == 1));

    let ids: Vec<i64> = result.iter().map(|log| log.id).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn test_kind_and_timestamp_never_affect_matching() {
    let mut review = make_log(2, 1, 1);
    review.kind = "review".to_string();
    review.occurred_at = Some(Utc::now());

    let interactions = vec![make_log(1, 1, 1), review];

    let result = by_item(&interactions, Some(1));

    assert_eq!(result.len(), 2);
}

// ==================== Property Tests ====================

#[test]
fn test_filtering_is_idempotent() {
    let interactions = vec![
        make_log(1, 1, 1),
        make_log(2, 2, 2),
        make_log(3, 1, 1),
        make_log(4, 3, 3),
    ];

    let once: Vec<InteractionLog> = by_item(&interactions, Some(1))
        .into_iter()
        .cloned()
        .collect();
    let twice = by_item(&once, Some(1));

    assert_eq!(twice, once.iter().collect::<Vec<_>>());
}

#[test]
fn test_matches_are_never_reordered_or_duplicated() {
    let interactions = vec![
        make_log(7, 1, 5),
        make_log(3, 2, 5),
        make_log(9, 1, 2),
        make_log(5, 3, 5),
    ];

    let ids: Vec<i64> = by_item(&interactions, Some(5))
        .iter()
        .map(|log| log.id)
        .collect();

    assert_eq!(ids, vec![7, 3, 5]);
}

#[test]
fn test_input_records_are_untouched() {
    let interactions = vec![make_log(1, 1, 1), make_log(2, 2, 2)];
    let before = interactions.clone();

    let _ = by_item(&interactions, Some(1));
    let _ = by_item(&interactions, None);

    assert_eq!(interactions, before);
}
