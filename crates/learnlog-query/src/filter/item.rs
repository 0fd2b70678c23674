//! The single-key item filter.

use learnlog_model::InteractionLog;

/// Filters records by item identifier.
///
/// With a key, keeps exactly the records whose `item_id` equals it, in their
/// original relative order. Without a key the input comes back unchanged:
/// absence short-circuits instead of matching everything element-wise, so
/// the pass-through contract survives any future filter keys added alongside
/// this one.
///
/// Only `item_id` participates in matching; `learner_id`, `kind`, and
/// `occurred_at` never affect the outcome.
///
/// # Example
///
/// ```
/// use learnlog_model::InteractionLog;
/// use learnlog_query::filter::by_item;
///
/// let logs = vec![
///     InteractionLog::new(1, 1, 1, "attempt"),
///     InteractionLog::new(2, 2, 2, "attempt"),
///     InteractionLog::new(3, 1, 1, "attempt"),
/// ];
///
/// let hits = by_item(&logs, Some(1));
/// assert_eq!(hits.len(), 2);
///
/// // No key: everything passes through.
/// assert_eq!(by_item(&logs, None).len(), 3);
/// ```
pub fn by_item<'a>(
    interactions: &'a [InteractionLog],
    item_id: Option<i64>,
) -> Vec<&'a InteractionLog> {
    // No key requested: pass-through, not an element-wise match-everything.
    let Some(item_id) = item_id else {
        return interactions.iter().collect();
    };

    interactions
        .iter()
        .filter(|log| log.item_id == item_id)
        .collect()
}
