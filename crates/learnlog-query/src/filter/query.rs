//! Multi-key equality queries over interaction logs.

use learnlog_model::InteractionLog;
use serde::{Deserialize, Serialize};

/// Optional equality keys for filtering interaction logs.
///
/// Mirrors the optional query parameters the backend router binds: every key
/// a request leaves out is absent here and satisfied vacuously, while
/// present keys combine with AND semantics. A query with only `item_id` set
/// behaves exactly like [`by_item`](super::by_item).
///
/// # Example
///
/// ```
/// use learnlog_model::InteractionLog;
/// use learnlog_query::filter::InteractionQuery;
///
/// let logs = vec![
///     InteractionLog::new(1, 1, 1, "attempt"),
///     InteractionLog::new(2, 2, 1, "attempt"),
///     InteractionLog::new(3, 2, 2, "attempt"),
/// ];
///
/// // Keys bound from a request, e.g. ?item_id=1&learner_id=2
/// let query = InteractionQuery::new().with_item(1).with_learner(2);
/// let hits = query.filter_logs(&logs);
///
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].id, 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InteractionQuery {
    /// Match records about this item.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_id: Option<i64>,

    /// Match records produced by this learner.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub learner_id: Option<i64>,

    /// Match records with exactly this kind tag.
    ///
    /// Kinds are machine tags, so matching is exact rather than
    /// case-insensitive.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl InteractionQuery {
    /// Creates an unconstrained query (all keys absent).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the item key.
    pub fn with_item(mut self, item_id: i64) -> Self {
        self.item_id = Some(item_id);
        self
    }

    /// Sets the learner key.
    pub fn with_learner(mut self, learner_id: i64) -> Self {
        self.learner_id = Some(learner_id);
        self
    }

    /// Sets the kind key.
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// Returns true if no key is set.
    pub fn is_unconstrained(&self) -> bool {
        self.item_id.is_none() && self.learner_id.is_none() && self.kind.is_none()
    }

    /// Returns true if the record satisfies every present key.
    pub fn matches(&self, log: &InteractionLog) -> bool {
        self.item_id.is_none_or(|id| log.item_id == id)
            && self.learner_id.is_none_or(|id| log.learner_id == id)
            && self.kind.as_deref().is_none_or(|kind| log.kind == kind)
    }

    /// Filters a slice of records, keeping those that match every present key.
    ///
    /// Matching records keep their original relative order. An unconstrained
    /// query short-circuits to the full input rather than testing each record
    /// against a vacuous predicate.
    pub fn filter_logs<'a>(&self, interactions: &'a [InteractionLog]) -> Vec<&'a InteractionLog> {
        if self.is_unconstrained() {
            return interactions.iter().collect();
        }

        interactions
            .iter()
            .filter(|log| self.matches(log))
            .collect()
    }
}
