//! Equality filtering of interaction log records.
//!
//! Two entry points:
//!
//! - [`by_item`] - the single-key filter the router has always supported:
//!   keep the records about one item, or pass everything through when no
//!   item is requested.
//! - [`InteractionQuery`] - the multi-key form: any combination of the
//!   optional equality keys (`item_id`, `learner_id`, `kind`) a request can
//!   bind, combined with AND semantics.
//!
//! In both, an absent key is a pass-through: the input comes back unchanged
//! rather than being re-collected through a match-everything predicate.
//!
//! # Example
//!
//! ```
//! use learnlog_model::InteractionLog;
//! use learnlog_query::filter::{by_item, InteractionQuery};
//!
//! let logs = vec![
//!     InteractionLog::new(1, 1, 1, "attempt"),
//!     InteractionLog::new(2, 2, 2, "attempt"),
//! ];
//!
//! // Single-key filter
//! let hits = by_item(&logs, Some(1));
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].id, 1);
//!
//! // Multi-key query
//! let query = InteractionQuery::new().with_learner(2);
//! let hits = query.filter_logs(&logs);
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].id, 2);
//! ```

mod item;
mod query;

pub use item::by_item;
pub use query::InteractionQuery;

#[cfg(test)]
mod tests;
