//! Interaction log records.
//!
//! An [`InteractionLog`] is one row of the backend's interaction history:
//! a learner acted on an item, tagged with the kind of action. The backend
//! owns the records; this crate only decodes and reads them.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// A record of a learner's action on an item.
///
/// Records arrive from the backend as JSON. Optional fields are
/// serde-defaulted so payloads from older backend versions still decode.
///
/// # Example
///
/// ```
/// use learnlog_model::InteractionLog;
///
/// let log: InteractionLog = serde_json::from_str(
///     r#"{"id": 1, "learner_id": 2, "item_id": 3, "kind": "attempt"}"#,
/// ).unwrap();
///
/// assert_eq!(log.item_id, 3);
/// assert!(log.occurred_at.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionLog {
    /// Unique identifier of the log entry.
    pub id: i64,

    /// The learner who produced the interaction.
    pub learner_id: i64,

    /// The item the interaction is about.
    pub item_id: i64,

    /// Interaction type tag (e.g. "attempt").
    pub kind: String,

    /// When the interaction was recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occurred_at: Option<DateTime<Utc>>,
}

impl InteractionLog {
    /// Creates a record without a timestamp.
    pub fn new(id: i64, learner_id: i64, item_id: i64, kind: impl Into<String>) -> Self {
        Self {
            id,
            learner_id,
            item_id,
            kind: kind.into(),
            occurred_at: None,
        }
    }

    /// Decodes a single record from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Json`] if the payload is not a valid record.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Decodes a batch of records from a JSON array.
    ///
    /// Log ids must be unique within a batch.
    ///
    /// # Errors
    ///
    /// - Returns [`ModelError::Json`] if the payload is not a valid array of records.
    /// - Returns [`ModelError::DuplicateId`] if an id appears more than once.
    pub fn batch_from_json(json: &str) -> Result<Vec<Self>> {
        let batch: Vec<Self> = serde_json::from_str(json)?;

        let mut seen = HashSet::with_capacity(batch.len());
        for log in &batch {
            if !seen.insert(log.id) {
                return Err(ModelError::DuplicateId { id: log.id });
            }
        }

        Ok(batch)
    }
}
