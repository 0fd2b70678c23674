//! Data model for learnlog interaction records.
//!
//! This crate defines the [`InteractionLog`] record the surrounding backend
//! exchanges with the query layer, together with the JSON decode boundary
//! for record batches.

pub mod error;
pub mod interaction;

pub use error::{ModelError, Result};
pub use interaction::InteractionLog;
