//! Query-side filtering over interaction logs.
//!
//! This crate implements the filtering step the backend's interaction router
//! runs before returning results: given the records it already holds and the
//! optional keys bound from the request, produce the matching subsequence
//! without touching the records themselves.
//!
//! All filtering is pure and synchronous. Nothing here allocates beyond the
//! output sequence, so any number of callers can filter concurrently.

pub mod filter;

pub use filter::{by_item, InteractionQuery};
