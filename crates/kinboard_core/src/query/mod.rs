//! Visible-event derivation.
//!
//! # Responsibility
//! - Compute the displayed event sequence from the collection and the
//!   current query parameters.
//! - Keep filtering and ordering rules in one pure, recomputable place.
//!
//! # Invariants
//! - The pipeline has no side effects and never fails.
//! - Equal inputs produce equal outputs, any number of times.

pub mod pipeline;

pub use pipeline::{visible_events, FilterState, SortOrder};
