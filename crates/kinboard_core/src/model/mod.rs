//! Domain model for household calendar entries.
//!
//! # Responsibility
//! - Define the canonical event record shared by store, query and service
//!   layers.
//! - Keep draft validation and the category/color mapping next to the data
//!   they govern.
//!
//! # Invariants
//! - Every event is identified by a stable `EventId`.
//! - `color` is derived from `category` exactly once, at creation.

pub mod event;

pub use event::{
    color_for_category, seed_events, Event, EventDraft, EventId, EventValidationError,
};
