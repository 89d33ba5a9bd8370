//! Canonical event collection ownership.
//!
//! # Responsibility
//! - Hold the single mutable event collection for a session.
//! - Apply create/delete mutations and assign identifiers.
//!
//! # Invariants
//! - Mutations go through [`event_store::EventStore`]; no other component
//!   holds a mutable handle to the collection.
//! - Writes validate drafts before any collection change.

pub mod event_store;

pub use event_store::EventStore;
