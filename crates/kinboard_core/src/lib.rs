//! Core domain logic for Kinboard, a household calendar board.
//! This crate is the single source of truth for collection and query
//! invariants; presentation layers are stateless consumers.

pub mod logging;
pub mod model;
pub mod query;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::event::{
    color_for_category, seed_events, Event, EventDraft, EventId, EventValidationError,
};
pub use query::pipeline::{visible_events, FilterState, SortOrder};
pub use service::listeners::{ChangeNotice, ListenerId, ListenerRegistry};
pub use service::session::PlannerSession;
pub use store::event_store::EventStore;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
