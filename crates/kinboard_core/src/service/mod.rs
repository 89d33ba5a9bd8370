//! Session-facing use-case services.
//!
//! # Responsibility
//! - Orchestrate store mutations and query-parameter changes into one
//!   session API for presentation consumers.
//! - Keep renderers decoupled from collection ownership via change notices.

pub mod listeners;
pub mod session;

pub use listeners::{ChangeNotice, ListenerId, ListenerRegistry};
pub use session::PlannerSession;
