//! In-memory event store.
//!
//! # Responsibility
//! - Own the canonical, session-scoped event collection.
//! - Generate ids, resolve colors and apply create/delete mutations.
//!
//! # Invariants
//! - `id` is unique across the live collection at all times.
//! - Collection order is insertion order; new events are prepended, so the
//!   most recently added event sits at index 0.
//! - A rejected draft leaves the collection untouched.

use crate::model::event::{seed_events, Event, EventDraft, EventId, EventValidationError};
use log::{debug, info};

/// Session-scoped owner of the canonical event collection.
///
/// There is no persistence behind this store. Events live exactly as long
/// as the session that created them.
#[derive(Debug, Default)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store preloaded with the illustrative sample collection,
    /// so the pipeline is exercisable out of the box.
    pub fn seeded() -> Self {
        let mut store = Self::new();
        for draft in seed_events() {
            // Seed drafts are static and well-formed; a failure here would
            // be a bug in the seed table itself.
            debug_assert!(draft.validate().is_ok());
            let _ = store.add(draft);
        }
        store
    }

    /// Validates a draft, assigns a fresh id, resolves the display color
    /// and prepends the new event.
    ///
    /// # Errors
    /// - [`EventValidationError`] when `title`, `date` or `time` is blank.
    ///   The collection is not mutated on failure.
    pub fn add(&mut self, draft: EventDraft) -> Result<Event, EventValidationError> {
        draft.validate()?;

        let event = draft.into_event();
        info!(
            "event=event_added module=store status=ok id={} category={} member_count={}",
            event.id,
            event.category,
            event.members.len()
        );
        self.events.insert(0, event.clone());
        Ok(event)
    }

    /// Removes the event with the matching id.
    ///
    /// Returns whether an event was removed. A missing id is a no-op, not
    /// an error, which makes removal idempotent.
    pub fn remove(&mut self, id: EventId) -> bool {
        let before = self.events.len();
        self.events.retain(|event| event.id != id);
        let removed = self.events.len() < before;
        if removed {
            info!("event=event_removed module=store status=ok id={id}");
        } else {
            debug!("event=event_remove_skipped module=store status=ok id={id}");
        }
        removed
    }

    /// Returns one event by id.
    pub fn get(&self, id: EventId) -> Option<&Event> {
        self.events.iter().find(|event| event.id == id)
    }

    /// Read-only view of the collection in insertion order,
    /// most-recently-added first.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
