//! Planner session facade.
//!
//! # Responsibility
//! - Own the event store and the session query parameters (search text,
//!   filter state, sort order).
//! - Expose the mutation/query API consumed by presentation layers.
//!
//! # Invariants
//! - All access goes through `&mut self` / `&self`, so mutation and query
//!   are linearized in call order; there is exactly one logical writer.
//! - Every successful mutation or parameter change emits one change notice
//!   after the new state is in place.

use crate::model::event::{Event, EventDraft, EventId, EventValidationError};
use crate::query::pipeline::{visible_events, FilterState, SortOrder};
use crate::service::listeners::{ChangeNotice, ListenerId, ListenerRegistry};
use crate::store::event_store::EventStore;
use log::{info, warn};
use std::collections::HashSet;

/// One interactive household-calendar session.
///
/// Holds the canonical collection plus the transient query parameters, and
/// derives the visible list on demand. Nothing here persists beyond the
/// session.
pub struct PlannerSession {
    store: EventStore,
    search_query: String,
    filters: FilterState,
    sort_order: SortOrder,
    listeners: ListenerRegistry,
}

impl PlannerSession {
    /// Creates a session over an existing store with default query
    /// parameters: empty search, no filters, ascending sort.
    pub fn new(store: EventStore) -> Self {
        Self {
            store,
            search_query: String::new(),
            filters: FilterState::default(),
            sort_order: SortOrder::Ascending,
            listeners: ListenerRegistry::new(),
        }
    }

    /// Creates the default session: seeded sample collection, empty search,
    /// no filters, ascending sort.
    pub fn with_sample_events() -> Self {
        Self::new(EventStore::seeded())
    }

    /// Validates and adds one event; the new event lands at the top of the
    /// collection.
    ///
    /// # Errors
    /// - [`EventValidationError`] when a required text field is blank. The
    ///   collection is untouched and no notice is emitted.
    pub fn add_event(&mut self, draft: EventDraft) -> Result<Event, EventValidationError> {
        match self.store.add(draft) {
            Ok(event) => {
                self.listeners.notify(&ChangeNotice::EventAdded { id: event.id });
                Ok(event)
            }
            Err(err) => {
                warn!("event=event_add_rejected module=service status=error reason={err}");
                Err(err)
            }
        }
    }

    /// Deletes one event by id. Missing ids are a no-op, which makes this
    /// idempotent. A notice is emitted only when something was removed.
    pub fn delete_event(&mut self, id: EventId) {
        if self.store.remove(id) {
            self.listeners.notify(&ChangeNotice::EventRemoved { id });
        }
    }

    /// Returns one event by id, regardless of current filters.
    pub fn event(&self, id: EventId) -> Option<&Event> {
        self.store.get(id)
    }

    /// The full collection in insertion order, ignoring search and filters.
    pub fn events(&self) -> &[Event] {
        self.store.events()
    }

    /// Replaces the free-text search query.
    pub fn set_search_query(&mut self, text: impl Into<String>) {
        self.search_query = text.into();
        info!(
            "event=search_changed module=service status=ok query_len={}",
            self.search_query.len()
        );
        self.listeners.notify(&ChangeNotice::SearchChanged);
    }

    /// Replaces both constraint sets at once. Empty sets lift the
    /// corresponding constraint.
    pub fn set_filters(&mut self, members: HashSet<String>, categories: HashSet<String>) {
        self.filters = FilterState {
            members,
            categories,
        };
        info!(
            "event=filters_changed module=service status=ok member_count={} category_count={}",
            self.filters.members.len(),
            self.filters.categories.len()
        );
        self.listeners.notify(&ChangeNotice::FiltersChanged);
    }

    /// Flips between ascending and descending date-bucket order.
    pub fn toggle_sort_order(&mut self) {
        self.sort_order = self.sort_order.toggled();
        info!(
            "event=sort_toggled module=service status=ok order={:?}",
            self.sort_order
        );
        self.listeners.notify(&ChangeNotice::SortChanged);
    }

    /// Derives the currently visible event sequence from the collection and
    /// the session query parameters. Recomputable any number of times; the
    /// `&self` receiver guarantees it observes a consistent snapshot.
    pub fn visible_events(&self) -> Vec<Event> {
        visible_events(
            self.store.events(),
            &self.search_query,
            &self.filters,
            self.sort_order,
        )
    }

    /// Registers a change listener; it fires after every mutation or
    /// query-parameter change until unsubscribed.
    pub fn subscribe(&mut self, listener: Box<dyn Fn(&ChangeNotice)>) -> ListenerId {
        self.listeners.subscribe(listener)
    }

    /// Removes a change listener. Unknown ids are a no-op.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// Total number of events in the collection, ignoring filters.
    pub fn event_count(&self) -> usize {
        self.store.len()
    }
}

impl Default for PlannerSession {
    fn default() -> Self {
        Self::with_sample_events()
    }
}
