//! In-process change-listener registry.
//!
//! # Responsibility
//! - Let presentation layers observe store mutations and query-parameter
//!   changes without holding state of their own.
//!
//! # Invariants
//! - Listener ids are never reused within a registry's lifetime.
//! - Notification order follows subscription order.

use crate::model::event::EventId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Handle for one registered listener.
pub type ListenerId = u64;

/// What changed, carried to every registered listener.
///
/// Notices carry ids and parameter values only, never event content, so a
/// listener re-reads the session for anything it wants to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeNotice {
    EventAdded { id: EventId },
    EventRemoved { id: EventId },
    SearchChanged,
    FiltersChanged,
    SortChanged,
}

/// Ordered registry of change listeners.
#[derive(Default)]
pub struct ListenerRegistry {
    listeners: BTreeMap<ListenerId, Box<dyn Fn(&ChangeNotice)>>,
    next_id: ListenerId,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one listener and returns its handle.
    pub fn subscribe(&mut self, listener: Box<dyn Fn(&ChangeNotice)>) -> ListenerId {
        let id = self.next_id;
        self.next_id += 1;
        self.listeners.insert(id, listener);
        id
    }

    /// Removes one listener. Unknown ids are a no-op.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(&id).is_some()
    }

    /// Delivers one notice to every listener, in subscription order.
    pub fn notify(&self, notice: &ChangeNotice) {
        for listener in self.listeners.values() {
            listener(notice);
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}
