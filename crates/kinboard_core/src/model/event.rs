//! Event domain model.
//!
//! # Responsibility
//! - Define the canonical calendar-entry record and its creation draft.
//! - Validate drafts before they become collection state.
//! - Resolve the fixed category/color association.
//!
//! # Invariants
//! - `id` is stable and never reused for another event.
//! - `title`, `date` and `time` are non-blank on every validated draft.
//! - `date` is an opaque label; only the query layer assigns it an ordering.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for every event in the live collection.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type EventId = Uuid;

/// Canonical record for one household calendar entry.
///
/// `date` and `time` are intentionally free text. The household board shows
/// labels like "Today" or "4:00 PM - 5:30 PM" verbatim and never does real
/// date arithmetic on them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Stable ID used for deletion, detail lookup and listener notices.
    pub id: EventId,
    /// Display title; non-blank.
    pub title: String,
    /// Free-text time label, e.g. "4:00 PM - 5:30 PM". Not parsed.
    pub time: String,
    /// Free-text date label; ordered only by the today/tomorrow/other bucket.
    pub date: String,
    /// Free-text location; may be empty.
    pub location: String,
    /// Member ids attending this event, in the order they were picked.
    /// Not validated against a roster.
    pub members: Vec<String>,
    /// Single category tag, e.g. "sports". Not enforced as an enum so the
    /// collection stays open to tags the board does not know yet.
    pub category: String,
    /// Display color tag resolved from `category` at creation.
    pub color: String,
}

/// Creation input for [`Event`]: every field except the generated `id` and
/// the derived `color`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDraft {
    pub title: String,
    pub time: String,
    pub date: String,
    pub location: String,
    pub members: Vec<String>,
    pub category: String,
}

/// Validation error for malformed event drafts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventValidationError {
    EmptyTitle,
    EmptyDate,
    EmptyTime,
}

impl Display for EventValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "event title must not be blank"),
            Self::EmptyDate => write!(f, "event date label must not be blank"),
            Self::EmptyTime => write!(f, "event time label must not be blank"),
        }
    }
}

impl Error for EventValidationError {}

impl EventDraft {
    /// Creates a draft with empty location and no members.
    pub fn new(
        title: impl Into<String>,
        time: impl Into<String>,
        date: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            time: time.into(),
            date: date.into(),
            location: String::new(),
            members: Vec::new(),
            category: category.into(),
        }
    }

    /// Checks required text fields before the draft may enter the store.
    ///
    /// # Contract
    /// - `title`, `date` and `time` must contain non-whitespace text.
    /// - `location`, `members` and `category` may be empty.
    pub fn validate(&self) -> Result<(), EventValidationError> {
        if self.title.trim().is_empty() {
            return Err(EventValidationError::EmptyTitle);
        }
        if self.date.trim().is_empty() {
            return Err(EventValidationError::EmptyDate);
        }
        if self.time.trim().is_empty() {
            return Err(EventValidationError::EmptyTime);
        }
        Ok(())
    }

    /// Promotes a validated draft to a full event with a fresh stable ID
    /// and a resolved display color.
    pub(crate) fn into_event(self) -> Event {
        let color = color_for_category(&self.category).to_string();
        Event {
            id: Uuid::new_v4(),
            title: self.title,
            time: self.time,
            date: self.date,
            location: self.location,
            members: self.members,
            category: self.category,
            color,
        }
    }
}

/// Resolves the display color tag for one category.
///
/// The mapping is total: unrecognized categories fall back to `emerald`.
pub fn color_for_category(category: &str) -> &'static str {
    match category {
        "work" => "slate",
        "school" => "lime",
        "sports" => "emerald",
        "music" => "teal",
        "home" => "green",
        _ => "emerald",
    }
}

/// Illustrative starter collection so a fresh session has something to
/// browse. Listed oldest-first; the store prepends, so callers seeding a
/// store insert these in order and end up with `Client Meeting` first.
pub fn seed_events() -> Vec<EventDraft> {
    vec![
        EventDraft {
            title: "Soccer Practice".to_string(),
            time: "4:00 PM - 5:30 PM".to_string(),
            date: "Today".to_string(),
            location: "City Fields, Pitch 3".to_string(),
            members: vec!["tommy".to_string(), "dad".to_string()],
            category: "sports".to_string(),
        },
        EventDraft {
            title: "Piano Lesson".to_string(),
            time: "5:00 PM - 6:00 PM".to_string(),
            date: "Today".to_string(),
            location: "Music Academy".to_string(),
            members: vec!["sarah".to_string(), "mom".to_string()],
            category: "music".to_string(),
        },
        EventDraft {
            title: "Family Dinner".to_string(),
            time: "7:30 PM - 9:00 PM".to_string(),
            date: "Today".to_string(),
            location: "Home".to_string(),
            members: vec![
                "mom".to_string(),
                "dad".to_string(),
                "sarah".to_string(),
                "tommy".to_string(),
            ],
            category: "home".to_string(),
        },
        EventDraft {
            title: "Grocery Shopping".to_string(),
            time: "10:00 AM - 11:30 AM".to_string(),
            date: "Tomorrow".to_string(),
            location: "Whole Foods".to_string(),
            members: vec!["dad".to_string()],
            category: "home".to_string(),
        },
        EventDraft {
            title: "Math Tutoring".to_string(),
            time: "3:30 PM - 4:30 PM".to_string(),
            date: "Tomorrow".to_string(),
            location: "Library".to_string(),
            members: vec!["sarah".to_string()],
            category: "school".to_string(),
        },
        EventDraft {
            title: "Client Meeting".to_string(),
            time: "1:00 PM - 2:00 PM".to_string(),
            date: "Tomorrow".to_string(),
            location: "Zoom".to_string(),
            members: vec!["mom".to_string()],
            category: "work".to_string(),
        },
    ]
}
