//! Filter and sort pipeline over the event collection.
//!
//! # Responsibility
//! - Apply the search, member and category filters conjunctively.
//! - Order survivors by the coarse date bucket with a stable sort.
//!
//! # Invariants
//! - Filters only narrow; no stage can add events.
//! - Events in the same date bucket keep their pre-sort relative order.
//! - All inputs are total; the pipeline always produces a result.

use crate::model::event::Event;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Currently selected member and category constraint sets.
///
/// An empty set means "no constraint", not "match nothing".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub members: HashSet<String>,
    pub categories: HashSet<String>,
}

impl FilterState {
    /// Returns whether both constraint sets are empty.
    pub fn is_unconstrained(&self) -> bool {
        self.members.is_empty() && self.categories.is_empty()
    }
}

/// Direction of the date-bucket ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Today first, then tomorrow, then everything else.
    #[default]
    Ascending,
    /// Reverse bucket order.
    Descending,
}

impl SortOrder {
    /// Returns the opposite direction.
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Derives the displayed event sequence.
///
/// Pure function of its inputs: filters are applied conjunctively in
/// collection order, then survivors are stably sorted by date bucket.
/// Within a bucket, events keep their relative collection order
/// (most-recently-added first).
pub fn visible_events(
    events: &[Event],
    search_query: &str,
    filters: &FilterState,
    order: SortOrder,
) -> Vec<Event> {
    let needle = search_query.to_lowercase();

    let mut result: Vec<Event> = events
        .iter()
        .filter(|event| matches_search(event, &needle))
        .filter(|event| matches_members(event, &filters.members))
        .filter(|event| matches_category(event, &filters.categories))
        .cloned()
        .collect();

    // Vec::sort_by is stable, which is what keeps same-bucket events in
    // insertion order. Reversing the comparison (rather than negating an
    // ordinal) flips bucket order without disturbing ties.
    result.sort_by(|a, b| {
        let (a_bucket, b_bucket) = (date_ordinal(&a.date), date_ordinal(&b.date));
        match order {
            SortOrder::Ascending => a_bucket.cmp(&b_bucket),
            SortOrder::Descending => b_bucket.cmp(&a_bucket),
        }
    });

    result
}

/// Maps a free-text date label onto the coarse sort bucket:
/// `today` -> 0, `tomorrow` -> 1, anything else -> 2.
fn date_ordinal(date: &str) -> u8 {
    match date.to_lowercase().as_str() {
        "today" => 0,
        "tomorrow" => 1,
        _ => 2,
    }
}

/// Case-insensitive substring match on title or location.
///
/// `needle` must already be lowercased; an empty needle passes everything.
fn matches_search(event: &Event, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    event.title.to_lowercase().contains(needle)
        || event.location.to_lowercase().contains(needle)
}

/// OR semantics across selected members: at least one selected id must
/// appear in the event's member list. An empty selection passes everything.
fn matches_members(event: &Event, selected: &HashSet<String>) -> bool {
    if selected.is_empty() {
        return true;
    }
    event.members.iter().any(|member| selected.contains(member))
}

/// Exact single-value membership for the category tag. An empty selection
/// passes everything.
fn matches_category(event: &Event, selected: &HashSet<String>) -> bool {
    selected.is_empty() || selected.contains(&event.category)
}

#[cfg(test)]
mod tests {
    use super::{date_ordinal, SortOrder};

    #[test]
    fn date_ordinal_buckets_are_case_insensitive() {
        assert_eq!(date_ordinal("Today"), 0);
        assert_eq!(date_ordinal("TODAY"), 0);
        assert_eq!(date_ordinal("tomorrow"), 1);
        assert_eq!(date_ordinal("Tomorrow"), 1);
        assert_eq!(date_ordinal("Next Friday"), 2);
        assert_eq!(date_ordinal(""), 2);
    }

    #[test]
    fn toggling_twice_restores_direction() {
        assert_eq!(SortOrder::Ascending.toggled(), SortOrder::Descending);
        assert_eq!(SortOrder::Ascending.toggled().toggled(), SortOrder::Ascending);
    }
}
