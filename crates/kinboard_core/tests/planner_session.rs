use kinboard_core::{
    ChangeNotice, EventDraft, EventStore, EventValidationError, PlannerSession, SortOrder,
};
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

fn draft(title: &str, date: &str, category: &str) -> EventDraft {
    EventDraft {
        title: title.to_string(),
        time: "12:00 PM".to_string(),
        date: date.to_string(),
        location: String::new(),
        members: Vec::new(),
        category: category.to_string(),
    }
}

fn set(values: &[&str]) -> HashSet<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[test]
fn default_session_starts_seeded_and_unfiltered() {
    let session = PlannerSession::default();
    assert_eq!(session.event_count(), 6);
    assert_eq!(session.search_query(), "");
    assert!(session.filters().is_unconstrained());
    assert_eq!(session.sort_order(), SortOrder::Ascending);
    assert_eq!(session.visible_events().len(), 6);
}

#[test]
fn added_event_is_first_among_its_date_bucket() {
    let mut session = PlannerSession::with_sample_events();
    let added = session.add_event(draft("Vet Appointment", "Today", "home")).unwrap();

    let visible = session.visible_events();
    // Ascending sort puts "Today" events first; within that bucket the new
    // event leads because the store prepends.
    assert_eq!(visible[0].id, added.id);
}

#[test]
fn add_event_reports_validation_failure_to_the_caller() {
    let mut session = PlannerSession::with_sample_events();
    let before = session.event_count();

    let err = session.add_event(draft("   ", "Today", "home")).unwrap_err();
    assert_eq!(err, EventValidationError::EmptyTitle);
    assert_eq!(session.event_count(), before);
}

#[test]
fn delete_event_is_idempotent() {
    let mut session = PlannerSession::with_sample_events();
    let added = session.add_event(draft("Ephemeral", "Today", "home")).unwrap();
    let before = session.event_count();

    session.delete_event(added.id);
    session.delete_event(added.id);
    assert_eq!(session.event_count(), before - 1);
    assert!(session.event(added.id).is_none());
}

#[test]
fn search_narrows_and_clearing_restores() {
    let mut session = PlannerSession::with_sample_events();

    session.set_search_query("soccer");
    let hits = session.visible_events();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "Soccer Practice");

    session.set_search_query("");
    assert_eq!(session.visible_events().len(), 6);
}

#[test]
fn filters_narrow_and_combine_with_search() {
    let mut session = PlannerSession::with_sample_events();

    session.set_filters(set(&["dad"]), HashSet::new());
    let dad_events = session.visible_events();
    assert!(dad_events.iter().all(|e| e.members.contains(&"dad".to_string())));

    session.set_search_query("grocery");
    let narrowed = session.visible_events();
    assert_eq!(narrowed.len(), 1);
    assert_eq!(narrowed[0].title, "Grocery Shopping");
}

#[test]
fn toggling_sort_twice_restores_the_original_sequence() {
    let mut session = PlannerSession::with_sample_events();
    let original: Vec<_> = session.visible_events().iter().map(|e| e.id).collect();

    session.toggle_sort_order();
    assert_eq!(session.sort_order(), SortOrder::Descending);
    let reversed_buckets: Vec<_> = session.visible_events().iter().map(|e| e.id).collect();
    assert_ne!(original, reversed_buckets);

    session.toggle_sort_order();
    let restored: Vec<_> = session.visible_events().iter().map(|e| e.id).collect();
    assert_eq!(original, restored);
}

#[test]
fn visible_events_is_stable_across_repeated_reads() {
    let session = PlannerSession::with_sample_events();
    let first = session.visible_events();
    let second = session.visible_events();
    assert_eq!(first, second);
}

#[test]
fn listeners_observe_every_mutation_and_parameter_change() {
    let notices = Rc::new(RefCell::new(Vec::new()));
    let mut session = PlannerSession::new(EventStore::new());

    let sink = Rc::clone(&notices);
    session.subscribe(Box::new(move |notice| {
        sink.borrow_mut().push(notice.clone());
    }));

    let added = session.add_event(draft("Observed", "Today", "home")).unwrap();
    session.set_search_query("x");
    session.set_filters(set(&["mom"]), HashSet::new());
    session.toggle_sort_order();
    session.delete_event(added.id);
    // Second delete is a no-op and must not emit a notice.
    session.delete_event(added.id);

    assert_eq!(
        *notices.borrow(),
        vec![
            ChangeNotice::EventAdded { id: added.id },
            ChangeNotice::SearchChanged,
            ChangeNotice::FiltersChanged,
            ChangeNotice::SortChanged,
            ChangeNotice::EventRemoved { id: added.id },
        ]
    );
}

#[test]
fn unsubscribed_listener_is_not_notified() {
    let count = Rc::new(RefCell::new(0));
    let mut session = PlannerSession::new(EventStore::new());

    let sink = Rc::clone(&count);
    let id = session.subscribe(Box::new(move |_notice| {
        *sink.borrow_mut() += 1;
    }));

    session.set_search_query("first");
    assert!(session.unsubscribe(id));
    session.set_search_query("second");

    assert_eq!(*count.borrow(), 1);
}

#[test]
fn rejected_add_emits_no_notice() {
    let notices = Rc::new(RefCell::new(Vec::<ChangeNotice>::new()));
    let mut session = PlannerSession::new(EventStore::new());

    let sink = Rc::clone(&notices);
    session.subscribe(Box::new(move |notice| {
        sink.borrow_mut().push(notice.clone());
    }));

    assert!(session.add_event(draft("", "Today", "home")).is_err());
    assert!(notices.borrow().is_empty());
}
