use crate::prelude::*;
use similar_asserts::assert_eq;

fn documented_with_handler(events: &EventManager) {
    events.doc("on_test", "Test event");
    events
        .get("on_test")
        .register(Handler::infallible(|_| ()))
        .unwrap();

    let ev = events.get("on_test");
    assert_eq!(ev.kind(), EventKind::Event);
    assert_eq!(ev.len(), 1);
    assert_eq!(ev.doc().as_deref(), Some("Test event"));
}

#[test]
fn transmogrify_by_kind() {
    let events = EventManager::new();
    documented_with_handler(&events);

    events.transmogrify("on_test", EventKind::Load).unwrap();

    let ev = events.get("on_test");
    assert_eq!(ev.kind(), EventKind::Load);
    assert_eq!(ev.len(), 1);
    assert_eq!(ev.doc().as_deref(), Some("Test event"));
}

#[test]
fn transmogrify_by_string() {
    let events = EventManager::new();
    documented_with_handler(&events);

    events.transmogrify("on_test", "LoadEvent").unwrap();

    let ev = events.get("on_test");
    assert_eq!(ev.kind(), EventKind::Load);
    assert_eq!(ev.len(), 1);
    assert_eq!(ev.doc().as_deref(), Some("Test event"));
}

#[test]
fn transmogrify_back_to_plain_event() {
    let events = EventManager::new();
    events.transmogrify("on_test", "LoadEvent").unwrap();
    events.get("on_test").fire(()).unwrap();

    events.transmogrify("on_test", "Event").unwrap();

    let log = CallLog::new();
    events.get("on_test").register(log.handler("late", ())).unwrap();
    assert_eq!(log.count(), 0);
}

#[test]
fn transmogrify_rejects_unknown_variant() {
    let events = EventManager::new();

    let err = events.transmogrify("on_test", "loadevent").unwrap_err();

    assert_eq!(err, EventError::UnknownVariant("loadevent".to_string()));
    assert_eq!(err.to_string(), "unknown event variant: loadevent");
}
