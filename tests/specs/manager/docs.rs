use crate::prelude::*;
use similar_asserts::assert_eq;

#[test]
fn doc_before_first_access() {
    let events = EventManager::new();
    events.doc("on_test", "Test event");

    assert_eq!(events.get("on_test").doc().as_deref(), Some("Test event"));
}

#[test]
fn doc_after_first_access() {
    let events = EventManager::new();
    let ev = events.get("on_test");
    events.doc("on_test", "Test event");

    assert_eq!(ev.doc().as_deref(), Some("Test event"));
    assert_eq!(events.get("on_test").doc().as_deref(), Some("Test event"));
}

#[test]
fn doc_survives_handler_registration() {
    let events = EventManager::new();
    events.doc("on_test", "Test event");
    events
        .get("on_test")
        .register(Handler::infallible(|_| ()))
        .unwrap();

    assert_eq!(events.get("on_test").doc().as_deref(), Some("Test event"));
}
