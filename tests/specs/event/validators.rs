use crate::prelude::*;

#[test]
fn validator_limits_its_handler() {
    let events = EventManager::new();
    let log = CallLog::new();
    let ev = events.get("on_test");

    let first = ev.register(log.handler("first", false)).unwrap();
    ev.attach_validator(&first, first_arg_is("spam")).unwrap();
    ev.register(log.handler("second", false)).unwrap();

    ev.fire("egg").unwrap();
    assert_eq!(log.count(), 1);

    log.clear();
    ev.fire("spam").unwrap();
    assert_eq!(log.count(), 2);
}

#[test]
fn validator_sees_keyword_arguments() {
    let events = EventManager::new();
    let log = CallLog::new();
    let ev = events.get("on_chdir");
    ev.register_with(
        log.handler("home", ()),
        Validator::predicate(|args| {
            args.keyword("newdir").is_some_and(herald_core::is_truthy)
        }),
    )
    .unwrap();

    ev.fire(Args::new().kwarg("newdir", "")).unwrap();
    assert_eq!(log.count(), 0);

    ev.fire(Args::new().kwarg("newdir", "/home")).unwrap();
    assert_eq!(log.count(), 1);
}

#[test]
fn failing_validator_propagates() {
    let events = EventManager::new();
    let log = CallLog::new();
    let ev = events.get("on_test");
    ev.register_with(
        log.handler("guarded", ()),
        Validator::new(|_| Err("cannot decide".into())),
    )
    .unwrap();

    let err = ev.fire(()).unwrap_err();

    assert_eq!(err.to_string(), "cannot decide");
    assert_eq!(log.count(), 0);
}

#[test]
fn attach_validator_requires_registration() {
    let events = EventManager::new();
    let stranger = Handler::infallible(|_| ());

    let err = events
        .get("on_test")
        .attach_validator(&stranger, Validator::predicate(|_| true))
        .unwrap_err();

    assert!(matches!(err, EventError::HandlerNotFound { event } if event == "on_test"));
}

#[test]
fn handler_registered_elsewhere_is_not_found() {
    let events = EventManager::new();
    let handler = events
        .get("on_a")
        .register(Handler::infallible(|_| ()))
        .unwrap();

    let result = events
        .get("on_b")
        .attach_validator(&handler, Validator::predicate(|_| true));

    assert!(result.is_err());
}
