use crate::prelude::*;

#[test]
fn declarations_file_documents_and_upgrades_events() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("events.toml");
    std::fs::write(
        &path,
        r#"
[events.on_ptk_create]
doc = "Fired after the prompt session is created"

[events.on_post_init]
doc = "Fired once startup has finished"
kind = "LoadEvent"
"#,
    )
    .unwrap();

    let events = EventManager::new();
    let log = CallLog::new();
    events.get("on_post_init").register(log.handler("early", ())).unwrap();

    EventsConfig::load(&path).unwrap().apply(&events).unwrap();

    let post_init = events.get("on_post_init");
    assert_eq!(post_init.kind(), EventKind::Load);
    assert_eq!(post_init.len(), 1);
    post_init.fire(()).unwrap();
    assert_eq!(log.count(), 1);

    for ev in events.events() {
        assert!(ev.doc().is_some_and(|d| !d.is_empty()), "{} undocumented", ev.name());
    }
}
