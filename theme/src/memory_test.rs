use std::cell::Cell;
use std::rc::Rc;

use super::*;

#[test]
fn memory_store_round_trips_and_counts_writes() {
    let store = MemoryStore::new();
    assert_eq!(store.get("theme"), None);
    store.set("theme", "light");
    store.set("theme", "dark");
    assert_eq!(store.get("theme").as_deref(), Some("dark"));
    assert_eq!(store.write_count(), 2);
    store.remove("theme");
    assert_eq!(store.get("theme"), None);
}

#[test]
fn seeded_store_does_not_count_as_a_write() {
    let store = MemoryStore::with_entry("theme", "system");
    assert_eq!(store.get("theme").as_deref(), Some("system"));
    assert_eq!(store.write_count(), 0);
}

#[test]
fn color_scheme_notifies_until_unsubscribed() {
    let scheme = ManualColorScheme::new(Some(false));
    let hits = Rc::new(Cell::new(0));
    let counter = Rc::clone(&hits);
    let subscription = scheme.subscribe(Rc::new(move || counter.set(counter.get() + 1)));
    assert_eq!(scheme.listener_count(), 1);

    scheme.set_prefers_dark(Some(true));
    assert_eq!(scheme.prefers_dark(), Some(true));
    assert_eq!(hits.get(), 1);

    drop(subscription);
    assert_eq!(scheme.listener_count(), 0);
    scheme.set_prefers_dark(Some(false));
    assert_eq!(hits.get(), 1);
}

#[test]
fn storage_events_forward_key() {
    let events = ManualStorageEvents::new();
    let seen = Rc::new(std::cell::RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let _subscription = events.subscribe(Rc::new(move |key| sink.borrow_mut().push(key)));

    events.notify(Some("theme"));
    events.notify(None);
    assert_eq!(*seen.borrow(), vec![Some("theme".to_owned()), None]);
}

#[test]
fn recording_surface_writes_both_fields_together() {
    let surface = RecordingSurface::new();
    assert_eq!(surface.current(), None);
    surface.apply(ResolvedTheme::Light);
    surface.apply(ResolvedTheme::Dark);
    assert_eq!(surface.theme_attribute().as_deref(), Some("dark"));
    assert_eq!(surface.color_scheme().as_deref(), Some("dark"));
    assert_eq!(surface.applied(), vec![ResolvedTheme::Light, ResolvedTheme::Dark]);
}
