use std::cell::Cell;
use std::rc::Rc;

use super::*;

#[test]
fn subscription_cancels_on_drop() {
    let cancelled = Rc::new(Cell::new(0));
    let counter = Rc::clone(&cancelled);
    let subscription = Subscription::new(move || counter.set(counter.get() + 1));
    assert!(subscription.is_active());
    drop(subscription);
    assert_eq!(cancelled.get(), 1);
}

#[test]
fn explicit_cancel_runs_teardown_once() {
    let cancelled = Rc::new(Cell::new(0));
    let counter = Rc::clone(&cancelled);
    Subscription::new(move || counter.set(counter.get() + 1)).cancel();
    assert_eq!(cancelled.get(), 1);
}

#[test]
fn inert_subscription_has_nothing_to_cancel() {
    let subscription = Subscription::inert();
    assert!(!subscription.is_active());
    subscription.cancel();
}

#[test]
fn detached_env_reports_no_state() {
    let env = ThemeEnv::detached();
    env.store.set("theme", "dark");
    assert_eq!(env.store.get("theme"), None);
    assert_eq!(env.color_scheme.prefers_dark(), None);
    assert!(!env.color_scheme.subscribe(Rc::new(|| {})).is_active());
    assert!(!env.storage_events.subscribe(Rc::new(|_| {})).is_active());
    env.surface.apply(ResolvedTheme::Light);
}
