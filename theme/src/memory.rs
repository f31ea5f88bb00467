//! In-memory collaborator adapters.
//!
//! These back the resolver in headless hosts and in tests. Several resolvers
//! can share one [`MemoryStore`] to stand in for tabs of the same profile; the
//! caller delivers cross-context notifications through [`ManualStorageEvents`].

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crate::ResolvedTheme;
use crate::env::{
    ColorSchemeQuery, PreferenceStore, RenderSurface, SchemeCallback, StorageCallback, StorageEvents,
    Subscription,
};

type Entries<T> = Rc<RefCell<Vec<(u64, Rc<T>)>>>;

/// Registry of callbacks keyed by subscription id.
struct Listeners<T: ?Sized> {
    entries: Entries<T>,
    next_id: Cell<u64>,
}

impl<T: ?Sized + 'static> Listeners<T> {
    fn new() -> Self {
        Self { entries: Rc::new(RefCell::new(Vec::new())), next_id: Cell::new(0) }
    }

    fn add(&self, callback: Rc<T>) -> Subscription {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.entries.borrow_mut().push((id, callback));

        let entries = Rc::clone(&self.entries);
        Subscription::new(move || entries.borrow_mut().retain(|(entry_id, _)| *entry_id != id))
    }

    /// Clone the live callbacks so they can run without holding the borrow.
    fn snapshot(&self) -> Vec<Rc<T>> {
        self.entries.borrow().iter().map(|(_, cb)| Rc::clone(cb)).collect()
    }

    fn len(&self) -> usize {
        self.entries.borrow().len()
    }
}

/// Key-value store held in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
    writes: Cell<usize>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with a single entry.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        store
    }

    /// Remove `key`, as another context clearing it would.
    pub fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }

    /// Number of [`PreferenceStore::set`] calls observed.
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.writes.set(self.writes.get() + 1);
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }
}

/// Color-scheme signal driven by the caller.
pub struct ManualColorScheme {
    prefers_dark: Cell<Option<bool>>,
    listeners: Listeners<dyn Fn()>,
}

impl ManualColorScheme {
    /// Signal reporting `prefers_dark`, or no signal at all for `None`.
    #[must_use]
    pub fn new(prefers_dark: Option<bool>) -> Self {
        Self { prefers_dark: Cell::new(prefers_dark), listeners: Listeners::new() }
    }

    /// Change the reported preference and notify listeners.
    pub fn set_prefers_dark(&self, prefers_dark: Option<bool>) {
        self.prefers_dark.set(prefers_dark);
        for listener in self.listeners.snapshot() {
            listener();
        }
    }

    /// Number of listeners currently installed.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl ColorSchemeQuery for ManualColorScheme {
    fn prefers_dark(&self) -> Option<bool> {
        self.prefers_dark.get()
    }

    fn subscribe(&self, callback: SchemeCallback) -> Subscription {
        self.listeners.add(callback)
    }
}

/// Cross-context storage notifications delivered by the caller.
pub struct ManualStorageEvents {
    listeners: Listeners<dyn Fn(Option<String>)>,
}

impl ManualStorageEvents {
    #[must_use]
    pub fn new() -> Self {
        Self { listeners: Listeners::new() }
    }

    /// Deliver a change notification for `key` (`None` for a cleared store).
    pub fn notify(&self, key: Option<&str>) {
        for listener in self.listeners.snapshot() {
            listener(key.map(str::to_owned));
        }
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl Default for ManualStorageEvents {
    fn default() -> Self {
        Self::new()
    }
}

impl StorageEvents for ManualStorageEvents {
    fn subscribe(&self, callback: StorageCallback) -> Subscription {
        self.listeners.add(callback)
    }
}

/// Render surface that records what was written to it.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    attribute: RefCell<Option<String>>,
    color_scheme: RefCell<Option<String>>,
    applied: RefCell<Vec<ResolvedTheme>>,
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current `data-theme` attribute value.
    #[must_use]
    pub fn theme_attribute(&self) -> Option<String> {
        self.attribute.borrow().clone()
    }

    /// Current `color-scheme` property value.
    #[must_use]
    pub fn color_scheme(&self) -> Option<String> {
        self.color_scheme.borrow().clone()
    }

    /// Every value applied so far, oldest first.
    #[must_use]
    pub fn applied(&self) -> Vec<ResolvedTheme> {
        self.applied.borrow().clone()
    }

    #[must_use]
    pub fn current(&self) -> Option<ResolvedTheme> {
        self.applied.borrow().last().copied()
    }
}

impl RenderSurface for RecordingSurface {
    fn apply(&self, resolved: ResolvedTheme) {
        *self.attribute.borrow_mut() = Some(resolved.as_str().to_owned());
        *self.color_scheme.borrow_mut() = Some(resolved.as_str().to_owned());
        self.applied.borrow_mut().push(resolved);
    }
}
