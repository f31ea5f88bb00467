//! Collaborator seams between the resolver and its host environment.
//!
//! SYSTEM CONTEXT
//! ==============
//! A browser host implements these traits over localStorage, `matchMedia`,
//! window `storage` events, and the `<html>` element. SSR and tests use
//! [`Detached`] or the adapters in [`crate::memory`].

#[cfg(test)]
#[path = "env_test.rs"]
mod env_test;

use std::fmt;
use std::rc::Rc;

use crate::ResolvedTheme;

/// Callback fired when the OS color-scheme preference changes.
pub type SchemeCallback = Rc<dyn Fn()>;

/// Callback fired when another context writes the store. Carries the changed
/// key, or `None` when the whole store was cleared.
pub type StorageCallback = Rc<dyn Fn(Option<String>)>;

/// Durable key-value store scoped to the browser profile.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// OS/browser color-scheme media signal.
pub trait ColorSchemeQuery {
    /// Whether the OS prefers dark. `None` when no media signal exists.
    fn prefers_dark(&self) -> Option<bool>;

    /// Register `callback` for preference changes until the returned handle drops.
    fn subscribe(&self, callback: SchemeCallback) -> Subscription;
}

/// Notifications about writes made to the store by other contexts.
pub trait StorageEvents {
    fn subscribe(&self, callback: StorageCallback) -> Subscription;
}

/// Observable output fields read by stylesheets.
///
/// Implementations write the attribute and the color-scheme hint in one call,
/// so both fields always carry the same value.
pub trait RenderSurface {
    fn apply(&self, resolved: ResolvedTheme);
}

/// Cancellation handle for a registered listener. Dropping it cancels.
#[must_use = "dropping a Subscription cancels the listener"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Wrap the teardown for an installed listener.
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self { cancel: Some(Box::new(cancel)) }
    }

    /// Handle for a listener that was never installed.
    pub fn inert() -> Self {
        Self { cancel: None }
    }

    /// Whether dropping this handle has anything to tear down.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.cancel.is_some()
    }

    /// Cancel explicitly. Equivalent to dropping the handle.
    pub fn cancel(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("active", &self.is_active()).finish()
    }
}

/// The full set of collaborators a resolver runs against.
#[derive(Clone)]
pub struct ThemeEnv {
    pub store: Rc<dyn PreferenceStore>,
    pub color_scheme: Rc<dyn ColorSchemeQuery>,
    pub storage_events: Rc<dyn StorageEvents>,
    pub surface: Rc<dyn RenderSurface>,
}

impl ThemeEnv {
    /// Environment with no store, no media signal, and no render surface.
    ///
    /// Used outside the browser: preferences read as `system` and resolve to
    /// `dark`.
    #[must_use]
    pub fn detached() -> Self {
        let detached = Rc::new(Detached);
        Self {
            store: detached.clone(),
            color_scheme: detached.clone(),
            storage_events: detached.clone(),
            surface: detached,
        }
    }
}

impl fmt::Debug for ThemeEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeEnv").finish_non_exhaustive()
    }
}

/// No-op adapter for every collaborator trait.
#[derive(Clone, Copy, Debug, Default)]
pub struct Detached;

impl PreferenceStore for Detached {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, _key: &str, _value: &str) {}
}

impl ColorSchemeQuery for Detached {
    fn prefers_dark(&self) -> Option<bool> {
        None
    }

    fn subscribe(&self, _callback: SchemeCallback) -> Subscription {
        Subscription::inert()
    }
}

impl StorageEvents for Detached {
    fn subscribe(&self, _callback: StorageCallback) -> Subscription {
        Subscription::inert()
    }
}

impl RenderSurface for Detached {
    fn apply(&self, _resolved: ResolvedTheme) {}
}
