//! Theme context shared through the component tree.
//!
//! DESIGN
//! ======
//! One `ThemeResolver` per root scope, reachable only through Leptos context.
//! The resolver is not reactive, so every snapshot it publishes is copied into
//! a signal that views can track.
//!
//! The resolver holds browser handles and is `!Send`, so it only exists once
//! `attach` runs on the client; SSR renders from the default snapshot, which
//! matches a detached environment (`system`, resolved `dark`).

#[cfg(test)]
#[path = "theme_context_test.rs"]
mod theme_context_test;

use leptos::prelude::*;
use theme::{ResolvedTheme, Theme, ThemeEnv, ThemeResolver, ThemeSnapshot};

type ResolverSlot = StoredValue<ThemeResolver, LocalStorage>;

/// Handle to the active theme resolver.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    snapshot: RwSignal<ThemeSnapshot>,
    resolver: StoredValue<Option<ResolverSlot>>,
}

impl ThemeContext {
    /// Unattached context. `set`/`toggle` are no-ops until [`Self::attach`].
    pub fn new() -> Self {
        Self { snapshot: RwSignal::new(ThemeSnapshot::default()), resolver: StoredValue::new(None) }
    }

    /// Create a resolver over `env` in the current owner, mirror its
    /// transitions into the snapshot signal, and mount it. Ignored when
    /// already attached.
    pub fn attach(&self, env: ThemeEnv) {
        if self.is_attached() {
            return;
        }
        let resolver = ThemeResolver::new(env);
        let snapshot = self.snapshot;
        resolver.observe(move |next| {
            let _ = snapshot.try_set(next);
        });
        resolver.mount();
        self.resolver.set_value(Some(StoredValue::new_local(resolver)));
    }

    /// Unmount and release the resolver. The last snapshot stays visible.
    pub fn detach(&self) {
        if let Some(slot) = self.resolver.try_update_value(Option::take).flatten() {
            slot.try_with_value(ThemeResolver::unmount);
            slot.dispose();
        }
    }

    pub fn is_attached(&self) -> bool {
        self.resolver.try_with_value(Option::is_some).unwrap_or(false)
    }

    /// Current preference (tracked).
    pub fn value(&self) -> Theme {
        self.snapshot.get().value
    }

    /// Current rendered theme (tracked).
    pub fn resolved(&self) -> ResolvedTheme {
        self.snapshot.get().resolved
    }

    pub fn snapshot(&self) -> Signal<ThemeSnapshot> {
        self.snapshot.into()
    }

    pub fn set(&self, theme: Theme) {
        self.with_resolver(|resolver| resolver.set(theme));
    }

    pub fn toggle(&self) {
        self.with_resolver(ThemeResolver::toggle);
    }

    fn with_resolver(&self, f: impl FnOnce(&ThemeResolver)) {
        if let Some(slot) = self.resolver.try_get_value().flatten() {
            slot.try_with_value(f);
        }
    }
}

impl Default for ThemeContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Provide an unattached `ThemeContext` to the current scope.
pub fn provide_theme() -> ThemeContext {
    let context = ThemeContext::new();
    provide_context(context);
    context
}

/// The theme context of the enclosing `ThemeProvider`.
///
/// # Panics
///
/// Panics when called outside a `ThemeProvider` scope.
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>()
        .unwrap_or_else(|| panic!("use_theme must be used within a ThemeProvider"))
}
