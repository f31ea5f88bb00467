//! Theme resolution and persistence state machine.
//!
//! DESIGN
//! ======
//! `ThemeResolver` is a cheap-clone handle over shared single-threaded state.
//! Every transition runs to completion synchronously: state is updated first,
//! then the store, then the render surface, then the observer. Listener
//! callbacks hold weak references, so a dropped resolver is never kept alive
//! by the environment.
//!
//! Combined states are `{system, light, dark}` x surface `{light, dark}`;
//! only `system` may pair with either surface value.

#[cfg(test)]
#[path = "resolver_test.rs"]
mod resolver_test;

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use crate::env::{Subscription, ThemeEnv};
use crate::{ResolvedTheme, STORAGE_KEY, Theme, os_preference, resolve};

/// Preference and resolved theme observed together.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeSnapshot {
    pub value: Theme,
    pub resolved: ResolvedTheme,
}

/// What caused a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Origin {
    /// `set` / `toggle`: the new value must be persisted.
    User,
    /// Value was read from the store; writing it back is redundant.
    Store,
    /// First read after mount; the surface is written unconditionally.
    Mount,
}

type Observer = Rc<dyn Fn(ThemeSnapshot)>;

struct Inner {
    env: ThemeEnv,
    state: Cell<ThemeSnapshot>,
    mounted: Cell<bool>,
    os_listener: RefCell<Option<Subscription>>,
    storage_listener: RefCell<Option<Subscription>>,
    observer: RefCell<Option<Observer>>,
}

/// Owner of the theme preference and its resolved value.
#[derive(Clone)]
pub struct ThemeResolver {
    inner: Rc<Inner>,
}

impl ThemeResolver {
    /// Create an unmounted resolver in the initial `system` state.
    ///
    /// Nothing is read from or written to the environment besides the OS
    /// preference query; call [`ThemeResolver::mount`] to attach.
    #[must_use]
    pub fn new(env: ThemeEnv) -> Self {
        let resolved = resolve(Theme::System, os_preference(env.color_scheme.as_ref()));
        Self {
            inner: Rc::new(Inner {
                env,
                state: Cell::new(ThemeSnapshot { value: Theme::System, resolved }),
                mounted: Cell::new(false),
                os_listener: RefCell::new(None),
                storage_listener: RefCell::new(None),
                observer: RefCell::new(None),
            }),
        }
    }

    /// Current preference.
    #[must_use]
    pub fn value(&self) -> Theme {
        self.inner.state.get().value
    }

    /// Current resolved theme.
    #[must_use]
    pub fn resolved(&self) -> ResolvedTheme {
        self.inner.state.get().resolved
    }

    #[must_use]
    pub fn snapshot(&self) -> ThemeSnapshot {
        self.inner.state.get()
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.inner.mounted.get()
    }

    /// Register the callback notified after every transition. Replaces any
    /// previous observer.
    pub fn observe(&self, observer: impl Fn(ThemeSnapshot) + 'static) {
        *self.inner.observer.borrow_mut() = Some(Rc::new(observer));
    }

    /// Change the preference, persist it, and re-resolve.
    pub fn set(&self, theme: Theme) {
        self.transition(theme, Origin::User);
    }

    /// Switch to the opposite of the rendered theme. Always leaves `system`.
    pub fn toggle(&self) {
        self.set(self.resolved().opposite().into());
    }

    /// Attach to the environment.
    ///
    /// Subscribes to cross-context storage changes, initializes state from the
    /// persisted preference (persisting `system` when absent), writes the render
    /// surface, and installs the OS listener if the preference is `system`.
    /// Mounting twice is a no-op.
    pub fn mount(&self) {
        if self.inner.mounted.replace(true) {
            return;
        }

        let weak = Rc::downgrade(&self.inner);
        let subscription = self
            .inner
            .env
            .storage_events
            .subscribe(Rc::new(move |key: Option<String>| {
                if let Some(resolver) = Self::upgrade(&weak) {
                    resolver.handle_storage_change(key.as_deref());
                }
            }));
        *self.inner.storage_listener.borrow_mut() = Some(subscription);

        let theme = self.read_persisted();
        self.transition(theme, Origin::Mount);
    }

    /// Release every listener. State is kept; a later `mount` re-reads the store.
    pub fn unmount(&self) {
        if !self.inner.mounted.replace(false) {
            return;
        }
        let os = self.inner.os_listener.borrow_mut().take();
        let storage = self.inner.storage_listener.borrow_mut().take();
        drop(os);
        drop(storage);
        log::debug!("theme resolver unmounted");
    }

    fn upgrade(weak: &Weak<Inner>) -> Option<Self> {
        weak.upgrade().map(|inner| Self { inner })
    }

    /// Read the persisted preference, initializing the key when absent.
    fn read_persisted(&self) -> Theme {
        let store = &self.inner.env.store;
        if let Some(raw) = store.get(STORAGE_KEY) {
            Theme::parse_or_default(Some(&raw))
        } else {
            store.set(STORAGE_KEY, Theme::System.as_str());
            Theme::System
        }
    }

    fn handle_storage_change(&self, key: Option<&str>) {
        if key.is_some_and(|key| key != STORAGE_KEY) {
            return;
        }
        let theme = self.read_persisted();
        self.transition(theme, Origin::Store);
    }

    fn handle_color_scheme_change(&self) {
        let current = self.inner.state.get();
        if current.value != Theme::System {
            return;
        }
        let resolved = os_preference(self.inner.env.color_scheme.as_ref());
        if resolved == current.resolved {
            return;
        }
        let next = ThemeSnapshot { resolved, ..current };
        self.inner.state.set(next);
        log::debug!("os color scheme changed; resolved {resolved}");
        self.inner.env.surface.apply(resolved);
        self.notify(next);
    }

    fn transition(&self, theme: Theme, origin: Origin) {
        let resolved = resolve(theme, os_preference(self.inner.env.color_scheme.as_ref()));
        let next = ThemeSnapshot { value: theme, resolved };
        let previous = self.inner.state.replace(next);

        if origin == Origin::User {
            self.inner.env.store.set(STORAGE_KEY, theme.as_str());
        }
        if origin == Origin::Mount || previous.resolved != resolved {
            self.inner.env.surface.apply(resolved);
        }

        self.sync_os_listener();

        if origin == Origin::Mount || previous != next {
            log::debug!("theme {theme} resolved {resolved} ({origin:?})");
            self.notify(next);
        }
    }

    /// Keep the OS listener installed exactly while mounted with `system`.
    fn sync_os_listener(&self) {
        let wanted = self.inner.mounted.get() && self.value() == Theme::System;
        let installed = self.inner.os_listener.borrow().is_some();

        if wanted && !installed {
            let weak = Rc::downgrade(&self.inner);
            let subscription = self.inner.env.color_scheme.subscribe(Rc::new(move || {
                if let Some(resolver) = Self::upgrade(&weak) {
                    resolver.handle_color_scheme_change();
                }
            }));
            *self.inner.os_listener.borrow_mut() = Some(subscription);
        } else if !wanted && installed {
            let removed = self.inner.os_listener.borrow_mut().take();
            drop(removed);
        }
    }

    fn notify(&self, snapshot: ThemeSnapshot) {
        let observer = self.inner.observer.borrow().clone();
        if let Some(observer) = observer {
            observer(snapshot);
        }
    }
}

impl fmt::Debug for ThemeResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeResolver")
            .field("state", &self.inner.state.get())
            .field("mounted", &self.inner.mounted.get())
            .finish_non_exhaustive()
    }
}
