//! Browser adapters for the `theme` resolver.
//!
//! SYSTEM CONTEXT
//! ==============
//! Implements the resolver's collaborator traits over `localStorage`,
//! `matchMedia`, window `storage` events, and the `<html>` element. Outside
//! hydrate builds (SSR, native tests) every adapter is detached, so the
//! resolver reads `system` and renders `dark`.
//!
//! TRADE-OFFS
//! ==========
//! DOM calls that fail are ignored, as with other browser glue in this crate:
//! a failed write leaves the previous theme on screen until the next change.

use theme::ThemeEnv;

/// Collaborators for the current execution context.
pub fn browser_env() -> ThemeEnv {
    #[cfg(feature = "hydrate")]
    {
        web::env().unwrap_or_else(ThemeEnv::detached)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        ThemeEnv::detached()
    }
}

#[cfg(feature = "hydrate")]
mod web {
    use std::rc::Rc;

    use theme::env::{SchemeCallback, StorageCallback};
    use theme::{
        COLOR_SCHEME_PROPERTY, ColorSchemeQuery, DARK_SCHEME_QUERY, PreferenceStore, RenderSurface,
        ResolvedTheme, StorageEvents, Subscription, THEME_ATTRIBUTE, ThemeEnv,
    };
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{HtmlElement, MediaQueryList, Storage, StorageEvent, Window};

    pub(super) fn env() -> Option<ThemeEnv> {
        let window = web_sys::window()?;
        let storage = window.local_storage().ok().flatten();
        let query = window.match_media(DARK_SCHEME_QUERY).ok().flatten();
        let root = window
            .document()
            .and_then(|doc| doc.document_element())
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());

        Some(ThemeEnv {
            store: Rc::new(LocalStorageStore { storage }),
            color_scheme: Rc::new(MediaColorScheme { query }),
            storage_events: Rc::new(WindowStorageEvents { window }),
            surface: Rc::new(DocumentSurface { root }),
        })
    }

    struct LocalStorageStore {
        storage: Option<Storage>,
    }

    impl PreferenceStore for LocalStorageStore {
        fn get(&self, key: &str) -> Option<String> {
            self.storage.as_ref()?.get_item(key).ok().flatten()
        }

        fn set(&self, key: &str, value: &str) {
            if let Some(storage) = &self.storage {
                let _ = storage.set_item(key, value);
            }
        }
    }

    /// Which listener API a `MediaQueryList` exposes.
    ///
    /// Older `WebKit` builds predate `MediaQueryList` being an `EventTarget` and
    /// only offer `addListener`/`removeListener`.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum ListenerApi {
        EventTarget,
        Legacy,
    }

    impl ListenerApi {
        fn detect(query: &MediaQueryList) -> Self {
            let modern = js_sys::Reflect::get(query.as_ref(), &JsValue::from_str("addEventListener"))
                .map(|value| value.is_function())
                .unwrap_or(false);
            if modern { Self::EventTarget } else { Self::Legacy }
        }

        fn attach(self, query: &MediaQueryList, listener: &js_sys::Function) -> Result<(), JsValue> {
            match self {
                Self::EventTarget => query.add_event_listener_with_callback("change", listener),
                Self::Legacy => query.add_listener_with_opt_callback(Some(listener)),
            }
        }

        fn detach(self, query: &MediaQueryList, listener: &js_sys::Function) {
            let _ = match self {
                Self::EventTarget => query.remove_event_listener_with_callback("change", listener),
                Self::Legacy => query.remove_listener_with_opt_callback(Some(listener)),
            };
        }
    }

    struct MediaColorScheme {
        query: Option<MediaQueryList>,
    }

    impl ColorSchemeQuery for MediaColorScheme {
        fn prefers_dark(&self) -> Option<bool> {
            self.query.as_ref().map(MediaQueryList::matches)
        }

        fn subscribe(&self, callback: SchemeCallback) -> Subscription {
            let Some(query) = self.query.clone() else {
                return Subscription::inert();
            };
            let api = ListenerApi::detect(&query);
            let closure = Closure::<dyn Fn()>::new(move || callback());
            let listener: js_sys::Function = closure.as_ref().unchecked_ref::<js_sys::Function>().clone();

            if let Err(err) = api.attach(&query, &listener) {
                log::warn!("color-scheme listener not attached: {err:?}");
                return Subscription::inert();
            }
            log::debug!("color-scheme listener attached via {api:?}");

            Subscription::new(move || {
                api.detach(&query, &listener);
                drop(closure);
            })
        }
    }

    struct WindowStorageEvents {
        window: Window,
    }

    impl StorageEvents for WindowStorageEvents {
        fn subscribe(&self, callback: StorageCallback) -> Subscription {
            let closure =
                Closure::<dyn Fn(StorageEvent)>::new(move |event: StorageEvent| callback(event.key()));
            let listener: js_sys::Function = closure.as_ref().unchecked_ref::<js_sys::Function>().clone();

            if let Err(err) = self.window.add_event_listener_with_callback("storage", &listener) {
                log::warn!("storage listener not attached: {err:?}");
                return Subscription::inert();
            }

            let window = self.window.clone();
            Subscription::new(move || {
                let _ = window.remove_event_listener_with_callback("storage", &listener);
                drop(closure);
            })
        }
    }

    struct DocumentSurface {
        root: Option<HtmlElement>,
    }

    impl RenderSurface for DocumentSurface {
        fn apply(&self, resolved: ResolvedTheme) {
            let Some(root) = &self.root else {
                return;
            };
            let value = resolved.as_str();
            let _ = root.set_attribute(THEME_ATTRIBUTE, value);
            let _ = root.style().set_property(COLOR_SCHEME_PROPERTY, value);
        }
    }
}
