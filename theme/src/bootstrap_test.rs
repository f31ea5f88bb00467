use std::rc::Rc;

use super::*;
use crate::env::PreferenceStore;
use crate::memory::{ManualColorScheme, ManualStorageEvents, MemoryStore, RecordingSurface};
use crate::{DARK_SCHEME_QUERY, THEME_ATTRIBUTE};

fn env_with(store: Rc<MemoryStore>, prefers_dark: Option<bool>, surface: Rc<RecordingSurface>) -> ThemeEnv {
    ThemeEnv {
        store,
        color_scheme: Rc::new(ManualColorScheme::new(prefers_dark)),
        storage_events: Rc::new(ManualStorageEvents::new()),
        surface,
    }
}

#[test]
fn bootstrap_initializes_missing_preference() {
    let store = Rc::new(MemoryStore::new());
    let surface = Rc::new(RecordingSurface::new());
    let resolved = bootstrap(&env_with(Rc::clone(&store), Some(false), Rc::clone(&surface)));

    assert_eq!(resolved, ResolvedTheme::Light);
    assert_eq!(store.get(STORAGE_KEY).as_deref(), Some("system"));
    assert_eq!(surface.theme_attribute().as_deref(), Some("light"));
    assert_eq!(surface.color_scheme().as_deref(), Some("light"));
}

#[test]
fn bootstrap_honors_concrete_preference_over_os() {
    let store = Rc::new(MemoryStore::with_entry(STORAGE_KEY, "light"));
    let surface = Rc::new(RecordingSurface::new());
    let resolved = bootstrap(&env_with(Rc::clone(&store), Some(true), surface));
    assert_eq!(resolved, ResolvedTheme::Light);
    assert_eq!(store.write_count(), 0);
}

#[test]
fn bootstrap_leaves_invalid_value_in_place_and_resolves_as_system() {
    let store = Rc::new(MemoryStore::with_entry(STORAGE_KEY, "neon"));
    let surface = Rc::new(RecordingSurface::new());
    let resolved = bootstrap(&env_with(Rc::clone(&store), Some(true), surface));
    assert_eq!(resolved, ResolvedTheme::Dark);
    assert_eq!(store.get(STORAGE_KEY).as_deref(), Some("neon"));
}

#[test]
fn bootstrap_in_detached_env_renders_dark() {
    assert_eq!(bootstrap(&ThemeEnv::detached()), ResolvedTheme::Dark);
}

#[test]
fn bootstrap_is_idempotent() {
    let store = Rc::new(MemoryStore::new());
    let surface = Rc::new(RecordingSurface::new());
    let env = env_with(Rc::clone(&store), Some(false), Rc::clone(&surface));
    let first = bootstrap(&env);
    let second = bootstrap(&env);
    assert_eq!(first, second);
    assert_eq!(store.write_count(), 1);
}

#[test]
fn script_uses_the_shared_names() {
    let quoted = |s: &str| format!("\"{s}\"");
    assert!(BOOTSTRAP_SCRIPT.contains(&quoted(STORAGE_KEY)));
    assert!(BOOTSTRAP_SCRIPT.contains(&quoted(THEME_ATTRIBUTE)));
    assert!(BOOTSTRAP_SCRIPT.contains(&quoted(DARK_SCHEME_QUERY)));
    assert!(BOOTSTRAP_SCRIPT.contains(&quoted(Theme::System.as_str())));
    assert!(BOOTSTRAP_SCRIPT.contains("root.style.colorScheme = resolved"));
}

#[test]
fn script_is_self_invoking_and_html_safe() {
    assert!(BOOTSTRAP_SCRIPT.starts_with("(function () {"));
    assert!(BOOTSTRAP_SCRIPT.ends_with("})();"));
    assert!(!BOOTSTRAP_SCRIPT.contains("</script"));
}

// =============================================================
// Script resolution
// =============================================================

const SCRIPT_RESOLUTION: &str =
    r#"var resolved = stored === "dark" || stored === "light" ? stored : prefersDark ? "dark" : "light";"#;

/// Direct reading of `SCRIPT_RESOLUTION`, with a failed `matchMedia` leaving
/// `prefersDark` at its `true` default.
fn script_resolves(stored: Option<&str>, prefers_dark: Option<bool>) -> &'static str {
    let prefers_dark = prefers_dark.unwrap_or(true);
    match stored {
        Some("dark") => "dark",
        Some("light") => "light",
        _ if prefers_dark => "dark",
        _ => "light",
    }
}

fn position(needle: &str) -> usize {
    BOOTSTRAP_SCRIPT.find(needle).unwrap_or_else(|| panic!("script lacks {needle:?}"))
}

#[test]
fn script_branches_in_resolution_order() {
    assert!(BOOTSTRAP_SCRIPT.contains(SCRIPT_RESOLUTION));
    assert!(position("var prefersDark = true;") < position("window.matchMedia("));
    assert!(position("if (stored === null)") < position(r#"setItem("theme", "system")"#));
    assert!(position(SCRIPT_RESOLUTION) < position("root.setAttribute("));
}

#[test]
fn script_and_bootstrap_agree_for_every_stored_state() {
    let stored = [None, Some("dark"), Some("light"), Some("system"), Some("garbage")];
    for value in stored {
        for prefers_dark in [Some(true), Some(false), None] {
            let store = Rc::new(match value {
                Some(value) => MemoryStore::with_entry(STORAGE_KEY, value),
                None => MemoryStore::new(),
            });
            let booted = bootstrap(&env_with(store, prefers_dark, Rc::new(RecordingSurface::new())));
            assert_eq!(
                script_resolves(value, prefers_dark),
                booted.as_str(),
                "stored {value:?}, os {prefers_dark:?}"
            );
        }
    }
}
