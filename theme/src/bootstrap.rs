//! Pre-paint theme bootstrap.
//!
//! The resolver mounts only after the interactive bundle has hydrated. Until
//! then the page would paint with default styling, so the SSR shell inlines
//! [`BOOTSTRAP_SCRIPT`] in `<head>` to write the render surface first. The
//! script and [`bootstrap`] apply the same rule as
//! [`crate::ThemeResolver::mount`], so all three agree for the same stored state.

#[cfg(test)]
#[path = "bootstrap_test.rs"]
mod bootstrap_test;

use crate::env::ThemeEnv;
use crate::{ResolvedTheme, STORAGE_KEY, Theme, os_preference, resolve};

/// Inline script run synchronously before first paint.
///
/// Values other than `dark`/`light` resolve against the OS preference, which
/// falls back to dark when `matchMedia` is unavailable.
pub const BOOTSTRAP_SCRIPT: &str = r#"(function () {
  var root = document.documentElement;
  var stored = null;
  try {
    stored = window.localStorage.getItem("theme");
    if (stored === null) {
      window.localStorage.setItem("theme", "system");
    }
  } catch (_) {
    stored = null;
  }
  var prefersDark = true;
  try {
    prefersDark = window.matchMedia("(prefers-color-scheme: dark)").matches;
  } catch (_) {}
  var resolved = stored === "dark" || stored === "light" ? stored : prefersDark ? "dark" : "light";
  root.setAttribute("data-theme", resolved);
  root.style.colorScheme = resolved;
})();"#;

/// Resolve the persisted preference and write it to the render surface,
/// without going through a resolver.
///
/// Persists `system` when no preference is stored yet.
#[must_use]
pub fn bootstrap(env: &ThemeEnv) -> ResolvedTheme {
    let stored = env.store.get(STORAGE_KEY);
    if stored.is_none() {
        env.store.set(STORAGE_KEY, Theme::System.as_str());
    }
    let theme = Theme::parse_or_default(stored.as_deref());
    let resolved = resolve(theme, os_preference(env.color_scheme.as_ref()));
    env.surface.apply(resolved);
    resolved
}
