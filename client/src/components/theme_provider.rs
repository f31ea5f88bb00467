//! Root provider for the theme context.

#[cfg(test)]
#[path = "theme_provider_test.rs"]
mod theme_provider_test;

use leptos::prelude::*;
use theme::ThemeEnv;

use crate::state::theme_context::{ThemeContext, provide_theme};
use crate::util::theme_dom::browser_env;

/// Attach `theme` to `env` for the lifetime of the current owner.
pub fn bind_theme(theme: ThemeContext, env: ThemeEnv) {
    theme.attach(env);
    on_cleanup(move || theme.detach());
}

/// Provides a `ThemeContext` to `children`.
///
/// The resolver is attached in an effect, i.e. only in the browser after
/// hydration; until then the inline bootstrap script has already painted the
/// right theme.
#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let theme = provide_theme();

    Effect::new(move || bind_theme(theme, browser_env()));

    children()
}
