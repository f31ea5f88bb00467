//! Theme controls for the page toolbar.

use leptos::prelude::*;
use theme::{ResolvedTheme, Theme};

use crate::state::theme_context::use_theme;

/// Binary light/dark toggle. Leaves `system` on first click.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();

    view! {
        <button
            class="btn toolbar__dark-toggle"
            on:click=move |_| theme.toggle()
            title="Toggle dark mode"
        >
            {move || if theme.resolved() == ResolvedTheme::Dark { "☀" } else { "☾" }}
        </button>
    }
}

/// Explicit three-way preference picker.
#[component]
pub fn ThemeMenu() -> impl IntoView {
    let theme = use_theme();

    view! {
        <div class="theme-menu" role="group" aria-label="Theme">
            {Theme::ALL
                .into_iter()
                .map(|option| {
                    let active = move || theme.value() == option;
                    view! {
                        <button
                            class=move || {
                                if active() {
                                    "btn theme-menu__option theme-menu__option--active"
                                } else {
                                    "btn theme-menu__option"
                                }
                            }
                            aria-pressed=move || active().to_string()
                            on:click=move |_| theme.set(option)
                        >
                            {label(option)}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

fn label(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "Light",
        Theme::Dark => "Dark",
        Theme::System => "System",
    }
}
