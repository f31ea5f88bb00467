//! Theme preference model, resolution rule, and persistence state machine.
//!
//! The user picks one of three preferences (`dark`, `light`, `system`). The
//! page only ever renders two of them, so `system` is resolved against the OS
//! color-scheme signal. This crate owns that resolution and keeps three
//! sources of truth converged: the persisted preference, the in-memory
//! resolver state, and the render surface that stylesheets select on.
//!
//! The crate has no browser dependency. Every side effect goes through the
//! collaborator traits in [`env`], and the `client` crate supplies `web-sys`
//! implementations of them.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`env`] | Collaborator traits, [`env::Subscription`], detached adapters |
//! | [`memory`] | In-memory adapters for headless hosts and tests |
//! | [`resolver`] | [`resolver::ThemeResolver`] state machine |
//! | [`bootstrap`] | Pre-paint bootstrap, in Rust and as an inline script |


pub mod bootstrap;
pub mod env;
pub mod memory;
pub mod resolver;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use bootstrap::{BOOTSTRAP_SCRIPT, bootstrap};
pub use env::{
    ColorSchemeQuery, Detached, PreferenceStore, RenderSurface, StorageEvents, Subscription, ThemeEnv,
};
pub use resolver::{ThemeResolver, ThemeSnapshot};

/// Persisted-store key holding the user's preference.
pub const STORAGE_KEY: &str = "theme";

/// Attribute on the document root carrying the resolved theme.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Inline style property hinting native form-control coloring.
pub const COLOR_SCHEME_PROPERTY: &str = "color-scheme";

/// Media query reporting the OS dark-mode preference.
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Error returned by [`Theme::from_str`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme preference: {0:?}")]
pub struct ParseThemeError(pub String);

/// The user's three-valued theme preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    Light,
    /// Follow the OS color-scheme preference.
    #[default]
    System,
}

impl Theme {
    /// Every preference, in menu order.
    pub const ALL: [Theme; 3] = [Theme::Light, Theme::Dark, Theme::System];

    /// Wire representation used in the persisted store.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
            Self::System => "system",
        }
    }

    /// Parse a persisted value, substituting [`Theme::System`] for absent or
    /// unrecognized input.
    #[must_use]
    pub fn parse_or_default(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };
        raw.parse().unwrap_or_else(|err: ParseThemeError| {
            log::debug!("{err}; falling back to system");
            Self::default()
        })
    }
}

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            "system" => Ok(Self::System),
            other => Err(ParseThemeError(other.to_owned())),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ResolvedTheme> for Theme {
    fn from(resolved: ResolvedTheme) -> Self {
        match resolved {
            ResolvedTheme::Dark => Self::Dark,
            ResolvedTheme::Light => Self::Light,
        }
    }
}

/// The two-valued theme actually rendered. Never `system`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolvedTheme {
    /// Also the fallback when no OS signal is available.
    #[default]
    Dark,
    Light,
}

impl ResolvedTheme {
    /// Value written to the render surface.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// The other rendered theme.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    #[must_use]
    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }
}

impl fmt::Display for ResolvedTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolve a preference against the OS-reported scheme.
#[must_use]
pub fn resolve(theme: Theme, os: ResolvedTheme) -> ResolvedTheme {
    match theme {
        Theme::Dark => ResolvedTheme::Dark,
        Theme::Light => ResolvedTheme::Light,
        Theme::System => os,
    }
}

/// Current OS preference, or [`ResolvedTheme::Dark`] when the query has no signal.
#[must_use]
pub fn os_preference(query: &dyn ColorSchemeQuery) -> ResolvedTheme {
    query
        .prefers_dark()
        .map_or(ResolvedTheme::Dark, ResolvedTheme::from_prefers_dark)
}
