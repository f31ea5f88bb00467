//! Client-side application state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Plain state structs live here and are wrapped in `RwSignal`s by the root
//! component, so their logic is testable without a reactive runtime. The theme
//! context is the exception: it owns a resolver and is provided by
//! `ThemeProvider`.

pub mod schedule;
pub mod theme_context;
pub mod toast;
