//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Display formatting for the scheduler and the browser glue behind the theme
//! resolver. Neither depends on the reactive runtime.

pub mod schedule_format;
pub mod theme_dom;
