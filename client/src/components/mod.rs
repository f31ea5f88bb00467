//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render planner chrome and read/write shared state from Leptos
//! context providers installed by `App`.

pub mod add_section_dialog;
pub mod class_group_card;
pub mod section_card;
pub mod selected_schedule;
pub mod theme_provider;
pub mod theme_toggle;
pub mod toaster;
