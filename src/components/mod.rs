//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome (navigation, toasts, route gate) and
//! presentation pieces reused by pages, reading shared state from Leptos
//! context providers.

pub mod guarded;
pub mod nav_bar;
pub mod results_chart;
pub mod test_card;
pub mod toast_stack;
