//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the check-in controls and result surfaces while
//! reading/writing shared state from Leptos context providers.

pub mod notice_toast;
pub mod results_panel;
pub mod slider;
