//! Client-side application state.
//!
//! DESIGN
//! ======
//! Plain structs held in `RwSignal`s and provided through Leptos context, so
//! every transition is a method that unit tests can drive without a browser.

pub mod drag;
pub mod form;
pub mod submission;
