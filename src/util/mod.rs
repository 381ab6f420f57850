//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure mappings from state to presentation, kept apart from components so
//! they can be tested without a rendering surface.

pub mod emoji;
pub mod result_view;
pub mod slider_math;
