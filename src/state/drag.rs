//! Slider drag state machine.
//!
//! One slot for the whole page: at most one slider is being dragged at a time,
//! whether the pointer is a mouse, pen, or finger. Global move/up listeners
//! consult this slot to decide which field, if any, a move applies to.

#[cfg(test)]
#[path = "drag_test.rs"]
mod drag_test;

use crate::state::form::SliderField;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(SliderField),
}

impl DragState {
    /// `pointerdown` on a slider. Takes the slot from any other slider.
    pub fn begin(&mut self, field: SliderField) {
        *self = Self::Dragging(field);
    }

    /// `pointerup`/`pointercancel` anywhere.
    pub fn end(&mut self) {
        *self = Self::Idle;
    }

    pub fn active(self) -> Option<SliderField> {
        match self {
            Self::Idle => None,
            Self::Dragging(field) => Some(field),
        }
    }

    /// Whether a global `pointermove` should be applied to `field`.
    pub fn tracks(self, field: SliderField) -> bool {
        self.active() == Some(field)
    }
}
