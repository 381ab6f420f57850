//! Pure value/visual math for the discrete 1-5 sliders.
//!
//! Everything here is free of DOM access so pointer, keyboard, and color
//! mappings can be tested without a rendering surface.

#[cfg(test)]
#[path = "slider_math_test.rs"]
mod slider_math_test;

use crate::state::form::Polarity;

pub const LEVEL_MIN: u8 = 1;
pub const LEVEL_MAX: u8 = 5;
pub const LEVEL_DEFAULT: u8 = 3;

const LEVEL_STEPS: f64 = (LEVEL_MAX - LEVEL_MIN) as f64;

/// Round a raw value to the nearest level and clamp it into `1..=5`.
///
/// Non-finite input maps to the default level.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn clamp_level(raw: f64) -> u8 {
    if !raw.is_finite() {
        return LEVEL_DEFAULT;
    }
    raw.round().clamp(f64::from(LEVEL_MIN), f64::from(LEVEL_MAX)) as u8
}

/// Fraction of the track covered by a pointer at `client_x`, in `0.0..=1.0`.
pub fn pointer_fraction(client_x: f64, track_left: f64, track_width: f64) -> f64 {
    if !(track_width.is_finite() && track_width > 0.0) || !client_x.is_finite() {
        return 0.0;
    }
    ((client_x - track_left) / track_width).clamp(0.0, 1.0)
}

/// Map a horizontal pointer position on a track to a level.
pub fn level_from_pointer(client_x: f64, track_left: f64, track_width: f64) -> u8 {
    let fraction = pointer_fraction(client_x, track_left, track_width);
    clamp_level((fraction * LEVEL_STEPS).round() + f64::from(LEVEL_MIN))
}

/// Fill width / thumb offset for a level, in percent of the track.
pub fn fill_percent(level: u8) -> f64 {
    let level = level.clamp(LEVEL_MIN, LEVEL_MAX);
    f64::from(level - LEVEL_MIN) / LEVEL_STEPS * 100.0
}

/// Color class index: 1 is always the "good" end of the palette.
pub fn color_index(level: u8, polarity: Polarity) -> u8 {
    let level = level.clamp(LEVEL_MIN, LEVEL_MAX);
    match polarity {
        Polarity::Negative => level,
        Polarity::Positive => (LEVEL_MAX + 1) - level,
    }
}

/// Slider keyboard commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SliderKey {
    Decrement,
    Increment,
    First,
    Last,
}

pub fn slider_key(key: &str) -> Option<SliderKey> {
    match key {
        "ArrowLeft" | "ArrowDown" => Some(SliderKey::Decrement),
        "ArrowRight" | "ArrowUp" => Some(SliderKey::Increment),
        "Home" => Some(SliderKey::First),
        "End" => Some(SliderKey::Last),
        _ => None,
    }
}

pub fn apply_slider_key(level: u8, key: SliderKey) -> u8 {
    let level = level.clamp(LEVEL_MIN, LEVEL_MAX);
    match key {
        SliderKey::Decrement => level.saturating_sub(1).max(LEVEL_MIN),
        SliderKey::Increment => (level + 1).min(LEVEL_MAX),
        SliderKey::First => LEVEL_MIN,
        SliderKey::Last => LEVEL_MAX,
    }
}

/// Presentation state derived from a slider level.
#[derive(Clone, Debug, PartialEq)]
pub struct SliderVisual {
    pub level: u8,
    pub percent: f64,
    pub color_index: u8,
}

impl SliderVisual {
    pub fn new(level: u8, polarity: Polarity) -> Self {
        let level = level.clamp(LEVEL_MIN, LEVEL_MAX);
        Self { level, percent: fill_percent(level), color_index: color_index(level, polarity) }
    }

    pub fn fill_class(&self) -> String {
        format!("slider-fill fill-color-{}", self.color_index)
    }

    pub fn thumb_class(&self) -> String {
        format!("slider-thumb thumb-color-{}", self.color_index)
    }

    pub fn fill_style(&self) -> String {
        format!("width: {}%;", format_percent(self.percent))
    }

    pub fn thumb_style(&self) -> String {
        format!("left: {}%;", format_percent(self.percent))
    }
}

fn format_percent(percent: f64) -> String {
    let rounded = percent.round();
    if (percent - rounded).abs() < 0.005 {
        format!("{rounded:.0}")
    } else {
        format!("{percent:.2}")
    }
}
