//! Emoji glyph table keyed by slider field and level.
//!
//! The table normally comes from `GET /api/emojis`; `EmojiMap::fallback`
//! mirrors it so labels keep working when the service is unreachable.

#[cfg(test)]
#[path = "emoji_test.rs"]
mod emoji_test;

use std::collections::{BTreeMap, HashMap};

use crate::state::form::SliderField;
use crate::util::slider_math::{LEVEL_MAX, LEVEL_MIN};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EmojiMap {
    glyphs: HashMap<SliderField, BTreeMap<u8, String>>,
}

const FALLBACK: [(SliderField, [&str; 5]); 8] = [
    (SliderField::Mood, ["😞", "🙁", "😐", "🙂", "😄"]),
    (SliderField::Stress, ["😌", "😕", "😟", "😣", "😫"]),
    (SliderField::Focus, ["😵", "😕", "😐", "🙂", "😎"]),
    (SliderField::Sleep, ["😴", "🥱", "😐", "🙂", "😌"]),
    (SliderField::Motivation, ["🥀", "😕", "😐", "🙂", "🚀"]),
    (SliderField::Anxiety, ["😌", "😯", "😬", "😰", "😱"]),
    (SliderField::Appetite, ["🥄", "🍽️", "😐", "🥗", "🍱"]),
    (SliderField::FoodSecurity, ["😰", "🥫", "😐", "🍞", "🧺"]),
];

impl EmojiMap {
    /// Built-in table covering every field and level.
    pub fn fallback() -> Self {
        let mut map = Self::default();
        for (field, glyphs) in FALLBACK {
            for (level, glyph) in (LEVEL_MIN..=LEVEL_MAX).zip(glyphs) {
                map.insert(field, level, glyph);
            }
        }
        map
    }

    /// Parse the `{ field: { "level": glyph } }` payload.
    ///
    /// Unknown fields, non-numeric or out-of-range levels, and non-string
    /// glyphs are skipped. Returns `None` when the payload is not an object.
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        let root = value.as_object()?;
        let mut map = Self::default();
        for (key, levels) in root {
            let Some(field) = SliderField::from_key(key) else {
                continue;
            };
            let Some(levels) = levels.as_object() else {
                continue;
            };
            for (level, glyph) in levels {
                let Ok(level) = level.trim().parse::<u8>() else {
                    continue;
                };
                if let Some(glyph) = glyph.as_str() {
                    map.insert(field, level, glyph);
                }
            }
        }
        Some(map)
    }

    pub fn insert(&mut self, field: SliderField, level: u8, glyph: &str) {
        if !(LEVEL_MIN..=LEVEL_MAX).contains(&level) || glyph.trim().is_empty() {
            return;
        }
        self.glyphs
            .entry(field)
            .or_default()
            .insert(level, glyph.to_owned());
    }

    pub fn glyph(&self, field: SliderField, level: u8) -> Option<&str> {
        self.glyphs.get(&field)?.get(&level).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.values().all(BTreeMap::is_empty)
    }

    /// Lay `overrides` over `self`; pairs missing from `overrides` keep this map's glyph.
    pub fn overlaid_with(mut self, overrides: &EmojiMap) -> Self {
        for (field, levels) in &overrides.glyphs {
            for (level, glyph) in levels {
                self.insert(*field, *level, glyph);
            }
        }
        self
    }
}

/// Label text for a slider, or `None` when no glyph is known for that level.
pub fn slider_label(map: &EmojiMap, field: SliderField, level: u8) -> Option<String> {
    map.glyph(field, level)
        .map(|glyph| format!("{glyph} {}", field.display_name()))
}

/// Label to show after a level change. A level with no glyph keeps `prev`.
pub fn next_label(prev: &str, map: &EmojiMap, field: SliderField, level: u8) -> String {
    slider_label(map, field, level).unwrap_or_else(|| prev.to_owned())
}
