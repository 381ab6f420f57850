//! Check-in form state: one level per slider field plus the journal text.
//!
//! DESIGN
//! ======
//! `FormState` is the single source of truth the slider widgets render from.
//! It is mutated only from event handlers (pointer, keyboard, reset) and
//! snapshotted into `FormData` for validation and submission.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CheckInError;
use crate::util::slider_math::{LEVEL_DEFAULT, LEVEL_MAX, LEVEL_MIN, SliderKey, apply_slider_key, clamp_level};

/// Whether a higher level is a better or worse state.
///
/// Affects color presentation only; stored levels mean the same thing either way.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Polarity {
    Positive,
    Negative,
}

/// Named wellness dimension driven by one slider.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SliderField {
    Mood,
    Stress,
    Focus,
    Sleep,
    Motivation,
    Anxiety,
    Appetite,
    FoodSecurity,
}

impl SliderField {
    pub const ALL: [Self; 8] = [
        Self::Mood,
        Self::Stress,
        Self::Focus,
        Self::Sleep,
        Self::Motivation,
        Self::Anxiety,
        Self::Appetite,
        Self::FoodSecurity,
    ];

    /// Wire key and DOM identifier.
    pub fn key(self) -> &'static str {
        match self {
            Self::Mood => "mood",
            Self::Stress => "stress",
            Self::Focus => "focus",
            Self::Sleep => "sleep",
            Self::Motivation => "motivation",
            Self::Anxiety => "anxiety",
            Self::Appetite => "appetite",
            Self::FoodSecurity => "food_security",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Mood => "Mood",
            Self::Stress => "Stress",
            Self::Focus => "Focus",
            Self::Sleep => "Sleep Quality",
            Self::Motivation => "Motivation",
            Self::Anxiety => "Anxiety",
            Self::Appetite => "Appetite",
            Self::FoodSecurity => "Food Security",
        }
    }

    pub fn help_text(self) -> &'static str {
        match self {
            Self::Mood => "1 = Very bad, 5 = Excellent",
            Self::Stress => "1 = No stress, 5 = Extreme stress",
            Self::Focus => "1 = Can't focus, 5 = Fully focused",
            Self::Sleep => "1 = Very poor, 5 = Well-rested",
            Self::Motivation => "1 = None, 5 = Highly motivated",
            Self::Anxiety => "1 = Calm, 5 = Overwhelming",
            Self::Appetite => "1 = No appetite, 5 = Very hungry",
            Self::FoodSecurity => "1 = Often without food, 5 = Always secure",
        }
    }

    pub fn polarity(self) -> Polarity {
        match self {
            Self::Stress | Self::Anxiety => Polarity::Negative,
            _ => Polarity::Positive,
        }
    }

    /// DOM id of the emoji label element.
    pub fn label_id(self) -> String {
        format!("{}-label", self.key())
    }
}

impl fmt::Display for SliderField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// In-memory form state owned by the page session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormState {
    levels: BTreeMap<SliderField, u8>,
    pub journal: String,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            levels: SliderField::ALL.into_iter().map(|field| (field, LEVEL_DEFAULT)).collect(),
            journal: String::new(),
        }
    }
}

impl FormState {
    pub fn level(&self, field: SliderField) -> u8 {
        self.levels.get(&field).copied().unwrap_or(LEVEL_DEFAULT)
    }

    /// Store a level after rounding/clamping it into `1..=5`. Returns the stored level.
    pub fn set_level(&mut self, field: SliderField, raw: f64) -> u8 {
        let level = clamp_level(raw);
        self.levels.insert(field, level);
        level
    }

    /// Apply a keyboard command to one field. Returns the stored level.
    pub fn apply_key(&mut self, field: SliderField, key: SliderKey) -> u8 {
        let level = apply_slider_key(self.level(field), key);
        self.levels.insert(field, level);
        level
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Snapshot for validation and submission; the journal is trimmed.
    pub fn form_data(&self) -> FormData {
        FormData {
            mood: self.level(SliderField::Mood),
            stress: self.level(SliderField::Stress),
            focus: self.level(SliderField::Focus),
            sleep: self.level(SliderField::Sleep),
            motivation: self.level(SliderField::Motivation),
            anxiety: self.level(SliderField::Anxiety),
            appetite: self.level(SliderField::Appetite),
            food_security: self.level(SliderField::FoodSecurity),
            journal: self.journal.trim().to_owned(),
        }
    }

    pub fn summary(&self) -> WellnessSummary {
        let total = SliderField::ALL
            .into_iter()
            .map(|field| u32::from(self.level(field)))
            .sum::<u32>();
        WellnessSummary { total, average: f64::from(total) / SliderField::ALL.len() as f64 }
    }
}

/// Sum and mean of all slider levels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WellnessSummary {
    pub total: u32,
    pub average: f64,
}

/// Request body for `POST /api/submit`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormData {
    pub mood: u8,
    pub stress: u8,
    pub focus: u8,
    pub sleep: u8,
    pub motivation: u8,
    pub anxiety: u8,
    pub appetite: u8,
    pub food_security: u8,
    pub journal: String,
}

impl Default for FormData {
    fn default() -> Self {
        FormState::default().form_data()
    }
}

impl FormData {
    pub fn level(&self, field: SliderField) -> u8 {
        match field {
            SliderField::Mood => self.mood,
            SliderField::Stress => self.stress,
            SliderField::Focus => self.focus,
            SliderField::Sleep => self.sleep,
            SliderField::Motivation => self.motivation,
            SliderField::Anxiety => self.anxiety,
            SliderField::Appetite => self.appetite,
            SliderField::FoodSecurity => self.food_security,
        }
    }

    pub fn levels(&self) -> impl Iterator<Item = (SliderField, u8)> + '_ {
        SliderField::ALL.into_iter().map(|field| (field, self.level(field)))
    }
}

/// Check a snapshot before it is sent.
///
/// # Errors
///
/// Returns `OutOfRange` for the first level outside `1..=5`, or `AllDefault`
/// when every level is still at the default.
pub fn validate(data: &FormData) -> Result<(), CheckInError> {
    if let Some((field, value)) = data
        .levels()
        .find(|(_, value)| !(LEVEL_MIN..=LEVEL_MAX).contains(value))
    {
        return Err(CheckInError::OutOfRange { field, value });
    }
    if data.levels().all(|(_, value)| value == LEVEL_DEFAULT) {
        return Err(CheckInError::AllDefault);
    }
    Ok(())
}
