//! Wire DTOs for the scoring service.
//!
//! DESIGN
//! ======
//! Optional fields default rather than fail so a partially filled response
//! still renders. `burnout_level` stays a raw string: the renderer decides
//! what it recognizes.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// Successful `POST /api/submit` response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SubmissionResult {
    /// `"Low"`, `"Moderate"`, or `"High"`; compared case-insensitively.
    pub burnout_level: String,
    /// Wellness score on a 0-5 scale.
    #[serde(default)]
    pub wellness_score: f64,
    /// Server-authored HTML feedback.
    #[serde(default)]
    pub feedback: String,
    #[serde(default)]
    pub resources: ResourceList,
    #[serde(default)]
    pub emotion_analysis: Option<EmotionAnalysis>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceList {
    #[serde(default, deserialize_with = "deserialize_non_blank")]
    pub title: Option<String>,
    #[serde(default)]
    pub items: Vec<ResourceItem>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceItem {
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_non_blank")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "deserialize_non_blank")]
    pub description: Option<String>,
}

/// Journal emotion classification.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EmotionAnalysis {
    pub emotion: String,
    /// Classifier confidence in `0.0..=1.0`.
    pub confidence: f64,
}

/// Body of a non-success response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

/// Treat `""`, whitespace, and `null` as absent.
fn deserialize_non_blank<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}
