//! Presentation model for a scoring result.
//!
//! `ResultView::from_result` holds every decision the results panel makes
//! (glyphs, messages, link vs plain headings, percentages) so the component
//! only copies fields into markup.

#[cfg(test)]
#[path = "result_view_test.rs"]
mod result_view_test;

use crate::net::types::{EmotionAnalysis, ResourceItem, SubmissionResult};

/// Recognized burnout levels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BurnoutLevel {
    Low,
    Moderate,
    High,
}

impl BurnoutLevel {
    /// Case-insensitive parse; unrecognized labels yield `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "low" => Some(Self::Low),
            "moderate" => Some(Self::Moderate),
            "high" => Some(Self::High),
            _ => None,
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Self::Low => "🟢",
            Self::Moderate => "🟡",
            Self::High => "🔴",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::Low => "You're managing well right now. Keep up the habits that support you.",
            Self::Moderate => "Some signs of strain are showing. Small adjustments and a check-in with support can help.",
            Self::High => "Your responses suggest significant strain. Please consider reaching out to the resources below.",
        }
    }

    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Low => "burnout-result--low",
            Self::Moderate => "burnout-result--moderate",
            Self::High => "burnout-result--high",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BurnoutBanner {
    /// Level label exactly as the server sent it.
    pub label: String,
    pub glyph: Option<&'static str>,
    pub message: Option<&'static str>,
    pub css_class: String,
    pub score: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResourceHeading {
    Link { href: String, text: String },
    Plain(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourceView {
    pub heading: ResourceHeading,
    pub description: Option<String>,
}

impl From<&ResourceItem> for ResourceView {
    fn from(item: &ResourceItem) -> Self {
        let heading = match item.url.as_deref().map(str::trim).filter(|u| !u.is_empty()) {
            Some(href) => ResourceHeading::Link { href: href.to_owned(), text: item.name.clone() },
            None => ResourceHeading::Plain(item.name.clone()),
        };
        let description = item
            .description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(str::to_owned);
        Self { heading, description }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmotionView {
    pub emotion: String,
    pub percent: u8,
}

impl EmotionView {
    pub fn bar_style(&self) -> String {
        format!("width: {}%;", self.percent)
    }

    pub fn summary(&self) -> String {
        format!("{} (confidence: {}%)", self.emotion, self.percent)
    }
}

impl From<&EmotionAnalysis> for EmotionView {
    fn from(analysis: &EmotionAnalysis) -> Self {
        Self { emotion: analysis.emotion.clone(), percent: confidence_percent(analysis.confidence) }
    }
}

/// Round a `0.0..=1.0` confidence to a whole percentage.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn confidence_percent(confidence: f64) -> u8 {
    if !confidence.is_finite() {
        return 0;
    }
    (confidence * 100.0).round().clamp(0.0, 100.0) as u8
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultView {
    pub banner: BurnoutBanner,
    pub feedback_html: String,
    pub resources_title: Option<String>,
    pub resources: Vec<ResourceView>,
    pub emotion: Option<EmotionView>,
}

impl ResultView {
    pub fn from_result(result: &SubmissionResult) -> Self {
        let level = BurnoutLevel::parse(&result.burnout_level);
        let css_class = match level {
            Some(level) => format!("burnout-result {}", level.css_modifier()),
            None => "burnout-result".to_owned(),
        };
        let banner = BurnoutBanner {
            label: result.burnout_level.trim().to_owned(),
            glyph: level.map(BurnoutLevel::glyph),
            message: level.map(BurnoutLevel::message),
            css_class,
            score: format_wellness_score(result.wellness_score),
        };

        Self {
            banner,
            feedback_html: result.feedback.clone(),
            resources_title: result.resources.title.clone(),
            resources: result.resources.items.iter().map(ResourceView::from).collect(),
            emotion: result.emotion_analysis.as_ref().map(EmotionView::from),
        }
    }
}

/// Two-decimal score on the 0-5 scale. Out-of-range values are shown as sent.
pub fn format_wellness_score(score: f64) -> String {
    if score.is_finite() {
        if !(0.0..=5.0).contains(&score) {
            leptos::logging::warn!("wellness score {score} outside 0-5");
        }
        format!("{score:.2} / 5")
    } else {
        "— / 5".to_owned()
    }
}

/// Ordered result sections revealed one after another.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResultSection {
    Banner,
    Feedback,
    Resources,
    Emotion,
}

impl ResultSection {
    pub const ORDER: [Self; 4] = [Self::Banner, Self::Feedback, Self::Resources, Self::Emotion];

    fn position(self) -> u8 {
        match self {
            Self::Banner => 0,
            Self::Feedback => 1,
            Self::Resources => 2,
            Self::Emotion => 3,
        }
    }

    /// Whether the section is shown once `revealed` sections have appeared.
    pub fn is_revealed(self, revealed: u8) -> bool {
        self.position() < revealed
    }
}

#[allow(clippy::cast_possible_truncation)]
pub const ALL_SECTIONS_REVEALED: u8 = ResultSection::ORDER.len() as u8;
