//! Check-in error taxonomy.
//!
//! ERROR HANDLING
//! ==============
//! Every failure a user can hit while checking in is one of these variants.
//! None is fatal: the page turns each into a dismissable notice and the form
//! stays usable. Emoji loading never produces one; it falls back silently.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use crate::state::form::SliderField;

pub const ALL_DEFAULT_MESSAGE: &str =
    "It looks like you haven't updated any inputs. Please adjust them to reflect your current state.";
pub const GENERIC_REQUEST_MESSAGE: &str = "An error occurred while processing your request.";
pub const TIMEOUT_MESSAGE: &str = "The request timed out. Please check your connection and try again.";
pub const UNKNOWN_MESSAGE: &str = "Something went wrong while submitting your check-in. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CheckInError {
    /// Every slider is still at its default level.
    #[error("all sliders are at the default level")]
    AllDefault,

    /// A level escaped the widget clamp.
    #[error("{field} level {value} is outside 1..=5")]
    OutOfRange { field: SliderField, value: u8 },

    /// The scoring service answered with a non-success status.
    #[error("request rejected: {0}")]
    Request(String),

    /// The submission deadline elapsed and the request was aborted.
    #[error("request timed out")]
    Timeout,

    #[error("unexpected failure: {0}")]
    Unknown(String),
}

/// How a notice should be styled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

impl CheckInError {
    /// Text shown in the notification.
    pub fn user_message(&self) -> String {
        match self {
            Self::AllDefault => ALL_DEFAULT_MESSAGE.to_owned(),
            Self::OutOfRange { field, .. } => format!("{} must be between 1 and 5.", field.display_name()),
            Self::Request(message) => message.clone(),
            Self::Timeout => TIMEOUT_MESSAGE.to_owned(),
            Self::Unknown(_) => UNKNOWN_MESSAGE.to_owned(),
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Self::AllDefault | Self::OutOfRange { .. } => Severity::Warning,
            Self::Request(_) | Self::Timeout | Self::Unknown(_) => Severity::Error,
        }
    }

    /// Build a `Request` error from the server's `error` field, if any.
    pub fn from_server_message(message: Option<&str>) -> Self {
        let message = message.map(str::trim).filter(|m| !m.is_empty());
        Self::Request(message.unwrap_or(GENERIC_REQUEST_MESSAGE).to_owned())
    }
}
