//! Client configuration sourced from `<meta>` tags in the host page.
//!
//! The host server can point the client at a different API prefix or tune
//! timers without rebuilding the WASM bundle. Missing or malformed values fall
//! back to the defaults below.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const API_BASE_KEY: &str = "mindguard-api-base";
pub const SUBMIT_TIMEOUT_KEY: &str = "mindguard-submit-timeout-secs";
pub const NOTICE_DISMISS_KEY: &str = "mindguard-notice-dismiss-secs";
pub const REVEAL_STAGGER_KEY: &str = "mindguard-reveal-stagger-ms";

pub const DEFAULT_SUBMIT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_NOTICE_DISMISS_SECS: u64 = 8;
pub const DEFAULT_REVEAL_STAGGER_MS: u64 = 120;

const EMOJI_PATH: &str = "/api/emojis";
const SUBMIT_PATH: &str = "/api/submit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientTimers {
    pub submit_timeout: Duration,
    pub notice_dismiss: Duration,
    pub reveal_stagger: Duration,
}

impl Default for ClientTimers {
    fn default() -> Self {
        Self {
            submit_timeout: Duration::from_secs(DEFAULT_SUBMIT_TIMEOUT_SECS),
            notice_dismiss: Duration::from_secs(DEFAULT_NOTICE_DISMISS_SECS),
            reveal_stagger: Duration::from_millis(DEFAULT_REVEAL_STAGGER_MS),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub emoji_endpoint: String,
    pub submit_endpoint: String,
    pub timers: ClientTimers,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl ClientConfig {
    /// Build typed config from a key lookup.
    ///
    /// Optional keys:
    /// - `mindguard-api-base`: prefix for both endpoints, default empty
    /// - `mindguard-submit-timeout-secs`: default 30
    /// - `mindguard-notice-dismiss-secs`: default 8
    /// - `mindguard-reveal-stagger-ms`: default 120
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let base = lookup(API_BASE_KEY).unwrap_or_default();
        let base = base.trim().trim_end_matches('/');
        let timers = ClientTimers {
            submit_timeout: Duration::from_secs(parse_positive(
                lookup(SUBMIT_TIMEOUT_KEY).as_deref(),
                DEFAULT_SUBMIT_TIMEOUT_SECS,
            )),
            notice_dismiss: Duration::from_secs(parse_positive(
                lookup(NOTICE_DISMISS_KEY).as_deref(),
                DEFAULT_NOTICE_DISMISS_SECS,
            )),
            reveal_stagger: Duration::from_millis(parse_positive(
                lookup(REVEAL_STAGGER_KEY).as_deref(),
                DEFAULT_REVEAL_STAGGER_MS,
            )),
        };

        Self {
            emoji_endpoint: format!("{base}{EMOJI_PATH}"),
            submit_endpoint: format!("{base}{SUBMIT_PATH}"),
            timers,
        }
    }

    /// Read config from `<meta name=... content=...>` tags in the document head.
    pub fn from_document() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let doc = web_sys::window().and_then(|w| w.document());
            Self::from_lookup(|key| {
                doc.as_ref()?
                    .query_selector(&format!("meta[name=\"{key}\"]"))
                    .ok()
                    .flatten()?
                    .get_attribute("content")
            })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::default()
        }
    }
}

fn parse_positive(raw: Option<&str>, default: u64) -> u64 {
    raw.and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(default)
}
