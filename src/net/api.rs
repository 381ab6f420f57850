//! REST helpers for the scoring service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and unit tests: stubs, since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! The emoji loader never fails its caller; it degrades to the built-in table.
//! Submission returns a typed `CheckInError` for every failure path so the
//! page can always clear its busy state and show a notice.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::future::Future;
use std::time::Duration;

use futures::future::Either;

use super::types::{ErrorBody, SubmissionResult};
use crate::error::CheckInError;
use crate::state::form::FormData;
use crate::util::emoji::EmojiMap;

#[cfg(any(test, feature = "hydrate"))]
fn emoji_request_failed_message(status: u16) -> String {
    format!("emoji request failed: {status}")
}

/// Fetch the emoji table from `endpoint`.
///
/// # Errors
///
/// Returns an error string on transport failure, non-OK status, or a
/// payload that is not a JSON object.
pub async fn fetch_emoji_map(endpoint: &str) -> Result<EmojiMap, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(endpoint)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(emoji_request_failed_message(resp.status()));
        }
        let value: serde_json::Value = resp.json().await.map_err(|e| e.to_string())?;
        EmojiMap::from_json(&value).ok_or_else(|| "emoji payload is not an object".to_owned())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = endpoint;
        Err("not available on server".to_owned())
    }
}

/// Load the emoji table, falling back to the built-in one on any failure.
/// Field/level pairs the remote table leaves out use the built-in glyph.
pub async fn load_emoji_map(endpoint: &str) -> EmojiMap {
    resolve_emoji_map(fetch_emoji_map(endpoint).await)
}

pub(crate) fn resolve_emoji_map(fetched: Result<EmojiMap, String>) -> EmojiMap {
    match fetched {
        Ok(map) if !map.is_empty() => EmojiMap::fallback().overlaid_with(&map),
        Ok(_) => {
            leptos::logging::warn!("emoji table empty, using built-in glyphs");
            EmojiMap::fallback()
        }
        Err(e) => {
            leptos::logging::warn!("emoji load failed, using built-in glyphs: {e}");
            EmojiMap::fallback()
        }
    }
}

/// Submit a check-in via `POST {endpoint}`, aborting after `timeout`.
///
/// # Errors
///
/// - `Request` for a non-success status, carrying the server's message
/// - `Timeout` when `timeout` elapses first
/// - `Unknown` for transport failures or an unreadable success body
pub async fn submit_checkin(
    endpoint: &str,
    data: &FormData,
    timeout: Duration,
) -> Result<SubmissionResult, CheckInError> {
    #[cfg(feature = "hydrate")]
    {
        let controller = web_sys::AbortController::new()
            .map_err(|e| CheckInError::Unknown(format!("abort controller unavailable: {e:?}")))?;
        let signal = controller.signal();
        let request = async {
            let resp = gloo_net::http::Request::post(endpoint)
                .abort_signal(Some(&signal))
                .json(data)
                .map_err(|e| CheckInError::Unknown(e.to_string()))?
                .send()
                .await
                .map_err(|e| CheckInError::Unknown(e.to_string()))?;
            let body = resp.text().await.map_err(|e| CheckInError::Unknown(e.to_string()))?;
            if !resp.ok() {
                leptos::logging::warn!("submit rejected: status {}", resp.status());
                return Err(request_error(&body));
            }
            parse_submission(&body)
        };
        race_deadline(request, gloo_timers::future::sleep(timeout), || controller.abort()).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (endpoint, data, timeout);
        Err(CheckInError::Unknown("not available on server".to_owned()))
    }
}

/// Resolve `request` unless `deadline` fires first, in which case `abort` runs
/// and the outcome is `Timeout`.
///
/// # Errors
///
/// Returns the request's own error, or `Timeout`.
pub async fn race_deadline<T, R, D, A>(request: R, deadline: D, abort: A) -> Result<T, CheckInError>
where
    R: Future<Output = Result<T, CheckInError>>,
    D: Future<Output = ()>,
    A: FnOnce(),
{
    let request = std::pin::pin!(request);
    let deadline = std::pin::pin!(deadline);
    match futures::future::select(request, deadline).await {
        Either::Left((outcome, _)) => outcome,
        Either::Right(((), _)) => {
            abort();
            Err(CheckInError::Timeout)
        }
    }
}

/// Map a non-success body to `Request`, passing through the server's message.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
pub(crate) fn request_error(body: &str) -> CheckInError {
    let parsed = serde_json::from_str::<ErrorBody>(body).unwrap_or_default();
    CheckInError::from_server_message(parsed.error.as_deref())
}

/// Parse a success body.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
pub(crate) fn parse_submission(body: &str) -> Result<SubmissionResult, CheckInError> {
    serde_json::from_str::<SubmissionResult>(body)
        .map_err(|e| CheckInError::Unknown(format!("unreadable response: {e}")))
}
