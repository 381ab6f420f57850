use super::*;
use std::cell::Cell;

use futures::executor::block_on;
use futures::future::{pending, ready};

use crate::error::{GENERIC_REQUEST_MESSAGE, TIMEOUT_MESSAGE};
use crate::state::form::SliderField;
use crate::util::emoji::slider_label;

#[test]
fn emoji_request_failed_message_formats_status() {
    assert_eq!(emoji_request_failed_message(503), "emoji request failed: 503");
}

// =============================================================
// Emoji loading
// =============================================================

#[test]
fn failed_emoji_fetch_uses_builtin_table_for_every_label() {
    let map = resolve_emoji_map(Err(emoji_request_failed_message(500)));
    assert_eq!(map, EmojiMap::fallback());
    for field in SliderField::ALL {
        for level in 1..=5 {
            let label = slider_label(&map, field, level).expect("fallback has every glyph");
            assert!(label.ends_with(field.display_name()));
        }
    }
}

#[test]
fn empty_emoji_table_uses_builtin_table() {
    assert_eq!(resolve_emoji_map(Ok(EmojiMap::default())), EmojiMap::fallback());
}

#[test]
fn fetched_glyphs_override_builtin_ones() {
    let mut fetched = EmojiMap::default();
    fetched.insert(SliderField::Mood, 1, "M");
    let map = resolve_emoji_map(Ok(fetched));
    assert_eq!(map.glyph(SliderField::Mood, 1), Some("M"));
    assert_eq!(map.glyph(SliderField::Mood, 2), EmojiMap::fallback().glyph(SliderField::Mood, 2));
}

#[test]
fn partial_remote_table_is_filled_from_builtin_table() {
    // Legacy backend payload: has `energy`, lacks `food_security` and the rest.
    let payload = serde_json::json!({
        "mood": { "1": "😢", "2": "😕", "3": "😐", "4": "🙂", "5": "😄" },
        "energy": { "1": "🪫", "2": "😴", "3": "😐", "4": "⚡", "5": "🔋" }
    });
    let fetched = EmojiMap::from_json(&payload).ok_or_else(|| "not an object".to_owned());
    let map = resolve_emoji_map(fetched);
    assert_eq!(map.glyph(SliderField::Mood, 1), Some("😢"));
    for field in SliderField::ALL {
        for level in 1..=5 {
            assert!(slider_label(&map, field, level).is_some(), "{field} {level} has no glyph");
        }
    }
    assert_eq!(map.glyph(SliderField::FoodSecurity, 2), Some("🥫"));
    assert_eq!(map.glyph(SliderField::Stress, 5), Some("😫"));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn load_emoji_map_never_fails_without_browser() {
    let map = block_on(load_emoji_map("/api/emojis"));
    assert_eq!(map, EmojiMap::fallback());
}

// =============================================================
// Deadline race
// =============================================================

#[test]
fn deadline_firing_first_aborts_and_times_out() {
    let aborted = Cell::new(false);
    let outcome = block_on(race_deadline(
        pending::<Result<u8, CheckInError>>(),
        ready(()),
        || aborted.set(true),
    ));
    assert_eq!(outcome, Err(CheckInError::Timeout));
    assert!(aborted.get());
    assert_eq!(CheckInError::Timeout.user_message(), TIMEOUT_MESSAGE);
}

#[test]
fn request_finishing_first_skips_abort() {
    let aborted = Cell::new(false);
    let outcome = block_on(race_deadline(ready(Ok::<u8, CheckInError>(7)), pending::<()>(), || {
        aborted.set(true);
    }));
    assert_eq!(outcome, Ok(7));
    assert!(!aborted.get());
}

#[test]
fn request_error_is_not_masked_by_deadline() {
    let outcome = block_on(race_deadline(
        ready(Err::<u8, _>(CheckInError::Request("nope".to_owned()))),
        pending::<()>(),
        || {},
    ));
    assert_eq!(outcome, Err(CheckInError::Request("nope".to_owned())));
}

// =============================================================
// Body parsing
// =============================================================

#[test]
fn request_error_passes_server_message_through() {
    let err = request_error(r#"{"error":"Missing field: sleep"}"#);
    assert_eq!(err, CheckInError::Request("Missing field: sleep".to_owned()));
}

#[test]
fn request_error_without_message_is_generic() {
    assert_eq!(request_error("<html>502</html>").user_message(), GENERIC_REQUEST_MESSAGE);
    assert_eq!(request_error("{}").user_message(), GENERIC_REQUEST_MESSAGE);
}

#[test]
fn parse_submission_reads_success_body() {
    let result = parse_submission(r#"{"burnout_level":"Low","wellness_score":4.25,"feedback":"ok"}"#)
        .expect("success body parses");
    assert_eq!(result.burnout_level, "Low");
    assert_eq!(result.wellness_score, 4.25);
}

#[test]
fn parse_submission_maps_garbage_to_unknown() {
    assert!(matches!(parse_submission("not json"), Err(CheckInError::Unknown(_))));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn submit_checkin_stub_reports_unknown() {
    let outcome = block_on(submit_checkin("/api/submit", &FormData::default(), Duration::from_secs(30)));
    assert!(matches!(outcome, Err(CheckInError::Unknown(_))));
}
