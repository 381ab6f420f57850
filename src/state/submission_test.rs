use super::*;
use std::cell::Cell;

use futures::executor::block_on;
use futures::future::{pending, ready};

use crate::error::{ALL_DEFAULT_MESSAGE, TIMEOUT_MESSAGE};
use crate::net::api::{parse_submission, race_deadline};
use crate::util::result_view::{ResourceHeading, ResultView};

fn changed_form() -> FormData {
    FormData { mood: 4, ..FormData::default() }
}

const HIGH_RESPONSE: &str = r#"{
    "success": true,
    "burnout_level": "High",
    "wellness_score": 1.8,
    "feedback": "<p>Multiple areas are low.</p>",
    "resources": {
        "title": "Suggested Campus Resources",
        "items": [
            {
                "name": "Counseling Services",
                "url": "https://www.uidaho.edu/current-students/cmhc",
                "description": "Free short-term counseling, mental health support."
            }
        ]
    },
    "emotion_analysis": null
}"#;

// =============================================================
// Busy lifecycle
// =============================================================

#[test]
fn begin_is_exclusive_while_busy() {
    let mut state = SubmissionState::default();
    assert_eq!(state.begin(), Some(0));
    assert!(state.busy);
    assert_eq!(state.begin(), None);
}

#[test]
fn begin_clears_stale_notice() {
    let mut state = SubmissionState::default();
    state.show_error(&CheckInError::Timeout);
    assert!(state.begin().is_some());
    assert_eq!(state.notice, None);
}

#[test]
fn finish_clears_busy_on_every_outcome() {
    let outcomes = vec![
        Err(CheckInError::AllDefault),
        Err(CheckInError::OutOfRange { field: crate::state::form::SliderField::Mood, value: 9 }),
        Err(CheckInError::Request("bad".to_owned())),
        Err(CheckInError::Timeout),
        Err(CheckInError::Unknown("boom".to_owned())),
        parse_submission(HIGH_RESPONSE),
    ];
    for outcome in outcomes {
        let mut state = SubmissionState::default();
        let ticket = state.begin().expect("idle state accepts a submission");
        state.finish(ticket, outcome);
        assert!(!state.busy);
        assert!(state.begin().is_some(), "form stays usable after finish");
    }
}

#[test]
fn finish_ok_stores_result_and_bumps_seq() {
    let mut state = SubmissionState::default();
    let ticket = state.begin().expect("idle");
    state.finish(ticket, parse_submission(HIGH_RESPONSE));
    assert!(state.results_visible());
    assert_eq!(state.result_seq, 1);
    assert_eq!(state.notice, None);
}

#[test]
fn finish_err_keeps_previous_result_and_shows_notice() {
    let mut state = SubmissionState::default();
    let ticket = state.begin().expect("idle");
    state.finish(ticket, parse_submission(HIGH_RESPONSE));
    let ticket = state.begin().expect("idle");
    state.finish(ticket, Err(CheckInError::Request("Server busy".to_owned())));
    assert!(state.results_visible());
    let notice = state.notice.expect("notice shown");
    assert_eq!(notice.message, "Server busy");
    assert_eq!(notice.severity, Severity::Error);
}

#[test]
fn outcome_after_invalidate_is_dropped() {
    let mut state = SubmissionState::default();
    let stale = state.begin().expect("idle");
    state.invalidate();
    assert!(!state.busy);
    state.finish(stale, parse_submission(HIGH_RESPONSE));
    assert!(!state.results_visible());
    assert_eq!(state.result_seq, 0);
    state.finish(stale, Err(CheckInError::Timeout));
    assert_eq!(state.notice, None);
}

#[test]
fn submission_started_after_invalidate_still_lands() {
    let mut state = SubmissionState::default();
    let stale = state.begin().expect("idle");
    state.invalidate();
    let fresh = state.begin().expect("invalidate frees the slot");
    assert_ne!(stale, fresh);
    state.finish(stale, Err(CheckInError::Timeout));
    assert!(state.busy, "stale outcome does not end the new submission");
    state.finish(fresh, parse_submission(HIGH_RESPONSE));
    assert!(!state.busy);
    assert!(state.results_visible());
}

// =============================================================
// Notices
// =============================================================

#[test]
fn expire_notice_only_removes_matching_seq() {
    let mut state = SubmissionState::default();
    let first = state.show_error(&CheckInError::AllDefault);
    let second = state.show_error(&CheckInError::Timeout);
    assert_ne!(first, second);
    state.expire_notice(first);
    assert_eq!(state.notice.as_ref().map(|n| n.seq), Some(second));
    state.expire_notice(second);
    assert_eq!(state.notice, None);
}

#[test]
fn dismiss_notice_clears_slot() {
    let mut state = SubmissionState::default();
    state.show_error(&CheckInError::AllDefault);
    state.dismiss_notice();
    assert_eq!(state.notice, None);
}

// =============================================================
// run_submission
// =============================================================

#[test]
fn all_default_form_never_reaches_network() {
    let called = Cell::new(false);
    let outcome = block_on(run_submission(FormData::default(), |_| {
        called.set(true);
        ready(parse_submission(HIGH_RESPONSE))
    }));
    assert_eq!(outcome, Err(CheckInError::AllDefault));
    assert!(!called.get());

    let mut state = SubmissionState::default();
    let ticket = state.begin().expect("idle");
    state.finish(ticket, outcome);
    let notice = state.notice.expect("warning shown");
    assert_eq!(notice.message, ALL_DEFAULT_MESSAGE);
    assert_eq!(notice.severity, Severity::Warning);
}

#[test]
fn successful_round_trip_renders_linked_resource() {
    let sent = Cell::new(None);
    let outcome = block_on(run_submission(changed_form(), |data| {
        sent.set(Some(data.mood));
        ready(parse_submission(HIGH_RESPONSE))
    }));
    assert_eq!(sent.get(), Some(4));

    let mut state = SubmissionState::default();
    let ticket = state.begin().expect("idle");
    state.finish(ticket, outcome);
    let result = state.result.as_ref().expect("result stored");
    let view = ResultView::from_result(result);
    assert_eq!(view.banner.label, "High");
    assert_eq!(view.banner.score, "1.80 / 5");
    assert!(view.resources.iter().any(|r| matches!(
        &r.heading,
        ResourceHeading::Link { text, href }
            if text == "Counseling Services" && href == "https://www.uidaho.edu/current-students/cmhc"
    )));
    assert_eq!(view.emotion, None);
}

#[test]
fn stalled_request_times_out_and_reenables_submit() {
    let aborted = Cell::new(false);
    let aborted_ref = &aborted;
    let outcome = block_on(run_submission(changed_form(), move |_| {
        race_deadline(pending::<Result<SubmissionResult, CheckInError>>(), ready(()), move || {
            aborted_ref.set(true);
        })
    }));
    assert_eq!(outcome, Err(CheckInError::Timeout));
    assert!(aborted.get());

    let mut state = SubmissionState::default();
    let ticket = state.begin().expect("idle");
    state.finish(ticket, outcome);
    assert!(!state.busy);
    let notice = state.notice.expect("timeout notice");
    assert_eq!(notice.message, TIMEOUT_MESSAGE);
    assert!(notice.message.contains("check your connection and try again"));
}
