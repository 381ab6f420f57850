use super::*;
use crate::error::CheckInError;
use crate::net::api::parse_submission;
use crate::state::form::FormState;

const LOW_RESPONSE: &str = r#"{
    "burnout_level": "Low",
    "wellness_score": 4.2,
    "feedback": "<p>Keep it up.</p>",
    "resources": { "items": [] }
}"#;

#[test]
fn columns_cover_every_field_once() {
    let mut fields: Vec<SliderField> = LEFT_COLUMN.into_iter().chain(RIGHT_COLUMN).collect();
    fields.sort();
    let mut all = SliderField::ALL.to_vec();
    all.sort();
    assert_eq!(fields, all);
}

#[test]
fn ctrl_r_and_ctrl_enter_map_to_shortcuts() {
    assert_eq!(page_shortcut("r", true), Some(PageShortcut::Reset));
    assert_eq!(page_shortcut("R", true), Some(PageShortcut::Reset));
    assert_eq!(page_shortcut("Enter", true), Some(PageShortcut::Submit));
}

#[test]
fn keys_without_ctrl_are_not_shortcuts() {
    assert_eq!(page_shortcut("r", false), None);
    assert_eq!(page_shortcut("Enter", false), None);
    assert_eq!(page_shortcut("s", true), None);
}

#[test]
fn reset_restores_defaults_and_hides_results() {
    let mut form = FormState::default();
    form.set_level(SliderField::Mood, 5.0);
    form.set_level(SliderField::Anxiety, 1.0);
    form.journal = "long day".to_owned();

    let mut submission = SubmissionState::default();
    let ticket = submission.begin().expect("idle");
    submission.finish(ticket, parse_submission(LOW_RESPONSE));
    submission.show_error(&CheckInError::AllDefault);
    assert!(submission.results_visible());

    reset_checkin(&mut form, &mut submission);

    for field in SliderField::ALL {
        assert_eq!(form.level(field), 3, "{field} after reset");
    }
    assert!(form.journal.is_empty());
    assert!(!submission.results_visible());
    assert_eq!(submission.notice, None);
}

#[test]
fn average_label_tracks_slider_levels() {
    let mut form = FormState::default();
    assert_eq!(average_label(&form), "Average: 3.00 / 5");
    form.set_level(SliderField::Mood, 5.0);
    form.set_level(SliderField::Sleep, 5.0);
    assert_eq!(average_label(&form), "Average: 3.50 / 5");
}

#[test]
fn reset_while_submitting_discards_late_result() {
    let mut form = FormState::default();
    form.set_level(SliderField::Mood, 5.0);
    let mut submission = SubmissionState::default();
    let ticket = submission.begin().expect("idle");

    reset_checkin(&mut form, &mut submission);
    assert!(!submission.busy);

    submission.finish(ticket, parse_submission(LOW_RESPONSE));
    assert!(!submission.results_visible());
    assert_eq!(form.level(SliderField::Mood), 3);
}
