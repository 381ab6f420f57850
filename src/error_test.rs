use super::*;

#[test]
fn all_default_message_nudges_user() {
    let err = CheckInError::AllDefault;
    assert_eq!(err.user_message(), ALL_DEFAULT_MESSAGE);
    assert_eq!(err.severity(), Severity::Warning);
}

#[test]
fn out_of_range_names_field() {
    let err = CheckInError::OutOfRange { field: SliderField::Sleep, value: 9 };
    assert_eq!(err.user_message(), "Sleep Quality must be between 1 and 5.");
    assert_eq!(err.to_string(), "sleep level 9 is outside 1..=5");
    assert_eq!(err.severity(), Severity::Warning);
}

#[test]
fn server_message_passes_through() {
    let err = CheckInError::from_server_message(Some("Missing field: mood"));
    assert_eq!(err, CheckInError::Request("Missing field: mood".to_owned()));
    assert_eq!(err.user_message(), "Missing field: mood");
    assert_eq!(err.severity(), Severity::Error);
}

#[test]
fn absent_or_blank_server_message_uses_generic_text() {
    assert_eq!(CheckInError::from_server_message(None).user_message(), GENERIC_REQUEST_MESSAGE);
    assert_eq!(CheckInError::from_server_message(Some("  ")).user_message(), GENERIC_REQUEST_MESSAGE);
}

#[test]
fn timeout_asks_to_check_connection() {
    let message = CheckInError::Timeout.user_message();
    assert!(message.contains("check your connection and try again"));
}

#[test]
fn unknown_hides_internal_detail() {
    let err = CheckInError::Unknown("JsValue(TypeError)".to_owned());
    assert_eq!(err.user_message(), UNKNOWN_MESSAGE);
    assert!(err.to_string().contains("TypeError"));
}
