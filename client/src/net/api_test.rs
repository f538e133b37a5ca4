use super::*;

#[test]
fn delete_outcome_accepts_only_no_content() {
    assert_eq!(delete_outcome_for_status(204), Ok(()));
    assert_eq!(delete_outcome_for_status(200), Err(ApiError::Status { status: 200, message: None }));
    assert_eq!(delete_outcome_for_status(404), Err(ApiError::Status { status: 404, message: None }));
}

#[test]
fn status_error_extracts_server_message() {
    let err = status_error(400, r#"{"error":"user not found"}"#);
    assert_eq!(err, ApiError::Status { status: 400, message: Some("user not found".to_owned()) });
}

#[test]
fn status_error_ignores_unparseable_or_blank_bodies() {
    assert_eq!(status_error(500, "<html>oops</html>"), ApiError::Status { status: 500, message: None });
    assert_eq!(status_error(400, r#"{"error":"  "}"#), ApiError::Status { status: 400, message: None });
    assert_eq!(status_error(502, ""), ApiError::Status { status: 502, message: None });
}

#[test]
fn status_error_display_includes_status_and_message() {
    let err = ApiError::Status { status: 400, message: Some("Missing password".to_owned()) };
    assert_eq!(err.to_string(), "request failed: 400 (Missing password)");
    let bare = ApiError::Status { status: 404, message: None };
    assert_eq!(bare.to_string(), "request failed: 404");
}

#[test]
fn reason_prefers_server_message() {
    let err = ApiError::Status { status: 400, message: Some("user not found".to_owned()) };
    assert_eq!(err.reason(), "user not found");
}

#[test]
fn reason_falls_back_to_display() {
    assert_eq!(ApiError::Network("offline".to_owned()).reason(), "network error: offline");
    assert_eq!(ApiError::Unavailable.reason(), "not available on server");
}
