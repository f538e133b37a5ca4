use super::*;

#[test]
fn register_failed_message_uses_server_reason() {
    let err = ApiError::Status { status: 400, message: Some("Note: Only defined users succeed registration".to_owned()) };
    assert_eq!(register_failed_message(&err), "Register failed. Note: Only defined users succeed registration");
}

#[test]
fn register_failed_message_for_network_error() {
    let err = ApiError::Network("offline".to_owned());
    assert_eq!(register_failed_message(&err), "Register failed. network error: offline");
}
