use super::*;

#[test]
fn unauthorized_only_for_401_rejections() {
    let err = AuthError::Rejected { status: 401, message: "Unauthorized".to_owned() };
    assert!(err.is_unauthorized());

    let err = AuthError::Rejected { status: 400, message: "Missing required fields".to_owned() };
    assert!(!err.is_unauthorized());

    assert!(!AuthError::Network("offline".to_owned()).is_unauthorized());
}

#[test]
fn user_message_surfaces_server_rejection_text() {
    let err = AuthError::Rejected { status: 401, message: "Invalid username or password".to_owned() };
    assert_eq!(err.user_message(), "Invalid username or password");
}

#[test]
fn user_message_hides_transport_details() {
    let err = AuthError::Network("TypeError: Failed to fetch".to_owned());
    assert!(!err.user_message().contains("TypeError"));
}

#[test]
fn display_includes_status() {
    let err = AuthError::Rejected { status: 400, message: "Username already exists".to_owned() };
    assert_eq!(err.to_string(), "request rejected (400): Username already exists");
}
