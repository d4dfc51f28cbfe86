use serde_json::json;

use super::*;

#[test]
fn login_response_parses_server_shape() {
    let raw = r#"{
        "message": "Logged in successfully",
        "user": {"id": 1, "username": "alice", "is_admin": true}
    }"#;
    let parsed: LoginResponse = serde_json::from_str(raw).expect("login response");
    assert_eq!(parsed.user.id, Some(1));
    assert_eq!(parsed.user.display_name(), "alice");
    assert!(parsed.user.is_admin());
    assert!(parsed.user.extra.is_empty());
}

#[test]
fn user_missing_admin_flag_is_not_admin() {
    let user: User = serde_json::from_str(r#"{"id": 2, "username": "bob"}"#).expect("user");
    assert!(!user.is_admin());
}

#[test]
fn admin_flag_alone_is_a_valid_user() {
    let user: User = serde_json::from_str(r#"{"is_admin": true}"#).expect("user");
    assert!(user.is_admin());
    assert_eq!(user.id, None);
    assert_eq!(user.display_name(), "account");
}

#[test]
fn user_keeps_fields_it_does_not_name() {
    let raw = json!({
        "id": 3,
        "username": "carol",
        "email": "c@example.com",
        "created_at": "2024-01-01T00:00:00",
        "is_admin": false,
        "preferences": {"theme": "dark"}
    });
    let user: User = serde_json::from_value(raw.clone()).expect("user");
    assert_eq!(user.extra.get("email"), Some(&json!("c@example.com")));
    assert_eq!(serde_json::to_value(&user).expect("json"), raw);
}

#[test]
fn absent_fields_stay_absent_when_serialized() {
    let user: User = serde_json::from_str(r#"{"username": "dave"}"#).expect("user");
    assert_eq!(serde_json::to_value(&user).expect("json"), json!({"username": "dave"}));
}

#[test]
fn register_request_serializes_all_fields() {
    let body = RegisterRequest { username: "erin", email: "erin@example.com", password: "pw" };
    let json = serde_json::to_value(&body).expect("json");
    assert_eq!(json, json!({"username": "erin", "email": "erin@example.com", "password": "pw"}));
}

#[test]
fn error_body_parses_error_field() {
    let body: ErrorBody = serde_json::from_str(r#"{"error": "Username already exists"}"#).expect("error body");
    assert_eq!(body.error, "Username already exists");
}
