use super::*;

fn user(is_admin: bool) -> User {
    User { id: Some(7), username: Some("alice".to_owned()), is_admin: Some(is_admin), ..User::default() }
}

#[test]
fn anonymous_is_not_authenticated() {
    let session = Session::anonymous();
    assert!(!session.is_authenticated());
    assert!(session.user().is_none());
}

#[test]
fn anonymous_is_not_admin() {
    assert!(!Session::anonymous().is_admin());
}

#[test]
fn signed_in_is_authenticated() {
    let session = Session::signed_in(user(false));
    assert!(session.is_authenticated());
    assert_eq!(session.user().map(User::display_name), Some("alice"));
}

#[test]
fn admin_flag_follows_user() {
    assert!(!Session::signed_in(user(false)).is_admin());
    assert!(Session::signed_in(user(true)).is_admin());
}

#[test]
fn default_matches_anonymous() {
    assert_eq!(Session::default(), Session::anonymous());
}

#[test]
fn user_without_admin_flag_is_not_admin() {
    let session = Session::signed_in(User { username: Some("bob".to_owned()), ..User::default() });
    assert!(session.is_authenticated());
    assert!(!session.is_admin());
}

#[test]
fn display_name_is_empty_when_signed_out() {
    assert_eq!(Session::anonymous().display_name(), "");
    assert_eq!(Session::signed_in(user(false)).display_name(), "alice");
}
