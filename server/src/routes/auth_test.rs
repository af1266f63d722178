use super::*;
use uuid::Uuid;

fn sample_user() -> SessionUser {
    SessionUser {
        id: Uuid::nil(),
        name: "Admin User".to_owned(),
        email: "admin@bambly.ai".to_owned(),
        role: dto::users::Role::Admin,
        department: Some("Management".to_owned()),
        avatar: None,
        last_login: Some("2024-12-24 09:15".to_owned()),
    }
}

#[test]
fn success_body_carries_the_user_and_no_error() {
    let body = success_body(sample_user());
    assert!(body.success);
    assert!(body.error.is_none());
    assert_eq!(body.user.unwrap().email, "admin@bambly.ai");
}

#[test]
fn failure_body_carries_only_the_message() {
    let body = failure_body(BAD_CREDENTIALS);
    assert!(!body.success);
    assert!(body.user.is_none());
    assert_eq!(body.error.as_deref(), Some("Invalid email or password"));
}

#[test]
fn credential_rejections_do_not_reveal_which_field_failed() {
    // Unknown email and wrong password must produce the same message.
    assert_eq!(failure_body(BAD_CREDENTIALS), failure_body(BAD_CREDENTIALS));
    assert_ne!(BAD_CREDENTIALS, ACCOUNT_DEACTIVATED);
}
