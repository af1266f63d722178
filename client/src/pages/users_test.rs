use super::*;

#[test]
fn valid_input_builds_a_new_user() {
    let user = validate_new_user_input("  Ayesha Khan  ", " ayesha@bambly.ai ", "secret1").unwrap();
    assert_eq!(user.name, "Ayesha Khan");
    assert_eq!(user.email, "ayesha@bambly.ai");
    assert_eq!(user.password, "secret1");
    assert_eq!(user.role, None);
}

#[test]
fn missing_fields_are_rejected() {
    let expected = Err("Name, email and password are all required.");
    assert_eq!(validate_new_user_input("", "a@b.ai", "secret1"), expected);
    assert_eq!(validate_new_user_input("Ayesha", "", "secret1"), expected);
    assert_eq!(validate_new_user_input("Ayesha", "a@b.ai", ""), expected);
}

#[test]
fn email_shape_is_checked() {
    assert_eq!(
        validate_new_user_input("Ayesha", "not-an-email", "secret1"),
        Err("Enter a valid email address.")
    );
}

#[test]
fn short_passwords_are_rejected_client_side() {
    assert_eq!(
        validate_new_user_input("Ayesha", "a@b.ai", "12345"),
        Err("Password must be at least 6 characters.")
    );
    assert!(validate_new_user_input("Ayesha", "a@b.ai", "123456").is_ok());
}

#[test]
fn every_role_is_offered() {
    assert_eq!(ROLE_OPTIONS.len(), 3);
    assert!(ROLE_OPTIONS.contains(&Role::Admin));
    assert!(ROLE_OPTIONS.contains(&Role::Manager));
    assert!(ROLE_OPTIONS.contains(&Role::Viewer));
}
