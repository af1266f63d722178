use super::*;

#[test]
fn valid_input_is_trimmed_and_accepted() {
    assert_eq!(
        validate_login_input("  admin@bambly.ai  ", "admin123"),
        Ok(("admin@bambly.ai".to_owned(), "admin123".to_owned()))
    );
}

#[test]
fn empty_fields_are_rejected_before_submission() {
    assert_eq!(validate_login_input("", "admin123"), Err("Enter both email and password."));
    assert_eq!(
        validate_login_input("admin@bambly.ai", ""),
        Err("Enter both email and password.")
    );
    assert_eq!(validate_login_input("   ", "admin123"), Err("Enter both email and password."));
}

#[test]
fn an_email_must_look_like_an_email() {
    assert_eq!(validate_login_input("admin", "admin123"), Err("Enter a valid email address."));
}

#[test]
fn passwords_are_not_trimmed() {
    // Leading/trailing whitespace in a password is significant.
    assert_eq!(
        validate_login_input("admin@bambly.ai", " admin123 "),
        Ok(("admin@bambly.ai".to_owned(), " admin123 ".to_owned()))
    );
}
