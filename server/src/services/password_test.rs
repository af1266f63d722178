use super::*;

#[test]
fn hash_then_verify_round_trip() {
    let hash = hash_password("admin123").unwrap();
    assert!(verify_password("admin123", &hash));
}

#[test]
fn wrong_password_is_rejected() {
    let hash = hash_password("admin123").unwrap();
    assert!(!verify_password("admin124", &hash));
    assert!(!verify_password("", &hash));
}

#[test]
fn hashes_are_salted_per_call() {
    let first = hash_password("admin123").unwrap();
    let second = hash_password("admin123").unwrap();
    assert_ne!(first, second);
    assert!(verify_password("admin123", &second));
}

#[test]
fn corrupt_stored_hash_never_verifies() {
    assert!(!verify_password("admin123", "not-a-phc-string"));
    assert!(!verify_password("admin123", ""));
}

#[test]
fn password_policy_enforces_minimum_length() {
    assert!(validate_new_password("abc12").is_err());
    assert!(validate_new_password("abc123").is_ok());
}
