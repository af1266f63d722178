use super::*;

#[test]
fn email_suffix_accepts_bare_and_prefixed_domains() {
    assert_eq!(email_suffix("lumu.ai"), "@lumu.ai");
    assert_eq!(email_suffix("@lumu.ai"), "@lumu.ai");
    assert_eq!(email_suffix("  bambly.ai  "), "@bambly.ai");
}

#[test]
fn like_pattern_matches_any_local_part() {
    assert_eq!(like_pattern("lumu.ai"), "%@lumu.ai");
}

#[test]
fn credentials_rows_align_on_the_role_column() {
    assert_eq!(
        credentials_row("admin", "admin@bambly.ai", "admin123"),
        "ADMIN      | admin@bambly.ai | admin123"
    );
    assert_eq!(
        credentials_row("manager", "manager@bambly.ai", "manager123"),
        "MANAGER    | manager@bambly.ai | manager123"
    );
}

#[test]
fn demo_accounts_cover_every_role_once() {
    let roles: Vec<&str> = DEMO_USERS.iter().map(|(_, _, _, role, _)| *role).collect();
    assert_eq!(roles, ["admin", "manager", "viewer"]);
    assert!(DEMO_USERS.iter().all(|(_, email, ..)| email.ends_with("@bambly.ai")));
}

#[test]
fn demo_passwords_meet_the_minimum_length_policy() {
    assert!(DEMO_USERS.iter().all(|(_, _, password, ..)| password.len() >= 6));
}

#[test]
fn hashing_produces_a_phc_string() {
    let hash = hash_password("admin123").unwrap();
    assert!(hash.starts_with("$argon2"));
}
