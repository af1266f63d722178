use super::*;

#[test]
fn role_tags_parse_to_their_variants() {
    assert_eq!(role_from_str("admin"), Role::Admin);
    assert_eq!(role_from_str("manager"), Role::Manager);
    assert_eq!(role_from_str("viewer"), Role::Viewer);
}

#[test]
fn unknown_role_tag_degrades_to_viewer() {
    assert_eq!(role_from_str("superuser"), Role::Viewer);
    assert_eq!(role_from_str(""), Role::Viewer);
    // Tags are case-sensitive; the seed path always writes lowercase.
    assert_eq!(role_from_str("Admin"), Role::Viewer);
}

#[test]
fn record_columns_never_select_the_hash() {
    assert!(!RECORD_COLUMNS.contains("password_hash"));
}
