use super::*;

fn range(start: Option<&str>, end: Option<&str>) -> DateRange {
    DateRange {
        start_date: start.map(str::to_owned),
        end_date: end.map(str::to_owned),
    }
}

#[test]
fn parse_iso_date_accepts_valid_dates() {
    let date = parse_iso_date("2024-12-24").unwrap();
    assert_eq!(date.to_string(), "2024-12-24");
}

#[test]
fn parse_iso_date_rejects_garbage() {
    assert!(parse_iso_date("yesterday").is_none());
    assert!(parse_iso_date("2024-13-01").is_none());
    assert!(parse_iso_date("2024-12-32").is_none());
    assert!(parse_iso_date("24-12-2024").is_none());
    assert!(parse_iso_date("").is_none());
}

#[test]
fn validate_accepts_empty_range() {
    assert!(validate(&DateRange::default()).is_ok());
}

#[test]
fn validate_accepts_single_bound() {
    assert!(validate(&range(Some("2024-12-01"), None)).is_ok());
    assert!(validate(&range(None, Some("2024-12-31"))).is_ok());
}

#[test]
fn validate_accepts_ordered_bounds() {
    assert!(validate(&range(Some("2024-12-01"), Some("2024-12-31"))).is_ok());
    // Same-day window is a valid range.
    assert!(validate(&range(Some("2024-12-01"), Some("2024-12-01"))).is_ok());
}

#[test]
fn validate_rejects_malformed_bound() {
    assert_eq!(
        validate(&range(Some("not-a-date"), None)),
        Err(StatusCode::BAD_REQUEST)
    );
    assert_eq!(
        validate(&range(None, Some("2024/12/31"))),
        Err(StatusCode::BAD_REQUEST)
    );
}

#[test]
fn validate_rejects_inverted_range() {
    assert_eq!(
        validate(&range(Some("2024-12-31"), Some("2024-12-01"))),
        Err(StatusCode::BAD_REQUEST)
    );
}
