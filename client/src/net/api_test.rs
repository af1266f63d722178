use super::*;

#[test]
fn range_query_is_empty_for_an_empty_range() {
    assert_eq!(range_query(&DateRange::default()), "");
}

#[test]
fn range_query_with_one_bound() {
    let start_only = DateRange { start_date: Some("2024-12-01".to_owned()), end_date: None };
    assert_eq!(range_query(&start_only), "?startDate=2024-12-01");

    let end_only = DateRange { start_date: None, end_date: Some("2024-12-31".to_owned()) };
    assert_eq!(range_query(&end_only), "?endDate=2024-12-31");
}

#[test]
fn range_query_with_both_bounds() {
    let range = DateRange::between("2024-12-01", "2024-12-31");
    assert_eq!(range_query(&range), "?startDate=2024-12-01&endDate=2024-12-31");
}

#[test]
fn paged_query_appends_to_an_empty_range() {
    assert_eq!(paged_query(&DateRange::default(), 1, 50), "?page=1&limit=50");
}

#[test]
fn paged_query_appends_after_date_bounds() {
    let range = DateRange::between("2024-12-01", "2024-12-31");
    assert_eq!(
        paged_query(&range, 2, 25),
        "?startDate=2024-12-01&endDate=2024-12-31&page=2&limit=25"
    );
}

#[test]
fn api_base_has_no_trailing_slash() {
    assert!(!api_base().ends_with('/'));
}

#[test]
fn with_base_normalizes_trailing_slashes() {
    let api = Api::with_base("https://dash.bambly.ai/api/");
    assert_eq!(api.url("/overview"), "https://dash.bambly.ai/api/overview");
}

#[test]
fn url_joins_base_and_path_with_query() {
    let api = Api::with_base("http://localhost:3000/api");
    assert_eq!(
        api.url("/fraud?startDate=2024-12-01"),
        "http://localhost:3000/api/fraud?startDate=2024-12-01"
    );
}

#[test]
fn fetch_error_messages_name_the_failure_class() {
    let transport = FetchError::Transport("request timed out".to_owned());
    assert_eq!(transport.to_string(), "transport failure: request timed out");

    let api = FetchError::Api { status: 503, status_text: "Service Unavailable".to_owned() };
    assert_eq!(api.to_string(), "API error: 503 Service Unavailable");

    let decode = FetchError::Decode("expected value".to_owned());
    assert_eq!(decode.to_string(), "decode failure: expected value");
}

#[test]
fn fetched_or_keep_passes_successes_through() {
    let mut demo = false;
    let merged = fetched_or_keep(Ok::<i32, FetchError>(42), &mut demo);
    assert_eq!(merged, Some(42));
    assert!(!demo);
}

#[test]
fn fetched_or_keep_swallows_failures_and_flags_demo_data() {
    let mut demo = false;
    let merged = fetched_or_keep(
        Err::<i32, FetchError>(FetchError::Transport("down".to_owned())),
        &mut demo,
    );
    assert_eq!(merged, None);
    assert!(demo);
}

#[test]
fn fetched_or_keep_never_clears_an_already_raised_flag() {
    let mut demo = true;
    let merged = fetched_or_keep(Ok::<i32, FetchError>(1), &mut demo);
    assert_eq!(merged, Some(1));
    assert!(demo);
}
