use super::*;

#[test]
fn clamp_paging_defaults() {
    assert_eq!(clamp_paging(None, None), (1, DEFAULT_PAGE_LIMIT));
}

#[test]
fn clamp_paging_floors_page_at_one() {
    assert_eq!(clamp_paging(Some(0), Some(10)), (1, 10));
}

#[test]
fn clamp_paging_bounds_limit() {
    assert_eq!(clamp_paging(Some(2), Some(0)), (2, 1));
    assert_eq!(clamp_paging(Some(2), Some(500)), (2, MAX_PAGE_LIMIT));
}

#[test]
fn invalid_clicks_first_page_window() {
    let page = invalid_clicks(Some(1), Some(5));
    assert_eq!(page.page, 1);
    assert_eq!(page.limit, 5);
    assert_eq!(page.data.len(), 5);
    assert_eq!(page.data[0].ip, "203.xxx.xxx.45");
    assert_eq!(page.data[4].ip, "45.xxx.xxx.23");
    // Total reports the overall invalid-click count, not the page size.
    assert_eq!(page.total, overview().invalid_clicks);
}

#[test]
fn invalid_clicks_second_page_continues_where_first_ended() {
    let first = invalid_clicks(Some(1), Some(5));
    let second = invalid_clicks(Some(2), Some(5));
    assert_eq!(second.data.len(), 5);
    assert_ne!(first.data[0].ip, second.data[0].ip);
    assert_eq!(second.data[0].ip, "202.xxx.xxx.67");
}

#[test]
fn invalid_clicks_past_the_end_is_empty_not_an_error() {
    let page = invalid_clicks(Some(99), Some(50));
    assert!(page.data.is_empty());
    assert_eq!(page.page, 99);
}

#[test]
fn invalid_clicks_records_are_sorted_by_click_volume() {
    let page = invalid_clicks(None, None);
    let clicks: Vec<i64> = page.data.iter().map(|r| r.clicks).collect();
    let mut sorted = clicks.clone();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    assert_eq!(clicks, sorted);
}

#[test]
fn savings_platform_split_sums_to_total() {
    let data = savings();
    let platform_sum: f64 = data.by_platform.iter().map(|p| p.saved).sum();
    assert!((platform_sum - data.total_saved).abs() < 1e-9);
    assert_eq!(data.currency, "PKR");
}

#[test]
fn report_percentages_cover_all_invalid_traffic() {
    let report = report();
    let share: f64 = report.fraud_types.iter().map(|t| t.percentage).sum();
    assert!((share - 100.0).abs() < 1e-9);
    let counted: i64 = report.fraud_types.iter().map(|t| t.count).sum();
    assert_eq!(counted, 1_845);
}
