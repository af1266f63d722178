use super::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn demo_overview() -> OverviewData {
    build_overview(
        &performance(&meta_campaigns()),
        &performance(&google_campaigns()),
        &providers::fraud::overview(),
    )
}

#[test]
fn overview_sums_revenue_and_spend_across_platforms() {
    let overview = demo_overview();
    assert!(close(overview.revenue, 697_847.0));
    assert!(close(overview.ad_spend, 203_700.0));
}

#[test]
fn overview_roas_is_revenue_over_spend() {
    let overview = demo_overview();
    assert!(close(overview.roas, 3.43));
}

#[test]
fn overview_counts_every_conversion_as_a_sale() {
    let overview = demo_overview();
    assert_eq!(overview.conversions, 612);
    assert_eq!(overview.total_sales, overview.conversions);
}

#[test]
fn overview_click_rates_are_volume_weighted() {
    let overview = demo_overview();
    // 84,000 clicks over 2,995,000 impressions.
    assert!(close(overview.ctr, 2.8));
    // 203,700 spend over 84,000 clicks is ~2.425; allow the rounding step
    // to land on either side of the half-cent.
    assert!((overview.cpc - 2.425).abs() < 0.006);
}

#[test]
fn overview_carries_the_fraud_numbers_through() {
    let overview = demo_overview();
    assert_eq!(overview.invalid_clicks, 1_845);
    assert!(close(overview.money_saved, 18_450.0));
}

#[test]
fn zeroed_feeds_produce_a_zero_overview_without_dividing_by_zero() {
    let empty = PerformanceMetrics {
        total_spend: 0.0,
        total_impressions: 0,
        total_clicks: 0,
        total_conversions: 0,
        total_revenue: 0.0,
        ctr: 0.0,
        cpc: 0.0,
        roas: 0.0,
        cpa: 0.0,
    };
    let fraud = FraudOverview {
        total_clicks: 0,
        invalid_clicks: 0,
        invalid_percentage: 0.0,
        blocked_ips: 0,
        money_saved: 0.0,
        fraud_score: "Low".to_owned(),
        last_updated: String::new(),
    };
    let overview = build_overview(&empty, &empty, &fraud);
    assert!(close(overview.roas, 0.0));
    assert!(close(overview.ctr, 0.0));
    assert!(close(overview.cpc, 0.0));
}
