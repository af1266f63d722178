use super::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn demo_sets_have_stable_platform_tags() {
    assert!(meta_campaigns().iter().all(|c| c.platform == "meta"));
    assert!(google_campaigns().iter().all(|c| c.platform == "google"));
}

#[test]
fn all_campaigns_counts_both_platforms() {
    let data = all_campaigns();
    assert_eq!(data.meta.len(), 3);
    assert_eq!(data.google.len(), 3);
    assert_eq!(data.total, 6);
}

#[test]
fn campaign_derived_fields_are_consistent() {
    let campaigns = google_campaigns();
    let brand = &campaigns[0];
    assert_eq!(brand.name, "Search - Brand Keywords");
    // revenue = spend * roas, ctr = clicks / impressions, cpc = spend / clicks.
    assert!(close(brand.revenue, 142_560.0));
    assert!(close(brand.ctr, 2.92));
    assert!(close(brand.cpc, 2.84));
}

#[test]
fn performance_rolls_up_meta_totals() {
    let perf = performance(&meta_campaigns());
    assert!(close(perf.total_spend, 89_000.0));
    assert_eq!(perf.total_impressions, 1_370_000);
    assert_eq!(perf.total_clicks, 46_600);
    assert_eq!(perf.total_conversions, 296);
    assert!(close(perf.total_revenue, 271_175.0));
    assert!(close(perf.ctr, 3.4));
    assert!(close(perf.cpc, 1.91));
    assert!(close(perf.roas, 3.05));
    assert!(close(perf.cpa, 300.68));
}

#[test]
fn performance_rolls_up_google_totals() {
    let perf = performance(&google_campaigns());
    assert!(close(perf.total_spend, 114_700.0));
    assert_eq!(perf.total_clicks, 37_400);
    assert_eq!(perf.total_conversions, 316);
    assert!(close(perf.total_revenue, 426_672.0));
    assert!(close(perf.roas, 3.72));
}

#[test]
fn performance_of_empty_list_is_all_zero() {
    let perf = performance(&[]);
    assert!(close(perf.total_spend, 0.0));
    assert!(close(perf.ctr, 0.0));
    assert!(close(perf.cpc, 0.0));
    assert!(close(perf.roas, 0.0));
    assert!(close(perf.cpa, 0.0));
}

#[test]
fn compare_picks_expected_winners() {
    let comparison = compare();
    // Google converts spend better, Meta gets cheaper and denser clicks.
    assert_eq!(comparison.comparison.better_roas, "google");
    assert_eq!(comparison.comparison.better_ctr, "meta");
    assert_eq!(comparison.comparison.lower_cpc, "meta");
}

#[test]
fn round2_truncates_to_cents() {
    assert!(close(round2(3.04691), 3.05));
    assert!(close(round2(2.0), 2.0));
    assert!(close(round2(1.014), 1.01));
    assert!(close(round2(1.016), 1.02));
}
