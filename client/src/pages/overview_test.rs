use super::*;
use dto::campaigns::Campaign;

fn campaign(name: &str, platform: &str, spend: f64, roas: f64) -> Campaign {
    Campaign {
        id: name.to_owned(),
        name: name.to_owned(),
        status: "active".to_owned(),
        platform: platform.to_owned(),
        budget: 0.0,
        spend,
        impressions: 0,
        clicks: 0,
        ctr: 0.0,
        cpc: 0.0,
        conversions: 0,
        revenue: spend * roas,
        roas,
    }
}

fn sample_data() -> CampaignsData {
    CampaignsData {
        meta: vec![campaign("Stories", "meta", 28_000.0, 3.32), campaign("Retargeting", "meta", 18_500.0, 3.89)],
        google: vec![campaign("Shopping", "google", 31_200.0, 6.01), campaign("Search", "google", 35_200.0, 4.05)],
        total: 4,
    }
}

#[test]
fn top_campaigns_sort_across_both_platforms() {
    let rows = top_campaigns_by_roas(&sample_data(), 4);
    let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["Shopping", "Search", "Retargeting", "Stories"]);
}

#[test]
fn top_campaigns_truncate_to_the_requested_count() {
    let rows = top_campaigns_by_roas(&sample_data(), 2);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].name, "Shopping");
    assert_eq!(rows[1].name, "Search");
}

#[test]
fn top_campaigns_of_empty_data_is_empty() {
    let empty = CampaignsData { meta: vec![], google: vec![], total: 0 };
    assert!(top_campaigns_by_roas(&empty, 4).is_empty());
}

#[test]
fn platform_spend_sums_each_side() {
    let spend = platform_spend(&sample_data());
    assert_eq!(spend[0].0, "Meta Ads");
    assert!((spend[0].1 - 46_500.0).abs() < 1e-9);
    assert_eq!(spend[1].0, "Google Ads");
    assert!((spend[1].1 - 66_400.0).abs() < 1e-9);
}

#[test]
fn city_sales_ranks_by_revenue_and_truncates() {
    let cities = vec![
        dto::geo::CityData { name: "Multan".to_owned(), users: 580, sales: 38, revenue: 19_000.0 },
        dto::geo::CityData { name: "Karachi".to_owned(), users: 3_200, sales: 245, revenue: 125_000.0 },
        dto::geo::CityData { name: "Lahore".to_owned(), users: 2_800, sales: 198, revenue: 98_000.0 },
    ];
    let ranked = city_sales(cities, 2);
    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0].0, "Karachi");
    assert_eq!(ranked[1].0, "Lahore");
}

#[test]
fn demo_defaults_match_the_bundled_dataset_shape() {
    assert_eq!(default_top_campaigns().len(), 4);
    assert_eq!(default_platform_spend().len(), 2);
    assert_eq!(default_city_sales().len(), 5);
    let overview = default_overview();
    assert!((overview.revenue - 742_000.0).abs() < 1e-9);
    assert_eq!(overview.invalid_clicks, 1_845);
}
