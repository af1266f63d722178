//! Ad-platform campaign feed (Meta + Google).

#[cfg(test)]
#[path = "campaigns_test.rs"]
mod campaigns_test;

use dto::campaigns::{Campaign, CampaignsData, ComparisonVerdict, PerformanceComparison, PerformanceMetrics};

fn campaign(
    id: &str,
    name: &str,
    platform: &str,
    budget: f64,
    spend: f64,
    impressions: i64,
    clicks: i64,
    conversions: i64,
    roas: f64,
) -> Campaign {
    Campaign {
        id: id.to_owned(),
        name: name.to_owned(),
        status: "active".to_owned(),
        platform: platform.to_owned(),
        budget,
        spend,
        impressions,
        clicks,
        ctr: round2(percentage(clicks, impressions)),
        cpc: round2(spend / clicks as f64),
        conversions,
        revenue: round2(spend * roas),
        roas,
    }
}

/// Demo Meta campaign set.
#[must_use]
pub fn meta_campaigns() -> Vec<Campaign> {
    vec![
        campaign("meta-001", "Instagram Stories - Karachi", "meta", 30_000.0, 28_000.0, 520_000, 18_600, 96, 3.32),
        campaign("meta-002", "Retargeting - Cart Abandoners", "meta", 20_000.0, 18_500.0, 240_000, 11_200, 88, 3.89),
        campaign("meta-003", "Lookalike - Purchasers", "meta", 45_000.0, 42_500.0, 610_000, 16_800, 112, 2.5),
    ]
}

/// Demo Google campaign set.
#[must_use]
pub fn google_campaigns() -> Vec<Campaign> {
    vec![
        campaign("goog-001", "Search - Brand Keywords", "google", 40_000.0, 35_200.0, 425_000, 12_400, 118, 4.05),
        campaign("goog-002", "Shopping - All Products", "google", 35_000.0, 31_200.0, 310_000, 9_800, 134, 6.01),
        campaign("goog-003", "Display - Remarketing", "google", 50_000.0, 48_300.0, 890_000, 15_200, 64, 2.0),
    ]
}

/// Both platforms plus the combined count.
#[must_use]
pub fn all_campaigns() -> CampaignsData {
    let meta = meta_campaigns();
    let google = google_campaigns();
    let total = meta.len() + google.len();
    CampaignsData { meta, google, total }
}

/// Roll a campaign list up into platform-level metrics.
#[must_use]
pub fn performance(campaigns: &[Campaign]) -> PerformanceMetrics {
    let total_spend: f64 = campaigns.iter().map(|c| c.spend).sum();
    let total_impressions: i64 = campaigns.iter().map(|c| c.impressions).sum();
    let total_clicks: i64 = campaigns.iter().map(|c| c.clicks).sum();
    let total_conversions: i64 = campaigns.iter().map(|c| c.conversions).sum();
    let total_revenue: f64 = campaigns.iter().map(|c| c.revenue).sum();

    PerformanceMetrics {
        total_spend,
        total_impressions,
        total_clicks,
        total_conversions,
        total_revenue,
        ctr: round2(percentage(total_clicks, total_impressions)),
        cpc: round2(safe_div(total_spend, total_clicks as f64)),
        roas: round2(safe_div(total_revenue, total_spend)),
        cpa: round2(safe_div(total_spend, total_conversions as f64)),
    }
}

/// Head-to-head verdicts across the two platforms.
#[must_use]
pub fn compare() -> PerformanceComparison {
    let meta = performance(&meta_campaigns());
    let google = performance(&google_campaigns());

    let comparison = ComparisonVerdict {
        better_roas: higher_wins(meta.roas, google.roas),
        better_ctr: higher_wins(meta.ctr, google.ctr),
        // CPC is a cost: lower wins.
        lower_cpc: lower_wins(meta.cpc, google.cpc),
    };

    PerformanceComparison { meta, google, comparison }
}

/// Name of the platform with the higher value, meta first / google second.
fn higher_wins(meta_value: f64, google_value: f64) -> String {
    if meta_value > google_value { "meta".to_owned() } else { "google".to_owned() }
}

/// Name of the platform with the lower value, meta first / google second.
fn lower_wins(meta_value: f64, google_value: f64) -> String {
    if meta_value < google_value { "meta".to_owned() } else { "google".to_owned() }
}

fn percentage(part: i64, whole: i64) -> f64 {
    safe_div(part as f64, whole as f64) * 100.0
}

fn safe_div(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 { 0.0 } else { numerator / denominator }
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
