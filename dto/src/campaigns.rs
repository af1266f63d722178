//! Ad-campaign payloads across the Meta and Google platforms.

use serde::{Deserialize, Serialize};

/// One campaign row as reported by an ad platform.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub id: String,
    pub name: String,
    pub status: String,
    pub platform: String,
    pub budget: f64,
    pub spend: f64,
    pub impressions: i64,
    pub clicks: i64,
    pub ctr: f64,
    pub cpc: f64,
    pub conversions: i64,
    pub revenue: f64,
    pub roas: f64,
}

/// `GET /api/campaigns` response: both platforms plus the combined count.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CampaignsData {
    pub meta: Vec<Campaign>,
    pub google: Vec<Campaign>,
    pub total: usize,
}

/// Platform-level rollup of campaign metrics.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceMetrics {
    pub total_spend: f64,
    pub total_impressions: i64,
    pub total_clicks: i64,
    pub total_conversions: i64,
    pub total_revenue: f64,
    pub ctr: f64,
    pub cpc: f64,
    pub roas: f64,
    pub cpa: f64,
}

/// Which platform wins each headline metric.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonVerdict {
    #[serde(rename = "betterROAS")]
    pub better_roas: String,
    #[serde(rename = "betterCTR")]
    pub better_ctr: String,
    #[serde(rename = "lowerCPC")]
    pub lower_cpc: String,
}

/// `GET /api/campaigns/performance/compare` response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PerformanceComparison {
    pub meta: PerformanceMetrics,
    pub google: PerformanceMetrics,
    pub comparison: ComparisonVerdict,
}
