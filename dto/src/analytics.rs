//! Site analytics and audience payloads.

use serde::{Deserialize, Serialize};

/// Aggregated landing-page KPIs served by `GET /api/overview`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewData {
    pub total_sales: i64,
    pub revenue: f64,
    pub roas: f64,
    pub ad_spend: f64,
    pub conversions: i64,
    pub ctr: f64,
    pub cpc: f64,
    pub invalid_clicks: i64,
    pub money_saved: f64,
    pub last_updated: String,
}

/// Core site metrics for the selected window.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsData {
    pub users: i64,
    pub sessions: i64,
    pub page_views: i64,
    pub bounce_rate: f64,
    pub avg_session_duration: i64,
    pub conversions: i64,
    pub conversion_rate: f64,
}

/// A currently-popular page in the realtime feed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagePopularity {
    pub path: String,
    pub users: i64,
}

/// Live visitor snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RealtimeData {
    pub active_users: i64,
    pub page_views: i64,
    pub top_pages: Vec<PagePopularity>,
}

/// One acquisition channel row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrafficSource {
    pub source: String,
    pub users: i64,
    pub sessions: i64,
    pub conversions: i64,
}

/// Conversions for a single day.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyConversions {
    pub date: String,
    pub conversions: i64,
}

/// Conversion totals plus the daily series.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionData {
    pub total: i64,
    pub value: f64,
    pub rate: f64,
    pub by_day: Vec<DailyConversions>,
}

/// Device-category share of users.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeviceData {
    pub device: String,
    pub users: i64,
    pub percentage: f64,
}

/// Engagement block of the audience overview.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngagementStats {
    pub new_users: i64,
    pub returning_users: i64,
    pub avg_engagement_time: i64,
    pub engaged_sessions: i64,
}

/// Session-quality block of the audience overview (scroll depth, rage and
/// dead clicks, quickbacks).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionQualityStats {
    pub total_sessions: i64,
    pub avg_session_duration: i64,
    pub scroll_depth: f64,
    pub rage_clicks: i64,
    pub dead_clicks: i64,
    pub quickbacks: i64,
}

/// `GET /api/audience` response: the two upstream audience feeds side by side.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AudienceOverview {
    pub engagement: EngagementStats,
    pub quality: SessionQualityStats,
}

/// Share of users within an age band.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AgeBand {
    pub range: String,
    pub percentage: f64,
}

/// Share of users for a gender bucket.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenderSplit {
    #[serde(rename = "type")]
    pub kind: String,
    pub percentage: f64,
}

/// Audience demographics breakdowns.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DemographicsData {
    pub age: Vec<AgeBand>,
    pub gender: Vec<GenderSplit>,
}

/// One named audience segment with its strongest metric.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentData {
    pub name: String,
    pub users: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revenue: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub potential_revenue: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversion_rate: Option<f64>,
}

/// A frequently-viewed page with engagement depth.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopPage {
    pub page: String,
    pub views: i64,
    pub avg_time: i64,
    pub scroll_depth: f64,
}

/// Frustration signals (rage/dead clicks) with their hot spots.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserFrustration {
    pub rage_clicks: i64,
    pub top_rage_pages: Vec<String>,
    pub dead_clicks: i64,
    pub top_dead_areas: Vec<String>,
}

/// Aggregate scroll-depth distribution.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollBehavior {
    pub avg_scroll_depth: f64,
    pub below50percent: f64,
    pub above75percent: f64,
}

/// `GET /api/audience/behavior` response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserBehaviorData {
    pub top_pages: Vec<TopPage>,
    pub user_frustration: UserFrustration,
    pub scroll_behavior: ScrollBehavior,
}
