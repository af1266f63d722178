//! Site analytics routes plus the aggregated landing overview.

#[cfg(test)]
#[path = "analytics_test.rs"]
mod tests;

use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::Json;
use dto::DateRange;
use dto::analytics::{AnalyticsData, ConversionData, DeviceData, OverviewData, RealtimeData, TrafficSource};
use dto::campaigns::PerformanceMetrics;
use dto::fraud::FraudOverview;

use crate::providers;
use crate::providers::campaigns::{google_campaigns, meta_campaigns, performance, round2};
use crate::range;

/// Fold the campaign rollups and the fraud feed into the landing-page KPI
/// document.
pub(crate) fn build_overview(
    meta: &PerformanceMetrics,
    google: &PerformanceMetrics,
    fraud: &FraudOverview,
) -> OverviewData {
    let revenue = meta.total_revenue + google.total_revenue;
    let ad_spend = meta.total_spend + google.total_spend;
    let conversions = meta.total_conversions + google.total_conversions;
    let clicks = meta.total_clicks + google.total_clicks;
    let impressions = meta.total_impressions + google.total_impressions;

    OverviewData {
        total_sales: conversions,
        revenue: round2(revenue),
        roas: round2(if ad_spend == 0.0 { 0.0 } else { revenue / ad_spend }),
        ad_spend: round2(ad_spend),
        conversions,
        ctr: round2(if impressions == 0 { 0.0 } else { clicks as f64 / impressions as f64 * 100.0 }),
        cpc: round2(if clicks == 0 { 0.0 } else { ad_spend / clicks as f64 }),
        invalid_clicks: fraud.invalid_clicks,
        money_saved: fraud.money_saved,
        last_updated: providers::today_iso(),
    }
}

/// `GET /api/overview` — aggregated KPIs across every feed.
pub async fn overview(Query(range): Query<DateRange>) -> Result<Json<OverviewData>, StatusCode> {
    range::validate(&range)?;
    let meta = performance(&meta_campaigns());
    let google = performance(&google_campaigns());
    let fraud = providers::fraud::overview();
    Ok(Json(build_overview(&meta, &google, &fraud)))
}

/// `GET /api/analytics` — core site metrics.
pub async fn site_overview(Query(range): Query<DateRange>) -> Result<Json<AnalyticsData>, StatusCode> {
    range::validate(&range)?;
    Ok(Json(providers::analytics::overview_metrics()))
}

/// `GET /api/analytics/realtime` — live visitor snapshot.
pub async fn realtime() -> Json<RealtimeData> {
    Json(providers::analytics::realtime())
}

/// `GET /api/analytics/traffic` — acquisition channels.
pub async fn traffic(Query(range): Query<DateRange>) -> Result<Json<Vec<TrafficSource>>, StatusCode> {
    range::validate(&range)?;
    Ok(Json(providers::analytics::traffic_sources()))
}

/// `GET /api/analytics/conversions` — totals plus the daily series.
pub async fn conversions(Query(range): Query<DateRange>) -> Result<Json<ConversionData>, StatusCode> {
    range::validate(&range)?;
    Ok(Json(providers::analytics::conversions()))
}

/// `GET /api/analytics/devices` — device-category breakdown.
pub async fn devices(Query(range): Query<DateRange>) -> Result<Json<Vec<DeviceData>>, StatusCode> {
    range::validate(&range)?;
    Ok(Json(providers::analytics::device_breakdown()))
}
