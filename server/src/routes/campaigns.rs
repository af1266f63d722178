//! Campaign routes.

use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::Json;
use dto::DateRange;
use dto::campaigns::{Campaign, CampaignsData, PerformanceComparison};

use crate::providers::campaigns as feed;
use crate::range;

/// `GET /api/campaigns` — both platforms plus the combined count.
pub async fn list_all(Query(range): Query<DateRange>) -> Result<Json<CampaignsData>, StatusCode> {
    range::validate(&range)?;
    Ok(Json(feed::all_campaigns()))
}

/// `GET /api/campaigns/meta`.
pub async fn list_meta(Query(range): Query<DateRange>) -> Result<Json<Vec<Campaign>>, StatusCode> {
    range::validate(&range)?;
    Ok(Json(feed::meta_campaigns()))
}

/// `GET /api/campaigns/google`.
pub async fn list_google(Query(range): Query<DateRange>) -> Result<Json<Vec<Campaign>>, StatusCode> {
    range::validate(&range)?;
    Ok(Json(feed::google_campaigns()))
}

/// `GET /api/campaigns/performance/compare` — head-to-head rollups.
pub async fn compare(Query(range): Query<DateRange>) -> Result<Json<PerformanceComparison>, StatusCode> {
    range::validate(&range)?;
    Ok(Json(feed::compare()))
}
