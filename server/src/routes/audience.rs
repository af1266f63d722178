//! Audience routes.

use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::Json;
use dto::DateRange;
use dto::analytics::{AudienceOverview, DemographicsData, SegmentData, UserBehaviorData};

use crate::providers;
use crate::range;

/// `GET /api/audience` — engagement and session-quality feeds side by side.
pub async fn overview(Query(range): Query<DateRange>) -> Result<Json<AudienceOverview>, StatusCode> {
    range::validate(&range)?;
    Ok(Json(providers::analytics::audience_overview()))
}

/// `GET /api/audience/demographics` — age and gender splits.
pub async fn demographics(Query(range): Query<DateRange>) -> Result<Json<DemographicsData>, StatusCode> {
    range::validate(&range)?;
    Ok(Json(providers::analytics::demographics()))
}

/// `GET /api/audience/segments` — named segments with their key metric.
pub async fn segments(Query(range): Query<DateRange>) -> Result<Json<Vec<SegmentData>>, StatusCode> {
    range::validate(&range)?;
    Ok(Json(providers::analytics::segments()))
}

/// `GET /api/audience/behavior` — page engagement and frustration signals.
pub async fn behavior(Query(range): Query<DateRange>) -> Result<Json<UserBehaviorData>, StatusCode> {
    range::validate(&range)?;
    Ok(Json(providers::analytics::behavior()))
}
