//! Geo distribution routes.

use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::Json;
use dto::DateRange;
use dto::geo::{CityData, GeoOverview, RegionData, TierData};

use crate::providers::geo as feed;
use crate::range;

/// `GET /api/geo` — country-level rollup.
pub async fn overview(Query(range): Query<DateRange>) -> Result<Json<GeoOverview>, StatusCode> {
    range::validate(&range)?;
    Ok(Json(feed::overview()))
}

/// `GET /api/geo/cities` — per-city rows.
pub async fn cities(Query(range): Query<DateRange>) -> Result<Json<Vec<CityData>>, StatusCode> {
    range::validate(&range)?;
    Ok(Json(feed::cities()))
}

/// `GET /api/geo/tiers` — the city-tier classification.
pub async fn tiers(Query(range): Query<DateRange>) -> Result<Json<TierData>, StatusCode> {
    range::validate(&range)?;
    Ok(Json(feed::tiers()))
}

/// `GET /api/geo/regions` — per-region rows.
pub async fn regions(Query(range): Query<DateRange>) -> Result<Json<Vec<RegionData>>, StatusCode> {
    range::validate(&range)?;
    Ok(Json(feed::regions()))
}
