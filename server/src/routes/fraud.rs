//! Click-fraud routes.

use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::Json;
use dto::DateRange;
use dto::fraud::{BlockedIpsData, FraudOverview, FraudReport, InvalidClicksData, SavingsData};
use serde::Deserialize;

use crate::providers::fraud as feed;
use crate::range;

/// Query shape of the invalid-clicks listing: date bounds plus paging.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvalidClicksQuery {
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub limit: Option<u32>,
}

impl InvalidClicksQuery {
    fn range(&self) -> DateRange {
        DateRange { start_date: self.start_date.clone(), end_date: self.end_date.clone() }
    }
}

/// `GET /api/fraud` — headline numbers.
pub async fn overview(Query(range): Query<DateRange>) -> Result<Json<FraudOverview>, StatusCode> {
    range::validate(&range)?;
    Ok(Json(feed::overview()))
}

/// `GET /api/fraud/invalid-clicks` — paginated offender listing.
pub async fn invalid_clicks(
    Query(query): Query<InvalidClicksQuery>,
) -> Result<Json<InvalidClicksData>, StatusCode> {
    range::validate(&query.range())?;
    Ok(Json(feed::invalid_clicks(query.page, query.limit)))
}

/// `GET /api/fraud/blocked-ips`.
pub async fn blocked_ips() -> Json<BlockedIpsData> {
    Json(feed::blocked_ips())
}

/// `GET /api/fraud/savings` — prevented spend.
pub async fn savings(Query(range): Query<DateRange>) -> Result<Json<SavingsData>, StatusCode> {
    range::validate(&range)?;
    Ok(Json(feed::savings()))
}

/// `GET /api/fraud/report` — detailed report.
pub async fn report(Query(range): Query<DateRange>) -> Result<Json<FraudReport>, StatusCode> {
    range::validate(&range)?;
    Ok(Json(feed::report()))
}
