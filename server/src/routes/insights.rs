//! Insight feed routes.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use dto::insights::Insight;
use serde::Deserialize;

use crate::services::insights as insights_svc;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub limit: Option<i64>,
}

fn db_error(context: &str, e: &sqlx::Error) -> StatusCode {
    tracing::error!(error = %e, "{context}");
    StatusCode::INTERNAL_SERVER_ERROR
}

/// `GET /api/insights` — newest insights of any kind.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Insight>>, StatusCode> {
    let limit = query.limit.unwrap_or(insights_svc::DEFAULT_LIST_LIMIT);
    insights_svc::list(&state.pool, limit)
        .await
        .map(Json)
        .map_err(|e| db_error("insight list failed", &e))
}

/// `GET /api/insights/recommendations` — most urgent first.
pub async fn recommendations(State(state): State<AppState>) -> Result<Json<Vec<Insight>>, StatusCode> {
    insights_svc::recommendations(&state.pool)
        .await
        .map(Json)
        .map_err(|e| db_error("recommendation list failed", &e))
}

/// `GET /api/insights/alerts` — active alerts.
pub async fn alerts(State(state): State<AppState>) -> Result<Json<Vec<Insight>>, StatusCode> {
    insights_svc::alerts(&state.pool)
        .await
        .map(Json)
        .map_err(|e| db_error("alert list failed", &e))
}

/// `GET /api/insights/forecast` — latest forecast or JSON null.
pub async fn forecast(State(state): State<AppState>) -> Result<Json<Option<Insight>>, StatusCode> {
    insights_svc::latest_forecast(&state.pool)
        .await
        .map(Json)
        .map_err(|e| db_error("forecast fetch failed", &e))
}
