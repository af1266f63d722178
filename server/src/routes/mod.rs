//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the `/api` surface to one Axum router and serves the
//! built SPA bundle as the fallback, so a single process hosts both the API
//! and the dashboard itself.

pub mod analytics;
pub mod audience;
pub mod auth;
pub mod campaigns;
pub mod fraud;
pub mod geo;
pub mod insights;
pub mod settings;
pub mod users;

use std::path::PathBuf;

use axum::Router;
use axum::response::Json;
use axum::routing::{get, post, put};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// The `/api` surface.
fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/users/login", post(auth::login))
        .route("/api/users", get(users::list).post(users::create))
        .route(
            "/api/users/{id}",
            get(users::get_by_id).put(users::update).delete(users::remove),
        )
        .route("/api/users/{id}/password", put(users::change_password))
        .route("/api/overview", get(analytics::overview))
        .route("/api/analytics", get(analytics::site_overview))
        .route("/api/analytics/realtime", get(analytics::realtime))
        .route("/api/analytics/traffic", get(analytics::traffic))
        .route("/api/analytics/conversions", get(analytics::conversions))
        .route("/api/analytics/devices", get(analytics::devices))
        .route("/api/campaigns", get(campaigns::list_all))
        .route("/api/campaigns/meta", get(campaigns::list_meta))
        .route("/api/campaigns/google", get(campaigns::list_google))
        .route("/api/campaigns/performance/compare", get(campaigns::compare))
        .route("/api/audience", get(audience::overview))
        .route("/api/audience/demographics", get(audience::demographics))
        .route("/api/audience/segments", get(audience::segments))
        .route("/api/audience/behavior", get(audience::behavior))
        .route("/api/fraud", get(fraud::overview))
        .route("/api/fraud/invalid-clicks", get(fraud::invalid_clicks))
        .route("/api/fraud/blocked-ips", get(fraud::blocked_ips))
        .route("/api/fraud/savings", get(fraud::savings))
        .route("/api/fraud/report", get(fraud::report))
        .route("/api/insights", get(insights::list))
        .route("/api/insights/recommendations", get(insights::recommendations))
        .route("/api/insights/alerts", get(insights::alerts))
        .route("/api/insights/forecast", get(insights::forecast))
        .route("/api/geo", get(geo::overview))
        .route("/api/geo/cities", get(geo::cities))
        .route("/api/geo/tiers", get(geo::tiers))
        .route("/api/geo/regions", get(geo::regions))
        .route("/api/settings", get(settings::get_settings).put(settings::update_settings))
        .route("/api/settings/branding", get(settings::branding))
        .route("/api/health", get(health))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Resolve the directory holding the built SPA bundle.
fn dist_dir() -> PathBuf {
    std::env::var("DIST_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../client/dist"))
}

/// Full application router: the API plus the SPA bundle as fallback.
pub fn app(state: AppState) -> Router {
    let spa = ServeDir::new(dist_dir()).append_index_html_on_directories(true);
    api_routes(state).fallback_service(spa)
}

async fn health() -> Json<dto::HealthStatus> {
    Json(dto::HealthStatus {
        status: "ok".to_owned(),
        message: "Bambly Dashboard API is running".to_owned(),
    })
}
