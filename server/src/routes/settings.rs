//! Settings routes.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use dto::Ack;
use dto::settings::{BrandingData, SettingsData, SettingsUpdate};

use crate::services::settings as settings_svc;
use crate::state::AppState;

fn db_error(context: &str, e: &sqlx::Error) -> StatusCode {
    tracing::error!(error = %e, "{context}");
    StatusCode::INTERNAL_SERVER_ERROR
}

/// `GET /api/settings` — the stored document or defaults.
pub async fn get_settings(State(state): State<AppState>) -> Result<Json<SettingsData>, StatusCode> {
    settings_svc::fetch(&state.pool)
        .await
        .map(Json)
        .map_err(|e| db_error("settings fetch failed", &e))
}

/// `PUT /api/settings` — merge a partial update into the stored document.
pub async fn update_settings(
    State(state): State<AppState>,
    Json(body): Json<SettingsUpdate>,
) -> Result<Json<Ack>, StatusCode> {
    settings_svc::update(&state.pool, body)
        .await
        .map(|_| Json(Ack::ok("Settings updated successfully")))
        .map_err(|e| db_error("settings update failed", &e))
}

/// `GET /api/settings/branding` — branding subset for the sidebar.
pub async fn branding(State(state): State<AppState>) -> Result<Json<BrandingData>, StatusCode> {
    settings_svc::fetch(&state.pool)
        .await
        .map(|settings| Json(settings.branding))
        .map_err(|e| db_error("branding fetch failed", &e))
}
