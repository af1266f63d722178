//! Login route.
//!
//! DESIGN
//! ======
//! Login is the only authentication exchange: the server verifies the
//! credential and returns the session-shaped user document, and the client
//! alone records "logged in" durably. There is no token, expiry or
//! revocation, so every response here is a complete statement of the
//! outcome.

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use dto::users::{LoginRequest, LoginResponse, SessionUser};

use crate::services::{password, users as users_svc};
use crate::state::AppState;

/// Generic rejection for unknown email or wrong password; deliberately does
/// not reveal which of the two failed.
pub(crate) const BAD_CREDENTIALS: &str = "Invalid email or password";
pub(crate) const ACCOUNT_DEACTIVATED: &str = "Account is deactivated";

pub(crate) fn success_body(user: SessionUser) -> LoginResponse {
    LoginResponse { success: true, user: Some(user), error: None }
}

pub(crate) fn failure_body(message: &str) -> LoginResponse {
    LoginResponse { success: false, user: None, error: Some(message.to_owned()) }
}

/// `POST /api/users/login` — verify credentials, stamp the login, return the
/// session-shaped user document.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> (StatusCode, Json<LoginResponse>) {
    let candidate = match users_svc::find_for_login(&state.pool, &body.email).await {
        Ok(candidate) => candidate,
        Err(e) => {
            tracing::error!(error = %e, "login lookup failed");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(failure_body("Login is temporarily unavailable")),
            );
        }
    };

    let Some(candidate) = candidate else {
        return (StatusCode::UNAUTHORIZED, Json(failure_body(BAD_CREDENTIALS)));
    };

    if !candidate.record.active {
        return (StatusCode::UNAUTHORIZED, Json(failure_body(ACCOUNT_DEACTIVATED)));
    }

    if !password::verify_password(&body.password, &candidate.password_hash) {
        return (StatusCode::UNAUTHORIZED, Json(failure_body(BAD_CREDENTIALS)));
    }

    let mut user = candidate.record.session_user();
    match users_svc::touch_last_login(&state.pool, user.id).await {
        Ok(stamp) => user.last_login = stamp,
        // A failed stamp does not block the login itself.
        Err(e) => tracing::warn!(error = %e, "last-login stamp failed"),
    }

    tracing::info!(email = %user.email, "login succeeded");
    (StatusCode::OK, Json(success_body(user)))
}
