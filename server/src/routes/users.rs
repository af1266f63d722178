//! User management routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use dto::Ack;
use dto::users::{NewUser, PasswordChange, UserMutation, UserRecord, UserUpdate};
use uuid::Uuid;

use crate::services::{password, users as users_svc};
use crate::state::AppState;

type ErrorBody = (StatusCode, Json<serde_json::Value>);

fn error_body(status: StatusCode, message: &str) -> ErrorBody {
    (status, Json(serde_json::json!({ "error": message })))
}

fn internal(context: &str, e: &sqlx::Error) -> ErrorBody {
    tracing::error!(error = %e, "{context}");
    error_body(StatusCode::INTERNAL_SERVER_ERROR, "Database error")
}

/// `GET /api/users` — all accounts, newest first, hash never included.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<UserRecord>>, ErrorBody> {
    users_svc::list(&state.pool)
        .await
        .map(Json)
        .map_err(|e| internal("user list failed", &e))
}

/// `GET /api/users/{id}`.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<UserRecord>, ErrorBody> {
    users_svc::find(&state.pool, id)
        .await
        .map_err(|e| internal("user fetch failed", &e))?
        .map(Json)
        .ok_or_else(|| error_body(StatusCode::NOT_FOUND, "User not found"))
}

/// `POST /api/users` — create an account with a hashed password.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<NewUser>,
) -> Result<(StatusCode, Json<UserMutation>), ErrorBody> {
    password::validate_new_password(&body.password)
        .map_err(|message| error_body(StatusCode::BAD_REQUEST, message))?;

    let exists = users_svc::email_exists(&state.pool, &body.email)
        .await
        .map_err(|e| internal("email check failed", &e))?;
    if exists {
        return Err(error_body(StatusCode::BAD_REQUEST, "User with this email already exists"));
    }

    let hash = password::hash_password(&body.password)
        .map_err(|_| error_body(StatusCode::INTERNAL_SERVER_ERROR, "Password hashing failed"))?;

    let user = users_svc::create(&state.pool, &body, &hash)
        .await
        .map_err(|e| internal("user create failed", &e))?;

    tracing::info!(email = %user.email, "user created");
    Ok((
        StatusCode::CREATED,
        Json(UserMutation {
            success: true,
            message: "User created successfully".to_owned(),
            user: Some(user),
        }),
    ))
}

/// `PUT /api/users/{id}` — partial update.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UserUpdate>,
) -> Result<Json<UserMutation>, ErrorBody> {
    let updated = users_svc::update(&state.pool, id, &body)
        .await
        .map_err(|e| internal("user update failed", &e))?
        .ok_or_else(|| error_body(StatusCode::NOT_FOUND, "User not found"))?;

    Ok(Json(UserMutation {
        success: true,
        message: "User updated successfully".to_owned(),
        user: Some(updated),
    }))
}

/// `PUT /api/users/{id}/password` — change a password, checking the current
/// one when the caller supplies it.
pub async fn change_password(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<PasswordChange>,
) -> Result<Json<Ack>, ErrorBody> {
    password::validate_new_password(&body.new_password)
        .map_err(|message| error_body(StatusCode::BAD_REQUEST, message))?;

    let stored = users_svc::password_hash_of(&state.pool, id)
        .await
        .map_err(|e| internal("password fetch failed", &e))?
        .ok_or_else(|| error_body(StatusCode::NOT_FOUND, "User not found"))?;

    // An admin reset omits the current password; a self-service change
    // must prove knowledge of it.
    if let Some(current) = &body.current_password {
        if !password::verify_password(current, &stored) {
            return Err(error_body(StatusCode::BAD_REQUEST, "Current password is incorrect"));
        }
    }

    let hash = password::hash_password(&body.new_password)
        .map_err(|_| error_body(StatusCode::INTERNAL_SERVER_ERROR, "Password hashing failed"))?;

    let updated = users_svc::set_password(&state.pool, id, &hash)
        .await
        .map_err(|e| internal("password update failed", &e))?;
    if !updated {
        return Err(error_body(StatusCode::NOT_FOUND, "User not found"));
    }

    Ok(Json(Ack::ok("Password updated successfully")))
}

/// `DELETE /api/users/{id}`.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Ack>, ErrorBody> {
    let deleted = users_svc::delete(&state.pool, id)
        .await
        .map_err(|e| internal("user delete failed", &e))?;
    if !deleted {
        return Err(error_body(StatusCode::NOT_FOUND, "User not found"));
    }

    tracing::info!(%id, "user deleted");
    Ok(Json(Ack::ok("User deleted successfully")))
}
