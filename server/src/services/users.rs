//! User account queries.
//!
//! The password hash lives in its own column and is only ever selected by
//! the login path and the current-password check; every listing query maps
//! rows through [`UserRecord`], which has no hash field.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use dto::users::{NewUser, Role, UserRecord, UserUpdate};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

const RECORD_COLUMNS: &str = "id, name, email, role, phone, department, avatar, active, \
     to_char(last_login, 'YYYY-MM-DD HH24:MI') AS last_login, \
     to_char(created_at, 'YYYY-MM-DD HH24:MI') AS created_at";

/// Parse a stored role tag; unknown tags degrade to the least-privileged role.
pub(crate) fn role_from_str(raw: &str) -> Role {
    match raw {
        "admin" => Role::Admin,
        "manager" => Role::Manager,
        _ => Role::Viewer,
    }
}

fn row_to_record(row: &PgRow) -> UserRecord {
    let role: String = row.get("role");
    UserRecord {
        id: row.get("id"),
        name: row.get("name"),
        email: row.get("email"),
        role: role_from_str(&role),
        phone: row.get("phone"),
        department: row.get("department"),
        avatar: row.get("avatar"),
        active: row.get("active"),
        last_login: row.get("last_login"),
        created_at: row.get("created_at"),
    }
}

/// All users, newest first.
pub async fn list(pool: &PgPool) -> Result<Vec<UserRecord>, sqlx::Error> {
    let rows = sqlx::query(&format!("SELECT {RECORD_COLUMNS} FROM users ORDER BY created_at DESC"))
        .fetch_all(pool)
        .await?;
    Ok(rows.iter().map(row_to_record).collect())
}

/// One user by id.
pub async fn find(pool: &PgPool, id: Uuid) -> Result<Option<UserRecord>, sqlx::Error> {
    let row = sqlx::query(&format!("SELECT {RECORD_COLUMNS} FROM users WHERE id = $1"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row.as_ref().map(row_to_record))
}

/// A login candidate: the record plus its stored hash.
pub struct LoginCandidate {
    pub record: UserRecord,
    pub password_hash: String,
}

/// Exact-email lookup for the login path.
pub async fn find_for_login(pool: &PgPool, email: &str) -> Result<Option<LoginCandidate>, sqlx::Error> {
    let row = sqlx::query(&format!(
        "SELECT {RECORD_COLUMNS}, password_hash FROM users WHERE email = $1"
    ))
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|row| LoginCandidate {
        record: row_to_record(&row),
        password_hash: row.get("password_hash"),
    }))
}

/// Whether an email is already registered.
pub async fn email_exists(pool: &PgPool, email: &str) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM users WHERE email = $1)")
        .bind(email)
        .fetch_one(pool)
        .await
}

/// Insert a new account with a pre-hashed password.
pub async fn create(pool: &PgPool, user: &NewUser, password_hash: &str) -> Result<UserRecord, sqlx::Error> {
    let role = user.role.unwrap_or_default();
    let row = sqlx::query(&format!(
        "INSERT INTO users (name, email, password_hash, role, phone, department)
         VALUES ($1, $2, $3, $4, $5, $6)
         RETURNING {RECORD_COLUMNS}"
    ))
    .bind(&user.name)
    .bind(&user.email)
    .bind(password_hash)
    .bind(role.as_str())
    .bind(&user.phone)
    .bind(&user.department)
    .fetch_one(pool)
    .await?;

    Ok(row_to_record(&row))
}

/// Partial update; unset fields keep their stored value.
pub async fn update(pool: &PgPool, id: Uuid, update: &UserUpdate) -> Result<Option<UserRecord>, sqlx::Error> {
    let row = sqlx::query(&format!(
        "UPDATE users SET
             name = COALESCE($2, name),
             email = COALESCE($3, email),
             role = COALESCE($4, role),
             phone = COALESCE($5, phone),
             department = COALESCE($6, department),
             avatar = COALESCE($7, avatar),
             active = COALESCE($8, active),
             updated_at = now()
         WHERE id = $1
         RETURNING {RECORD_COLUMNS}"
    ))
    .bind(id)
    .bind(&update.name)
    .bind(&update.email)
    .bind(update.role.map(Role::as_str))
    .bind(&update.phone)
    .bind(&update.department)
    .bind(&update.avatar)
    .bind(update.active)
    .fetch_optional(pool)
    .await?;

    Ok(row.as_ref().map(row_to_record))
}

/// Stored hash for the current-password check.
pub async fn password_hash_of(pool: &PgPool, id: Uuid) -> Result<Option<String>, sqlx::Error> {
    sqlx::query_scalar("SELECT password_hash FROM users WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Replace the stored hash. Returns false when the user does not exist.
pub async fn set_password(pool: &PgPool, id: Uuid, password_hash: &str) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("UPDATE users SET password_hash = $2, updated_at = now() WHERE id = $1")
        .bind(id)
        .bind(password_hash)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Delete an account. Returns false when the user does not exist.
pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Stamp a successful login, returning the formatted timestamp.
pub async fn touch_last_login(pool: &PgPool, id: Uuid) -> Result<Option<String>, sqlx::Error> {
    sqlx::query_scalar(
        "UPDATE users SET last_login = now() WHERE id = $1
         RETURNING to_char(last_login, 'YYYY-MM-DD HH24:MI')",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}
