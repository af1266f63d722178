//! Insight feed queries.

use dto::insights::{Insight, InsightKind};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

const INSIGHT_COLUMNS: &str = "id, kind, title, description, priority, status, category, platform, data, \
     to_char(created_at, 'YYYY-MM-DD HH24:MI') AS created_at";

pub const DEFAULT_LIST_LIMIT: i64 = 20;
pub const RECOMMENDATION_LIMIT: i64 = 10;

fn kind_from_str(raw: &str) -> InsightKind {
    match raw {
        "alert" => InsightKind::Alert,
        "forecast" => InsightKind::Forecast,
        _ => InsightKind::Recommendation,
    }
}

fn row_to_insight(row: &PgRow) -> Insight {
    let kind: String = row.get("kind");
    Insight {
        id: row.get("id"),
        kind: kind_from_str(&kind),
        title: row.get("title"),
        description: row.get("description"),
        priority: row.get("priority"),
        status: row.get("status"),
        category: row.get("category"),
        platform: row.get("platform"),
        data: row.get("data"),
        created_at: row.get("created_at"),
    }
}

/// Newest insights of any kind.
pub async fn list(pool: &PgPool, limit: i64) -> Result<Vec<Insight>, sqlx::Error> {
    let rows = sqlx::query(&format!(
        "SELECT {INSIGHT_COLUMNS} FROM insights ORDER BY created_at DESC LIMIT $1"
    ))
    .bind(limit.clamp(1, 100))
    .fetch_all(pool)
    .await?;
    Ok(rows.iter().map(row_to_insight).collect())
}

/// Optimization recommendations, most urgent first.
pub async fn recommendations(pool: &PgPool) -> Result<Vec<Insight>, sqlx::Error> {
    let rows = sqlx::query(&format!(
        "SELECT {INSIGHT_COLUMNS} FROM insights
         WHERE kind = 'recommendation'
         ORDER BY CASE priority WHEN 'high' THEN 0 WHEN 'medium' THEN 1 ELSE 2 END,
                  created_at DESC
         LIMIT $1"
    ))
    .bind(RECOMMENDATION_LIMIT)
    .fetch_all(pool)
    .await?;
    Ok(rows.iter().map(row_to_insight).collect())
}

/// Active alerts, newest first.
pub async fn alerts(pool: &PgPool) -> Result<Vec<Insight>, sqlx::Error> {
    let rows = sqlx::query(&format!(
        "SELECT {INSIGHT_COLUMNS} FROM insights
         WHERE kind = 'alert' AND status = 'active'
         ORDER BY created_at DESC"
    ))
    .fetch_all(pool)
    .await?;
    Ok(rows.iter().map(row_to_insight).collect())
}

/// The latest demand forecast, if one has been produced.
pub async fn latest_forecast(pool: &PgPool) -> Result<Option<Insight>, sqlx::Error> {
    let row = sqlx::query(&format!(
        "SELECT {INSIGHT_COLUMNS} FROM insights
         WHERE kind = 'forecast'
         ORDER BY created_at DESC
         LIMIT 1"
    ))
    .fetch_optional(pool)
    .await?;
    Ok(row.as_ref().map(row_to_insight))
}
