//! Workspace settings: a singleton JSON document with partial-merge updates.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use dto::settings::{BrandingData, ConnectionStatus, SettingsData, SettingsUpdate};
use sqlx::{PgPool, Row};

use crate::providers::today_iso;

/// The document served before anyone has saved settings.
#[must_use]
pub fn default_settings() -> SettingsData {
    SettingsData {
        branding: BrandingData {
            dashboard_name: "Bambly".to_owned(),
            tagline: "Marketing Intelligence for Pakistan E-commerce".to_owned(),
            logo_url: "/logo.svg".to_owned(),
            primary_color: "#6366f1".to_owned(),
        },
        currency: "PKR".to_owned(),
        sync_interval: 60,
        data_retention: 90,
        connections: ["googleAds", "metaAds", "analytics", "clarity", "fraudShield"]
            .into_iter()
            .map(|platform| ConnectionStatus { platform: platform.to_owned(), connected: false })
            .collect(),
        updated_at: String::new(),
    }
}

/// Merge a partial update into the stored document. Unset fields keep their
/// stored value; `updated_at` is stamped by the caller.
#[must_use]
pub fn apply_update(mut current: SettingsData, update: SettingsUpdate) -> SettingsData {
    if let Some(branding) = update.branding {
        current.branding = branding;
    }
    if let Some(currency) = update.currency {
        current.currency = currency;
    }
    if let Some(sync_interval) = update.sync_interval {
        current.sync_interval = sync_interval;
    }
    if let Some(data_retention) = update.data_retention {
        current.data_retention = data_retention;
    }
    current
}

/// The stored document, or the defaults when none has been saved yet.
pub async fn fetch(pool: &PgPool) -> Result<SettingsData, sqlx::Error> {
    let row = sqlx::query("SELECT document FROM settings WHERE id = TRUE")
        .fetch_optional(pool)
        .await?;

    let Some(row) = row else {
        return Ok(default_settings());
    };

    let document: serde_json::Value = row.get("document");
    // A document that fails to decode is replaced by defaults rather than
    // breaking every settings read.
    Ok(serde_json::from_value(document).unwrap_or_else(|_| default_settings()))
}

/// Merge `update` into the stored document and persist the result.
pub async fn update(pool: &PgPool, update: SettingsUpdate) -> Result<SettingsData, sqlx::Error> {
    let mut merged = apply_update(fetch(pool).await?, update);
    merged.updated_at = today_iso();

    let document = serde_json::to_value(&merged).unwrap_or_default();
    sqlx::query(
        "INSERT INTO settings (id, document, updated_at) VALUES (TRUE, $1, now())
         ON CONFLICT (id) DO UPDATE SET document = EXCLUDED.document, updated_at = now()",
    )
    .bind(document)
    .execute(pool)
    .await?;

    Ok(merged)
}
