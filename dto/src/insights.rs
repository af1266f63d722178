//! Insight feed payloads (recommendations, alerts, forecasts).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Category of an insight row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    Recommendation,
    Alert,
    Forecast,
}

impl InsightKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Recommendation => "recommendation",
            Self::Alert => "alert",
            Self::Forecast => "forecast",
        }
    }
}

/// One stored insight. `data` is a free-form document whose shape depends on
/// `kind` (e.g. forecast details).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insight {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub kind: InsightKind,
    pub title: String,
    pub description: String,
    pub priority: String,
    pub status: String,
    pub category: String,
    pub platform: String,
    #[serde(default)]
    pub data: serde_json::Value,
    pub created_at: String,
}

/// Typed view of a forecast insight's `data` document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastDetails {
    pub predicted_sales: i64,
    pub predicted_revenue: f64,
    pub confidence: f64,
    pub factors: Vec<String>,
}
