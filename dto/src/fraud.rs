//! Click-fraud monitoring payloads.

use serde::{Deserialize, Serialize};

/// `GET /api/fraud` headline numbers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FraudOverview {
    pub total_clicks: i64,
    pub invalid_clicks: i64,
    pub invalid_percentage: f64,
    #[serde(rename = "blockedIPs")]
    pub blocked_ips: i64,
    pub money_saved: f64,
    pub fraud_score: String,
    pub last_updated: String,
}

/// One offending source address and why it was flagged.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvalidClickRecord {
    pub ip: String,
    pub clicks: i64,
    pub reason: String,
    pub platform: String,
    pub blocked: bool,
}

/// Paginated invalid-click listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvalidClicksData {
    pub total: i64,
    pub page: u32,
    pub limit: u32,
    pub data: Vec<InvalidClickRecord>,
}

/// Blocked-IP count for one origin country.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryCount {
    pub country: String,
    pub count: i64,
}

/// `GET /api/fraud/blocked-ips` response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockedIpsData {
    pub total: i64,
    pub active_blocks: i64,
    pub expired_blocks: i64,
    pub top_countries: Vec<CountryCount>,
}

/// Prevented spend attributed to one ad platform.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformSavings {
    pub platform: String,
    pub saved: f64,
    pub invalid_clicks: i64,
}

/// Prevented spend for one month of the trend series.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MonthlySavings {
    pub month: String,
    pub saved: f64,
}

/// `GET /api/fraud/savings` response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsData {
    pub total_saved: f64,
    pub currency: String,
    pub by_platform: Vec<PlatformSavings>,
    pub monthly_trend: Vec<MonthlySavings>,
}

/// Headline block of the detailed fraud report.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FraudSummary {
    pub total_clicks: i64,
    pub invalid_clicks: i64,
    pub blocked_clicks: i64,
    pub money_saved: f64,
}

/// One fraud category with its share of invalid traffic.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FraudType {
    #[serde(rename = "type")]
    pub kind: String,
    pub count: i64,
    pub percentage: f64,
}

/// `GET /api/fraud/report` response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FraudReport {
    pub summary: FraudSummary,
    pub fraud_types: Vec<FraudType>,
    pub recommendations: Vec<String>,
}
