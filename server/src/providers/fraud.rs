//! Click-fraud monitoring feed.
//!
//! The invalid-click listing paginates over the demo dataset with clamped
//! `page`/`limit`, so the paging contract is real rather than echoed
//! constants.

#[cfg(test)]
#[path = "fraud_test.rs"]
mod fraud_test;

use dto::fraud::{
    BlockedIpsData, CountryCount, FraudOverview, FraudReport, FraudSummary, FraudType, InvalidClickRecord,
    InvalidClicksData, MonthlySavings, PlatformSavings, SavingsData,
};

use super::today_iso;

pub const DEFAULT_PAGE_LIMIT: u32 = 50;
pub const MAX_PAGE_LIMIT: u32 = 100;

/// Headline fraud numbers.
#[must_use]
pub fn overview() -> FraudOverview {
    FraudOverview {
        total_clicks: 23_070,
        invalid_clicks: 1_845,
        invalid_percentage: 8.0,
        blocked_ips: 342,
        money_saved: 18_450.0,
        fraud_score: "Medium".to_owned(),
        last_updated: today_iso(),
    }
}

fn record(ip: &str, clicks: i64, reason: &str, platform: &str) -> InvalidClickRecord {
    InvalidClickRecord {
        ip: ip.to_owned(),
        clicks,
        reason: reason.to_owned(),
        platform: platform.to_owned(),
        blocked: true,
    }
}

/// Full demo dataset of flagged source addresses, worst offenders first.
fn invalid_click_records() -> Vec<InvalidClickRecord> {
    vec![
        record("203.xxx.xxx.45", 45, "Bot Traffic", "google"),
        record("182.xxx.xxx.12", 32, "Click Farm", "meta"),
        record("39.xxx.xxx.78", 28, "VPN/Proxy", "google"),
        record("119.xxx.xxx.90", 25, "Repetitive Clicks", "meta"),
        record("45.xxx.xxx.23", 22, "Bot Traffic", "google"),
        record("202.xxx.xxx.67", 19, "Click Farm", "google"),
        record("110.xxx.xxx.34", 17, "VPN/Proxy", "meta"),
        record("58.xxx.xxx.81", 14, "Bot Traffic", "meta"),
        record("175.xxx.xxx.29", 12, "Repetitive Clicks", "google"),
        record("91.xxx.xxx.56", 9, "VPN/Proxy", "google"),
        record("27.xxx.xxx.13", 7, "Click Farm", "meta"),
        record("103.xxx.xxx.72", 5, "Bot Traffic", "google"),
    ]
}

/// Clamp raw paging inputs: page is 1-based, limit capped at
/// [`MAX_PAGE_LIMIT`] and never zero.
#[must_use]
pub fn clamp_paging(page: Option<u32>, limit: Option<u32>) -> (u32, u32) {
    let page = page.unwrap_or(1).max(1);
    let limit = limit.unwrap_or(DEFAULT_PAGE_LIMIT).clamp(1, MAX_PAGE_LIMIT);
    (page, limit)
}

/// One page of the invalid-click listing. `total` reports the overall
/// invalid-click count, matching the overview number.
#[must_use]
pub fn invalid_clicks(page: Option<u32>, limit: Option<u32>) -> InvalidClicksData {
    let (page, limit) = clamp_paging(page, limit);
    let records = invalid_click_records();

    let start = (page as u64 - 1) * u64::from(limit);
    let data: Vec<InvalidClickRecord> = records
        .into_iter()
        .skip(usize::try_from(start).unwrap_or(usize::MAX))
        .take(limit as usize)
        .collect();

    InvalidClicksData { total: 1_845, page, limit, data }
}

/// Blocked-IP inventory with origin-country breakdown.
#[must_use]
pub fn blocked_ips() -> BlockedIpsData {
    BlockedIpsData {
        total: 342,
        active_blocks: 285,
        expired_blocks: 57,
        top_countries: [
            ("Unknown", 120),
            ("Pakistan", 85),
            ("India", 45),
            ("Bangladesh", 32),
        ]
        .into_iter()
        .map(|(country, count)| CountryCount { country: country.to_owned(), count })
        .collect(),
    }
}

/// Prevented spend, split by platform and by month.
#[must_use]
pub fn savings() -> SavingsData {
    SavingsData {
        total_saved: 18_450.0,
        currency: "PKR".to_owned(),
        by_platform: vec![
            PlatformSavings { platform: "Google Ads".to_owned(), saved: 11_200.0, invalid_clicks: 1_120 },
            PlatformSavings { platform: "Meta Ads".to_owned(), saved: 7_250.0, invalid_clicks: 725 },
        ],
        monthly_trend: [("Oct", 15_200.0), ("Nov", 16_800.0), ("Dec", 18_450.0)]
            .into_iter()
            .map(|(month, saved)| MonthlySavings { month: month.to_owned(), saved })
            .collect(),
    }
}

/// Detailed report: summary, category split and follow-up recommendations.
#[must_use]
pub fn report() -> FraudReport {
    FraudReport {
        summary: FraudSummary {
            total_clicks: 23_070,
            invalid_clicks: 1_845,
            blocked_clicks: 1_720,
            money_saved: 18_450.0,
        },
        fraud_types: [
            ("Bot Traffic", 720, 39.0),
            ("Click Farms", 450, 24.0),
            ("VPN/Proxy", 380, 21.0),
            ("Repetitive Clicks", 295, 16.0),
        ]
        .into_iter()
        .map(|(kind, count, percentage)| FraudType { kind: kind.to_owned(), count, percentage })
        .collect(),
        recommendations: vec![
            "Consider adding IP exclusions for top fraud sources".to_owned(),
            "Enable enhanced click fraud protection for Search campaigns".to_owned(),
            "Review high-fraud time periods and adjust ad scheduling".to_owned(),
        ],
    }
}
