//! Geographic distribution payloads (Pakistan-focused).

use serde::{Deserialize, Serialize};

/// User count for one administrative region.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionUsers {
    pub region: String,
    pub users: i64,
}

/// `GET /api/geo` country-level rollup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoOverview {
    pub country: String,
    pub total_users: i64,
    pub top_regions: Vec<RegionUsers>,
}

/// Per-city traffic and sales row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CityData {
    pub name: String,
    pub users: i64,
    pub sales: i64,
    pub revenue: f64,
}

/// Cities grouped under one market tier with their totals.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierInfo {
    pub cities: Vec<CityData>,
    pub total_sales: i64,
    pub total_users: i64,
}

/// `GET /api/geo/tiers` response: the city-tier classification.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TierData {
    pub tier1: TierInfo,
    pub tier2: TierInfo,
    pub tier3: TierInfo,
    pub other: TierInfo,
}

/// Per-region traffic and sales row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegionData {
    pub region: String,
    pub users: i64,
    pub sales: i64,
    pub revenue: f64,
}
