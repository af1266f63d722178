//! Geographic distribution feed with the Pakistan city-tier classification.

#[cfg(test)]
#[path = "geo_test.rs"]
mod geo_test;

use dto::geo::{CityData, GeoOverview, RegionData, RegionUsers, TierData, TierInfo};

/// Pakistan city tier classification.
const TIER1_CITIES: [&str; 5] = ["Karachi", "Lahore", "Islamabad", "Rawalpindi", "Faisalabad"];
const TIER2_CITIES: [&str; 6] = ["Multan", "Peshawar", "Quetta", "Gujranwala", "Sialkot", "Hyderabad"];
const TIER3_CITIES: [&str; 6] = ["Bahawalpur", "Sargodha", "Sukkur", "Larkana", "Mardan", "Abbottabad"];

/// Country-level rollup.
#[must_use]
pub fn overview() -> GeoOverview {
    GeoOverview {
        country: "Pakistan".to_owned(),
        total_users: 15_420,
        top_regions: [
            ("Punjab", 8_200),
            ("Sindh", 4_500),
            ("KPK", 1_800),
            ("Islamabad", 620),
            ("Balochistan", 300),
        ]
        .into_iter()
        .map(|(region, users)| RegionUsers { region: region.to_owned(), users })
        .collect(),
    }
}

/// Per-city traffic and sales rows, largest market first.
#[must_use]
pub fn cities() -> Vec<CityData> {
    [
        ("Karachi", 3_200, 245, 125_000.0),
        ("Lahore", 2_800, 198, 98_000.0),
        ("Islamabad", 1_200, 145, 85_000.0),
        ("Rawalpindi", 950, 78, 42_000.0),
        ("Faisalabad", 720, 52, 28_000.0),
        ("Multan", 580, 38, 19_000.0),
        ("Peshawar", 450, 32, 16_000.0),
    ]
    .into_iter()
    .map(|(name, users, sales, revenue)| CityData { name: name.to_owned(), users, sales, revenue })
    .collect()
}

/// Per-region traffic and sales rows.
#[must_use]
pub fn regions() -> Vec<RegionData> {
    [
        ("Punjab", 8_200, 520, 285_000.0),
        ("Sindh", 4_500, 285, 145_000.0),
        ("KPK", 1_800, 98, 52_000.0),
        ("Islamabad", 620, 145, 85_000.0),
        ("Balochistan", 300, 18, 9_000.0),
    ]
    .into_iter()
    .map(|(region, users, sales, revenue)| RegionData { region: region.to_owned(), users, sales, revenue })
    .collect()
}

/// Market tier of a city name; unknown cities land in `other`.
fn tier_of(city: &str) -> usize {
    if TIER1_CITIES.contains(&city) {
        0
    } else if TIER2_CITIES.contains(&city) {
        1
    } else if TIER3_CITIES.contains(&city) {
        2
    } else {
        3
    }
}

/// Group city rows into market tiers and total each bucket.
#[must_use]
pub fn classify_tiers(city_rows: Vec<CityData>) -> TierData {
    let mut buckets = [TierInfo::default(), TierInfo::default(), TierInfo::default(), TierInfo::default()];

    for city in city_rows {
        let bucket = &mut buckets[tier_of(&city.name)];
        bucket.total_sales += city.sales;
        bucket.total_users += city.users;
        bucket.cities.push(city);
    }

    let [tier1, tier2, tier3, other] = buckets;
    TierData { tier1, tier2, tier3, other }
}

/// The tier breakdown of the demo city dataset.
#[must_use]
pub fn tiers() -> TierData {
    classify_tiers(cities())
}
