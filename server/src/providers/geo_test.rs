use super::*;

fn city(name: &str, users: i64, sales: i64) -> CityData {
    CityData { name: name.to_owned(), users, sales, revenue: 0.0 }
}

#[test]
fn demo_cities_split_into_tier1_and_tier2() {
    let tiers = tiers();
    assert_eq!(tiers.tier1.cities.len(), 5);
    assert_eq!(tiers.tier2.cities.len(), 2);
    assert!(tiers.tier3.cities.is_empty());
    assert!(tiers.other.cities.is_empty());
}

#[test]
fn tier_totals_sum_member_cities() {
    let tiers = tiers();
    // Karachi + Lahore + Islamabad + Rawalpindi + Faisalabad.
    assert_eq!(tiers.tier1.total_users, 3_200 + 2_800 + 1_200 + 950 + 720);
    assert_eq!(tiers.tier1.total_sales, 245 + 198 + 145 + 78 + 52);
    // Multan + Peshawar.
    assert_eq!(tiers.tier2.total_users, 580 + 450);
    assert_eq!(tiers.tier2.total_sales, 38 + 32);
}

#[test]
fn tier_classification_covers_every_input_city() {
    let input = cities();
    let total_input_users: i64 = input.iter().map(|c| c.users).sum();
    let tiers = classify_tiers(input);
    let total_bucketed =
        tiers.tier1.total_users + tiers.tier2.total_users + tiers.tier3.total_users + tiers.other.total_users;
    assert_eq!(total_bucketed, total_input_users);
}

#[test]
fn tier3_cities_are_classified() {
    let tiers = classify_tiers(vec![city("Sukkur", 120, 8), city("Mardan", 80, 4)]);
    assert_eq!(tiers.tier3.cities.len(), 2);
    assert_eq!(tiers.tier3.total_users, 200);
    assert_eq!(tiers.tier3.total_sales, 12);
}

#[test]
fn unknown_cities_fall_into_other() {
    let tiers = classify_tiers(vec![city("Gwadar", 50, 2), city("Dubai", 10, 1)]);
    assert!(tiers.tier1.cities.is_empty());
    assert_eq!(tiers.other.cities.len(), 2);
    assert_eq!(tiers.other.total_users, 60);
}

#[test]
fn classification_preserves_city_order_within_a_tier() {
    let tiers = tiers();
    let names: Vec<&str> = tiers.tier1.cities.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Karachi", "Lahore", "Islamabad", "Rawalpindi", "Faisalabad"]);
}

#[test]
fn overview_matches_region_rows() {
    let overview = overview();
    let regions = regions();
    assert_eq!(overview.country, "Pakistan");
    assert_eq!(overview.top_regions.len(), regions.len());
    for (summary, detail) in overview.top_regions.iter().zip(&regions) {
        assert_eq!(summary.region, detail.region);
        assert_eq!(summary.users, detail.users);
    }
}
