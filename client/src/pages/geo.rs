//! Geo targeting page: country overview, city tiers and regions.

use dto::geo::{CityData, GeoOverview, RegionData, RegionUsers, TierData, TierInfo};
use leptos::prelude::*;

use crate::components::demo_notice::DemoDataNotice;
use crate::components::stat_card::StatCard;
use crate::util::format::{format_count, format_pkr};

// =============================================================================
// DEMO DEFAULTS
// =============================================================================

fn default_overview() -> GeoOverview {
    GeoOverview {
        country: "Pakistan".to_owned(),
        total_users: 15_420,
        top_regions: [("Punjab", 8_200), ("Sindh", 4_500), ("KPK", 1_800)]
            .into_iter()
            .map(|(region, users)| RegionUsers { region: region.to_owned(), users })
            .collect(),
    }
}

fn default_cities() -> Vec<CityData> {
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

fn default_regions() -> Vec<RegionData> {
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

// =============================================================================
// PAGE
// =============================================================================

#[component]
pub fn GeoPage() -> impl IntoView {
    let overview = RwSignal::new(default_overview());
    let cities = RwSignal::new(default_cities());
    let tiers = RwSignal::new(None::<TierData>);
    let regions = RwSignal::new(default_regions());
    let demo_data = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use crate::net::api::{Api, fetched_or_keep};
        use dto::DateRange;

        let api = Api::new();
        let (overview_result, cities_result, tiers_result, regions_result) = futures::join!(
            api.geo_overview(&DateRange::default()),
            api.cities(&DateRange::default()),
            api.tiers(&DateRange::default()),
            api.regions(&DateRange::default()),
        );

        let mut demo = false;
        if let Some(data) = fetched_or_keep(overview_result, &mut demo) {
            overview.set(data);
        }
        if let Some(data) = fetched_or_keep(cities_result, &mut demo) {
            cities.set(data);
        }
        if let Some(data) = fetched_or_keep(tiers_result, &mut demo) {
            tiers.set(Some(data));
        }
        if let Some(data) = fetched_or_keep(regions_result, &mut demo) {
            regions.set(data);
        }
        demo_data.set(demo);
    });
    #[cfg(not(feature = "hydrate"))]
    demo_data.set(true);

    view! {
        <section class="page page--geo">
            <h1>"Geo Targeting"</h1>
            <DemoDataNotice visible=Signal::derive(move || demo_data.get())/>

            {move || {
                let data = overview.get();
                let regions_line = data
                    .top_regions
                    .iter()
                    .map(|r| r.region.clone())
                    .collect::<Vec<_>>()
                    .join(", ");
                view! {
                    <div class="stat-grid">
                        <StatCard label="Country" value=data.country.clone()/>
                        <StatCard label="Total Users" value=format_count(data.total_users)/>
                        <StatCard label="Top Regions" value=regions_line/>
                    </div>
                }
            }}

            <div class="panel">
                <h2>"Cities"</h2>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"City"</th>
                            <th>"Users"</th>
                            <th>"Sales"</th>
                            <th>"Revenue"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            cities
                                .get()
                                .into_iter()
                                .map(|city| {
                                    view! {
                                        <tr>
                                            <td>{city.name}</td>
                                            <td>{format_count(city.users)}</td>
                                            <td>{format_count(city.sales)}</td>
                                            <td>{format_pkr(city.revenue)}</td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </tbody>
                </table>
            </div>

            <Show when=move || tiers.get().is_some()>
                <div class="panel">
                    <h2>"Market Tiers"</h2>
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Tier"</th>
                                <th>"Cities"</th>
                                <th>"Users"</th>
                                <th>"Sales"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                tiers
                                    .get()
                                    .map(|data| {
                                        [
                                            ("Tier 1", data.tier1),
                                            ("Tier 2", data.tier2),
                                            ("Tier 3", data.tier3),
                                            ("Other", data.other),
                                        ]
                                        .into_iter()
                                        .map(|(label, info)| tier_row(label, &info))
                                        .collect::<Vec<_>>()
                                    })
                            }}
                        </tbody>
                    </table>
                </div>
            </Show>

            <div class="panel">
                <h2>"Regions"</h2>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Region"</th>
                            <th>"Users"</th>
                            <th>"Sales"</th>
                            <th>"Revenue"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            regions
                                .get()
                                .into_iter()
                                .map(|region| {
                                    view! {
                                        <tr>
                                            <td>{region.region}</td>
                                            <td>{format_count(region.users)}</td>
                                            <td>{format_count(region.sales)}</td>
                                            <td>{format_pkr(region.revenue)}</td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </tbody>
                </table>
            </div>
        </section>
    }
}

fn tier_row(label: &'static str, info: &TierInfo) -> impl IntoView + use<> {
    let city_names = info.cities.iter().map(|c| c.name.clone()).collect::<Vec<_>>().join(", ");
    let display = if city_names.is_empty() { "—".to_owned() } else { city_names };
    view! {
        <tr>
            <td>{label}</td>
            <td>{display}</td>
            <td>{format_count(info.total_users)}</td>
            <td>{format_count(info.total_sales)}</td>
        </tr>
    }
}
