//! Overview page: the authenticated landing route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Issues its fetch set concurrently on mount, merges per-field over the
//! bundled demo defaults, and re-issues the set every 30 seconds while
//! mounted. The poller is cancelled on unmount.

#[cfg(test)]
#[path = "overview_test.rs"]
mod overview_test;

use std::time::Duration;

use dto::analytics::OverviewData;
use dto::campaigns::CampaignsData;
use dto::geo::CityData;
use leptos::prelude::*;

use crate::components::demo_notice::DemoDataNotice;
use crate::components::stat_card::StatCard;
use crate::poll::{OVERVIEW_POLL_SECS, start_polling};
use crate::util::format::{format_count, format_percent, format_pkr, format_pkr_exact, format_ratio};

/// Compact campaign row shown in the "top campaigns" table.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct TopCampaign {
    pub name: String,
    pub platform: String,
    pub roas: f64,
    pub spend: f64,
}

/// Best campaigns across both platforms, by ROAS.
pub(crate) fn top_campaigns_by_roas(data: &CampaignsData, count: usize) -> Vec<TopCampaign> {
    let mut rows: Vec<TopCampaign> = data
        .meta
        .iter()
        .chain(&data.google)
        .map(|c| TopCampaign {
            name: c.name.clone(),
            platform: c.platform.clone(),
            roas: c.roas,
            spend: c.spend,
        })
        .collect();
    rows.sort_by(|a, b| b.roas.partial_cmp(&a.roas).unwrap_or(std::cmp::Ordering::Equal));
    rows.truncate(count);
    rows
}

/// Total spend per platform, Meta first.
pub(crate) fn platform_spend(data: &CampaignsData) -> Vec<(String, f64)> {
    vec![
        ("Meta Ads".to_owned(), data.meta.iter().map(|c| c.spend).sum()),
        ("Google Ads".to_owned(), data.google.iter().map(|c| c.spend).sum()),
    ]
}

/// Biggest city markets by revenue.
pub(crate) fn city_sales(mut cities: Vec<CityData>, count: usize) -> Vec<(String, f64)> {
    cities.sort_by(|a, b| b.revenue.partial_cmp(&a.revenue).unwrap_or(std::cmp::Ordering::Equal));
    cities.truncate(count);
    cities.into_iter().map(|city| (city.name, city.revenue)).collect()
}

// =============================================================================
// DEMO DEFAULTS
// =============================================================================

fn default_overview() -> OverviewData {
    OverviewData {
        total_sales: 495,
        revenue: 742_000.0,
        roas: 3.64,
        ad_spend: 203_700.0,
        conversions: 495,
        ctr: 2.8,
        cpc: 2.43,
        invalid_clicks: 1_845,
        money_saved: 18_450.0,
        last_updated: "—".to_owned(),
    }
}

fn default_top_campaigns() -> Vec<TopCampaign> {
    [
        ("Shopping - All Products", "google", 6.01, 31_200.0),
        ("Search - Brand Keywords", "google", 4.05, 35_200.0),
        ("Retargeting - Cart Abandoners", "meta", 3.89, 18_500.0),
        ("Instagram Stories - Karachi", "meta", 3.32, 28_000.0),
    ]
    .into_iter()
    .map(|(name, platform, roas, spend)| TopCampaign {
        name: name.to_owned(),
        platform: platform.to_owned(),
        roas,
        spend,
    })
    .collect()
}

fn default_platform_spend() -> Vec<(String, f64)> {
    vec![("Meta Ads".to_owned(), 89_000.0), ("Google Ads".to_owned(), 114_700.0)]
}

fn default_city_sales() -> Vec<(String, f64)> {
    vec![
        ("Karachi".to_owned(), 125_000.0),
        ("Lahore".to_owned(), 98_000.0),
        ("Islamabad".to_owned(), 85_000.0),
        ("Rawalpindi".to_owned(), 42_000.0),
        ("Faisalabad".to_owned(), 28_000.0),
    ]
}

// =============================================================================
// PAGE
// =============================================================================

#[component]
pub fn OverviewPage() -> impl IntoView {
    let overview = RwSignal::new(default_overview());
    let top_campaigns = RwSignal::new(default_top_campaigns());
    let spend = RwSignal::new(default_platform_spend());
    let cities = RwSignal::new(default_city_sales());
    let demo_data = RwSignal::new(false);
    let loading = RwSignal::new(true);

    let load = move || {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::net::api::{Api, fetched_or_keep};
            use dto::DateRange;

            let api = Api::new();
            let (overview_result, campaigns_result, cities_result) = futures::join!(
                api.overview(&DateRange::default()),
                api.campaigns(&DateRange::default()),
                api.cities(&DateRange::default()),
            );

            let mut demo = false;
            if let Some(data) = fetched_or_keep(overview_result, &mut demo) {
                overview.set(data);
            }
            if let Some(data) = fetched_or_keep(campaigns_result, &mut demo) {
                top_campaigns.set(top_campaigns_by_roas(&data, 4));
                spend.set(platform_spend(&data));
            }
            if let Some(data) = fetched_or_keep(cities_result, &mut demo) {
                cities.set(city_sales(data, 5));
            }
            demo_data.set(demo);
            loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            demo_data.set(true);
            loading.set(false);
        }
    };

    load();
    let poll = start_polling(Duration::from_secs(OVERVIEW_POLL_SECS), load);
    on_cleanup(move || poll.cancel());

    view! {
        <section class="page page--overview">
            <h1>"Overview"</h1>
            <DemoDataNotice visible=Signal::derive(move || demo_data.get())/>

            {move || {
                let data = overview.get();
                view! {
                    <div class="stat-grid">
                        <StatCard label="Revenue" value=format_pkr(data.revenue)/>
                        <StatCard label="ROAS" value=format_ratio(data.roas)/>
                        <StatCard label="Ad Spend" value=format_pkr(data.ad_spend)/>
                        <StatCard label="Conversions" value=format_count(data.conversions)/>
                        <StatCard label="CTR" value=format_percent(data.ctr)/>
                        <StatCard label="CPC" value=format_pkr_exact(data.cpc)/>
                        <StatCard
                            label="Invalid Clicks"
                            value=format_count(data.invalid_clicks)
                            hint=format!("{} saved", format_pkr(data.money_saved))
                        />
                        <StatCard label="Total Sales" value=format_count(data.total_sales)/>
                    </div>
                }
            }}

            <div class="panel-row">
                <div class="panel">
                    <h2>"Platform Spend"</h2>
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Platform"</th>
                                <th>"Spend"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                spend
                                    .get()
                                    .into_iter()
                                    .map(|(platform, amount)| {
                                        view! {
                                            <tr>
                                                <td>{platform}</td>
                                                <td>{format_pkr(amount)}</td>
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </tbody>
                    </table>
                </div>

                <div class="panel">
                    <h2>"Top Cities"</h2>
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"City"</th>
                                <th>"Revenue"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                cities
                                    .get()
                                    .into_iter()
                                    .map(|(city, revenue)| {
                                        view! {
                                            <tr>
                                                <td>{city}</td>
                                                <td>{format_pkr(revenue)}</td>
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </tbody>
                    </table>
                </div>
            </div>

            <div class="panel">
                <h2>"Top Campaigns"</h2>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Campaign"</th>
                            <th>"Platform"</th>
                            <th>"ROAS"</th>
                            <th>"Spend"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            top_campaigns
                                .get()
                                .into_iter()
                                .map(|row| {
                                    view! {
                                        <tr>
                                            <td>{row.name}</td>
                                            <td>{row.platform}</td>
                                            <td>{format_ratio(row.roas)}</td>
                                            <td>{format_pkr(row.spend)}</td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </tbody>
                </table>
            </div>

            <p class="page__footnote">
                {move || {
                    if loading.get() {
                        "Refreshing...".to_owned()
                    } else {
                        format!("Last updated: {}", overview.get().last_updated)
                    }
                }}
            </p>
        </section>
    }
}
