//! Campaigns page: per-platform listings and the head-to-head comparison.

use dto::campaigns::{Campaign, ComparisonVerdict, PerformanceMetrics};
use leptos::prelude::*;

use crate::components::demo_notice::DemoDataNotice;
use crate::components::stat_card::StatCard;
use crate::util::format::{format_count, format_percent, format_pkr, format_ratio};

// =============================================================================
// DEMO DEFAULTS
// =============================================================================

fn demo_campaign(name: &str, platform: &str, spend: f64, clicks: i64, conversions: i64, roas: f64) -> Campaign {
    Campaign {
        id: format!("demo-{}", name.to_ascii_lowercase().replace(' ', "-")),
        name: name.to_owned(),
        status: "active".to_owned(),
        platform: platform.to_owned(),
        budget: spend * 1.15,
        spend,
        impressions: clicks * 28,
        clicks,
        ctr: 3.2,
        cpc: if clicks == 0 { 0.0 } else { spend / clicks as f64 },
        conversions,
        revenue: spend * roas,
        roas,
    }
}

fn default_meta() -> Vec<Campaign> {
    vec![
        demo_campaign("Instagram Stories - Karachi", "meta", 28_000.0, 18_600, 96, 3.32),
        demo_campaign("Retargeting - Cart Abandoners", "meta", 18_500.0, 11_200, 88, 3.89),
        demo_campaign("Lookalike - Purchasers", "meta", 42_500.0, 16_800, 112, 2.5),
    ]
}

fn default_google() -> Vec<Campaign> {
    vec![
        demo_campaign("Search - Brand Keywords", "google", 35_200.0, 12_400, 118, 4.05),
        demo_campaign("Shopping - All Products", "google", 31_200.0, 9_800, 134, 6.01),
        demo_campaign("Display - Remarketing", "google", 48_300.0, 15_200, 64, 2.0),
    ]
}

fn default_verdict() -> ComparisonVerdict {
    ComparisonVerdict {
        better_roas: "google".to_owned(),
        better_ctr: "meta".to_owned(),
        lower_cpc: "meta".to_owned(),
    }
}

// =============================================================================
// PAGE
// =============================================================================

#[component]
pub fn CampaignsPage() -> impl IntoView {
    let meta = RwSignal::new(default_meta());
    let google = RwSignal::new(default_google());
    let comparison = RwSignal::new(None::<(PerformanceMetrics, PerformanceMetrics)>);
    let verdict = RwSignal::new(default_verdict());
    let demo_data = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use crate::net::api::{Api, fetched_or_keep};
        use dto::DateRange;

        let api = Api::new();
        let (campaigns_result, compare_result) = futures::join!(
            api.campaigns(&DateRange::default()),
            api.campaign_performance(&DateRange::default()),
        );

        let mut demo = false;
        if let Some(data) = fetched_or_keep(campaigns_result, &mut demo) {
            meta.set(data.meta);
            google.set(data.google);
        }
        if let Some(data) = fetched_or_keep(compare_result, &mut demo) {
            comparison.set(Some((data.meta, data.google)));
            verdict.set(data.comparison);
        }
        demo_data.set(demo);
    });
    #[cfg(not(feature = "hydrate"))]
    demo_data.set(true);

    view! {
        <section class="page page--campaigns">
            <h1>"Campaigns"</h1>
            <DemoDataNotice visible=Signal::derive(move || demo_data.get())/>

            {move || {
                let verdict = verdict.get();
                view! {
                    <div class="stat-grid">
                        <StatCard label="Better ROAS" value=verdict.better_roas/>
                        <StatCard label="Better CTR" value=verdict.better_ctr/>
                        <StatCard label="Lower CPC" value=verdict.lower_cpc/>
                    </div>
                }
            }}

            <CampaignTable title="Meta Campaigns" rows=meta/>
            <CampaignTable title="Google Campaigns" rows=google/>

            <Show when=move || comparison.get().is_some()>
                <div class="panel">
                    <h2>"Platform Rollup"</h2>
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Platform"</th>
                                <th>"Spend"</th>
                                <th>"Revenue"</th>
                                <th>"ROAS"</th>
                                <th>"CPA"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                comparison
                                    .get()
                                    .map(|(meta_perf, google_perf)| {
                                        [("meta", meta_perf), ("google", google_perf)]
                                            .into_iter()
                                            .map(|(platform, perf)| {
                                                view! {
                                                    <tr>
                                                        <td>{platform}</td>
                                                        <td>{format_pkr(perf.total_spend)}</td>
                                                        <td>{format_pkr(perf.total_revenue)}</td>
                                                        <td>{format_ratio(perf.roas)}</td>
                                                        <td>{format_pkr(perf.cpa)}</td>
                                                    </tr>
                                                }
                                            })
                                            .collect::<Vec<_>>()
                                    })
                            }}
                        </tbody>
                    </table>
                </div>
            </Show>
        </section>
    }
}

/// One platform's campaign listing.
#[component]
fn CampaignTable(title: &'static str, rows: RwSignal<Vec<Campaign>>) -> impl IntoView {
    view! {
        <div class="panel">
            <h2>{title}</h2>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Campaign"</th>
                        <th>"Status"</th>
                        <th>"Spend"</th>
                        <th>"Clicks"</th>
                        <th>"CTR"</th>
                        <th>"Conversions"</th>
                        <th>"Revenue"</th>
                        <th>"ROAS"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        rows.get()
                            .into_iter()
                            .map(|row| {
                                view! {
                                    <tr>
                                        <td>{row.name}</td>
                                        <td>{row.status}</td>
                                        <td>{format_pkr(row.spend)}</td>
                                        <td>{format_count(row.clicks)}</td>
                                        <td>{format_percent(row.ctr)}</td>
                                        <td>{format_count(row.conversions)}</td>
                                        <td>{format_pkr(row.revenue)}</td>
                                        <td>{format_ratio(row.roas)}</td>
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </tbody>
            </table>
        </div>
    }
}
