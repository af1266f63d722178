//! Fraud watch page.
//!
//! A failed background fetch keeps the bundled default numbers on screen
//! with the demo-data notice — never blank fields.

use dto::fraud::{FraudOverview, FraudType, InvalidClickRecord, MonthlySavings, PlatformSavings};
use leptos::prelude::*;

use crate::components::demo_notice::DemoDataNotice;
use crate::components::stat_card::StatCard;
use crate::util::format::{format_count, format_percent, format_pkr};

// =============================================================================
// DEMO DEFAULTS
// =============================================================================

fn default_overview() -> FraudOverview {
    FraudOverview {
        total_clicks: 23_070,
        invalid_clicks: 1_845,
        invalid_percentage: 8.0,
        blocked_ips: 342,
        money_saved: 18_450.0,
        fraud_score: "Medium".to_owned(),
        last_updated: "—".to_owned(),
    }
}

fn default_fraud_types() -> Vec<FraudType> {
    [
        ("Bot Traffic", 720, 39.0),
        ("Click Farms", 450, 24.0),
        ("VPN/Proxy", 380, 21.0),
        ("Repetitive Clicks", 295, 16.0),
    ]
    .into_iter()
    .map(|(kind, count, percentage)| FraudType { kind: kind.to_owned(), count, percentage })
    .collect()
}

fn default_savings_trend() -> Vec<MonthlySavings> {
    [("Oct", 15_200.0), ("Nov", 16_800.0), ("Dec", 18_450.0)]
        .into_iter()
        .map(|(month, saved)| MonthlySavings { month: month.to_owned(), saved })
        .collect()
}

fn default_platform_breakdown() -> Vec<PlatformSavings> {
    vec![
        PlatformSavings { platform: "Google Ads".to_owned(), saved: 11_200.0, invalid_clicks: 1_120 },
        PlatformSavings { platform: "Meta Ads".to_owned(), saved: 7_250.0, invalid_clicks: 725 },
    ]
}

fn default_recent_blocks() -> Vec<InvalidClickRecord> {
    [
        ("203.xxx.xxx.45", 45, "Bot Traffic", "google"),
        ("182.xxx.xxx.12", 32, "Click Farm", "meta"),
        ("39.xxx.xxx.78", 28, "VPN/Proxy", "google"),
        ("119.xxx.xxx.90", 25, "Repetitive Clicks", "meta"),
    ]
    .into_iter()
    .map(|(ip, clicks, reason, platform)| InvalidClickRecord {
        ip: ip.to_owned(),
        clicks,
        reason: reason.to_owned(),
        platform: platform.to_owned(),
        blocked: true,
    })
    .collect()
}

// =============================================================================
// PAGE
// =============================================================================

#[component]
pub fn FraudPage() -> impl IntoView {
    let overview = RwSignal::new(default_overview());
    let fraud_types = RwSignal::new(default_fraud_types());
    let savings_trend = RwSignal::new(default_savings_trend());
    let platform_breakdown = RwSignal::new(default_platform_breakdown());
    let recent_blocks = RwSignal::new(default_recent_blocks());
    let demo_data = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use crate::net::api::{Api, fetched_or_keep};
        use dto::DateRange;

        let api = Api::new();
        let (overview_result, report_result, savings_result, clicks_result) = futures::join!(
            api.fraud_overview(&DateRange::default()),
            api.fraud_report(&DateRange::default()),
            api.fraud_savings(&DateRange::default()),
            api.invalid_clicks(&DateRange::default(), 1, 10),
        );

        let mut demo = false;
        if let Some(data) = fetched_or_keep(overview_result, &mut demo) {
            overview.set(data);
        }
        if let Some(data) = fetched_or_keep(report_result, &mut demo) {
            fraud_types.set(data.fraud_types);
        }
        if let Some(data) = fetched_or_keep(savings_result, &mut demo) {
            savings_trend.set(data.monthly_trend);
            platform_breakdown.set(data.by_platform);
        }
        if let Some(data) = fetched_or_keep(clicks_result, &mut demo) {
            recent_blocks.set(data.data);
        }
        demo_data.set(demo);
    });
    #[cfg(not(feature = "hydrate"))]
    demo_data.set(true);

    view! {
        <section class="page page--fraud">
            <h1>"Fraud Watch"</h1>
            <DemoDataNotice visible=Signal::derive(move || demo_data.get())/>

            {move || {
                let data = overview.get();
                view! {
                    <div class="stat-grid">
                        <StatCard label="Total Clicks" value=format_count(data.total_clicks)/>
                        <StatCard
                            label="Invalid Clicks"
                            value=format_count(data.invalid_clicks)
                            hint=format_percent(data.invalid_percentage)
                        />
                        <StatCard label="Blocked IPs" value=format_count(data.blocked_ips)/>
                        <StatCard
                            label="Money Saved"
                            value=format_pkr(data.money_saved)
                            hint=format!("Fraud score: {}", data.fraud_score)
                        />
                    </div>
                }
            }}

            <div class="panel-row">
                <div class="panel">
                    <h2>"Fraud Types"</h2>
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Type"</th>
                                <th>"Count"</th>
                                <th>"Share"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                fraud_types
                                    .get()
                                    .into_iter()
                                    .map(|row| {
                                        view! {
                                            <tr>
                                                <td>{row.kind}</td>
                                                <td>{format_count(row.count)}</td>
                                                <td>{format_percent(row.percentage)}</td>
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </tbody>
                    </table>
                </div>

                <div class="panel">
                    <h2>"Savings Trend"</h2>
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Month"</th>
                                <th>"Saved"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                savings_trend
                                    .get()
                                    .into_iter()
                                    .map(|row| {
                                        view! {
                                            <tr>
                                                <td>{row.month}</td>
                                                <td>{format_pkr(row.saved)}</td>
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </tbody>
                    </table>
                </div>

                <div class="panel">
                    <h2>"By Platform"</h2>
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Platform"</th>
                                <th>"Invalid"</th>
                                <th>"Saved"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                platform_breakdown
                                    .get()
                                    .into_iter()
                                    .map(|row| {
                                        view! {
                                            <tr>
                                                <td>{row.platform}</td>
                                                <td>{format_count(row.invalid_clicks)}</td>
                                                <td>{format_pkr(row.saved)}</td>
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
                <h2>"Recent Blocks"</h2>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"IP"</th>
                            <th>"Clicks"</th>
                            <th>"Reason"</th>
                            <th>"Platform"</th>
                            <th>"Blocked"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            recent_blocks
                                .get()
                                .into_iter()
                                .map(|row| {
                                    view! {
                                        <tr>
                                            <td>{row.ip}</td>
                                            <td>{format_count(row.clicks)}</td>
                                            <td>{row.reason}</td>
                                            <td>{row.platform}</td>
                                            <td>{if row.blocked { "yes" } else { "no" }}</td>
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
