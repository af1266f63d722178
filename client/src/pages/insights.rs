//! Insights page: recommendations, alerts and the demand forecast.

use dto::insights::{ForecastDetails, Insight};
use leptos::prelude::*;

use crate::components::demo_notice::DemoDataNotice;
use crate::components::stat_card::StatCard;
use crate::util::format::{format_count, format_percent, format_pkr};

/// Typed view of a forecast insight's data document, when one is present.
fn forecast_details(insight: &Insight) -> Option<ForecastDetails> {
    serde_json::from_value(insight.data.clone()).ok()
}

fn default_forecast() -> ForecastDetails {
    ForecastDetails {
        predicted_sales: 540,
        predicted_revenue: 815_000.0,
        confidence: 72.0,
        factors: vec![
            "Seasonal uplift ahead of Eid".to_owned(),
            "Tier-1 city demand trending up".to_owned(),
            "Fraud savings reinvested into Search".to_owned(),
        ],
    }
}

#[component]
pub fn InsightsPage() -> impl IntoView {
    let recommendations = RwSignal::new(Vec::<Insight>::new());
    let alerts = RwSignal::new(Vec::<Insight>::new());
    let forecast = RwSignal::new(default_forecast());
    let demo_data = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use crate::net::api::{Api, fetched_or_keep};

        let api = Api::new();
        let (recommendations_result, alerts_result, forecast_result) =
            futures::join!(api.recommendations(), api.alerts(), api.forecast());

        let mut demo = false;
        if let Some(data) = fetched_or_keep(recommendations_result, &mut demo) {
            recommendations.set(data);
        }
        if let Some(data) = fetched_or_keep(alerts_result, &mut demo) {
            alerts.set(data);
        }
        if let Some(data) = fetched_or_keep(forecast_result, &mut demo) {
            // No stored forecast keeps the bundled demo prediction.
            if let Some(details) = data.as_ref().and_then(forecast_details) {
                forecast.set(details);
            }
        }
        demo_data.set(demo);
    });
    #[cfg(not(feature = "hydrate"))]
    demo_data.set(true);

    view! {
        <section class="page page--insights">
            <h1>"Insights"</h1>
            <DemoDataNotice visible=Signal::derive(move || demo_data.get())/>

            {move || {
                let details = forecast.get();
                view! {
                    <div class="stat-grid">
                        <StatCard label="Predicted Sales" value=format_count(details.predicted_sales)/>
                        <StatCard label="Predicted Revenue" value=format_pkr(details.predicted_revenue)/>
                        <StatCard label="Confidence" value=format_percent(details.confidence)/>
                    </div>
                    <ul class="forecast-factors">
                        {details
                            .factors
                            .into_iter()
                            .map(|factor| view! { <li>{factor}</li> })
                            .collect::<Vec<_>>()}
                    </ul>
                }
            }}

            <InsightList title="Recommendations" rows=recommendations empty="No recommendations yet."/>
            <InsightList title="Active Alerts" rows=alerts empty="No active alerts."/>
        </section>
    }
}

#[component]
fn InsightList(title: &'static str, rows: RwSignal<Vec<Insight>>, empty: &'static str) -> impl IntoView {
    view! {
        <div class="panel">
            <h2>{title}</h2>
            <Show
                when=move || !rows.get().is_empty()
                fallback=move || view! { <p class="panel__empty">{empty}</p> }
            >
                <ul class="insight-list">
                    {move || {
                        rows.get()
                            .into_iter()
                            .map(|insight| {
                                view! {
                                    <li class="insight-list__item">
                                        <span class=format!("badge badge--{}", insight.priority)>
                                            {insight.priority.clone()}
                                        </span>
                                        <strong>{insight.title.clone()}</strong>
                                        <p>{insight.description.clone()}</p>
                                        <span class="insight-list__meta">
                                            {format!("{} · {}", insight.platform, insight.created_at)}
                                        </span>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </ul>
            </Show>
        </div>
    }
}
