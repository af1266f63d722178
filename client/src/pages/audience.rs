//! Audience page: engagement, demographics, segments and behavior.

use dto::analytics::{
    AgeBand, AudienceOverview, EngagementStats, GenderSplit, SegmentData, SessionQualityStats, TopPage,
};
use leptos::prelude::*;

use crate::components::demo_notice::DemoDataNotice;
use crate::components::stat_card::StatCard;
use crate::util::format::{format_count, format_duration_secs, format_percent, format_pkr};

// =============================================================================
// DEMO DEFAULTS
// =============================================================================

fn default_overview() -> AudienceOverview {
    AudienceOverview {
        engagement: EngagementStats {
            new_users: 8_540,
            returning_users: 6_880,
            avg_engagement_time: 185,
            engaged_sessions: 18_200,
        },
        quality: SessionQualityStats {
            total_sessions: 24_680,
            avg_session_duration: 185,
            scroll_depth: 62.0,
            rage_clicks: 342,
            dead_clicks: 892,
            quickbacks: 1_245,
        },
    }
}

fn default_age_bands() -> Vec<AgeBand> {
    [("18-24", 28.0), ("25-34", 35.0), ("35-44", 22.0), ("45-54", 10.0), ("55+", 5.0)]
        .into_iter()
        .map(|(range, percentage)| AgeBand { range: range.to_owned(), percentage })
        .collect()
}

fn default_gender_split() -> Vec<GenderSplit> {
    vec![
        GenderSplit { kind: "Male".to_owned(), percentage: 58.0 },
        GenderSplit { kind: "Female".to_owned(), percentage: 42.0 },
    ]
}

fn default_segments() -> Vec<SegmentData> {
    vec![
        SegmentData {
            name: "High-Value Buyers".to_owned(),
            users: 2_450,
            revenue: Some(425_000.0),
            potential_revenue: None,
            conversion_rate: None,
        },
        SegmentData {
            name: "Cart Abandoners".to_owned(),
            users: 3_200,
            revenue: None,
            potential_revenue: Some(180_000.0),
            conversion_rate: None,
        },
        SegmentData {
            name: "Returning Customers".to_owned(),
            users: 4_200,
            revenue: None,
            potential_revenue: None,
            conversion_rate: Some(4.5),
        },
    ]
}

fn default_top_pages() -> Vec<TopPage> {
    [
        ("/products", 12_500, 125, 72.0),
        ("/", 8_900, 45, 58.0),
        ("/cart", 4_200, 180, 85.0),
        ("/checkout", 1_850, 240, 92.0),
    ]
    .into_iter()
    .map(|(page, views, avg_time, scroll_depth)| TopPage {
        page: page.to_owned(),
        views,
        avg_time,
        scroll_depth,
    })
    .collect()
}

/// The segment's strongest metric, rendered as one cell.
fn segment_highlight(segment: &SegmentData) -> String {
    if let Some(revenue) = segment.revenue {
        return format!("{} revenue", format_pkr(revenue));
    }
    if let Some(potential) = segment.potential_revenue {
        return format!("{} recoverable", format_pkr(potential));
    }
    if let Some(rate) = segment.conversion_rate {
        return format!("{} conversion", format_percent(rate));
    }
    "—".to_owned()
}

// =============================================================================
// PAGE
// =============================================================================

#[component]
pub fn AudiencePage() -> impl IntoView {
    let overview = RwSignal::new(default_overview());
    let age_bands = RwSignal::new(default_age_bands());
    let gender_split = RwSignal::new(default_gender_split());
    let segments = RwSignal::new(default_segments());
    let top_pages = RwSignal::new(default_top_pages());
    let demo_data = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use crate::net::api::{Api, fetched_or_keep};
        use dto::DateRange;

        let api = Api::new();
        let (overview_result, demographics_result, segments_result, behavior_result) = futures::join!(
            api.audience(&DateRange::default()),
            api.demographics(&DateRange::default()),
            api.segments(&DateRange::default()),
            api.behavior(&DateRange::default()),
        );

        let mut demo = false;
        if let Some(data) = fetched_or_keep(overview_result, &mut demo) {
            overview.set(data);
        }
        if let Some(data) = fetched_or_keep(demographics_result, &mut demo) {
            age_bands.set(data.age);
            gender_split.set(data.gender);
        }
        if let Some(data) = fetched_or_keep(segments_result, &mut demo) {
            segments.set(data);
        }
        if let Some(data) = fetched_or_keep(behavior_result, &mut demo) {
            top_pages.set(data.top_pages);
        }
        demo_data.set(demo);
    });
    #[cfg(not(feature = "hydrate"))]
    demo_data.set(true);

    view! {
        <section class="page page--audience">
            <h1>"Audience"</h1>
            <DemoDataNotice visible=Signal::derive(move || demo_data.get())/>

            {move || {
                let data = overview.get();
                view! {
                    <div class="stat-grid">
                        <StatCard label="New Users" value=format_count(data.engagement.new_users)/>
                        <StatCard label="Returning Users" value=format_count(data.engagement.returning_users)/>
                        <StatCard
                            label="Engagement Time"
                            value=format_duration_secs(data.engagement.avg_engagement_time)
                        />
                        <StatCard label="Sessions" value=format_count(data.quality.total_sessions)/>
                        <StatCard
                            label="Scroll Depth"
                            value=format_percent(data.quality.scroll_depth)
                            hint=format!("{} rage clicks", format_count(data.quality.rage_clicks))
                        />
                    </div>
                }
            }}

            <div class="panel-row">
                <div class="panel">
                    <h2>"Age"</h2>
                    <table class="data-table">
                        <tbody>
                            {move || {
                                age_bands
                                    .get()
                                    .into_iter()
                                    .map(|band| {
                                        view! {
                                            <tr>
                                                <td>{band.range}</td>
                                                <td>{format_percent(band.percentage)}</td>
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </tbody>
                    </table>
                </div>

                <div class="panel">
                    <h2>"Gender"</h2>
                    <table class="data-table">
                        <tbody>
                            {move || {
                                gender_split
                                    .get()
                                    .into_iter()
                                    .map(|split| {
                                        view! {
                                            <tr>
                                                <td>{split.kind}</td>
                                                <td>{format_percent(split.percentage)}</td>
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
                <h2>"Segments"</h2>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Segment"</th>
                            <th>"Users"</th>
                            <th>"Highlight"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            segments
                                .get()
                                .into_iter()
                                .map(|segment| {
                                    let highlight = segment_highlight(&segment);
                                    view! {
                                        <tr>
                                            <td>{segment.name}</td>
                                            <td>{format_count(segment.users)}</td>
                                            <td>{highlight}</td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </tbody>
                </table>
            </div>

            <div class="panel">
                <h2>"Top Pages"</h2>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Page"</th>
                            <th>"Views"</th>
                            <th>"Avg Time"</th>
                            <th>"Scroll Depth"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            top_pages
                                .get()
                                .into_iter()
                                .map(|page| {
                                    view! {
                                        <tr>
                                            <td>{page.page}</td>
                                            <td>{format_count(page.views)}</td>
                                            <td>{format_duration_secs(page.avg_time)}</td>
                                            <td>{format_percent(page.scroll_depth)}</td>
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
