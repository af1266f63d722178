//! Site analytics feed: traffic, conversions, audience and behavior.

use dto::analytics::{
    AgeBand, AnalyticsData, AudienceOverview, ConversionData, DailyConversions, DemographicsData, DeviceData,
    EngagementStats, GenderSplit, PagePopularity, RealtimeData, ScrollBehavior, SegmentData, SessionQualityStats,
    TopPage, TrafficSource, UserBehaviorData, UserFrustration,
};

/// Core site metrics for the selected window.
#[must_use]
pub fn overview_metrics() -> AnalyticsData {
    AnalyticsData {
        users: 15_420,
        sessions: 24_680,
        page_views: 89_450,
        bounce_rate: 42.5,
        avg_session_duration: 185,
        conversions: 342,
        conversion_rate: 2.22,
    }
}

/// Live visitor snapshot.
#[must_use]
pub fn realtime() -> RealtimeData {
    RealtimeData {
        active_users: 124,
        page_views: 342,
        top_pages: vec![
            page("/products", 45),
            page("/", 32),
            page("/cart", 28),
        ],
    }
}

fn page(path: &str, users: i64) -> PagePopularity {
    PagePopularity { path: path.to_owned(), users }
}

/// Acquisition channels ranked by user volume.
#[must_use]
pub fn traffic_sources() -> Vec<TrafficSource> {
    let rows = [
        ("Google / CPC", 5_420, 8_200, 145),
        ("Facebook / CPC", 4_850, 7_100, 98),
        ("Direct", 2_340, 3_200, 45),
        ("Organic Search", 1_890, 2_800, 32),
        ("Instagram / CPC", 920, 1_380, 22),
    ];
    rows.into_iter()
        .map(|(source, users, sessions, conversions)| TrafficSource {
            source: source.to_owned(),
            users,
            sessions,
            conversions,
        })
        .collect()
}

/// Conversion totals plus the daily series.
#[must_use]
pub fn conversions() -> ConversionData {
    let by_day = [
        ("2024-12-18", 45),
        ("2024-12-19", 52),
        ("2024-12-20", 48),
        ("2024-12-21", 61),
        ("2024-12-22", 38),
        ("2024-12-23", 55),
        ("2024-12-24", 43),
    ]
    .into_iter()
    .map(|(date, conversions)| DailyConversions { date: date.to_owned(), conversions })
    .collect();

    ConversionData { total: 342, value: 845_000.0, rate: 2.22, by_day }
}

/// Device-category breakdown.
#[must_use]
pub fn device_breakdown() -> Vec<DeviceData> {
    vec![
        DeviceData { device: "Mobile".to_owned(), users: 11_566, percentage: 75.0 },
        DeviceData { device: "Desktop".to_owned(), users: 2_777, percentage: 18.0 },
        DeviceData { device: "Tablet".to_owned(), users: 1_077, percentage: 7.0 },
    ]
}

/// The two audience feeds side by side.
#[must_use]
pub fn audience_overview() -> AudienceOverview {
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

/// Age and gender splits.
#[must_use]
pub fn demographics() -> DemographicsData {
    DemographicsData {
        age: [
            ("18-24", 28.0),
            ("25-34", 35.0),
            ("35-44", 22.0),
            ("45-54", 10.0),
            ("55+", 5.0),
        ]
        .into_iter()
        .map(|(range, percentage)| AgeBand { range: range.to_owned(), percentage })
        .collect(),
        gender: vec![
            GenderSplit { kind: "Male".to_owned(), percentage: 58.0 },
            GenderSplit { kind: "Female".to_owned(), percentage: 42.0 },
        ],
    }
}

/// Named audience segments with their strongest metric.
#[must_use]
pub fn segments() -> Vec<SegmentData> {
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
            name: "New Visitors".to_owned(),
            users: 8_540,
            revenue: None,
            potential_revenue: None,
            conversion_rate: Some(1.2),
        },
        SegmentData {
            name: "Returning Customers".to_owned(),
            users: 4_200,
            revenue: None,
            potential_revenue: None,
            conversion_rate: Some(4.5),
        },
        SegmentData {
            name: "Mobile Shoppers".to_owned(),
            users: 11_566,
            revenue: None,
            potential_revenue: None,
            conversion_rate: Some(1.8),
        },
    ]
}

/// Page-level engagement and frustration signals.
#[must_use]
pub fn behavior() -> UserBehaviorData {
    UserBehaviorData {
        top_pages: [
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
        .collect(),
        user_frustration: UserFrustration {
            rage_clicks: 342,
            top_rage_pages: vec!["/checkout".to_owned(), "/cart".to_owned(), "/search".to_owned()],
            dead_clicks: 892,
            top_dead_areas: vec![
                "navigation menu".to_owned(),
                "product images".to_owned(),
                "filter buttons".to_owned(),
            ],
        },
        scroll_behavior: ScrollBehavior { avg_scroll_depth: 62.0, below50percent: 18.0, above75percent: 45.0 },
    }
}
