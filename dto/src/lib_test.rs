use super::*;
use crate::fraud::FraudOverview;
use crate::insights::{Insight, InsightKind};
use crate::users::{LoginResponse, Role, SessionUser};
use uuid::Uuid;

fn sample_user() -> SessionUser {
    SessionUser {
        id: Uuid::nil(),
        name: "Admin User".to_owned(),
        email: "admin@bambly.ai".to_owned(),
        role: Role::Admin,
        department: Some("Management".to_owned()),
        avatar: None,
        last_login: None,
    }
}

#[test]
fn role_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
    assert_eq!(serde_json::to_string(&Role::Viewer).unwrap(), "\"viewer\"");
    let role: Role = serde_json::from_str("\"manager\"").unwrap();
    assert_eq!(role, Role::Manager);
}

#[test]
fn session_user_wire_fields_are_camel_case() {
    let json = serde_json::to_string(&sample_user()).unwrap();
    assert!(json.contains("\"email\":\"admin@bambly.ai\""));
    assert!(json.contains("\"role\":\"admin\""));
    // Absent optionals are omitted entirely, not serialized as null.
    assert!(!json.contains("avatar"));
    assert!(!json.contains("lastLogin"));
}

#[test]
fn login_response_failure_shape() {
    let resp = LoginResponse {
        success: false,
        user: None,
        error: Some("Invalid email or password".to_owned()),
    };
    let json = serde_json::to_string(&resp).unwrap();
    assert_eq!(json, "{\"success\":false,\"error\":\"Invalid email or password\"}");
}

#[test]
fn fraud_overview_uses_exact_wire_names() {
    let overview = FraudOverview {
        total_clicks: 23_070,
        invalid_clicks: 1_845,
        invalid_percentage: 8.0,
        blocked_ips: 342,
        money_saved: 18_450.0,
        fraud_score: "Medium".to_owned(),
        last_updated: "2024-12-24".to_owned(),
    };
    let json = serde_json::to_string(&overview).unwrap();
    assert!(json.contains("\"invalidClicks\":1845"));
    assert!(json.contains("\"blockedIPs\":342"));
    assert!(json.contains("\"moneySaved\":18450.0"));
}

#[test]
fn insight_kind_round_trips_through_type_field() {
    let insight = Insight {
        id: Uuid::nil(),
        kind: InsightKind::Alert,
        title: "CPC spike".to_owned(),
        description: "Search CPC up 40% day over day".to_owned(),
        priority: "high".to_owned(),
        status: "active".to_owned(),
        category: "budget".to_owned(),
        platform: "google".to_owned(),
        data: serde_json::json!({}),
        created_at: "2024-12-20".to_owned(),
    };
    let json = serde_json::to_string(&insight).unwrap();
    assert!(json.contains("\"type\":\"alert\""));

    let back: Insight = serde_json::from_str(&json).unwrap();
    assert_eq!(back.kind, InsightKind::Alert);
}

#[test]
fn date_range_omits_unset_bounds() {
    assert_eq!(serde_json::to_string(&DateRange::default()).unwrap(), "{}");
    let range = DateRange::between("2024-12-01", "2024-12-31");
    let json = serde_json::to_string(&range).unwrap();
    assert!(json.contains("\"startDate\":\"2024-12-01\""));
    assert!(json.contains("\"endDate\":\"2024-12-31\""));
    assert!(!range.is_empty());
    assert!(DateRange::default().is_empty());
}
