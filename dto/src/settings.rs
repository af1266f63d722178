//! Workspace settings payloads.

use serde::{Deserialize, Serialize};

/// Branding shown in the sidebar and login card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandingData {
    pub dashboard_name: String,
    pub tagline: String,
    pub logo_url: String,
    pub primary_color: String,
}

/// Connection state of one upstream integration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionStatus {
    pub platform: String,
    pub connected: bool,
}

/// The singleton settings document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsData {
    pub branding: BrandingData,
    pub currency: String,
    /// Upstream sync cadence in minutes.
    pub sync_interval: u32,
    /// Raw-data retention in days.
    pub data_retention: u32,
    pub connections: Vec<ConnectionStatus>,
    pub updated_at: String,
}

/// `PUT /api/settings` partial update; unset fields keep their stored value.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branding: Option<BrandingData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sync_interval: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_retention: Option<u32>,
}
