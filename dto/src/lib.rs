//! Shared wire schema for the Bambly dashboard API.
//!
//! This crate owns the JSON shapes exchanged between `server` and `client`.
//! Everything serializes in camelCase; several consumers (the persisted
//! session blob, the SPA fetch layer, the API's public surface) depend on
//! those exact field names, so changes here are wire-format changes.

#[cfg(test)]
#[path = "lib_test.rs"]
mod lib_test;

pub mod analytics;
pub mod campaigns;
pub mod fraud;
pub mod geo;
pub mod insights;
pub mod settings;
pub mod users;

use serde::{Deserialize, Serialize};

/// Optional ISO (`YYYY-MM-DD`) date bounds accepted by every read endpoint.
///
/// Both bounds are optional; an empty range means "provider default window".
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

impl DateRange {
    /// Range with both bounds set.
    #[must_use]
    pub fn between(start: &str, end: &str) -> Self {
        Self { start_date: Some(start.to_owned()), end_date: Some(end.to_owned()) }
    }

    /// True when neither bound is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start_date.is_none() && self.end_date.is_none()
    }
}

/// Generic mutation acknowledgement returned by write endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ack {
    pub success: bool,
    pub message: String,
}

impl Ack {
    #[must_use]
    pub fn ok(message: &str) -> Self {
        Self { success: true, message: message.to_owned() }
    }
}

/// `GET /api/health` response document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub message: String,
}
