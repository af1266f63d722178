//! Upstream metric feeds.
//!
//! SYSTEM CONTEXT
//! ==============
//! One module per integration seam: site analytics, ad platforms, the
//! click-fraud feed and geo distribution. Upstream credentials are not
//! configured in this deployment, so each provider serves its fixed demo
//! dataset while keeping the real logic around it (rollups, pagination,
//! tier classification) live and tested.

pub mod analytics;
pub mod campaigns;
pub mod fraud;
pub mod geo;

use time::OffsetDateTime;

/// Today's date in ISO form, used for `lastUpdated` stamps.
#[must_use]
pub fn today_iso() -> String {
    OffsetDateTime::now_utc().date().to_string()
}
