//! REST API client.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, each raced against
//! a 10-second timer that aborts the request on expiry. Off-wasm the calls
//! return a transport failure, which the pages treat exactly like a dead
//! network: they keep their bundled demo data.
//!
//! ERROR HANDLING
//! ==============
//! Timeouts and unreachable networks both surface as [`FetchError::Transport`]
//! — deliberately indistinguishable at the call site. Non-2xx responses
//! surface as [`FetchError::Api`] and bad JSON as [`FetchError::Decode`].
//! Background fetch callers swallow all three and fall back to
//! previously-known-good data; only the login call shows its error to the
//! user.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use dto::users::{LoginResponse, NewUser, PasswordChange, UserMutation, UserRecord, UserUpdate};
use dto::{Ack, DateRange};
use serde::de::DeserializeOwned;

/// Fixed per-request deadline.
pub const REQUEST_TIMEOUT_MS: u32 = 10_000;
/// Fallback API base when no address is supplied at build time.
pub const DEFAULT_API_BASE: &str = "http://localhost:3000/api";

#[cfg(not(feature = "hydrate"))]
const OFFLINE: &str = "network unavailable off-wasm";

/// Uniform failure surface for every API call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// Network unreachable or the timeout elapsed.
    #[error("transport failure: {0}")]
    Transport(String),
    /// Server reached but returned a failure status.
    #[error("API error: {status} {status_text}")]
    Api { status: u16, status_text: String },
    /// Response body was not the expected JSON shape.
    #[error("decode failure: {0}")]
    Decode(String),
}

/// The configured API base address, normalized without a trailing slash.
#[must_use]
pub fn api_base() -> String {
    option_env!("BAMBLY_API_URL")
        .unwrap_or(DEFAULT_API_BASE)
        .trim_end_matches('/')
        .to_owned()
}

/// Append optional date bounds as a query string.
pub(crate) fn range_query(range: &DateRange) -> String {
    let mut pairs: Vec<String> = Vec::new();
    if let Some(start) = &range.start_date {
        pairs.push(format!("startDate={start}"));
    }
    if let Some(end) = &range.end_date {
        pairs.push(format!("endDate={end}"));
    }
    if pairs.is_empty() { String::new() } else { format!("?{}", pairs.join("&")) }
}

/// Date bounds plus pagination, as used by the invalid-clicks listing.
pub(crate) fn paged_query(range: &DateRange, page: u32, limit: u32) -> String {
    let base = range_query(range);
    let separator = if base.is_empty() { '?' } else { '&' };
    format!("{base}{separator}page={page}&limit={limit}")
}

/// Per-field merge policy for background fetches: a failure flips the demo
/// flag and yields nothing, leaving the caller's current value in place.
pub fn fetched_or_keep<T>(result: Result<T, FetchError>, demo_flag: &mut bool) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(_e) => {
            #[cfg(feature = "hydrate")]
            log::warn!("background fetch failed, keeping defaults: {_e}");
            *demo_flag = true;
            None
        }
    }
}

#[cfg(feature = "hydrate")]
#[derive(Clone, Copy)]
enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// API client over the configured base address.
#[derive(Clone, Debug)]
pub struct Api {
    base: String,
}

impl Default for Api {
    fn default() -> Self {
        Self::new()
    }
}

impl Api {
    #[must_use]
    pub fn new() -> Self {
        Self { base: api_base() }
    }

    /// Client over an explicit base address.
    #[must_use]
    pub fn with_base(base: &str) -> Self {
        Self { base: base.trim_end_matches('/').to_owned() }
    }

    pub(crate) fn url(&self, path_and_query: &str) -> String {
        format!("{}{path_and_query}", self.base)
    }

    // =========================================================================
    // TRANSPORT
    // =========================================================================

    #[cfg(feature = "hydrate")]
    async fn request(
        &self,
        method: Method,
        path_and_query: &str,
        body: Option<serde_json::Value>,
    ) -> Result<gloo_net::http::Response, FetchError> {
        use futures::future::{Either, select};

        let url = self.url(path_and_query);
        let controller = web_sys::AbortController::new().ok();
        let signal = controller.as_ref().map(web_sys::AbortController::signal);

        let builder = match method {
            Method::Get => gloo_net::http::Request::get(&url),
            Method::Post => gloo_net::http::Request::post(&url),
            Method::Put => gloo_net::http::Request::put(&url),
            Method::Delete => gloo_net::http::Request::delete(&url),
        }
        .abort_signal(signal.as_ref());

        let request = match body {
            Some(value) => builder.json(&value),
            None => builder.build(),
        }
        .map_err(|e| FetchError::Transport(e.to_string()))?;

        let send = request.send();
        let deadline = gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(REQUEST_TIMEOUT_MS)));
        futures::pin_mut!(send, deadline);

        match select(send, deadline).await {
            Either::Left((result, _)) => result.map_err(|e| FetchError::Transport(e.to_string())),
            Either::Right(((), _)) => {
                // Abort the in-flight request before reporting the timeout
                // as an ordinary transport failure.
                if let Some(controller) = &controller {
                    controller.abort();
                }
                Err(FetchError::Transport("request timed out".to_owned()))
            }
        }
    }

    #[cfg(feature = "hydrate")]
    async fn fetch_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path_and_query: &str,
        body: Option<serde_json::Value>,
    ) -> Result<T, FetchError> {
        let response = self.request(method, path_and_query, body).await?;
        if !response.ok() {
            return Err(FetchError::Api { status: response.status(), status_text: response.status_text() });
        }
        response.json::<T>().await.map_err(|e| FetchError::Decode(e.to_string()))
    }

    #[cfg(feature = "hydrate")]
    async fn get_json<T: DeserializeOwned>(&self, path_and_query: &str) -> Result<T, FetchError> {
        self.fetch_json(Method::Get, path_and_query, None).await
    }

    #[cfg(not(feature = "hydrate"))]
    async fn get_json<T: DeserializeOwned>(&self, _path_and_query: &str) -> Result<T, FetchError> {
        Err(FetchError::Transport(OFFLINE.to_owned()))
    }

    // =========================================================================
    // READ ENDPOINTS
    // =========================================================================

    pub async fn overview(&self, range: &DateRange) -> Result<dto::analytics::OverviewData, FetchError> {
        self.get_json(&format!("/overview{}", range_query(range))).await
    }

    pub async fn analytics(&self, range: &DateRange) -> Result<dto::analytics::AnalyticsData, FetchError> {
        self.get_json(&format!("/analytics{}", range_query(range))).await
    }

    pub async fn realtime(&self) -> Result<dto::analytics::RealtimeData, FetchError> {
        self.get_json("/analytics/realtime").await
    }

    pub async fn traffic(&self, range: &DateRange) -> Result<Vec<dto::analytics::TrafficSource>, FetchError> {
        self.get_json(&format!("/analytics/traffic{}", range_query(range))).await
    }

    pub async fn conversions(&self, range: &DateRange) -> Result<dto::analytics::ConversionData, FetchError> {
        self.get_json(&format!("/analytics/conversions{}", range_query(range))).await
    }

    pub async fn devices(&self, range: &DateRange) -> Result<Vec<dto::analytics::DeviceData>, FetchError> {
        self.get_json(&format!("/analytics/devices{}", range_query(range))).await
    }

    pub async fn campaigns(&self, range: &DateRange) -> Result<dto::campaigns::CampaignsData, FetchError> {
        self.get_json(&format!("/campaigns{}", range_query(range))).await
    }

    pub async fn meta_campaigns(&self, range: &DateRange) -> Result<Vec<dto::campaigns::Campaign>, FetchError> {
        self.get_json(&format!("/campaigns/meta{}", range_query(range))).await
    }

    pub async fn google_campaigns(&self, range: &DateRange) -> Result<Vec<dto::campaigns::Campaign>, FetchError> {
        self.get_json(&format!("/campaigns/google{}", range_query(range))).await
    }

    pub async fn campaign_performance(
        &self,
        range: &DateRange,
    ) -> Result<dto::campaigns::PerformanceComparison, FetchError> {
        self.get_json(&format!("/campaigns/performance/compare{}", range_query(range))).await
    }

    pub async fn audience(&self, range: &DateRange) -> Result<dto::analytics::AudienceOverview, FetchError> {
        self.get_json(&format!("/audience{}", range_query(range))).await
    }

    pub async fn demographics(&self, range: &DateRange) -> Result<dto::analytics::DemographicsData, FetchError> {
        self.get_json(&format!("/audience/demographics{}", range_query(range))).await
    }

    pub async fn segments(&self, range: &DateRange) -> Result<Vec<dto::analytics::SegmentData>, FetchError> {
        self.get_json(&format!("/audience/segments{}", range_query(range))).await
    }

    pub async fn behavior(&self, range: &DateRange) -> Result<dto::analytics::UserBehaviorData, FetchError> {
        self.get_json(&format!("/audience/behavior{}", range_query(range))).await
    }

    pub async fn fraud_overview(&self, range: &DateRange) -> Result<dto::fraud::FraudOverview, FetchError> {
        self.get_json(&format!("/fraud{}", range_query(range))).await
    }

    pub async fn invalid_clicks(
        &self,
        range: &DateRange,
        page: u32,
        limit: u32,
    ) -> Result<dto::fraud::InvalidClicksData, FetchError> {
        self.get_json(&format!("/fraud/invalid-clicks{}", paged_query(range, page, limit))).await
    }

    pub async fn blocked_ips(&self) -> Result<dto::fraud::BlockedIpsData, FetchError> {
        self.get_json("/fraud/blocked-ips").await
    }

    pub async fn fraud_savings(&self, range: &DateRange) -> Result<dto::fraud::SavingsData, FetchError> {
        self.get_json(&format!("/fraud/savings{}", range_query(range))).await
    }

    pub async fn fraud_report(&self, range: &DateRange) -> Result<dto::fraud::FraudReport, FetchError> {
        self.get_json(&format!("/fraud/report{}", range_query(range))).await
    }

    pub async fn insights(&self, limit: u32) -> Result<Vec<dto::insights::Insight>, FetchError> {
        self.get_json(&format!("/insights?limit={limit}")).await
    }

    pub async fn recommendations(&self) -> Result<Vec<dto::insights::Insight>, FetchError> {
        self.get_json("/insights/recommendations").await
    }

    pub async fn alerts(&self) -> Result<Vec<dto::insights::Insight>, FetchError> {
        self.get_json("/insights/alerts").await
    }

    pub async fn forecast(&self) -> Result<Option<dto::insights::Insight>, FetchError> {
        self.get_json("/insights/forecast").await
    }

    pub async fn geo_overview(&self, range: &DateRange) -> Result<dto::geo::GeoOverview, FetchError> {
        self.get_json(&format!("/geo{}", range_query(range))).await
    }

    pub async fn cities(&self, range: &DateRange) -> Result<Vec<dto::geo::CityData>, FetchError> {
        self.get_json(&format!("/geo/cities{}", range_query(range))).await
    }

    pub async fn tiers(&self, range: &DateRange) -> Result<dto::geo::TierData, FetchError> {
        self.get_json(&format!("/geo/tiers{}", range_query(range))).await
    }

    pub async fn regions(&self, range: &DateRange) -> Result<Vec<dto::geo::RegionData>, FetchError> {
        self.get_json(&format!("/geo/regions{}", range_query(range))).await
    }

    pub async fn settings(&self) -> Result<dto::settings::SettingsData, FetchError> {
        self.get_json("/settings").await
    }

    pub async fn branding(&self) -> Result<dto::settings::BrandingData, FetchError> {
        self.get_json("/settings/branding").await
    }

    pub async fn users(&self) -> Result<Vec<UserRecord>, FetchError> {
        self.get_json("/users").await
    }

    // =========================================================================
    // MUTATIONS
    // =========================================================================

    #[cfg(feature = "hydrate")]
    async fn send_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: serde_json::Value,
    ) -> Result<T, FetchError> {
        self.fetch_json(method, path, Some(body)).await
    }

    pub async fn update_settings(&self, update: &dto::settings::SettingsUpdate) -> Result<Ack, FetchError> {
        #[cfg(feature = "hydrate")]
        {
            let body = serde_json::to_value(update).map_err(|e| FetchError::Decode(e.to_string()))?;
            self.send_json(Method::Put, "/settings", body).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = update;
            Err(FetchError::Transport(OFFLINE.to_owned()))
        }
    }

    pub async fn create_user(&self, user: &NewUser) -> Result<UserMutation, FetchError> {
        #[cfg(feature = "hydrate")]
        {
            let body = serde_json::to_value(user).map_err(|e| FetchError::Decode(e.to_string()))?;
            self.send_json(Method::Post, "/users", body).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = user;
            Err(FetchError::Transport(OFFLINE.to_owned()))
        }
    }

    pub async fn update_user(&self, id: &str, update: &UserUpdate) -> Result<UserMutation, FetchError> {
        #[cfg(feature = "hydrate")]
        {
            let body = serde_json::to_value(update).map_err(|e| FetchError::Decode(e.to_string()))?;
            self.send_json(Method::Put, &format!("/users/{id}"), body).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, update);
            Err(FetchError::Transport(OFFLINE.to_owned()))
        }
    }

    pub async fn change_password(&self, id: &str, change: &PasswordChange) -> Result<Ack, FetchError> {
        #[cfg(feature = "hydrate")]
        {
            let body = serde_json::to_value(change).map_err(|e| FetchError::Decode(e.to_string()))?;
            self.send_json(Method::Put, &format!("/users/{id}/password"), body).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, change);
            Err(FetchError::Transport(OFFLINE.to_owned()))
        }
    }

    pub async fn delete_user(&self, id: &str) -> Result<Ack, FetchError> {
        #[cfg(feature = "hydrate")]
        {
            self.fetch_json(Method::Delete, &format!("/users/{id}"), None).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
            Err(FetchError::Transport(OFFLINE.to_owned()))
        }
    }

    // =========================================================================
    // LOGIN
    // =========================================================================

    /// Submit credentials. A rejected login is still an `Ok` value: the
    /// server answers 401 with a `LoginResponse` whose `error` string the
    /// form displays verbatim. Only transport/decode problems are `Err`.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, FetchError> {
        #[cfg(feature = "hydrate")]
        {
            let body = dto::users::LoginRequest { email: email.to_owned(), password: password.to_owned() };
            let payload = serde_json::to_value(&body).map_err(|e| FetchError::Decode(e.to_string()))?;
            let response = self.request(Method::Post, "/users/login", Some(payload)).await?;
            response
                .json::<LoginResponse>()
                .await
                .map_err(|e| FetchError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email, password);
            Err(FetchError::Transport(OFFLINE.to_owned()))
        }
    }
}
