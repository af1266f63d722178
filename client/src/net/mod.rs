//! Networking.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns every REST call the dashboard makes: bounded-duration
//! requests, uniform error taxonomy, and the per-field fallback policy the
//! pages build on.

pub mod api;
