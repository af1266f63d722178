//! Cross-view client state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Auth is the only state shared across views; everything else is
//! route-scoped and lives in its page.

pub mod auth;
