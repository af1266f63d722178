//! Business services.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route handlers stay thin: the services own the SQL and the credential
//! handling, and return typed rows or domain errors the routes map onto
//! status codes.

pub mod insights;
pub mod password;
pub mod settings;
pub mod users;
