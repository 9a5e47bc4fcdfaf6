//! Middleware module
//!
//! Checks applied before a command handler runs.

pub mod auth;

pub use auth::require;
