//! Test helpers module
//!
//! This module provides utilities for testing LanguageManager: a recording
//! host, a plugin data folder in a temp directory, and in-memory fixtures.

#![allow(dead_code)]

pub mod mock_host;
pub mod test_context;
pub mod test_data;

pub use mock_host::*;
pub use test_context::*;
pub use test_data::*;
