//! Data models module
//!
//! This module contains the data structures shared by the i18n core and the
//! command layer.

pub mod audience;

pub use audience::{Audience, Player};
