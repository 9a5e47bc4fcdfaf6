//! Command handlers module
//!
//! The plugin runs inside a game server it does not control. Everything it
//! needs from that server goes through [`Host`]; the handlers themselves
//! only translate and validate.

pub mod commands;

pub use commands::{dispatch, Command};

use crate::models::{Audience, Player};

/// Services the hosting game server provides
pub trait Host: Send + Sync {
    /// Connected player with exactly this name
    fn player_exact(&self, name: &str) -> Option<Player>;

    fn has_permission(&self, sender: &Audience, permission: &str) -> bool;

    fn send_message(&self, to: &Audience, message: &str);
}

/// Client colour codes
pub mod text_format {
    pub const RED: &str = "§c";
    pub const GREEN: &str = "§a";
    pub const YELLOW: &str = "§e";
}
