//! Message recipients
//!
//! Commands and translations are addressed to an [`Audience`]: a connected
//! player, the server console, or an unspecified sender such as a scheduled
//! task. Callers that want "no one in particular" pass `None` instead.

use serde::{Deserialize, Serialize};

/// A connected player as reported by the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    /// Locale reported by the game client, e.g. `en_US`
    pub client_locale: Option<String>,
}

impl Player {
    pub fn new(name: impl Into<String>, client_locale: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            client_locale: Some(client_locale.into()),
        }
    }
}

/// Closed set of recipients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Audience {
    Player(Player),
    Console,
    Unspecified,
}

impl Audience {
    /// Stable identity used to key stored preferences
    pub fn identity(&self) -> Option<&str> {
        match self {
            Audience::Player(player) => Some(&player.name),
            Audience::Console | Audience::Unspecified => None,
        }
    }

    /// Locale reported by the recipient's own client
    pub fn reported_locale(&self) -> Option<&str> {
        match self {
            Audience::Player(player) => player.client_locale.as_deref(),
            Audience::Console | Audience::Unspecified => None,
        }
    }

    pub fn as_player(&self) -> Option<&Player> {
        match self {
            Audience::Player(player) => Some(player),
            _ => None,
        }
    }

    pub fn is_player(&self) -> bool {
        matches!(self, Audience::Player(_))
    }

    /// Name used in logs and admin output
    pub fn display_name(&self) -> &str {
        match self {
            Audience::Player(player) => &player.name,
            Audience::Console => "CONSOLE",
            Audience::Unspecified => "UNSPECIFIED",
        }
    }
}

impl From<Player> for Audience {
    fn from(player: Player) -> Self {
        Audience::Player(player)
    }
}
