//! Recording host for command tests
//!
//! Players hold the self-service permissions by default; admin permissions
//! are granted per player. The console holds every permission.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use langmanager::handlers::Host;
use langmanager::middleware::auth;
use langmanager::models::{Audience, Player};

const DEFAULT_PLAYER_PERMISSIONS: [&str; 3] = [auth::PERM_SETLANG, auth::PERM_MYLANG, auth::PERM_LISTLANGS];

#[derive(Default)]
pub struct MockHost {
    players: Mutex<HashMap<String, Player>>,
    grants: Mutex<HashMap<String, HashSet<String>>>,
    revoked_console: Mutex<HashSet<String>>,
    messages: Mutex<Vec<(String, String)>>,
}

impl MockHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Connect a player and return them as an audience
    pub fn join(&self, name: &str, client_locale: &str) -> Audience {
        let player = Player::new(name, client_locale);
        self.players.lock().unwrap().insert(name.to_string(), player.clone());
        Audience::Player(player)
    }

    pub fn grant(&self, name: &str, permission: &str) {
        self.grants
            .lock()
            .unwrap()
            .entry(name.to_string())
            .or_default()
            .insert(permission.to_string());
    }

    pub fn revoke_from_console(&self, permission: &str) {
        self.revoked_console.lock().unwrap().insert(permission.to_string());
    }

    /// Messages delivered to the audience with this display name
    pub fn messages_for(&self, name: &str) -> Vec<String> {
        self.messages
            .lock()
            .unwrap()
            .iter()
            .filter(|(to, _)| to == name)
            .map(|(_, message)| message.clone())
            .collect()
    }

    pub fn last_message_for(&self, name: &str) -> Option<String> {
        self.messages_for(name).pop()
    }

    pub fn clear(&self) {
        self.messages.lock().unwrap().clear();
    }
}

impl Host for MockHost {
    fn player_exact(&self, name: &str) -> Option<Player> {
        self.players.lock().unwrap().get(name).cloned()
    }

    fn has_permission(&self, sender: &Audience, permission: &str) -> bool {
        match sender {
            Audience::Player(player) => {
                DEFAULT_PLAYER_PERMISSIONS.contains(&permission)
                    || self
                        .grants
                        .lock()
                        .unwrap()
                        .get(&player.name)
                        .is_some_and(|granted| granted.contains(permission))
            }
            Audience::Console | Audience::Unspecified => {
                !self.revoked_console.lock().unwrap().contains(permission)
            }
        }
    }

    fn send_message(&self, to: &Audience, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push((to.display_name().to_string(), message.to_string()));
    }
}
