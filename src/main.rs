//! LanguageManager console
//!
//! Runs the plugin against a minimal stdin-driven host. Lines are executed
//! as the console; `join <name> [locale]`, `quit <name>` and
//! `as <name> <command...>` simulate connected players.

use std::collections::HashMap;
use std::sync::Mutex;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

use langmanager::{
    config::Settings,
    handlers::{dispatch, Host},
    middleware::auth,
    models::{Audience, Player},
    services::LanguageManager,
    utils::logging,
};

/// Permissions every connected player holds
const PLAYER_PERMISSIONS: [&str; 3] = [auth::PERM_SETLANG, auth::PERM_MYLANG, auth::PERM_LISTLANGS];

/// Host backed by the terminal: the console may do anything, players only
/// the self-service commands
#[derive(Default)]
struct ConsoleHost {
    players: Mutex<HashMap<String, Player>>,
}

impl ConsoleHost {
    fn join(&self, player: Player) {
        info!(player = %player.name, locale = ?player.client_locale, "Player joined");
        self.lock().insert(player.name.clone(), player);
    }

    fn quit(&self, name: &str) -> bool {
        self.lock().remove(name).is_some()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, Player>> {
        self.players.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Host for ConsoleHost {
    fn player_exact(&self, name: &str) -> Option<Player> {
        self.lock().get(name).cloned()
    }

    fn has_permission(&self, sender: &Audience, permission: &str) -> bool {
        match sender {
            Audience::Player(_) => PLAYER_PERMISSIONS.contains(&permission),
            Audience::Console | Audience::Unspecified => true,
        }
    }

    fn send_message(&self, to: &Audience, message: &str) {
        println!("[{}] {}", to.display_name(), strip_colors(message));
    }
}

/// Drop `§x` colour codes for plain terminals
fn strip_colors(message: &str) -> String {
    let mut out = String::with_capacity(message.len());
    let mut chars = message.chars();
    while let Some(c) = chars.next() {
        if c == '§' {
            chars.next();
        } else {
            out.push(c);
        }
    }
    out
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}...", langmanager::info());

    // Refuses to start without at least one language
    let manager = LanguageManager::enable(settings).await?;
    let host = ConsoleHost::default();

    info!("Ready. Type 'stop' to exit.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some((&first, rest)) = words.split_first() else {
            continue;
        };

        match first {
            "stop" => break,
            "join" => match rest {
                [name] => host.join(Player { name: name.to_string(), client_locale: None }),
                [name, locale, ..] => host.join(Player::new(*name, *locale)),
                [] => println!("Usage: join <name> [locale]"),
            },
            "quit" => match rest.first() {
                Some(name) if host.quit(name) => info!(player = %name, "Player left"),
                Some(name) => println!("{} is not online", name),
                None => println!("Usage: quit <name>"),
            },
            "as" => {
                let [name, command, args @ ..] = rest else {
                    println!("Usage: as <name> <command> [args...]");
                    continue;
                };
                let Some(player) = host.player_exact(name) else {
                    println!("{} is not online", name);
                    continue;
                };
                let sender = Audience::Player(player);
                if !dispatch(&manager, &host, &sender, command, args).await {
                    println!("Unknown command: {}", command);
                }
            }
            command => {
                if !dispatch(&manager, &host, &Audience::Console, command, rest).await {
                    warn!(command = command, "Unknown command");
                    println!("Unknown command: {}", command);
                }
            }
        }
    }

    info!("LanguageManager has been shut down.");
    Ok(())
}
