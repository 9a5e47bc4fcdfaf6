//! Command handlers module
//!
//! This module contains handlers for `/setlang`, `/mylang`, `/listlangs` and
//! `/langmanager`.

pub mod langmanager;
pub mod listlangs;
pub mod mylang;
pub mod setlang;

use tracing::{debug, error, warn};
use crate::i18n::{params, TranslationParams};
use crate::middleware::auth;
use crate::models::Audience;
use crate::services::LanguageManager;
use crate::utils::errors::{LangError, Result};
use super::{text_format, Host};

/// All commands the plugin registers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    SetLang,
    MyLang,
    ListLangs,
    LangManager,
}

impl Command {
    pub const ALL: [Command; 4] = [
        Command::SetLang,
        Command::MyLang,
        Command::ListLangs,
        Command::LangManager,
    ];

    /// Match a command label, ignoring case
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|command| command.name().eq_ignore_ascii_case(name))
    }

    pub fn name(self) -> &'static str {
        match self {
            Command::SetLang => "setlang",
            Command::MyLang => "mylang",
            Command::ListLangs => "listlangs",
            Command::LangManager => "langmanager",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Command::SetLang => "Set your preferred language.",
            Command::MyLang => "Show your current language.",
            Command::ListLangs => "List available languages.",
            Command::LangManager => "Main command for LanguageManager plugin.",
        }
    }

    pub fn usage(self) -> &'static str {
        match self {
            Command::SetLang => "/setlang <locale>",
            Command::MyLang => "/mylang",
            Command::ListLangs => "/listlangs",
            Command::LangManager => "/langmanager <subcommand> [args]",
        }
    }

    pub fn permission(self) -> &'static str {
        match self {
            Command::SetLang => auth::PERM_SETLANG,
            Command::MyLang => auth::PERM_MYLANG,
            Command::ListLangs => auth::PERM_LISTLANGS,
            Command::LangManager => auth::PERM_BASE,
        }
    }
}

/// Everything a handler needs for one invocation
pub struct CommandContext<'a> {
    pub manager: &'a LanguageManager,
    pub host: &'a dyn Host,
    pub sender: &'a Audience,
}

impl CommandContext<'_> {
    /// Send the sender a message translated into their own locale
    pub fn reply(&self, color: &str, key: &str, params: &TranslationParams) -> Result<()> {
        self.send_to(self.sender, color, key, params)
    }

    pub fn reply_key(&self, color: &str, key: &str) -> Result<()> {
        self.reply(color, key, &TranslationParams::new())
    }

    /// Send `to` a message translated into `to`'s locale
    pub fn send_to(&self, to: &Audience, color: &str, key: &str, params: &TranslationParams) -> Result<()> {
        let text = self.manager.translate(Some(to), key, params)?;
        self.send_raw(to, color, &text);
        Ok(())
    }

    pub fn send_raw(&self, to: &Audience, color: &str, text: &str) {
        self.host.send_message(to, &format!("{}{}", color, text));
    }

    pub fn require(&self, permission: &str) -> Result<()> {
        auth::require(self.host, self.sender, permission)
    }
}

/// Run a command on behalf of `sender`
///
/// Returns `false` only when `name` is not one of this plugin's commands;
/// every recognized command reports itself handled, failures included.
pub async fn dispatch(
    manager: &LanguageManager,
    host: &dyn Host,
    sender: &Audience,
    name: &str,
    args: &[&str],
) -> bool {
    let Some(command) = Command::parse(name) else {
        return false;
    };

    debug!(sender = sender.display_name(), command = command.name(), args = ?args, "Dispatching command");

    let ctx = CommandContext { manager, host, sender };
    let result = match ctx.require(command.permission()) {
        Err(e) => Err(e),
        Ok(()) => match command {
            Command::SetLang => setlang::handle_setlang(&ctx, args),
            Command::MyLang => mylang::handle_mylang(&ctx),
            Command::ListLangs => listlangs::handle_listlangs(&ctx),
            Command::LangManager => langmanager::handle_langmanager(&ctx, args).await,
        },
    };

    if let Err(e) = result {
        if let Err(render_error) = render_error(&ctx, &e) {
            error!(command = command.name(), error = %e, render_error = %render_error, "Error handling command");
        }
    }

    true
}

/// Turn a command-time error into a message for the sender
fn render_error(ctx: &CommandContext<'_>, e: &LangError) -> Result<()> {
    match e {
        LangError::PermissionDenied(_) => ctx.reply_key(text_format::RED, "command.no_permission"),
        LangError::PlayerNotFound(name) => ctx.reply(
            text_format::RED,
            "command.player_not_found",
            &params([("player", name)]),
        ),
        other if other.is_recoverable() => {
            warn!(sender = ctx.sender.display_name(), error = %other, severity = %other.severity(), "Command failed");
            Ok(())
        }
        other => {
            error!(sender = ctx.sender.display_name(), error = %other, severity = %other.severity(), "Command failed");
            Ok(())
        }
    }
}
