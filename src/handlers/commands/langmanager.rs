//! `/langmanager` administrative handler
//!
//! Subcommands: `help`, `reload`, `setdefault <locale>` and
//! `set <player> <locale>`, each behind its own permission.

use tracing::error;
use crate::handlers::text_format;
use crate::i18n::params;
use crate::middleware::auth;
use crate::models::Audience;
use crate::utils::errors::{LangError, Result};
use crate::utils::logging;
use super::CommandContext;

/// Subcommands in help order: name, argument hint, permission, description key
const SUBCOMMANDS: [(&str, &str, &str, &str); 4] = [
    ("help", "", auth::PERM_HELP, "command.help.description"),
    ("reload", "", auth::PERM_RELOAD, "command.reload.description"),
    ("setdefault", " <locale>", auth::PERM_SETDEFAULT, "command.setdefault.description"),
    ("set", " <player> <locale>", auth::PERM_SET, "command.set.description"),
];

/// Handle /langmanager
pub async fn handle_langmanager(ctx: &CommandContext<'_>, args: &[&str]) -> Result<()> {
    let Some((subcommand, rest)) = args.split_first() else {
        return send_help(ctx);
    };

    match subcommand.to_lowercase().as_str() {
        "help" => {
            ctx.require(auth::PERM_HELP)?;
            send_help(ctx)
        }
        "reload" => {
            ctx.require(auth::PERM_RELOAD)?;
            handle_reload(ctx).await
        }
        "setdefault" => {
            ctx.require(auth::PERM_SETDEFAULT)?;
            handle_setdefault(ctx, rest)
        }
        "set" => {
            ctx.require(auth::PERM_SET)?;
            handle_set(ctx, rest)
        }
        other => ctx.reply(
            text_format::RED,
            "command.unknown_subcommand",
            &params([("subcommand", other)]),
        ),
    }
}

/// List the subcommands the sender may use
fn send_help(ctx: &CommandContext<'_>) -> Result<()> {
    ctx.reply_key(text_format::YELLOW, "command.help.header")?;

    for (name, hint, permission, description_key) in SUBCOMMANDS {
        if !ctx.host.has_permission(ctx.sender, permission) {
            continue;
        }
        let description = ctx.manager.translate(Some(ctx.sender), description_key, &Default::default())?;
        let line = format!("/langmanager {}{} - {}", name, hint, description);
        ctx.send_raw(ctx.sender, text_format::YELLOW, &line);
    }

    Ok(())
}

async fn handle_reload(ctx: &CommandContext<'_>) -> Result<()> {
    match ctx.manager.reload().await {
        Ok(()) => {
            logging::log_admin_action(ctx.sender.display_name(), "reload", None, None);
            ctx.reply_key(text_format::GREEN, "command.reload.success")
        }
        Err(e) => {
            error!(error = %e, severity = %e.severity(), "Reload failed, keeping previous languages");
            ctx.reply(
                text_format::RED,
                "command.reload.failed",
                &params([("error", e.to_string())]),
            )
        }
    }
}

fn handle_setdefault(ctx: &CommandContext<'_>, args: &[&str]) -> Result<()> {
    let Some(&locale) = args.first() else {
        return ctx.reply_key(text_format::RED, "command.setdefault.usage");
    };

    match ctx.manager.set_default_locale(locale) {
        Ok(()) => {
            logging::log_admin_action(ctx.sender.display_name(), "setdefault", None, Some(locale));
            ctx.reply(
                text_format::GREEN,
                "command.setdefault.success",
                &params([("locale", locale)]),
            )
        }
        Err(LangError::UnknownLocale(_)) => ctx.reply(
            text_format::RED,
            "command.setdefault.invalid_locale",
            &params([("locale", locale)]),
        ),
        Err(e) => Err(e),
    }
}

fn handle_set(ctx: &CommandContext<'_>, args: &[&str]) -> Result<()> {
    let [player_name, locale, ..] = args else {
        return ctx.reply_key(text_format::RED, "command.set.usage");
    };

    let target = ctx
        .host
        .player_exact(player_name)
        .ok_or_else(|| LangError::PlayerNotFound(player_name.to_string()))?;

    match ctx.manager.set_player_locale(&target.name, locale) {
        Ok(()) => {}
        Err(LangError::UnknownLocale(_)) => {
            return ctx.reply(
                text_format::RED,
                "command.set.invalid_locale",
                &params([("locale", locale)]),
            );
        }
        Err(e) => return Err(e),
    }

    logging::log_admin_action(ctx.sender.display_name(), "set", Some(target.name.as_str()), Some(*locale));

    ctx.reply(
        text_format::GREEN,
        "command.set.success",
        &params([("player", target.name.as_str()), ("locale", *locale)]),
    )?;

    let target = Audience::Player(target);
    ctx.send_to(
        &target,
        text_format::GREEN,
        "command.set.player_message",
        &params([("locale", *locale)]),
    )
}
