//! `/setlang <locale>` handler

use crate::handlers::text_format;
use crate::i18n::params;
use crate::utils::errors::Result;
use crate::utils::logging;
use super::CommandContext;

/// Handle /setlang: store the sender's preferred language
pub fn handle_setlang(ctx: &CommandContext<'_>, args: &[&str]) -> Result<()> {
    let Some(player) = ctx.sender.as_player() else {
        return ctx.reply_key(text_format::RED, "command.player_only");
    };

    let Some(&locale) = args.first() else {
        return ctx.reply_key(text_format::RED, "command.setlang.usage");
    };

    if !ctx.manager.is_known_locale(locale) {
        return ctx.reply(
            text_format::RED,
            "command.setlang.invalid_locale",
            &params([("locale", locale)]),
        );
    }

    ctx.manager.set_player_locale(&player.name, locale)?;
    logging::log_player_action(&player.name, "setlang", Some(locale));

    ctx.reply(
        text_format::GREEN,
        "command.setlang.success",
        &params([("locale", locale)]),
    )
}
