//! `/mylang` handler

use crate::handlers::text_format;
use crate::i18n::params;
use crate::utils::errors::Result;
use super::CommandContext;

/// Handle /mylang: report the locale the sender's messages are rendered in
pub fn handle_mylang(ctx: &CommandContext<'_>) -> Result<()> {
    if !ctx.sender.is_player() {
        return ctx.reply_key(text_format::RED, "command.player_only");
    }

    let locale = ctx.manager.locale_of(ctx.sender)?;
    ctx.reply(
        text_format::GREEN,
        "command.mylang.current",
        &params([("locale", locale)]),
    )
}
