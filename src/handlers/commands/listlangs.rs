//! `/listlangs` handler

use crate::handlers::text_format;
use crate::utils::errors::Result;
use super::CommandContext;

/// Handle /listlangs: one line per known locale, in registration order
pub fn handle_listlangs(ctx: &CommandContext<'_>) -> Result<()> {
    ctx.reply_key(text_format::GREEN, "command.listlangs.header")?;

    let translator = ctx.manager.translator();
    let registry = translator.registry();
    for locale in registry.known_locales() {
        let line = match registry.lookup(locale).and_then(|t| t.display_name()) {
            Some(name) => format!("- {} ({})", locale, name),
            None => format!("- {}", locale),
        };
        ctx.send_raw(ctx.sender, text_format::GREEN, &line);
    }

    Ok(())
}
