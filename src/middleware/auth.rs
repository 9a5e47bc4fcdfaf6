//! Permission checks
//!
//! Permission nodes are owned by the host; this module names the ones the
//! plugin uses and turns a failed check into an error.

use tracing::{debug, warn};
use crate::handlers::Host;
use crate::models::Audience;
use crate::utils::errors::{LangError, Result};

pub const PERM_SETLANG: &str = "languagemanager.command.setlang";
pub const PERM_MYLANG: &str = "languagemanager.command.mylang";
pub const PERM_LISTLANGS: &str = "languagemanager.command.listlangs";
pub const PERM_BASE: &str = "languagemanager.command.base";
pub const PERM_HELP: &str = "languagemanager.command.help";
pub const PERM_RELOAD: &str = "languagemanager.command.reload";
pub const PERM_SETDEFAULT: &str = "languagemanager.command.setdefault";
pub const PERM_SET: &str = "languagemanager.command.set";

/// Require `permission` for `sender`
pub fn require(host: &dyn Host, sender: &Audience, permission: &str) -> Result<()> {
    if host.has_permission(sender, permission) {
        debug!(sender = sender.display_name(), permission = permission, "Permission granted");
        Ok(())
    } else {
        warn!(sender = sender.display_name(), permission = permission, "Permission denied");
        Err(LangError::PermissionDenied(permission.to_string()))
    }
}
