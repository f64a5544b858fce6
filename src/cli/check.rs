//! Check command.
//!
//! Reports whether a password already appears in an entry's history.

use tracing::info;

use crate::cli::{output, read_password, validate_id, Context};
use crate::error::Result;

/// Check `password` against the history of `id`.
pub fn execute(ctx: &Context, id: &str, password: Option<String>) -> Result<()> {
    validate_id(id)?;
    info!("Checking reuse: {}", id);

    let entry = ctx.store.require(id)?;
    let password = read_password(password, "Password to check", false)?;

    if ctx.manager.is_in_history(entry, &password) {
        output::warn(&format!("found in history of {}", output::id(id)));
    } else if entry.password() == Some(password.as_str()) {
        output::warn(&format!("this is the current password of {}", output::id(id)));
    } else {
        output::success(&format!("not in history of {}", output::id(id)));
    }
    Ok(())
}
