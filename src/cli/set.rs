//! Set command.
//!
//! Changes an entry's password, pushing the previous one into history.

use tracing::info;

use crate::cli::{output, read_password, validate_id, Context};
use crate::core::domain::VaultEntry;
use crate::error::Result;

/// Set a new password on `id`, creating the entry if needed.
pub fn execute(
    ctx: &mut Context,
    id: &str,
    password: Option<String>,
    reason: Option<&str>,
) -> Result<()> {
    validate_id(id)?;
    info!("Setting password: {}", id);

    let password = read_password(password, &format!("New password for {}", id), true)?;

    let Some(entry) = ctx.store.get(id).cloned() else {
        ctx.store.upsert(VaultEntry::new(id, password.as_str()));
        ctx.store.save()?;
        output::success(&format!("created {}", output::id(id)));
        return Ok(());
    };

    if entry.password() == Some(password.as_str()) {
        output::warn(&format!("{} already uses this password", output::id(id)));
        return Ok(());
    }

    if ctx.config.history.warn_on_reuse && ctx.manager.is_in_history(&entry, &password) {
        output::warn(&format!(
            "this password was used before for {}",
            output::id(id)
        ));
    }

    let updated = ctx
        .manager
        .record_change(&entry, &password, reason)
        .with_password(password.as_str());
    let kept = ctx.manager.get_history(&updated).len();

    ctx.store.upsert(updated);
    ctx.store.save()?;

    output::success(&format!("updated {}", output::id(id)));
    output::kv("history:", format!("{} record(s)", kept));
    Ok(())
}
