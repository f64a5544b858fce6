//! Clear command.

use tracing::info;

use crate::cli::{output, validate_id, Context};
use crate::error::Result;

/// Remove all history for `id`.
pub fn execute(ctx: &mut Context, id: &str) -> Result<()> {
    validate_id(id)?;
    info!("Clearing history: {}", id);

    let entry = ctx.store.require(id)?;
    if !ctx.manager.has_history(entry) {
        output::warn(&format!("no password history for {}", output::id(id)));
        return Ok(());
    }

    let cleared = ctx.manager.clear_history(entry);
    ctx.store.upsert(cleared);
    ctx.store.save()?;

    output::success(&format!("cleared history for {}", output::id(id)));
    Ok(())
}
