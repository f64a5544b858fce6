//! Restore command.

use tracing::info;

use crate::cli::{output, validate_id, Context};
use crate::error::Result;

/// Restore the password at `index` for `id`.
pub fn execute(ctx: &mut Context, id: &str, index: usize) -> Result<()> {
    validate_id(id)?;
    info!("Restoring password: {} index {}", id, index);

    let entry = ctx.store.require(id)?;
    let restored = ctx.manager.restore_from_history(entry, index)?;

    ctx.store.upsert(restored);
    ctx.store.save()?;

    output::success(&format!("restored {} from record {}", output::id(id), index));
    output::hint(&format!("undo with: rewind restore {} 0", id));
    Ok(())
}
