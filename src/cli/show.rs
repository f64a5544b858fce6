//! Show command.
//!
//! Lists an entry's password history, most recent first.

use serde_json::json;
use tracing::info;

use crate::cli::{output, validate_id, Context};
use crate::error::Result;

/// Show history for `id`.
pub fn execute(ctx: &Context, id: &str, reveal: bool, json: bool) -> Result<()> {
    validate_id(id)?;
    info!("Showing history: {}", id);

    let entry = ctx.store.require(id)?;
    let views: Vec<_> = ctx
        .manager
        .get_history(entry)
        .iter()
        .enumerate()
        .map(|(i, record)| ctx.manager.format_for_display(record, i))
        .collect();

    if json {
        let rows: Vec<_> = views
            .iter()
            .map(|v| {
                json!({
                    "index": v.index,
                    "password": if reveal { &v.password } else { &v.masked },
                    "changedAt": v.changed_at.to_rfc3339(),
                    "date": v.formatted_date,
                    "relative": v.relative.to_string(),
                    "reason": v.reason,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if views.is_empty() {
        output::warn(&format!("no password history for {}", output::id(id)));
        return Ok(());
    }

    output::header(&format!("{} ({} of {})", id, views.len(), ctx.manager.max_size()));
    output::rule();
    for v in &views {
        let password = if reveal { &v.password } else { &v.masked };
        let reason = if v.reason.is_empty() { "-" } else { &v.reason };
        println!(
            "  {:>2}  {:<14}  {}  {}  {}",
            v.index,
            password,
            v.formatted_date,
            output::dimmed(&format!("{:<10}", v.relative.to_string())),
            reason
        );
    }

    Ok(())
}
