use crate::cli::formatters;
use crate::error::Result;

use super::{print_json, Ctx};

pub async fn dispatch_dashboard(ctx: &Ctx) -> Result<()> {
    use anyhow::Context;

    let summary = ctx
        .client
        .dashboard_summary()
        .await
        .context("Failed to load dashboard")?;

    if ctx.json {
        return print_json(&summary);
    }
    println!("{}", formatters::format_dashboard(&summary));
    Ok(())
}
