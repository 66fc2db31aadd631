use std::path::Path;

use serde_json::json;

use crate::cli::formatters;
use crate::error::Result;
use crate::flows::run_upload;

use super::{print_json, Ctx};

/// Ships the report file to the backend import pipeline. The file is
/// validated locally (exists, regular, non-empty) before any bytes move;
/// parsing and deduplication are entirely server-side.
pub async fn dispatch_import(ctx: &Ctx, file: &str, broker: &str) -> Result<()> {
    let path = Path::new(file);

    let outcome = run_upload(path, || ctx.client.import_report(broker, path)).await?;
    let report = outcome.data;

    if ctx.json {
        return print_json(&json!({ "summary": report.summary }));
    }
    println!("{}", formatters::format_import_summary(&report.summary));
    Ok(())
}
