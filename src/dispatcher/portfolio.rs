use serde_json::json;

use crate::cli::formatters;
use crate::error::Result;
use crate::reports;

use super::{print_json, Ctx};

/// The composite portfolio view: assets are authoritative and required,
/// quotes are an overlay that may be missing. A quote provider outage
/// degrades the market value and variation to "N/A" instead of failing the
/// whole command.
pub async fn dispatch_portfolio(ctx: &Ctx) -> Result<()> {
    use anyhow::Context;

    let assets = ctx
        .client
        .list_assets()
        .await
        .context("Failed to load assets")?;

    if assets.is_empty() {
        if ctx.json {
            return print_json(&json!({ "assets": [] }));
        }
        println!("{}", formatters::format_empty_list("assets"));
        return Ok(());
    }

    let totals = reports::portfolio_totals(&assets);

    let quotes = if reports::held_tickers(&assets).is_empty() {
        None
    } else {
        match ctx.client.portfolio_quotes().await {
            Ok(quotes) => Some(quotes),
            Err(err) => {
                tracing::warn!("Portfolio quote lookup failed: {}", err);
                None
            }
        }
    };

    let market_value = quotes
        .as_ref()
        .map(|quotes| reports::market_value(&assets, quotes));
    let variation = reports::unrealized_variation(market_value, totals.total_invested);

    if ctx.json {
        return print_json(&json!({
            "assets": assets,
            "totals": {
                "total_invested": totals.total_invested,
                "total_bought_value": totals.total_bought_value,
                "total_sold_value": totals.total_sold_value,
                "unique_asset_count": totals.unique_asset_count,
            },
            "market_value": market_value,
            "variation": variation.as_ref().map(|v| json!({
                "absolute": v.absolute,
                "percent": v.percent,
            })),
        }));
    }

    println!(
        "{}",
        formatters::format_portfolio_table(&assets, quotes.as_ref())
    );
    println!(
        "{}",
        formatters::format_portfolio_summary(&totals, market_value, variation.as_ref())
    );
    Ok(())
}
