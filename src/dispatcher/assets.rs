use colored::Colorize;
use serde_json::json;

use crate::api::models::{Asset, AssetPayload};
use crate::cli::{formatters, AssetsCommands};
use crate::error::Result;
use crate::flows::run_mutation;
use crate::reports;

use super::{print_json, prompt_exact, Ctx};

pub async fn dispatch_assets(ctx: &Ctx, action: AssetsCommands) -> Result<()> {
    match action {
        AssetsCommands::List => dispatch_assets_list(ctx).await,
        AssetsCommands::Show { id, no_quotes } => dispatch_asset_show(ctx, id, no_quotes).await,
        AssetsCommands::Add {
            ticker,
            asset_class,
            asset_type,
            name,
        } => dispatch_asset_add(ctx, ticker, asset_class, asset_type, name).await,
        AssetsCommands::Edit {
            id,
            ticker,
            asset_class,
            asset_type,
            name,
        } => dispatch_asset_edit(ctx, id, ticker, asset_class, asset_type, name).await,
        AssetsCommands::Remove { id, yes } => dispatch_asset_remove(ctx, id, yes).await,
    }
}

async fn dispatch_assets_list(ctx: &Ctx) -> Result<()> {
    use anyhow::Context;
    let assets = ctx.client.list_assets().await.context("Failed to load assets")?;

    if ctx.json {
        return print_json(&assets);
    }
    if assets.is_empty() {
        println!("{}", formatters::format_empty_list("assets"));
        return Ok(());
    }
    println!("{}", formatters::format_assets_table(&assets));
    Ok(())
}

async fn dispatch_asset_show(ctx: &Ctx, id: i64, no_quotes: bool) -> Result<()> {
    use anyhow::Context;

    // asset and its operations are independent; fetch them concurrently
    let (asset, operations) = tokio::try_join!(
        ctx.client.get_asset(id),
        ctx.client.asset_operations(id)
    )
    .with_context(|| format!("Failed to load asset {}", id))?;

    // quotes are an overlay: a provider outage degrades the view, it does
    // not fail the command
    let quotes = if no_quotes || asset.current_position <= 0 {
        None
    } else {
        match ctx.client.batch_quotes(&[asset.ticker.clone()]).await {
            Ok(quotes) => Some(quotes),
            Err(err) => {
                tracing::warn!("Quote lookup failed for {}: {}", asset.ticker, err);
                None
            }
        }
    };

    if ctx.json {
        return print_json(&json!({
            "asset": asset,
            "operations": operations,
            "quotes": quotes,
        }));
    }

    println!("{}", formatters::format_asset_detail(&asset));
    println!("{}", formatters::format_asset_market_value(&asset, quotes.as_ref()));

    if operations.is_empty() {
        println!("{}", formatters::format_empty_list("operations"));
        return Ok(());
    }

    println!("Operations\n{}", formatters::format_operations_table(&operations));

    let summary = reports::market_summary(&operations);
    println!("\nBy market\n{}", formatters::format_market_summary(&summary));
    Ok(())
}

async fn dispatch_asset_add(
    ctx: &Ctx,
    ticker: String,
    asset_class: String,
    asset_type: String,
    name: String,
) -> Result<()> {
    let payload = AssetPayload {
        ticker: ticker.to_uppercase(),
        asset_class,
        asset_type,
        product_name: name,
    };

    let outcome = run_mutation(
        || async {
            let created = ctx.client.create_asset(&payload).await?;
            Ok(format!(
                "Asset {} created (id {})",
                payload.ticker, created.asset_id
            ))
        },
        || ctx.client.list_assets(),
    )
    .await?;

    report_mutation(ctx, &outcome.state, &outcome.data)
}

async fn dispatch_asset_edit(
    ctx: &Ctx,
    id: i64,
    ticker: Option<String>,
    asset_class: Option<String>,
    asset_type: Option<String>,
    name: Option<String>,
) -> Result<()> {
    use anyhow::Context;

    // replace semantics: start from the current record, overlay the flags,
    // send the full payload back
    let current = ctx
        .client
        .get_asset(id)
        .await
        .with_context(|| format!("Failed to load asset {}", id))?;

    let payload = AssetPayload {
        ticker: ticker.map(|t| t.to_uppercase()).unwrap_or(current.ticker),
        asset_class: asset_class.unwrap_or(current.asset_class),
        asset_type: asset_type.unwrap_or(current.asset_type),
        product_name: name.unwrap_or(current.product_name),
    };

    let outcome = run_mutation(
        || async {
            let ack = ctx.client.update_asset(id, &payload).await?;
            Ok(ack.message)
        },
        || ctx.client.list_assets(),
    )
    .await?;

    report_mutation(ctx, &outcome.state, &outcome.data)
}

async fn dispatch_asset_remove(ctx: &Ctx, id: i64, yes: bool) -> Result<()> {
    if !yes {
        println!(
            "{} This removes asset {} and all of its operations.",
            "⚠".yellow().bold(),
            id
        );
        println!("Type 'yes' to confirm:");
        if !prompt_exact(&["yes"])? {
            println!("Aborted.");
            return Ok(());
        }
    }

    let outcome = run_mutation(
        || async {
            let ack = ctx.client.delete_asset(id).await?;
            Ok(ack.message)
        },
        || ctx.client.list_assets(),
    )
    .await?;

    report_mutation(ctx, &outcome.state, &outcome.data)
}

/// Prints the confirmation and the reloaded list, which is the authoritative
/// post-mutation state.
fn report_mutation(ctx: &Ctx, state: &crate::flows::FlowState, assets: &[Asset]) -> Result<()> {
    if ctx.json {
        return print_json(&json!({
            "message": state.message(),
            "assets": assets,
        }));
    }

    if let Some(message) = state.message() {
        println!("{}", formatters::format_success(message));
    }
    if assets.is_empty() {
        println!("{}", formatters::format_empty_list("assets"));
    } else {
        println!("{}", formatters::format_assets_table(assets));
    }
    Ok(())
}
