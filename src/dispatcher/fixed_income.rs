use colored::Colorize;
use rust_decimal::Decimal;
use serde_json::json;

use crate::api::models::{FixedIncomeAssetPayload, FixedIncomeOperationPayload};
use crate::cli::{
    formatters, FixedIncomeAssetsCommands, FixedIncomeCommands, FixedIncomeOperationsCommands,
};
use crate::error::Result;
use crate::flows::run_mutation;
use crate::reports::render_projection;

use super::{parse_date, parse_decimal, print_json, prompt_exact, Ctx};

pub async fn dispatch_fixed_income(ctx: &Ctx, action: FixedIncomeCommands) -> Result<()> {
    match action {
        FixedIncomeCommands::Assets { action } => dispatch_fi_assets(ctx, action).await,
        FixedIncomeCommands::Operations { action } => dispatch_fi_operations(ctx, action).await,
        FixedIncomeCommands::Projection {
            asset_id,
            cdi_rate,
            ipca_rate,
        } => dispatch_projection(ctx, asset_id, cdi_rate, ipca_rate).await,
    }
}

async fn dispatch_fi_assets(ctx: &Ctx, action: FixedIncomeAssetsCommands) -> Result<()> {
    match action {
        FixedIncomeAssetsCommands::List => fi_assets_list(ctx).await,
        FixedIncomeAssetsCommands::Show { asset_id } => fi_asset_show(ctx, asset_id).await,
        FixedIncomeAssetsCommands::Add {
            asset_id,
            issuer,
            product_type,
            indexer,
            rate,
            issue_date,
            maturity_date,
            custody_fee,
        } => {
            let payload = FixedIncomeAssetPayload {
                asset_id,
                issuer,
                product_type: product_type.parse()?,
                indexer: indexer.parse()?,
                rate: parse_decimal(&rate, "rate")?,
                issue_date: parse_date(&issue_date)?,
                maturity_date: parse_date(&maturity_date)?,
                custody_fee: custody_fee
                    .map(|fee| parse_decimal(&fee, "custody fee"))
                    .transpose()?,
            };
            fi_asset_add(ctx, payload).await
        }
        FixedIncomeAssetsCommands::Edit {
            asset_id,
            issuer,
            product_type,
            indexer,
            rate,
            issue_date,
            maturity_date,
            custody_fee,
        } => {
            fi_asset_edit(
                ctx, asset_id, issuer, product_type, indexer, rate, issue_date, maturity_date,
                custody_fee,
            )
            .await
        }
        FixedIncomeAssetsCommands::Remove { asset_id, yes } => {
            fi_asset_remove(ctx, asset_id, yes).await
        }
    }
}

async fn fi_assets_list(ctx: &Ctx) -> Result<()> {
    use anyhow::Context;
    let assets = ctx
        .client
        .list_fixed_income_assets()
        .await
        .context("Failed to load fixed income assets")?;

    if ctx.json {
        return print_json(&assets);
    }
    if assets.is_empty() {
        println!("{}", formatters::format_empty_list("fixed income assets"));
        return Ok(());
    }
    println!("{}", formatters::format_fixed_income_table(&assets));
    Ok(())
}

async fn fi_asset_show(ctx: &Ctx, asset_id: i64) -> Result<()> {
    use anyhow::Context;

    let (asset, operations) = tokio::try_join!(
        ctx.client.get_fixed_income_asset(asset_id),
        ctx.client.list_fixed_income_operations(asset_id)
    )
    .with_context(|| format!("Failed to load fixed income asset {}", asset_id))?;

    if ctx.json {
        return print_json(&json!({
            "asset": asset,
            "operations": operations,
        }));
    }

    println!("{}", formatters::format_fixed_income_detail(&asset));
    if operations.is_empty() {
        println!("{}", formatters::format_empty_list("fixed income operations"));
    } else {
        println!(
            "Operations\n{}",
            formatters::format_fixed_income_operations(&operations)
        );
    }
    Ok(())
}

async fn fi_asset_add(ctx: &Ctx, payload: FixedIncomeAssetPayload) -> Result<()> {
    let outcome = run_mutation(
        || async {
            let created = ctx.client.create_fixed_income_asset(&payload).await?;
            Ok(format!(
                "Fixed income position registered (id {})",
                created.fixed_income_id
            ))
        },
        || ctx.client.list_fixed_income_assets(),
    )
    .await?;

    if ctx.json {
        return print_json(&json!({
            "message": outcome.state.message(),
            "assets": outcome.data,
        }));
    }
    if let Some(message) = outcome.state.message() {
        println!("{}", formatters::format_success(message));
    }
    println!("{}", formatters::format_fixed_income_table(&outcome.data));
    Ok(())
}

#[allow(clippy::too_many_arguments)]
async fn fi_asset_edit(
    ctx: &Ctx,
    asset_id: i64,
    issuer: Option<String>,
    product_type: Option<String>,
    indexer: Option<String>,
    rate: Option<String>,
    issue_date: Option<String>,
    maturity_date: Option<String>,
    custody_fee: Option<String>,
) -> Result<()> {
    use anyhow::Context;

    let current = ctx
        .client
        .get_fixed_income_asset(asset_id)
        .await
        .with_context(|| format!("Failed to load fixed income asset {}", asset_id))?;

    let payload = FixedIncomeAssetPayload {
        asset_id,
        issuer: issuer.unwrap_or(current.issuer),
        product_type: match product_type {
            Some(product_type) => product_type.parse()?,
            None => current.product_type,
        },
        indexer: match indexer {
            Some(indexer) => indexer.parse()?,
            None => current.indexer,
        },
        rate: match rate {
            Some(rate) => parse_decimal(&rate, "rate")?,
            None => current.rate,
        },
        issue_date: match issue_date {
            Some(date) => parse_date(&date)?,
            None => current.issue_date,
        },
        maturity_date: match maturity_date {
            Some(date) => parse_date(&date)?,
            None => current.maturity_date,
        },
        custody_fee: match custody_fee {
            Some(fee) => Some(parse_decimal(&fee, "custody fee")?),
            None => Some(current.custody_fee),
        },
    };

    let outcome = run_mutation(
        || async {
            let ack = ctx.client.update_fixed_income_asset(asset_id, &payload).await?;
            Ok(ack.message)
        },
        || ctx.client.list_fixed_income_assets(),
    )
    .await?;

    if ctx.json {
        return print_json(&json!({
            "message": outcome.state.message(),
            "assets": outcome.data,
        }));
    }
    if let Some(message) = outcome.state.message() {
        println!("{}", formatters::format_success(message));
    }
    println!("{}", formatters::format_fixed_income_table(&outcome.data));
    Ok(())
}

async fn fi_asset_remove(ctx: &Ctx, asset_id: i64, yes: bool) -> Result<()> {
    if !yes {
        println!(
            "{} This removes the fixed income position on asset {} and its operations.",
            "⚠".yellow().bold(),
            asset_id
        );
        println!("Type 'yes' to confirm:");
        if !prompt_exact(&["yes"])? {
            println!("Aborted.");
            return Ok(());
        }
    }

    let outcome = run_mutation(
        || async {
            let ack = ctx.client.delete_fixed_income_asset(asset_id).await?;
            Ok(ack.message)
        },
        || ctx.client.list_fixed_income_assets(),
    )
    .await?;

    if ctx.json {
        return print_json(&json!({
            "message": outcome.state.message(),
            "assets": outcome.data,
        }));
    }
    if let Some(message) = outcome.state.message() {
        println!("{}", formatters::format_success(message));
    }
    if outcome.data.is_empty() {
        println!("{}", formatters::format_empty_list("fixed income assets"));
    } else {
        println!("{}", formatters::format_fixed_income_table(&outcome.data));
    }
    Ok(())
}

async fn dispatch_fi_operations(ctx: &Ctx, action: FixedIncomeOperationsCommands) -> Result<()> {
    match action {
        FixedIncomeOperationsCommands::List { asset_id } => {
            use anyhow::Context;
            let operations = ctx
                .client
                .list_fixed_income_operations(asset_id)
                .await
                .with_context(|| {
                    format!("Failed to load fixed income operations for asset {}", asset_id)
                })?;

            if ctx.json {
                return print_json(&operations);
            }
            if operations.is_empty() {
                println!("{}", formatters::format_empty_list("fixed income operations"));
                return Ok(());
            }
            println!("{}", formatters::format_fixed_income_operations(&operations));
            Ok(())
        }
        FixedIncomeOperationsCommands::Add {
            asset_id,
            operation_type,
            amount,
            date,
            net_amount,
            ir_amount,
        } => {
            let payload = FixedIncomeOperationPayload {
                asset_id,
                operation_type: operation_type.parse()?,
                amount: parse_decimal(&amount, "amount")?,
                trade_date: parse_date(&date)?,
                net_amount: net_amount
                    .map(|amount| parse_decimal(&amount, "net amount"))
                    .transpose()?,
                ir_amount: ir_amount
                    .map(|amount| parse_decimal(&amount, "IR amount"))
                    .transpose()?,
            };

            let outcome = run_mutation(
                || async {
                    let created = ctx.client.create_fixed_income_operation(&payload).await?;
                    Ok(format!(
                        "{} of {} recorded (id {})",
                        payload.operation_type,
                        crate::utils::format_currency(payload.amount),
                        created.operation_id
                    ))
                },
                || ctx.client.list_fixed_income_operations(asset_id),
            )
            .await?;

            if ctx.json {
                return print_json(&json!({
                    "message": outcome.state.message(),
                    "operations": outcome.data,
                }));
            }
            if let Some(message) = outcome.state.message() {
                println!("{}", formatters::format_success(message));
            }
            println!(
                "{}",
                formatters::format_fixed_income_operations(&outcome.data)
            );
            Ok(())
        }
    }
}

/// The backend computes the projection from the rate assumptions; command
/// line flags override the configured defaults per invocation.
async fn dispatch_projection(
    ctx: &Ctx,
    asset_id: i64,
    cdi_rate: Option<String>,
    ipca_rate: Option<String>,
) -> Result<()> {
    use anyhow::Context;

    let cdi_rate: Decimal = match cdi_rate {
        Some(rate) => parse_decimal(&rate, "CDI rate")?,
        None => ctx.config.cdi_rate,
    };
    let ipca_rate: Decimal = match ipca_rate {
        Some(rate) => parse_decimal(&rate, "IPCA rate")?,
        None => ctx.config.ipca_rate,
    };

    let projection = ctx
        .client
        .fixed_income_projection(asset_id, cdi_rate, ipca_rate)
        .await
        .with_context(|| format!("Failed to load projection for asset {}", asset_id))?;

    let view = render_projection(projection);

    if ctx.json {
        return print_json(&json!({
            "projection": view.projection,
            "net_gain_percent": view.net_gain_percent,
        }));
    }
    println!("{}", formatters::format_projection(&view));
    Ok(())
}
