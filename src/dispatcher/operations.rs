use colored::Colorize;
use serde_json::json;

use crate::api::models::{Operation, OperationPayload};
use crate::cli::{formatters, OperationsCommands};
use crate::error::Result;
use crate::flows::run_mutation;

use super::{parse_date, parse_decimal, print_json, prompt_exact, Ctx};

pub async fn dispatch_operations(ctx: &Ctx, action: OperationsCommands) -> Result<()> {
    match action {
        OperationsCommands::List => dispatch_operations_list(ctx).await,
        OperationsCommands::Show { id } => dispatch_operation_show(ctx, id).await,
        OperationsCommands::Add {
            asset_id,
            movement,
            quantity,
            price,
            date,
            market,
            institution,
        } => {
            dispatch_operation_add(ctx, asset_id, &movement, quantity, &price, &date, market, institution)
                .await
        }
        OperationsCommands::Edit {
            id,
            movement,
            quantity,
            price,
            date,
            market,
            institution,
        } => dispatch_operation_edit(ctx, id, movement, quantity, price, date, market, institution).await,
        OperationsCommands::Remove { id, yes } => dispatch_operation_remove(ctx, id, yes).await,
    }
}

async fn dispatch_operations_list(ctx: &Ctx) -> Result<()> {
    use anyhow::Context;
    let operations = ctx
        .client
        .list_operations()
        .await
        .context("Failed to load operations")?;

    if ctx.json {
        return print_json(&operations);
    }
    if operations.is_empty() {
        println!("{}", formatters::format_empty_list("operations"));
        return Ok(());
    }
    println!("{}", formatters::format_operations_table(&operations));
    Ok(())
}

async fn dispatch_operation_show(ctx: &Ctx, id: i64) -> Result<()> {
    use anyhow::Context;
    let operation = ctx
        .client
        .get_operation(id)
        .await
        .with_context(|| format!("Failed to load operation {}", id))?;

    if ctx.json {
        return print_json(&operation);
    }
    println!(
        "{}",
        formatters::format_operations_table(std::slice::from_ref(&operation))
    );
    Ok(())
}

#[allow(clippy::too_many_arguments)]
async fn dispatch_operation_add(
    ctx: &Ctx,
    asset_id: i64,
    movement: &str,
    quantity: i64,
    price: &str,
    date: &str,
    market: Option<String>,
    institution: Option<String>,
) -> Result<()> {
    let payload = OperationPayload {
        asset_id,
        movement_type: movement.parse()?,
        quantity,
        price: parse_decimal(price, "price")?,
        trade_date: parse_date(date)?,
        market,
        institution,
    };

    let outcome = run_mutation(
        || async {
            ctx.client.create_operation(&payload).await?;
            Ok(format!(
                "{} {} @ {} recorded",
                payload.movement_type,
                payload.quantity,
                crate::utils::format_currency(payload.price)
            ))
        },
        || ctx.client.list_operations(),
    )
    .await?;

    report_mutation(ctx, &outcome.state, &outcome.data)
}

/// Edits are supersede calls: the backend cancels the old record and mints a
/// replacement with a new id, so the list must be reloaded rather than
/// patched in place.
#[allow(clippy::too_many_arguments)]
async fn dispatch_operation_edit(
    ctx: &Ctx,
    id: i64,
    movement: Option<String>,
    quantity: Option<i64>,
    price: Option<String>,
    date: Option<String>,
    market: Option<String>,
    institution: Option<String>,
) -> Result<()> {
    use anyhow::Context;

    let current = ctx
        .client
        .get_operation(id)
        .await
        .with_context(|| format!("Failed to load operation {}", id))?;

    let payload = OperationPayload {
        asset_id: current.asset_id,
        movement_type: match movement {
            Some(movement) => movement.parse()?,
            None => current.movement_type,
        },
        quantity: quantity.unwrap_or(current.quantity),
        price: match price {
            Some(price) => parse_decimal(&price, "price")?,
            None => current.price,
        },
        trade_date: match date {
            Some(date) => parse_date(&date)?,
            None => current.trade_date,
        },
        market: market.or(current.market),
        institution: institution.or(current.institution),
    };

    let outcome = run_mutation(
        || async {
            let superseded = ctx.client.supersede_operation(id, &payload).await?;
            Ok(format!(
                "{} (operation {} → {})",
                superseded.message, superseded.old_id, superseded.new_id
            ))
        },
        || ctx.client.list_operations(),
    )
    .await?;

    report_mutation(ctx, &outcome.state, &outcome.data)
}

async fn dispatch_operation_remove(ctx: &Ctx, id: i64, yes: bool) -> Result<()> {
    if !yes {
        println!(
            "{} This removes operation {} and recomputes the asset's position.",
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
            let ack = ctx.client.delete_operation(id).await?;
            Ok(ack.message)
        },
        || ctx.client.list_operations(),
    )
    .await?;

    report_mutation(ctx, &outcome.state, &outcome.data)
}

fn report_mutation(
    ctx: &Ctx,
    state: &crate::flows::FlowState,
    operations: &[Operation],
) -> Result<()> {
    if ctx.json {
        return print_json(&json!({
            "message": state.message(),
            "operations": operations,
        }));
    }

    if let Some(message) = state.message() {
        println!("{}", formatters::format_success(message));
    }
    if operations.is_empty() {
        println!("{}", formatters::format_empty_list("operations"));
    } else {
        println!("{}", formatters::format_operations_table(operations));
    }
    Ok(())
}
