//! Command dispatch
//!
//! Routes parsed CLI commands to backend calls, report computations and
//! formatters. Each submodule owns one command group; shared input parsing
//! and confirmation helpers live here.

pub mod assets;
pub mod dashboard;
pub mod fixed_income;
pub mod imports;
pub mod operations;
pub mod portfolio;
pub mod quotes;

use std::io::{stdin, stdout, Write};

use anyhow::Context;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::api::ApiClient;
use crate::cli::Commands;
use crate::config::ClientConfig;
use crate::error::Result;

/// Everything a command handler needs: the API client, the resolved
/// configuration and the output mode.
pub struct Ctx {
    pub client: ApiClient,
    pub config: ClientConfig,
    pub json: bool,
}

pub async fn dispatch(ctx: &Ctx, command: Commands) -> Result<()> {
    match command {
        Commands::Import { file, broker } => imports::dispatch_import(ctx, &file, &broker).await,
        Commands::Dashboard => dashboard::dispatch_dashboard(ctx).await,
        Commands::Portfolio => portfolio::dispatch_portfolio(ctx).await,
        Commands::Assets { action } => assets::dispatch_assets(ctx, action).await,
        Commands::Operations { action } => operations::dispatch_operations(ctx, action).await,
        Commands::FixedIncome { action } => fixed_income::dispatch_fixed_income(ctx, action).await,
        Commands::Quotes { action } => quotes::dispatch_quotes(ctx, action).await,
    }
}

pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Reads one line and accepts only an exact match. EOF counts as a refusal.
pub(crate) fn prompt_exact(allowed: &[&str]) -> Result<bool> {
    let mut input = String::new();
    stdout().flush()?;
    if stdin().read_line(&mut input)? == 0 {
        return Ok(false);
    }
    let trimmed = input.trim();
    Ok(allowed.contains(&trimmed))
}

pub(crate) fn parse_decimal(input: &str, what: &str) -> Result<Decimal> {
    input
        .parse::<Decimal>()
        .with_context(|| format!("Invalid {}: {}", what, input))
}

pub(crate) fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}' (expected YYYY-MM-DD)", input))
}
