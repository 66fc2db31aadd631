//! Output formatting for CLI display
//!
//! Keeps all terminal rendering in one place, separating data retrieval and
//! computation from presentation. Every function returns a string so the
//! dispatchers stay printable-agnostic and the formatters stay testable.

use std::collections::BTreeMap;

use colored::Colorize;
use rust_decimal::Decimal;
use tabled::{
    settings::{object::Columns, Alignment, Style},
    Table, Tabled,
};

use crate::api::models::{
    Asset, DashboardSummary, FixedIncomeAsset, FixedIncomeOperation, ImportSummary, Operation,
    Quote, QuotesMap,
};
use crate::reports::{MarketTotals, PortfolioTotals, ProjectionView, Variation};
use crate::utils::{format_currency, format_percent, format_percent_signed, format_quantity};

const NOT_AVAILABLE: &str = "N/A";

/// Signed money with gain/loss coloring.
fn colorize_currency(value: Decimal) -> String {
    let formatted = format_currency(value);
    if value >= Decimal::ZERO {
        formatted.green().to_string()
    } else {
        formatted.red().to_string()
    }
}

fn colorize_percent(value: Decimal) -> String {
    let formatted = format_percent_signed(value);
    if value >= Decimal::ZERO {
        formatted.green().to_string()
    } else {
        formatted.red().to_string()
    }
}

pub fn format_success(message: &str) -> String {
    format!("{} {}", "✓".green().bold(), message)
}

pub fn format_empty_list(what: &str) -> String {
    format!("{} No {} found.", "ℹ".blue().bold(), what)
}

// ============ Assets ============

pub fn format_assets_table(assets: &[Asset]) -> String {
    #[derive(Tabled)]
    struct AssetRow {
        #[tabled(rename = "ID")]
        id: i64,
        #[tabled(rename = "Ticker")]
        ticker: String,
        #[tabled(rename = "Class")]
        asset_class: String,
        #[tabled(rename = "Type")]
        asset_type: String,
        #[tabled(rename = "Position")]
        position: String,
        #[tabled(rename = "Avg Price")]
        average_price: String,
        #[tabled(rename = "Invested")]
        invested: String,
        #[tabled(rename = "Ops")]
        operations: i64,
    }

    let rows: Vec<AssetRow> = assets
        .iter()
        .map(|asset| AssetRow {
            id: asset.id,
            ticker: asset.ticker.clone(),
            asset_class: asset.asset_class.clone(),
            asset_type: asset.asset_type.clone(),
            position: format_quantity(asset.current_position),
            average_price: asset
                .average_price
                .map(format_currency)
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            invested: format_currency(asset.total_bought_value - asset.total_sold_value),
            operations: asset.total_operations,
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::modern());
    table.modify(Columns::new(4..), Alignment::right());
    table.to_string()
}

pub fn format_asset_detail(asset: &Asset) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "\n{} {} — {}\n",
        "📊".cyan().bold(),
        asset.ticker.cyan().bold(),
        asset.product_name
    ));
    output.push_str(&format!(
        "  Class/Type:    {} / {}\n",
        asset.asset_class, asset.asset_type
    ));
    output.push_str(&format!(
        "  Position:      {}\n",
        format_quantity(asset.current_position)
    ));
    output.push_str(&format!(
        "  Avg Price:     {}\n",
        asset
            .average_price
            .map(format_currency)
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    ));
    output.push_str(&format!(
        "  Invested:      {}\n",
        format_currency(asset.total_bought_value - asset.total_sold_value)
    ));
    output.push_str(&format!("  Operations:    {}\n", asset.total_operations));
    output
}

/// Market value line for a detail view; quotes may have failed (degraded
/// render) or the position may be flat.
pub fn format_asset_market_value(asset: &Asset, quotes: Option<&QuotesMap>) -> String {
    let price = quotes.and_then(|quotes| {
        quotes
            .get(&asset.ticker)
            .and_then(|quote| quote.as_ref())
            .map(|quote| quote.price)
    });

    match price {
        Some(price) if asset.current_position > 0 => {
            let value = price * Decimal::from(asset.current_position);
            format!(
                "  Last Price:    {}\n  Market Value:  {}\n",
                format_currency(price),
                format_currency(value)
            )
        }
        _ => format!("  Last Price:    {}\n", NOT_AVAILABLE),
    }
}

// ============ Operations ============

pub fn format_operations_table(operations: &[Operation]) -> String {
    #[derive(Tabled)]
    struct OperationRow {
        #[tabled(rename = "ID")]
        id: i64,
        #[tabled(rename = "Date")]
        date: String,
        #[tabled(rename = "Ticker")]
        ticker: String,
        #[tabled(rename = "Type")]
        movement: String,
        #[tabled(rename = "Quantity")]
        quantity: String,
        #[tabled(rename = "Price")]
        price: String,
        #[tabled(rename = "Value")]
        value: String,
        #[tabled(rename = "Market")]
        market: String,
        #[tabled(rename = "Source")]
        source: String,
    }

    let rows: Vec<OperationRow> = operations
        .iter()
        .map(|op| OperationRow {
            id: op.id,
            date: op.trade_date.format("%d/%m/%Y").to_string(),
            ticker: op.ticker.clone(),
            movement: if op.movement_type.is_buy() {
                op.movement_type.as_str().green().to_string()
            } else {
                op.movement_type.as_str().red().to_string()
            },
            quantity: format_quantity(op.quantity),
            price: format_currency(op.price),
            value: format_currency(op.value),
            market: op.market.clone().unwrap_or_else(|| "-".to_string()),
            source: op.source.clone(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::modern());
    table.modify(Columns::new(4..7), Alignment::right());
    table.to_string()
}

pub fn format_market_summary(summary: &BTreeMap<String, MarketTotals>) -> String {
    #[derive(Tabled)]
    struct MarketRow {
        #[tabled(rename = "Market")]
        market: String,
        #[tabled(rename = "Bought")]
        bought: String,
        #[tabled(rename = "Sold")]
        sold: String,
        #[tabled(rename = "Operations")]
        operations: usize,
    }

    let rows: Vec<MarketRow> = summary
        .iter()
        .map(|(market, totals)| MarketRow {
            market: market.clone(),
            bought: format_quantity(totals.bought),
            sold: format_quantity(totals.sold),
            operations: totals.operation_count,
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.modify(Columns::new(1..), Alignment::right());
    table.to_string()
}

// ============ Portfolio ============

pub fn format_portfolio_table(assets: &[Asset], quotes: Option<&QuotesMap>) -> String {
    #[derive(Tabled)]
    struct PositionRow {
        #[tabled(rename = "Ticker")]
        ticker: String,
        #[tabled(rename = "Class")]
        asset_class: String,
        #[tabled(rename = "Position")]
        position: String,
        #[tabled(rename = "Avg Price")]
        average_price: String,
        #[tabled(rename = "Invested")]
        invested: String,
        #[tabled(rename = "Price")]
        price: String,
        #[tabled(rename = "Value")]
        value: String,
    }

    let rows: Vec<PositionRow> = assets
        .iter()
        .filter(|asset| asset.current_position > 0)
        .map(|asset| {
            let price = quotes.and_then(|quotes| {
                quotes
                    .get(&asset.ticker)
                    .and_then(|quote| quote.as_ref())
                    .map(|quote| quote.price)
            });
            PositionRow {
                ticker: asset.ticker.clone(),
                asset_class: asset.asset_class.clone(),
                position: format_quantity(asset.current_position),
                average_price: asset
                    .average_price
                    .map(format_currency)
                    .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
                invested: format_currency(asset.total_bought_value - asset.total_sold_value),
                price: price
                    .map(format_currency)
                    .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
                value: price
                    .map(|p| format_currency(p * Decimal::from(asset.current_position)))
                    .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            }
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::modern());
    table.modify(Columns::new(2..), Alignment::right());
    table.to_string()
}

pub fn format_portfolio_summary(
    totals: &PortfolioTotals,
    market_value: Option<Decimal>,
    variation: Option<&Variation>,
) -> String {
    let mut output = String::new();
    output.push_str(&format!("\n{}\n", "━".repeat(60).bright_black()));
    output.push_str(&format!(
        "{:<18} {}\n",
        "Assets:".bold(),
        totals.unique_asset_count
    ));
    output.push_str(&format!(
        "{:<18} {}\n",
        "Total Bought:".bold(),
        format_currency(totals.total_bought_value)
    ));
    output.push_str(&format!(
        "{:<18} {}\n",
        "Total Sold:".bold(),
        format_currency(totals.total_sold_value)
    ));
    output.push_str(&format!(
        "{:<18} {}\n",
        "Total Invested:".bold(),
        format_currency(totals.total_invested)
    ));
    output.push_str(&format!(
        "{:<18} {}\n",
        "Market Value:".bold(),
        market_value
            .map(format_currency)
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    ));
    match variation {
        Some(variation) => {
            output.push_str(&format!(
                "{:<18} {} ({})\n",
                "Variation:".bold(),
                colorize_currency(variation.absolute),
                colorize_percent(variation.percent)
            ));
        }
        None => {
            output.push_str(&format!("{:<18} {}\n", "Variation:".bold(), NOT_AVAILABLE));
        }
    }
    output
}

// ============ Dashboard ============

pub fn format_dashboard(summary: &DashboardSummary) -> String {
    let mut output = String::new();
    output.push_str(&format!("\n{} Dashboard\n\n", "📊".cyan().bold()));
    output.push_str(&format!(
        "{:<18} {}\n",
        "Active Assets:".bold(),
        summary.total_assets
    ));
    output.push_str(&format!(
        "{:<18} {}\n",
        "Total Invested:".bold(),
        format_currency(summary.total_invested)
    ));
    output.push_str(&format!(
        "{:<18} {}\n",
        "Current Value:".bold(),
        format_currency(summary.current_value)
    ));
    output.push_str(&format!(
        "{:<18} {} ({})\n",
        "Daily Change:".bold(),
        colorize_currency(summary.daily_change),
        colorize_percent(summary.daily_change_percent)
    ));

    if !summary.top_positions.is_empty() {
        #[derive(Tabled)]
        struct TopRow {
            #[tabled(rename = "Ticker")]
            ticker: String,
            #[tabled(rename = "Name")]
            name: String,
            #[tabled(rename = "Quantity")]
            quantity: String,
            #[tabled(rename = "Avg Price")]
            average_price: String,
            #[tabled(rename = "Invested")]
            invested: String,
        }

        let rows: Vec<TopRow> = summary
            .top_positions
            .iter()
            .map(|position| TopRow {
                ticker: position.ticker.clone(),
                name: position.product_name.clone(),
                quantity: format_quantity(position.quantity),
                average_price: format_currency(position.average_price),
                invested: format_currency(position.invested_value),
            })
            .collect();

        let mut table = Table::new(rows);
        table.with(Style::rounded());
        table.modify(Columns::new(2..), Alignment::right());
        output.push_str(&format!("\nTop Positions\n{}\n", table));
    }

    if !summary.asset_allocation.is_empty() {
        #[derive(Tabled)]
        struct AllocationRow {
            #[tabled(rename = "Class")]
            asset_class: String,
            #[tabled(rename = "Assets")]
            count: i64,
            #[tabled(rename = "Value")]
            value: String,
            #[tabled(rename = "Share")]
            share: String,
        }

        let rows: Vec<AllocationRow> = summary
            .asset_allocation
            .iter()
            .map(|slice| AllocationRow {
                asset_class: slice.asset_class.clone(),
                count: slice.count,
                value: format_currency(slice.value),
                share: format_percent(slice.percentage),
            })
            .collect();

        let mut table = Table::new(rows);
        table.with(Style::rounded());
        table.modify(Columns::new(1..), Alignment::right());
        output.push_str(&format!("\nAllocation\n{}\n", table));
    }

    if !summary.recent_operations.is_empty() {
        #[derive(Tabled)]
        struct RecentRow {
            #[tabled(rename = "Date")]
            date: String,
            #[tabled(rename = "Ticker")]
            ticker: String,
            #[tabled(rename = "Type")]
            movement: String,
            #[tabled(rename = "Quantity")]
            quantity: String,
            #[tabled(rename = "Value")]
            value: String,
        }

        let rows: Vec<RecentRow> = summary
            .recent_operations
            .iter()
            .map(|op| RecentRow {
                date: op.trade_date.format("%d/%m/%Y").to_string(),
                ticker: op.ticker.clone(),
                movement: if op.movement_type.is_buy() {
                    op.movement_type.as_str().green().to_string()
                } else {
                    op.movement_type.as_str().red().to_string()
                },
                quantity: format_quantity(op.quantity),
                value: format_currency(op.value),
            })
            .collect();

        let mut table = Table::new(rows);
        table.with(Style::rounded());
        table.modify(Columns::new(3..), Alignment::right());
        output.push_str(&format!("\nRecent Operations\n{}\n", table));
    }

    output
}

// ============ Fixed income ============

pub fn format_fixed_income_table(assets: &[FixedIncomeAsset]) -> String {
    #[derive(Tabled)]
    struct FixedIncomeRow {
        #[tabled(rename = "Asset ID")]
        asset_id: i64,
        #[tabled(rename = "Ticker")]
        ticker: String,
        #[tabled(rename = "Product")]
        product: String,
        #[tabled(rename = "Indexer")]
        indexer: String,
        #[tabled(rename = "Rate")]
        rate: String,
        #[tabled(rename = "Maturity")]
        maturity: String,
        #[tabled(rename = "Balance")]
        balance: String,
    }

    let rows: Vec<FixedIncomeRow> = assets
        .iter()
        .map(|asset| FixedIncomeRow {
            asset_id: asset.asset_id,
            ticker: asset.ticker.clone(),
            product: asset.product_type.to_string(),
            indexer: asset.indexer.to_string(),
            rate: format_percent(asset.rate),
            maturity: asset.maturity_date.format("%d/%m/%Y").to_string(),
            balance: format_currency(asset.current_balance),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::modern());
    table.modify(Columns::new(4..), Alignment::right());
    table.to_string()
}

pub fn format_fixed_income_detail(asset: &FixedIncomeAsset) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "\n{} {} — {}\n",
        "🏦".cyan().bold(),
        asset.ticker.cyan().bold(),
        asset.product_name
    ));
    output.push_str(&format!("  Issuer:        {}\n", asset.issuer));
    output.push_str(&format!(
        "  Product:       {} ({} {})\n",
        asset.product_type,
        asset.indexer,
        format_percent(asset.rate)
    ));
    output.push_str(&format!(
        "  Issue:         {}\n",
        asset.issue_date.format("%d/%m/%Y")
    ));
    output.push_str(&format!(
        "  Maturity:      {}\n",
        asset.maturity_date.format("%d/%m/%Y")
    ));
    output.push_str(&format!(
        "  Invested:      {}\n",
        format_currency(asset.total_invested)
    ));
    output.push_str(&format!(
        "  Redeemed:      {}\n",
        format_currency(asset.total_redeemed)
    ));
    output.push_str(&format!(
        "  Balance:       {}\n",
        format_currency(asset.current_balance)
    ));
    output.push_str(&format!("  Operations:    {}\n", asset.operations_count));
    output
}

pub fn format_fixed_income_operations(operations: &[FixedIncomeOperation]) -> String {
    #[derive(Tabled)]
    struct FixedIncomeOperationRow {
        #[tabled(rename = "ID")]
        id: i64,
        #[tabled(rename = "Date")]
        date: String,
        #[tabled(rename = "Type")]
        operation_type: String,
        #[tabled(rename = "Amount")]
        amount: String,
        #[tabled(rename = "Net")]
        net: String,
        #[tabled(rename = "IR")]
        ir: String,
    }

    let rows: Vec<FixedIncomeOperationRow> = operations
        .iter()
        .map(|op| FixedIncomeOperationRow {
            id: op.id,
            date: op.trade_date.format("%d/%m/%Y").to_string(),
            operation_type: op.operation_type.to_string(),
            amount: format_currency(op.amount),
            net: op
                .net_amount
                .map(format_currency)
                .unwrap_or_else(|| "-".to_string()),
            ir: format_currency(op.ir_amount),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::modern());
    table.modify(Columns::new(3..), Alignment::right());
    table.to_string()
}

pub fn format_projection(view: &ProjectionView) -> String {
    let projection = &view.projection;
    let mut output = String::new();
    output.push_str(&format!(
        "\n{} Yield Projection — {}\n\n",
        "📈".cyan().bold(),
        projection.ticker.cyan().bold()
    ));
    output.push_str(&format!(
        "  Product:         {} ({} {})\n",
        projection.product_type,
        projection.indexer,
        format_percent(projection.rate_contracted)
    ));
    output.push_str(&format!(
        "  Maturity:        {} ({} days)\n",
        projection.maturity_date.format("%d/%m/%Y"),
        projection.days_to_maturity
    ));
    output.push_str(&format!(
        "  Annual Rate:     {}\n\n",
        format_percent(projection.annual_rate_used)
    ));
    output.push_str(&format!(
        "  Current Balance: {}\n",
        format_currency(projection.current_balance)
    ));
    output.push_str(&format!(
        "  Gross at Maturity: {} ({})\n",
        format_currency(projection.gross_projection),
        colorize_currency(projection.gross_gain)
    ));
    output.push_str(&format!(
        "  IR ({}):      -{}\n",
        format_percent(projection.ir_rate),
        format_currency(projection.ir_amount)
    ));
    if projection.custody_fee_amount > Decimal::ZERO {
        output.push_str(&format!(
            "  Custody Fee:     -{}\n",
            format_currency(projection.custody_fee_amount)
        ));
    }
    output.push_str(&format!(
        "  Net at Maturity: {} ({})\n",
        format_currency(projection.net_projection),
        colorize_currency(projection.net_gain)
    ));
    output.push_str(&format!(
        "  Net Gain:        {}\n",
        view.net_gain_percent
            .map(colorize_percent)
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    ));
    output
}

// ============ Quotes & imports ============

pub fn format_quote(quote: &Quote) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "\n{} {}\n",
        "💹".cyan().bold(),
        quote.ticker.cyan().bold()
    ));
    output.push_str(&format!(
        "  Price:     {} ({})\n",
        format_currency(quote.price),
        colorize_percent(quote.change_percent)
    ));
    output.push_str(&format!(
        "  Day Range: {} - {}\n",
        format_currency(quote.low),
        format_currency(quote.high)
    ));
    output.push_str(&format!("  Open:      {}\n", format_currency(quote.open)));
    output.push_str(&format!(
        "  Prev Close: {}\n",
        format_currency(quote.previous_close)
    ));
    output.push_str(&format!("  Volume:    {}\n", format_quantity(quote.volume)));
    output.push_str(&format!(
        "  Source:    {} ({})\n",
        quote.source, quote.updated_at
    ));
    output
}

pub fn format_quotes_table(quotes: &QuotesMap) -> String {
    #[derive(Tabled)]
    struct QuoteRow {
        #[tabled(rename = "Ticker")]
        ticker: String,
        #[tabled(rename = "Price")]
        price: String,
        #[tabled(rename = "Change")]
        change: String,
        #[tabled(rename = "Source")]
        source: String,
    }

    // sorted for stable output
    let mut tickers: Vec<&String> = quotes.keys().collect();
    tickers.sort();

    let rows: Vec<QuoteRow> = tickers
        .into_iter()
        .map(|ticker| match &quotes[ticker] {
            Some(quote) => QuoteRow {
                ticker: ticker.clone(),
                price: format_currency(quote.price),
                change: colorize_percent(quote.change_percent),
                source: quote.source.clone(),
            },
            None => QuoteRow {
                ticker: ticker.clone(),
                price: NOT_AVAILABLE.to_string(),
                change: "-".to_string(),
                source: "-".to_string(),
            },
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::modern());
    table.modify(Columns::new(1..3), Alignment::right());
    table.to_string()
}

pub fn format_import_summary(summary: &ImportSummary) -> String {
    let mut output = String::new();
    output.push_str(&format!("\n{} Import complete!\n", "✓".green().bold()));
    output.push_str(&format!("  Rows processed: {}\n", summary.total_rows));
    output.push_str(&format!(
        "  Inserted:       {}\n",
        summary.inserted.to_string().green()
    ));
    if summary.duplicated > 0 {
        output.push_str(&format!(
            "  Duplicated:     {}\n",
            summary.duplicated.to_string().yellow()
        ));
    }
    output.push_str(&format!("  Unique assets:  {}\n", summary.unique_assets));
    output.push_str(&format!("  Imported at:    {}\n", summary.imported_at));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::{FixedIncomeProductType, FixedIncomeProjection, Indexer};
    use crate::reports::render_projection;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn sample_projection(balance: Decimal) -> FixedIncomeProjection {
        FixedIncomeProjection {
            asset_id: 1,
            ticker: "CDB_XYZ".to_string(),
            product_type: FixedIncomeProductType::Cdb,
            indexer: Indexer::Cdi,
            rate_contracted: dec!(110),
            maturity_date: NaiveDate::from_ymd_opt(2027, 6, 1).unwrap(),
            days_to_maturity: 365,
            current_balance: balance,
            gross_projection: dec!(11000),
            gross_gain: dec!(1000),
            ir_rate: dec!(17.5),
            ir_amount: dec!(175),
            custody_fee_amount: dec!(0),
            net_projection: dec!(10825),
            net_gain: dec!(825),
            annual_rate_used: dec!(15.12),
        }
    }

    #[test]
    fn test_projection_zero_balance_renders_not_applicable() {
        colored::control::set_override(false);
        let view = render_projection(sample_projection(dec!(0)));
        let output = format_projection(&view);
        assert!(output.contains("Net Gain:        N/A"));
        assert!(!output.contains("Infinity"));
    }

    #[test]
    fn test_projection_skips_zero_custody_fee() {
        colored::control::set_override(false);
        let view = render_projection(sample_projection(dec!(10000)));
        let output = format_projection(&view);
        assert!(!output.contains("Custody Fee"));
        assert!(output.contains("+8,25%"));
    }

    #[test]
    fn test_empty_list_message() {
        colored::control::set_override(false);
        let msg = format_empty_list("assets");
        assert!(msg.contains("No assets found"));
    }

    #[test]
    fn test_portfolio_summary_without_quotes_degrades() {
        colored::control::set_override(false);
        let totals = PortfolioTotals {
            total_invested: dec!(1000),
            total_bought_value: dec!(1200),
            total_sold_value: dec!(200),
            unique_asset_count: 2,
        };
        let output = format_portfolio_summary(&totals, None, None);
        assert!(output.contains("Market Value:"));
        assert!(output.contains("N/A"));
        assert!(output.contains("R$ 1.000,00"));
    }
}
