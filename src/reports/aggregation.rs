//! Portfolio aggregation engine
//!
//! Pure functions deriving portfolio-level and per-market statistics from
//! in-memory lists of operations and assets, optionally joined with a
//! ticker→quote map. Inputs are never mutated and nothing here touches the
//! network: callers fetch, these functions reduce.
//!
//! All money is `Decimal`, so the usual float hazards (NaN, Infinity) are
//! unrepresentable; the two undefined ratios below are modelled as `Option`
//! instead.

use std::collections::BTreeMap;

use itertools::Itertools;
use rust_decimal::Decimal;

use crate::api::models::{Asset, Operation, QuotesMap};

/// Market label used for operations without a market tag.
pub const UNSPECIFIED_MARKET: &str = "NÃO ESPECIFICADO";

/// Per-market quantity totals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarketTotals {
    pub bought: i64,
    pub sold: i64,
    pub operation_count: usize,
}

/// Group operations by market tag, accumulating bought/sold quantities and
/// an unconditional operation count. Empty input yields an empty map.
pub fn market_summary(operations: &[Operation]) -> BTreeMap<String, MarketTotals> {
    let mut summary: BTreeMap<String, MarketTotals> = BTreeMap::new();

    for op in operations {
        let market = op
            .market
            .as_deref()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(UNSPECIFIED_MARKET);
        let totals = summary.entry(market.to_string()).or_default();

        if op.movement_type.is_buy() {
            totals.bought += op.quantity;
        } else {
            totals.sold += op.quantity;
        }
        totals.operation_count += 1;
    }

    summary
}

/// Portfolio-wide value totals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortfolioTotals {
    /// Σ bought value − Σ sold value. Negative is valid (net redemptions
    /// exceeding purchases) and is not clamped.
    pub total_invested: Decimal,
    pub total_bought_value: Decimal,
    pub total_sold_value: Decimal,
    pub unique_asset_count: usize,
}

pub fn portfolio_totals(assets: &[Asset]) -> PortfolioTotals {
    let total_bought_value: Decimal = assets.iter().map(|a| a.total_bought_value).sum();
    let total_sold_value: Decimal = assets.iter().map(|a| a.total_sold_value).sum();
    let unique_asset_count = assets.iter().map(|a| a.ticker.as_str()).unique().count();

    PortfolioTotals {
        total_invested: total_bought_value - total_sold_value,
        total_bought_value,
        total_sold_value,
        unique_asset_count,
    }
}

/// Current portfolio market value: `price × position` summed over assets
/// with a positive position and a present quote. Assets without a quote
/// contribute zero; an empty quote map yields zero, not an error.
pub fn market_value(assets: &[Asset], quotes: &QuotesMap) -> Decimal {
    assets
        .iter()
        .filter(|asset| asset.current_position > 0)
        .filter_map(|asset| {
            let quote = quotes.get(&asset.ticker)?.as_ref()?;
            Some(quote.price * Decimal::from(asset.current_position))
        })
        .sum()
}

/// Unrealized gain/loss against invested value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variation {
    pub absolute: Decimal,
    pub percent: Decimal,
}

/// `None` when the market value was never computed (no quotes available) or
/// when nothing is invested (the percentage is undefined).
pub fn unrealized_variation(
    market_value: Option<Decimal>,
    total_invested: Decimal,
) -> Option<Variation> {
    let market_value = market_value?;
    if total_invested.is_zero() {
        return None;
    }

    let absolute = market_value - total_invested;
    Some(Variation {
        absolute,
        percent: absolute / total_invested * Decimal::ONE_HUNDRED,
    })
}

/// Tickers worth quoting: assets still holding a position.
pub fn held_tickers(assets: &[Asset]) -> Vec<String> {
    assets
        .iter()
        .filter(|asset| asset.current_position > 0)
        .map(|asset| asset.ticker.clone())
        .unique()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::{MovementType, Quote, RecordStatus};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use std::collections::HashMap as StdHashMap;

    fn operation(market: Option<&str>, movement: MovementType, quantity: i64) -> Operation {
        Operation {
            id: 1,
            asset_id: 1,
            ticker: "PETR4".to_string(),
            asset_class: "AÇÕES".to_string(),
            asset_type: "ON".to_string(),
            product_name: "Petrobras PN".to_string(),
            movement_type: movement,
            quantity,
            price: dec!(30),
            value: dec!(30) * Decimal::from(quantity),
            trade_date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
            source: "MANUAL".to_string(),
            created_at: "2026-01-15T10:00:00".to_string(),
            status: RecordStatus::Active,
            market: market.map(|m| m.to_string()),
            institution: None,
        }
    }

    fn asset(ticker: &str, position: i64, bought: Decimal, sold: Decimal) -> Asset {
        Asset {
            id: 1,
            ticker: ticker.to_string(),
            asset_class: "AÇÕES".to_string(),
            asset_type: "ON".to_string(),
            product_name: ticker.to_string(),
            created_at: "2026-01-01T00:00:00".to_string(),
            status: RecordStatus::Active,
            total_operations: 1,
            total_bought: position.max(0),
            total_sold: 0,
            current_position: position,
            total_bought_value: bought,
            total_sold_value: sold,
            average_price: None,
            total_invested: None,
        }
    }

    fn quote(ticker: &str, price: Decimal) -> Quote {
        Quote {
            ticker: ticker.to_string(),
            price,
            change: dec!(0),
            change_percent: dec!(0),
            volume: 0,
            open: price,
            high: price,
            low: price,
            previous_close: price,
            updated_at: "2026-02-01T18:00:00".to_string(),
            source: "test".to_string(),
        }
    }

    #[test]
    fn test_market_summary_empty_input() {
        assert!(market_summary(&[]).is_empty());
    }

    #[test]
    fn test_market_summary_single_buy() {
        let summary = market_summary(&[operation(Some("VISTA"), MovementType::Compra, 10)]);
        assert_eq!(summary.len(), 1);
        let vista = &summary["VISTA"];
        assert_eq!(vista.bought, 10);
        assert_eq!(vista.sold, 0);
        assert_eq!(vista.operation_count, 1);
    }

    #[test]
    fn test_market_summary_counts_every_operation() {
        let operations = vec![
            operation(Some("VISTA"), MovementType::Compra, 100),
            operation(Some("VISTA"), MovementType::Venda, 40),
            operation(Some("FRACIONARIO"), MovementType::Compra, 7),
            operation(None, MovementType::Compra, 3),
        ];
        let summary = market_summary(&operations);

        let counted: usize = summary.values().map(|t| t.operation_count).sum();
        assert_eq!(counted, operations.len());

        assert_eq!(summary["VISTA"].bought, 100);
        assert_eq!(summary["VISTA"].sold, 40);
        assert_eq!(summary[UNSPECIFIED_MARKET].bought, 3);
    }

    #[test]
    fn test_market_summary_blank_tag_is_unspecified() {
        let summary = market_summary(&[operation(Some("  "), MovementType::Venda, 5)]);
        assert_eq!(summary[UNSPECIFIED_MARKET].sold, 5);
    }

    #[test]
    fn test_portfolio_totals_reordering_invariant() {
        let mut assets = vec![
            asset("PETR4", 100, dec!(3000), dec!(0)),
            asset("VALE3", 50, dec!(4000), dec!(500)),
            asset("MXRF11", 200, dec!(2100), dec!(90)),
        ];
        let forward = portfolio_totals(&assets);
        assets.reverse();
        let backward = portfolio_totals(&assets);
        assert_eq!(forward, backward);
        assert_eq!(forward.total_invested, dec!(8510));
        assert_eq!(forward.unique_asset_count, 3);
    }

    #[test]
    fn test_portfolio_totals_negative_invested_not_clamped() {
        // full liquidation with realized gains: sold value exceeds bought
        let totals = portfolio_totals(&[asset("PETR4", 0, dec!(1000), dec!(1500))]);
        assert_eq!(totals.total_invested, dec!(-500));
    }

    #[test]
    fn test_portfolio_totals_dedupes_tickers() {
        let totals = portfolio_totals(&[
            asset("PETR4", 100, dec!(3000), dec!(0)),
            asset("PETR4", 100, dec!(3000), dec!(0)),
        ]);
        assert_eq!(totals.unique_asset_count, 1);
    }

    #[test]
    fn test_market_value_empty_quotes_is_zero() {
        let assets = vec![asset("PETR4", 100, dec!(3000), dec!(0))];
        let quotes: QuotesMap = StdHashMap::new();
        assert_eq!(market_value(&assets, &quotes), dec!(0));
    }

    #[test]
    fn test_market_value_skips_missing_and_null_quotes() {
        let assets = vec![
            asset("PETR4", 100, dec!(3000), dec!(0)),
            asset("VALE3", 50, dec!(4000), dec!(0)),
            asset("SEMPRECO11", 10, dec!(100), dec!(0)),
        ];
        let mut quotes: QuotesMap = StdHashMap::new();
        quotes.insert("PETR4".to_string(), Some(quote("PETR4", dec!(38.10))));
        quotes.insert("SEMPRECO11".to_string(), None);
        // VALE3 absent entirely

        assert_eq!(market_value(&assets, &quotes), dec!(3810.00));
    }

    #[test]
    fn test_market_value_ignores_non_positive_positions() {
        let assets = vec![asset("PETR4", 0, dec!(1000), dec!(1000))];
        let mut quotes: QuotesMap = StdHashMap::new();
        quotes.insert("PETR4".to_string(), Some(quote("PETR4", dec!(38.10))));
        assert_eq!(market_value(&assets, &quotes), dec!(0));
    }

    #[test]
    fn test_unrealized_variation_zero_invested_is_none() {
        assert_eq!(unrealized_variation(Some(dec!(0)), dec!(0)), None);
        assert_eq!(unrealized_variation(Some(dec!(500)), dec!(0)), None);
    }

    #[test]
    fn test_unrealized_variation_no_market_value_is_none() {
        assert_eq!(unrealized_variation(None, dec!(1000)), None);
    }

    #[test]
    fn test_unrealized_variation_basic() {
        let variation = unrealized_variation(Some(dec!(1100)), dec!(1000)).unwrap();
        assert_eq!(variation.absolute, dec!(100));
        assert_eq!(variation.percent, dec!(10));
    }

    #[test]
    fn test_unrealized_variation_loss() {
        let variation = unrealized_variation(Some(dec!(900)), dec!(1000)).unwrap();
        assert_eq!(variation.absolute, dec!(-100));
        assert_eq!(variation.percent, dec!(-10));
    }

    #[test]
    fn test_held_tickers_filters_and_dedupes() {
        let assets = vec![
            asset("PETR4", 100, dec!(3000), dec!(0)),
            asset("VALE3", 0, dec!(1000), dec!(1000)),
            asset("PETR4", 10, dec!(300), dec!(0)),
        ];
        assert_eq!(held_tickers(&assets), vec!["PETR4".to_string()]);
    }
}
