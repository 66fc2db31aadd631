//! Fixed income projection view
//!
//! The backend computes the projection; the only figure derived here is the
//! net gain as a percentage of the current balance, which is undefined (not
//! infinite) when the balance is zero. Everything else passes through
//! untouched so tax and custody rules stay single-sourced in the backend.

use rust_decimal::Decimal;

use crate::api::models::FixedIncomeProjection;

/// Projection plus the one client-derived figure.
#[derive(Debug, Clone)]
pub struct ProjectionView {
    pub projection: FixedIncomeProjection,
    /// `net_gain / current_balance × 100`; `None` when the balance is zero.
    pub net_gain_percent: Option<Decimal>,
}

pub fn render_projection(projection: FixedIncomeProjection) -> ProjectionView {
    let net_gain_percent = if projection.current_balance.is_zero() {
        None
    } else {
        Some(projection.net_gain / projection.current_balance * Decimal::ONE_HUNDRED)
    };

    ProjectionView {
        projection,
        net_gain_percent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::{FixedIncomeProductType, Indexer};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn projection(current_balance: Decimal, net_gain: Decimal) -> FixedIncomeProjection {
        FixedIncomeProjection {
            asset_id: 3,
            ticker: "CDB_BANCO_XYZ_2027".to_string(),
            product_type: FixedIncomeProductType::Cdb,
            indexer: Indexer::Cdi,
            rate_contracted: dec!(110),
            maturity_date: NaiveDate::from_ymd_opt(2027, 6, 1).unwrap(),
            days_to_maturity: 365,
            current_balance,
            gross_projection: current_balance + net_gain * dec!(1.2),
            gross_gain: net_gain * dec!(1.2),
            ir_rate: dec!(17.5),
            ir_amount: net_gain * dec!(0.2),
            custody_fee_amount: dec!(0),
            net_projection: current_balance + net_gain,
            net_gain,
            annual_rate_used: dec!(15.12),
        }
    }

    #[test]
    fn test_net_gain_percent() {
        let view = render_projection(projection(dec!(10000), dec!(1250)));
        assert_eq!(view.net_gain_percent, Some(dec!(12.5)));
    }

    #[test]
    fn test_zero_balance_is_undefined_not_infinite() {
        let view = render_projection(projection(dec!(0), dec!(50)));
        assert_eq!(view.net_gain_percent, None);
    }

    #[test]
    fn test_backend_figures_pass_through_unmodified() {
        let input = projection(dec!(10000), dec!(1250));
        let ir_amount = input.ir_amount;
        let net_projection = input.net_projection;
        let view = render_projection(input);
        assert_eq!(view.projection.ir_amount, ir_amount);
        assert_eq!(view.projection.net_projection, net_projection);
    }
}
