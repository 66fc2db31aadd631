//! Pure, backend-independent report computations

pub mod aggregation;
pub mod projection;

pub use aggregation::{
    held_tickers, market_summary, market_value, portfolio_totals, unrealized_variation,
    MarketTotals, PortfolioTotals, Variation, UNSPECIFIED_MARKET,
};
pub use projection::{render_projection, ProjectionView};
