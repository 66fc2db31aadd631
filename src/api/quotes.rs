//! Quote endpoints
//!
//! Quotes are a transient overlay: fetched on demand, joined to assets by
//! ticker at render time, never stored by the client. Cache management
//! below operates on the backend's quote cache, not a local one.

use super::models::{Quote, QuotesMap, StatusMessage};
use super::ApiClient;
use crate::error::ApiError;
use tracing::debug;

impl ApiClient {
    pub async fn get_quote(&self, ticker: &str) -> Result<Quote, ApiError> {
        self.get_json(&format!("/quotes/{}", ticker)).await
    }

    /// Returns an entry per requested ticker; unpriceable tickers map to
    /// `None` rather than being dropped.
    pub async fn batch_quotes(&self, tickers: &[String]) -> Result<QuotesMap, ApiError> {
        debug!("Fetching quotes for {} tickers", tickers.len());
        self.post_json("/quotes/batch", tickers).await
    }

    pub async fn portfolio_quotes(&self) -> Result<QuotesMap, ApiError> {
        self.get_json("/quotes/portfolio/current").await
    }

    pub async fn clear_quote_cache(&self, ticker: Option<&str>) -> Result<StatusMessage, ApiError> {
        let path = match ticker {
            Some(ticker) => format!("/quotes/cache/{}", ticker),
            None => "/quotes/cache".to_string(),
        };
        self.delete_json(&path).await
    }
}
