//! Dashboard endpoint

use super::models::DashboardSummary;
use super::ApiClient;
use crate::error::ApiError;

impl ApiClient {
    /// Backend-computed aggregate view; the client renders it as-is.
    pub async fn dashboard_summary(&self) -> Result<DashboardSummary, ApiError> {
        self.get_json("/dashboard/summary").await
    }
}
