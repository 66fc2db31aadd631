//! Operation endpoints
//!
//! Edits follow the supersede contract: PUT sends the full replacement
//! payload keyed by the old identity; the backend cancels the old record,
//! mints a new one and returns both ids. Callers must reload the list
//! afterwards instead of patching their local copy.

use super::models::{Operation, OperationCreated, OperationPayload, StatusMessage, SupersedeOutcome};
use super::ApiClient;
use crate::error::ApiError;
use tracing::{debug, info};

impl ApiClient {
    pub async fn list_operations(&self) -> Result<Vec<Operation>, ApiError> {
        debug!("Fetching operation list");
        self.get_json("/operations").await
    }

    pub async fn get_operation(&self, id: i64) -> Result<Operation, ApiError> {
        self.get_json(&format!("/operations/{}", id)).await
    }

    pub async fn create_operation(
        &self,
        payload: &OperationPayload,
    ) -> Result<OperationCreated, ApiError> {
        payload.validate()?;
        self.post_json("/operations", payload).await
    }

    pub async fn supersede_operation(
        &self,
        id: i64,
        payload: &OperationPayload,
    ) -> Result<SupersedeOutcome, ApiError> {
        payload.validate()?;
        let outcome: SupersedeOutcome =
            self.put_json(&format!("/operations/{}", id), payload).await?;
        info!(
            "Operation {} superseded by {}",
            outcome.old_id, outcome.new_id
        );
        Ok(outcome)
    }

    pub async fn delete_operation(&self, id: i64) -> Result<StatusMessage, ApiError> {
        self.delete_json(&format!("/operations/{}", id)).await
    }
}
