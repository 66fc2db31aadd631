//! Asset endpoints

use super::models::{Asset, AssetCreated, AssetPayload, Operation, StatusMessage};
use super::ApiClient;
use crate::error::ApiError;
use tracing::debug;

impl ApiClient {
    pub async fn list_assets(&self) -> Result<Vec<Asset>, ApiError> {
        debug!("Fetching asset list");
        self.get_json("/assets").await
    }

    pub async fn get_asset(&self, id: i64) -> Result<Asset, ApiError> {
        self.get_json(&format!("/assets/{}", id)).await
    }

    pub async fn create_asset(&self, payload: &AssetPayload) -> Result<AssetCreated, ApiError> {
        payload.validate()?;
        self.post_json("/assets", payload).await
    }

    /// Replace semantics: the full payload is sent, never a partial patch.
    pub async fn update_asset(
        &self,
        id: i64,
        payload: &AssetPayload,
    ) -> Result<StatusMessage, ApiError> {
        payload.validate()?;
        self.put_json(&format!("/assets/{}", id), payload).await
    }

    pub async fn delete_asset(&self, id: i64) -> Result<StatusMessage, ApiError> {
        self.delete_json(&format!("/assets/{}", id)).await
    }

    pub async fn asset_operations(&self, id: i64) -> Result<Vec<Operation>, ApiError> {
        self.get_json(&format!("/assets/{}/operations", id)).await
    }
}
