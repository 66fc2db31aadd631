//! Fixed income endpoints

use rust_decimal::Decimal;

use super::models::{
    FixedIncomeAsset, FixedIncomeAssetCreated, FixedIncomeAssetPayload, FixedIncomeOperation,
    FixedIncomeOperationCreated, FixedIncomeOperationPayload, FixedIncomeProjection, StatusMessage,
};
use super::ApiClient;
use crate::error::ApiError;

impl ApiClient {
    pub async fn list_fixed_income_assets(&self) -> Result<Vec<FixedIncomeAsset>, ApiError> {
        self.get_json("/fixed-income/assets").await
    }

    pub async fn get_fixed_income_asset(&self, asset_id: i64) -> Result<FixedIncomeAsset, ApiError> {
        self.get_json(&format!("/fixed-income/assets/{}", asset_id))
            .await
    }

    pub async fn create_fixed_income_asset(
        &self,
        payload: &FixedIncomeAssetPayload,
    ) -> Result<FixedIncomeAssetCreated, ApiError> {
        payload.validate()?;
        self.post_json("/fixed-income/assets", payload).await
    }

    pub async fn update_fixed_income_asset(
        &self,
        asset_id: i64,
        payload: &FixedIncomeAssetPayload,
    ) -> Result<StatusMessage, ApiError> {
        payload.validate()?;
        self.put_json(&format!("/fixed-income/assets/{}", asset_id), payload)
            .await
    }

    pub async fn delete_fixed_income_asset(&self, asset_id: i64) -> Result<StatusMessage, ApiError> {
        self.delete_json(&format!("/fixed-income/assets/{}", asset_id))
            .await
    }

    pub async fn create_fixed_income_operation(
        &self,
        payload: &FixedIncomeOperationPayload,
    ) -> Result<FixedIncomeOperationCreated, ApiError> {
        payload.validate()?;
        self.post_json("/fixed-income/operations", payload).await
    }

    pub async fn list_fixed_income_operations(
        &self,
        asset_id: i64,
    ) -> Result<Vec<FixedIncomeOperation>, ApiError> {
        self.get_json(&format!("/fixed-income/operations/{}", asset_id))
            .await
    }

    /// The projection itself is computed server-side; the rates are the
    /// market assumptions to project with, not client-side math inputs.
    pub async fn fixed_income_projection(
        &self,
        asset_id: i64,
        cdi_rate: Decimal,
        ipca_rate: Decimal,
    ) -> Result<FixedIncomeProjection, ApiError> {
        self.get_json(&format!(
            "/fixed-income/projection/{}?cdi_rate={}&ipca_rate={}",
            asset_id, cdi_rate, ipca_rate
        ))
        .await
    }
}
