//! Wire DTOs for the tracker backend
//!
//! Every response body is parsed into one of these types at the network
//! boundary so the pure report functions downstream can assume well-typed
//! input. Money is `rust_decimal::Decimal` serialized as plain JSON numbers
//! (the backend speaks floats); quantities are whole units.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::ApiError;

// ============ Shared enums ============

/// Direction of an equity/fund operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MovementType {
    Compra,
    Venda,
}

impl MovementType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MovementType::Compra => "COMPRA",
            MovementType::Venda => "VENDA",
        }
    }

    pub fn is_buy(&self) -> bool {
        matches!(self, MovementType::Compra)
    }
}

impl fmt::Display for MovementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MovementType {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "COMPRA" | "BUY" => Ok(MovementType::Compra),
            "VENDA" | "SELL" => Ok(MovementType::Venda),
            other => Err(ApiError::Validation(format!(
                "unknown movement type: {} (expected buy or sell)",
                other
            ))),
        }
    }
}

/// Lifecycle status of a record. Edited operations are never patched in
/// place; the old row moves to `Cancelled` and a new `Active` row is minted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecordStatus {
    Active,
    Cancelled,
    Deleted,
    #[serde(other)]
    Unknown,
}

impl RecordStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, RecordStatus::Active)
    }
}

// ============ Assets & operations ============

/// An asset with its backend-computed rollups. The client edits only the
/// identity fields (ticker, class, type, name); positions and averages are
/// derived server-side from operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asset {
    pub id: i64,
    pub ticker: String,
    pub asset_class: String,
    pub asset_type: String,
    pub product_name: String,
    pub created_at: String,
    pub status: RecordStatus,
    pub total_operations: i64,
    pub total_bought: i64,
    pub total_sold: i64,
    /// total_bought - total_sold, in quantity units
    pub current_position: i64,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_bought_value: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_sold_value: Decimal,
    /// Cost basis per unit; only meaningful while current_position > 0
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub average_price: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub total_invested: Option<Decimal>,
}

/// Full payload for asset create and replace calls.
#[derive(Debug, Clone, Serialize)]
pub struct AssetPayload {
    pub ticker: String,
    pub asset_class: String,
    pub asset_type: String,
    pub product_name: String,
}

impl AssetPayload {
    /// Client-side required-field validation, run before submission.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.ticker.trim().is_empty() {
            return Err(ApiError::Validation("ticker must not be empty".into()));
        }
        if self.asset_class.trim().is_empty() {
            return Err(ApiError::Validation("asset class must not be empty".into()));
        }
        if self.asset_type.trim().is_empty() {
            return Err(ApiError::Validation("asset type must not be empty".into()));
        }
        if self.product_name.trim().is_empty() {
            return Err(ApiError::Validation("product name must not be empty".into()));
        }
        Ok(())
    }
}

/// A buy/sell operation as returned by the backend, joined with its asset's
/// display fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Operation {
    pub id: i64,
    pub asset_id: i64,
    pub ticker: String,
    pub asset_class: String,
    pub asset_type: String,
    pub product_name: String,
    pub movement_type: MovementType,
    pub quantity: i64,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// quantity × price, computed server-side
    #[serde(with = "rust_decimal::serde::float")]
    pub value: Decimal,
    pub trade_date: NaiveDate,
    pub source: String,
    pub created_at: String,
    pub status: RecordStatus,
    #[serde(default)]
    pub market: Option<String>,
    #[serde(default)]
    pub institution: Option<String>,
}

/// Full payload for operation create and supersede calls.
#[derive(Debug, Clone, Serialize)]
pub struct OperationPayload {
    pub asset_id: i64,
    pub movement_type: MovementType,
    pub quantity: i64,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub trade_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub institution: Option<String>,
}

impl OperationPayload {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.quantity <= 0 {
            return Err(ApiError::Validation(format!(
                "quantity must be a positive integer, got {}",
                self.quantity
            )));
        }
        if self.price <= Decimal::ZERO {
            return Err(ApiError::Validation(format!(
                "price must be positive, got {}",
                self.price
            )));
        }
        Ok(())
    }
}

// ============ Fixed income ============

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FixedIncomeProductType {
    Cdb,
    Lci,
    Lca,
    TesouroSelic,
    TesouroIpca,
    TesouroPrefixado,
}

impl FixedIncomeProductType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FixedIncomeProductType::Cdb => "CDB",
            FixedIncomeProductType::Lci => "LCI",
            FixedIncomeProductType::Lca => "LCA",
            FixedIncomeProductType::TesouroSelic => "TESOURO_SELIC",
            FixedIncomeProductType::TesouroIpca => "TESOURO_IPCA",
            FixedIncomeProductType::TesouroPrefixado => "TESOURO_PREFIXADO",
        }
    }
}

impl fmt::Display for FixedIncomeProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FixedIncomeProductType {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "CDB" => Ok(FixedIncomeProductType::Cdb),
            "LCI" => Ok(FixedIncomeProductType::Lci),
            "LCA" => Ok(FixedIncomeProductType::Lca),
            "TESOURO_SELIC" => Ok(FixedIncomeProductType::TesouroSelic),
            "TESOURO_IPCA" => Ok(FixedIncomeProductType::TesouroIpca),
            "TESOURO_PREFIXADO" => Ok(FixedIncomeProductType::TesouroPrefixado),
            other => Err(ApiError::Validation(format!(
                "unknown product type: {}",
                other
            ))),
        }
    }
}

/// Benchmark rate the instrument's yield is pegged to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Indexer {
    Cdi,
    Ipca,
    Pre,
    Selic,
}

impl Indexer {
    pub fn as_str(&self) -> &'static str {
        match self {
            Indexer::Cdi => "CDI",
            Indexer::Ipca => "IPCA",
            Indexer::Pre => "PRE",
            Indexer::Selic => "SELIC",
        }
    }
}

impl fmt::Display for Indexer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Indexer {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "CDI" => Ok(Indexer::Cdi),
            "IPCA" => Ok(Indexer::Ipca),
            "PRE" | "PREFIXADO" => Ok(Indexer::Pre),
            "SELIC" => Ok(Indexer::Selic),
            other => Err(ApiError::Validation(format!("unknown indexer: {}", other))),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixedIncomeAsset {
    pub id: i64,
    pub asset_id: i64,
    pub ticker: String,
    pub product_name: String,
    pub issuer: String,
    pub product_type: FixedIncomeProductType,
    pub indexer: Indexer,
    /// Contracted rate. For CDI: percentage of CDI (110 = 110%); for
    /// IPCA/PRE: fixed annual rate.
    #[serde(with = "rust_decimal::serde::float")]
    pub rate: Decimal,
    pub maturity_date: NaiveDate,
    #[serde(with = "rust_decimal::serde::float")]
    pub custody_fee: Decimal,
    pub issue_date: NaiveDate,
    pub created_at: String,
    pub status: RecordStatus,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_invested: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_redeemed: Decimal,
    /// total_invested - total_redeemed, never negative
    #[serde(with = "rust_decimal::serde::float")]
    pub current_balance: Decimal,
    pub operations_count: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct FixedIncomeAssetPayload {
    pub asset_id: i64,
    pub issuer: String,
    pub product_type: FixedIncomeProductType,
    pub indexer: Indexer,
    #[serde(with = "rust_decimal::serde::float")]
    pub rate: Decimal,
    pub maturity_date: NaiveDate,
    pub issue_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "rust_decimal::serde::float_option")]
    pub custody_fee: Option<Decimal>,
}

impl FixedIncomeAssetPayload {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.issuer.trim().is_empty() {
            return Err(ApiError::Validation("issuer must not be empty".into()));
        }
        if self.rate <= Decimal::ZERO {
            return Err(ApiError::Validation(format!(
                "rate must be positive, got {}",
                self.rate
            )));
        }
        if self.maturity_date <= self.issue_date {
            return Err(ApiError::Validation(
                "maturity date must be after issue date".into(),
            ));
        }
        if let Some(fee) = self.custody_fee {
            if fee < Decimal::ZERO {
                return Err(ApiError::Validation("custody fee must not be negative".into()));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FixedIncomeOperationType {
    Aplicacao,
    Resgate,
    Vencimento,
}

impl FixedIncomeOperationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FixedIncomeOperationType::Aplicacao => "APLICACAO",
            FixedIncomeOperationType::Resgate => "RESGATE",
            FixedIncomeOperationType::Vencimento => "VENCIMENTO",
        }
    }

    /// Net amount and withheld IR only make sense when money leaves the
    /// instrument.
    pub fn is_outflow(&self) -> bool {
        matches!(
            self,
            FixedIncomeOperationType::Resgate | FixedIncomeOperationType::Vencimento
        )
    }
}

impl fmt::Display for FixedIncomeOperationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FixedIncomeOperationType {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "APLICACAO" | "APPLICATION" => Ok(FixedIncomeOperationType::Aplicacao),
            "RESGATE" | "REDEMPTION" => Ok(FixedIncomeOperationType::Resgate),
            "VENCIMENTO" | "MATURITY" => Ok(FixedIncomeOperationType::Vencimento),
            other => Err(ApiError::Validation(format!(
                "unknown fixed income operation type: {}",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixedIncomeOperation {
    pub id: i64,
    pub asset_id: i64,
    pub operation_type: FixedIncomeOperationType,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub net_amount: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::float")]
    pub ir_amount: Decimal,
    pub trade_date: NaiveDate,
    pub created_at: String,
    pub status: RecordStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct FixedIncomeOperationPayload {
    pub asset_id: i64,
    pub operation_type: FixedIncomeOperationType,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub trade_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "rust_decimal::serde::float_option")]
    pub net_amount: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "rust_decimal::serde::float_option")]
    pub ir_amount: Option<Decimal>,
}

impl FixedIncomeOperationPayload {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.amount <= Decimal::ZERO {
            return Err(ApiError::Validation(format!(
                "amount must be positive, got {}",
                self.amount
            )));
        }
        if !self.operation_type.is_outflow()
            && (self.net_amount.is_some() || self.ir_amount.is_some())
        {
            return Err(ApiError::Validation(
                "net amount and IR only apply to redemption or maturity".into(),
            ));
        }
        Ok(())
    }
}

/// Server-computed yield projection. Tax and custody figures are rendered
/// as-is; re-deriving them locally would drift from the backend's
/// jurisdiction rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixedIncomeProjection {
    pub asset_id: i64,
    pub ticker: String,
    pub product_type: FixedIncomeProductType,
    pub indexer: Indexer,
    #[serde(with = "rust_decimal::serde::float")]
    pub rate_contracted: Decimal,
    pub maturity_date: NaiveDate,
    pub days_to_maturity: i64,
    #[serde(with = "rust_decimal::serde::float")]
    pub current_balance: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub gross_projection: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub gross_gain: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub ir_rate: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub ir_amount: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub custody_fee_amount: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub net_projection: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub net_gain: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub annual_rate_used: Decimal,
}

// ============ Quotes ============

/// A live quote, joined to assets by ticker at render time. Ephemeral; the
/// client never persists these.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    pub ticker: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub change: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub change_percent: Decimal,
    pub volume: i64,
    #[serde(with = "rust_decimal::serde::float")]
    pub open: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub high: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub low: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub previous_close: Decimal,
    pub updated_at: String,
    pub source: String,
}

/// Batch quote responses map every requested ticker, with `null` for the
/// ones the provider could not price.
pub type QuotesMap = HashMap<String, Option<Quote>>;

// ============ Imports ============

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportReport {
    pub summary: ImportSummary,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportSummary {
    pub total_rows: i64,
    pub inserted: i64,
    pub duplicated: i64,
    pub unique_assets: i64,
    pub imported_at: String,
}

// ============ Dashboard ============

/// Opaque backend aggregate rendered as-is on the dashboard view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_assets: i64,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_invested: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub current_value: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_bought_value: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_sold_value: Decimal,
    pub top_positions: Vec<TopPosition>,
    pub recent_operations: Vec<RecentOperation>,
    pub asset_allocation: Vec<AllocationSlice>,
    #[serde(with = "rust_decimal::serde::float")]
    pub daily_change: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub daily_change_percent: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopPosition {
    pub id: i64,
    pub ticker: String,
    pub asset_class: String,
    pub product_name: String,
    pub quantity: i64,
    #[serde(with = "rust_decimal::serde::float")]
    pub invested_value: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub average_price: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecentOperation {
    pub id: i64,
    pub asset_id: i64,
    pub ticker: String,
    pub asset_class: String,
    pub product_name: String,
    pub movement_type: MovementType,
    pub quantity: i64,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub value: Decimal,
    pub trade_date: NaiveDate,
    #[serde(default)]
    pub market: Option<String>,
    pub source: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationSlice {
    pub asset_class: String,
    pub count: i64,
    #[serde(with = "rust_decimal::serde::float")]
    pub value: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub percentage: Decimal,
}

// ============ Mutation acknowledgements ============

#[derive(Debug, Clone, Deserialize)]
pub struct AssetCreated {
    pub status: String,
    pub asset_id: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OperationCreated {
    pub status: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FixedIncomeAssetCreated {
    pub status: String,
    pub fixed_income_id: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FixedIncomeOperationCreated {
    pub status: String,
    pub operation_id: i64,
}

/// Generic `{status, message}` acknowledgement.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusMessage {
    pub status: String,
    pub message: String,
}

/// Response to an operation edit. The backend cancels the old record and
/// mints a replacement; both identities come back so the caller can report
/// the supersede, then it must reload the full list (the edited row's id
/// changed).
#[derive(Debug, Clone, Deserialize)]
pub struct SupersedeOutcome {
    pub status: String,
    pub message: String,
    pub old_id: i64,
    pub new_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_asset_parses_backend_json() {
        let json = r#"{
            "id": 1, "ticker": "PETR4", "asset_class": "AÇÕES",
            "asset_type": "ON", "product_name": "Petrobras PN",
            "created_at": "2026-01-10T12:00:00", "status": "ACTIVE",
            "total_operations": 2, "total_bought": 100, "total_sold": 0,
            "current_position": 100,
            "total_bought_value": 3000.0, "total_sold_value": 0.0,
            "average_price": 30.0, "total_invested": 3000.0
        }"#;
        let asset: Asset = serde_json::from_str(json).unwrap();
        assert_eq!(asset.ticker, "PETR4");
        assert_eq!(asset.current_position, 100);
        assert_eq!(asset.average_price, Some(dec!(30.0)));
        assert!(asset.status.is_active());
    }

    #[test]
    fn test_asset_tolerates_missing_optional_rollups() {
        let json = r#"{
            "id": 2, "ticker": "XPTO3", "asset_class": "AÇÕES",
            "asset_type": "ON", "product_name": "Xpto",
            "created_at": "2026-01-10T12:00:00", "status": "ACTIVE",
            "total_operations": 0, "total_bought": 0, "total_sold": 0,
            "current_position": 0,
            "total_bought_value": 0.0, "total_sold_value": 0.0
        }"#;
        let asset: Asset = serde_json::from_str(json).unwrap();
        assert_eq!(asset.average_price, None);
        assert_eq!(asset.total_invested, None);
    }

    #[test]
    fn test_operation_parses_and_null_market() {
        let json = r#"{
            "id": 7, "asset_id": 1, "ticker": "PETR4",
            "asset_class": "AÇÕES", "asset_type": "ON",
            "product_name": "Petrobras PN", "movement_type": "VENDA",
            "quantity": 50, "price": 32.5, "value": 1625.0,
            "trade_date": "2026-02-01", "source": "MANUAL",
            "created_at": "2026-02-01T09:30:00", "status": "ACTIVE",
            "market": null, "institution": null
        }"#;
        let op: Operation = serde_json::from_str(json).unwrap();
        assert_eq!(op.movement_type, MovementType::Venda);
        assert_eq!(op.market, None);
        assert_eq!(op.value, dec!(1625.0));
    }

    #[test]
    fn test_unknown_status_deserializes_to_unknown() {
        let status: RecordStatus = serde_json::from_str("\"SUPERSEDED\"").unwrap();
        assert_eq!(status, RecordStatus::Unknown);
    }

    #[test]
    fn test_operation_payload_serializes_numbers_on_the_wire() {
        let payload = OperationPayload {
            asset_id: 1,
            movement_type: MovementType::Compra,
            quantity: 100,
            price: dec!(30.00),
            trade_date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
            market: Some("VISTA".to_string()),
            institution: None,
        };
        let json: serde_json::Value = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["movement_type"], "COMPRA");
        assert!(json["price"].is_number());
        assert_eq!(json["trade_date"], "2026-01-15");
        // absent optionals are omitted, not sent as null
        assert!(json.get("institution").is_none());
    }

    #[test]
    fn test_operation_payload_validation() {
        let mut payload = OperationPayload {
            asset_id: 1,
            movement_type: MovementType::Compra,
            quantity: 0,
            price: dec!(30.00),
            trade_date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
            market: None,
            institution: None,
        };
        assert!(payload.validate().is_err());
        payload.quantity = 10;
        payload.price = Decimal::ZERO;
        assert!(payload.validate().is_err());
        payload.price = dec!(0.01);
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn test_fixed_income_enums_roundtrip_wire_names() {
        assert_eq!(
            serde_json::to_string(&FixedIncomeProductType::TesouroIpca).unwrap(),
            "\"TESOURO_IPCA\""
        );
        let parsed: FixedIncomeOperationType = serde_json::from_str("\"APLICACAO\"").unwrap();
        assert_eq!(parsed, FixedIncomeOperationType::Aplicacao);
        assert_eq!("prefixado".parse::<Indexer>().unwrap(), Indexer::Pre);
    }

    #[test]
    fn test_fixed_income_payload_rejects_ir_on_application() {
        let payload = FixedIncomeOperationPayload {
            asset_id: 1,
            operation_type: FixedIncomeOperationType::Aplicacao,
            amount: dec!(1000),
            trade_date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
            net_amount: None,
            ir_amount: Some(dec!(12.5)),
        };
        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_quotes_map_preserves_null_entries() {
        let json = r#"{
            "PETR4": {
                "ticker": "PETR4", "price": 38.1, "change": 0.4,
                "change_percent": 1.06, "volume": 1000000,
                "open": 37.8, "high": 38.4, "low": 37.5,
                "previous_close": 37.7,
                "updated_at": "2026-02-01T18:00:00", "source": "yfinance"
            },
            "SEMPRECO11": null
        }"#;
        let quotes: QuotesMap = serde_json::from_str(json).unwrap();
        assert!(quotes["PETR4"].is_some());
        assert!(quotes.contains_key("SEMPRECO11"));
        assert!(quotes["SEMPRECO11"].is_none());
    }

    #[test]
    fn test_supersede_outcome_parses_both_identities() {
        let json = r#"{
            "status": "updated",
            "message": "Operação 12 cancelada e substituída",
            "old_id": 12, "new_id": 27
        }"#;
        let outcome: SupersedeOutcome = serde_json::from_str(json).unwrap();
        assert_ne!(outcome.old_id, outcome.new_id);
        assert_eq!(outcome.new_id, 27);
    }

    #[test]
    fn test_movement_type_accepts_cli_spellings() {
        assert_eq!("buy".parse::<MovementType>().unwrap(), MovementType::Compra);
        assert_eq!("VENDA".parse::<MovementType>().unwrap(), MovementType::Venda);
        assert!("hold".parse::<MovementType>().is_err());
    }
}
