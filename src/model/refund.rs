//! Refund models.

use serde::{Deserialize, Serialize};

use crate::model::api_error::ApiError;
use crate::model::common::{CurrencyCode, GatewayResponse, Meta, TransactionRequestStatus};

/// Request to refund a settled payment, fully or partially.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefundRequest {
    /// Merchant reference number, unique per request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_ref_num: Option<String>,
    /// Amount to refund in minor units; defaults to the settled amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    /// Whether to reject duplicate merchant reference numbers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dup_check: Option<bool>,
}

/// A refund returned by the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Refund {
    /// Refund identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Merchant reference number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_ref_num: Option<String>,
    /// Refunded amount in minor units.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    /// Currency code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<CurrencyCode>,
    /// Lifecycle status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TransactionRequestStatus>,
    /// Payment method.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_type: Option<String>,
    /// Transaction identifier at the downstream gateway.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway_reconciliation_id: Option<String>,
    /// Gateway response details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway_response: Option<GatewayResponse>,
    /// Downstream error for failed refunds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
    /// Whether the refund ran in the production environment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_mode: Option<bool>,
    /// Time the refund was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub txn_time: Option<String>,
    /// Time of the last status change.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_time: Option<String>,
    /// Time of the last update.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_time: Option<String>,
}

/// Page of refunds matching a merchant reference number.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefundList {
    /// Matching refunds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refunds: Option<Vec<Refund>>,
    /// Pagination details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}
