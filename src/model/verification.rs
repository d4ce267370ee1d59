//! Verification models.

use serde::{Deserialize, Serialize};

use crate::model::api_error::ApiError;
use crate::model::card::Card;
use crate::model::common::{
    BillingDetails, CurrencyCode, GatewayResponse, Meta, Profile, TransactionRequestStatus,
};

/// Request to verify a payment instrument without moving funds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationRequest {
    /// Merchant reference number, unique per request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_ref_num: Option<String>,
    /// Token of the payment handle to verify.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_handle_token: Option<String>,
    /// Currency code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<CurrencyCode>,
    /// Merchant-side description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Customer IP address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_ip: Option<String>,
    /// Whether to reject duplicate merchant reference numbers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dup_check: Option<bool>,
}

/// A verification returned by the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verification {
    /// Verification identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Merchant reference number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_ref_num: Option<String>,
    /// Lifecycle status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TransactionRequestStatus>,
    /// Currency code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<CurrencyCode>,
    /// Verified card, masked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,
    /// Customer profile.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<Profile>,
    /// Customer billing address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_details: Option<BillingDetails>,
    /// Gateway response details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway_response: Option<GatewayResponse>,
    /// Downstream error for failed verifications.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
    /// Merchant-side description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Customer IP address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_ip: Option<String>,
    /// Whether the verification ran in the production environment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_mode: Option<bool>,
    /// Time the verification was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub txn_time: Option<String>,
}

/// Page of verifications matching a merchant reference number.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationList {
    /// Matching verifications.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verifications: Option<Vec<Verification>>,
    /// Pagination details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}
