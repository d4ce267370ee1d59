//! Payment handle models.
//!
//! A payment handle tokenizes a payment instrument; the resulting
//! `payment_handle_token` is then referenced by payments, verifications,
//! standalone credits, and original credits.

use serde::{Deserialize, Serialize};

use crate::model::api_error::ApiError;
use crate::model::card::Card;
use crate::model::common::{
    BillingDetails, CurrencyCode, DeviceDetails, GatewayResponse, Link, MerchantDescriptor, Meta,
    Profile, ReturnLink, ShippingDetails,
};

/// Transaction type the handle is created for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    /// Payment (debit) transaction.
    Payment,
    /// Credit not linked to a prior payment.
    StandaloneCredit,
    /// Original credit transaction.
    OriginalCredit,
    /// Card verification.
    Verification,
}

/// How many transactions the handle can be used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentHandleUsage {
    /// Valid for exactly one transaction.
    SingleUse,
    /// Reusable across transactions.
    MultiUse,
}

/// Whether the payment outcome is returned synchronously.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExecutionMode {
    /// The outcome is returned in the response, e.g. a card request.
    Synchronous,
    /// The outcome arrives later via webhook or polling.
    Asynchronous,
}

/// Next step the merchant must take to complete the handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// No further action required.
    None,
    /// Redirect the customer to the link provided.
    Redirect,
    /// Poll the handle for a status update.
    Lookup,
}

/// Lifecycle status of a payment handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentHandleStatus {
    /// Handle created with the downstream provider.
    Initiated,
    /// Handle is ready to be used in a transaction.
    Payable,
    /// Authorized by the customer, awaiting provider response.
    Processing,
    /// Handle creation failed.
    Failed,
    /// Handle expired before use.
    Expired,
    /// A transaction was completed with this handle.
    Completed,
}

/// Request to create a payment handle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentHandleRequest {
    /// Merchant reference number, unique per request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_ref_num: Option<String>,
    /// Transaction type the handle will be used for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_type: Option<TransactionType>,
    /// Merchant account to process against.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    /// Amount in minor units.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    /// Currency code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<CurrencyCode>,
    /// Payment method, e.g. "CARD".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_type: Option<String>,
    /// Card details for card handles.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,
    /// Existing token to derive this handle from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_handle_token_from: Option<String>,
    /// Customer billing address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_details: Option<BillingDetails>,
    /// Customer shipping address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_details: Option<ShippingDetails>,
    /// Customer profile.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<Profile>,
    /// Device fingerprint details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_details: Option<DeviceDetails>,
    /// Statement descriptor override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_descriptor: Option<MerchantDescriptor>,
    /// Redirect URLs for asynchronous flows.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_links: Option<Vec<ReturnLink>>,
    /// Customer IP address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_ip: Option<String>,
    /// Whether to reject duplicate merchant reference numbers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dup_check: Option<bool>,
}

/// A payment handle returned by the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentHandle {
    /// Handle identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Merchant reference number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_ref_num: Option<String>,
    /// Token to reference in subsequent transactions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_handle_token: Option<String>,
    /// Lifecycle status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PaymentHandleStatus>,
    /// Handle usage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<PaymentHandleUsage>,
    /// Execution mode of the underlying method.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_mode: Option<ExecutionMode>,
    /// Next step required of the merchant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<Action>,
    /// Transaction type the handle was created for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_type: Option<TransactionType>,
    /// Amount in minor units.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    /// Currency code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<CurrencyCode>,
    /// Payment method.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_type: Option<String>,
    /// Merchant account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    /// Card details, masked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,
    /// Customer billing address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_details: Option<BillingDetails>,
    /// Customer shipping address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_details: Option<ShippingDetails>,
    /// Customer profile.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<Profile>,
    /// Gateway response details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway_response: Option<GatewayResponse>,
    /// Downstream error for failed handles.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
    /// Links for redirect flows.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<Link>>,
    /// Redirect URLs supplied in the request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_links: Option<Vec<ReturnLink>>,
    /// Seconds until an unused handle expires.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_to_live_seconds: Option<i64>,
    /// Whether the handle was created in the production environment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_mode: Option<bool>,
    /// Customer IP address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_ip: Option<String>,
    /// Time the handle was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub txn_time: Option<String>,
    /// Time of the last status change.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_time: Option<String>,
    /// Time of the last update.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_time: Option<String>,
}

/// Page of payment handles matching a merchant reference number.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentHandleList {
    /// Matching handles.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_handles: Option<Vec<PaymentHandle>>,
    /// Pagination details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}
