//! Payment models.

use serde::{Deserialize, Serialize};

use crate::model::api_error::ApiError;
use crate::model::common::{
    BillingDetails, CurrencyCode, GatewayResponse, MerchantDescriptor, Meta, Profile, ReturnLink,
};
use crate::model::settlement::Settlement;

/// Lifecycle status of a payment.
///
/// Extends the shared transaction statuses with `PROCESSING` and `HELD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    /// Request received, waiting for the downstream processor.
    Received,
    /// Submitted to the payment service provider.
    Processing,
    /// Payment completed.
    Completed,
    /// Placed on hold due to risk considerations.
    Held,
    /// Payment failed.
    Failed,
    /// Payment was cancelled.
    Cancelled,
    /// Payment is pending customer or processor action.
    Pending,
}

/// Request to process a payment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    /// Merchant reference number, unique per request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_ref_num: Option<String>,
    /// Amount in minor units.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    /// Currency code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<CurrencyCode>,
    /// Token of the payment handle to charge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_handle_token: Option<String>,
    /// Whether to settle immediately with the authorization.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settle_with_auth: Option<bool>,
    /// Whether this is a pre-authorization.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_auth: Option<bool>,
    /// Whether to reject duplicate merchant reference numbers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dup_check: Option<bool>,
    /// Merchant-side description of the transaction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Customer IP address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_ip: Option<String>,
    /// Statement descriptor override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_descriptor: Option<MerchantDescriptor>,
    /// Keywords for merchant-side search.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
}

/// A payment returned by the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    /// Payment identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Merchant reference number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_ref_num: Option<String>,
    /// Amount in minor units.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    /// Currency code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<CurrencyCode>,
    /// Token of the payment handle that was charged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_handle_token: Option<String>,
    /// Lifecycle status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PaymentStatus>,
    /// Amount still available to settle, minor units.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_to_settle: Option<i64>,
    /// Amount still available to refund, minor units.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_to_refund: Option<i64>,
    /// Payment method.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_type: Option<String>,
    /// Whether settlement was requested with the authorization.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settle_with_auth: Option<bool>,
    /// Whether this was a pre-authorization.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_auth: Option<bool>,
    /// Merchant-side description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Customer IP address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_ip: Option<String>,
    /// Customer profile attached to the payment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_profile: Option<Profile>,
    /// Customer billing address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_details: Option<BillingDetails>,
    /// Transaction identifier at the downstream gateway.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway_reconciliation_id: Option<String>,
    /// Gateway response details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway_response: Option<GatewayResponse>,
    /// Downstream error for failed payments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
    /// Risk reason codes for held payments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_reason_code: Option<Vec<i32>>,
    /// Settlements created from this payment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settlements: Option<Vec<Settlement>>,
    /// Redirect URLs supplied in the request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_links: Option<Vec<ReturnLink>>,
    /// Whether the payment ran in the production environment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_mode: Option<bool>,
    /// Time the payment was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub txn_time: Option<String>,
    /// Reason for the current status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_reason: Option<String>,
    /// Time of the last status change.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_time: Option<String>,
    /// Time of the last update.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_time: Option<String>,
}

/// Page of payments matching a merchant reference number.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentList {
    /// Matching payments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payments: Option<Vec<Payment>>,
    /// Pagination details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_status_extends_shared_statuses() {
        assert_eq!(
            serde_json::to_string(&PaymentStatus::Processing).unwrap(),
            "\"PROCESSING\""
        );
        assert_eq!(serde_json::to_string(&PaymentStatus::Held).unwrap(), "\"HELD\"");
    }

    #[test]
    fn test_payment_deserialization() {
        let body = r#"{
            "id": "pay-1",
            "merchantRefNum": "order-1",
            "amount": 500,
            "currencyCode": "USD",
            "status": "COMPLETED",
            "availableToSettle": 0,
            "availableToRefund": 500,
            "settleWithAuth": true,
            "gatewayResponse": {"processor": "SIMULATOR", "authCode": "123456"},
            "settlements": [{"id": "stl-1", "amount": 500, "status": "PENDING"}],
            "liveMode": false,
            "txnTime": "2024-05-01T10:00:00Z"
        }"#;
        let payment: Payment = serde_json::from_str(body).unwrap();
        assert_eq!(payment.status, Some(PaymentStatus::Completed));
        assert_eq!(payment.available_to_refund, Some(500));
        assert_eq!(
            payment.gateway_response.unwrap().auth_code.as_deref(),
            Some("123456")
        );
        assert_eq!(payment.settlements.unwrap().len(), 1);
    }

    #[test]
    fn test_payment_list_deserialization() {
        let body = r#"{
            "payments": [{"id": "pay-1"}, {"id": "pay-2"}],
            "meta": {"numberOfRecords": 2, "limit": 10, "page": 1}
        }"#;
        let list: PaymentList = serde_json::from_str(body).unwrap();
        assert_eq!(list.payments.unwrap().len(), 2);
        assert_eq!(list.meta.unwrap().number_of_records, Some(2));
    }
}
