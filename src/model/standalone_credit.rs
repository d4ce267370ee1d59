//! Standalone credit models.
//!
//! A standalone credit pushes funds to a customer without a prior payment,
//! e.g. an Interac e-Transfer payout.

use serde::{Deserialize, Serialize};

use crate::model::api_error::ApiError;
use crate::model::common::{
    BillingDetails, CurrencyCode, GatewayResponse, Meta, Profile, TransactionRequestStatus,
};

/// Interac e-Transfer details for a standalone credit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interac {
    /// Consumer identifier at Interac.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumer_id: Option<String>,
    /// Type of the consumer identifier.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub consumer_id_type: Option<String>,
    /// Transfer method.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    /// Security question for the transfer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    /// Answer to the security question.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    /// Payment reference shown to the customer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_reference: Option<String>,
    /// Minutes until the payment reference expires.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_ref_expiry_minutes: Option<i64>,
    /// Maximum amount in minor units.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_amount: Option<i64>,
    /// Transfer type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transfer_type: Option<String>,
    /// Fraud status reported by Interac.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fraud_status: Option<String>,
    /// Fraud type reported by Interac.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fraud_type: Option<String>,
}

/// Request to process a standalone credit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandaloneCreditRequest {
    /// Merchant reference number, unique per request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_ref_num: Option<String>,
    /// Amount in minor units.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    /// Currency code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<CurrencyCode>,
    /// Token of the payment handle to credit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_handle_token: Option<String>,
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

/// Request to update an Interac standalone credit held for fraud review.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandaloneCreditUpdateRequest {
    /// Merchant reference number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_ref_num: Option<String>,
    /// Updated Interac details.
    #[serde(rename = "interacEtransfer", skip_serializing_if = "Option::is_none")]
    pub interac_etransfer: Option<Interac>,
}

/// A standalone credit returned by the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandaloneCredit {
    /// Standalone credit identifier.
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
    /// Token of the payment handle that was credited.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_handle_token: Option<String>,
    /// Lifecycle status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TransactionRequestStatus>,
    /// Payment method.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_type: Option<String>,
    /// Interac e-Transfer details.
    #[serde(rename = "interacETransfer", skip_serializing_if = "Option::is_none")]
    pub interac_etransfer: Option<Interac>,
    /// Customer profile.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<Profile>,
    /// Customer billing address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_details: Option<BillingDetails>,
    /// Transaction identifier at the downstream gateway.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway_reconciliation_id: Option<String>,
    /// Gateway response details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway_response: Option<GatewayResponse>,
    /// Downstream error for failed credits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
    /// Merchant-side description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether the credit ran in the production environment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_mode: Option<bool>,
    /// Time the credit was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub txn_time: Option<String>,
    /// Time of the last status change.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_time: Option<String>,
    /// Time of the last update.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_time: Option<String>,
}

/// Page of standalone credits matching a merchant reference number.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandaloneCreditList {
    /// Matching standalone credits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standalone_credits: Option<Vec<StandaloneCredit>>,
    /// Pagination details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_request_field_casing() {
        let request = StandaloneCreditUpdateRequest {
            merchant_ref_num: Some("credit-1".to_string()),
            interac_etransfer: Some(Interac {
                fraud_status: Some("APPROVED".to_string()),
                ..Default::default()
            }),
        };
        let json = serde_json::to_value(&request).unwrap();
        // Update requests use "interacEtransfer"; responses use "interacETransfer".
        assert!(json.get("interacEtransfer").is_some());
        assert_eq!(json["interacEtransfer"]["fraudStatus"], "APPROVED");
    }

    #[test]
    fn test_standalone_credit_deserialization() {
        let credit: StandaloneCredit = serde_json::from_str(
            r#"{"id": "sc-1", "status": "PENDING", "interacETransfer": {"consumerId": "jane@example.com"}}"#,
        )
        .unwrap();
        assert_eq!(credit.status, Some(TransactionRequestStatus::Pending));
        assert_eq!(
            credit.interac_etransfer.unwrap().consumer_id.as_deref(),
            Some("jane@example.com")
        );
    }
}
