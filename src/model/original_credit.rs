//! Original credit models.
//!
//! An original credit transaction (OCT) pushes funds directly to a card.

use serde::{Deserialize, Serialize};

use crate::model::api_error::ApiError;
use crate::model::card::Card;
use crate::model::common::{CurrencyCode, GatewayResponse, Meta, TransactionRequestStatus};

/// Request to process an original credit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OriginalCreditRequest {
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

/// An original credit returned by the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OriginalCredit {
    /// Original credit identifier.
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
    /// Lifecycle status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TransactionRequestStatus>,
    /// Credited card, masked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,
    /// Transaction identifier at the downstream gateway.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway_reconciliation_id: Option<String>,
    /// Gateway response details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway_response: Option<GatewayResponse>,
    /// Downstream error for failed credits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
    /// Whether the credit ran in the production environment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_mode: Option<bool>,
    /// Time the credit was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub txn_time: Option<String>,
    /// Time of the last update.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_time: Option<String>,
}

/// Page of original credits matching a merchant reference number.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OriginalCreditList {
    /// Matching original credits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_credits: Option<Vec<OriginalCredit>>,
    /// Pagination details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_original_credit_list_field_name() {
        let list: OriginalCreditList =
            serde_json::from_str(r#"{"originalCredits": [{"id": "oc-1"}]}"#).unwrap();
        assert_eq!(
            list.original_credits.unwrap()[0].id.as_deref(),
            Some("oc-1")
        );
    }
}
