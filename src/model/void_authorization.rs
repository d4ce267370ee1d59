//! Void authorization models.

use serde::{Deserialize, Serialize};

use crate::model::common::{Meta, TransactionRequestStatus};

/// Request to void an authorization, fully or partially.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoidAuthorizationRequest {
    /// Merchant reference number, unique per request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_ref_num: Option<String>,
    /// Amount to void in minor units; defaults to the authorized amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
}

/// A void authorization returned by the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoidAuthorization {
    /// Void identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Merchant reference number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_ref_num: Option<String>,
    /// Voided amount in minor units.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    /// Lifecycle status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TransactionRequestStatus>,
    /// Time the void was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub txn_time: Option<String>,
}

/// Page of void authorizations matching a merchant reference number.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoidAuthorizationList {
    /// Matching voids.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub void_auths: Option<Vec<VoidAuthorization>>,
    /// Pagination details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_void_list_field_name() {
        let list: VoidAuthorizationList = serde_json::from_str(
            r#"{"voidAuths": [{"id": "void-1", "status": "COMPLETED"}], "meta": {"limit": 10}}"#,
        )
        .unwrap();
        let voids = list.void_auths.unwrap();
        assert_eq!(voids[0].id.as_deref(), Some("void-1"));
        assert_eq!(voids[0].status, Some(TransactionRequestStatus::Completed));
    }
}
