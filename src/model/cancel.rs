//! Cancellation request and response shared by all cancellable transactions.

use serde::{Deserialize, Serialize};

use crate::model::common::TransactionRequestStatus;

/// Body of a cancel request; the only accepted status is `CANCELLED`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelRequest {
    /// Requested status.
    pub status: TransactionRequestStatus,
}

impl Default for CancelRequest {
    fn default() -> Self {
        Self {
            status: TransactionRequestStatus::Cancelled,
        }
    }
}

/// Response to a cancellation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelResponse {
    /// Identifier of the cancelled transaction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Resulting status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TransactionRequestStatus>,
    /// Time the cancellation was processed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub txn_time: Option<String>,
}
