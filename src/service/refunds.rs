//! Refund operations.

use std::sync::Arc;

use tracing::instrument;

use crate::error::Result;
use crate::http::ApiClient;
use crate::model::cancel::{CancelRequest, CancelResponse};
use crate::model::refund::{Refund, RefundList, RefundRequest};
use crate::options::RequestOptions;
use crate::service::{list_query, ListFilter};

const PROCESS_REFUND_ENDPOINT: &str = "/v1/settlements/{settlement_id}/refunds";
const REFUND_ENDPOINT: &str = "/v1/refunds";

/// Client for the refunds resource.
#[derive(Debug, Clone)]
pub struct RefundService {
    api: Arc<ApiClient>,
}

impl RefundService {
    pub(crate) fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Refunds a settled payment, fully or partially.
    #[instrument(skip(self, refund_request, options))]
    pub async fn process_refund(
        &self,
        settlement_id: &str,
        refund_request: &RefundRequest,
        options: Option<&RequestOptions>,
    ) -> Result<Refund> {
        let path = PROCESS_REFUND_ENDPOINT.replace("{settlement_id}", settlement_id);
        self.api.post(&path, refund_request, options).await
    }

    /// Retrieves a refund by its id.
    #[instrument(skip(self, options))]
    pub async fn get_refund_by_id(
        &self,
        refund_id: &str,
        options: Option<&RequestOptions>,
    ) -> Result<Refund> {
        let path = format!("{REFUND_ENDPOINT}/{refund_id}");
        self.api.get(&path, &[], options).await
    }

    /// Retrieves refunds by merchant reference number.
    #[instrument(skip(self, filter, options))]
    pub async fn get_refunds_using_merchant_reference_number(
        &self,
        merchant_ref_num: &str,
        filter: Option<&ListFilter>,
        options: Option<&RequestOptions>,
    ) -> Result<RefundList> {
        let query = list_query(merchant_ref_num, filter);
        self.api.get(REFUND_ENDPOINT, &query, options).await
    }

    /// Cancels a pending refund.
    #[instrument(skip(self, options))]
    pub async fn cancel_refund(
        &self,
        refund_id: &str,
        options: Option<&RequestOptions>,
    ) -> Result<CancelResponse> {
        let path = format!("{REFUND_ENDPOINT}/{refund_id}");
        self.api.put(&path, &CancelRequest::default(), options).await
    }
}
