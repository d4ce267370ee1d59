//! Settlement operations.

use std::sync::Arc;

use tracing::instrument;

use crate::error::Result;
use crate::http::ApiClient;
use crate::model::cancel::{CancelRequest, CancelResponse};
use crate::model::settlement::{Settlement, SettlementList, SettlementRequest};
use crate::options::RequestOptions;
use crate::service::{list_query, ListFilter};

const PAYMENT_SETTLEMENT_ENDPOINT: &str = "/v1/payments/{payment_id}/settlements";
const SETTLEMENT_ENDPOINT: &str = "/v1/settlements";

/// Client for the settlements resource.
#[derive(Debug, Clone)]
pub struct SettlementService {
    api: Arc<ApiClient>,
}

impl SettlementService {
    pub(crate) fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Settles an authorized payment, fully or partially.
    #[instrument(skip(self, settlement_request, options))]
    pub async fn process_settlement(
        &self,
        payment_id: &str,
        settlement_request: &SettlementRequest,
        options: Option<&RequestOptions>,
    ) -> Result<Settlement> {
        let path = PAYMENT_SETTLEMENT_ENDPOINT.replace("{payment_id}", payment_id);
        self.api.post(&path, settlement_request, options).await
    }

    /// Retrieves a settlement by its id.
    #[instrument(skip(self, options))]
    pub async fn get_settlement_by_id(
        &self,
        settlement_id: &str,
        options: Option<&RequestOptions>,
    ) -> Result<Settlement> {
        let path = format!("{SETTLEMENT_ENDPOINT}/{settlement_id}");
        self.api.get(&path, &[], options).await
    }

    /// Retrieves settlements by merchant reference number.
    #[instrument(skip(self, filter, options))]
    pub async fn get_settlements_using_merchant_reference_number(
        &self,
        merchant_ref_num: &str,
        filter: Option<&ListFilter>,
        options: Option<&RequestOptions>,
    ) -> Result<SettlementList> {
        let query = list_query(merchant_ref_num, filter);
        self.api.get(SETTLEMENT_ENDPOINT, &query, options).await
    }

    /// Cancels a settlement that has not yet been batched.
    #[instrument(skip(self, options))]
    pub async fn cancel_settlement(
        &self,
        settlement_id: &str,
        options: Option<&RequestOptions>,
    ) -> Result<CancelResponse> {
        let path = format!("{SETTLEMENT_ENDPOINT}/{settlement_id}");
        self.api.put(&path, &CancelRequest::default(), options).await
    }
}
