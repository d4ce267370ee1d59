//! Standalone credit operations.

use std::sync::Arc;

use tracing::instrument;

use crate::error::Result;
use crate::http::ApiClient;
use crate::model::cancel::{CancelRequest, CancelResponse};
use crate::model::standalone_credit::{
    StandaloneCredit, StandaloneCreditList, StandaloneCreditRequest, StandaloneCreditUpdateRequest,
};
use crate::options::RequestOptions;
use crate::service::{list_query, ListFilter};

const STANDALONE_CREDIT_ENDPOINT: &str = "/v1/standalonecredits";

/// Client for the standalone credits resource.
#[derive(Debug, Clone)]
pub struct StandaloneCreditService {
    api: Arc<ApiClient>,
}

impl StandaloneCreditService {
    pub(crate) fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Pushes funds to a customer without a prior payment.
    #[instrument(skip(self, credit_request, options))]
    pub async fn process_standalone_credit(
        &self,
        credit_request: &StandaloneCreditRequest,
        options: Option<&RequestOptions>,
    ) -> Result<StandaloneCredit> {
        self.api
            .post(STANDALONE_CREDIT_ENDPOINT, credit_request, options)
            .await
    }

    /// Retrieves a standalone credit by its id.
    #[instrument(skip(self, options))]
    pub async fn get_standalone_credit_by_id(
        &self,
        standalone_credit_id: &str,
        options: Option<&RequestOptions>,
    ) -> Result<StandaloneCredit> {
        let path = format!("{STANDALONE_CREDIT_ENDPOINT}/{standalone_credit_id}");
        self.api.get(&path, &[], options).await
    }

    /// Retrieves standalone credits by merchant reference number.
    #[instrument(skip(self, filter, options))]
    pub async fn get_standalone_credits_using_merchant_reference_number(
        &self,
        merchant_ref_num: &str,
        filter: Option<&ListFilter>,
        options: Option<&RequestOptions>,
    ) -> Result<StandaloneCreditList> {
        let query = list_query(merchant_ref_num, filter);
        self.api
            .get(STANDALONE_CREDIT_ENDPOINT, &query, options)
            .await
    }

    /// Cancels a pending standalone credit.
    #[instrument(skip(self, options))]
    pub async fn cancel_standalone_credit(
        &self,
        standalone_credit_id: &str,
        options: Option<&RequestOptions>,
    ) -> Result<CancelResponse> {
        let path = format!("{STANDALONE_CREDIT_ENDPOINT}/{standalone_credit_id}");
        self.api.put(&path, &CancelRequest::default(), options).await
    }

    /// Updates an Interac standalone credit held for fraud review.
    #[instrument(skip(self, update_request, options))]
    pub async fn update_standalone_credit(
        &self,
        standalone_credit_id: &str,
        update_request: &StandaloneCreditUpdateRequest,
        options: Option<&RequestOptions>,
    ) -> Result<StandaloneCredit> {
        let path = format!("{STANDALONE_CREDIT_ENDPOINT}/{standalone_credit_id}");
        self.api.patch(&path, update_request, options).await
    }
}
