//! Original credit operations.

use std::sync::Arc;

use tracing::instrument;

use crate::error::Result;
use crate::http::ApiClient;
use crate::model::cancel::{CancelRequest, CancelResponse};
use crate::model::original_credit::{OriginalCredit, OriginalCreditList, OriginalCreditRequest};
use crate::options::RequestOptions;
use crate::service::{list_query, ListFilter};

const ORIGINAL_CREDIT_ENDPOINT: &str = "/v1/originalcredits";

/// Client for the original credits resource.
#[derive(Debug, Clone)]
pub struct OriginalCreditService {
    api: Arc<ApiClient>,
}

impl OriginalCreditService {
    pub(crate) fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Pushes funds directly to a card.
    #[instrument(skip(self, credit_request, options))]
    pub async fn process_original_credit(
        &self,
        credit_request: &OriginalCreditRequest,
        options: Option<&RequestOptions>,
    ) -> Result<OriginalCredit> {
        self.api
            .post(ORIGINAL_CREDIT_ENDPOINT, credit_request, options)
            .await
    }

    /// Retrieves an original credit by its id.
    #[instrument(skip(self, options))]
    pub async fn get_original_credit_by_id(
        &self,
        original_credit_id: &str,
        options: Option<&RequestOptions>,
    ) -> Result<OriginalCredit> {
        let path = format!("{ORIGINAL_CREDIT_ENDPOINT}/{original_credit_id}");
        self.api.get(&path, &[], options).await
    }

    /// Retrieves original credits by merchant reference number.
    #[instrument(skip(self, filter, options))]
    pub async fn get_original_credits_using_merchant_reference_number(
        &self,
        merchant_ref_num: &str,
        filter: Option<&ListFilter>,
        options: Option<&RequestOptions>,
    ) -> Result<OriginalCreditList> {
        let query = list_query(merchant_ref_num, filter);
        self.api
            .get(ORIGINAL_CREDIT_ENDPOINT, &query, options)
            .await
    }

    /// Cancels a pending original credit.
    #[instrument(skip(self, options))]
    pub async fn cancel_original_credit(
        &self,
        original_credit_id: &str,
        options: Option<&RequestOptions>,
    ) -> Result<CancelResponse> {
        let path = format!("{ORIGINAL_CREDIT_ENDPOINT}/{original_credit_id}");
        self.api.put(&path, &CancelRequest::default(), options).await
    }
}
