//! Verification operations.

use std::sync::Arc;

use tracing::instrument;

use crate::error::Result;
use crate::http::ApiClient;
use crate::model::verification::{Verification, VerificationList, VerificationRequest};
use crate::options::RequestOptions;
use crate::service::{list_query, ListFilter};

const VERIFICATION_ENDPOINT: &str = "/v1/verifications";

/// Client for the verifications resource.
#[derive(Debug, Clone)]
pub struct VerificationService {
    api: Arc<ApiClient>,
}

impl VerificationService {
    pub(crate) fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Verifies a payment instrument without moving funds.
    #[instrument(skip(self, verification_request, options))]
    pub async fn create_verification(
        &self,
        verification_request: &VerificationRequest,
        options: Option<&RequestOptions>,
    ) -> Result<Verification> {
        self.api
            .post(VERIFICATION_ENDPOINT, verification_request, options)
            .await
    }

    /// Retrieves a verification by its id.
    #[instrument(skip(self, options))]
    pub async fn get_verification_by_id(
        &self,
        verification_id: &str,
        options: Option<&RequestOptions>,
    ) -> Result<Verification> {
        let path = format!("{VERIFICATION_ENDPOINT}/{verification_id}");
        self.api.get(&path, &[], options).await
    }

    /// Retrieves verifications by merchant reference number.
    #[instrument(skip(self, filter, options))]
    pub async fn get_verifications_using_merchant_reference_number(
        &self,
        merchant_ref_num: &str,
        filter: Option<&ListFilter>,
        options: Option<&RequestOptions>,
    ) -> Result<VerificationList> {
        let query = list_query(merchant_ref_num, filter);
        self.api.get(VERIFICATION_ENDPOINT, &query, options).await
    }
}
