//! Single-use customer token operations.

use std::sync::Arc;

use tracing::instrument;

use crate::error::Result;
use crate::http::ApiClient;
use crate::model::customer::{SingleUseCustomerToken, SingleUseCustomerTokenRequest};
use crate::options::RequestOptions;

const CREATE_SINGLE_USE_TOKEN_ENDPOINT: &str = "/v1/customers/{customer_id}/singleusecustomertokens";
const GET_SINGLE_USE_TOKEN_ENDPOINT: &str = "/v1/singleusecustomertokens";

/// Client for single-use customer tokens.
#[derive(Debug, Clone)]
pub struct CustomerSingleUseTokenService {
    api: Arc<ApiClient>,
}

impl CustomerSingleUseTokenService {
    pub(crate) fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Creates a single-use token snapshotting the customer's stored data.
    #[instrument(skip(self, token_request, options))]
    pub async fn create_single_use_customer_token(
        &self,
        customer_id: &str,
        token_request: &SingleUseCustomerTokenRequest,
        options: Option<&RequestOptions>,
    ) -> Result<SingleUseCustomerToken> {
        let path = CREATE_SINGLE_USE_TOKEN_ENDPOINT.replace("{customer_id}", customer_id);
        self.api.post(&path, token_request, options).await
    }

    /// Retrieves a single-use customer token by its id.
    #[instrument(skip(self, options))]
    pub async fn get_single_use_customer_token(
        &self,
        single_use_customer_token_id: &str,
        options: Option<&RequestOptions>,
    ) -> Result<SingleUseCustomerToken> {
        let path = format!("{GET_SINGLE_USE_TOKEN_ENDPOINT}/{single_use_customer_token_id}");
        self.api.get(&path, &[], options).await
    }
}
