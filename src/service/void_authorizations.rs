//! Void authorization operations.

use std::sync::Arc;

use tracing::instrument;

use crate::error::Result;
use crate::http::ApiClient;
use crate::model::void_authorization::{
    VoidAuthorization, VoidAuthorizationList, VoidAuthorizationRequest,
};
use crate::options::RequestOptions;
use crate::service::{list_query, ListFilter};

const VOID_AUTHORIZATION_ENDPOINT: &str = "/v1/payments/{payment_id}/voidauths";
const VOID_AUTHORIZATION_GET_ENDPOINT: &str = "/v1/voidauths";

/// Client for the void authorizations resource.
#[derive(Debug, Clone)]
pub struct VoidAuthorizationService {
    api: Arc<ApiClient>,
}

impl VoidAuthorizationService {
    pub(crate) fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Voids an authorized payment, fully or partially.
    #[instrument(skip(self, void_request, options))]
    pub async fn void_authorization(
        &self,
        payment_id: &str,
        void_request: &VoidAuthorizationRequest,
        options: Option<&RequestOptions>,
    ) -> Result<VoidAuthorization> {
        let path = VOID_AUTHORIZATION_ENDPOINT.replace("{payment_id}", payment_id);
        self.api.post(&path, void_request, options).await
    }

    /// Retrieves a void authorization by its id.
    #[instrument(skip(self, options))]
    pub async fn get_void_authorization_by_id(
        &self,
        void_auth_id: &str,
        options: Option<&RequestOptions>,
    ) -> Result<VoidAuthorization> {
        let path = format!("{VOID_AUTHORIZATION_GET_ENDPOINT}/{void_auth_id}");
        self.api.get(&path, &[], options).await
    }

    /// Retrieves void authorizations by merchant reference number.
    #[instrument(skip(self, filter, options))]
    pub async fn get_void_authorizations_using_merchant_reference_number(
        &self,
        merchant_ref_num: &str,
        filter: Option<&ListFilter>,
        options: Option<&RequestOptions>,
    ) -> Result<VoidAuthorizationList> {
        let query = list_query(merchant_ref_num, filter);
        self.api
            .get(VOID_AUTHORIZATION_GET_ENDPOINT, &query, options)
            .await
    }
}
