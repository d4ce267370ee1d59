//! Payment handle operations.

use std::sync::Arc;

use tracing::instrument;

use crate::error::Result;
use crate::http::ApiClient;
use crate::model::payment_handle::{PaymentHandle, PaymentHandleList, PaymentHandleRequest};
use crate::options::RequestOptions;
use crate::service::{list_query, ListFilter};

const PAYMENT_HANDLE_ENDPOINT: &str = "/v1/paymenthandles";

/// Client for the payment handles resource.
#[derive(Debug, Clone)]
pub struct PaymentHandleService {
    api: Arc<ApiClient>,
}

impl PaymentHandleService {
    pub(crate) fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Tokenizes a payment instrument into a payment handle.
    #[instrument(skip(self, payment_handle_request, options))]
    pub async fn create_payment_handle(
        &self,
        payment_handle_request: &PaymentHandleRequest,
        options: Option<&RequestOptions>,
    ) -> Result<PaymentHandle> {
        self.api
            .post(PAYMENT_HANDLE_ENDPOINT, payment_handle_request, options)
            .await
    }

    /// Retrieves a payment handle by its id.
    #[instrument(skip(self, options))]
    pub async fn get_payment_handle_by_id(
        &self,
        payment_handle_id: &str,
        options: Option<&RequestOptions>,
    ) -> Result<PaymentHandle> {
        let path = format!("{PAYMENT_HANDLE_ENDPOINT}/{payment_handle_id}");
        self.api.get(&path, &[], options).await
    }

    /// Retrieves payment handles by merchant reference number.
    #[instrument(skip(self, filter, options))]
    pub async fn get_payment_handles_using_merchant_reference_number(
        &self,
        merchant_ref_num: &str,
        filter: Option<&ListFilter>,
        options: Option<&RequestOptions>,
    ) -> Result<PaymentHandleList> {
        let query = list_query(merchant_ref_num, filter);
        self.api.get(PAYMENT_HANDLE_ENDPOINT, &query, options).await
    }
}
