//! Payment operations.

use std::sync::Arc;

use tracing::instrument;

use crate::error::Result;
use crate::http::ApiClient;
use crate::model::cancel::{CancelRequest, CancelResponse};
use crate::model::payment::{Payment, PaymentList, PaymentRequest};
use crate::options::RequestOptions;
use crate::service::{list_query, ListFilter};

const PAYMENT_ENDPOINT: &str = "/v1/payments";

/// Client for the payments resource.
#[derive(Debug, Clone)]
pub struct PaymentService {
    api: Arc<ApiClient>,
}

impl PaymentService {
    pub(crate) fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Charges a payment handle.
    #[instrument(skip(self, payment_request, options))]
    pub async fn process_payment(
        &self,
        payment_request: &PaymentRequest,
        options: Option<&RequestOptions>,
    ) -> Result<Payment> {
        self.api.post(PAYMENT_ENDPOINT, payment_request, options).await
    }

    /// Retrieves a payment by its id.
    #[instrument(skip(self, options))]
    pub async fn get_payment_by_id(
        &self,
        payment_id: &str,
        options: Option<&RequestOptions>,
    ) -> Result<Payment> {
        let path = format!("{PAYMENT_ENDPOINT}/{payment_id}");
        self.api.get(&path, &[], options).await
    }

    /// Retrieves payments by merchant reference number.
    #[instrument(skip(self, filter, options))]
    pub async fn get_payments_using_merchant_reference_number(
        &self,
        merchant_ref_num: &str,
        filter: Option<&ListFilter>,
        options: Option<&RequestOptions>,
    ) -> Result<PaymentList> {
        let query = list_query(merchant_ref_num, filter);
        self.api.get(PAYMENT_ENDPOINT, &query, options).await
    }

    /// Cancels a payment that has not yet been settled.
    #[instrument(skip(self, options))]
    pub async fn cancel_payment(
        &self,
        payment_id: &str,
        options: Option<&RequestOptions>,
    ) -> Result<CancelResponse> {
        let path = format!("{PAYMENT_ENDPOINT}/{payment_id}");
        self.api.put(&path, &CancelRequest::default(), options).await
    }
}
