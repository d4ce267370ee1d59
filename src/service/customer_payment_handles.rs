//! Operations on payment handles stored on a customer.

use std::sync::Arc;

use tracing::instrument;

use crate::error::Result;
use crate::http::ApiClient;
use crate::model::customer::{CustomerPaymentHandle, CustomerPaymentHandleRequest};
use crate::options::RequestOptions;

const CREATE_CUSTOMER_PAYMENT_HANDLE_ENDPOINT: &str = "/v1/customers/{customer_id}/paymenthandles";

fn handle_path(customer_id: &str, payment_handle_id: &str) -> String {
    format!(
        "{}/{payment_handle_id}",
        CREATE_CUSTOMER_PAYMENT_HANDLE_ENDPOINT.replace("{customer_id}", customer_id)
    )
}

/// Client for payment handles stored on a customer.
#[derive(Debug, Clone)]
pub struct CustomerPaymentHandleService {
    api: Arc<ApiClient>,
}

impl CustomerPaymentHandleService {
    pub(crate) fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Converts a single-use handle into a multi-use handle stored on the
    /// customer, or stores a new instrument directly.
    #[instrument(skip(self, handle_request, options))]
    pub async fn create_payment_handle_for_customer(
        &self,
        customer_id: &str,
        handle_request: &CustomerPaymentHandleRequest,
        options: Option<&RequestOptions>,
    ) -> Result<CustomerPaymentHandle> {
        let path = CREATE_CUSTOMER_PAYMENT_HANDLE_ENDPOINT.replace("{customer_id}", customer_id);
        self.api.post(&path, handle_request, options).await
    }

    /// Retrieves a stored payment handle.
    #[instrument(skip(self, options))]
    pub async fn get_customer_payment_handle_by_id(
        &self,
        customer_id: &str,
        payment_handle_id: &str,
        options: Option<&RequestOptions>,
    ) -> Result<CustomerPaymentHandle> {
        self.api
            .get(&handle_path(customer_id, payment_handle_id), &[], options)
            .await
    }

    /// Replaces a stored payment handle.
    #[instrument(skip(self, handle_request, options))]
    pub async fn update_customer_payment_handle(
        &self,
        customer_id: &str,
        payment_handle_id: &str,
        handle_request: &CustomerPaymentHandleRequest,
        options: Option<&RequestOptions>,
    ) -> Result<CustomerPaymentHandle> {
        self.api
            .put(
                &handle_path(customer_id, payment_handle_id),
                handle_request,
                options,
            )
            .await
    }

    /// Deletes a stored payment handle.
    #[instrument(skip(self, options))]
    pub async fn delete_customer_payment_handle(
        &self,
        customer_id: &str,
        payment_handle_id: &str,
        options: Option<&RequestOptions>,
    ) -> Result<()> {
        self.api
            .delete(&handle_path(customer_id, payment_handle_id), options)
            .await
    }
}
