//! Payment method lookup operations.

use std::sync::Arc;

use tracing::instrument;

use crate::error::Result;
use crate::http::ApiClient;
use crate::model::common::CurrencyCode;
use crate::model::payment_method::LookUpPaymentMethodsResponse;
use crate::options::RequestOptions;

const PAYMENT_METHODS_ENDPOINT: &str = "/v1/paymentmethods";

/// Client for looking up enabled payment methods.
#[derive(Debug, Clone)]
pub struct PaymentMethodsService {
    api: Arc<ApiClient>,
}

impl PaymentMethodsService {
    pub(crate) fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Returns the payment methods enabled for the merchant account in the
    /// given currency.
    #[instrument(skip(self, options))]
    pub async fn look_up_payment_methods(
        &self,
        currency_code: CurrencyCode,
        options: Option<&RequestOptions>,
    ) -> Result<LookUpPaymentMethodsResponse> {
        let query = [("currencyCode", currency_code.as_str().to_string())];
        self.api
            .get(PAYMENT_METHODS_ENDPOINT, &query, options)
            .await
    }
}
