//! Customer vault operations.

use std::sync::Arc;

use tracing::instrument;

use crate::error::Result;
use crate::http::{build_query_parameters, ApiClient};
use crate::model::customer::{Customer, CustomerRequest};
use crate::options::RequestOptions;

const CUSTOMERS_ENDPOINT: &str = "/v1/customers";

fn fields_param(fields: Option<&[&str]>) -> Option<String> {
    fields.map(|f| f.join(","))
}

/// Client for the customers resource.
#[derive(Debug, Clone)]
pub struct CustomerService {
    api: Arc<ApiClient>,
}

impl CustomerService {
    pub(crate) fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Stores a new customer.
    #[instrument(skip(self, customer_request, options))]
    pub async fn create_customer(
        &self,
        customer_request: &CustomerRequest,
        options: Option<&RequestOptions>,
    ) -> Result<Customer> {
        self.api
            .post(CUSTOMERS_ENDPOINT, customer_request, options)
            .await
    }

    /// Retrieves a customer by its id.
    ///
    /// `fields` selects sub-components to embed, e.g. `addresses` or
    /// `paymenthandles`.
    #[instrument(skip(self, fields, options))]
    pub async fn get_customer_by_id(
        &self,
        customer_id: &str,
        fields: Option<&[&str]>,
        options: Option<&RequestOptions>,
    ) -> Result<Customer> {
        let path = format!("{CUSTOMERS_ENDPOINT}/{customer_id}");
        let query = build_query_parameters(&[("fields", fields_param(fields))]);
        self.api.get(&path, &query, options).await
    }

    /// Retrieves a customer by the merchant-assigned customer id.
    #[instrument(skip(self, fields, options))]
    pub async fn get_customer_by_merchant_customer_id(
        &self,
        merchant_customer_id: &str,
        fields: Option<&[&str]>,
        options: Option<&RequestOptions>,
    ) -> Result<Customer> {
        let query = build_query_parameters(&[
            ("merchantCustomerId", Some(merchant_customer_id.to_string())),
            ("fields", fields_param(fields)),
        ]);
        self.api.get(CUSTOMERS_ENDPOINT, &query, options).await
    }

    /// Replaces a customer's details.
    #[instrument(skip(self, customer_request, options))]
    pub async fn update_customer(
        &self,
        customer_id: &str,
        customer_request: &CustomerRequest,
        options: Option<&RequestOptions>,
    ) -> Result<Customer> {
        let path = format!("{CUSTOMERS_ENDPOINT}/{customer_id}");
        self.api.put(&path, customer_request, options).await
    }

    /// Deletes a customer and all stored instruments.
    #[instrument(skip(self, options))]
    pub async fn delete_customer(
        &self,
        customer_id: &str,
        options: Option<&RequestOptions>,
    ) -> Result<()> {
        let path = format!("{CUSTOMERS_ENDPOINT}/{customer_id}");
        self.api.delete(&path, options).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_param_joined_with_commas() {
        assert_eq!(
            fields_param(Some(&["addresses", "paymenthandles"])),
            Some("addresses,paymenthandles".to_string())
        );
        assert_eq!(fields_param(None), None);
    }
}
