//! Customer address operations.

use std::sync::Arc;

use tracing::instrument;

use crate::error::Result;
use crate::http::ApiClient;
use crate::model::customer::Address;
use crate::options::RequestOptions;

const CUSTOMER_ADDRESS_ENDPOINT: &str = "/v1/customers/{customer_id}/addresses";

fn address_path(customer_id: &str, address_id: &str) -> String {
    format!(
        "{}/{address_id}",
        CUSTOMER_ADDRESS_ENDPOINT.replace("{customer_id}", customer_id)
    )
}

/// Client for addresses stored on a customer.
#[derive(Debug, Clone)]
pub struct CustomerAddressService {
    api: Arc<ApiClient>,
}

impl CustomerAddressService {
    pub(crate) fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Stores a new address on a customer.
    #[instrument(skip(self, address, options))]
    pub async fn create_address(
        &self,
        customer_id: &str,
        address: &Address,
        options: Option<&RequestOptions>,
    ) -> Result<Address> {
        let path = CUSTOMER_ADDRESS_ENDPOINT.replace("{customer_id}", customer_id);
        self.api.post(&path, address, options).await
    }

    /// Retrieves a stored address.
    #[instrument(skip(self, options))]
    pub async fn get_address_by_id(
        &self,
        customer_id: &str,
        address_id: &str,
        options: Option<&RequestOptions>,
    ) -> Result<Address> {
        self.api
            .get(&address_path(customer_id, address_id), &[], options)
            .await
    }

    /// Replaces a stored address.
    #[instrument(skip(self, address, options))]
    pub async fn update_address(
        &self,
        customer_id: &str,
        address_id: &str,
        address: &Address,
        options: Option<&RequestOptions>,
    ) -> Result<Address> {
        self.api
            .put(&address_path(customer_id, address_id), address, options)
            .await
    }

    /// Deletes a stored address.
    #[instrument(skip(self, options))]
    pub async fn delete_address(
        &self,
        customer_id: &str,
        address_id: &str,
        options: Option<&RequestOptions>,
    ) -> Result<()> {
        self.api
            .delete(&address_path(customer_id, address_id), options)
            .await
    }
}
