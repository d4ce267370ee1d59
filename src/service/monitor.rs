//! Service monitor operations.

use std::sync::Arc;

use tracing::instrument;

use crate::error::Result;
use crate::http::ApiClient;
use crate::model::monitor::MonitorResponse;
use crate::options::RequestOptions;

const MONITOR_ENDPOINT: &str = "/v1/monitor";

/// Client for the service monitor endpoint.
#[derive(Debug, Clone)]
pub struct MonitorService {
    api: Arc<ApiClient>,
}

impl MonitorService {
    pub(crate) fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Checks that the Payments API is reachable and operational.
    #[instrument(skip(self, options))]
    pub async fn verify_service_is_accessible(
        &self,
        options: Option<&RequestOptions>,
    ) -> Result<MonitorResponse> {
        self.api.get(MONITOR_ENDPOINT, &[], options).await
    }
}
