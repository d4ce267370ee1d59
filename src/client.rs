//! Top-level client and builder.

use std::sync::Arc;
use std::time::Duration;

use crate::config::{
    Environment, ProxyConfig, DEFAULT_CONNECT_TIMEOUT, DEFAULT_MAX_AUTOMATIC_RETRIES,
    DEFAULT_RESPONSE_TIMEOUT,
};
use crate::credentials::ApiKey;
use crate::error::Result;
use crate::http::{ApiClient, ApiClientConfig};
use crate::service::{
    CustomerAddressService, CustomerPaymentHandleService, CustomerService,
    CustomerSingleUseTokenService, MonitorService, OriginalCreditService, PaymentHandleService,
    PaymentMethodsService, PaymentService, RefundService, SettlementService,
    StandaloneCreditService, VerificationService, VoidAuthorizationService,
};
use crate::validation;

/// Entry point to the Payments API.
///
/// Cloning is cheap; all clones share one connection pool. Obtain resource
/// clients through the `*_service` accessors.
///
/// # Example
///
/// ```rust,no_run
/// use paysafe_payments::{Environment, PaysafeClient};
///
/// # fn main() -> paysafe_payments::Result<()> {
/// let client = PaysafeClient::builder()
///     .api_key("apiKeyId:apiKeyPassword")
///     .environment(Environment::Test)
///     .max_automatic_retries(3)
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct PaysafeClient {
    api: Arc<ApiClient>,
}

impl PaysafeClient {
    /// Creates a client with default timeouts and retry settings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) if
    /// the API key is blank or not in `username:password` form.
    pub fn new(api_key: impl Into<String>, environment: Environment) -> Result<Self> {
        Self::builder()
            .api_key(api_key)
            .environment(environment)
            .build()
    }

    /// Returns a builder for configuring timeouts, retries and a proxy.
    pub fn builder() -> PaysafeClientBuilder {
        PaysafeClientBuilder::default()
    }

    /// Returns the environment this client targets.
    pub fn environment(&self) -> Environment {
        self.api.environment()
    }

    /// Returns the base URL requests are sent to.
    pub fn base_url(&self) -> String {
        self.api.base_url()
    }

    /// Redirects all requests to a different base URL.
    ///
    /// Intended for integration tests against a local mock server.
    pub fn override_base_url(&self, base_url: impl Into<String>) {
        self.api.override_base_url(base_url);
    }

    /// Service for checking API availability.
    pub fn monitor_service(&self) -> MonitorService {
        MonitorService::new(Arc::clone(&self.api))
    }

    /// Service for processing and looking up payments.
    pub fn payment_service(&self) -> PaymentService {
        PaymentService::new(Arc::clone(&self.api))
    }

    /// Service for creating and looking up payment handles.
    pub fn payment_handle_service(&self) -> PaymentHandleService {
        PaymentHandleService::new(Arc::clone(&self.api))
    }

    /// Service for discovering available payment methods.
    pub fn payment_methods_service(&self) -> PaymentMethodsService {
        PaymentMethodsService::new(Arc::clone(&self.api))
    }

    /// Service for account verifications.
    pub fn verification_service(&self) -> VerificationService {
        VerificationService::new(Arc::clone(&self.api))
    }

    /// Service for voiding authorizations.
    pub fn void_authorization_service(&self) -> VoidAuthorizationService {
        VoidAuthorizationService::new(Arc::clone(&self.api))
    }

    /// Service for settlements (captures).
    pub fn settlement_service(&self) -> SettlementService {
        SettlementService::new(Arc::clone(&self.api))
    }

    /// Service for refunds.
    pub fn refund_service(&self) -> RefundService {
        RefundService::new(Arc::clone(&self.api))
    }

    /// Service for standalone credits.
    pub fn standalone_credit_service(&self) -> StandaloneCreditService {
        StandaloneCreditService::new(Arc::clone(&self.api))
    }

    /// Service for original credits.
    pub fn original_credit_service(&self) -> OriginalCreditService {
        OriginalCreditService::new(Arc::clone(&self.api))
    }

    /// Service for stored customers.
    pub fn customer_service(&self) -> CustomerService {
        CustomerService::new(Arc::clone(&self.api))
    }

    /// Service for addresses stored on a customer.
    pub fn customer_address_service(&self) -> CustomerAddressService {
        CustomerAddressService::new(Arc::clone(&self.api))
    }

    /// Service for payment handles stored on a customer.
    pub fn customer_payment_handle_service(&self) -> CustomerPaymentHandleService {
        CustomerPaymentHandleService::new(Arc::clone(&self.api))
    }

    /// Service for single-use customer tokens.
    pub fn customer_single_use_token_service(&self) -> CustomerSingleUseTokenService {
        CustomerSingleUseTokenService::new(Arc::clone(&self.api))
    }
}

/// Builder for [`PaysafeClient`].
#[derive(Debug, Clone, Default)]
pub struct PaysafeClientBuilder {
    api_key: Option<String>,
    environment: Environment,
    connect_timeout: Option<Duration>,
    response_timeout: Option<Duration>,
    max_automatic_retries: Option<u32>,
    proxy: Option<ProxyConfig>,
}

impl PaysafeClientBuilder {
    /// Sets the merchant API key in `username:password` form. Required.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Sets the target environment. Defaults to [`Environment::Test`].
    pub fn environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Sets the TCP connection timeout. Defaults to 30 seconds.
    pub fn connect_timeout(mut self, connect_timeout: Duration) -> Self {
        self.connect_timeout = Some(connect_timeout);
        self
    }

    /// Sets the default response timeout. Defaults to 60 seconds.
    pub fn response_timeout(mut self, response_timeout: Duration) -> Self {
        self.response_timeout = Some(response_timeout);
        self
    }

    /// Sets the automatic retry count for GET requests (0..=5). Defaults to 2.
    pub fn max_automatic_retries(mut self, max_automatic_retries: u32) -> Self {
        self.max_automatic_retries = Some(max_automatic_retries);
        self
    }

    /// Routes all requests through the given proxy.
    pub fn proxy(mut self, proxy: ProxyConfig) -> Self {
        self.proxy = Some(proxy);
        self
    }

    /// Validates the configuration and builds the client.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) for a
    /// missing or malformed API key, a retry count above 5, or a zero timeout.
    pub fn build(self) -> Result<PaysafeClient> {
        let api_key = ApiKey::parse(self.api_key.unwrap_or_default())?;
        validation::validate_max_automatic_retries(self.max_automatic_retries)?;
        validation::validate_connect_timeout(self.connect_timeout)?;
        validation::validate_response_timeout(self.response_timeout)?;

        let api = ApiClient::new(ApiClientConfig {
            api_key,
            environment: self.environment,
            connect_timeout: self.connect_timeout.unwrap_or(DEFAULT_CONNECT_TIMEOUT),
            response_timeout: self.response_timeout.unwrap_or(DEFAULT_RESPONSE_TIMEOUT),
            max_automatic_retries: self
                .max_automatic_retries
                .unwrap_or(DEFAULT_MAX_AUTOMATIC_RETRIES),
            proxy: self.proxy,
        })?;

        Ok(PaysafeClient { api: Arc::new(api) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{
        MESSAGE_BLANK_API_KEY, MESSAGE_MAXIMUM_ALLOWED_MAX_AUTOMATIC_RETRIES,
        MESSAGE_RESPONSE_TIMEOUT_MUST_BE_POSITIVE,
    };

    #[test]
    fn test_new_uses_environment_base_url() {
        let client = PaysafeClient::new("user:pass", Environment::Live).unwrap();
        assert_eq!(client.environment(), Environment::Live);
        assert_eq!(client.base_url(), "https://api.paysafe.com");
    }

    #[test]
    fn test_builder_defaults_to_test_environment() {
        let client = PaysafeClient::builder().api_key("user:pass").build().unwrap();
        assert_eq!(client.environment(), Environment::Test);
        assert_eq!(client.base_url(), "https://api.test.paysafe.com");
    }

    #[test]
    fn test_build_rejects_missing_api_key() {
        let err = PaysafeClient::builder().build().unwrap_err();
        assert_eq!(err.to_string(), MESSAGE_BLANK_API_KEY);
    }

    #[test]
    fn test_build_rejects_excessive_retries() {
        let err = PaysafeClient::builder()
            .api_key("user:pass")
            .max_automatic_retries(6)
            .build()
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            MESSAGE_MAXIMUM_ALLOWED_MAX_AUTOMATIC_RETRIES
        );
    }

    #[test]
    fn test_build_rejects_zero_timeouts() {
        let err = PaysafeClient::builder()
            .api_key("user:pass")
            .response_timeout(Duration::ZERO)
            .build()
            .unwrap_err();
        assert_eq!(err.to_string(), MESSAGE_RESPONSE_TIMEOUT_MUST_BE_POSITIVE);

        assert!(PaysafeClient::builder()
            .api_key("user:pass")
            .connect_timeout(Duration::ZERO)
            .build()
            .is_err());
    }

    #[test]
    fn test_override_base_url_shared_across_services() {
        let client = PaysafeClient::new("user:pass", Environment::Test).unwrap();
        client.override_base_url("http://127.0.0.1:9090");
        assert_eq!(client.base_url(), "http://127.0.0.1:9090");
    }
}
