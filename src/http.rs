//! HTTP transport layer for the Payments API.
//!
//! Provides a unified request interface with:
//! - Basic authentication from the merchant API key
//! - Automatic retry of GET requests on transport failures
//! - Per-request response timeout overrides
//! - Gzip compression
//! - Structured request/response logging via `tracing`
//! - Proxy support
//!
//! # Observability
//!
//! Key events emitted through `tracing`:
//! - request initiation with method and path
//! - retry attempts with delay and error cause
//! - response status and body length
//! - error details with structured fields

use std::collections::HashMap;
use std::sync::RwLock;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error, instrument, warn};

use crate::config::{Environment, ProxyConfig};
use crate::credentials::ApiKey;
use crate::error::{Error, Result};
use crate::options::RequestOptions;
use crate::retry::AutomaticRetry;

/// Header identifying the SDK to Paysafe systems.
pub const HEADER_X_TRANSACTION_SOURCE: &str = "x-transaction-source";

/// Value of the `x-transaction-source` header.
pub const TRANSACTION_SOURCE: &str = "RustSDK";

/// Header selecting the card simulator in the test environment.
pub const HEADER_SIMULATOR: &str = "Simulator";

const CONTENT_TYPE_JSON: &str = "application/json;charset=utf-8";

/// Path prefix applied to every endpoint.
pub const PATH_PREFIX: &str = "/paymenthub";

/// Builds the `User-Agent` header value sent with every request.
pub fn user_agent() -> String {
    format!(
        "PaymentsAPI RustSDK/{} ({}; {})",
        crate::VERSION,
        std::env::consts::OS,
        std::env::consts::ARCH
    )
}

/// Configuration consumed by [`ApiClient::new`].
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    /// Merchant API key.
    pub api_key: ApiKey,
    /// Target environment.
    pub environment: Environment,
    /// TCP connection timeout.
    pub connect_timeout: Duration,
    /// Default response timeout, overridable per request.
    pub response_timeout: Duration,
    /// Default automatic retry count for GET requests.
    pub max_automatic_retries: u32,
    /// Optional proxy configuration.
    pub proxy: Option<ProxyConfig>,
}

/// Raw HTTP response before success/error interpretation.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response headers with uppercased names.
    pub headers: HashMap<String, String>,
    /// Response body as text.
    pub body: String,
}

/// Low-level client executing requests against the Payments API.
///
/// Services share a single instance behind an `Arc`; the underlying reqwest
/// client pools connections across all of them.
#[derive(Debug)]
pub struct ApiClient {
    client: Client,
    api_key: ApiKey,
    environment: Environment,
    base_url: RwLock<String>,
    response_timeout: Duration,
    retry: AutomaticRetry,
}

impl ApiClient {
    /// Creates a new API client.
    ///
    /// # Errors
    ///
    /// Returns an error if the proxy URL is invalid or the underlying HTTP
    /// client cannot be built.
    pub fn new(config: ApiClientConfig) -> Result<Self> {
        let mut builder = Client::builder()
            .connect_timeout(config.connect_timeout)
            .gzip(true)
            .user_agent(user_agent());

        if let Some(proxy_config) = &config.proxy {
            let mut proxy = reqwest::Proxy::all(&proxy_config.url)
                .map_err(|e| Error::connection(format!("Invalid proxy URL: {e}")))?;
            if let (Some(username), Some(password)) =
                (&proxy_config.username, &proxy_config.password)
            {
                proxy = proxy.basic_auth(username, password);
            }
            builder = builder.proxy(proxy);
        }

        let client = builder
            .build()
            .map_err(|e| Error::connection(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key: config.api_key,
            environment: config.environment,
            base_url: RwLock::new(config.environment.base_url().to_string()),
            response_timeout: config.response_timeout,
            retry: AutomaticRetry::new(config.max_automatic_retries)?,
        })
    }

    /// Returns the environment this client targets.
    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// Returns the base URL currently in use.
    pub fn base_url(&self) -> String {
        self.base_url
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Replaces the base URL, e.g. to point at a local mock server.
    pub fn override_base_url(&self, base_url: impl Into<String>) {
        let mut guard = self
            .base_url
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = base_url.into();
    }

    /// Executes a GET request and deserializes the response body.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        options: Option<&RequestOptions>,
    ) -> Result<T> {
        let response = self.execute(Method::GET, path, query, None, options).await?;
        Self::process_response(&response)
    }

    /// Executes a POST request with a JSON body.
    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        options: Option<&RequestOptions>,
    ) -> Result<T> {
        let body = serde_json::to_value(body)?;
        let response = self
            .execute(Method::POST, path, &[], Some(body), options)
            .await?;
        Self::process_response(&response)
    }

    /// Executes a PUT request with a JSON body.
    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        options: Option<&RequestOptions>,
    ) -> Result<T> {
        let body = serde_json::to_value(body)?;
        let response = self
            .execute(Method::PUT, path, &[], Some(body), options)
            .await?;
        Self::process_response(&response)
    }

    /// Executes a PATCH request with a JSON body.
    pub async fn patch<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        options: Option<&RequestOptions>,
    ) -> Result<T> {
        let body = serde_json::to_value(body)?;
        let response = self
            .execute(Method::PATCH, path, &[], Some(body), options)
            .await?;
        Self::process_response(&response)
    }

    /// Executes a DELETE request, discarding any response body.
    pub async fn delete(&self, path: &str, options: Option<&RequestOptions>) -> Result<()> {
        let response = self
            .execute(Method::DELETE, path, &[], None, options)
            .await?;
        match response.status {
            200 | 201 | 204 => Ok(()),
            _ => Err(Error::from_api_response(&response)),
        }
    }

    /// Executes a request with the automatic retry loop.
    ///
    /// Returns `Ok` for any HTTP response, success or not; only transport
    /// failures surface as `Err` here, and only those are eligible for retry.
    #[instrument(name = "api_request", skip(self, query, body, options), fields(method = %method, path = %path))]
    async fn execute(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<Value>,
        options: Option<&RequestOptions>,
    ) -> Result<ApiResponse> {
        let retry = match options.and_then(|o| o.max_automatic_retries) {
            Some(retries) => AutomaticRetry::new(retries)?,
            None => self.retry,
        };
        let timeout = options
            .and_then(|o| o.response_timeout)
            .unwrap_or(self.response_timeout);

        let mut attempt: u32 = 0;
        loop {
            match self
                .send_once(method.clone(), path, query, body.as_ref(), options, timeout)
                .await
            {
                Ok(response) => {
                    debug!(
                        attempt = attempt + 1,
                        status = response.status,
                        body_length = response.body.len(),
                        "Request completed"
                    );
                    return Ok(response);
                }
                Err(e) => {
                    let next_attempt = attempt + 1;
                    if retry.should_retry(&e, &method, next_attempt) {
                        let delay = retry.delay(next_attempt);
                        warn!(
                            attempt = next_attempt,
                            delay_ms = %delay.as_millis(),
                            error = %e,
                            "Transport failure, retrying after delay"
                        );
                        tokio::time::sleep(delay).await;
                        attempt = next_attempt;
                    } else {
                        error!(
                            attempt = attempt + 1,
                            error = %e,
                            "Transport failure, not retrying"
                        );
                        return Err(e);
                    }
                }
            }
        }
    }

    /// Executes a single request attempt without retry logic.
    async fn send_once(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&Value>,
        options: Option<&RequestOptions>,
        timeout: Duration,
    ) -> Result<ApiResponse> {
        let url = format!("{}{}{}", self.base_url(), PATH_PREFIX, path);

        let mut request = self
            .client
            .request(method.clone(), url)
            .timeout(timeout)
            .headers(self.build_headers(&method, options)?);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(transport_error)?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_ascii_uppercase(),
                    value.to_str().unwrap_or_default().to_string(),
                )
            })
            .collect();
        let body = response.text().await.map_err(transport_error)?;

        Ok(ApiResponse {
            status,
            headers,
            body,
        })
    }

    fn build_headers(
        &self,
        method: &Method,
        options: Option<&RequestOptions>,
    ) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        let mut authorization = HeaderValue::from_str(&self.api_key.basic_auth_header())
            .map_err(|e| Error::invalid_argument(format!("Invalid authorization header: {e}")))?;
        authorization.set_sensitive(true);
        headers.insert(AUTHORIZATION, authorization);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE_JSON));
        headers.insert(
            HEADER_X_TRANSACTION_SOURCE,
            HeaderValue::from_static(TRANSACTION_SOURCE),
        );

        // The simulator header only applies to mutating requests against the
        // test environment.
        if self.environment == Environment::Test && *method != Method::GET {
            let simulator = options.and_then(|o| o.simulator).unwrap_or_default();
            headers.insert(
                HEADER_SIMULATOR,
                HeaderValue::from_static(simulator.as_str()),
            );
        }
        Ok(headers)
    }

    fn process_response<T: DeserializeOwned>(response: &ApiResponse) -> Result<T> {
        match response.status {
            200 | 201 => Ok(serde_json::from_str(&response.body)?),
            _ => Err(Error::from_api_response(response)),
        }
    }
}

fn transport_error(err: reqwest::Error) -> Error {
    if err.is_timeout() {
        Error::timeout(err.to_string())
    } else {
        Error::connection(err.to_string())
    }
}

/// Collects list-endpoint query parameters in their canonical order,
/// skipping unset values.
pub fn build_query_parameters<'a>(
    params: &[(&'a str, Option<String>)],
) -> Vec<(&'a str, String)> {
    params
        .iter()
        .filter_map(|(name, value)| value.clone().map(|v| (*name, v)))
        .collect()
}
