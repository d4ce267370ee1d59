//! Client configuration types.

use std::time::Duration;

/// Default timeout for establishing new connections.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default time limit for retrieving a response from an established connection.
pub const DEFAULT_RESPONSE_TIMEOUT: Duration = Duration::from_secs(60);

/// Default number of automatic retries for GET requests.
pub const DEFAULT_MAX_AUTOMATIC_RETRIES: u32 = 2;

const BASE_URL_LIVE: &str = "https://api.paysafe.com";
const BASE_URL_TEST: &str = "https://api.test.paysafe.com";

/// Paysafe environment against which API requests are executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Production environment.
    Live,
    /// Merchant test environment.
    #[default]
    Test,
}

impl Environment {
    /// Returns the base URL for this environment.
    pub fn base_url(self) -> &'static str {
        match self {
            Environment::Live => BASE_URL_LIVE,
            Environment::Test => BASE_URL_TEST,
        }
    }
}

/// Proxy configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyConfig {
    /// Proxy URL (e.g., "http://127.0.0.1:8080").
    pub url: String,
    /// Optional username for authentication.
    pub username: Option<String>,
    /// Optional password for authentication.
    pub password: Option<String>,
}

impl ProxyConfig {
    /// Create a new proxy configuration with just a URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            username: None,
            password: None,
        }
    }

    /// Set credentials for the proxy.
    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_base_urls() {
        assert_eq!(Environment::Live.base_url(), "https://api.paysafe.com");
        assert_eq!(Environment::Test.base_url(), "https://api.test.paysafe.com");
    }

    #[test]
    fn test_environment_default_is_test() {
        assert_eq!(Environment::default(), Environment::Test);
    }

    #[test]
    fn test_proxy_config_with_credentials() {
        let proxy = ProxyConfig::new("http://localhost:8080").with_credentials("user", "pass");
        assert_eq!(proxy.url, "http://localhost:8080");
        assert_eq!(proxy.username.as_deref(), Some("user"));
        assert_eq!(proxy.password.as_deref(), Some("pass"));
    }
}
