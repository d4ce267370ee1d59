use paysafe_payments::{Environment, PaysafeClient};
use wiremock::MockServer;

#[allow(dead_code)]
pub const API_KEY: &str = "user:pass";

/// base64("user:pass")
#[allow(dead_code)]
pub const BASIC_AUTH: &str = "Basic dXNlcjpwYXNz";

/// Creates a client pointed at the mock server.
pub fn test_client(mock_server: &MockServer) -> PaysafeClient {
    let client =
        PaysafeClient::new(API_KEY, Environment::Test).expect("Failed to create client");
    client.override_base_url(mock_server.uri());
    client
}
