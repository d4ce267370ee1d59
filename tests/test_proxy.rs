//! Proxy routing: all requests go through the configured HTTP proxy.

mod common;

use paysafe_payments::model::monitor::ServiceStatus;
use paysafe_payments::{Environment, PaysafeClient, ProxyConfig};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// The base URL points at an unresolvable host, so the request only succeeds
/// if it is routed through the wiremock instance acting as the proxy.
#[tokio::test]
async fn test_requests_routed_through_configured_proxy() {
    let proxy_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/paymenthub/v1/monitor"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "READY"
        })))
        .expect(1)
        .mount(&proxy_server)
        .await;

    let client = PaysafeClient::builder()
        .api_key(common::API_KEY)
        .environment(Environment::Test)
        .max_automatic_retries(0)
        .proxy(ProxyConfig::new(proxy_server.uri()))
        .build()
        .unwrap();
    client.override_base_url("http://url-to-be-proxied:500");

    let monitor = client
        .monitor_service()
        .verify_service_is_accessible(None)
        .await
        .expect("Proxied request failed");
    assert_eq!(monitor.status, Some(ServiceStatus::Ready));
}

#[tokio::test]
async fn test_proxy_credentials_accepted() {
    let proxy_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/paymenthub/v1/monitor"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "READY"
        })))
        .expect(1)
        .mount(&proxy_server)
        .await;

    let client = PaysafeClient::builder()
        .api_key(common::API_KEY)
        .max_automatic_retries(0)
        .proxy(ProxyConfig::new(proxy_server.uri()).with_credentials("squid", "ward"))
        .build()
        .unwrap();
    client.override_base_url("http://url-to-be-proxied:500");

    let monitor = client
        .monitor_service()
        .verify_service_is_accessible(None)
        .await
        .expect("Proxied request failed");
    assert_eq!(monitor.status, Some(ServiceStatus::Ready));
}

#[tokio::test]
async fn test_invalid_proxy_url_rejected_at_build() {
    let err = PaysafeClient::builder()
        .api_key(common::API_KEY)
        .proxy(ProxyConfig::new("not a proxy url"))
        .build()
        .unwrap_err();
    assert!(err.to_string().contains("Invalid proxy URL"));
}
