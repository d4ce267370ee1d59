//! Transport behavior: headers, error mapping, and automatic retries.

mod common;

use std::time::Duration;

use paysafe_payments::model::monitor::ServiceStatus;
use paysafe_payments::{Environment, Error, PaysafeClient, RequestOptions, Simulator};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::test_client;

#[tokio::test]
async fn test_standard_headers_sent_with_every_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/paymenthub/v1/monitor"))
        .and(header("Authorization", common::BASIC_AUTH))
        .and(header("Content-Type", "application/json;charset=utf-8"))
        .and(header("x-transaction-source", "RustSDK"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "READY"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let monitor = client
        .monitor_service()
        .verify_service_is_accessible(None)
        .await
        .expect("Monitor request failed");
    assert_eq!(monitor.status, Some(ServiceStatus::Ready));
}

#[tokio::test]
async fn test_simulator_header_sent_on_test_environment_mutations() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/paymenthub/v1/payments/pay-1"))
        .and(header("Simulator", "EXTERNAL"))
        .and(body_json(serde_json::json!({"status": "CANCELLED"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "pay-1",
            "status": "CANCELLED"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let cancelled = client
        .payment_service()
        .cancel_payment("pay-1", None)
        .await
        .expect("Cancel request failed");
    assert_eq!(cancelled.id.as_deref(), Some("pay-1"));
}

#[tokio::test]
async fn test_simulator_header_override_per_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/paymenthub/v1/payments/pay-1"))
        .and(header("Simulator", "INTERNAL"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "pay-1",
            "status": "CANCELLED"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let options = RequestOptions::builder()
        .simulator(Simulator::Internal)
        .build()
        .unwrap();
    client
        .payment_service()
        .cancel_payment("pay-1", Some(&options))
        .await
        .expect("Cancel request failed");
}

#[tokio::test]
async fn test_400_maps_to_invalid_request_with_field_errors() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/paymenthub/v1/payments"))
        .respond_with(
            ResponseTemplate::new(400)
                .insert_header("X-INTERNAL-CORRELATION-ID", "corr-400")
                .set_body_json(serde_json::json!({
                    "error": {
                        "code": "5068",
                        "message": "Field error(s)",
                        "fieldErrors": [
                            {"field": "amount", "error": "must be greater than 0"}
                        ]
                    }
                })),
        )
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client
        .payment_service()
        .process_payment(&Default::default(), None)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::InvalidRequest(_)));
    assert_eq!(err.status(), Some(400));
    assert_eq!(err.correlation_id(), Some("corr-400"));
    let details = err.api_error().unwrap();
    assert_eq!(details.code.as_deref(), Some("5068"));
    assert_eq!(details.field_errors[0].field.as_deref(), Some("amount"));
}

#[tokio::test]
async fn test_402_retains_declined_transaction_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/paymenthub/v1/payments"))
        .respond_with(ResponseTemplate::new(402).set_body_json(serde_json::json!({
            "id": "pay-declined",
            "status": "FAILED",
            "error": {"code": "3022", "message": "The card has been declined."}
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client
        .payment_service()
        .process_payment(&Default::default(), None)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::RequestDeclined { .. }));
    let body = err.declined_body().unwrap();
    assert_eq!(body["id"], "pay-declined");
    assert_eq!(body["status"], "FAILED");
    assert_eq!(err.api_error().unwrap().code.as_deref(), Some("3022"));
}

#[tokio::test]
async fn test_401_maps_to_invalid_credentials() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/paymenthub/v1/monitor"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "error": {"code": "5279", "message": "The authentication credentials are invalid."}
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client
        .monitor_service()
        .verify_service_is_accessible(None)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidCredentials(_)));
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn test_unparseable_error_body_degrades_to_raw_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/paymenthub/v1/monitor"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client
        .monitor_service()
        .verify_service_is_accessible(None)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Api(_)));
    assert_eq!(err.status(), Some(502));
    assert!(err
        .api_error()
        .unwrap()
        .message
        .as_deref()
        .unwrap()
        .contains("Bad Gateway"));
}

#[tokio::test]
async fn test_get_requests_retry_on_timeout() {
    let mock_server = MockServer::start().await;

    // Each attempt times out, so the client makes the initial attempt plus
    // two retries before giving up.
    Mock::given(method("GET"))
        .and(path("/paymenthub/v1/monitor"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(500))
                .set_body_json(serde_json::json!({"status": "READY"})),
        )
        .expect(3)
        .mount(&mock_server)
        .await;

    let client = PaysafeClient::builder()
        .api_key(common::API_KEY)
        .environment(Environment::Test)
        .response_timeout(Duration::from_millis(50))
        .max_automatic_retries(2)
        .build()
        .unwrap();
    client.override_base_url(mock_server.uri());

    let err = client
        .monitor_service()
        .verify_service_is_accessible(None)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Timeout(_)));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_mutating_requests_are_never_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/paymenthub/v1/payments"))
        .respond_with(
            ResponseTemplate::new(201)
                .set_delay(Duration::from_millis(500))
                .set_body_json(serde_json::json!({"id": "pay-1"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = PaysafeClient::builder()
        .api_key(common::API_KEY)
        .environment(Environment::Test)
        .response_timeout(Duration::from_millis(50))
        .max_automatic_retries(2)
        .build()
        .unwrap();
    client.override_base_url(mock_server.uri());

    let err = client
        .payment_service()
        .process_payment(&Default::default(), None)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Timeout(_)));
}

#[tokio::test]
async fn test_per_request_retry_override() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/paymenthub/v1/monitor"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(500))
                .set_body_json(serde_json::json!({"status": "READY"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let options = RequestOptions::builder()
        .response_timeout(Duration::from_millis(50))
        .max_automatic_retries(0)
        .build()
        .unwrap();
    let err = client
        .monitor_service()
        .verify_service_is_accessible(Some(&options))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Timeout(_)));
}
