//! Service operations against a mocked Payments API: verbs, paths, query
//! parameters and body shapes.

mod common;

use paysafe_payments::model::common::CurrencyCode;
use paysafe_payments::model::customer::CustomerRequest;
use paysafe_payments::model::payment::PaymentRequest;
use paysafe_payments::model::payment_handle::{PaymentHandleRequest, TransactionType};
use paysafe_payments::model::settlement::SettlementRequest;
use paysafe_payments::model::standalone_credit::StandaloneCreditUpdateRequest;
use paysafe_payments::model::void_authorization::VoidAuthorizationRequest;
use paysafe_payments::service::ListFilter;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::test_client;

#[tokio::test]
async fn test_process_payment_posts_to_payments() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/paymenthub/v1/payments"))
        .and(body_partial_json(serde_json::json!({
            "merchantRefNum": "order-1",
            "amount": 500,
            "currencyCode": "USD",
            "paymentHandleToken": "SCtoken"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "id": "pay-1",
            "merchantRefNum": "order-1",
            "amount": 500,
            "currencyCode": "USD",
            "status": "COMPLETED"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let payment = client
        .payment_service()
        .process_payment(
            &PaymentRequest {
                merchant_ref_num: Some("order-1".into()),
                amount: Some(500),
                currency_code: Some(CurrencyCode::Usd),
                payment_handle_token: Some("SCtoken".into()),
                ..Default::default()
            },
            None,
        )
        .await
        .expect("Payment request failed");
    assert_eq!(payment.id.as_deref(), Some("pay-1"));
}

#[tokio::test]
async fn test_list_payments_sends_canonical_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/paymenthub/v1/payments"))
        .and(query_param("merchantRefNum", "order-1"))
        .and(query_param("limit", "10"))
        .and(query_param("offset", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "payments": [{"id": "pay-1"}],
            "meta": {"numberOfRecords": 1, "limit": 10, "page": 3}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let filter = ListFilter {
        limit: Some(10),
        offset: Some(20),
        ..Default::default()
    };
    let list = client
        .payment_service()
        .get_payments_using_merchant_reference_number("order-1", Some(&filter), None)
        .await
        .expect("List request failed");
    assert_eq!(list.payments.unwrap().len(), 1);
    assert_eq!(list.meta.unwrap().page, Some(3));
}

#[tokio::test]
async fn test_create_payment_handle() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/paymenthub/v1/paymenthandles"))
        .and(body_partial_json(serde_json::json!({
            "merchantRefNum": "handle-1",
            "transactionType": "PAYMENT"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "id": "ph-1",
            "paymentHandleToken": "SCtoken",
            "status": "PAYABLE"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let handle = client
        .payment_handle_service()
        .create_payment_handle(
            &PaymentHandleRequest {
                merchant_ref_num: Some("handle-1".into()),
                transaction_type: Some(TransactionType::Payment),
                ..Default::default()
            },
            None,
        )
        .await
        .expect("Payment handle request failed");
    assert_eq!(handle.payment_handle_token.as_deref(), Some("SCtoken"));
}

#[tokio::test]
async fn test_void_authorization_posts_under_payment() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/paymenthub/v1/payments/pay-1/voidauths"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "id": "void-1",
            "amount": 500,
            "status": "COMPLETED"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let void = client
        .void_authorization_service()
        .void_authorization(
            "pay-1",
            &VoidAuthorizationRequest {
                merchant_ref_num: Some("order-1".into()),
                amount: Some(500),
            },
            None,
        )
        .await
        .expect("Void request failed");
    assert_eq!(void.id.as_deref(), Some("void-1"));
}

#[tokio::test]
async fn test_settlement_and_refund_nested_paths() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/paymenthub/v1/payments/pay-1/settlements"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "id": "stl-1",
            "amount": 500,
            "status": "PENDING"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/paymenthub/v1/settlements/stl-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "stl-1",
            "amount": 500,
            "status": "PENDING"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let settlement = client
        .settlement_service()
        .process_settlement(
            "pay-1",
            &SettlementRequest {
                merchant_ref_num: Some("order-1".into()),
                amount: Some(500),
                ..Default::default()
            },
            None,
        )
        .await
        .expect("Settlement request failed");
    assert_eq!(settlement.id.as_deref(), Some("stl-1"));

    let fetched = client
        .settlement_service()
        .get_settlement_by_id("stl-1", None)
        .await
        .expect("Settlement lookup failed");
    assert_eq!(fetched.amount, Some(500));
}

#[tokio::test]
async fn test_cancel_settlement_sends_cancelled_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/paymenthub/v1/settlements/stl-1"))
        .and(body_partial_json(serde_json::json!({"status": "CANCELLED"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "stl-1",
            "status": "CANCELLED"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    client
        .settlement_service()
        .cancel_settlement("stl-1", None)
        .await
        .expect("Cancel request failed");
}

#[tokio::test]
async fn test_update_standalone_credit_uses_patch() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/paymenthub/v1/standalonecredits/credit-1"))
        .and(body_partial_json(serde_json::json!({
            "merchantRefNum": "order-1",
            "interacEtransfer": {"consumerId": "jane@example.com"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "credit-1",
            "status": "PENDING",
            "interacETransfer": {"consumerId": "jane@example.com"}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let update = StandaloneCreditUpdateRequest {
        merchant_ref_num: Some("order-1".into()),
        interac_etransfer: Some(paysafe_payments::model::standalone_credit::Interac {
            consumer_id: Some("jane@example.com".into()),
            ..Default::default()
        }),
    };
    let credit = client
        .standalone_credit_service()
        .update_standalone_credit("credit-1", &update, None)
        .await
        .expect("Update request failed");
    assert_eq!(
        credit.interac_etransfer.unwrap().consumer_id.as_deref(),
        Some("jane@example.com")
    );
}

#[tokio::test]
async fn test_look_up_payment_methods_by_currency() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/paymenthub/v1/paymentmethods"))
        .and(query_param("currencyCode", "EUR"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "paymentMethods": [
                {"paymentMethod": "CARD", "currencyCode": "EUR", "accountId": "123"}
            ]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let response = client
        .payment_methods_service()
        .look_up_payment_methods(CurrencyCode::Eur, None)
        .await
        .expect("Lookup failed");
    assert_eq!(response.payment_methods.unwrap().len(), 1);
}

#[tokio::test]
async fn test_customer_lifecycle_paths() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/paymenthub/v1/customers"))
        .and(body_partial_json(serde_json::json!({
            "merchantCustomerId": "cust-ext-1"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "id": "cust-1",
            "merchantCustomerId": "cust-ext-1",
            "status": "ACTIVE"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/paymenthub/v1/customers/cust-1"))
        .and(query_param("fields", "addresses,paymenthandles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "cust-1",
            "status": "ACTIVE",
            "addresses": [],
            "paymentHandles": []
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/paymenthub/v1/customers/cust-1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let customers = client.customer_service();

    let customer = customers
        .create_customer(
            &CustomerRequest {
                merchant_customer_id: Some("cust-ext-1".into()),
                ..Default::default()
            },
            None,
        )
        .await
        .expect("Create customer failed");
    assert_eq!(customer.id.as_deref(), Some("cust-1"));

    let fetched = customers
        .get_customer_by_id("cust-1", Some(&["addresses", "paymenthandles"]), None)
        .await
        .expect("Get customer failed");
    assert_eq!(fetched.id.as_deref(), Some("cust-1"));

    customers
        .delete_customer("cust-1", None)
        .await
        .expect("Delete customer failed");
}

#[tokio::test]
async fn test_get_customer_by_merchant_customer_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/paymenthub/v1/customers"))
        .and(query_param("merchantCustomerId", "cust-ext-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "cust-1",
            "merchantCustomerId": "cust-ext-1"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let customer = client
        .customer_service()
        .get_customer_by_merchant_customer_id("cust-ext-1", None, None)
        .await
        .expect("Lookup failed");
    assert_eq!(customer.id.as_deref(), Some("cust-1"));
}

#[tokio::test]
async fn test_single_use_customer_token_paths() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/paymenthub/v1/customers/cust-1/singleusecustomertokens"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "id": "sut-1",
            "singleUseCustomerToken": "Ctoken",
            "timeToLiveSeconds": 899
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/paymenthub/v1/singleusecustomertokens/sut-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "sut-1",
            "singleUseCustomerToken": "Ctoken"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let token = client
        .customer_single_use_token_service()
        .create_single_use_customer_token("cust-1", &Default::default(), None)
        .await
        .expect("Token request failed");
    assert_eq!(token.id.as_deref(), Some("sut-1"));

    let fetched = client
        .customer_single_use_token_service()
        .get_single_use_customer_token("sut-1", None)
        .await
        .expect("Token lookup failed");
    assert_eq!(fetched.single_use_customer_token.as_deref(), Some("Ctoken"));
}
