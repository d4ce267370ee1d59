//! Paysafe Payments API client library.
//!
//! An async, typed Rust SDK for the Paysafe Payments API, covering the full
//! transaction lifecycle: payment handles, payments, verifications, void
//! authorizations, settlements, refunds, standalone credits, original
//! credits, customers and their stored instruments, payment method lookup,
//! and the service monitor.
//!
//! # Features
//!
//! - **Type Safety**: request and response bodies are strongly-typed serde models
//! - **Async/Await**: built on tokio and reqwest
//! - **Error Handling**: HTTP error responses map to typed errors with `thiserror`
//! - **Observability**: structured request/response logging via `tracing`
//!
//! # Example
//!
//! ```rust,no_run
//! use paysafe_payments::prelude::*;
//!
//! # async fn example() -> Result<()> {
//! let client = PaysafeClient::new("apiKeyId:apiKeyPassword", Environment::Test)?;
//!
//! let monitor = client.monitor_service().verify_service_is_accessible(None).await?;
//! println!("service status: {:?}", monitor.status);
//!
//! let payment = client
//!     .payment_service()
//!     .process_payment(
//!         &PaymentRequest {
//!             merchant_ref_num: Some("order-1234".into()),
//!             amount: Some(500),
//!             currency_code: Some(CurrencyCode::Usd),
//!             payment_handle_token: Some("SCtokenvalue".into()),
//!             ..Default::default()
//!         },
//!         None,
//!     )
//!     .await?;
//! println!("payment id: {:?}", payment.id);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

// Re-exports of external dependencies
pub use serde;
pub use serde_json;

// Core modules
pub mod client;
pub mod config;
pub mod credentials;
pub mod error;
pub mod http;
pub mod logging;
pub mod model;
pub mod options;
pub mod retry;
pub mod service;
pub mod validation;

// Re-exports of core types for convenience
pub use client::{PaysafeClient, PaysafeClientBuilder};
pub use config::{Environment, ProxyConfig};
pub use credentials::ApiKey;
pub use error::{ApiErrorDetails, Error, Result};
pub use http::{ApiClient, ApiResponse};
pub use options::{RequestOptions, RequestOptionsBuilder, Simulator};
pub use retry::AutomaticRetry;

/// Prelude module for convenient imports
///
/// Import everything you need with:
/// ```rust
/// use paysafe_payments::prelude::*;
/// ```
pub mod prelude {
    pub use crate::client::{PaysafeClient, PaysafeClientBuilder};
    pub use crate::config::{Environment, ProxyConfig};
    pub use crate::credentials::ApiKey;
    pub use crate::error::{ApiErrorDetails, Error, Result};
    pub use crate::logging::{init_logging, try_init_logging, LogConfig, LogFormat, LogLevel};
    pub use crate::model::cancel::{CancelRequest, CancelResponse};
    pub use crate::model::common::{
        BillingDetails, CurrencyCode, Meta, Profile, TransactionRequestStatus,
    };
    pub use crate::model::customer::{
        Address, Customer, CustomerPaymentHandle, CustomerPaymentHandleRequest, CustomerRequest,
        SingleUseCustomerToken, SingleUseCustomerTokenRequest,
    };
    pub use crate::model::monitor::MonitorResponse;
    pub use crate::model::original_credit::{OriginalCredit, OriginalCreditRequest};
    pub use crate::model::payment::{Payment, PaymentList, PaymentRequest};
    pub use crate::model::payment_handle::{PaymentHandle, PaymentHandleList, PaymentHandleRequest};
    pub use crate::model::refund::{Refund, RefundRequest};
    pub use crate::model::settlement::{Settlement, SettlementRequest};
    pub use crate::model::standalone_credit::{StandaloneCredit, StandaloneCreditRequest};
    pub use crate::model::verification::{Verification, VerificationRequest};
    pub use crate::model::void_authorization::{VoidAuthorization, VoidAuthorizationRequest};
    pub use crate::options::{RequestOptions, Simulator};
    pub use serde::{Deserialize, Serialize};
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
