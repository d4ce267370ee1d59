//! Error handling for the Paysafe Payments SDK.
//!
//! Every non-success HTTP response from the Payments API maps to a typed
//! error variant carrying the parsed error payload, the HTTP status code,
//! and the `X-INTERNAL-CORRELATION-ID` response header when present:
//!
//! ```text
//! Error
//! ├── InvalidRequest     - 400
//! ├── InvalidCredentials - 401
//! ├── RequestDeclined    - 402 (retains the full declined-transaction body)
//! ├── Unauthorized       - 403
//! ├── RequestConflict    - 409
//! ├── Api                - 5xx and any other non-2xx status
//! ├── Connection         - transport-level failure
//! ├── Timeout            - request timed out
//! ├── Serialization      - JSON encode/decode failure
//! └── InvalidArgument    - client-side configuration error
//! ```
//!
//! Only `Connection` and `Timeout` are retryable; error HTTP responses are
//! never retried.
//!
//! # Example
//!
//! ```rust
//! use paysafe_payments::error::Error;
//!
//! fn handle(err: Error) {
//!     if err.is_retryable() {
//!         println!("transient failure: {err}");
//!     } else if let Some(details) = err.api_error() {
//!         println!("API rejected the request: {details}");
//!     }
//! }
//! ```

use std::borrow::Cow;
use std::fmt;

use thiserror::Error;

use crate::http::ApiResponse;
use crate::model::api_error::{AdditionalDetail, ErrorResponse, FieldError};

/// Result type alias for all SDK operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Response header carrying the gateway-side correlation identifier.
pub const HEADER_X_INTERNAL_CORRELATION_ID: &str = "X-INTERNAL-CORRELATION-ID";

/// Maximum length for raw-body error messages to prevent memory bloat.
const MAX_ERROR_MESSAGE_LEN: usize = 1024;

fn truncate_message(mut msg: String) -> String {
    if msg.len() > MAX_ERROR_MESSAGE_LEN {
        // Back off to a char boundary so multibyte bodies cannot panic.
        let mut cut = MAX_ERROR_MESSAGE_LEN;
        while !msg.is_char_boundary(cut) {
            cut -= 1;
        }
        msg.truncate(cut);
        msg.push_str("... (truncated)");
    }
    msg
}

/// Parsed details of an error returned by the Payments API.
///
/// Boxed inside [`Error`] variants to keep the enum small.
#[derive(Debug, Default)]
#[non_exhaustive]
pub struct ApiErrorDetails {
    /// Internal error code from Paysafe systems.
    pub code: Option<String>,
    /// Error message suitable for display.
    pub message: Option<String>,
    /// Details of any parameter value errors.
    pub details: Vec<String>,
    /// Fields that caused the error, if applicable.
    pub field_errors: Vec<FieldError>,
    /// Additional data attached to a reject.
    pub additional_details: Vec<AdditionalDetail>,
    /// HTTP status code of the response.
    pub status: Option<u16>,
    /// Value of the `X-INTERNAL-CORRELATION-ID` response header.
    pub correlation_id: Option<String>,
}

impl fmt::Display for ApiErrorDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(status) = self.status {
            write!(f, "HTTP {status}")?;
        } else {
            write!(f, "HTTP error")?;
        }
        if let Some(code) = &self.code {
            write!(f, " (code: {code})")?;
        }
        if let Some(message) = &self.message {
            write!(f, ": {message}")?;
        }
        if let Some(correlation_id) = &self.correlation_id {
            write!(f, " [correlation id: {correlation_id}]")?;
        }
        Ok(())
    }
}

/// The primary error type for the Paysafe Payments SDK.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The request was malformed (HTTP 400).
    #[error("Invalid request: {0}")]
    InvalidRequest(Box<ApiErrorDetails>),

    /// The API key was rejected (HTTP 401).
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(Box<ApiErrorDetails>),

    /// The transaction was declined (HTTP 402). Retains the full response
    /// body so callers can inspect the declined transaction.
    #[error("Request declined: {details}")]
    RequestDeclined {
        /// Parsed error details.
        details: Box<ApiErrorDetails>,
        /// Full response body of the declined transaction.
        body: serde_json::Value,
    },

    /// The credentials lack permission for the operation (HTTP 403).
    #[error("Unauthorized: {0}")]
    Unauthorized(Box<ApiErrorDetails>),

    /// The request conflicts with an existing entity, e.g. a duplicate
    /// merchant reference number (HTTP 409).
    #[error("Request conflict: {0}")]
    RequestConflict(Box<ApiErrorDetails>),

    /// Server-side failure (HTTP 5xx) or any other unexpected status.
    #[error("API error: {0}")]
    Api(Box<ApiErrorDetails>),

    /// Transport-level failure while connecting to the API.
    #[error("Connection error: {0}")]
    Connection(String),

    /// The request timed out.
    #[error("Timeout: {0}")]
    Timeout(String),

    /// Failed to serialize a request body or deserialize a response body.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Client-side configuration error detected before any request was made.
    #[error("Invalid argument: {0}")]
    InvalidArgument(Cow<'static, str>),
}

impl Error {
    // ==================== Constructor Methods ====================

    /// Creates a connection error.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::Connection(msg.into())
    }

    /// Creates a timeout error.
    pub fn timeout(msg: impl Into<String>) -> Self {
        Self::Timeout(msg.into())
    }

    /// Creates an invalid argument error.
    /// Accepts both `&'static str` (zero allocation) and `String`.
    pub fn invalid_argument(msg: impl Into<Cow<'static, str>>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Builds a typed error from a non-success API response.
    ///
    /// Parses the error payload when possible; an unparseable body degrades
    /// to details carrying only the status, correlation id, and a truncated
    /// copy of the raw body.
    pub fn from_api_response(response: &ApiResponse) -> Self {
        let status = response.status;
        let correlation_id = response
            .headers
            .get(HEADER_X_INTERNAL_CORRELATION_ID)
            .cloned();

        let mut details = match serde_json::from_str::<ErrorResponse>(&response.body) {
            Ok(parsed) => {
                let error = parsed.error.unwrap_or_default();
                ApiErrorDetails {
                    code: error.code,
                    message: error.message,
                    details: error.details.unwrap_or_default(),
                    field_errors: error.field_errors.unwrap_or_default(),
                    additional_details: error.additional_details.unwrap_or_default(),
                    ..ApiErrorDetails::default()
                }
            }
            Err(_) => ApiErrorDetails {
                message: (!response.body.is_empty())
                    .then(|| truncate_message(response.body.clone())),
                ..ApiErrorDetails::default()
            },
        };
        details.status = Some(status);
        details.correlation_id = correlation_id;
        let details = Box::new(details);

        match status {
            400 => Self::InvalidRequest(details),
            401 => Self::InvalidCredentials(details),
            402 => Self::RequestDeclined {
                details,
                body: serde_json::from_str(&response.body).unwrap_or(serde_json::Value::Null),
            },
            403 => Self::Unauthorized(details),
            409 => Self::RequestConflict(details),
            _ => Self::Api(details),
        }
    }

    // ==================== Accessor Methods ====================

    /// Returns the parsed API error details, if this error came from an
    /// API response.
    pub fn api_error(&self) -> Option<&ApiErrorDetails> {
        match self {
            Self::InvalidRequest(d)
            | Self::InvalidCredentials(d)
            | Self::Unauthorized(d)
            | Self::RequestConflict(d)
            | Self::Api(d) => Some(d),
            Self::RequestDeclined { details, .. } => Some(details),
            _ => None,
        }
    }

    /// Returns the HTTP status code, if this error came from an API response.
    pub fn status(&self) -> Option<u16> {
        self.api_error().and_then(|d| d.status)
    }

    /// Returns the correlation id reported by the gateway, if present.
    pub fn correlation_id(&self) -> Option<&str> {
        self.api_error().and_then(|d| d.correlation_id.as_deref())
    }

    /// Returns the full declined-transaction body for HTTP 402 errors.
    pub fn declined_body(&self) -> Option<&serde_json::Value> {
        match self {
            Self::RequestDeclined { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Whether the operation may succeed if retried.
    ///
    /// Only transport-level failures are retryable; error responses from the
    /// API never are.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Connection(_) | Self::Timeout(_))
    }
}
