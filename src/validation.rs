//! Property validation for client configuration.
//!
//! All validations produce [`Error::InvalidArgument`] with a fixed message so
//! callers can surface configuration mistakes before any request is made.

use crate::error::{Error, Result};

/// Message for a blank API key.
pub const MESSAGE_BLANK_API_KEY: &str =
    "You must provide non-blank api key in format 'username:password'";
/// Message for a malformed API key.
pub const MESSAGE_INVALID_API_KEY_FORMAT: &str =
    "Api key does not match format 'username:password'";
/// Message for exceeding the automatic retry limit.
pub const MESSAGE_MAXIMUM_ALLOWED_MAX_AUTOMATIC_RETRIES: &str =
    "Maximum allowed number of automatic retries is 5";
/// Message for a non-positive connect timeout.
pub const MESSAGE_CONNECT_TIMEOUT_MUST_BE_POSITIVE: &str =
    "Connect timeout must be a positive value";
/// Message for a non-positive response timeout.
pub const MESSAGE_RESPONSE_TIMEOUT_MUST_BE_POSITIVE: &str =
    "Response timeout must be a positive value";

/// Upper bound for automatic retries, per client and per request.
pub const MAX_AUTOMATIC_RETRIES_LIMIT: u32 = 5;

/// Validates that an API key is non-blank and matches `id:password`.
///
/// Exactly one colon, no whitespace, both halves non-empty.
pub fn validate_api_key(api_key: &str) -> Result<()> {
    if api_key.trim().is_empty() {
        return Err(Error::invalid_argument(MESSAGE_BLANK_API_KEY));
    }
    let mut parts = api_key.splitn(2, ':');
    let id = parts.next().unwrap_or_default();
    let password = parts.next();
    let well_formed = match password {
        Some(password) => {
            !id.is_empty()
                && !password.is_empty()
                && !password.contains(':')
                && !api_key.chars().any(char::is_whitespace)
        }
        None => false,
    };
    if !well_formed {
        return Err(Error::invalid_argument(MESSAGE_INVALID_API_KEY_FORMAT));
    }
    Ok(())
}

/// Validates the automatic retry count (0..=5).
pub fn validate_max_automatic_retries(max_automatic_retries: Option<u32>) -> Result<()> {
    if let Some(retries) = max_automatic_retries {
        if retries > MAX_AUTOMATIC_RETRIES_LIMIT {
            return Err(Error::invalid_argument(
                MESSAGE_MAXIMUM_ALLOWED_MAX_AUTOMATIC_RETRIES,
            ));
        }
    }
    Ok(())
}

/// Validates that the connect timeout, when set, is positive.
pub fn validate_connect_timeout(connect_timeout: Option<std::time::Duration>) -> Result<()> {
    if let Some(timeout) = connect_timeout {
        if timeout.is_zero() {
            return Err(Error::invalid_argument(
                MESSAGE_CONNECT_TIMEOUT_MUST_BE_POSITIVE,
            ));
        }
    }
    Ok(())
}

/// Validates that the response timeout, when set, is positive.
pub fn validate_response_timeout(response_timeout: Option<std::time::Duration>) -> Result<()> {
    if let Some(timeout) = response_timeout {
        if timeout.is_zero() {
            return Err(Error::invalid_argument(
                MESSAGE_RESPONSE_TIMEOUT_MUST_BE_POSITIVE,
            ));
        }
    }
    Ok(())
}
