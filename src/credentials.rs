//! Secure credential handling with automatic memory zeroization.
//!
//! The merchant API key is the only secret this SDK handles. It is stored in
//! a wrapper that clears its memory when dropped and redacts itself from
//! `Debug` and `Display` output so it cannot leak through logs.
//!
//! # Example
//!
//! ```rust
//! use paysafe_payments::credentials::ApiKey;
//!
//! let key = ApiKey::parse("apiKeyId:apiKeyPassword").unwrap();
//! assert!(key.basic_auth_header().starts_with("Basic "));
//!
//! // Debug output is redacted
//! assert_eq!(format!("{:?}", key), "[REDACTED]");
//! ```

use std::fmt;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{Error, Result};
use crate::validation;

/// Merchant API key in `id:password` form.
///
/// Memory is zeroed on drop. Use [`ApiKey::basic_auth_header`] to obtain the
/// `Authorization` header value; avoid holding the raw secret longer than
/// necessary.
#[derive(Clone, Zeroize, ZeroizeOnDrop, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Parses and validates an API key.
    ///
    /// The key must be non-blank and match `id:password` with exactly one
    /// colon and no whitespace.
    pub fn parse(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        validation::validate_api_key(&value)?;
        Ok(Self(value))
    }

    /// Returns the raw secret.
    ///
    /// The reference should be used immediately and not persisted.
    #[inline]
    pub fn expose_secret(&self) -> &str {
        &self.0
    }

    /// Builds the HTTP Basic `Authorization` header value for this key.
    pub fn basic_auth_header(&self) -> String {
        format!("Basic {}", STANDARD.encode(self.0.as_bytes()))
    }
}

// Prevent accidental logging of sensitive data
impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl std::str::FromStr for ApiKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_key() {
        let key = ApiKey::parse("merchant:secret").unwrap();
        assert_eq!(key.expose_secret(), "merchant:secret");
    }

    #[test]
    fn test_parse_rejects_blank_key() {
        assert!(ApiKey::parse("").is_err());
        assert!(ApiKey::parse("   ").is_err());
    }

    #[test]
    fn test_parse_rejects_malformed_key() {
        assert!(ApiKey::parse("no-colon").is_err());
        assert!(ApiKey::parse("a:b:c").is_err());
        assert!(ApiKey::parse("has space:pass").is_err());
        assert!(ApiKey::parse(":missing-id").is_err());
        assert!(ApiKey::parse("missing-password:").is_err());
    }

    #[test]
    fn test_basic_auth_header() {
        let key = ApiKey::parse("user:pass").unwrap();
        // base64("user:pass") == "dXNlcjpwYXNz"
        assert_eq!(key.basic_auth_header(), "Basic dXNlcjpwYXNz");
    }

    #[test]
    fn test_debug_and_display_redacted() {
        let key = ApiKey::parse("user:pass").unwrap();
        assert_eq!(format!("{:?}", key), "[REDACTED]");
        assert_eq!(format!("{}", key), "[REDACTED]");
    }

    #[test]
    fn test_from_str() {
        let key: ApiKey = "user:pass".parse().unwrap();
        assert_eq!(key.expose_secret(), "user:pass");
    }
}
