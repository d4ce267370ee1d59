//! Automatic retry strategy for transient transport failures.
//!
//! Retries apply only to GET requests that failed at the transport layer
//! (connection errors and timeouts). Requests that reached the API and came
//! back with an error status are never retried, and neither is any mutating
//! verb, so a payment can never be submitted twice by the retry loop.
//!
//! The delay before attempt `n` (1-based) is `100ms * 3^(n-1)` scaled by a
//! uniform random jitter factor in `[0.75, 1.0)`.

use std::time::Duration;

use rand::Rng;
use reqwest::Method;

use crate::error::{Error, Result};
use crate::validation;

/// Base delay before the first retry, in milliseconds.
const BASE_DELAY_MS: u64 = 100;

/// Multiplier applied to the delay for each subsequent retry.
const BACKOFF_FACTOR: u64 = 3;

/// Lower bound of the jitter factor.
const JITTER_MIN: f64 = 0.75;

/// Retry policy for a single request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutomaticRetry {
    max_retries: u32,
}

impl AutomaticRetry {
    /// Creates a retry policy with the given maximum retry count (0..=5).
    pub fn new(max_retries: u32) -> Result<Self> {
        validation::validate_max_automatic_retries(Some(max_retries))?;
        Ok(Self { max_retries })
    }

    /// Returns the maximum number of retries.
    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// Determines whether a failed attempt should be retried.
    ///
    /// # Arguments
    ///
    /// * `error` - The error from the failed attempt.
    /// * `method` - The HTTP method of the request.
    /// * `attempt` - The retry attempt number about to be made (1-based).
    pub fn should_retry(&self, error: &Error, method: &Method, attempt: u32) -> bool {
        if attempt > self.max_retries {
            return false;
        }
        *method == Method::GET && error.is_retryable()
    }

    /// Calculates the backoff delay before the given retry attempt (1-based).
    pub fn delay(&self, attempt: u32) -> Duration {
        let base = BASE_DELAY_MS * BACKOFF_FACTOR.pow(attempt.saturating_sub(1));
        let jitter = rand::rng().random_range(JITTER_MIN..1.0);
        #[allow(clippy::cast_precision_loss)]
        #[allow(clippy::cast_possible_truncation)]
        #[allow(clippy::cast_sign_loss)]
        Duration::from_millis((base as f64 * jitter) as u64)
    }
}

impl Default for AutomaticRetry {
    fn default() -> Self {
        Self {
            max_retries: crate::config::DEFAULT_MAX_AUTOMATIC_RETRIES,
        }
    }
}
