//! Per-request option overrides.
//!
//! Every service operation accepts `Option<&RequestOptions>` as its final
//! argument. Options override the client-level response timeout and retry
//! count for a single call, and select the card simulator used by the test
//! environment.

use std::time::Duration;

use crate::error::Result;
use crate::validation;

/// Card simulator selection for the test environment.
///
/// Sent as the `Simulator` request header on mutating requests against
/// [`Environment::Test`](crate::Environment::Test). Ignored in production.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Simulator {
    /// Simulates the full downstream card scheme flow.
    #[default]
    External,
    /// Short-circuits inside Paysafe systems.
    Internal,
}

impl Simulator {
    /// Wire value for the `Simulator` header.
    pub fn as_str(self) -> &'static str {
        match self {
            Simulator::External => "EXTERNAL",
            Simulator::Internal => "INTERNAL",
        }
    }
}

/// Overrides applied to a single API request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    /// Response timeout for this request, overriding the client default.
    pub response_timeout: Option<Duration>,
    /// Automatic retry count for this request, overriding the client default.
    pub max_automatic_retries: Option<u32>,
    /// Simulator to use in the test environment.
    pub simulator: Option<Simulator>,
}

impl RequestOptions {
    /// Returns a builder for request options.
    pub fn builder() -> RequestOptionsBuilder {
        RequestOptionsBuilder::default()
    }
}

/// Builder for [`RequestOptions`].
#[derive(Debug, Clone, Default)]
pub struct RequestOptionsBuilder {
    response_timeout: Option<Duration>,
    max_automatic_retries: Option<u32>,
    simulator: Option<Simulator>,
}

impl RequestOptionsBuilder {
    /// Sets the response timeout for this request.
    pub fn response_timeout(mut self, timeout: Duration) -> Self {
        self.response_timeout = Some(timeout);
        self
    }

    /// Sets the automatic retry count for this request (0..=5).
    pub fn max_automatic_retries(mut self, retries: u32) -> Self {
        self.max_automatic_retries = Some(retries);
        self
    }

    /// Selects the simulator for this request.
    pub fn simulator(mut self, simulator: Simulator) -> Self {
        self.simulator = Some(simulator);
        self
    }

    /// Validates and builds the options.
    pub fn build(self) -> Result<RequestOptions> {
        validation::validate_response_timeout(self.response_timeout)?;
        validation::validate_max_automatic_retries(self.max_automatic_retries)?;
        Ok(RequestOptions {
            response_timeout: self.response_timeout,
            max_automatic_retries: self.max_automatic_retries,
            simulator: self.simulator,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulator_wire_values() {
        assert_eq!(Simulator::External.as_str(), "EXTERNAL");
        assert_eq!(Simulator::Internal.as_str(), "INTERNAL");
        assert_eq!(Simulator::default(), Simulator::External);
    }

    #[test]
    fn test_builder_sets_all_fields() {
        let options = RequestOptions::builder()
            .response_timeout(Duration::from_secs(10))
            .max_automatic_retries(3)
            .simulator(Simulator::Internal)
            .build()
            .unwrap();
        assert_eq!(options.response_timeout, Some(Duration::from_secs(10)));
        assert_eq!(options.max_automatic_retries, Some(3));
        assert_eq!(options.simulator, Some(Simulator::Internal));
    }

    #[test]
    fn test_builder_validates() {
        assert!(RequestOptions::builder()
            .max_automatic_retries(6)
            .build()
            .is_err());
        assert!(RequestOptions::builder()
            .response_timeout(Duration::ZERO)
            .build()
            .is_err());
    }

    #[test]
    fn test_default_is_empty() {
        let options = RequestOptions::default();
        assert!(options.response_timeout.is_none());
        assert!(options.max_automatic_retries.is_none());
        assert!(options.simulator.is_none());
    }
}
