//! Service monitor models.

use serde::{Deserialize, Serialize};

/// Reported availability of the Payments API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServiceStatus {
    /// The service is available.
    Ready,
}

/// Response from the monitor endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitorResponse {
    /// Service status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ServiceStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monitor_response() {
        let response: MonitorResponse = serde_json::from_str(r#"{"status": "READY"}"#).unwrap();
        assert_eq!(response.status, Some(ServiceStatus::Ready));
    }
}
