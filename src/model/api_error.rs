//! Error payload models returned by the Payments API.

use serde::{Deserialize, Serialize};

/// Top-level error envelope, `{"error": {...}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// The error payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

/// Error details returned in a non-success response body. Also embedded in
/// transaction responses whose processing failed downstream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Internal error code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Human-readable error description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Details of any parameter value errors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
    /// Fields that caused the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_errors: Option<Vec<FieldError>>,
    /// Additional data attached to the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_details: Option<Vec<AdditionalDetail>>,
}

/// A request field that failed validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldError {
    /// JSON path of the offending field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// Description of the problem with the field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Extra key/value detail attached to an error, e.g. a scheme decline code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalDetail {
    /// Detail type.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub detail_type: Option<String>,
    /// Detail code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Detail message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_envelope_round_trip() {
        let body = r#"{
            "error": {
                "code": "5270",
                "message": "Unauthorized access",
                "fieldErrors": [{"field": "amount", "error": "too large"}],
                "additionalDetails": [{"type": "DECLINE", "code": "05", "message": "Do not honor"}]
            }
        }"#;
        let parsed: ErrorResponse = serde_json::from_str(body).unwrap();
        let error = parsed.error.unwrap();
        assert_eq!(error.code.as_deref(), Some("5270"));
        assert_eq!(
            error.field_errors.unwrap()[0].field.as_deref(),
            Some("amount")
        );
        let detail = &error.additional_details.unwrap()[0];
        assert_eq!(detail.detail_type.as_deref(), Some("DECLINE"));
    }
}
