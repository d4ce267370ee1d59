//! Card models.

use serde::{Deserialize, Serialize};

/// Card expiry date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardExpiry {
    /// Expiry month (1-12).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<u8>,
    /// Four-digit expiry year.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<u16>,
}

/// Payment card details.
///
/// Requests carry `card_num` and `cvv`; responses replace them with masked
/// fields (`last_digits`, `card_bin`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// Full card number, request only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_num: Option<String>,
    /// Card expiry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_expiry: Option<CardExpiry>,
    /// Card verification value, request only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cvv: Option<String>,
    /// Name of the card holder.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub holder_name: Option<String>,
    /// Card scheme, e.g. "VI" or "MC".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_type: Option<String>,
    /// Last four digits, response only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_digits: Option<String>,
    /// Card BIN, response only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_bin: Option<String>,
    /// Country that issued the card.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuing_country: Option<String>,
    /// Stored card status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_card_serialization() {
        let card = Card {
            card_num: Some("4111111111111111".to_string()),
            card_expiry: Some(CardExpiry {
                month: Some(12),
                year: Some(2030),
            }),
            cvv: Some("123".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&card).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "cardNum": "4111111111111111",
                "cardExpiry": {"month": 12, "year": 2030},
                "cvv": "123"
            })
        );
    }

    #[test]
    fn test_response_card_deserialization() {
        let card: Card = serde_json::from_str(
            r#"{"lastDigits": "1111", "cardBin": "411111", "cardType": "VI", "networkToken": {"bin": "4"}}"#,
        )
        .unwrap();
        assert_eq!(card.last_digits.as_deref(), Some("1111"));
        assert_eq!(card.card_type.as_deref(), Some("VI"));
        assert!(card.card_num.is_none());
    }
}
