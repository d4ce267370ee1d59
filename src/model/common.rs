//! Shared models used across transaction types.

use serde::{Deserialize, Serialize};

/// Status of a transaction request as it moves through processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionRequestStatus {
    /// Request received, waiting for the downstream processor.
    Received,
    /// Transaction initiated with the downstream provider.
    Initiated,
    /// Request is pending customer or processor action.
    Pending,
    /// Transaction failed.
    Failed,
    /// Transaction was cancelled.
    Cancelled,
    /// Transaction expired before completion.
    Expired,
    /// Transaction completed.
    Completed,
}

/// ISO 4217 alphabetic currency code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[allow(missing_docs)]
pub enum CurrencyCode {
    Aud,
    Brl,
    Cad,
    Chf,
    Cny,
    Czk,
    Dkk,
    Eur,
    Gbp,
    Hkd,
    Huf,
    Ils,
    Inr,
    Jpy,
    Krw,
    Mxn,
    Nok,
    Nzd,
    Pln,
    Ron,
    Sek,
    Sgd,
    Thb,
    Try,
    Twd,
    Usd,
    Zar,
}

impl CurrencyCode {
    /// Wire value of the currency code.
    pub fn as_str(self) -> &'static str {
        match self {
            CurrencyCode::Aud => "AUD",
            CurrencyCode::Brl => "BRL",
            CurrencyCode::Cad => "CAD",
            CurrencyCode::Chf => "CHF",
            CurrencyCode::Cny => "CNY",
            CurrencyCode::Czk => "CZK",
            CurrencyCode::Dkk => "DKK",
            CurrencyCode::Eur => "EUR",
            CurrencyCode::Gbp => "GBP",
            CurrencyCode::Hkd => "HKD",
            CurrencyCode::Huf => "HUF",
            CurrencyCode::Ils => "ILS",
            CurrencyCode::Inr => "INR",
            CurrencyCode::Jpy => "JPY",
            CurrencyCode::Krw => "KRW",
            CurrencyCode::Mxn => "MXN",
            CurrencyCode::Nok => "NOK",
            CurrencyCode::Nzd => "NZD",
            CurrencyCode::Pln => "PLN",
            CurrencyCode::Ron => "RON",
            CurrencyCode::Sek => "SEK",
            CurrencyCode::Sgd => "SGD",
            CurrencyCode::Thb => "THB",
            CurrencyCode::Try => "TRY",
            CurrencyCode::Twd => "TWD",
            CurrencyCode::Usd => "USD",
            CurrencyCode::Zar => "ZAR",
        }
    }
}

impl std::fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role of a merchant return link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReturnLinkRel {
    /// Customer redirect for completing a payment.
    RedirectPayment,
    /// Customer redirect for completing a registration.
    RedirectRegistration,
    /// Redirect target when the transaction completes.
    OnCompleted,
    /// Fallback redirect target.
    Default,
    /// Redirect target when the transaction fails.
    OnFailed,
    /// Redirect target when the customer cancels.
    OnCancelled,
}

/// URL the customer is redirected to after an asynchronous flow.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnLink {
    /// Link role.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rel: Option<ReturnLinkRel>,
    /// Target URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// HTTP method to use when following the link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
}

/// Link returned by the API, e.g. a hosted payment page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    /// Link role.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rel: Option<ReturnLinkRel>,
    /// Target URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// HTTP method to use when following the link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
}

/// Pagination details attached to list responses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    /// Number of records returned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_records: Option<u32>,
    /// Page size that was applied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Current page number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

/// Customer billing address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingDetails {
    /// Nickname for this address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nick_name: Option<String>,
    /// Street and house number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    /// City.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// State or province.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Two-letter country code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Postal or zip code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    /// Phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Customer shipping address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingDetails {
    /// Shipment method, e.g. "T" for two-day service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ship_method: Option<String>,
    /// Street and house number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    /// City.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// State or province.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Two-letter country code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Postal or zip code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
}

/// Details of the device the customer transacted from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceDetails {
    /// Threat-metrix generated device fingerprint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,
}

/// Dynamic descriptor shown on the customer's card statement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MerchantDescriptor {
    /// Merchant descriptor text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dynamic_descriptor: Option<String>,
    /// Merchant phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Raw response details from the downstream gateway.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayResponse {
    /// Transaction identifier at the processor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Processor that handled the transaction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processor: Option<String>,
    /// Processor response code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Raw response code from the scheme.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_code: Option<String>,
    /// Description of the response code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_code_description: Option<String>,
    /// Address verification result code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avs_code: Option<String>,
    /// Merchant identifier at the processor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mid: Option<String>,
    /// Terminal identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terminal_id: Option<String>,
    /// Batch number of the submission.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch_number: Option<String>,
    /// Sequence number within the batch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seq_number: Option<String>,
    /// Date the transaction takes effect.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_date: Option<String>,
    /// Authorization code from the issuer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_code: Option<String>,
    /// Transaction timestamp at the gateway.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub txn_date_time: Option<String>,
    /// Gateway-side status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Order identifier at the gateway.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    /// Operation identifier at the gateway.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_id: Option<String>,
}

/// Customer's date of birth.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateOfBirth {
    /// Day of the month (1-31).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day: Option<u8>,
    /// Month (1-12).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<u8>,
    /// Four-digit year.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<u16>,
}

/// Customer profile attached to a transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Profile identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Profile status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Merchant-assigned customer identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_customer_id: Option<String>,
    /// Locale, e.g. "en_US".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// First name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Last name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Date of birth.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<DateOfBirth>,
    /// Gender.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    /// Nationality.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,
}
