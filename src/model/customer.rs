//! Customer vault models: customers, their addresses, stored payment
//! handles, and single-use customer tokens.

use serde::{Deserialize, Serialize};

use crate::model::card::Card;
use crate::model::common::{
    BillingDetails, CurrencyCode, DateOfBirth, GatewayResponse, Meta, ShippingDetails,
};
use crate::model::payment_handle::PaymentHandleUsage;

/// Lifecycle status of a stored customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CustomerStatus {
    /// Customer created but not yet usable for transactions.
    Initial,
    /// Customer is active.
    Active,
}

/// Lifecycle status of a stored address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AddressStatus {
    /// Address created but not yet active.
    Initial,
    /// Address is active.
    Active,
}

/// Payment types a single-use customer token can cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[allow(missing_docs)]
pub enum SingleUseTokenPaymentType {
    Card,
    Eft,
    Ach,
    Bacs,
    Sepa,
}

/// Request to create or update a customer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRequest {
    /// Merchant-assigned customer identifier, unique per customer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_customer_id: Option<String>,
    /// First name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Middle name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    /// Last name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Mobile phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cell_phone: Option<String>,
    /// Date of birth.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<DateOfBirth>,
    /// Locale, e.g. "en_US".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// Gender.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    /// Nationality.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,
    /// Customer IP address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    /// Merchant account to store the customer under.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    /// Payment handle token to seed the customer with.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_handle_token_from: Option<String>,
}

/// A stored customer returned by the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// Customer identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Lifecycle status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CustomerStatus>,
    /// Merchant-assigned customer identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_customer_id: Option<String>,
    /// First name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Middle name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    /// Last name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Mobile phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cell_phone: Option<String>,
    /// Date of birth.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<DateOfBirth>,
    /// Locale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// Gender.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    /// Nationality.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,
    /// Customer IP address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    /// Merchant account the customer is stored under.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    /// Multi-use token referencing this customer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_token: Option<String>,
    /// Stored addresses; returned when requested via `fields`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub addresses: Option<Vec<Address>>,
    /// Stored payment handles; returned when requested via `fields`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_handles: Option<Vec<CustomerPaymentHandle>>,
}

/// A customer address.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// Address identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Lifecycle status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AddressStatus>,
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
    /// Whether this is the default shipping address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_shipping_address_indicator: Option<bool>,
}

/// Request to store a payment handle on a customer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerPaymentHandleRequest {
    /// Merchant reference number, unique per request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_ref_num: Option<String>,
    /// Single-use payment handle token to convert to multi-use.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_handle_token_from: Option<String>,
    /// Payment method, e.g. "CARD".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_type: Option<String>,
    /// Card details when storing a card directly.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,
    /// Billing address for the stored instrument.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_details: Option<BillingDetails>,
    /// Identifier of an already stored billing address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_details_id: Option<String>,
    /// Currency code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<CurrencyCode>,
    /// Customer IP address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_ip: Option<String>,
    /// Whether to reject duplicate merchant reference numbers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dup_check: Option<bool>,
}

/// A payment handle stored on a customer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerPaymentHandle {
    /// Handle identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Identifier of the owning customer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    /// Merchant reference number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_ref_num: Option<String>,
    /// Multi-use token for this instrument.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_handle_token: Option<String>,
    /// Lifecycle status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Handle usage; stored handles are multi-use.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<PaymentHandleUsage>,
    /// Payment method.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_type: Option<String>,
    /// Card details, masked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,
    /// Billing address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_details: Option<BillingDetails>,
    /// Identifier of the stored billing address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_details_id: Option<String>,
    /// Currency code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<CurrencyCode>,
    /// Gateway response details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway_response: Option<GatewayResponse>,
    /// Shipping address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_details: Option<ShippingDetails>,
    /// Customer IP address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_ip: Option<String>,
}

/// Request to create a single-use customer token.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SingleUseCustomerTokenRequest {
    /// Merchant reference number, unique per request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_ref_num: Option<String>,
    /// Payment types the token may be used for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_type: Option<Vec<SingleUseTokenPaymentType>>,
}

/// A single-use customer token returned by the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SingleUseCustomerToken {
    /// Token identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Identifier of the owning customer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    /// Merchant reference number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_ref_num: Option<String>,
    /// The single-use token value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub single_use_customer_token: Option<String>,
    /// Lifecycle status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Payment types the token may be used for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_type: Option<Vec<SingleUseTokenPaymentType>>,
    /// Seconds until the token expires.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_to_live_seconds: Option<i64>,
    /// Addresses snapshot carried by the token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub addresses: Option<Vec<Address>>,
    /// Payment handles snapshot carried by the token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_handles: Option<Vec<CustomerPaymentHandle>>,
}

/// Page of customer payment handles.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerPaymentHandleList {
    /// Stored handles.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_handles: Option<Vec<CustomerPaymentHandle>>,
    /// Pagination details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_deserialization_with_subcomponents() {
        let body = r#"{
            "id": "cust-1",
            "status": "ACTIVE",
            "merchantCustomerId": "mc-1",
            "paymentToken": "Ptoken",
            "addresses": [{"id": "addr-1", "status": "ACTIVE", "country": "US"}],
            "paymentHandles": [{"id": "ph-1", "usage": "MULTI_USE"}]
        }"#;
        let customer: Customer = serde_json::from_str(body).unwrap();
        assert_eq!(customer.status, Some(CustomerStatus::Active));
        assert_eq!(customer.addresses.unwrap()[0].status, Some(AddressStatus::Active));
        assert_eq!(
            customer.payment_handles.unwrap()[0].usage,
            Some(PaymentHandleUsage::MultiUse)
        );
    }

    #[test]
    fn test_single_use_token_payment_types() {
        let request = SingleUseCustomerTokenRequest {
            merchant_ref_num: Some("tok-1".to_string()),
            payment_type: Some(vec![
                SingleUseTokenPaymentType::Card,
                SingleUseTokenPaymentType::Ach,
            ]),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["paymentType"], serde_json::json!(["CARD", "ACH"]));
    }
}
