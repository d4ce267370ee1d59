//! Typed request and response models for the Payments API.
//!
//! All models serialize to camelCase JSON. Optional fields are omitted from
//! request bodies when unset, and unknown response fields are ignored so new
//! API fields never break deserialization. Monetary amounts are minor units
//! (e.g. cents) carried as `i64`.

pub mod api_error;
pub mod cancel;
pub mod card;
pub mod common;
pub mod customer;
pub mod monitor;
pub mod original_credit;
pub mod payment;
pub mod payment_handle;
pub mod payment_method;
pub mod refund;
pub mod settlement;
pub mod standalone_credit;
pub mod verification;
pub mod void_authorization;
