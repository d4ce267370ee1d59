//! Service clients, one per API resource.
//!
//! Each service wraps the shared [`ApiClient`](crate::http::ApiClient) and
//! exposes the operations of a single resource. Services are cheap to
//! construct; obtain them from [`PaysafeClient`](crate::PaysafeClient)
//! accessor methods.
//!
//! Every operation takes `Option<&RequestOptions>` as its final argument to
//! override the response timeout, retry count, or simulator for that call.

mod customer_addresses;
mod customer_payment_handles;
mod customers;
mod monitor;
mod original_credits;
mod payment_handles;
mod payment_methods;
mod payments;
mod refunds;
mod settlements;
mod single_use_tokens;
mod standalone_credits;
mod verifications;
mod void_authorizations;

pub use customer_addresses::CustomerAddressService;
pub use customer_payment_handles::CustomerPaymentHandleService;
pub use customers::CustomerService;
pub use monitor::MonitorService;
pub use original_credits::OriginalCreditService;
pub use payment_handles::PaymentHandleService;
pub use payment_methods::PaymentMethodsService;
pub use payments::PaymentService;
pub use refunds::RefundService;
pub use settlements::SettlementService;
pub use single_use_tokens::CustomerSingleUseTokenService;
pub use standalone_credits::StandaloneCreditService;
pub use verifications::VerificationService;
pub use void_authorizations::VoidAuthorizationService;

/// Filters accepted by list-by-merchant-reference-number operations.
///
/// Dates are UTC in `yyyy-MM-ddTHH:mm:ssZ` form. `end_date` defaults to the
/// current time and `start_date` to 30 days before `end_date` on the server
/// side.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFilter {
    /// Upper bound on transaction time.
    pub end_date: Option<String>,
    /// Maximum number of records to return.
    pub limit: Option<u32>,
    /// Starting position, where 0 is the first record.
    pub offset: Option<u32>,
    /// Lower bound on transaction time.
    pub start_date: Option<String>,
}

/// Builds the query for a list operation in the order the API documents:
/// merchantRefNum, endDate, limit, offset, startDate.
pub(crate) fn list_query<'a>(
    merchant_ref_num: &str,
    filter: Option<&ListFilter>,
) -> Vec<(&'a str, String)> {
    let filter = filter.cloned().unwrap_or_default();
    crate::http::build_query_parameters(&[
        ("merchantRefNum", Some(merchant_ref_num.to_string())),
        ("endDate", filter.end_date),
        ("limit", filter.limit.map(|v| v.to_string())),
        ("offset", filter.offset.map(|v| v.to_string())),
        ("startDate", filter.start_date),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_query_order_and_skipping() {
        let filter = ListFilter {
            limit: Some(10),
            start_date: Some("2024-05-01T00:00:00Z".to_string()),
            ..Default::default()
        };
        let query = list_query("order-1", Some(&filter));
        assert_eq!(
            query,
            vec![
                ("merchantRefNum", "order-1".to_string()),
                ("limit", "10".to_string()),
                ("startDate", "2024-05-01T00:00:00Z".to_string()),
            ]
        );
    }

    #[test]
    fn test_list_query_without_filter() {
        let query = list_query("order-1", None);
        assert_eq!(query, vec![("merchantRefNum", "order-1".to_string())]);
    }
}
