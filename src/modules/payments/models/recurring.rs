use serde::{Deserialize, Serialize};

use super::money::Money;

/// Body of `POST /tpay/payments/execution`, charging a saved card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecuteRecurringPaymentRequest {
    pub pre_auth: bool,
    pub rec_id: String,
    pub merchant_payment_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<String>,
    pub money: Money,
}

/// Cancellation payload for a recurring payment.
///
/// Same wire shape as [`ExecuteRecurringPaymentRequest`]; kept as its own type
/// so call sites say what they mean.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelPaymentRequest {
    pub pre_auth: bool,
    pub rec_id: String,
    pub merchant_payment_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<String>,
    pub money: Money,
}
