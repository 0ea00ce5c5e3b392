use serde::{Deserialize, Serialize};

use super::money::{InstallmentProduct, PaymentAmount};

/// Body of `POST /payments`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentRequest {
    pub amount: PaymentAmount,

    /// Where the payer is redirected after checkout
    #[serde(rename = "returnurl")]
    pub return_url: String,

    /// Free-form merchant data echoed back by the gateway
    pub extra: String,

    pub expiration_minutes: u32,

    /// Payment method identifiers offered on the checkout page
    pub methods: Vec<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub installment_products: Option<Vec<InstallmentProduct>>,

    /// Gateway notification target (the webhook receiver)
    pub callback_url: String,

    /// Authorize only; capture later with a completion call
    pub pre_auth: bool,

    pub language: String,
    pub merchant_payment_id: String,
    pub skip_info_message: bool,
    pub save_card: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub save_card_to_date: Option<String>,
}
