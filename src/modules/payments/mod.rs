pub mod models;
pub mod services;

pub use models::{
    AccessToken, CancelPaymentRequest, CreatePaymentRequest, Credentials,
    ExecuteRecurringPaymentRequest, InstallmentProduct, Money, PaymentAmount, PaymentStatus,
};
pub use services::{StaticToken, TokenCache, TokenSource, TpayClient};
