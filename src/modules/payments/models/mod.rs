mod access_token;
mod money;
mod payment_request;
mod payment_status;
mod recurring;

pub use access_token::{AccessToken, Credentials};
pub use money::{InstallmentProduct, Money, PaymentAmount};
pub use payment_request::CreatePaymentRequest;
pub use payment_status::PaymentStatus;
pub use recurring::{CancelPaymentRequest, ExecuteRecurringPaymentRequest};
