mod notification;

pub use notification::{PaymentNotification, WebhookOutcome};
