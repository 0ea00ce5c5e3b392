use std::sync::Arc;

use serde_json::Value;
use tracing::{error, info, warn};

use super::super::models::{PaymentNotification, WebhookOutcome};
use crate::core::Result;
use crate::modules::payments::{PaymentStatus, TokenSource, TpayClient};

/// Resolves gateway notifications to an authoritative payment status
///
/// The notification itself is not trusted: only the `PaymentId` is read, and
/// the status comes from `GET /payments/{id}`. There is no signature check or
/// replay protection.
#[derive(Clone)]
pub struct WebhookHandler {
    client: TpayClient,
    tokens: Arc<dyn TokenSource>,
}

impl WebhookHandler {
    pub fn new(client: TpayClient, tokens: Arc<dyn TokenSource>) -> Self {
        Self { client, tokens }
    }

    /// Handle one notification. Never fails; every problem becomes an outcome.
    pub async fn handle(&self, notification: &PaymentNotification) -> WebhookOutcome {
        let Some(payment_id) = notification.payment_id() else {
            warn!(payment_id = ?notification.payment_id, "Webhook received without PaymentId");
            return WebhookOutcome::MissingPaymentId;
        };

        let details = match self.lookup(&payment_id).await {
            Ok(details) => details,
            Err(e) => {
                let cause = std::error::Error::source(&e)
                    .map(ToString::to_string)
                    .unwrap_or_default();
                error!(
                    pay_id = %payment_id,
                    error = %e,
                    cause = %cause,
                    "Payment status lookup failed"
                );
                return WebhookOutcome::LookupFailed { payment_id };
            }
        };

        let reported = details.get("status").and_then(Value::as_str);

        match reported.map(str::parse::<PaymentStatus>) {
            Some(Ok(status)) => {
                // Persisting/activating the status is up to the merchant system
                info!(pay_id = %payment_id, status = %status, "Payment status acknowledged");
                WebhookOutcome::Acknowledged { payment_id, status }
            }
            _ => {
                error!(
                    pay_id = %payment_id,
                    status = reported.unwrap_or("<missing>"),
                    "Unhandled payment status"
                );
                WebhookOutcome::UnhandledStatus {
                    payment_id,
                    status: reported.map(String::from),
                }
            }
        }
    }

    async fn lookup(&self, payment_id: &str) -> Result<Value> {
        let token = self.tokens.bearer_token().await?;
        self.client
            .get_checkout_payment_details(payment_id, &token)
            .await
    }
}
