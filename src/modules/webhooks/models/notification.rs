use serde::Deserialize;
use serde_json::Value;

use crate::modules::payments::PaymentStatus;

/// Body the gateway posts to the callback URL
///
/// `PaymentId` is kept as raw JSON so a numeric id is not a parse error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaymentNotification {
    #[serde(rename = "PaymentId", default)]
    pub payment_id: Option<Value>,
}

impl PaymentNotification {
    pub fn new(payment_id: impl Into<String>) -> Self {
        Self {
            payment_id: Some(Value::String(payment_id.into())),
        }
    }

    /// Parse a raw request body. Anything that is not a JSON object yields
    /// a notification without an id.
    pub fn from_body(body: &[u8]) -> Self {
        match serde_json::from_slice::<Value>(body) {
            Ok(object @ Value::Object(_)) => serde_json::from_value(object).unwrap_or_default(),
            _ => Self::default(),
        }
    }

    /// The payment id as a string
    ///
    /// Non-empty strings and non-zero numbers count; empty strings, zero,
    /// `null`, booleans, arrays and objects are treated as absent.
    pub fn payment_id(&self) -> Option<String> {
        match self.payment_id.as_ref()? {
            Value::String(id) if !id.is_empty() => Some(id.clone()),
            Value::Number(id) if id.as_f64() != Some(0.0) => Some(id.to_string()),
            _ => None,
        }
    }
}

/// Result of handling one notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WebhookOutcome {
    /// Status looked up and recognised
    Acknowledged {
        payment_id: String,
        status: PaymentStatus,
    },
    /// No `PaymentId` in the body; nothing was looked up
    MissingPaymentId,
    /// Lookup succeeded but `status` was absent or not one we act on
    UnhandledStatus {
        payment_id: String,
        status: Option<String>,
    },
    /// Token acquisition or status lookup failed
    LookupFailed { payment_id: String },
}

impl WebhookOutcome {
    pub fn is_acknowledged(&self) -> bool {
        matches!(self, WebhookOutcome::Acknowledged { .. })
    }
}
