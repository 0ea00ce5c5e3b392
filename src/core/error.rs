use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use std::fmt;

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main application error type
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// A gateway call failed. Only the operation's static message is displayed;
    /// the underlying failure is kept as the error source.
    #[error("{}", .operation.failure_message())]
    Gateway {
        operation: GatewayOperation,
        #[source]
        source: GatewayFailure,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// What actually went wrong underneath an [`AppError::Gateway`].
#[derive(thiserror::Error, Debug)]
pub enum GatewayFailure {
    /// Network unreachable, connection reset, invalid header value, ...
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The gateway answered with a non-2xx status
    #[error("gateway returned HTTP {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    /// A typed response body could not be decoded
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Remote operations exposed by the TPay API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GatewayOperation {
    GetAccessToken,
    CreatePayment,
    GetCheckoutPaymentDetails,
    CancelCheckoutPayment,
    CompletePreAuthorizedPayment,
    ExecuteRecurringPayment,
    DeleteRecurringPayment,
}

impl GatewayOperation {
    pub const ALL: [GatewayOperation; 7] = [
        GatewayOperation::GetAccessToken,
        GatewayOperation::CreatePayment,
        GatewayOperation::GetCheckoutPaymentDetails,
        GatewayOperation::CancelCheckoutPayment,
        GatewayOperation::CompletePreAuthorizedPayment,
        GatewayOperation::ExecuteRecurringPayment,
        GatewayOperation::DeleteRecurringPayment,
    ];

    /// Stable identifier used in log fields
    pub fn as_str(&self) -> &'static str {
        match self {
            GatewayOperation::GetAccessToken => "get_access_token",
            GatewayOperation::CreatePayment => "create_payment",
            GatewayOperation::GetCheckoutPaymentDetails => "get_checkout_payment_details",
            GatewayOperation::CancelCheckoutPayment => "cancel_checkout_payment",
            GatewayOperation::CompletePreAuthorizedPayment => "complete_pre_authorized_payment",
            GatewayOperation::ExecuteRecurringPayment => "execute_recurring_payment",
            GatewayOperation::DeleteRecurringPayment => "delete_recurring_payment",
        }
    }

    /// Human-readable message callers see when the operation fails
    pub fn failure_message(&self) -> &'static str {
        match self {
            GatewayOperation::GetAccessToken => "Failed to get access token",
            GatewayOperation::CreatePayment => "Failed to create payment",
            GatewayOperation::GetCheckoutPaymentDetails => {
                "Failed to get checkout payment details"
            }
            GatewayOperation::CancelCheckoutPayment => "Failed to cancel checkout payment",
            GatewayOperation::CompletePreAuthorizedPayment => {
                "Failed to complete pre-authorized payment"
            }
            GatewayOperation::ExecuteRecurringPayment => "Failed to execute recurring payment",
            GatewayOperation::DeleteRecurringPayment => "Failed to delete recurring payment",
        }
    }
}

impl fmt::Display for GatewayOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();
        let error_message = self.to_string();

        HttpResponse::build(status_code).json(serde_json::json!({
            "error": {
                "message": error_message,
                "code": status_code.as_u16(),
            }
        }))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Gateway { .. } => StatusCode::BAD_GATEWAY,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Helper functions for common error scenarios
impl AppError {
    pub fn gateway(operation: GatewayOperation, source: impl Into<GatewayFailure>) -> Self {
        AppError::Gateway {
            operation,
            source: source.into(),
        }
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        AppError::Configuration(msg.into())
    }

    /// The operation that failed, if this is a gateway error
    pub fn operation(&self) -> Option<GatewayOperation> {
        match self {
            AppError::Gateway { operation, .. } => Some(*operation),
            _ => None,
        }
    }
}
