use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error};

use super::super::models::{
    AccessToken, CreatePaymentRequest, Credentials, ExecuteRecurringPaymentRequest,
};
use crate::config::{GatewayConfig, DEFAULT_BASE_URL};
use crate::core::{AppError, GatewayFailure, GatewayOperation, Result};

/// TBC TPay e-commerce API client
///
/// Every method issues exactly one request. Failures are logged with the
/// operation name and returned as a coarse [`AppError::Gateway`] whose message
/// is the operation's static failure text; the real cause is its `source()`.
///
/// Bearer tokens are supplied per call. See [`super::TokenCache`] for an
/// opt-in way to obtain and reuse them.
///
/// API Documentation: https://developers.tbcbank.ge/docs/checkout-overview
#[derive(Clone)]
pub struct TpayClient {
    client: Client,
    credentials: Credentials,
    base_url: String,
}

#[derive(Serialize)]
struct AmountBody {
    #[serde(with = "rust_decimal::serde::float")]
    amount: Decimal,
}

impl TpayClient {
    /// Create a client against the production endpoint
    pub fn new(credentials: Credentials) -> Self {
        Self::with_base_url(credentials, DEFAULT_BASE_URL)
    }

    /// Create a client against a custom endpoint (sandbox, stub server)
    pub fn with_base_url(credentials: Credentials, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            credentials,
            base_url,
        }
    }

    pub fn from_config(config: &GatewayConfig) -> Self {
        Self::with_base_url(
            Credentials::new(
                config.api_key.clone(),
                config.client_id.clone(),
                config.client_secret.clone(),
            ),
            config.base_url.clone(),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Obtain a bearer token and return only its value
    pub async fn get_access_token(&self) -> Result<String> {
        self.fetch_access_token().await.map(|token| token.value)
    }

    /// Obtain a bearer token with its lifetime
    ///
    /// `POST /access-token` with a form-encoded `client_id`/`client_secret`.
    pub async fn fetch_access_token(&self) -> Result<AccessToken> {
        let url = format!("{}/access-token", self.base_url);
        let request = self
            .client
            .post(&url)
            .header(ACCEPT, "application/json")
            .header("apikey", &self.credentials.api_key)
            .form(&[
                ("client_id", self.credentials.client_id.as_str()),
                ("client_secret", self.credentials.client_secret.as_str()),
            ]);

        self.execute(GatewayOperation::GetAccessToken, request, decode_typed)
            .await
    }

    /// Create a checkout payment
    ///
    /// `POST /payments`
    pub async fn create_payment(
        &self,
        payment: &CreatePaymentRequest,
        access_token: &str,
    ) -> Result<Value> {
        let url = format!("{}/payments", self.base_url);
        let request = self.authorized(self.client.post(&url), access_token).json(payment);

        self.execute(GatewayOperation::CreatePayment, request, decode_opaque)
            .await
    }

    /// Fetch the current state of a checkout payment
    ///
    /// `GET /payments/{pay_id}`
    pub async fn get_checkout_payment_details(
        &self,
        pay_id: &str,
        access_token: &str,
    ) -> Result<Value> {
        let url = format!("{}/payments/{}", self.base_url, pay_id);
        let request = self.authorized(self.client.get(&url), access_token);

        self.execute(
            GatewayOperation::GetCheckoutPaymentDetails,
            request,
            decode_opaque,
        )
        .await
    }

    /// Cancel (fully or partially refund) a checkout payment
    ///
    /// `POST /payments/{pay_id}/cancel` with body `{"amount": ...}`
    pub async fn cancel_checkout_payment(
        &self,
        pay_id: &str,
        amount: Decimal,
        access_token: &str,
    ) -> Result<Value> {
        let url = format!("{}/payments/{}/cancel", self.base_url, pay_id);
        let request = self
            .authorized(self.client.post(&url), access_token)
            .json(&AmountBody { amount });

        self.execute(GatewayOperation::CancelCheckoutPayment, request, decode_opaque)
            .await
    }

    /// Capture a pre-authorized payment
    ///
    /// `POST /payments/{pay_id}/completion` with body `{"amount": ...}`
    pub async fn complete_pre_authorized_payment(
        &self,
        pay_id: &str,
        amount: Decimal,
        access_token: &str,
    ) -> Result<Value> {
        let url = format!("{}/payments/{}/completion", self.base_url, pay_id);
        let request = self
            .authorized(self.client.post(&url), access_token)
            .json(&AmountBody { amount });

        self.execute(
            GatewayOperation::CompletePreAuthorizedPayment,
            request,
            decode_opaque,
        )
        .await
    }

    /// Charge a saved card
    ///
    /// `POST /tpay/payments/execution`
    pub async fn execute_recurring_payment(
        &self,
        payment: &ExecuteRecurringPaymentRequest,
        access_token: &str,
    ) -> Result<Value> {
        let url = format!("{}/tpay/payments/execution", self.base_url);
        let request = self.authorized(self.client.post(&url), access_token).json(payment);

        self.execute(
            GatewayOperation::ExecuteRecurringPayment,
            request,
            decode_opaque,
        )
        .await
    }

    /// Remove a saved card
    ///
    /// `POST /tpay/payments/{rec_id}/delete`, no body
    pub async fn delete_recurring_payment(&self, rec_id: &str, access_token: &str) -> Result<Value> {
        let url = format!("{}/tpay/payments/{}/delete", self.base_url, rec_id);
        let request = self
            .authorized(self.client.post(&url), access_token)
            .header(CONTENT_TYPE, "application/json");

        self.execute(
            GatewayOperation::DeleteRecurringPayment,
            request,
            decode_opaque,
        )
        .await
    }

    /// Headers shared by every token-scoped call.
    ///
    /// Content-Type is left to `.json()` so it is never set twice.
    fn authorized(&self, request: RequestBuilder, access_token: &str) -> RequestBuilder {
        request
            .header(ACCEPT, "application/json")
            .header("apikey", &self.credentials.api_key)
            .header(AUTHORIZATION, format!("Bearer {}", access_token))
    }

    async fn execute<T>(
        &self,
        operation: GatewayOperation,
        request: RequestBuilder,
        decode: fn(String) -> std::result::Result<T, GatewayFailure>,
    ) -> Result<T> {
        debug!(operation = %operation, "Sending TPay request");

        let outcome = match send(request).await {
            Ok(body) => decode(body),
            Err(failure) => Err(failure),
        };

        outcome.map_err(|failure| {
            error!(
                operation = %operation,
                error = %failure,
                "{}",
                operation.failure_message()
            );
            AppError::gateway(operation, failure)
        })
    }
}

/// Send once and return the body of a 2xx response
async fn send(request: RequestBuilder) -> std::result::Result<String, GatewayFailure> {
    let response = request.send().await?;
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        return Err(GatewayFailure::Status { status, body });
    }

    Ok(body)
}

fn decode_typed<T: DeserializeOwned>(body: String) -> std::result::Result<T, GatewayFailure> {
    Ok(serde_json::from_str(&body)?)
}

/// Pass the body through: JSON when it parses, raw text otherwise
fn decode_opaque(body: String) -> std::result::Result<Value, GatewayFailure> {
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }

    Ok(serde_json::from_str(&body).unwrap_or(Value::String(body)))
}
