// TPay Gateway Sandbox
//
// A local stand-in for the TPay API built on wiremock. Each sandbox owns its
// own MockServer; expectations set with `expected_calls` are verified when the
// sandbox is dropped.

use serde_json::{json, Value};
use tpay::{Credentials, TpayClient};
use wiremock::matchers::{any, header, method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

pub const API_KEY: &str = "test-api-key";
pub const CLIENT_ID: &str = "test-client-id";
pub const CLIENT_SECRET: &str = "test-client-secret";
pub const ACCESS_TOKEN: &str = "test-access-token";

/// Versioned prefix the client is pointed at, mirroring the production URL
pub const BASE_PATH: &str = "/v1/tpay";

pub struct TpaySandbox {
    server: MockServer,
}

impl TpaySandbox {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn server(&self) -> &MockServer {
        &self.server
    }

    pub fn base_url(&self) -> String {
        format!("{}{}", self.server.uri(), BASE_PATH)
    }

    /// Client configured with the test credentials against this sandbox
    pub fn client(&self) -> TpayClient {
        TpayClient::with_base_url(
            Credentials::new(API_KEY, CLIENT_ID, CLIENT_SECRET),
            self.base_url(),
        )
    }

    /// Full request path for a gateway-relative path
    pub fn path(relative: &str) -> String {
        format!("{}{}", BASE_PATH, relative)
    }

    /// `POST /access-token` answering with the given token
    pub async fn mock_access_token(&self, token: &str, expires_in: u64, expected_calls: u64) {
        Mock::given(method("POST"))
            .and(path(Self::path("/access-token")))
            .and(header("apikey", API_KEY))
            .respond_with(ResponseTemplate::new(200).set_body_json(access_token_body(
                token, expires_in,
            )))
            .expect(expected_calls)
            .mount(&self.server)
            .await;
    }

    /// `GET /payments/{pay_id}` answering with `details`
    pub async fn mock_payment_details(&self, pay_id: &str, details: Value, expected_calls: u64) {
        Mock::given(method("GET"))
            .and(path(Self::path(&format!("/payments/{}", pay_id))))
            .and(header("apikey", API_KEY))
            .respond_with(ResponseTemplate::new(200).set_body_json(details))
            .expect(expected_calls)
            .mount(&self.server)
            .await;
    }

    /// Any request answers with `status` and a body that must never leak
    pub async fn mock_any_failure(&self, status: u16) {
        Mock::given(any())
            .respond_with(
                ResponseTemplate::new(status).set_body_json(json!({
                    "title": "Gateway failure",
                    "detail": LEAKED_DETAIL,
                })),
            )
            .mount(&self.server)
            .await;
    }

    /// Fails the test if any request reaches the sandbox
    pub async fn expect_no_requests(&self) {
        Mock::given(any())
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&self.server)
            .await;
    }

    pub async fn received(&self) -> Vec<Request> {
        self.server.received_requests().await.unwrap_or_default()
    }
}

/// Text placed in failing gateway responses; must only ever show up in logs
pub const LEAKED_DETAIL: &str = "merchant 42 blocked by risk engine";

pub fn access_token_body(token: &str, expires_in: u64) -> Value {
    json!({
        "access_token": token,
        "expires_in": expires_in,
        "token_type": "Bearer",
    })
}
