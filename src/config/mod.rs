use crate::core::{AppError, Result};
use serde::Deserialize;
use std::env;

pub mod server;

pub use server::ServerConfig;

/// Production TPay endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.tbcbank.ge/v1/tpay";

/// Upper bound for the token refresh margin (one day)
pub const MAX_TOKEN_REFRESH_MARGIN_SECS: u64 = 86_400;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub server: ServerConfig,
    pub gateway: GatewayConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(AppError::configuration(format!(
                "Invalid LOG_FORMAT '{}', expected 'pretty' or 'json'",
                other
            ))),
        }
    }
}

/// TPay merchant credentials and endpoint
#[derive(Clone, Deserialize)]
pub struct GatewayConfig {
    pub api_key: String,
    pub client_id: String,
    pub client_secret: String,
    pub base_url: String,
    pub token_refresh_margin_secs: u64,
}

impl std::fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("api_key", &"<redacted>")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("token_refresh_margin_secs", &self.token_refresh_margin_secs)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
                log_format: env::var("LOG_FORMAT")
                    .unwrap_or_else(|_| "pretty".to_string())
                    .parse()?,
            },
            server: ServerConfig::from_env()?,
            gateway: GatewayConfig {
                api_key: required("TPAY_API_KEY")?,
                client_id: required("TPAY_CLIENT_ID")?,
                client_secret: required("TPAY_CLIENT_SECRET")?,
                base_url: env::var("TPAY_BASE_URL")
                    .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
                token_refresh_margin_secs: env::var("TPAY_TOKEN_REFRESH_MARGIN_SECS")
                    .unwrap_or_else(|_| "60".to_string())
                    .parse()
                    .map_err(|_| {
                        AppError::configuration("Invalid TPAY_TOKEN_REFRESH_MARGIN_SECS")
                    })?,
            },
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let gateway = &self.gateway;
        for (name, value) in [
            ("TPAY_API_KEY", &gateway.api_key),
            ("TPAY_CLIENT_ID", &gateway.client_id),
            ("TPAY_CLIENT_SECRET", &gateway.client_secret),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::configuration(format!("{} must not be empty", name)));
            }
        }

        if !gateway.base_url.starts_with("http://") && !gateway.base_url.starts_with("https://")
        {
            return Err(AppError::configuration(format!(
                "TPAY_BASE_URL must be an http(s) URL, got '{}'",
                gateway.base_url
            )));
        }

        if gateway.token_refresh_margin_secs > MAX_TOKEN_REFRESH_MARGIN_SECS {
            return Err(AppError::configuration(format!(
                "TPAY_TOKEN_REFRESH_MARGIN_SECS must be at most {}",
                MAX_TOKEN_REFRESH_MARGIN_SECS
            )));
        }

        if self.server.port == 0 {
            return Err(AppError::configuration(
                "Server port must be greater than 0",
            ));
        }

        Ok(())
    }
}

fn required(name: &str) -> Result<String> {
    env::var(name).map_err(|_| AppError::configuration(format!("{} not set", name)))
}
