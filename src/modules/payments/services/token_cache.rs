use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use tokio::sync::Mutex;
use tracing::{debug, info};

use super::token_source::TokenSource;
use super::tpay_client::TpayClient;
use crate::core::Result;

/// Reuses access tokens until they are about to expire
///
/// A token is served from the cache while `expires_at - refresh_margin` is
/// still in the future. Refreshes are serialised so concurrent callers wait
/// on a single `/access-token` call. Nothing is cached when a refresh fails.
pub struct TokenCache {
    client: TpayClient,
    refresh_margin: Duration,
    cached: Mutex<Option<CachedToken>>,
}

#[derive(Debug, Clone)]
struct CachedToken {
    value: String,
    expires_at: DateTime<Utc>,
}

impl TokenCache {
    pub fn new(client: TpayClient, refresh_margin: Duration) -> Self {
        Self {
            client,
            refresh_margin,
            cached: Mutex::new(None),
        }
    }

    /// Return a valid token, fetching a new one when needed
    pub async fn token(&self) -> Result<String> {
        let mut cached = self.cached.lock().await;

        if let Some(token) = cached.as_ref() {
            if token.expires_at - self.refresh_margin > Utc::now() {
                debug!(expires_at = %token.expires_at, "Using cached access token");
                return Ok(token.value.clone());
            }
        }

        let fetched_at = Utc::now();
        let fresh = self.client.fetch_access_token().await?;
        let lifetime = fresh.expires_in.min(i32::MAX as u64) as i64;
        let expires_at = fetched_at
            .checked_add_signed(Duration::seconds(lifetime))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);

        info!(
            expires_in = fresh.expires_in,
            token_type = %fresh.token_type,
            "Access token refreshed"
        );

        *cached = Some(CachedToken {
            value: fresh.value.clone(),
            expires_at,
        });

        Ok(fresh.value)
    }

    /// Drop the cached token so the next call fetches a new one
    pub async fn invalidate(&self) {
        self.cached.lock().await.take();
    }
}

#[async_trait]
impl TokenSource for TokenCache {
    async fn bearer_token(&self) -> Result<String> {
        self.token().await
    }
}
