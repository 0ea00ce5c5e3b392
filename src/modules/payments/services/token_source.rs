use async_trait::async_trait;

use crate::core::Result;

/// Supplies bearer tokens for token-scoped TPay calls
#[async_trait]
pub trait TokenSource: Send + Sync {
    async fn bearer_token(&self) -> Result<String>;
}

/// A fixed token, e.g. one obtained out of band.
///
/// `StaticToken::default()` is the empty placeholder; the gateway will reject
/// calls made with it unless it accepts anonymous lookups.
#[derive(Debug, Clone, Default)]
pub struct StaticToken(String);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

#[async_trait]
impl TokenSource for StaticToken {
    async fn bearer_token(&self) -> Result<String> {
        Ok(self.0.clone())
    }
}
