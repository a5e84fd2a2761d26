use anyhow::Result;
use async_trait::async_trait;

/// Source of bearer tokens for authenticated backend calls.
///
/// The token is fetched fresh before every request — no caching happens on
/// this side of the seam. Host applications back this with their identity
/// provider session.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    async fn token(&self) -> Result<String>;
}

/// Fixed-token provider for tooling and tests.
pub struct StaticTokenProvider {
    token: String,
}

impl StaticTokenProvider {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

#[async_trait]
impl TokenProvider for StaticTokenProvider {
    async fn token(&self) -> Result<String> {
        Ok(self.token.clone())
    }
}
