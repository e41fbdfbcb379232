//! Token refresh port

use async_trait::async_trait;

use crate::error::ApiResult;

/// Exchanges a token for a fresh one.
#[async_trait]
pub trait TokenRefresher: Send + Sync {
    /// Performs one refresh call for `current`.
    ///
    /// # Errors
    ///
    /// Returns the request error if the refresh call fails.
    async fn refresh(&self, current: &str) -> ApiResult<String>;
}
