//! Bearer token storage with claim-derived state.
//!
//! The store is the only component that touches the token key. Every read
//! goes to the storage port, so independent handles over the same backing
//! store always agree.

use std::sync::Arc;
use std::time::Duration;

use chrono::TimeDelta;
use tracing::{debug, info, warn};
use wellspring_domain::{ClaimsDecode, EXPIRY_BUFFER, TOKEN_STORAGE_KEY, decode_claims};

use crate::error::StorageError;
use crate::ports::{Clock, TokenRefresher, TokenStorage};

/// Token store over a durable storage port.
#[derive(Clone)]
pub struct TokenStore {
    storage: Arc<dyn TokenStorage>,
    clock: Arc<dyn Clock>,
    /// A token is treated as expired this long before `exp`.
    expiry_buffer: Duration,
}

impl TokenStore {
    /// Creates a store with the default five minute expiry buffer.
    #[must_use]
    pub fn new(storage: Arc<dyn TokenStorage>, clock: Arc<dyn Clock>) -> Self {
        Self::with_expiry_buffer(storage, clock, EXPIRY_BUFFER)
    }

    /// Creates a store with a custom expiry buffer.
    #[must_use]
    pub fn with_expiry_buffer(
        storage: Arc<dyn TokenStorage>,
        clock: Arc<dyn Clock>,
        expiry_buffer: Duration,
    ) -> Self {
        Self {
            storage,
            clock,
            expiry_buffer,
        }
    }

    /// Overwrites the stored token.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage write fails.
    pub async fn set_token(&self, token: &str) -> Result<(), StorageError> {
        self.storage.set(TOKEN_STORAGE_KEY, token).await
    }

    /// Reads the stored token.
    ///
    /// A storage read failure is logged and reported as no token.
    pub async fn get_token(&self) -> Option<String> {
        match self.storage.get(TOKEN_STORAGE_KEY).await {
            Ok(token) => token,
            Err(e) => {
                warn!(error = %e, "failed to read stored token");
                None
            }
        }
    }

    /// Removes the stored token. Safe when none is stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage write fails.
    pub async fn clear_token(&self) -> Result<(), StorageError> {
        self.storage.remove(TOKEN_STORAGE_KEY).await
    }

    /// True iff a token is stored. Expiry is not checked.
    pub async fn is_authenticated(&self) -> bool {
        self.get_token().await.is_some()
    }

    /// True if the token is absent, undecodable, has no `exp`, or is within
    /// the expiry buffer of `exp`.
    pub async fn is_token_expired(&self) -> bool {
        let Some(token) = self.get_token().await else {
            return true;
        };
        self.is_expired(&token)
    }

    /// First entry of the token's `roles` claim.
    pub async fn get_user_role(&self) -> Option<String> {
        let token = self.get_token().await?;
        match decode_claims(&token) {
            ClaimsDecode::Valid(claims) => claims.primary_role().map(str::to_string),
            ClaimsDecode::Invalid(reason) => {
                debug!(%reason, "cannot read role from stored token");
                None
            }
        }
    }

    /// Refreshes the token when it is expired.
    ///
    /// Returns true if a usable token is stored afterwards. A failed refresh
    /// clears the token.
    pub async fn refresh_token_if_needed(&self, refresher: &dyn TokenRefresher) -> bool {
        let Some(current) = self.get_token().await else {
            return false;
        };
        if !self.is_expired(&current) {
            return true;
        }

        match refresher.refresh(&current).await {
            Ok(fresh) => match self.set_token(&fresh).await {
                Ok(()) => {
                    info!("token refreshed");
                    true
                }
                Err(e) => {
                    warn!(error = %e, "failed to store refreshed token, signing out");
                    self.clear_after_failed_refresh().await;
                    false
                }
            },
            Err(e) => {
                warn!(error = %e, "token refresh failed, signing out");
                self.clear_after_failed_refresh().await;
                false
            }
        }
    }

    async fn clear_after_failed_refresh(&self) {
        if let Err(e) = self.clear_token().await {
            warn!(error = %e, "failed to clear token after refresh failure");
        }
    }

    fn is_expired(&self, token: &str) -> bool {
        let claims = match decode_claims(token) {
            ClaimsDecode::Valid(claims) => claims,
            ClaimsDecode::Invalid(reason) => {
                warn!(%reason, "stored token is malformed");
                return true;
            }
        };
        let Some(expires_at) = claims.expires_at else {
            debug!("stored token has no exp claim");
            return true;
        };
        let buffer = TimeDelta::from_std(self.expiry_buffer).unwrap_or(TimeDelta::MAX);
        let deadline = expires_at
            .checked_sub_signed(buffer)
            .unwrap_or(chrono::DateTime::<chrono::Utc>::MIN_UTC);
        self.clock.now() >= deadline
    }
}

impl std::fmt::Debug for TokenStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenStore")
            .field("expiry_buffer", &self.expiry_buffer)
            .finish_non_exhaustive()
    }
}
