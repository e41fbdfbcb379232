//! Login, signup, refresh and logout.

use std::str::FromStr;

use async_trait::async_trait;
use serde::Serialize;
use tracing::{info, warn};
use wellspring_domain::models::{AuthResponse, Credentials, RefreshRequest, RefreshResponse};
use wellspring_domain::{HttpMethod, RequestOptions, UserRole};

use crate::api_client::ApiClient;
use crate::error::ApiResult;
use crate::ports::TokenRefresher;

const LOGIN_PATH: &str = "/api/auth/login";
const REFRESH_PATH: &str = "/api/auth/refresh";
const LOGOUT_PATH: &str = "/api/auth/logout";

/// Authentication endpoints.
#[derive(Debug, Clone, Copy)]
pub struct AuthService<'a> {
    client: &'a ApiClient,
}

impl<'a> AuthService<'a> {
    /// Creates the service over a shared client.
    #[must_use]
    pub const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Logs in and stores the returned token.
    ///
    /// # Errors
    ///
    /// Returns the request error, or `ApiError::Storage` if the token
    /// cannot be persisted.
    pub async fn login(&self, credentials: &Credentials) -> ApiResult<AuthResponse> {
        let options = ApiClient::with_json(HttpMethod::Post, credentials)?.without_auth();
        let response: AuthResponse = self.client.request(LOGIN_PATH, options).await?;
        self.client.tokens().set_token(&response.token).await?;
        info!("signed in");
        Ok(response)
    }

    /// Registers an account for `role` and stores the returned token.
    ///
    /// `payload` is the role-specific registration form.
    ///
    /// # Errors
    ///
    /// Returns the request error, or `ApiError::Storage` if the token
    /// cannot be persisted.
    pub async fn signup<P: Serialize + Sync>(
        &self,
        role: UserRole,
        payload: &P,
    ) -> ApiResult<AuthResponse> {
        let path = format!("/api/auth/signup/{role}");
        let options = ApiClient::with_json(HttpMethod::Post, payload)?.without_auth();
        let response: AuthResponse = self.client.request(&path, options).await?;
        self.client.tokens().set_token(&response.token).await?;
        info!(%role, "signed up");
        Ok(response)
    }

    /// Tells the server the session is over and drops the local token.
    ///
    /// The server call is best-effort; the token is cleared regardless.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Storage` if the token cannot be removed.
    pub async fn logout(&self) -> ApiResult<()> {
        if self.client.tokens().is_authenticated().await {
            let options = RequestOptions::method(HttpMethod::Post);
            if let Err(e) = self.client.request_value(LOGOUT_PATH, options).await {
                warn!(error = %e, "server logout failed");
            }
        }
        self.client.tokens().clear_token().await?;
        info!("signed out");
        Ok(())
    }

    /// Refreshes the stored token if it is expired.
    ///
    /// Returns false, with the token cleared, when the session cannot be
    /// kept alive.
    pub async fn refresh_if_needed(&self) -> bool {
        self.client.tokens().refresh_token_if_needed(self).await
    }

    /// Role of the signed-in user, when it is one the platform knows.
    pub async fn current_role(&self) -> Option<UserRole> {
        let role = self.client.tokens().get_user_role().await?;
        UserRole::from_str(&role).ok()
    }
}

#[async_trait]
impl TokenRefresher for AuthService<'_> {
    async fn refresh(&self, current: &str) -> ApiResult<String> {
        let body = RefreshRequest {
            token: current.to_string(),
        };
        let options = ApiClient::with_json(HttpMethod::Post, &body)?.without_auth();
        let response: RefreshResponse = self.client.request(REFRESH_PATH, options).await?;
        Ok(response.token)
    }
}
