//! Request core.
//!
//! `ApiClient` runs one logical HTTP call to completion: it builds the
//! request once, applies a per-attempt timeout, retries transient failures
//! with exponential backoff and normalizes error bodies into `ApiError`.
//!
//! The client is built once at startup and handed by reference to every
//! service; cloning it shares the transport and the token store.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info, warn};
use wellspring_domain::request::{AUTHORIZATION, CONTENT_TYPE, JSON_CONTENT_TYPE};
use wellspring_domain::{ClientConfig, HttpMethod, RequestDescriptor, RequestOptions};

use crate::auth::TokenStore;
use crate::error::{ApiError, ApiResult};
use crate::ports::HttpTransport;

/// HTTP client for the platform API.
#[derive(Clone)]
pub struct ApiClient {
    config: Arc<ClientConfig>,
    transport: Arc<dyn HttpTransport>,
    tokens: TokenStore,
}

impl ApiClient {
    /// Creates a client.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidRequest` if the configured base URL is invalid.
    pub fn new(
        config: ClientConfig,
        transport: Arc<dyn HttpTransport>,
        tokens: TokenStore,
    ) -> ApiResult<Self> {
        config.validate()?;
        Ok(Self {
            config: Arc::new(config),
            transport,
            tokens,
        })
    }

    /// The configuration in use.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The token store consulted for the `Authorization` header.
    #[must_use]
    pub const fn tokens(&self) -> &TokenStore {
        &self.tokens
    }

    /// Builds the headers for a call.
    ///
    /// `Content-Type: application/json` always; `Authorization: Bearer <token>`
    /// when a token is stored and the call is not `skip_auth`; caller
    /// overrides last.
    pub async fn build_headers(&self, options: &RequestOptions) -> BTreeMap<String, String> {
        let mut headers = BTreeMap::new();
        headers.insert(CONTENT_TYPE.to_string(), JSON_CONTENT_TYPE.to_string());

        if !options.skip_auth
            && let Some(token) = self.tokens.get_token().await
        {
            headers.insert(AUTHORIZATION.to_string(), format!("Bearer {token}"));
        }

        for (name, value) in &options.headers {
            headers.retain(|existing, _| !existing.eq_ignore_ascii_case(name));
            headers.insert(name.clone(), value.clone());
        }
        headers
    }

    /// Builds the descriptor sent on every attempt of one call.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidRequest` if the body cannot be encoded.
    pub async fn build_descriptor(
        &self,
        path: &str,
        options: &RequestOptions,
    ) -> ApiResult<RequestDescriptor> {
        let body = options
            .body
            .as_ref()
            .map(serde_json::to_vec)
            .transpose()
            .map_err(|e| ApiError::InvalidRequest(format!("cannot encode body: {e}")))?;

        Ok(RequestDescriptor {
            method: options.method,
            url: self.config.url_for(path),
            headers: self.build_headers(options).await,
            body,
        })
    }

    /// Runs a call and returns the raw JSON value.
    ///
    /// An empty 2xx body resolves to `{}`.
    ///
    /// # Errors
    ///
    /// Returns the last attempt's error once retries are exhausted, or the
    /// first non-retryable error.
    pub async fn request_value(&self, path: &str, options: RequestOptions) -> ApiResult<Value> {
        let descriptor = self.build_descriptor(path, &options).await?;
        let policy = self.config.retry;
        let mut attempt: u32 = 1;

        loop {
            debug!(method = %descriptor.method, path, attempt, "sending request");

            let error = match self.attempt(descriptor.clone()).await {
                Ok(value) => return Ok(value),
                Err(error) => error,
            };

            if policy.should_retry(attempt, error.is_retryable()) {
                let delay = policy.backoff_for(attempt);
                warn!(
                    method = %descriptor.method,
                    path,
                    attempt,
                    delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                    error = %error,
                    "request failed, retrying"
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
                continue;
            }

            if error.status() == Some(401) && descriptor.header(AUTHORIZATION).is_some() {
                info!(path, "token rejected, clearing stored token");
                if let Err(e) = self.tokens.clear_token().await {
                    warn!(error = %e, "failed to clear rejected token");
                }
            }

            warn!(
                method = %descriptor.method,
                path,
                attempts = attempt,
                status = error.status(),
                "request failed: {}",
                error.user_message()
            );
            return Err(error);
        }
    }

    /// Runs a call and decodes the JSON result into `T`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Decode` if the body does not match `T`, or any error
    /// from [`ApiClient::request_value`].
    pub async fn request<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> ApiResult<T> {
        let value = self.request_value(path, options).await?;
        serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// GET `path`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.request(path, RequestOptions::get()).await
    }

    /// POST `body` to `path`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        self.request(path, Self::with_json(HttpMethod::Post, body)?)
            .await
    }

    /// PUT `body` to `path`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        self.request(path, Self::with_json(HttpMethod::Put, body)?)
            .await
    }

    /// PATCH `path` with `body`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn patch<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        self.request(path, Self::with_json(HttpMethod::Patch, body)?)
            .await
    }

    /// DELETE `path`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.request(path, RequestOptions::method(HttpMethod::Delete))
            .await
    }

    /// Encodes `body` into options for `method`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidRequest` if `body` does not serialize.
    pub fn with_json<B: Serialize>(method: HttpMethod, body: &B) -> ApiResult<RequestOptions> {
        let value = serde_json::to_value(body)
            .map_err(|e| ApiError::InvalidRequest(format!("cannot encode body: {e}")))?;
        Ok(RequestOptions::with_body(method, value))
    }

    /// One attempt, bounded by the per-attempt timeout.
    async fn attempt(&self, descriptor: RequestDescriptor) -> ApiResult<Value> {
        let response =
            match tokio::time::timeout(self.config.timeout, self.transport.send(descriptor)).await {
                Ok(result) => result?,
                Err(_) => {
                    return Err(ApiError::Timeout {
                        timeout_ms: self.config.timeout_ms(),
                    });
                }
            };

        if !response.is_success() {
            return Err(ApiError::from_response(
                response.status,
                &response.reason,
                &response.body,
            ));
        }

        if response.is_body_empty() {
            return Ok(Value::Object(serde_json::Map::new()));
        }

        serde_json::from_slice(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("config", &self.config)
            .field("tokens", &self.tokens)
            .finish_non_exhaustive()
    }
}
