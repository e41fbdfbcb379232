//! Dashboard aggregation.

use wellspring_domain::models::{DashboardSummary, ProfileCompletion};

use crate::api_client::ApiClient;
use crate::error::ApiResult;

/// Dashboard endpoints.
#[derive(Debug, Clone, Copy)]
pub struct DashboardService<'a> {
    client: &'a ApiClient,
}

impl<'a> DashboardService<'a> {
    /// Creates the service over a shared client.
    #[must_use]
    pub const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Everything shown on the dashboard.
    ///
    /// # Errors
    ///
    /// Returns the request error.
    pub async fn summary(&self) -> ApiResult<DashboardSummary> {
        self.client.get("/api/dashboard/summary").await
    }

    /// Profile completion only.
    ///
    /// # Errors
    ///
    /// Returns the request error.
    pub async fn profile_completion(&self) -> ApiResult<ProfileCompletion> {
        self.client.get("/api/users/me/profile-completion").await
    }
}
