//! Complaint reporting.

use wellspring_domain::models::{Complaint, NewComplaint};

use crate::api_client::ApiClient;
use crate::error::ApiResult;

/// Complaint endpoints.
#[derive(Debug, Clone, Copy)]
pub struct ComplaintService<'a> {
    client: &'a ApiClient,
}

impl<'a> ComplaintService<'a> {
    /// Creates the service over a shared client.
    #[must_use]
    pub const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Files a complaint.
    ///
    /// # Errors
    ///
    /// Returns the request error.
    pub async fn submit(&self, complaint: &NewComplaint) -> ApiResult<Complaint> {
        self.client.post("/api/complaints", complaint).await
    }

    /// Complaints filed by the signed-in user.
    ///
    /// # Errors
    ///
    /// Returns the request error.
    pub async fn mine(&self) -> ApiResult<Vec<Complaint>> {
        self.client.get("/api/complaints/mine").await
    }

    /// One complaint with its current status.
    ///
    /// # Errors
    ///
    /// Returns the request error.
    pub async fn get(&self, id: &str) -> ApiResult<Complaint> {
        self.client.get(&format!("/api/complaints/{id}")).await
    }
}
