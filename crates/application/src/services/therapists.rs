//! Therapist marketplace.
//!
//! Listing and detail are served by both the v2 and the legacy endpoints
//! while the backend migrates; both are tried in that order.

use wellspring_domain::models::{Booking, BookingRequest, Therapist};

use crate::api_client::ApiClient;
use crate::error::{ApiError, ApiResult};
use crate::fallback::{Candidate, first_success};

const V2_BASE: &str = "/api/v2/therapists";
const LEGACY_BASE: &str = "/api/therapists";

/// Therapist endpoints.
#[derive(Debug, Clone, Copy)]
pub struct TherapistService<'a> {
    client: &'a ApiClient,
}

impl<'a> TherapistService<'a> {
    /// Creates the service over a shared client.
    #[must_use]
    pub const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// All listed therapists.
    ///
    /// # Errors
    ///
    /// Returns the legacy endpoint's error if both endpoints fail.
    pub async fn list(&self) -> ApiResult<Vec<Therapist>> {
        let candidates: [Candidate<'_, Vec<Therapist>>; 2] = [
            Box::pin(self.client.get(V2_BASE)),
            Box::pin(self.client.get(LEGACY_BASE)),
        ];
        first_success(candidates).await
    }

    /// One therapist's profile.
    ///
    /// # Errors
    ///
    /// Returns the legacy endpoint's error if both endpoints fail.
    pub async fn get(&self, id: &str) -> ApiResult<Therapist> {
        let v2 = format!("{V2_BASE}/{id}");
        let legacy = format!("{LEGACY_BASE}/{id}");
        let candidates: [Candidate<'_, Therapist>; 2] = [
            Box::pin(self.client.get(&v2)),
            Box::pin(self.client.get(&legacy)),
        ];
        first_success(candidates).await
    }

    /// Free-text search. The query is URL-encoded.
    ///
    /// # Errors
    ///
    /// Returns the request error.
    pub async fn search(&self, query: &str) -> ApiResult<Vec<Therapist>> {
        let encoded = encode_query(&[("q", query)])?;
        self.client
            .get(&format!("{LEGACY_BASE}/search?{encoded}"))
            .await
    }

    /// Specialty names starting with `prefix`. The prefix is URL-encoded.
    ///
    /// # Errors
    ///
    /// Returns the request error.
    pub async fn autocomplete_specialties(&self, prefix: &str) -> ApiResult<Vec<String>> {
        let encoded = encode_query(&[("prefix", prefix)])?;
        self.client
            .get(&format!("{LEGACY_BASE}/specialties/autocomplete?{encoded}"))
            .await
    }

    /// Requests a session with a therapist.
    ///
    /// # Errors
    ///
    /// Returns the request error.
    pub async fn book(&self, therapist_id: &str, booking: &BookingRequest) -> ApiResult<Booking> {
        self.client
            .post(&format!("{LEGACY_BASE}/{therapist_id}/bookings"), booking)
            .await
    }
}

fn encode_query(pairs: &[(&str, &str)]) -> ApiResult<String> {
    serde_urlencoded::to_string(pairs).map_err(|e| ApiError::InvalidRequest(e.to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::api_client::tests::client_with;
    use crate::test_support::{ScriptedTransport, Step};
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    const ONE_THERAPIST: &str = r#"[{"id":"t1","name":"Dr. Osei","specialties":["anxiety"]}]"#;

    #[tokio::test]
    async fn test_list_prefers_v2() {
        let transport = Arc::new(ScriptedTransport::new([Step::json(200, ONE_THERAPIST)]));
        let (client, _) = client_with(&transport);

        let list = TherapistService::new(&client).list().await.unwrap();

        assert_eq!(list[0].name, "Dr. Osei");
        assert_eq!(transport.attempts(), 1);
        assert_eq!(
            transport.requests()[0].url,
            "https://api.example.com/api/v2/therapists"
        );
    }

    #[tokio::test]
    async fn test_list_falls_back_to_legacy() {
        let transport = Arc::new(ScriptedTransport::new([
            Step::json(404, r#"{"message":"No such route"}"#),
            Step::json(200, ONE_THERAPIST),
        ]));
        let (client, _) = client_with(&transport);

        let list = TherapistService::new(&client).list().await.unwrap();

        assert_eq!(list.len(), 1);
        let urls: Vec<String> = transport.requests().into_iter().map(|r| r.url).collect();
        assert_eq!(
            urls,
            vec![
                "https://api.example.com/api/v2/therapists".to_string(),
                "https://api.example.com/api/therapists".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_detail_reports_legacy_error_when_both_fail() {
        let transport = Arc::new(ScriptedTransport::new([
            Step::json(404, r#"{"message":"No such route"}"#),
            Step::json(404, r#"{"message":"Therapist not found"}"#),
        ]));
        let (client, _) = client_with(&transport);

        let error = TherapistService::new(&client).get("t9").await.unwrap_err();

        assert_eq!(error.to_string(), "Therapist not found");
    }

    #[tokio::test]
    async fn test_search_encodes_query() {
        let transport = Arc::new(ScriptedTransport::new([Step::json(200, "[]")]));
        let (client, _) = client_with(&transport);

        TherapistService::new(&client)
            .search("grief & loss")
            .await
            .unwrap();

        assert_eq!(
            transport.requests()[0].url,
            "https://api.example.com/api/therapists/search?q=grief+%26+loss"
        );
    }
}
