//! IQ, EQ and Big Five assessments.

use wellspring_domain::models::{Assessment, AssessmentKind, AssessmentResult, AnswerSubmission};

use crate::api_client::ApiClient;
use crate::error::ApiResult;

/// Assessment endpoints.
#[derive(Debug, Clone, Copy)]
pub struct AssessmentService<'a> {
    client: &'a ApiClient,
}

impl<'a> AssessmentService<'a> {
    /// Creates the service over a shared client.
    #[must_use]
    pub const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Lists available assessments, optionally of one kind.
    ///
    /// # Errors
    ///
    /// Returns the request error.
    pub async fn list(&self, kind: Option<AssessmentKind>) -> ApiResult<Vec<Assessment>> {
        let path = match kind {
            Some(kind) => format!("/api/assessments?type={kind}"),
            None => "/api/assessments".to_string(),
        };
        self.client.get(&path).await
    }

    /// Fetches one assessment with its questions.
    ///
    /// # Errors
    ///
    /// Returns the request error.
    pub async fn get(&self, id: &str) -> ApiResult<Assessment> {
        self.client.get(&format!("/api/assessments/{id}")).await
    }

    /// Submits answers and returns the scored result.
    ///
    /// # Errors
    ///
    /// Returns the request error.
    pub async fn submit(
        &self,
        id: &str,
        submission: &AnswerSubmission,
    ) -> ApiResult<AssessmentResult> {
        self.client
            .post(&format!("/api/assessments/{id}/submissions"), submission)
            .await
    }

    /// Fetches the latest result for an assessment.
    ///
    /// # Errors
    ///
    /// Returns the request error.
    pub async fn result(&self, id: &str) -> ApiResult<AssessmentResult> {
        self.client
            .get(&format!("/api/assessments/{id}/result"))
            .await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::api_client::tests::client_with;
    use crate::test_support::{ScriptedTransport, Step};
    use pretty_assertions::assert_eq;
    use std::sync::Arc;
    use wellspring_domain::HttpMethod;

    #[tokio::test]
    async fn test_list_by_kind() {
        let transport = Arc::new(ScriptedTransport::new([Step::json(
            200,
            r#"[{"id":"a1","kind":"BIG_FIVE","title":"Personality"}]"#,
        )]));
        let (client, _) = client_with(&transport);

        let list = AssessmentService::new(&client)
            .list(Some(AssessmentKind::BigFive))
            .await
            .unwrap();

        assert_eq!(list[0].kind, AssessmentKind::BigFive);
        assert_eq!(
            transport.requests()[0].url,
            "https://api.example.com/api/assessments?type=BIG_FIVE"
        );
    }

    #[tokio::test]
    async fn test_submit_posts_answers() {
        let transport = Arc::new(ScriptedTransport::new([Step::json(
            200,
            r#"{"assessmentId":"a1","traits":{"openness":0.8}}"#,
        )]));
        let (client, _) = client_with(&transport);

        let result = AssessmentService::new(&client)
            .submit("a1", &AnswerSubmission::default().answer("q1", "4"))
            .await
            .unwrap();

        assert_eq!(result.traits.get("openness"), Some(&0.8));
        let sent = &transport.requests()[0];
        assert_eq!(sent.method, HttpMethod::Post);
        assert_eq!(sent.url, "https://api.example.com/api/assessments/a1/submissions");
    }
}
