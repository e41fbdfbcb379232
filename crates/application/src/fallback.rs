//! Ordered fallback over alternative requests.
//!
//! Used where the backend is mid-migration and the same resource is served
//! from a new and a legacy endpoint.

use std::future::Future;
use std::pin::Pin;

use tracing::debug;

use crate::error::{ApiError, ApiResult};

/// A lazily started fallible request. Nothing runs until it is awaited.
pub type Candidate<'a, T> = Pin<Box<dyn Future<Output = ApiResult<T>> + Send + 'a>>;

/// Awaits candidates in order and returns the first success.
///
/// Later candidates are never started once one succeeds. If every candidate
/// fails the last error is returned.
///
/// # Errors
///
/// Returns the last candidate's error, or `ApiError::NoCandidates` for an
/// empty list.
pub async fn first_success<'a, T>(
    candidates: impl IntoIterator<Item = Candidate<'a, T>>,
) -> ApiResult<T> {
    let mut last_error = ApiError::NoCandidates;
    for (index, candidate) in candidates.into_iter().enumerate() {
        match candidate.await {
            Ok(value) => return Ok(value),
            Err(error) => {
                debug!(candidate = index, error = %error, "fallback candidate failed");
                last_error = error;
            }
        }
    }
    Err(last_error)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn not_found() -> ApiError {
        ApiError::Http {
            status: 404,
            message: "Not found".to_string(),
            code: None,
        }
    }

    #[tokio::test]
    async fn test_first_candidate_wins() {
        let started = AtomicUsize::new(0);
        let candidates: Vec<Candidate<'_, u32>> = vec![
            Box::pin(async {
                started.fetch_add(1, Ordering::SeqCst);
                Ok(1)
            }),
            Box::pin(async {
                started.fetch_add(1, Ordering::SeqCst);
                Ok(2)
            }),
        ];

        assert_eq!(first_success(candidates).await.unwrap(), 1);
        assert_eq!(started.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_falls_through_to_second() {
        let candidates: Vec<Candidate<'_, u32>> =
            vec![Box::pin(async { Err(not_found()) }), Box::pin(async { Ok(2) })];

        assert_eq!(first_success(candidates).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_all_fail_returns_last_error() {
        let candidates: Vec<Candidate<'_, u32>> = vec![
            Box::pin(async { Err(ApiError::Network("refused".to_string())) }),
            Box::pin(async { Err(not_found()) }),
        ];

        assert_eq!(first_success(candidates).await, Err(not_found()));
    }

    #[tokio::test]
    async fn test_empty_list() {
        let candidates: Vec<Candidate<'_, u32>> = Vec::new();
        assert_eq!(first_success(candidates).await, Err(ApiError::NoCandidates));
    }
}
