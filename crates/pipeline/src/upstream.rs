//! Deadline handling for upstream calls.

use std::future::Future;
use std::time::Duration;

use storybook_genai::GenAiError;

/// Failure of a single deadline-bounded upstream call.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error(transparent)]
    Client(#[from] GenAiError),

    #[error("Upstream call timed out after {0:?}")]
    Timeout(Duration),
}

/// Await `call` for at most `deadline`.
///
/// On expiry the call future is dropped, which aborts its in-flight HTTP
/// request.
pub async fn with_deadline<T, F>(deadline: Duration, call: F) -> Result<T, UpstreamError>
where
    F: Future<Output = Result<T, GenAiError>>,
{
    match tokio::time::timeout(deadline, call).await {
        Ok(result) => Ok(result?),
        Err(_) => Err(UpstreamError::Timeout(deadline)),
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[tokio::test]
    async fn passes_through_results() {
        let ok = with_deadline(Duration::from_secs(1), async { Ok::<_, GenAiError>(7) }).await;
        assert_matches!(ok, Ok(7));

        let err = with_deadline(Duration::from_secs(1), async {
            Err::<(), _>(GenAiError::EmptyResponse)
        })
        .await;
        assert_matches!(err, Err(UpstreamError::Client(GenAiError::EmptyResponse)));
    }

    #[tokio::test]
    async fn expired_deadline_is_timeout() {
        let result = with_deadline(Duration::from_millis(20), async {
            tokio::time::sleep(Duration::from_secs(30)).await;
            Ok::<_, GenAiError>(())
        })
        .await;
        assert_matches!(result, Err(UpstreamError::Timeout(d)) if d == Duration::from_millis(20));
    }
}
