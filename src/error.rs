//! Error types for the fetch orchestration
//!
//! Cache misses and rate-limit denials are ordinary values (`None` / `false`)
//! at the component level; only the combined fetch flow surfaces an error.

use thiserror::Error;

// == Fetch Error Enum ==
/// Failure modes of [`fetch_response`](crate::fetch::fetch_response).
///
/// `E` is the error type of the injected remote fetch.
#[derive(Debug, Error)]
pub enum FetchError<E: std::error::Error> {
    /// The rate limiter denied the outbound call; retry later
    #[error("Rate limit exceeded, try again later")]
    RateLimited,

    /// The remote fetch itself failed; nothing was cached
    #[error("Upstream request failed: {0}")]
    Upstream(#[source] E),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Error)]
    #[error("connection reset")]
    struct StubError;

    #[test]
    fn test_display_messages() {
        let denied: FetchError<StubError> = FetchError::RateLimited;
        assert_eq!(denied.to_string(), "Rate limit exceeded, try again later");

        let upstream = FetchError::Upstream(StubError);
        assert_eq!(upstream.to_string(), "Upstream request failed: connection reset");
    }

    #[test]
    fn test_upstream_source_is_preserved() {
        use std::error::Error as _;

        let upstream = FetchError::Upstream(StubError);
        let source = upstream.source().expect("source should be set");
        assert_eq!(source.to_string(), "connection reset");
    }
}
