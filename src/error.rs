/// Error type returned by [`Fetcher::fetch`](crate::Fetcher::fetch).
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The retry loop ended without a usable response.
    #[error("failed to make HTTP request: {0}")]
    Request(RetryError<reqwest::Error>),
    /// Terminal response whose status is not `200 OK`.
    #[error("unexpected status code: {0}")]
    UnexpectedStatus(u16),
    /// The status was `200 OK` but the body could not be read.
    #[error("failed to read response body: {0}")]
    BodyRead(reqwest::Error),
}

/// Failure of a [`retry_with_backoff`](crate::retry_with_backoff) loop.
#[derive(Debug, thiserror::Error)]
pub enum RetryError<E> {
    /// An attempt failed and the predicate classified the error as terminal.
    #[error("{0}")]
    Terminal(E),
    /// Every permitted attempt produced a retryable outcome.
    #[error("failed after {attempts} attempts: {cause}")]
    Exhausted {
        /// Total attempts made, including the first.
        attempts: usize,
        /// What the final attempt produced.
        cause: LastFailure<E>,
    },
}

/// Retryable outcome of the final attempt in an exhausted loop.
#[derive(Debug, thiserror::Error)]
pub enum LastFailure<E> {
    /// The attempt failed before any response arrived.
    #[error("{0}")]
    Error(E),
    /// The attempt got a response with a retryable (server error) status.
    #[error("server returned status {0}")]
    Status(u16),
}
