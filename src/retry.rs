//! Retry controller and the retryability predicate.

use std::future::Future;

use crate::{
    delay::Delay,
    error::{LastFailure, RetryError},
    options::RetryPolicy,
};

/// Lowest status code treated as a transient server error.
pub const SERVER_ERROR_THRESHOLD: u16 = 500;

/// A response handle the retry controller can classify.
///
/// Dropping the value must release its body and connection; the controller
/// relies on that when it discards a retryable response.
pub trait HttpResponse {
    /// Numeric HTTP status code.
    fn status_code(&self) -> u16;
}

impl HttpResponse for reqwest::Response {
    fn status_code(&self) -> u16 {
        self.status().as_u16()
    }
}

/// Non-retryable outcome of a retry loop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Retried<T> {
    /// Value returned by the last attempt.
    pub value: T,
    /// Attempts made, including the first.
    pub attempts: usize,
}

/// Returns `true` when another attempt should follow `outcome`.
///
/// Transport errors and responses with a status of at least
/// [`SERVER_ERROR_THRESHOLD`] are retryable. Every other response is
/// terminal, whether or not it represents success.
pub fn is_retryable<T: HttpResponse, E>(outcome: &Result<T, E>) -> bool {
    match outcome {
        Err(_) => true,
        Ok(response) => response.status_code() >= SERVER_ERROR_THRESHOLD,
    }
}

/// Runs `attempt` until it yields an outcome `is_retryable` rejects, or until
/// `policy` runs out of attempts.
///
/// Attempt `n` (0-based) is preceded by a wait of `policy.backoff(n)`.
/// Retryable responses are dropped before the next attempt starts.
pub async fn retry_with_backoff<T, E, F, Fut, P, D>(
    policy: &RetryPolicy,
    delay: &D,
    mut attempt: F,
    is_retryable: P,
) -> Result<Retried<T>, RetryError<E>>
where
    T: HttpResponse,
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    P: Fn(&Result<T, E>) -> bool,
    D: Delay,
{
    let mut index = 0usize;
    loop {
        if index > 0 {
            let wait = policy.backoff(index);

            #[cfg(feature = "tracing")]
            tracing::debug!(
                attempt = index + 1,
                delay_ms = wait.as_millis() as u64,
                "retrying request after backoff"
            );

            delay.delay(wait).await;
        }

        let outcome = attempt().await;
        let attempts = index + 1;

        if !is_retryable(&outcome) {
            return match outcome {
                Ok(value) => Ok(Retried { value, attempts }),
                Err(err) => Err(RetryError::Terminal(err)),
            };
        }

        let cause = match outcome {
            Ok(response) => {
                let status = response.status_code();
                drop(response);
                LastFailure::Status(status)
            }
            Err(err) => LastFailure::Error(err),
        };

        if index >= policy.max_retries {
            #[cfg(feature = "tracing")]
            tracing::warn!(attempts, "giving up after retryable failures");

            return Err(RetryError::Exhausted { attempts, cause });
        }

        index += 1;
    }
}
