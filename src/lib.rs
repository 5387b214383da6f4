//! `retry-get` performs a single HTTP GET with bounded, linear-backoff
//! retries on transient failures.
//!
//! - [`Fetcher::fetch`] runs the whole operation and reports the body size.
//! - [`retry_with_backoff`] is the underlying retry controller, usable with
//!   any attempt closure whose response implements [`HttpResponse`].
//!
//! Transport errors and responses with status `>= 500` are retried, waiting
//! `n * 100ms` before attempt `n`, for at most four attempts.

mod delay;
mod error;
mod fetcher;
mod options;
mod retry;

pub use delay::{Delay, NoDelay, TokioSleep};
pub use error::{FetchError, LastFailure, RetryError};
pub use fetcher::{FetchReport, Fetcher};
pub use options::{
    FetchOptions, RetryPolicy, DEFAULT_MAX_RETRIES, DEFAULT_RETRY_BACKOFF_MS, DEFAULT_URL,
};
pub use retry::{is_retryable, retry_with_backoff, HttpResponse, Retried, SERVER_ERROR_THRESHOLD};

pub type Result<T> = std::result::Result<T, FetchError>;
