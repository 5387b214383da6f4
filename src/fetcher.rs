use std::fmt;

use reqwest::StatusCode;

use crate::{
    delay::{Delay, TokioSleep},
    retry::{is_retryable, retry_with_backoff, Retried},
    FetchError, FetchOptions, Result,
};

/// Summary of a successful fetch.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FetchReport {
    /// Final status code (always `200`).
    pub status: u16,
    /// Length of the response body in bytes.
    pub bytes: usize,
    /// Attempts it took to get a non-retryable response.
    pub attempts: usize,
}

/// HTTP GET client with bounded linear-backoff retries.
#[derive(Clone)]
pub struct Fetcher<D = TokioSleep> {
    http: reqwest::Client,
    options: FetchOptions,
    delay: D,
}

impl<D: fmt::Debug> fmt::Debug for Fetcher<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fetcher")
            .field("options", &self.options)
            .field("delay", &self.delay)
            .finish_non_exhaustive()
    }
}

impl Default for Fetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetcher {
    /// Creates a fetcher with default options that sleeps on the tokio timer.
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
            options: FetchOptions::default(),
            delay: TokioSleep,
        }
    }
}

impl<D: Delay> Fetcher<D> {
    /// Applies timeout and retry options.
    pub fn with_options(mut self, opts: FetchOptions) -> Self {
        self.options = opts;
        self
    }

    /// Uses a preconfigured `reqwest` client for every attempt.
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    /// Replaces the backoff delay, e.g. with [`NoDelay`](crate::NoDelay) in tests.
    pub fn with_delay<N: Delay>(self, delay: N) -> Fetcher<N> {
        Fetcher {
            http: self.http,
            options: self.options,
            delay,
        }
    }

    /// Options currently in effect.
    pub fn options(&self) -> &FetchOptions {
        &self.options
    }

    /// Fetches `url`, retrying transport errors and 5xx responses, and
    /// returns the size of the body.
    ///
    /// Any terminal status other than `200 OK` fails with
    /// [`FetchError::UnexpectedStatus`]. A body that cannot be read fails with
    /// [`FetchError::BodyRead`] and is not retried.
    pub async fn fetch(&self, url: &str) -> Result<FetchReport> {
        let policy = self.options.retry_policy();
        let Retried {
            value: response,
            attempts,
        } = retry_with_backoff(&policy, &self.delay, || self.execute(url), is_retryable)
            .await
            .map_err(FetchError::Request)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::UnexpectedStatus(status.as_u16()));
        }

        let body = response.bytes().await.map_err(FetchError::BodyRead)?;

        #[cfg(feature = "tracing")]
        tracing::info!(url, bytes = body.len(), attempts, "received response body");

        Ok(FetchReport {
            status: status.as_u16(),
            bytes: body.len(),
            attempts,
        })
    }

    /// Issues exactly one GET request. Status codes are not interpreted.
    async fn execute(&self, url: &str) -> reqwest::Result<reqwest::Response> {
        let mut request = self.http.get(url);
        if let Some(timeout) = self.options.timeout() {
            request = request.timeout(timeout);
        }
        request.send().await
    }
}
