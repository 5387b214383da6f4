use std::future::Future;
use std::time::Duration;

/// Waits out the backoff between two attempts.
///
/// Production code uses [`TokioSleep`]; tests swap in [`NoDelay`] or a
/// recording implementation so no wall-clock time is spent.
pub trait Delay {
    /// Completes once `duration` has elapsed (or immediately, for fakes).
    fn delay(&self, duration: Duration) -> impl Future<Output = ()> + Send;
}

/// Sleeps on the tokio timer.
#[derive(Clone, Copy, Debug, Default)]
pub struct TokioSleep;

impl Delay for TokioSleep {
    fn delay(&self, duration: Duration) -> impl Future<Output = ()> + Send {
        tokio::time::sleep(duration)
    }
}

/// Skips every backoff wait.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoDelay;

impl Delay for NoDelay {
    fn delay(&self, _duration: Duration) -> impl Future<Output = ()> + Send {
        std::future::ready(())
    }
}
