//! Thread entry points.

use super::stop::StopToken;

/// Something a worker thread can run.
///
/// Plain functions and closures taking a [`StopToken`] implement this
/// automatically. Types that carry their own state can implement it
/// directly, the way a callable object would.
pub trait Entry: Send + 'static {
    /// Value handed back through [`WorkerHandle::join`](super::WorkerHandle::join).
    type Output: Send + 'static;

    /// Run to completion on the worker thread.
    fn run(self, stop: StopToken) -> Self::Output;
}

impl<F, T> Entry for F
where
    F: FnOnce(StopToken) -> T + Send + 'static,
    T: Send + 'static,
{
    type Output = T;

    fn run(self, stop: StopToken) -> T {
        self(stop)
    }
}
