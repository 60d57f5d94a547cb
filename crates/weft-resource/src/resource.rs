//! Eagerly started, memoized async values.

use std::fmt;
use std::future::Future;

use futures::future::{BoxFuture, FutureExt, Shared};
use tokio::task::JoinHandle;

/// A shared handle to a computation that starts immediately.
///
/// The computation is spawned when the resource is created, not when it
/// is first read. Every read, across every clone, settles to the same
/// memoized outcome; failures replay exactly like successes. Model
/// fallible computations with a `Result` output.
pub struct Resource<T> {
    outcome: Shared<BoxFuture<'static, T>>,
}

impl<T> Clone for Resource<T> {
    fn clone(&self) -> Self {
        Self {
            outcome: self.outcome.clone(),
        }
    }
}

impl<T> Resource<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Start computing a value in the background.
    ///
    /// Must be called from within a Tokio runtime; the computation runs
    /// whether or not anyone ever reads it.
    pub fn new<F>(compute: F) -> Self
    where
        F: Future<Output = T> + Send + 'static,
    {
        let task = tokio::spawn(compute);
        Self {
            outcome: settle(task).boxed().shared(),
        }
    }

    /// Wait for the outcome. Every caller observes the same value.
    pub async fn read(&self) -> T {
        self.outcome.clone().await
    }

    /// The outcome, if the computation has already settled.
    ///
    /// Never blocks or yields.
    pub fn try_read(&self) -> Option<T> {
        self.outcome.clone().now_or_never()
    }
}

impl<T> fmt::Debug for Resource<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Resource(..)")
    }
}

/// Unwrap a join handle, forwarding panics from the spawned task.
async fn settle<T>(task: JoinHandle<T>) -> T {
    match task.await {
        Ok(value) => value,
        Err(error) if error.is_panic() => std::panic::resume_unwind(error.into_panic()),
        Err(error) => unreachable!("resource task aborted: {error}"),
    }
}
