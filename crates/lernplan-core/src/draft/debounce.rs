//! Debounced save scheduling.
//!
//! Every state mutation schedules a delayed save; a new mutation cancels any
//! pending one and reschedules, so at most one save is in flight per
//! quiescence window. Dropping the debouncer cancels the pending task, which
//! makes teardown mid-wait safe. Tests drive it with `tokio::time::pause`.

use std::future::Future;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;

/// Default quiescence window between the last mutation and the save.
pub const DEFAULT_SAVE_WINDOW: Duration = Duration::from_millis(500);

/// Cancel-then-schedule debounce primitive.
#[derive(Debug)]
pub struct Debouncer {
    window: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl Debouncer {
    /// Create a debouncer with the given quiescence window.
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: Mutex::new(None),
        }
    }

    /// The configured quiescence window.
    pub fn window(&self) -> Duration {
        self.window
    }

    /// Schedule `action` to run after the quiescence window, cancelling any
    /// previously scheduled action.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule<F>(&self, action: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let window = self.window;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(window).await;
            action.await;
        });
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = pending.replace(handle) {
            previous.abort();
        }
    }

    /// Cancel the pending action, if any.
    pub fn cancel(&self) {
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(handle) = pending.take() {
            handle.abort();
        }
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_SAVE_WINDOW)
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
