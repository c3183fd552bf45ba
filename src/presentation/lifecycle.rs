//! Screen lifetime used to abandon in-flight requests.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::watch;
use tracing::debug;

/// Lifetime of one screen. Closing it, or dropping it, abandons every call
/// raced through [`ScreenLifecycle::guard`].
pub struct ScreenLifecycle {
    closed: Arc<watch::Sender<bool>>,
}

/// Cloneable handle that can close a [`ScreenLifecycle`] from elsewhere.
#[derive(Clone)]
pub struct LifecycleHandle {
    closed: Arc<watch::Sender<bool>>,
}

impl ScreenLifecycle {
    /// Creates open lifecycle.
    #[must_use]
    pub fn new() -> Self {
        let (closed, _rx) = watch::channel(false);
        Self {
            closed: Arc::new(closed),
        }
    }

    /// Returns handle for closing this lifecycle.
    #[must_use]
    pub fn handle(&self) -> LifecycleHandle {
        LifecycleHandle {
            closed: self.closed.clone(),
        }
    }

    /// Closes lifecycle.
    pub fn close(&self) {
        self.closed.send_replace(true);
    }

    /// Returns whether lifecycle is closed.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        *self.closed.borrow()
    }

    /// Runs `future` unless the lifecycle closes first.
    ///
    /// Returns `None` when the result was abandoned.
    pub async fn guard<F: Future>(&self, future: F) -> Option<F::Output> {
        let mut closed = self.closed.subscribe();
        if *closed.borrow_and_update() {
            debug!("Screen already closed, request not started");
            return None;
        }

        tokio::select! {
            biased;
            _ = closed.wait_for(|is_closed| *is_closed) => {
                debug!("Screen closed, abandoning in-flight request");
                None
            }
            output = future => Some(output),
        }
    }
}

impl LifecycleHandle {
    /// Closes the lifecycle this handle belongs to.
    pub fn close(&self) {
        self.closed.send_replace(true);
    }
}

impl Default for ScreenLifecycle {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ScreenLifecycle {
    fn drop(&mut self) {
        self.close();
    }
}
