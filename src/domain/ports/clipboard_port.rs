//! Clipboard port definition.

use std::time::Duration;

use thiserror::Error;
use tokio::sync::oneshot;

/// Clipboard access failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("clipboard unavailable: {0}")]
pub struct ClipboardError(pub String);

/// Keeps copied text available after `copy_text` returns.
///
/// Some platforms only serve the clipboard while the writing process owns
/// it. There the adapter hands ownership to a holder that lets go when the
/// hold expires or another program takes the clipboard.
#[derive(Debug)]
pub struct ClipboardLease {
    hold: Option<(Duration, oneshot::Receiver<()>)>,
}

impl ClipboardLease {
    /// Contents stay on the clipboard without this process.
    #[must_use]
    pub const fn detached() -> Self {
        Self { hold: None }
    }

    /// Contents are served for up to `hold`; `released` fires when the
    /// holder lets go.
    #[must_use]
    pub const fn held(hold: Duration, released: oneshot::Receiver<()>) -> Self {
        Self {
            hold: Some((hold, released)),
        }
    }

    /// Returns how long the contents are held, if this process must stay
    /// alive for them.
    #[must_use]
    pub fn hold(&self) -> Option<Duration> {
        self.hold.as_ref().map(|(hold, _)| *hold)
    }

    /// Waits until the contents no longer depend on this process.
    pub async fn released(self) {
        if let Some((_, released)) = self.hold {
            // A dropped holder has let go as well.
            let _ = released.await;
        }
    }
}

/// Port for placing text on the system clipboard.
#[cfg_attr(test, mockall::automock)]
pub trait ClipboardPort: Send + Sync {
    /// Replaces clipboard contents with `text`.
    ///
    /// # Errors
    /// Returns error if the clipboard cannot be opened or written.
    fn copy_text(&self, text: &str) -> Result<ClipboardLease, ClipboardError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_detached_lease_releases_at_once() {
        let lease = ClipboardLease::detached();
        assert_eq!(lease.hold(), None);
        lease.released().await;
    }

    #[tokio::test]
    async fn test_held_lease_waits_for_holder() {
        let (tx, rx) = oneshot::channel();
        let lease = ClipboardLease::held(Duration::from_secs(5), rx);
        assert_eq!(lease.hold(), Some(Duration::from_secs(5)));

        tx.send(()).unwrap();
        lease.released().await;
    }

    #[tokio::test]
    async fn test_dropped_holder_counts_as_released() {
        let (tx, rx) = oneshot::channel::<()>();
        drop(tx);
        ClipboardLease::held(Duration::from_secs(5), rx).released().await;
    }
}
