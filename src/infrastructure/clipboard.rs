use std::time::Duration;

use arboard::Clipboard;
use tracing::{debug, warn};

use crate::domain::ports::{ClipboardError, ClipboardLease, ClipboardPort};

/// How long copied text is served by default where the clipboard dies with
/// its owner.
pub const DEFAULT_CLIPBOARD_HOLD: Duration = Duration::from_secs(30);

/// System clipboard adapter.
#[derive(Debug, Clone)]
pub struct ClipboardService {
    hold: Duration,
}

impl ClipboardService {
    /// Creates an adapter that serves copied text for up to `hold` on
    /// platforms that need an owner.
    #[must_use]
    pub const fn new(hold: Duration) -> Self {
        Self { hold }
    }
}

impl Default for ClipboardService {
    fn default() -> Self {
        Self::new(DEFAULT_CLIPBOARD_HOLD)
    }
}

impl ClipboardPort for ClipboardService {
    fn copy_text(&self, text: &str) -> Result<ClipboardLease, ClipboardError> {
        let mut clipboard = Clipboard::new().map_err(|e| {
            warn!("Failed to initialize clipboard for copy: {}", e);
            ClipboardError(e.to_string())
        })?;

        clipboard.set_text(text.to_string()).map_err(|e| {
            warn!("Failed to set clipboard text: {}", e);
            ClipboardError(e.to_string())
        })?;

        debug!(chars = text.chars().count(), "Copied text to clipboard");
        Ok(self.lease(clipboard, text.to_string()))
    }
}

impl ClipboardService {
    /// X11 and Wayland drop the selection with its owner, so a holder
    /// thread keeps serving it.
    #[cfg(target_os = "linux")]
    fn lease(&self, clipboard: Clipboard, text: String) -> ClipboardLease {
        use arboard::SetExtLinux;
        use std::time::Instant;
        use tokio::sync::oneshot;

        let hold = self.hold;
        let (released_tx, released_rx) = oneshot::channel();
        std::thread::spawn(move || {
            let mut clipboard = clipboard;
            let deadline = Instant::now() + hold;
            if let Err(e) = clipboard.set().wait_until(deadline).text(text) {
                warn!("Clipboard holder stopped early: {}", e);
            }
            debug!("Clipboard released");
            let _ = released_tx.send(());
        });
        ClipboardLease::held(hold, released_rx)
    }

    #[cfg(not(target_os = "linux"))]
    fn lease(&self, _clipboard: Clipboard, _text: String) -> ClipboardLease {
        debug!(hold = ?self.hold, "Clipboard keeps contents without an owner");
        ClipboardLease::detached()
    }
}
