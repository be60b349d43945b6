//! Browser-backed viewport observer.

use layout_contract::{Viewport, FALLBACK_VIEWPORT};
use viewport_host::{ViewportListener, ViewportObserver, ViewportSubscription};

use crate::interop;

#[derive(Debug, Clone, Copy)]
/// Observer backed by the browser window. Reports `fallback` when no window is available.
pub struct WebViewportObserver {
    fallback: Viewport,
}

impl Default for WebViewportObserver {
    fn default() -> Self {
        Self {
            fallback: FALLBACK_VIEWPORT,
        }
    }
}

impl WebViewportObserver {
    /// Observer reporting `fallback` whenever the window size cannot be read.
    pub fn with_fallback(fallback: Viewport) -> Self {
        Self { fallback }
    }

    /// Registers `listener` for `resize` events.
    ///
    /// # Errors
    ///
    /// Returns an error string when the window is unavailable or rejects the listener.
    pub fn listen(&self, listener: ViewportListener) -> Result<ViewportSubscription, String> {
        interop::listen_resize(listener)
    }
}

impl ViewportObserver for WebViewportObserver {
    fn viewport(&self) -> Viewport {
        interop::read_viewport().unwrap_or(self.fallback)
    }

    /// Falls back to a detached handle when the window rejects the listener, leaving the
    /// viewport at its last reading. [`ViewportObserver::try_subscribe`] reports the failure.
    fn subscribe(&self, listener: ViewportListener) -> ViewportSubscription {
        self.listen(listener)
            .unwrap_or_else(|_| ViewportSubscription::detached())
    }

    fn try_subscribe(&self, listener: ViewportListener) -> Result<ViewportSubscription, String> {
        self.listen(listener)
    }
}
