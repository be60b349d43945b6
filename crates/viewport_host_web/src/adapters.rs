use layout_contract::Viewport;
use viewport_host::{NoopViewportObserver, ViewportListener, ViewportObserver, ViewportSubscription};

use crate::WebViewportObserver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Compile-time selected viewport source.
pub enum ViewportStrategy {
    /// Live browser window.
    Browser,
    /// Fixed fallback viewport.
    Fixed,
}

/// Returns the compile-time selected viewport strategy for the active build.
pub const fn selected_viewport_strategy() -> ViewportStrategy {
    #[cfg(all(target_arch = "wasm32", not(feature = "viewport-fixed")))]
    {
        ViewportStrategy::Browser
    }

    #[cfg(not(all(target_arch = "wasm32", not(feature = "viewport-fixed"))))]
    {
        ViewportStrategy::Fixed
    }
}

/// Returns the selected strategy as a stable string token.
pub fn viewport_strategy_name() -> &'static str {
    match selected_viewport_strategy() {
        ViewportStrategy::Browser => "browser",
        ViewportStrategy::Fixed => "fixed",
    }
}

/// Adapter enum that erases the concrete viewport source behind [`ViewportObserver`].
#[derive(Debug, Clone, Copy)]
pub enum ViewportObserverAdapter {
    /// Browser window observer.
    Browser(WebViewportObserver),
    /// Fixed-size observer.
    Fixed(NoopViewportObserver),
}

impl ViewportObserver for ViewportObserverAdapter {
    fn viewport(&self) -> Viewport {
        match self {
            Self::Browser(observer) => observer.viewport(),
            Self::Fixed(observer) => observer.viewport(),
        }
    }

    fn subscribe(&self, listener: ViewportListener) -> ViewportSubscription {
        match self {
            Self::Browser(observer) => observer.subscribe(listener),
            Self::Fixed(observer) => observer.subscribe(listener),
        }
    }

    fn try_subscribe(&self, listener: ViewportListener) -> Result<ViewportSubscription, String> {
        match self {
            Self::Browser(observer) => observer.try_subscribe(listener),
            Self::Fixed(observer) => observer.try_subscribe(listener),
        }
    }
}

/// Builds the viewport observer for the active build.
pub fn viewport_observer() -> ViewportObserverAdapter {
    match selected_viewport_strategy() {
        ViewportStrategy::Browser => ViewportObserverAdapter::Browser(WebViewportObserver::default()),
        ViewportStrategy::Fixed => ViewportObserverAdapter::Fixed(NoopViewportObserver::default()),
    }
}
