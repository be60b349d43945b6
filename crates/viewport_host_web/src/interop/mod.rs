//! Routes viewport reads and resize listeners to the target-specific implementation.

use layout_contract::Viewport;
use viewport_host::{ViewportListener, ViewportSubscription};

#[cfg(not(target_arch = "wasm32"))]
mod non_wasm;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
use non_wasm as imp;
#[cfg(target_arch = "wasm32")]
use wasm as imp;

pub fn read_viewport() -> Option<Viewport> {
    imp::read_viewport()
}

pub fn listen_resize(listener: ViewportListener) -> Result<ViewportSubscription, String> {
    imp::listen_resize(listener)
}
