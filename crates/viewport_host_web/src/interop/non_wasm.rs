use layout_contract::Viewport;
use viewport_host::{ViewportListener, ViewportSubscription};

pub fn read_viewport() -> Option<Viewport> {
    None
}

pub fn listen_resize(_listener: ViewportListener) -> Result<ViewportSubscription, String> {
    Ok(ViewportSubscription::detached())
}
