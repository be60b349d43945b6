use layout_contract::Viewport;
use viewport_host::{ViewportListener, ViewportSubscription};
use wasm_bindgen::{closure::Closure, JsCast};

const RESIZE_EVENT: &str = "resize";

pub fn read_viewport() -> Option<Viewport> {
    let window = web_sys::window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some(Viewport::new(width, height))
}

pub fn listen_resize(listener: ViewportListener) -> Result<ViewportSubscription, String> {
    let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;
    let on_resize = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(move |_| {
        if let Some(viewport) = read_viewport() {
            listener(viewport);
        }
    }));
    window
        .add_event_listener_with_callback(RESIZE_EVENT, on_resize.as_ref().unchecked_ref())
        .map_err(|err| format!("failed to listen for {RESIZE_EVENT}: {err:?}"))?;

    Ok(ViewportSubscription::new(move || {
        if let Some(window) = web_sys::window() {
            let _ = window.remove_event_listener_with_callback(
                RESIZE_EVENT,
                on_resize.as_ref().unchecked_ref(),
            );
        }
        drop(on_resize);
    }))
}
