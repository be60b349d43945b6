//! Viewport observation contracts used by the layout runtime.
//!
//! This crate is the API boundary for viewport size reporting. It exposes the
//! [`ViewportObserver`] trait plus a fixed-size and an in-memory adapter; the browser
//! adapter lives in `viewport_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod observer;

pub use layout_contract::{Viewport, FALLBACK_VIEWPORT};
pub use observer::{
    MemoryViewportObserver, NoopViewportObserver, ViewportListener, ViewportObserver,
    ViewportSubscription,
};
