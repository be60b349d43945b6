//! Browser (`wasm32`) implementation of the [`viewport_host`] observer contract.
//!
//! Target-specific glue lives under `interop/`: the wasm build reads
//! `window.innerWidth`/`innerHeight` and listens for `resize`, every other target reports
//! the fallback viewport.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time observer selection.
pub mod adapters;
mod interop;
mod observer;

pub use adapters::{
    selected_viewport_strategy, viewport_observer, viewport_strategy_name,
    ViewportObserverAdapter, ViewportStrategy,
};
pub use observer::WebViewportObserver;
