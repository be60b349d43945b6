//! Responsive layout components and hooks for Leptos.
//!
//! [`LayoutProvider`] publishes a [`LayoutContext`] (breakpoint table, live viewport, and the
//! active breakpoint). Components translate semantic layout props into inline styles for the
//! active breakpoint and show or hide content based on responsive queries. Configuration
//! errors are logged and rendered as `Err` views so an `ErrorBoundary` can catch them.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod components;
mod context;
mod hooks;

pub use components::{
    Area, AreaSlot, Areas, Box, Composition, LayoutProvider, MediaQuery, Only, Visible,
};
pub use context::{use_layout, LayoutContext};
pub use hooks::{
    use_breakpoint_change, use_current_breakpoint, use_media_query, use_responsive_props,
    use_responsive_query, use_responsive_style, use_responsive_value, use_viewport,
    use_viewport_change,
};
pub use layout_contract::{
    Behavior, ConfigurationError, LayoutOptions, LayoutProps, MediaQueryParams, Orientation,
    PropValue, Responsive, ResponsiveQuery, Viewport,
};

/// Convenience imports for crates building responsive views.
pub mod prelude {
    pub use crate::{
        use_breakpoint_change, use_current_breakpoint, use_layout, use_media_query,
        use_responsive_props, use_responsive_query, use_responsive_style, use_responsive_value,
        use_viewport,
        use_viewport_change, Area, AreaSlot, Areas, Behavior, Box, Composition,
        ConfigurationError, LayoutContext, LayoutOptions, LayoutProps, LayoutProvider,
        MediaQuery, MediaQueryParams, Only, Orientation, PropValue, Responsive, ResponsiveQuery,
        Viewport, Visible,
    };
}
