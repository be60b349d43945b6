//! Hooks over the [`crate::LayoutContext`] provided by [`crate::LayoutProvider`].
//!
//! Every hook panics when called outside a provider, like [`use_layout`].

use layout_contract::{
    ConfigurationError, CssDeclarations, LayoutProps, MediaQueryParams, Responsive,
    ResponsiveQuery, Viewport,
};
use leptos::*;

use crate::context::use_layout;

/// Current viewport size.
pub fn use_viewport() -> Signal<Viewport> {
    use_layout().viewport.into()
}

/// Name of the active breakpoint.
pub fn use_current_breakpoint() -> Signal<String> {
    use_layout().current_breakpoint()
}

/// Runs `callback` on every later viewport change.
pub fn use_viewport_change(callback: impl Fn(Viewport) + 'static) {
    use_layout().on_viewport_change(callback);
}

/// Runs `callback` with the new breakpoint name on every later breakpoint change.
pub fn use_breakpoint_change(callback: impl Fn(String) + 'static) {
    use_layout().on_breakpoint_change(callback);
}

/// Whether `query` matches the current viewport.
///
/// # Errors
///
/// See [`crate::LayoutContext::query`].
pub fn use_responsive_query(query: &ResponsiveQuery) -> Result<Signal<bool>, ConfigurationError> {
    use_layout().query(query)
}

/// Value of `value` at the active breakpoint.
///
/// # Errors
///
/// See [`crate::LayoutContext::responsive_value`].
pub fn use_responsive_value<T: Clone + 'static>(
    value: &Responsive<T>,
) -> Result<Signal<Option<T>>, ConfigurationError> {
    use_layout().responsive_value(value)
}

/// CSS declarations of `props` at the active breakpoint.
///
/// # Errors
///
/// See [`crate::LayoutContext::responsive_props`].
pub fn use_responsive_props(
    props: &LayoutProps,
) -> Result<Signal<CssDeclarations>, ConfigurationError> {
    use_layout().responsive_props(props)
}

/// Inline `style` text of `props` at the active breakpoint, for elements that are not layout
/// components.
///
/// ```
/// use layout_ui::{use_responsive_style, LayoutProps};
/// use leptos::*;
///
/// #[component]
/// fn Banner() -> impl IntoView {
///     match use_responsive_style(&LayoutProps::default().padding(16)) {
///         Ok(style) => view! { <section style=style>"Sale"</section> }.into_view(),
///         Err(err) => Err::<(), _>(err).into_view(),
///     }
/// }
/// ```
///
/// # Errors
///
/// See [`crate::LayoutContext::responsive_props`].
pub fn use_responsive_style(props: &LayoutProps) -> Result<Signal<String>, ConfigurationError> {
    let declarations = use_responsive_props(props)?;
    Ok(Signal::derive(move || declarations.get().to_inline_style()))
}

/// Whether `params` match the current viewport.
pub fn use_media_query(params: MediaQueryParams) -> Signal<bool> {
    use_layout().media_query(params)
}
