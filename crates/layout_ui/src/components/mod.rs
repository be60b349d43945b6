//! Layout components: provider, boxes, grid compositions, and responsive visibility.

use layout_contract::ConfigurationError;
use leptos::*;

mod boxed;
mod composition;
mod media;
mod provider;
mod visibility;

pub use boxed::Box;
pub use composition::{Area, AreaSlot, Areas, Composition};
pub use media::MediaQuery;
pub use provider::LayoutProvider;
pub use visibility::{Only, Visible};

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

/// Logs `err` and renders it as an `Err` view for the nearest `ErrorBoundary`.
pub(crate) fn configuration_error(component: &str, err: ConfigurationError) -> View {
    logging::error!("{component}: {err}");
    Err::<(), ConfigurationError>(err).into_view()
}
