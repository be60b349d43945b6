//! Pure layout domain shared by the Leptos layout primitives and their hosts.
//!
//! The crate owns the breakpoint table, responsive queries, per-breakpoint prop values, and
//! the translation of semantic layout props into CSS. Everything here is a deterministic
//! function of an explicit [`LayoutOptions`] value; viewport tracking and rendering live in
//! `viewport_host` and `layout_ui`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod breakpoint;
pub mod css;
pub mod error;
pub mod media;
pub mod options;
pub mod props;
pub mod query;
pub mod responsive;
pub mod template;
pub mod value;

pub use breakpoint::{default_breakpoints, Breakpoint, BreakpointTable, UpperBound, WidthRange};
pub use css::{render_value, resolve, stylesheet, BoundLayoutProps, CssDeclarations};
pub use error::ConfigurationError;
pub use media::{MediaQueryParams, Orientation, Viewport, FALLBACK_VIEWPORT};
pub use options::{LayoutOptions, DEFAULT_UNIT};
pub use props::{LayoutProps, PropKind, PropSpec};
pub use query::{matches, ResolvedQuery, ResponsiveQuery};
pub use responsive::{Behavior, BoundResponsive, Responsive, ResponsiveEntry};
pub use template::{parse_template_areas, template_areas, template_areas_css, AreaPlacement};
pub use value::PropValue;
