use layout_contract::LayoutProps;
use leptos::*;

use super::{configuration_error, merge_layout_class};
use crate::hooks::use_responsive_props;

#[component]
/// Generic layout block. Layout props are applied as inline styles for the active breakpoint.
pub fn Box(
    /// Renders as a flex container.
    #[prop(optional)]
    flex: bool,
    /// With `flex`, renders as an inline flex container.
    #[prop(optional)]
    inline: bool,
    #[prop(optional)] props: LayoutProps,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    match use_responsive_props(&box_props(props, flex, inline)) {
        Ok(style) => view! {
            <div
                class=merge_layout_class("ui-box", layout_class)
                data-ui-primitive="true"
                data-ui-kind="box"
                style=move || style.get().to_inline_style()
            >
                {children()}
            </div>
        }
        .into_view(),
        Err(err) => configuration_error("Box", err),
    }
}

pub(crate) fn box_props(mut props: LayoutProps, flex: bool, inline: bool) -> LayoutProps {
    if flex {
        let display = if inline { "inline-flex" } else { "flex" };
        props.display.get_or_insert_with(|| display.into());
    }
    props
}
