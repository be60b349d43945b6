use std::rc::Rc;

use layout_contract::{template_areas, ConfigurationError, LayoutProps, PropValue, Responsive};
use leptos::*;

use super::{configuration_error, merge_layout_class};
use crate::context::{use_layout, LayoutContext};
use crate::hooks::use_responsive_props;

#[derive(Clone)]
/// One named area of a [`Composition`] template.
pub struct AreaSlot {
    name: Rc<str>,
    visible: Signal<bool>,
}

impl AreaSlot {
    /// Area name as written in the template.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the template active at the current breakpoint contains the area.
    pub fn visible(&self) -> Signal<bool> {
        self.visible
    }
}

#[derive(Clone, Default)]
/// Areas generated from a [`Composition`] template, in order of first appearance.
pub struct Areas {
    slots: Rc<Vec<AreaSlot>>,
}

impl Areas {
    /// Builds the area slots of `template`, following the active breakpoint of `layout`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::UnknownBreakpoint`] when the template names a breakpoint
    /// missing from the table.
    pub fn from_template(
        layout: &LayoutContext,
        template: &Responsive<PropValue>,
    ) -> Result<Self, ConfigurationError> {
        let placements = layout
            .options
            .with_value(|options| template_areas(template, options))?;
        let index = layout.breakpoint_index;
        let slots = placements
            .into_iter()
            .map(|placement| {
                let name: Rc<str> = placement.name.as_str().into();
                let visible = if placement.is_always_present() {
                    Signal::derive(|| true)
                } else {
                    Signal::derive(move || placement.is_present_at(index.get()))
                };
                AreaSlot { name, visible }
            })
            .collect();
        Ok(Self {
            slots: Rc::new(slots),
        })
    }

    /// Slot called `name`, if the template defines it.
    pub fn get(&self, name: &str) -> Option<AreaSlot> {
        self.slots.iter().find(|slot| slot.name() == name).cloned()
    }

    /// Slot called `name`. Names missing from the template yield an always visible slot.
    pub fn slot(&self, name: &str) -> AreaSlot {
        self.get(name).unwrap_or_else(|| {
            logging::warn!("composition template has no area `{name}`");
            AreaSlot {
                name: name.into(),
                visible: Signal::derive(|| true),
            }
        })
    }

    /// Iterates the slots in template order.
    pub fn iter(&self) -> impl Iterator<Item = &AreaSlot> {
        self.slots.iter()
    }

    /// Number of areas.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns whether the template defines no area.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

#[component]
/// CSS grid container. `template` rows name the areas handed to `children`.
///
/// ```
/// use layout_ui::{Area, Composition};
/// use leptos::*;
///
/// #[component]
/// fn Page() -> impl IntoView {
///     view! {
///         <Composition template="header header\nsidebar content" let:areas>
///             <Area area=areas.slot("header")>"Title"</Area>
///             <Area area=areas.slot("content")>"Body"</Area>
///         </Composition>
///     }
/// }
/// ```
pub fn Composition<F, IV>(
    /// Grid areas, one template row per line.
    #[prop(optional, into)]
    template: Option<Responsive<PropValue>>,
    #[prop(optional, into)] template_cols: Option<Responsive<PropValue>>,
    #[prop(optional, into)] template_rows: Option<Responsive<PropValue>>,
    #[prop(optional, into)] gutter: Option<Responsive<PropValue>>,
    /// Renders as `inline-grid`.
    #[prop(optional)]
    inline: bool,
    #[prop(optional)] props: LayoutProps,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: F,
) -> impl IntoView
where
    F: Fn(Areas) -> IV + 'static,
    IV: IntoView,
{
    let layout = use_layout();
    let props = composition_props(
        props,
        inline,
        [template, template_cols, template_rows, gutter],
    );
    let areas = match props.template.as_ref() {
        Some(template) => Areas::from_template(&layout, template),
        None => Ok(Areas::default()),
    };
    match areas.and_then(|areas| layout.responsive_props(&props).map(|style| (areas, style))) {
        Ok((areas, style)) => view! {
            <div
                class=merge_layout_class("ui-composition", layout_class)
                data-ui-primitive="true"
                data-ui-kind="composition"
                style=move || style.get().to_inline_style()
            >
                {children(areas)}
            </div>
        }
        .into_view(),
        Err(err) => configuration_error("Composition", err),
    }
}

/// Merges the dedicated grid props over `props` and sets the grid display.
fn composition_props(
    mut props: LayoutProps,
    inline: bool,
    [template, template_cols, template_rows, gutter]: [Option<Responsive<PropValue>>; 4],
) -> LayoutProps {
    let display = if inline { "inline-grid" } else { "grid" };
    props.display.get_or_insert_with(|| display.into());
    props.template = template.or(props.template);
    props.template_cols = template_cols.or(props.template_cols);
    props.template_rows = template_rows.or(props.template_rows);
    props.gutter = gutter.or(props.gutter);
    props
}

#[component]
/// Places children into one area of the enclosing [`Composition`]. Hidden while the active
/// template does not contain the area.
pub fn Area(
    /// Area taken from the composition's [`Areas`].
    area: AreaSlot,
    #[prop(optional)] props: LayoutProps,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: ChildrenFn,
) -> impl IntoView {
    let mut props = props;
    props.area.get_or_insert_with(|| area.name().into());
    let visible = area.visible();
    let name = area.name().to_string();
    match use_responsive_props(&props) {
        Ok(style) => view! {
            <Show when=move || visible.get()>
                <div
                    class=merge_layout_class("ui-area", layout_class)
                    data-ui-primitive="true"
                    data-ui-kind="area"
                    data-ui-area=name.clone()
                    style=move || style.get().to_inline_style()
                >
                    {children()}
                </div>
            </Show>
        }
        .into_view(),
        Err(err) => configuration_error("Area", err),
    }
}
