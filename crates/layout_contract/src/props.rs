//! Semantic layout props and the CSS properties each one drives.

use serde::{Deserialize, Serialize};

use crate::responsive::Responsive;
use crate::value::PropValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// How a prop value is rendered into CSS text.
pub enum PropKind {
    /// Numbers receive the default unit.
    Length,
    /// Numbers are written without a unit.
    Keyword,
    /// Template text is split into quoted `grid-template-areas` rows.
    Template,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Static description of one layout prop.
pub struct PropSpec {
    /// Prop name (snake case).
    pub name: &'static str,
    /// CSS properties written for the prop, in order.
    pub properties: &'static [&'static str],
    /// Rendering rule.
    pub kind: PropKind,
}

/// Declares [`LayoutProps`] with one optional responsive field, one builder method, and one
/// [`PropSpec`] per entry.
macro_rules! define_layout_props {
    (
        $(
            $(#[$meta:meta])*
            $field:ident => [$($css:literal),+ $(,)?] $kind:ident
        ),*
        $(,)?
    ) => {
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        #[serde(default, rename_all = "camelCase")]
        /// Layout props accepted by every layout component. Unset props emit nothing.
        pub struct LayoutProps {
            $(
                $(#[$meta])*
                #[doc = concat!("\n\nWrites ", $("`", $css, "` "),+)]
                #[serde(skip_serializing_if = "Option::is_none")]
                pub $field: Option<Responsive<PropValue>>,
            )*
        }

        impl LayoutProps {
            $(
                #[doc = concat!("Sets `", stringify!($field), "`.")]
                pub fn $field(mut self, value: impl Into<Responsive<PropValue>>) -> Self {
                    self.$field = Some(value.into());
                    self
                }
            )*

            /// Every known prop in declaration order.
            pub const SPECS: &'static [PropSpec] = &[
                $(
                    PropSpec {
                        name: stringify!($field),
                        properties: &[$($css),+],
                        kind: PropKind::$kind,
                    },
                )*
            ];

            /// Set props paired with their spec, in declaration order.
            pub fn iter(&self) -> impl Iterator<Item = (PropSpec, &Responsive<PropValue>)> + '_ {
                let values = [$(self.$field.as_ref()),*];
                Self::SPECS
                    .iter()
                    .copied()
                    .zip(values)
                    .filter_map(|(spec, value)| value.map(|value| (spec, value)))
            }
        }
    };
}

define_layout_props! {
    /// CSS `display`; set by the components from their `flex`/`inline` flags.
    display => ["display"] Keyword,

    /// Aligns the box itself inside its container (`align-self`).
    align => ["align-self"] Keyword,
    /// Aligns direct children as a group.
    align_items => ["align-items"] Keyword,
    /// Distributes space around and between content rows.
    align_content => ["align-content"] Keyword,
    /// Justifies the box inside its alignment container (`justify-self`).
    justify => ["justify-self"] Keyword,
    /// Justifies direct children.
    justify_items => ["justify-items"] Keyword,
    /// Distributes space along the main axis.
    justify_content => ["justify-content"] Keyword,
    /// Shorthand for `align-self` and `justify-self`.
    place => ["place-self"] Keyword,
    /// Shorthand for `align-items` and `justify-items`.
    place_items => ["place-items"] Keyword,
    /// Shorthand for `align-content` and `justify-content`.
    place_content => ["place-content"] Keyword,

    flex_direction => ["flex-direction"] Keyword,
    flex_wrap => ["flex-wrap"] Keyword,

    height => ["height"] Length,
    min_height => ["min-height"] Length,
    max_height => ["max-height"] Length,
    width => ["width"] Length,
    min_width => ["min-width"] Length,
    max_width => ["max-width"] Length,

    margin => ["margin"] Length,
    margin_top => ["margin-top"] Length,
    margin_right => ["margin-right"] Length,
    margin_bottom => ["margin-bottom"] Length,
    margin_left => ["margin-left"] Length,
    /// Shorthand for `margin-top` and `margin-bottom`.
    margin_vertical => ["margin-top", "margin-bottom"] Length,
    /// Shorthand for `margin-right` and `margin-left`.
    margin_horizontal => ["margin-right", "margin-left"] Length,

    padding => ["padding"] Length,
    padding_top => ["padding-top"] Length,
    padding_right => ["padding-right"] Length,
    padding_bottom => ["padding-bottom"] Length,
    padding_left => ["padding-left"] Length,
    /// Shorthand for `padding-top` and `padding-bottom`.
    padding_vertical => ["padding-top", "padding-bottom"] Length,
    /// Shorthand for `padding-right` and `padding-left`.
    padding_horizontal => ["padding-right", "padding-left"] Length,

    /// Grid areas, one template row per line: `"header header\nsidebar content"`.
    template => ["grid-template-areas"] Template,
    template_cols => ["grid-template-columns"] Keyword,
    template_rows => ["grid-template-rows"] Keyword,
    /// Named grid area the box is placed into.
    area => ["grid-area"] Keyword,
    /// Shorthand for `grid-column-start` and `grid-column-end`.
    col => ["grid-column"] Keyword,
    col_start => ["grid-column-start"] Keyword,
    col_end => ["grid-column-end"] Keyword,
    /// Shorthand for `grid-row-start` and `grid-row-end`.
    row => ["grid-row"] Keyword,
    row_start => ["grid-row-start"] Keyword,
    row_end => ["grid-row-end"] Keyword,
    /// Spacing between rows and columns.
    gutter => ["grid-gap"] Length,
    gutter_col => ["grid-column-gap"] Length,
    gutter_row => ["grid-row-gap"] Length,
}

impl LayoutProps {
    /// Returns whether no prop is set.
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn builder_sets_fields_and_iter_preserves_declaration_order() {
        let props = LayoutProps::default()
            .gutter(16)
            .align_items("center")
            .padding_vertical(8);
        let names: Vec<&str> = props.iter().map(|(spec, _)| spec.name).collect();
        assert_eq!(names, vec!["align_items", "padding_vertical", "gutter"]);
        assert_eq!(props.gutter, Some(Responsive::Plain(PropValue::Number(16.0))));
    }

    #[test]
    fn shorthand_specs_expand_to_both_sides() {
        let spec = LayoutProps::SPECS
            .iter()
            .find(|spec| spec.name == "margin_horizontal")
            .expect("margin_horizontal");
        assert_eq!(spec.properties, &["margin-right", "margin-left"]);
        assert_eq!(spec.kind, PropKind::Length);
    }

    #[test]
    fn deserializes_camel_case_props() {
        let props: LayoutProps = serde_json::from_str(
            r#"{ "templateCols": "1fr 2fr", "gutterRow": 4, "alignItems": "center" }"#,
        )
        .expect("parse props");
        assert_eq!(props.template_cols, Some(Responsive::Plain("1fr 2fr".into())));
        assert_eq!(props.gutter_row, Some(Responsive::Plain(PropValue::Number(4.0))));
        assert!(!props.is_empty());
        assert!(LayoutProps::default().is_empty());
    }
}
