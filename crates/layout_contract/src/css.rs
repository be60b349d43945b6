//! Translation of layout props into CSS declarations and stylesheet text.

use crate::error::ConfigurationError;
use crate::options::LayoutOptions;
use crate::props::{LayoutProps, PropKind, PropSpec};
use crate::query::media_condition;
use crate::responsive::{BoundResponsive, Responsive};
use crate::template::template_areas_css;
use crate::value::PropValue;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Ordered CSS declarations. Setting a property twice keeps its first position and the last value.
pub struct CssDeclarations {
    entries: Vec<(String, String)>,
}

impl CssDeclarations {
    /// Creates an empty declaration list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `property` to `value`.
    pub fn set(&mut self, property: impl Into<String>, value: impl Into<String>) {
        let property = property.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(name, _)| *name == property) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((property, value)),
        }
    }

    /// Builder form of [`CssDeclarations::set`].
    pub fn with(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(property, value);
        self
    }

    /// Appends every declaration of `other`, overriding shared properties.
    pub fn extend(&mut self, other: CssDeclarations) {
        for (property, value) in other.entries {
            self.set(property, value);
        }
    }

    /// Value of `property`, if set.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| name == property)
            .map(|(_, value)| value.as_str())
    }

    /// Iterates `(property, value)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(property, value)| (property.as_str(), value.as_str()))
    }

    /// Number of declarations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether there are no declarations.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Renders the declarations for an HTML `style` attribute.
    pub fn to_inline_style(&self) -> String {
        self.entries
            .iter()
            .map(|(property, value)| format!("{property}: {value};"))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn write_block(&self, out: &mut String, selector: &str, indent: &str) {
        out.push_str(&format!("{indent}{selector} {{\n"));
        for (property, value) in &self.entries {
            out.push_str(&format!("{indent}  {property}: {value};\n"));
        }
        out.push_str(&format!("{indent}}}\n"));
    }
}

/// Renders one prop value according to its spec.
pub fn render_value(spec: PropSpec, value: &PropValue, unit: &str) -> String {
    match spec.kind {
        PropKind::Length => value.to_css(unit),
        PropKind::Keyword => value.to_css_unitless(),
        PropKind::Template => template_areas_css(&value.to_css_unitless()),
    }
}

fn write_prop(out: &mut CssDeclarations, spec: PropSpec, value: &PropValue, unit: &str) {
    let rendered = render_value(spec, value, unit);
    for property in spec.properties {
        out.set(*property, rendered.clone());
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Layout props validated against one breakpoint table.
///
/// Resolution per breakpoint index cannot fail, so the result can be recomputed on every
/// viewport change.
pub struct BoundLayoutProps {
    unit: String,
    entries: Vec<(PropSpec, BoundResponsive<PropValue>)>,
}

impl BoundLayoutProps {
    /// CSS declarations for breakpoint `index`.
    pub fn declarations_at(&self, index: usize) -> CssDeclarations {
        let mut out = CssDeclarations::new();
        for (spec, value) in &self.entries {
            if let Some(value) = value.at(index) {
                write_prop(&mut out, *spec, value, &self.unit);
            }
        }
        out
    }
}

impl LayoutProps {
    /// Validates every responsive prop against `options`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::UnknownBreakpoint`] when a prop references a breakpoint
    /// missing from the table.
    pub fn bind(&self, options: &LayoutOptions) -> Result<BoundLayoutProps, ConfigurationError> {
        let entries = self
            .iter()
            .map(|(spec, value)| {
                value
                    .bind(options.breakpoints(), options.default_behavior())
                    .map(|bound| (spec, bound))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(BoundLayoutProps {
            unit: options.default_unit().to_string(),
            entries,
        })
    }
}

/// Resolves `props` at the breakpoint called `current` into plain CSS declarations.
///
/// # Errors
///
/// Returns [`ConfigurationError::UnknownBreakpoint`] when `current` or any prop references a
/// breakpoint missing from the table.
pub fn resolve(
    props: &LayoutProps,
    current: &str,
    options: &LayoutOptions,
) -> Result<CssDeclarations, ConfigurationError> {
    let index = options.breakpoints().index_of(current)?;
    Ok(props.bind(options)?.declarations_at(index))
}

/// Renders `props` as a stylesheet: one rule for constant props and one `@media` rule per
/// breakpoint for breakpoint-specific props.
///
/// # Errors
///
/// See [`resolve`].
pub fn stylesheet(
    selector: &str,
    props: &LayoutProps,
    options: &LayoutOptions,
) -> Result<String, ConfigurationError> {
    let unit = options.default_unit();
    let table = options.breakpoints();
    let mut base = CssDeclarations::new();
    let mut responsive = Vec::new();
    for (spec, value) in props.iter() {
        match value {
            Responsive::Plain(value) => write_prop(&mut base, spec, value, unit),
            Responsive::Breakpoints(_) => {
                responsive.push((spec, value.bind(table, options.default_behavior())?))
            }
        }
    }

    let mut media_blocks = Vec::new();
    for index in 0..table.len() {
        let mut declarations = CssDeclarations::new();
        for (spec, bound) in &responsive {
            if let Some(value) = bound.at(index) {
                write_prop(&mut declarations, *spec, value, unit);
            }
        }
        if declarations.is_empty() {
            continue;
        }
        match table.range_at(index).and_then(media_condition) {
            Some(condition) => media_blocks.push((condition, declarations)),
            None => base.extend(declarations),
        }
    }

    let mut out = String::new();
    if !base.is_empty() {
        base.write_block(&mut out, selector, "");
    }
    for (condition, declarations) in media_blocks {
        out.push_str(&format!("@media {condition} {{\n"));
        declarations.write_block(&mut out, selector, "  ");
        out.push_str("}\n");
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::breakpoint::{Breakpoint, BreakpointTable};

    fn options() -> LayoutOptions {
        LayoutOptions::with_breakpoints(
            BreakpointTable::new(vec![
                Breakpoint::new("xs", 0.0).with_max_width(599.0),
                Breakpoint::new("sm", 600.0).with_max_width(959.0),
                Breakpoint::new("md", 960.0),
            ])
            .expect("valid table"),
        )
    }

    #[test]
    fn plain_props_translate_to_css_properties() {
        let props = LayoutProps::default()
            .align_items("center")
            .gutter(16)
            .template_cols("1fr auto")
            .margin_vertical("auto");
        let css = resolve(&props, "xs", &options()).expect("resolve");
        assert_eq!(
            css.iter().collect::<Vec<_>>(),
            vec![
                ("align-items", "center"),
                ("margin-top", "auto"),
                ("margin-bottom", "auto"),
                ("grid-template-columns", "1fr auto"),
                ("grid-gap", "16px"),
            ]
        );
    }

    #[test]
    fn responsive_props_follow_the_cascade() {
        let props = LayoutProps::default()
            .padding(Responsive::<PropValue>::breakpoints().at("xs", 8).at("md", 24))
            .template(Responsive::<PropValue>::breakpoints().at("sm", "a\nb").at("md", "a b"));
        let options = options();

        let xs = resolve(&props, "xs", &options).expect("xs");
        assert_eq!(xs.get("padding"), Some("8px"));
        assert_eq!(xs.get("grid-template-areas"), Some("'a' 'b'"));

        let md = resolve(&props, "md", &options).expect("md");
        assert_eq!(md.get("padding"), Some("24px"));
        assert_eq!(md.get("grid-template-areas"), Some("'a b'"));
    }

    #[test]
    fn resolution_is_idempotent() {
        let props = LayoutProps::default().width(Responsive::<PropValue>::breakpoints().at("sm", 50));
        let options = options();
        assert_eq!(
            resolve(&props, "md", &options),
            resolve(&props, "md", &options)
        );
    }

    #[test]
    fn unknown_breakpoints_fail() {
        let props = LayoutProps::default().width(Responsive::<PropValue>::breakpoints().at("xxl", 50));
        assert!(matches!(
            resolve(&props, "md", &options()),
            Err(ConfigurationError::UnknownBreakpoint { .. })
        ));
        assert!(resolve(&LayoutProps::default(), "xxl", &options()).is_err());
    }

    #[test]
    fn inline_style_and_default_unit() {
        let options = options().with_default_unit("rem");
        let css = resolve(&LayoutProps::default().padding(2).display("grid"), "sm", &options)
            .expect("resolve");
        assert_eq!(css.to_inline_style(), "display: grid; padding: 2rem;");
    }

    #[test]
    fn stylesheet_emits_media_rules_for_responsive_props() {
        let props = LayoutProps::default()
            .display("flex")
            .padding(Responsive::<PropValue>::breakpoints().at("xs", 4).at("md", 16));
        let css = stylesheet(".card", &props, &options()).expect("stylesheet");
        assert_eq!(
            css,
            ".card {\n  display: flex;\n}\n\
             @media (max-width: 599px) {\n  .card {\n    padding: 4px;\n  }\n}\n\
             @media (min-width: 600px) and (max-width: 959px) {\n  .card {\n    padding: 4px;\n  }\n}\n\
             @media (min-width: 960px) {\n  .card {\n    padding: 16px;\n  }\n}\n"
        );
    }

    #[test]
    fn later_writes_override_earlier_ones_in_place() {
        let mut css = CssDeclarations::new().with("margin", "0").with("padding", "1px");
        css.set("margin", "auto");
        assert_eq!(css.to_inline_style(), "margin: auto; padding: 1px;");
        assert_eq!(css.len(), 2);
    }
}
