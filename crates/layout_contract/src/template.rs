//! Grid template parsing: area names and the breakpoints where each area exists.

use crate::error::ConfigurationError;
use crate::options::LayoutOptions;
use crate::responsive::Responsive;
use crate::value::PropValue;

/// Extracts unique area names from a template, in order of first appearance.
///
/// Rows may be given one per line (`"header header\nsidebar content"`) or already quoted
/// (`"'header header' 'sidebar content'"`). `.` cells are empty and yield no area.
pub fn parse_template_areas(template: &str) -> Vec<String> {
    let mut areas: Vec<String> = Vec::new();
    for token in template
        .split(|c: char| c.is_whitespace() || c == '\'' || c == '"')
        .filter(|token| !token.is_empty())
    {
        if token.chars().all(|c| c == '.') {
            continue;
        }
        if !areas.iter().any(|area| area == token) {
            areas.push(token.to_string());
        }
    }
    areas
}

/// Renders template text as a `grid-template-areas` value.
pub fn template_areas_css(template: &str) -> String {
    let trimmed = template.trim();
    if trimmed.starts_with('\'') || trimmed.starts_with('"') {
        return trimmed.to_string();
    }
    trimmed
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| format!("'{line}'"))
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A named grid area and the breakpoints whose template contains it.
pub struct AreaPlacement {
    /// Area name as written in the template.
    pub name: String,
    breakpoints: Vec<bool>,
}

impl AreaPlacement {
    /// Returns whether the area exists in the template active at breakpoint `index`.
    pub fn is_present_at(&self, index: usize) -> bool {
        self.breakpoints.get(index).copied().unwrap_or(false)
    }

    /// Returns whether the area exists at every breakpoint.
    pub fn is_always_present(&self) -> bool {
        self.breakpoints.iter().all(|present| *present)
    }
}

/// Computes the areas of a possibly responsive template across the breakpoint table.
///
/// # Errors
///
/// Returns [`ConfigurationError::UnknownBreakpoint`] when the template references a breakpoint
/// missing from `options`.
pub fn template_areas(
    template: &Responsive<PropValue>,
    options: &LayoutOptions,
) -> Result<Vec<AreaPlacement>, ConfigurationError> {
    let table = options.breakpoints();
    let bound = template.bind(table, options.default_behavior())?;
    let per_breakpoint: Vec<Vec<String>> = (0..table.len())
        .map(|index| {
            bound
                .at(index)
                .map(|value| parse_template_areas(&value.to_css_unitless()))
                .unwrap_or_default()
        })
        .collect();

    let mut placements: Vec<AreaPlacement> = Vec::new();
    for areas in &per_breakpoint {
        for name in areas {
            if placements.iter().any(|placement| &placement.name == name) {
                continue;
            }
            placements.push(AreaPlacement {
                name: name.clone(),
                breakpoints: per_breakpoint
                    .iter()
                    .map(|areas| areas.contains(name))
                    .collect(),
            });
        }
    }
    Ok(placements)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parses_unique_areas_in_order() {
        assert_eq!(
            parse_template_areas("header header\nsidebar content\n. footer"),
            vec!["header", "sidebar", "content", "footer"]
        );
        assert_eq!(
            parse_template_areas("'thumbnail heading' 'thumbnail ...'"),
            vec!["thumbnail", "heading"]
        );
    }

    #[test]
    fn quotes_template_rows() {
        assert_eq!(
            template_areas_css("\n  header header\n  sidebar content\n"),
            "'header header' 'sidebar content'"
        );
        assert_eq!(template_areas_css("'a b'"), "'a b'");
    }

    #[test]
    fn responsive_templates_record_area_presence() {
        let options = LayoutOptions::default();
        let template: Responsive<PropValue> = Responsive::breakpoints()
            .at("xs", "thumbnail\nheading\nsubheading")
            .at("md", "thumbnail heading");
        let areas = template_areas(&template, &options).expect("areas");

        let names: Vec<&str> = areas.iter().map(|area| area.name.as_str()).collect();
        assert_eq!(names, vec!["thumbnail", "heading", "subheading"]);
        assert!(areas[0].is_always_present());
        let subheading = &areas[2];
        assert!(subheading.is_present_at(0));
        assert!(subheading.is_present_at(1));
        assert!(!subheading.is_present_at(2));
        assert!(!subheading.is_present_at(4));
    }

    #[test]
    fn plain_templates_are_present_everywhere() {
        let areas = template_areas(&Responsive::<PropValue>::from("a b"), &LayoutOptions::default())
            .expect("areas");
        assert!(areas.iter().all(AreaPlacement::is_always_present));
    }
}
