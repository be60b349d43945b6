//! Responsive queries: declarative filters over the breakpoint table.

use serde::{Deserialize, Serialize};

use crate::breakpoint::{BreakpointTable, UpperBound, WidthRange};
use crate::error::ConfigurationError;

/// Offset applied to exclusive upper edges when rendered as a CSS `max-width` feature.
const EXCLUSIVE_EDGE_OFFSET: f64 = 0.02;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Query selecting a subset of breakpoints.
///
/// `for` selects one breakpoint, `from`/`to` select a contiguous span, and `except`
/// removes one breakpoint from whatever the other keys selected.
pub struct ResponsiveQuery {
    /// Exact breakpoint (`for` in serialized form).
    #[serde(rename = "for", default, skip_serializing_if = "Option::is_none")]
    pub for_breakpoint: Option<String>,
    /// Lower breakpoint of a span.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    /// Upper breakpoint of a span.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    /// Breakpoint excluded from the match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub except: Option<String>,
}

impl ResponsiveQuery {
    /// Matches exactly one breakpoint.
    pub fn exactly(name: impl Into<String>) -> Self {
        Self {
            for_breakpoint: Some(name.into()),
            ..Self::default()
        }
    }

    /// Matches `name` and every wider breakpoint.
    pub fn from_breakpoint(name: impl Into<String>) -> Self {
        Self {
            from: Some(name.into()),
            ..Self::default()
        }
    }

    /// Matches `name` and every narrower breakpoint.
    pub fn to_breakpoint(name: impl Into<String>) -> Self {
        Self {
            to: Some(name.into()),
            ..Self::default()
        }
    }

    /// Matches the inclusive span between two breakpoints.
    pub fn between(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: Some(from.into()),
            to: Some(to.into()),
            ..Self::default()
        }
    }

    /// Matches every width outside `name`.
    pub fn excluding(name: impl Into<String>) -> Self {
        Self {
            except: Some(name.into()),
            ..Self::default()
        }
    }

    /// Adds an `except` clause to the query.
    pub fn with_except(mut self, name: impl Into<String>) -> Self {
        self.except = Some(name.into());
        self
    }

    /// Returns whether no key is set. Empty queries match every width.
    pub fn is_empty(&self) -> bool {
        self.for_breakpoint.is_none()
            && self.from.is_none()
            && self.to.is_none()
            && self.except.is_none()
    }

    /// Validates the query against `table` and converts names into numeric ranges.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::ConflictingQuery`] when `for` is combined with
    /// `from`/`to`, [`ConfigurationError::InvertedRange`] when `from` comes after `to`, and
    /// [`ConfigurationError::UnknownBreakpoint`] for names missing from `table`.
    pub fn resolve(&self, table: &BreakpointTable) -> Result<ResolvedQuery, ConfigurationError> {
        if self.for_breakpoint.is_some() && (self.from.is_some() || self.to.is_some()) {
            return Err(ConfigurationError::ConflictingQuery);
        }

        let mut resolved = match (&self.for_breakpoint, &self.from, &self.to) {
            (Some(name), _, _) => ResolvedQuery::within(table.range_of(name)?),
            (None, Some(from), Some(to)) => {
                if table.index_of(from)? > table.index_of(to)? {
                    return Err(ConfigurationError::InvertedRange {
                        from: from.clone(),
                        to: to.clone(),
                    });
                }
                ResolvedQuery::within(table.range_of(from)?.spanning(table.range_of(to)?))
            }
            (None, Some(from), None) => ResolvedQuery::within(table.range_of(from)?.upward()),
            (None, None, Some(to)) => ResolvedQuery::within(table.range_of(to)?.downward()),
            (None, None, None) => ResolvedQuery::always(),
        };
        resolved.exclude = self
            .except
            .as_deref()
            .map(|name| table.range_of(name))
            .transpose()?;

        Ok(resolved)
    }

    /// Evaluates the query at `width`.
    ///
    /// # Errors
    ///
    /// See [`ResponsiveQuery::resolve`].
    pub fn matches(&self, width: f64, table: &BreakpointTable) -> Result<bool, ConfigurationError> {
        Ok(self.resolve(table)?.matches(width))
    }
}

/// Evaluates `query` at `width` against `table`.
///
/// # Errors
///
/// See [`ResponsiveQuery::resolve`].
pub fn matches(
    query: &ResponsiveQuery,
    width: f64,
    table: &BreakpointTable,
) -> Result<bool, ConfigurationError> {
    query.matches(width, table)
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// Validated query expressed as numeric ranges. Evaluation cannot fail.
pub struct ResolvedQuery {
    include: Option<WidthRange>,
    exclude: Option<WidthRange>,
}

impl ResolvedQuery {
    /// Query matching every width.
    pub fn always() -> Self {
        Self {
            include: None,
            exclude: None,
        }
    }

    /// Query matching exactly `range`.
    pub fn within(range: WidthRange) -> Self {
        Self {
            include: Some(range),
            exclude: None,
        }
    }

    /// Returns whether `width` satisfies the query.
    pub fn matches(&self, width: f64) -> bool {
        let included = self.include.map_or(true, |range| range.contains(width));
        let excluded = self.exclude.is_some_and(|range| range.contains(width));
        included && !excluded
    }

    /// Renders the query as CSS media query text.
    pub fn to_media_query(&self) -> String {
        let include = self.include.and_then(media_condition);
        match self.exclude {
            None => include.unwrap_or_else(|| "all".to_string()),
            Some(exclude) => match (include, media_condition(exclude)) {
                (_, None) => "not all".to_string(),
                (None, Some(exclude)) => format!("not all and {exclude}"),
                (Some(include), Some(exclude)) => format!("{include} and (not ({exclude}))"),
            },
        }
    }
}

/// Renders `range` as `(min-width: …) and (max-width: …)`, or `None` when it covers all widths.
pub(crate) fn media_condition(range: WidthRange) -> Option<String> {
    let mut features = Vec::new();
    if range.min > 0.0 {
        features.push(format!("(min-width: {}px)", range.min));
    }
    match range.max {
        UpperBound::Inclusive(max) => features.push(format!("(max-width: {max}px)")),
        UpperBound::Exclusive(max) => {
            features.push(format!("(max-width: {}px)", max - EXCLUSIVE_EDGE_OFFSET))
        }
        UpperBound::Unbounded => {}
    }
    if features.is_empty() {
        None
    } else {
        Some(features.join(" and "))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::breakpoint::Breakpoint;

    fn table() -> BreakpointTable {
        BreakpointTable::new(vec![
            Breakpoint::new("xs", 0.0).with_max_width(599.0),
            Breakpoint::new("sm", 600.0).with_max_width(959.0),
            Breakpoint::new("md", 960.0).with_max_width(1279.0),
            Breakpoint::new("lg", 1280.0),
        ])
        .expect("valid table")
    }

    fn eval(query: ResponsiveQuery, width: f64) -> bool {
        query.matches(width, &table()).expect("valid query")
    }

    #[test]
    fn sample_queries_at_650_pixels() {
        assert!(eval(ResponsiveQuery::from_breakpoint("sm"), 650.0));
        assert!(!eval(ResponsiveQuery::exactly("xs"), 650.0));
        assert!(!eval(ResponsiveQuery::excluding("sm"), 650.0));
    }

    #[test]
    fn for_matches_only_inside_the_breakpoint_range() {
        for width in [0.0, 300.0, 599.0, 600.0, 959.0, 960.0, 5000.0] {
            assert_eq!(
                eval(ResponsiveQuery::exactly("sm"), width),
                (600.0..=959.0).contains(&width),
                "width {width}"
            );
        }
    }

    #[test]
    fn to_and_from_are_monotonic() {
        let widths: Vec<f64> = (0..30).map(|step| f64::from(step) * 60.0).collect();
        for name in ["xs", "sm", "md", "lg"] {
            let from: Vec<bool> = widths
                .iter()
                .map(|w| eval(ResponsiveQuery::from_breakpoint(name), *w))
                .collect();
            let to: Vec<bool> = widths
                .iter()
                .map(|w| eval(ResponsiveQuery::to_breakpoint(name), *w))
                .collect();
            assert!(from.windows(2).all(|pair| pair[0] <= pair[1]), "from {name}");
            assert!(to.windows(2).all(|pair| pair[0] >= pair[1]), "to {name}");
        }
    }

    #[test]
    fn span_covers_both_ends_inclusively() {
        let query = ResponsiveQuery::between("sm", "md");
        assert!(!eval(query.clone(), 599.0));
        assert!(eval(query.clone(), 600.0));
        assert!(eval(query.clone(), 1279.0));
        assert!(!eval(query, 1280.0));
    }

    #[test]
    fn except_negates_the_equivalent_for_query() {
        for width in [0.0, 599.0, 600.0, 800.0, 959.0, 960.0, 2000.0] {
            for name in ["xs", "sm", "md", "lg"] {
                assert_eq!(
                    eval(ResponsiveQuery::excluding(name), width),
                    !eval(ResponsiveQuery::exactly(name), width)
                );
            }
        }
    }

    #[test]
    fn except_refines_a_span() {
        let query = ResponsiveQuery::between("xs", "md").with_except("sm");
        assert!(eval(query.clone(), 100.0));
        assert!(!eval(query.clone(), 700.0));
        assert!(eval(query.clone(), 1000.0));
        assert!(!eval(query, 1500.0));
    }

    #[test]
    fn empty_query_matches_everything() {
        assert!(ResponsiveQuery::default().is_empty());
        assert!(eval(ResponsiveQuery::default(), 0.0));
        assert!(eval(ResponsiveQuery::default(), 10_000.0));
    }

    #[test]
    fn invalid_queries_are_rejected() {
        let table = table();
        assert_eq!(
            ResponsiveQuery::exactly("xxl").resolve(&table),
            Err(ConfigurationError::UnknownBreakpoint {
                name: "xxl".to_string()
            })
        );
        let conflicting = ResponsiveQuery {
            for_breakpoint: Some("sm".to_string()),
            from: Some("xs".to_string()),
            ..ResponsiveQuery::default()
        };
        assert_eq!(
            conflicting.resolve(&table),
            Err(ConfigurationError::ConflictingQuery)
        );
        assert_eq!(
            ResponsiveQuery::between("md", "sm").resolve(&table),
            Err(ConfigurationError::InvertedRange {
                from: "md".to_string(),
                to: "sm".to_string()
            })
        );
    }

    #[test]
    fn media_query_rendering() {
        let table = table();
        let render = |query: ResponsiveQuery| query.resolve(&table).expect("valid").to_media_query();

        assert_eq!(
            render(ResponsiveQuery::exactly("sm")),
            "(min-width: 600px) and (max-width: 959px)"
        );
        assert_eq!(render(ResponsiveQuery::from_breakpoint("md")), "(min-width: 960px)");
        assert_eq!(render(ResponsiveQuery::to_breakpoint("xs")), "(max-width: 599px)");
        assert_eq!(render(ResponsiveQuery::default()), "all");
        assert_eq!(
            render(ResponsiveQuery::excluding("lg")),
            "not all and (min-width: 1280px)"
        );
    }

    #[test]
    fn resolved_queries_compare_by_range() {
        let table = table();
        let sm = table.range_of("sm").expect("sm");
        assert_eq!(
            ResponsiveQuery::exactly("sm").resolve(&table),
            Ok(ResolvedQuery::within(sm))
        );
        assert_eq!(
            ResponsiveQuery::default().resolve(&table),
            Ok(ResolvedQuery::always())
        );
        assert!(ResolvedQuery::within(sm).matches(959.0));
        assert!(!ResolvedQuery::within(sm).matches(960.0));
        assert!(ResolvedQuery::always().matches(f64::MAX));
    }

    #[test]
    fn deserializes_for_key() {
        let query: ResponsiveQuery =
            serde_json::from_str(r#"{ "for": "md", "except": "sm" }"#).expect("parse query");
        assert_eq!(query.for_breakpoint.as_deref(), Some("md"));
        assert_eq!(query.except.as_deref(), Some("sm"));
    }
}
