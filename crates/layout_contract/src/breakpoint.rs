//! Named viewport-width ranges and the ordered table that holds them.

use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// A named viewport-width range.
pub struct Breakpoint {
    /// Unique breakpoint name, e.g. `md`.
    pub name: String,
    /// Inclusive lower bound in CSS pixels.
    #[serde(default, alias = "minWidth")]
    pub min_width: f64,
    /// Inclusive upper bound in CSS pixels. When absent the range ends where the next
    /// breakpoint begins.
    #[serde(default, alias = "maxWidth", skip_serializing_if = "Option::is_none")]
    pub max_width: Option<f64>,
}

impl Breakpoint {
    /// Creates an open-ended breakpoint starting at `min_width`.
    pub fn new(name: impl Into<String>, min_width: f64) -> Self {
        Self {
            name: name.into(),
            min_width,
            max_width: None,
        }
    }

    /// Sets the inclusive upper bound.
    pub fn with_max_width(mut self, max_width: f64) -> Self {
        self.max_width = Some(max_width);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// Upper edge of a [`WidthRange`].
pub enum UpperBound {
    /// `width <= value`, matching CSS `max-width`.
    Inclusive(f64),
    /// `width < value`, used when the range stops at the next breakpoint.
    Exclusive(f64),
    /// No upper edge.
    Unbounded,
}

impl UpperBound {
    fn admits(self, width: f64) -> bool {
        match self {
            Self::Inclusive(max) => width <= max,
            Self::Exclusive(max) => width < max,
            Self::Unbounded => true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// Effective numeric range covered by one or more adjacent breakpoints.
pub struct WidthRange {
    /// Inclusive lower edge.
    pub min: f64,
    /// Upper edge.
    pub max: UpperBound,
}

impl WidthRange {
    /// Returns whether `width` falls inside the range.
    pub fn contains(&self, width: f64) -> bool {
        width >= self.min && self.max.admits(width)
    }

    /// Returns a range from this range's lower edge to `upper`'s upper edge.
    pub fn spanning(self, upper: WidthRange) -> WidthRange {
        WidthRange {
            min: self.min,
            max: upper.max,
        }
    }

    /// Returns the range with the upper edge removed.
    pub fn upward(self) -> WidthRange {
        WidthRange {
            min: self.min,
            max: UpperBound::Unbounded,
        }
    }

    /// Returns the range with the lower edge dropped to zero.
    pub fn downward(self) -> WidthRange {
        WidthRange {
            min: 0.0,
            max: self.max,
        }
    }
}

/// Breakpoints used when no explicit table is configured.
pub fn default_breakpoints() -> Vec<Breakpoint> {
    vec![
        Breakpoint::new("xs", 0.0).with_max_width(575.0),
        Breakpoint::new("sm", 576.0).with_max_width(767.0),
        Breakpoint::new("md", 768.0).with_max_width(991.0),
        Breakpoint::new("lg", 992.0).with_max_width(1199.0),
        Breakpoint::new("xl", 1200.0),
    ]
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Breakpoint>", into = "Vec<Breakpoint>")]
/// Validated, ordered breakpoint set. Order is the declaration order and drives the
/// mobile-first cascade.
pub struct BreakpointTable {
    breakpoints: Vec<Breakpoint>,
}

impl Default for BreakpointTable {
    fn default() -> Self {
        Self {
            breakpoints: default_breakpoints(),
        }
    }
}

impl TryFrom<Vec<Breakpoint>> for BreakpointTable {
    type Error = ConfigurationError;

    fn try_from(breakpoints: Vec<Breakpoint>) -> Result<Self, Self::Error> {
        Self::new(breakpoints)
    }
}

impl From<BreakpointTable> for Vec<Breakpoint> {
    fn from(table: BreakpointTable) -> Self {
        table.breakpoints
    }
}

impl BreakpointTable {
    /// Validates and wraps `breakpoints`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::EmptyBreakpointTable`] for an empty list,
    /// [`ConfigurationError::DuplicateBreakpoint`] when two entries share a name, and
    /// [`ConfigurationError::InvalidRange`] when `max_width < min_width`.
    pub fn new(breakpoints: Vec<Breakpoint>) -> Result<Self, ConfigurationError> {
        if breakpoints.is_empty() {
            return Err(ConfigurationError::EmptyBreakpointTable);
        }
        for (index, breakpoint) in breakpoints.iter().enumerate() {
            if let Some(max_width) = breakpoint.max_width {
                if max_width < breakpoint.min_width {
                    return Err(ConfigurationError::InvalidRange {
                        name: breakpoint.name.clone(),
                        min_width: breakpoint.min_width,
                        max_width,
                    });
                }
            }
            if breakpoints[..index]
                .iter()
                .any(|other| other.name == breakpoint.name)
            {
                return Err(ConfigurationError::DuplicateBreakpoint {
                    name: breakpoint.name.clone(),
                });
            }
        }
        Ok(Self { breakpoints })
    }

    /// Number of breakpoints.
    pub fn len(&self) -> usize {
        self.breakpoints.len()
    }

    /// Always `false` for a validated table; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.breakpoints.is_empty()
    }

    /// Iterates breakpoints in cascade order.
    pub fn iter(&self) -> impl Iterator<Item = &Breakpoint> {
        self.breakpoints.iter()
    }

    /// Returns the breakpoint at `index`.
    pub fn get(&self, index: usize) -> Option<&Breakpoint> {
        self.breakpoints.get(index)
    }

    /// Returns the position of `name`, if defined.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.breakpoints.iter().position(|bp| bp.name == name)
    }

    /// Returns the position of `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::UnknownBreakpoint`] when `name` is not defined.
    pub fn index_of(&self, name: &str) -> Result<usize, ConfigurationError> {
        self.position(name)
            .ok_or_else(|| ConfigurationError::unknown_breakpoint(name))
    }

    /// Effective width range of the breakpoint at `index`.
    pub fn range_at(&self, index: usize) -> Option<WidthRange> {
        let breakpoint = self.breakpoints.get(index)?;
        let max = match breakpoint.max_width {
            Some(max_width) => UpperBound::Inclusive(max_width),
            None => self
                .breakpoints
                .get(index + 1)
                .map(|next| UpperBound::Exclusive(next.min_width))
                .unwrap_or(UpperBound::Unbounded),
        };
        Some(WidthRange {
            min: breakpoint.min_width,
            max,
        })
    }

    /// Effective width range of the breakpoint called `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::UnknownBreakpoint`] when `name` is not defined.
    pub fn range_of(&self, name: &str) -> Result<WidthRange, ConfigurationError> {
        let index = self.index_of(name)?;
        self.range_at(index)
            .ok_or_else(|| ConfigurationError::unknown_breakpoint(name))
    }

    /// Index of the first breakpoint whose range contains `width`.
    ///
    /// Returns `None` when the table leaves a gap at `width`.
    pub fn index_for_width(&self, width: f64) -> Option<usize> {
        (0..self.breakpoints.len()).find(|index| {
            self.range_at(*index)
                .is_some_and(|range| range.contains(width))
        })
    }

    /// Breakpoint whose range contains `width`.
    pub fn breakpoint_for_width(&self, width: f64) -> Option<&Breakpoint> {
        self.index_for_width(width)
            .and_then(|index| self.breakpoints.get(index))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn table() -> BreakpointTable {
        BreakpointTable::new(vec![
            Breakpoint::new("xs", 0.0).with_max_width(599.0),
            Breakpoint::new("sm", 600.0).with_max_width(959.0),
            Breakpoint::new("md", 960.0),
        ])
        .expect("valid table")
    }

    #[test]
    fn explicit_max_is_inclusive_and_implicit_max_stops_at_next_min() {
        let table = BreakpointTable::new(vec![
            Breakpoint::new("xs", 0.0),
            Breakpoint::new("sm", 600.0),
        ])
        .expect("valid table");

        let xs = table.range_of("xs").expect("xs");
        assert!(xs.contains(599.0));
        assert!(xs.contains(599.5));
        assert!(!xs.contains(600.0));

        let bounded = self::table().range_of("xs").expect("xs");
        assert!(bounded.contains(599.0));
        assert!(!bounded.contains(600.0));
    }

    #[test]
    fn width_lookup_returns_containing_breakpoint() {
        let table = table();
        assert_eq!(table.breakpoint_for_width(0.0).map(|bp| bp.name.as_str()), Some("xs"));
        assert_eq!(table.breakpoint_for_width(650.0).map(|bp| bp.name.as_str()), Some("sm"));
        assert_eq!(table.breakpoint_for_width(4000.0).map(|bp| bp.name.as_str()), Some("md"));
    }

    #[test]
    fn gaps_in_the_table_yield_no_breakpoint() {
        let table = BreakpointTable::new(vec![
            Breakpoint::new("xs", 0.0).with_max_width(599.0),
            Breakpoint::new("sm", 700.0),
        ])
        .expect("valid table");
        assert_eq!(table.index_for_width(650.0), None);
    }

    #[test]
    fn validation_rejects_bad_tables() {
        assert_eq!(
            BreakpointTable::new(Vec::new()),
            Err(ConfigurationError::EmptyBreakpointTable)
        );
        assert_eq!(
            BreakpointTable::new(vec![Breakpoint::new("xs", 0.0), Breakpoint::new("xs", 10.0)]),
            Err(ConfigurationError::DuplicateBreakpoint {
                name: "xs".to_string()
            })
        );
        assert!(matches!(
            BreakpointTable::new(vec![Breakpoint::new("xs", 100.0).with_max_width(50.0)]),
            Err(ConfigurationError::InvalidRange { .. })
        ));
    }

    #[test]
    fn unknown_names_are_configuration_errors() {
        assert_eq!(
            table().index_of("xxl"),
            Err(ConfigurationError::UnknownBreakpoint {
                name: "xxl".to_string()
            })
        );
    }
}
