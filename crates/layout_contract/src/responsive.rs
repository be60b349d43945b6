//! Values that vary by breakpoint, and their mobile-first resolution.

use serde::{Deserialize, Serialize};

use crate::breakpoint::BreakpointTable;
use crate::error::ConfigurationError;
use crate::value::PropValue;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Direction in which a per-breakpoint value extends across the table.
pub enum Behavior {
    /// Applies to the breakpoint and every wider one (mobile-first).
    #[default]
    Up,
    /// Applies to the breakpoint and every narrower one.
    Down,
    /// Applies to the breakpoint alone.
    Only,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// One breakpoint-specific value.
pub struct ResponsiveEntry<T> {
    /// Breakpoint name the value is attached to.
    pub breakpoint: String,
    /// Explicit behavior; falls back to the configured default when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub behavior: Option<Behavior>,
    /// The value.
    pub value: T,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
/// A prop that is either constant or keyed by breakpoint.
pub enum Responsive<T> {
    /// Same value at every breakpoint.
    Plain(T),
    /// Values attached to named breakpoints.
    Breakpoints(Vec<ResponsiveEntry<T>>),
}

impl<T> From<T> for Responsive<T> {
    fn from(value: T) -> Self {
        Self::Plain(value)
    }
}

impl From<&str> for Responsive<String> {
    fn from(value: &str) -> Self {
        Self::Plain(value.to_string())
    }
}

impl From<&str> for Responsive<PropValue> {
    fn from(value: &str) -> Self {
        Self::Plain(value.into())
    }
}

impl From<String> for Responsive<PropValue> {
    fn from(value: String) -> Self {
        Self::Plain(value.into())
    }
}

impl From<i32> for Responsive<PropValue> {
    fn from(value: i32) -> Self {
        Self::Plain(value.into())
    }
}

impl From<u32> for Responsive<PropValue> {
    fn from(value: u32) -> Self {
        Self::Plain(value.into())
    }
}

impl From<f64> for Responsive<PropValue> {
    fn from(value: f64) -> Self {
        Self::Plain(value.into())
    }
}

impl<T> Responsive<T> {
    /// Empty per-breakpoint mapping, to be filled with [`Responsive::at`].
    pub fn breakpoints() -> Self {
        Self::Breakpoints(Vec::new())
    }

    /// Attaches `value` to `breakpoint` using the default behavior.
    ///
    /// Calling this on a plain value replaces it with a mapping.
    pub fn at(self, breakpoint: impl Into<String>, value: impl Into<T>) -> Self {
        self.push(breakpoint.into(), None, value.into())
    }

    /// Attaches `value` to `breakpoint` with an explicit behavior.
    pub fn at_with(
        self,
        breakpoint: impl Into<String>,
        behavior: Behavior,
        value: impl Into<T>,
    ) -> Self {
        self.push(breakpoint.into(), Some(behavior), value.into())
    }

    fn push(self, breakpoint: String, behavior: Option<Behavior>, value: T) -> Self {
        let entry = ResponsiveEntry {
            breakpoint,
            behavior,
            value,
        };
        match self {
            Self::Plain(_) => Self::Breakpoints(vec![entry]),
            Self::Breakpoints(mut entries) => {
                entries.push(entry);
                Self::Breakpoints(entries)
            }
        }
    }

    /// Breakpoint-specific entries; empty for plain values.
    pub fn entries(&self) -> &[ResponsiveEntry<T>] {
        match self {
            Self::Plain(_) => &[],
            Self::Breakpoints(entries) => entries,
        }
    }
}

impl<T: Clone> Responsive<T> {
    /// Validates breakpoint names and precomputes the value for every breakpoint in `table`.
    ///
    /// Resolution order at a breakpoint: an `Only` entry for that breakpoint, then the
    /// nearest `Up` entry at or below it, then the nearest `Down` entry at or above it, then
    /// the entry attached to the smallest breakpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::UnknownBreakpoint`] when an entry names a breakpoint
    /// missing from `table`.
    pub fn bind(
        &self,
        table: &BreakpointTable,
        default_behavior: Behavior,
    ) -> Result<BoundResponsive<T>, ConfigurationError> {
        let entries = match self {
            Self::Plain(value) => {
                return Ok(BoundResponsive {
                    resolved: vec![value.clone(); table.len()],
                })
            }
            Self::Breakpoints(entries) => entries,
        };
        if entries.is_empty() {
            return Ok(BoundResponsive {
                resolved: Vec::new(),
            });
        }

        let mut indexed = Vec::with_capacity(entries.len());
        for entry in entries {
            let index = table.index_of(&entry.breakpoint)?;
            indexed.push((index, entry.behavior.unwrap_or(default_behavior), &entry.value));
        }

        let resolved = (0..table.len())
            .filter_map(|current| select(&indexed, current).cloned())
            .collect();
        Ok(BoundResponsive { resolved })
    }

    /// Resolves the value for the breakpoint called `current`.
    ///
    /// Returns `Ok(None)` only for an empty mapping.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::UnknownBreakpoint`] when `current` or an entry name is
    /// not in `table`.
    pub fn resolve(
        &self,
        table: &BreakpointTable,
        current: &str,
        default_behavior: Behavior,
    ) -> Result<Option<T>, ConfigurationError> {
        let index = table.index_of(current)?;
        Ok(self
            .bind(table, default_behavior)?
            .at(index)
            .cloned())
    }
}

fn select<'a, T>(indexed: &[(usize, Behavior, &'a T)], current: usize) -> Option<&'a T> {
    let only = indexed
        .iter()
        .rev()
        .find(|(index, behavior, _)| *behavior == Behavior::Only && *index == current);
    let up = indexed
        .iter()
        .filter(|(index, behavior, _)| *behavior == Behavior::Up && *index <= current)
        .max_by_key(|(index, _, _)| *index);
    let down = indexed
        .iter()
        .filter(|(index, behavior, _)| *behavior == Behavior::Down && *index >= current)
        .min_by_key(|(index, _, _)| *index);
    let smallest = indexed.iter().min_by_key(|(index, _, _)| *index);

    only.or(up)
        .or(down)
        .or(smallest)
        .map(|(_, _, value)| *value)
}

#[derive(Debug, Clone, PartialEq)]
/// A responsive value pre-resolved for every breakpoint of one table.
pub struct BoundResponsive<T> {
    resolved: Vec<T>,
}

impl<T> BoundResponsive<T> {
    /// Value at breakpoint `index`, or `None` for an empty mapping or an index outside the table.
    pub fn at(&self, index: usize) -> Option<&T> {
        self.resolved.get(index)
    }
}
