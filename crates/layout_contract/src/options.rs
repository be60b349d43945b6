//! Immutable layout configuration: breakpoint table, default unit, and cascade defaults.

use serde::{Deserialize, Serialize};

use crate::breakpoint::{Breakpoint, BreakpointTable};
use crate::error::ConfigurationError;
use crate::responsive::Behavior;

/// Unit appended to numeric prop values unless configured otherwise.
pub const DEFAULT_UNIT: &str = "px";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawLayoutOptions")]
/// Layout configuration passed explicitly to the layout provider.
///
/// ```toml
/// default_unit = "rem"
///
/// [[breakpoints]]
/// name = "mobile"
/// max_width = 767
///
/// [[breakpoints]]
/// name = "desktop"
/// min_width = 768
/// ```
pub struct LayoutOptions {
    default_unit: String,
    default_breakpoint_name: String,
    default_behavior: Behavior,
    breakpoints: BreakpointTable,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawLayoutOptions {
    #[serde(alias = "defaultUnit")]
    default_unit: Option<String>,
    #[serde(alias = "defaultBreakpointName")]
    default_breakpoint_name: Option<String>,
    #[serde(alias = "defaultBehavior")]
    default_behavior: Option<Behavior>,
    breakpoints: Option<Vec<Breakpoint>>,
}

impl TryFrom<RawLayoutOptions> for LayoutOptions {
    type Error = ConfigurationError;

    fn try_from(raw: RawLayoutOptions) -> Result<Self, Self::Error> {
        let breakpoints = match raw.breakpoints {
            Some(breakpoints) => BreakpointTable::new(breakpoints)?,
            None => BreakpointTable::default(),
        };
        let mut options = Self::with_breakpoints(breakpoints);
        if let Some(unit) = raw.default_unit {
            options.default_unit = unit;
        }
        if let Some(behavior) = raw.default_behavior {
            options.default_behavior = behavior;
        }
        match raw.default_breakpoint_name {
            Some(name) => options.with_default_breakpoint(name),
            None => Ok(options),
        }
    }
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self::with_breakpoints(BreakpointTable::default())
    }
}

impl LayoutOptions {
    /// Options over `breakpoints`, defaulting to the first breakpoint, `px`, and upward cascade.
    pub fn with_breakpoints(breakpoints: BreakpointTable) -> Self {
        let default_breakpoint_name = breakpoints
            .get(0)
            .map(|bp| bp.name.clone())
            .unwrap_or_default();
        Self {
            default_unit: DEFAULT_UNIT.to_string(),
            default_breakpoint_name,
            default_behavior: Behavior::Up,
            breakpoints,
        }
    }

    /// Parses options from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::Parse`] for malformed input and the validation errors of
    /// [`BreakpointTable::new`] and [`LayoutOptions::with_default_breakpoint`].
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigurationError> {
        toml::from_str(raw).map_err(|err| ConfigurationError::Parse(err.to_string()))
    }

    /// Parses options from JSON text.
    ///
    /// # Errors
    ///
    /// See [`LayoutOptions::from_toml_str`].
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigurationError> {
        serde_json::from_str(raw).map_err(|err| ConfigurationError::Parse(err.to_string()))
    }

    /// Sets the unit appended to numeric values.
    pub fn with_default_unit(mut self, unit: impl Into<String>) -> Self {
        self.default_unit = unit.into();
        self
    }

    /// Sets the cascade behavior of entries without an explicit one.
    pub fn with_default_behavior(mut self, behavior: Behavior) -> Self {
        self.default_behavior = behavior;
        self
    }

    /// Sets the breakpoint assumed when the viewport falls in a gap of the table.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::UnknownDefaultBreakpoint`] when `name` is not in the table.
    pub fn with_default_breakpoint(
        mut self,
        name: impl Into<String>,
    ) -> Result<Self, ConfigurationError> {
        let name = name.into();
        if self.breakpoints.position(&name).is_none() {
            return Err(ConfigurationError::UnknownDefaultBreakpoint { name });
        }
        self.default_breakpoint_name = name;
        Ok(self)
    }

    /// Unit appended to numeric values.
    pub fn default_unit(&self) -> &str {
        &self.default_unit
    }

    /// Breakpoint assumed when the viewport matches none.
    pub fn default_breakpoint_name(&self) -> &str {
        &self.default_breakpoint_name
    }

    /// Cascade behavior of entries without an explicit one.
    pub fn default_behavior(&self) -> Behavior {
        self.default_behavior
    }

    /// The breakpoint table.
    pub fn breakpoints(&self) -> &BreakpointTable {
        &self.breakpoints
    }

    /// Index of the breakpoint active at `width`, if the table covers it.
    pub fn breakpoint_index_for_width(&self, width: f64) -> Option<usize> {
        self.breakpoints.index_for_width(width)
    }

    /// Index of the default breakpoint.
    pub fn default_breakpoint_index(&self) -> usize {
        self.breakpoints
            .position(&self.default_breakpoint_name)
            .unwrap_or(0)
    }
}
