//! Raw prop values before CSS rendering.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
/// A layout prop value: a bare number (rendered with the default unit) or literal CSS text.
pub enum PropValue {
    /// Numeric length, e.g. `16` becomes `16px` with the default unit.
    Number(f64),
    /// CSS text passed through verbatim, e.g. `"1fr auto"`.
    Text(String),
}

impl PropValue {
    /// Renders the value as CSS, appending `unit` to numbers.
    pub fn to_css(&self, unit: &str) -> String {
        match self {
            Self::Number(value) => format!("{value}{unit}"),
            Self::Text(text) => text.clone(),
        }
    }

    /// Renders the value without a unit.
    pub fn to_css_unitless(&self) -> String {
        match self {
            Self::Number(value) => value.to_string(),
            Self::Text(text) => text.clone(),
        }
    }
}

impl From<f64> for PropValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for PropValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<u32> for PropValue {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_get_the_unit_and_text_passes_through() {
        assert_eq!(PropValue::from(16).to_css("px"), "16px");
        assert_eq!(PropValue::from(1.5).to_css("rem"), "1.5rem");
        assert_eq!(PropValue::from("auto").to_css("px"), "auto");
        assert_eq!(PropValue::from(2).to_css_unitless(), "2");
    }

    #[test]
    fn untagged_deserialization() {
        let values: Vec<PropValue> = serde_json::from_str(r#"[10, "1fr 2fr"]"#).expect("parse");
        assert_eq!(
            values,
            vec![PropValue::Number(10.0), PropValue::Text("1fr 2fr".to_string())]
        );
    }
}
