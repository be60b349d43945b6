//! Viewport snapshots and free-form media query parameters.

use serde::{Deserialize, Serialize};

/// Viewport used when the host cannot report a real one.
pub const FALLBACK_VIEWPORT: Viewport = Viewport {
    width: 1024.0,
    height: 768.0,
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
/// Size of the layout viewport in CSS pixels.
pub struct Viewport {
    /// Viewport width.
    pub width: f64,
    /// Viewport height.
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        FALLBACK_VIEWPORT
    }
}

impl Viewport {
    /// Creates a viewport snapshot.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Orientation as defined by the CSS `orientation` media feature.
    pub fn orientation(&self) -> Orientation {
        if self.height >= self.width {
            Orientation::Portrait
        } else {
            Orientation::Landscape
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Viewport orientation.
pub enum Orientation {
    /// Height is greater than or equal to width.
    Portrait,
    /// Width is greater than height.
    Landscape,
}

impl Orientation {
    fn token(self) -> &'static str {
        match self {
            Self::Portrait => "portrait",
            Self::Landscape => "landscape",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
/// Media features evaluated against the viewport. Unset features always match.
pub struct MediaQueryParams {
    /// Inclusive minimum width.
    pub min_width: Option<f64>,
    /// Inclusive maximum width.
    pub max_width: Option<f64>,
    /// Inclusive minimum height.
    pub min_height: Option<f64>,
    /// Inclusive maximum height.
    pub max_height: Option<f64>,
    /// Required orientation.
    pub orientation: Option<Orientation>,
}

impl MediaQueryParams {
    /// Returns whether every set feature holds for `viewport`.
    pub fn matches(&self, viewport: Viewport) -> bool {
        self.min_width.map_or(true, |min| viewport.width >= min)
            && self.max_width.map_or(true, |max| viewport.width <= max)
            && self.min_height.map_or(true, |min| viewport.height >= min)
            && self.max_height.map_or(true, |max| viewport.height <= max)
            && self
                .orientation
                .map_or(true, |orientation| viewport.orientation() == orientation)
    }

    /// Renders the parameters as CSS media query text.
    pub fn to_media_query(&self) -> String {
        let features: Vec<String> = [
            self.min_width.map(|v| format!("(min-width: {v}px)")),
            self.max_width.map(|v| format!("(max-width: {v}px)")),
            self.min_height.map(|v| format!("(min-height: {v}px)")),
            self.max_height.map(|v| format!("(max-height: {v}px)")),
            self.orientation
                .map(|o| format!("(orientation: {})", o.token())),
        ]
        .into_iter()
        .flatten()
        .collect();

        if features.is_empty() {
            "all".to_string()
        } else {
            features.join(" and ")
        }
    }
}
