//! Event styling: depth to color, magnitude to radius.
//!
//! Depth classes follow the USGS convention: shallow events (0–70 km) do the
//! most damage, intermediate events sit between 70 and 300 km, deep events
//! below 300 km.

use crate::core::constants::{
    DEEP_COLOR, DEEP_THRESHOLD_KM, INTERMEDIATE_COLOR, INTERMEDIATE_THRESHOLD_KM,
    MARKER_FILL_OPACITY, MARKER_OPACITY, MARKER_WEIGHT, RADIUS_PER_MAGNITUDE, SHALLOW_COLOR,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The three marker colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DepthColor {
    Green,
    Yellow,
    Red,
}

impl DepthColor {
    pub fn hex(&self) -> &'static str {
        match self {
            DepthColor::Green => DEEP_COLOR,
            DepthColor::Yellow => INTERMEDIATE_COLOR,
            DepthColor::Red => SHALLOW_COLOR,
        }
    }
}

impl fmt::Display for DepthColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.hex())
    }
}

/// USGS depth class of an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DepthClass {
    Shallow,
    Intermediate,
    Deep,
}

impl DepthClass {
    /// Ordered threshold checks; anything not above 70 km (NaN included) is shallow.
    pub fn from_depth(depth: f64) -> Self {
        if depth > DEEP_THRESHOLD_KM {
            DepthClass::Deep
        } else if depth > INTERMEDIATE_THRESHOLD_KM {
            DepthClass::Intermediate
        } else {
            DepthClass::Shallow
        }
    }

    pub fn color(&self) -> DepthColor {
        match self {
            DepthClass::Deep => DepthColor::Green,
            DepthClass::Intermediate => DepthColor::Yellow,
            DepthClass::Shallow => DepthColor::Red,
        }
    }
}

/// Magnitude class of an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MagnitudeClass {
    Micro,
    Minor,
    Light,
    Moderate,
    Strong,
    Major,
    Great,
}

impl MagnitudeClass {
    pub fn from_magnitude(magnitude: f64) -> Self {
        if magnitude >= 8.0 {
            MagnitudeClass::Great
        } else if magnitude >= 7.0 {
            MagnitudeClass::Major
        } else if magnitude >= 6.0 {
            MagnitudeClass::Strong
        } else if magnitude >= 5.0 {
            MagnitudeClass::Moderate
        } else if magnitude >= 4.0 {
            MagnitudeClass::Light
        } else if magnitude >= 3.0 {
            MagnitudeClass::Minor
        } else {
            MagnitudeClass::Micro
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MagnitudeClass::Micro => "micro",
            MagnitudeClass::Minor => "minor",
            MagnitudeClass::Light => "light",
            MagnitudeClass::Moderate => "moderate",
            MagnitudeClass::Strong => "strong",
            MagnitudeClass::Major => "major",
            MagnitudeClass::Great => "great",
        }
    }
}

/// Fill and stroke color of a marker at `depth` km
pub fn color_for_depth(depth: f64) -> DepthColor {
    DepthClass::from_depth(depth).color()
}

/// Marker radius for `magnitude`, unclamped: zero or negative magnitudes give
/// a zero or negative radius.
pub fn radius_for_magnitude(magnitude: f64) -> f64 {
    magnitude * RADIUS_PER_MAGNITUDE
}

/// Fixed stroke and opacity settings shared by every marker
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerStyle {
    pub weight: f64,
    pub opacity: f64,
    pub fill_opacity: f64,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            weight: MARKER_WEIGHT,
            opacity: MARKER_OPACITY,
            fill_opacity: MARKER_FILL_OPACITY,
        }
    }
}
