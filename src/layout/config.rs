//! Layout constants
//!
//! Defaults match a renderer drawing 60x60 node glyphs with 100 units
//! between levels.

use thiserror::Error;

/// Errors raised while validating a layout configuration
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// A spacing constant is non-finite or out of range
    #[error("invalid layout configuration: {0}")]
    InvalidConfiguration(String),
}

/// Spacing constants for the layout engine
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    /// Horizontal footprint of one node (bounding-box padding)
    pub node_width: f64,

    /// Vertical footprint of one node (bounding-box padding)
    pub node_height: f64,

    /// Vertical distance between consecutive levels
    pub level_height: f64,

    /// Minimum width reserved for any subtree
    pub min_sibling_distance: f64,

    /// `y` of the root level
    pub top_margin: f64,

    /// `x` of the root
    pub origin_x: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            node_width: 60.0,
            node_height: 60.0,
            level_height: 100.0,
            min_sibling_distance: 80.0,
            top_margin: 50.0,
            origin_x: 0.0,
        }
    }
}

impl LayoutConfig {
    /// Set the node footprint used for bounding-box padding
    pub fn with_node_size(mut self, width: f64, height: f64) -> Self {
        self.node_width = width;
        self.node_height = height;
        self
    }

    /// Set the vertical distance between levels
    pub fn with_level_height(mut self, level_height: f64) -> Self {
        self.level_height = level_height;
        self
    }

    /// Set the minimum subtree width
    pub fn with_min_sibling_distance(mut self, distance: f64) -> Self {
        self.min_sibling_distance = distance;
        self
    }

    /// Set the root position
    pub fn with_origin(mut self, origin_x: f64, top_margin: f64) -> Self {
        self.origin_x = origin_x;
        self.top_margin = top_margin;
        self
    }

    /// Reject non-finite values and non-positive spacings
    pub fn validate(&self) -> Result<(), LayoutError> {
        let positive = [
            ("node_width", self.node_width),
            ("node_height", self.node_height),
            ("level_height", self.level_height),
            ("min_sibling_distance", self.min_sibling_distance),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(LayoutError::InvalidConfiguration(format!(
                    "{name} must be finite and > 0 (got {value})"
                )));
            }
        }

        for (name, value) in [("top_margin", self.top_margin), ("origin_x", self.origin_x)] {
            if !value.is_finite() {
                return Err(LayoutError::InvalidConfiguration(format!(
                    "{name} must be finite (got {value})"
                )));
            }
        }
        Ok(())
    }
}
