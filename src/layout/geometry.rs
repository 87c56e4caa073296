//! Geometry handed to renderers

use crate::tree::NodeId;

/// Screen position of one node
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize, serde::Deserialize))]
pub struct NodePosition {
    /// Horizontal centre
    pub x: f64,
    /// Vertical centre
    pub y: f64,
    /// Depth (root = 0)
    pub level: u32,
}

/// Segment from a parent to one of its children
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize, serde::Deserialize))]
pub struct Connection {
    /// Parent identity
    pub parent: NodeId,
    /// Child identity
    pub child: NodeId,
    /// Parent position
    pub from: NodePosition,
    /// Child position
    pub to: NodePosition,
}

impl Connection {
    /// Euclidean length of the segment
    pub fn length(&self) -> f64 {
        (self.to.x - self.from.x).hypot(self.to.y - self.from.y)
    }
}

/// Extent of all node positions, padded by one node footprint
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox {
    /// Smallest node `x`
    pub min_x: f64,
    /// Smallest node `y`
    pub min_y: f64,
    /// `max_x - min_x + node_width`
    pub width: f64,
    /// `max_y - min_y + node_height`
    pub height: f64,
}

impl BoundingBox {
    /// Whether this is the box of an empty tree
    pub fn is_empty(&self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }
}
