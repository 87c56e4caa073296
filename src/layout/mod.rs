//! Deterministic 2-D layout of a tree snapshot
//!
//! Two passes over the (immutable) left/right structure:
//!
//! 1. **Width pass** (post-order): `width(n) = max(width(left) + width(right), MIN)`,
//!    with `width(absent) = 0`.
//! 2. **Placement pass** (pre-order): a node at `(x, level)` sits at
//!    `y = level * level_height + top_margin`; its left child goes to
//!    `x - width(left) / 2`, its right child to `x + width(right) / 2`.
//!
//! Heights and balance factors are never consulted. Every call recomputes
//! the layout from scratch.

mod config;
mod geometry;

use std::collections::{BTreeMap, HashMap};

pub use config::{LayoutConfig, LayoutError};
pub use geometry::{BoundingBox, Connection, NodePosition};

use crate::tree::{Node, NodeId, TreeKey};

/// Widths of a node's two child subtrees (0 when absent)
#[derive(Debug, Clone, Copy, Default)]
struct ChildWidths {
    left: f64,
    right: f64,
}

/// Positions, edges and bounds for one tree snapshot
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize, serde::Deserialize))]
pub struct TreeLayout {
    /// Position of every node, keyed by identity
    pub positions: BTreeMap<NodeId, NodePosition>,

    /// One segment per parent-child edge, in preorder of the parent
    pub connections: Vec<Connection>,

    /// Padded extent of all positions
    pub bounds: BoundingBox,
}

impl TreeLayout {
    /// Lay out the tree rooted at `root`
    pub fn compute<K: TreeKey>(root: Option<&Node<K>>, config: &LayoutConfig) -> Self {
        compute_layout(root, config)
    }

    /// Position of a node, if it is part of this snapshot
    pub fn position(&self, id: NodeId) -> Option<&NodePosition> {
        self.positions.get(&id)
    }

    /// Number of positioned nodes
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether the snapshot was empty
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Lay out the tree rooted at `root`
pub fn compute_layout<K: TreeKey>(root: Option<&Node<K>>, config: &LayoutConfig) -> TreeLayout {
    let Some(root) = root else {
        return TreeLayout::default();
    };

    let mut widths = HashMap::new();
    measure(Some(root), config.min_sibling_distance, &mut widths);

    let mut positions = BTreeMap::new();
    place(root, config.origin_x, 0, config, &widths, &mut positions);

    let mut connections = Vec::with_capacity(positions.len().saturating_sub(1));
    connect(root, &positions, &mut connections);

    let bounds = bounding_box(&positions, config);

    TreeLayout {
        positions,
        connections,
        bounds,
    }
}

/// Width pass; returns the width reserved for `node`'s subtree
fn measure<K: TreeKey>(
    node: Option<&Node<K>>,
    min_sibling_distance: f64,
    widths: &mut HashMap<NodeId, ChildWidths>,
) -> f64 {
    let Some(node) = node else {
        return 0.0;
    };
    let left = measure(node.left(), min_sibling_distance, widths);
    let right = measure(node.right(), min_sibling_distance, widths);
    widths.insert(node.id(), ChildWidths { left, right });
    (left + right).max(min_sibling_distance)
}

/// Placement pass
fn place<K: TreeKey>(
    node: &Node<K>,
    x: f64,
    level: u32,
    config: &LayoutConfig,
    widths: &HashMap<NodeId, ChildWidths>,
    positions: &mut BTreeMap<NodeId, NodePosition>,
) {
    positions.insert(
        node.id(),
        NodePosition {
            x,
            y: level as f64 * config.level_height + config.top_margin,
            level,
        },
    );

    let child_widths = widths.get(&node.id()).copied().unwrap_or_default();
    if let Some(left) = node.left() {
        place(left, x - child_widths.left / 2.0, level + 1, config, widths, positions);
    }
    if let Some(right) = node.right() {
        place(right, x + child_widths.right / 2.0, level + 1, config, widths, positions);
    }
}

fn connect<K: TreeKey>(
    node: &Node<K>,
    positions: &BTreeMap<NodeId, NodePosition>,
    connections: &mut Vec<Connection>,
) {
    let Some(&from) = positions.get(&node.id()) else {
        return;
    };
    for child in [node.left(), node.right()].into_iter().flatten() {
        if let Some(&to) = positions.get(&child.id()) {
            connections.push(Connection {
                parent: node.id(),
                child: child.id(),
                from,
                to,
            });
            connect(child, positions, connections);
        }
    }
}

fn bounding_box(positions: &BTreeMap<NodeId, NodePosition>, config: &LayoutConfig) -> BoundingBox {
    if positions.is_empty() {
        return BoundingBox::default();
    }

    let (mut min_x, mut max_x) = (f64::INFINITY, f64::NEG_INFINITY);
    let (mut min_y, mut max_y) = (f64::INFINITY, f64::NEG_INFINITY);
    for pos in positions.values() {
        min_x = min_x.min(pos.x);
        max_x = max_x.max(pos.x);
        min_y = min_y.min(pos.y);
        max_y = max_y.max(pos.y);
    }

    BoundingBox {
        min_x,
        min_y,
        width: max_x - min_x + config.node_width,
        height: max_y - min_y + config.node_height,
    }
}
