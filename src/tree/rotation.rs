//! Rotations and rebalancing
//!
//! Rotations relink existing boxes: the pivot's inner subtree moves across
//! to the old root, and the old root becomes the pivot's child. No node is
//! allocated or dropped.
//!
//! ```text
//!        z                 y
//!       / \               / \
//!      y   T4    ==>     x   z
//!     / \               / \ / \
//!    x   T3            T1 T2 T3 T4
//! ```

use std::fmt;

use tracing::debug;

use super::node::{balance_factor, Node};
use super::TreeKey;

/// Rebalancing case applied at an unbalanced node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize, serde::Deserialize))]
pub enum Rotation {
    /// Left-left: single right rotation
    LL,
    /// Right-right: single left rotation
    RR,
    /// Left-right: left rotation on the left child, then right rotation
    LR,
    /// Right-left: right rotation on the right child, then left rotation
    RL,
}

impl Rotation {
    /// Whether this case needs two rotations
    pub fn is_double(self) -> bool {
        matches!(self, Rotation::LR | Rotation::RL)
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Rotation::LL => "LL",
            Rotation::RR => "RR",
            Rotation::LR => "LR",
            Rotation::RL => "RL",
        };
        f.write_str(label)
    }
}

/// Classify the rebalancing case for a node, if it is out of balance
///
/// Ties on the heavier child's balance factor select the single rotation.
pub(crate) fn classify<K: TreeKey>(node: &Node<K>) -> Option<Rotation> {
    let balance = node.balance_factor();
    if balance > 1 {
        if balance_factor(&node.left) >= 0 {
            Some(Rotation::LL)
        } else {
            Some(Rotation::LR)
        }
    } else if balance < -1 {
        if balance_factor(&node.right) <= 0 {
            Some(Rotation::RR)
        } else {
            Some(Rotation::RL)
        }
    } else {
        None
    }
}

/// Right rotation around `z`; returns the new subtree root (z's left child)
pub(crate) fn rotate_right<K: TreeKey>(mut z: Box<Node<K>>) -> Box<Node<K>> {
    let Some(mut pivot) = z.left.take() else {
        return z;
    };
    z.left = pivot.right.take();
    z.update_height();
    pivot.right = Some(z);
    pivot.update_height();
    pivot
}

/// Left rotation around `z`; returns the new subtree root (z's right child)
pub(crate) fn rotate_left<K: TreeKey>(mut z: Box<Node<K>>) -> Box<Node<K>> {
    let Some(mut pivot) = z.right.take() else {
        return z;
    };
    z.right = pivot.left.take();
    z.update_height();
    pivot.left = Some(z);
    pivot.update_height();
    pivot
}

/// Refresh the cached height of `node` and rotate it if it is unbalanced
///
/// The applied case, if any, is appended to `applied`.
pub(crate) fn rebalance<K: TreeKey>(
    mut node: Box<Node<K>>,
    applied: &mut Vec<Rotation>,
) -> Box<Node<K>> {
    node.update_height();

    let Some(rotation) = classify(&node) else {
        return node;
    };
    debug!(
        key = ?node.key,
        id = %node.id,
        balance = node.balance_factor(),
        %rotation,
        "rebalancing"
    );
    applied.push(rotation);

    match rotation {
        Rotation::LL => rotate_right(node),
        Rotation::RR => rotate_left(node),
        Rotation::LR => {
            node.left = node.left.take().map(rotate_left);
            rotate_right(node)
        }
        Rotation::RL => {
            node.right = node.right.take().map(rotate_right);
            rotate_left(node)
        }
    }
}
