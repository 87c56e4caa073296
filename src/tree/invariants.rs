//! Structural invariant checks
//!
//! A violation here is a programming error in the engine, never an input
//! condition. The engine asserts these in debug builds; tests call
//! [`check_invariants`] directly after every mutation.

use thiserror::Error;

use super::{Node, NodeId, TreeKey};

/// First broken invariant found while walking a tree
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    /// A key sits on the wrong side of an ancestor (or is duplicated)
    #[error("node {id} breaks binary search ordering")]
    Ordering {
        /// Offending node
        id: NodeId,
    },

    /// Cached height disagrees with the children
    #[error("node {id} caches height {cached} but actual height is {actual}")]
    Height {
        /// Offending node
        id: NodeId,
        /// Stored height
        cached: u32,
        /// Height recomputed from the children
        actual: u32,
    },

    /// `|balance factor| > 1`
    #[error("node {id} is unbalanced (balance factor {balance_factor})")]
    Balance {
        /// Offending node
        id: NodeId,
        /// `height(left) - height(right)`
        balance_factor: i32,
    },
}

/// Check BST ordering, height correctness and AVL balance for every node
pub fn check_invariants<K: TreeKey>(root: Option<&Node<K>>) -> Result<(), InvariantViolation> {
    check_subtree(root, None, None).map(|_| ())
}

/// Returns the recomputed height of `node`'s subtree
fn check_subtree<K: TreeKey>(
    node: Option<&Node<K>>,
    lower: Option<K>,
    upper: Option<K>,
) -> Result<u32, InvariantViolation> {
    let Some(node) = node else {
        return Ok(0);
    };

    let key = node.key();
    let above_lower = lower.map_or(true, |bound| key > bound);
    let below_upper = upper.map_or(true, |bound| key < bound);
    if !above_lower || !below_upper {
        return Err(InvariantViolation::Ordering { id: node.id() });
    }

    let left = check_subtree(node.left(), lower, Some(key))?;
    let right = check_subtree(node.right(), Some(key), upper)?;

    let actual = 1 + left.max(right);
    if node.height() != actual {
        return Err(InvariantViolation::Height {
            id: node.id(),
            cached: node.height(),
            actual,
        });
    }

    let balance_factor = left as i32 - right as i32;
    if balance_factor.abs() > 1 {
        return Err(InvariantViolation::Balance {
            id: node.id(),
            balance_factor,
        });
    }

    Ok(actual)
}
