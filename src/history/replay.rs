//! Full replay of an operation prefix
//!
//! Rotations are not reversed individually; the tree at any cursor
//! position is re-derived by running the active prefix through the AVL
//! engine from empty. O(n log n) per step.

use tracing::debug;

use super::Operation;
use crate::tree::{AvlTree, TreeKey};

/// Rebuild `tree` from `operations`, in order, starting from empty
///
/// `Clear` resets the reconstruction at that point; `Search` is skipped.
/// The tree's identity counter is kept, so replayed nodes get fresh ids.
/// Returns the number of operations applied.
pub fn replay<K: TreeKey>(operations: &[Operation<K>], tree: &mut AvlTree<K>) -> usize {
    tree.clear();
    let mut applied = 0;
    for op in operations {
        match *op {
            Operation::Insert { key, .. } => {
                tree.insert(key);
            }
            Operation::Delete { key, .. } => {
                tree.delete(key);
            }
            Operation::Clear { .. } => tree.clear(),
            Operation::Search { .. } => continue,
        }
        applied += 1;
    }
    debug!(
        logged = operations.len(),
        applied,
        size = tree.size(),
        "replayed history"
    );
    applied
}

/// Build a fresh tree from `operations`
pub fn rebuild<K: TreeKey>(operations: &[Operation<K>]) -> AvlTree<K> {
    let mut tree = AvlTree::new();
    replay(operations, &mut tree);
    tree
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_resets_mid_replay() {
        let ops = [
            Operation::insert(1i64),
            Operation::insert(2),
            Operation::clear(),
            Operation::insert(3),
        ];
        let tree = rebuild(&ops);
        assert_eq!(tree.inorder().collect::<Vec<_>>(), vec![3]);
    }

    #[test]
    fn test_search_is_skipped() {
        let ops = [
            Operation::insert(1i64),
            Operation::search(1),
            Operation::search(9),
            Operation::delete(1),
        ];
        let mut tree = AvlTree::new();
        assert_eq!(replay(&ops, &mut tree), 2);
        assert!(tree.is_empty());
    }

    #[test]
    fn test_replay_mints_fresh_ids() {
        let ops = [Operation::insert(1i64)];
        let mut tree = AvlTree::new();
        replay(&ops, &mut tree);
        let first = tree.root().map(|n| n.id());
        replay(&ops, &mut tree);
        let second = tree.root().map(|n| n.id());
        assert_ne!(first, second);
    }
}
