//! Structural fingerprints
//!
//! Hashes the preorder shape (key, cached height, absent children) with
//! blake3. Identities are excluded, so a tree rebuilt by replay hashes the
//! same as the live tree it reproduces.

use std::fmt;

use super::{Node, TreeKey};

/// blake3 digest of a tree's shape and keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint(blake3::Hash);

impl Fingerprint {
    /// Raw digest bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        self.0.as_bytes()
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_hex())
    }
}

/// Fingerprint the subtree rooted at `root`
pub fn fingerprint<K: TreeKey>(root: Option<&Node<K>>) -> Fingerprint {
    let mut hasher = blake3::Hasher::new();
    absorb(root, &mut hasher);
    Fingerprint(hasher.finalize())
}

fn absorb<K: TreeKey>(node: Option<&Node<K>>, hasher: &mut blake3::Hasher) {
    let Some(node) = node else {
        hasher.update(b"-");
        return;
    };
    // Debug rendering of scalar keys is stable; length-prefix keeps it unambiguous
    let key = format!("{:?}", node.key());
    hasher.update(b"(");
    hasher.update(&(key.len() as u64).to_le_bytes());
    hasher.update(key.as_bytes());
    hasher.update(&node.height().to_le_bytes());
    absorb(node.left(), hasher);
    absorb(node.right(), hasher);
    hasher.update(b")");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::AvlTree;

    #[test]
    fn test_same_shape_same_fingerprint() {
        let a: AvlTree<i64> = [2, 1, 3].into_iter().collect();
        let b: AvlTree<i64> = [1, 2, 3].into_iter().collect();
        // Both end up as 2 with children 1 and 3
        assert_eq!(a.fingerprint(), b.fingerprint());
    }

    #[test]
    fn test_different_shape_differs() {
        let a: AvlTree<i64> = [2, 1].into_iter().collect();
        let b: AvlTree<i64> = [1, 2].into_iter().collect();
        // Same keys, mirrored shape
        assert_ne!(a.fingerprint(), b.fingerprint());
        assert_ne!(fingerprint::<i64>(None), a.fingerprint());
        assert_eq!(a.fingerprint().to_string().len(), 64);
    }
}
