//! Height-balanced (AVL) binary search tree
//!
//! The engine owns the root link and the identity counter. Insert and
//! delete recurse down the search path and rebalance every ancestor on the
//! way back up; after an insert at most one rotation (single or double)
//! fires, while a delete may rotate at several ancestor levels.

mod fingerprint;
mod invariants;
mod node;
mod rotation;
mod traversal;

use std::cmp::Ordering;

use tracing::trace;

pub use fingerprint::{fingerprint, Fingerprint};
pub use invariants::{check_invariants, InvariantViolation};
pub use node::{height, Link, Node, NodeId};
pub use rotation::Rotation;
pub use traversal::{traverse, Inorder, Postorder, Preorder, TraversalOrder};

use rotation::rebalance;

/// Keys the tree can hold: a totally ordered, copyable scalar
pub trait TreeKey: Ord + Copy + std::fmt::Debug {}

impl<T: Ord + Copy + std::fmt::Debug> TreeKey for T {}

/// Monotonic identity source, owned by one engine instance
#[derive(Debug, Default, Clone)]
pub(crate) struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    fn mint(&mut self) -> NodeId {
        let id = NodeId(self.next);
        self.next += 1;
        id
    }
}

/// Outcome of a mutating call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MutationReport {
    /// False for a duplicate insert or a delete of an absent key
    pub changed: bool,

    /// Rebalancing cases applied, deepest first
    pub rotations: Vec<Rotation>,
}

impl MutationReport {
    fn unchanged() -> Self {
        Self::default()
    }
}

/// AVL engine: the root of one tree plus its identity counter
#[derive(Debug)]
pub struct AvlTree<K> {
    root: Link<K>,
    ids: IdAllocator,
}

impl<K: TreeKey> Default for AvlTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: TreeKey> AvlTree<K> {
    /// Create an empty tree
    pub fn new() -> Self {
        Self {
            root: None,
            ids: IdAllocator::default(),
        }
    }

    /// Root node, or `None` for the empty tree
    pub fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }

    /// Whether the tree holds no keys
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Height of the whole tree (`0` when empty)
    pub fn height(&self) -> u32 {
        height(&self.root)
    }

    /// Number of keys currently stored
    pub fn size(&self) -> usize {
        size(self.root())
    }

    /// Number of identities minted so far (never decreases)
    pub fn ids_minted(&self) -> u64 {
        self.ids.next
    }

    /// Insert `key`; a duplicate leaves the tree untouched
    pub fn insert(&mut self, key: K) -> MutationReport {
        let mut report = MutationReport::unchanged();
        let root = self.root.take();
        self.root = Some(insert_into(root, key, &mut self.ids, &mut report));
        if !report.changed {
            trace!(?key, "duplicate insert ignored");
        }
        self.debug_check();
        report
    }

    /// Delete `key`; an absent key leaves the tree untouched
    pub fn delete(&mut self, key: K) -> MutationReport {
        let mut report = MutationReport::unchanged();
        let root = self.root.take();
        self.root = delete_from(root, key, &mut report);
        if !report.changed {
            trace!(?key, "delete of absent key ignored");
        }
        self.debug_check();
        report
    }

    /// Find the node holding `key`
    pub fn search(&self, key: K) -> Option<&Node<K>> {
        search(self.root(), key)
    }

    /// Whether `key` is present
    pub fn contains(&self, key: K) -> bool {
        self.search(key).is_some()
    }

    /// Drop every node; the identity counter keeps counting
    pub fn clear(&mut self) {
        self.root = None;
    }

    /// Keys in ascending order
    pub fn inorder(&self) -> Inorder<'_, K> {
        Inorder::new(self.root())
    }

    /// Keys in node, left, right order
    pub fn preorder(&self) -> Preorder<'_, K> {
        Preorder::new(self.root())
    }

    /// Keys in left, right, node order
    pub fn postorder(&self) -> Postorder<'_, K> {
        Postorder::new(self.root())
    }

    /// Structural fingerprint of the current shape
    pub fn fingerprint(&self) -> Fingerprint {
        fingerprint(self.root())
    }

    /// Verify ordering, height and balance invariants
    pub fn check(&self) -> Result<(), InvariantViolation> {
        check_invariants(self.root())
    }

    #[inline]
    fn debug_check(&self) {
        debug_assert!(
            self.check().is_ok(),
            "AVL invariant broken: {:?}",
            self.check()
        );
    }
}

impl<K: TreeKey> Extend<K> for AvlTree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K: TreeKey> FromIterator<K> for AvlTree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

/// Count of nodes reachable from `root`
pub fn size<K: TreeKey>(root: Option<&Node<K>>) -> usize {
    match root {
        None => 0,
        Some(node) => 1 + size(node.left()) + size(node.right()),
    }
}

/// Binary search from `root`; no mutation, no rebalancing
pub fn search<K: TreeKey>(root: Option<&Node<K>>, key: K) -> Option<&Node<K>> {
    let mut current = root;
    while let Some(node) = current {
        current = match key.cmp(&node.key) {
            Ordering::Less => node.left(),
            Ordering::Greater => node.right(),
            Ordering::Equal => return Some(node),
        };
    }
    None
}

fn insert_into<K: TreeKey>(
    link: Link<K>,
    key: K,
    ids: &mut IdAllocator,
    report: &mut MutationReport,
) -> Box<Node<K>> {
    let mut node = match link {
        None => {
            report.changed = true;
            return Node::leaf(key, ids.mint());
        }
        Some(node) => node,
    };

    match key.cmp(&node.key) {
        Ordering::Less => node.left = Some(insert_into(node.left.take(), key, ids, report)),
        Ordering::Greater => node.right = Some(insert_into(node.right.take(), key, ids, report)),
        Ordering::Equal => return node,
    }

    if !report.changed {
        return node;
    }
    rebalance(node, &mut report.rotations)
}

fn delete_from<K: TreeKey>(link: Link<K>, key: K, report: &mut MutationReport) -> Link<K> {
    let mut node = link?;

    match key.cmp(&node.key) {
        Ordering::Less => node.left = delete_from(node.left.take(), key, report),
        Ordering::Greater => node.right = delete_from(node.right.take(), key, report),
        Ordering::Equal => {
            report.changed = true;
            match (node.left.take(), node.right.take()) {
                (None, None) => return None,
                (Some(child), None) | (None, Some(child)) => return Some(child),
                (Some(left), Some(right)) => {
                    // Two children: this node takes the successor's key and
                    // keeps its own identity; the successor node is removed.
                    let successor = min_key(&right);
                    node.key = successor;
                    node.left = Some(left);
                    node.right = delete_from(Some(right), successor, report);
                }
            }
        }
    }

    if !report.changed {
        return Some(node);
    }
    Some(rebalance(node, &mut report.rotations))
}

fn min_key<K: TreeKey>(node: &Node<K>) -> K {
    let mut current = node;
    while let Some(left) = current.left() {
        current = left;
    }
    current.key
}
