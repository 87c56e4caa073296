//! Owned AVL node representation
//!
//! Each node exclusively owns its children through `Option<Box<_>>`.
//! Rotations move boxes between slots; they never allocate or copy nodes,
//! so a node's `NodeId` survives any number of rotations.

use std::cmp::max;
use std::fmt;

use super::TreeKey;

/// Owning link to a child subtree (`None` = no child).
pub type Link<K> = Option<Box<Node<K>>>;

/// Identity token minted once when a node is created
///
/// Stable across rotations. Not stable across a two-child delete (the
/// surviving node takes the successor's key) or across history replay
/// (replay recreates every node).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(pub u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node-{}", self.0)
    }
}

/// One key of the tree plus its cached height
#[derive(Debug)]
pub struct Node<K> {
    pub(crate) key: K,
    pub(crate) left: Link<K>,
    pub(crate) right: Link<K>,
    pub(crate) height: u32,
    pub(crate) id: NodeId,
}

impl<K: TreeKey> Node<K> {
    /// Create a detached leaf (height 1)
    pub(crate) fn leaf(key: K, id: NodeId) -> Box<Self> {
        Box::new(Self {
            key,
            left: None,
            right: None,
            height: 1,
            id,
        })
    }

    /// Key stored at this node
    #[inline]
    pub fn key(&self) -> K {
        self.key
    }

    /// Identity token
    #[inline]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Cached height (1 for a leaf)
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Left subtree, if any
    #[inline]
    pub fn left(&self) -> Option<&Node<K>> {
        self.left.as_deref()
    }

    /// Right subtree, if any
    #[inline]
    pub fn right(&self) -> Option<&Node<K>> {
        self.right.as_deref()
    }

    /// Whether this node has no children
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// `height(left) - height(right)`, derived from the cached child heights
    #[inline]
    pub fn balance_factor(&self) -> i32 {
        height(&self.left) as i32 - height(&self.right) as i32
    }

    /// Recompute the cached height from the children
    #[inline]
    pub(crate) fn update_height(&mut self) {
        self.height = 1 + max(height(&self.left), height(&self.right));
    }
}

/// Height of a possibly-absent subtree (`0` for `None`)
#[inline]
pub fn height<K>(link: &Link<K>) -> u32 {
    link.as_ref().map_or(0, |node| node.height)
}

/// Balance factor of a possibly-absent subtree (`0` for `None`)
#[inline]
pub(crate) fn balance_factor<K: TreeKey>(link: &Link<K>) -> i32 {
    link.as_ref().map_or(0, |node| node.balance_factor())
}

impl<K: TreeKey> fmt::Display for Node<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}@{} (h={}, bf={})", self.key, self.id, self.height, self.balance_factor())
    }
}
