//! Depth-first key orderings
//!
//! Each ordering is an iterator over a borrowed tree with an explicit
//! stack, so depth is bounded by the tree height (O(log n) for AVL).
//! Iterators are single-pass; call again to regenerate a sequence.

use std::fmt;
use std::str::FromStr;

use super::{Node, TreeKey};

/// Which depth-first ordering to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraversalOrder {
    /// Left, node, right (ascending keys)
    Inorder,
    /// Node, left, right
    Preorder,
    /// Left, right, node
    Postorder,
}

impl TraversalOrder {
    /// All orderings, in display order
    pub const ALL: [TraversalOrder; 3] = [
        TraversalOrder::Inorder,
        TraversalOrder::Preorder,
        TraversalOrder::Postorder,
    ];

    /// Lowercase name used by scripts and CLI output
    pub fn name(self) -> &'static str {
        match self {
            TraversalOrder::Inorder => "inorder",
            TraversalOrder::Preorder => "preorder",
            TraversalOrder::Postorder => "postorder",
        }
    }
}

impl fmt::Display for TraversalOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TraversalOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "inorder" | "in" => Ok(TraversalOrder::Inorder),
            "preorder" | "pre" => Ok(TraversalOrder::Preorder),
            "postorder" | "post" => Ok(TraversalOrder::Postorder),
            other => Err(format!("unknown traversal order '{other}'")),
        }
    }
}

/// Collect the keys of `root` in the requested order
pub fn traverse<K: TreeKey>(root: Option<&Node<K>>, order: TraversalOrder) -> Vec<K> {
    match order {
        TraversalOrder::Inorder => Inorder::new(root).collect(),
        TraversalOrder::Preorder => Preorder::new(root).collect(),
        TraversalOrder::Postorder => Postorder::new(root).collect(),
    }
}

/// Ascending-key iterator
#[derive(Debug)]
pub struct Inorder<'a, K> {
    stack: Vec<&'a Node<K>>,
}

impl<'a, K: TreeKey> Inorder<'a, K> {
    /// Start at `root`
    pub fn new(root: Option<&'a Node<K>>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<K>>) {
        while let Some(current) = node {
            self.stack.push(current);
            node = current.left();
        }
    }
}

impl<'a, K: TreeKey> Iterator for Inorder<'a, K> {
    type Item = K;

    fn next(&mut self) -> Option<K> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(node.key())
    }
}

/// Node-first iterator
#[derive(Debug)]
pub struct Preorder<'a, K> {
    stack: Vec<&'a Node<K>>,
}

impl<'a, K: TreeKey> Preorder<'a, K> {
    /// Start at `root`
    pub fn new(root: Option<&'a Node<K>>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a, K: TreeKey> Iterator for Preorder<'a, K> {
    type Item = K;

    fn next(&mut self) -> Option<K> {
        let node = self.stack.pop()?;
        // Right goes in first so the left subtree is visited first
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        Some(node.key())
    }
}

/// Children-first iterator
#[derive(Debug)]
pub struct Postorder<'a, K> {
    /// (node, children already scheduled)
    stack: Vec<(&'a Node<K>, bool)>,
}

impl<'a, K: TreeKey> Postorder<'a, K> {
    /// Start at `root`
    pub fn new(root: Option<&'a Node<K>>) -> Self {
        Self {
            stack: root.map(|node| (node, false)).into_iter().collect(),
        }
    }
}

impl<'a, K: TreeKey> Iterator for Postorder<'a, K> {
    type Item = K;

    fn next(&mut self) -> Option<K> {
        loop {
            let (node, expanded) = self.stack.pop()?;
            if expanded {
                return Some(node.key());
            }
            self.stack.push((node, true));
            if let Some(right) = node.right() {
                self.stack.push((right, false));
            }
            if let Some(left) = node.left() {
                self.stack.push((left, false));
            }
        }
    }
}
