//! # AVL trees with layout and replayable history
//!
//! This library maintains a height-balanced binary search tree, lays its
//! current shape out in 2-D for an external renderer, and keeps a linear
//! operation log that implements undo/redo by full replay.
//!
//! ## Core Components
//!
//! 1. **AVL engine** ([`tree`]): insert/delete/search with LL, RR, LR, RL rotations
//! 2. **Traversals** ([`tree::TraversalOrder`]): inorder, preorder, postorder iterators
//! 3. **Layout** ([`layout`]): width pass + placement pass, connections, bounds
//! 4. **History** ([`history`]): append/undo/redo cursor with replay from empty
//!
//! ## Usage Example
//!
//! ```
//! use avlviz::{SessionConfig, TreeSession, TraversalOrder};
//!
//! let mut session = TreeSession::<i64>::new(SessionConfig::default())?;
//! for key in [5, 3, 8] {
//!     session.insert(key);
//! }
//! session.undo();
//! assert_eq!(session.traverse(TraversalOrder::Inorder), vec![3, 5]);
//! session.redo();
//! assert_eq!(session.size(), 3);
//! # Ok::<(), avlviz::SessionError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod history;
pub mod layout;
pub mod script;
pub mod tree;

pub use history::{Operation, OperationHistory};
pub use layout::{BoundingBox, Connection, LayoutConfig, LayoutError, NodePosition, TreeLayout};
pub use tree::{
    AvlTree, Fingerprint, InvariantViolation, MutationReport, Node, NodeId, Rotation,
    TraversalOrder, TreeKey,
};

use thiserror::Error;
use tracing::debug;

/// Session-wide settings
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionConfig {
    /// Spacing constants for [`TreeSession::layout`]
    pub layout: LayoutConfig,
}

impl SessionConfig {
    /// Replace the layout constants
    pub fn with_layout(mut self, layout: LayoutConfig) -> Self {
        self.layout = layout;
        self
    }

    /// Check every nested configuration
    pub fn validate(&self) -> Result<(), SessionError> {
        self.layout.validate()?;
        Ok(())
    }
}

/// Errors that can occur while setting up a session
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SessionError {
    /// Layout constants rejected
    #[error(transparent)]
    Layout(#[from] LayoutError),
}

/// Single-writer session: one tree plus the history that reproduces it
///
/// Every public request is logged, no-ops included. Undo and redo move the
/// history cursor and rebuild the tree by replaying the active prefix.
#[derive(Debug)]
pub struct TreeSession<K> {
    tree: AvlTree<K>,
    history: OperationHistory<K>,
    config: SessionConfig,
}

impl<K: TreeKey> TreeSession<K> {
    /// Create an empty session
    pub fn new(config: SessionConfig) -> Result<Self, SessionError> {
        config.validate()?;
        Ok(Self {
            tree: AvlTree::new(),
            history: OperationHistory::new(),
            config,
        })
    }

    /// Insert `key` (no-op on duplicate) and log it
    pub fn insert(&mut self, key: K) -> MutationReport {
        let report = self.tree.insert(key);
        self.history.append(Operation::insert(key));
        report
    }

    /// Delete `key` (no-op if absent) and log it
    pub fn delete(&mut self, key: K) -> MutationReport {
        let report = self.tree.delete(key);
        self.history.append(Operation::delete(key));
        report
    }

    /// Look up `key`, returning the identity to highlight; logged as a search
    pub fn search(&mut self, key: K) -> Option<NodeId> {
        let found = self.tree.search(key).map(Node::id);
        self.history.append(Operation::search(key));
        found
    }

    /// Empty the tree and log it
    pub fn clear(&mut self) {
        self.tree.clear();
        self.history.append(Operation::clear());
    }

    /// Step back one operation; `false` at index 0 or with an empty log
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(cursor) => {
                self.rebuild(cursor);
                true
            }
            None => false,
        }
    }

    /// Step forward one operation; `false` at the end of the log
    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(cursor) => {
                self.rebuild(cursor);
                true
            }
            None => false,
        }
    }

    fn rebuild(&mut self, cursor: usize) {
        let applied = history::replay(self.history.active(), &mut self.tree);
        debug!(cursor, applied, size = self.tree.size(), "tree rebuilt from history");
    }

    /// Whether undo would change anything
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Whether redo would change anything
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Number of keys in the tree
    pub fn size(&self) -> usize {
        self.tree.size()
    }

    /// Height of the tree (`0` when empty)
    pub fn height(&self) -> u32 {
        self.tree.height()
    }

    /// Root node of the current tree
    pub fn root(&self) -> Option<&Node<K>> {
        self.tree.root()
    }

    /// Current tree
    pub fn tree(&self) -> &AvlTree<K> {
        &self.tree
    }

    /// Operation log and cursor
    pub fn history(&self) -> &OperationHistory<K> {
        &self.history
    }

    /// Active configuration
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Keys of the current tree in the requested order
    pub fn traverse(&self, order: TraversalOrder) -> Vec<K> {
        tree::traverse(self.tree.root(), order)
    }

    /// Fresh layout of the current tree
    pub fn layout(&self) -> TreeLayout {
        TreeLayout::compute(self.tree.root(), &self.config.layout)
    }

    /// Structural fingerprint of the current tree
    pub fn fingerprint(&self) -> Fingerprint {
        self.tree.fingerprint()
    }

    /// Check ordering, height and balance invariants
    pub fn verify(&self) -> Result<(), InvariantViolation> {
        self.tree.check()
    }
}
