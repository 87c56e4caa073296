//! Linear operation history with an undo/redo cursor
//!
//! The log is append-only apart from truncation: appending after an undo
//! discards every operation past the cursor. The cursor points at the
//! last active operation; undo never moves it below index 0, so the state
//! "before the first operation" is not reachable by undo.

mod operation;
mod replay;

use tracing::trace;

pub use operation::{now_millis, Operation};
pub use replay::{rebuild, replay};

/// Operation log plus cursor
#[derive(Debug, Clone)]
pub struct OperationHistory<K> {
    operations: Vec<Operation<K>>,
    /// Index of the last active operation; `None` while the log is empty
    cursor: Option<usize>,
}

impl<K> Default for OperationHistory<K> {
    fn default() -> Self {
        Self {
            operations: Vec::new(),
            cursor: None,
        }
    }
}

impl<K: Copy> OperationHistory<K> {
    /// Empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `op` as the newest active operation
    ///
    /// Anything after the cursor is discarded first, so redo is never
    /// possible right after an append.
    pub fn append(&mut self, op: Operation<K>) {
        let keep = self.cursor.map_or(0, |cursor| cursor + 1);
        if keep < self.operations.len() {
            trace!(discarded = self.operations.len() - keep, "truncating redo tail");
        }
        self.operations.truncate(keep);
        self.operations.push(op);
        self.cursor = Some(self.operations.len() - 1);
    }

    /// Move the cursor back one step; returns the new cursor
    pub fn undo(&mut self) -> Option<usize> {
        let cursor = self.cursor.filter(|&cursor| cursor > 0)? - 1;
        self.cursor = Some(cursor);
        trace!(cursor, "undo");
        Some(cursor)
    }

    /// Move the cursor forward one step; returns the new cursor
    pub fn redo(&mut self) -> Option<usize> {
        if !self.can_redo() {
            return None;
        }
        let cursor = self.cursor.map_or(0, |cursor| cursor + 1);
        self.cursor = Some(cursor);
        trace!(cursor, "redo");
        Some(cursor)
    }

    /// Whether [`undo`](Self::undo) would move the cursor
    pub fn can_undo(&self) -> bool {
        self.cursor.map_or(false, |cursor| cursor > 0)
    }

    /// Whether [`redo`](Self::redo) would move the cursor
    pub fn can_redo(&self) -> bool {
        match self.cursor {
            Some(cursor) => cursor + 1 < self.operations.len(),
            None => false,
        }
    }

    /// Index of the last active operation
    pub fn current_index(&self) -> Option<usize> {
        self.cursor
    }

    /// Operations `[0..=cursor]`, the prefix that defines the current tree
    pub fn active(&self) -> &[Operation<K>] {
        match self.cursor {
            Some(cursor) => &self.operations[..=cursor],
            None => &[],
        }
    }

    /// Every logged operation, including an undone tail
    pub fn operations(&self) -> &[Operation<K>] {
        &self.operations
    }

    /// Number of logged operations
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Whether nothing has been logged
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}
