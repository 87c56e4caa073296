//! Logged user-intent events

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// Milliseconds since the Unix epoch (0 if the clock is before it)
pub fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or(0)
}

/// One logged request
///
/// Every user-facing call is logged, no-ops included, so the log is a
/// complete record of intent. `Search` never changes the tree shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize, serde::Deserialize))]
pub enum Operation<K> {
    /// Insert a key
    Insert {
        /// Key inserted
        key: K,
        /// Milliseconds since the Unix epoch
        timestamp: u64,
    },
    /// Delete a key
    Delete {
        /// Key deleted
        key: K,
        /// Milliseconds since the Unix epoch
        timestamp: u64,
    },
    /// Look a key up
    Search {
        /// Key searched for
        key: K,
        /// Milliseconds since the Unix epoch
        timestamp: u64,
    },
    /// Empty the tree
    Clear {
        /// Milliseconds since the Unix epoch
        timestamp: u64,
    },
}

impl<K: Copy> Operation<K> {
    /// Insert stamped with the current time
    pub fn insert(key: K) -> Self {
        Operation::Insert {
            key,
            timestamp: now_millis(),
        }
    }

    /// Delete stamped with the current time
    pub fn delete(key: K) -> Self {
        Operation::Delete {
            key,
            timestamp: now_millis(),
        }
    }

    /// Search stamped with the current time
    pub fn search(key: K) -> Self {
        Operation::Search {
            key,
            timestamp: now_millis(),
        }
    }

    /// Clear stamped with the current time
    pub fn clear() -> Self {
        Operation::Clear {
            timestamp: now_millis(),
        }
    }

    /// Replace the timestamp (deterministic logs in tests and scripts)
    pub fn at(self, timestamp: u64) -> Self {
        match self {
            Operation::Insert { key, .. } => Operation::Insert { key, timestamp },
            Operation::Delete { key, .. } => Operation::Delete { key, timestamp },
            Operation::Search { key, .. } => Operation::Search { key, timestamp },
            Operation::Clear { .. } => Operation::Clear { timestamp },
        }
    }

    /// Key carried by the operation (`None` for `Clear`)
    pub fn key(&self) -> Option<K> {
        match *self {
            Operation::Insert { key, .. }
            | Operation::Delete { key, .. }
            | Operation::Search { key, .. } => Some(key),
            Operation::Clear { .. } => None,
        }
    }

    /// When the operation was logged
    pub fn timestamp(&self) -> u64 {
        match *self {
            Operation::Insert { timestamp, .. }
            | Operation::Delete { timestamp, .. }
            | Operation::Search { timestamp, .. }
            | Operation::Clear { timestamp } => timestamp,
        }
    }

    /// Whether replay has to apply this operation
    pub fn is_mutating(&self) -> bool {
        !matches!(self, Operation::Search { .. })
    }

    /// Lowercase tag
    pub fn label(&self) -> &'static str {
        match self {
            Operation::Insert { .. } => "insert",
            Operation::Delete { .. } => "delete",
            Operation::Search { .. } => "search",
            Operation::Clear { .. } => "clear",
        }
    }
}

impl<K: Copy + fmt::Debug> fmt::Display for Operation<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.key() {
            Some(key) => write!(f, "{} {:?}", self.label(), key),
            None => f.write_str(self.label()),
        }
    }
}
