//! Shared helpers for integration tests

#![allow(dead_code)]

use avlviz::{AvlTree, Node, SessionConfig, TreeSession};

/// Session with default layout constants
pub fn new_session() -> TreeSession<i64> {
    TreeSession::new(SessionConfig::default()).expect("default config is valid")
}

/// Session after inserting `keys` in order
pub fn session_with(keys: &[i64]) -> TreeSession<i64> {
    let mut session = new_session();
    for &key in keys {
        session.insert(key);
    }
    session
}

/// Tree after inserting `keys` in order
pub fn tree_with(keys: &[i64]) -> AvlTree<i64> {
    keys.iter().copied().collect()
}

/// Key at the root, if any
pub fn root_key(tree: &AvlTree<i64>) -> Option<i64> {
    tree.root().map(Node::key)
}

/// Panic with the offending tree if any invariant is broken
pub fn assert_valid(tree: &AvlTree<i64>) {
    if let Err(violation) = tree.check() {
        panic!(
            "invariant violated: {violation}\npreorder: {:?}",
            tree.preorder().collect::<Vec<_>>()
        );
    }
}

/// Every node of the tree, preorder
pub fn nodes(tree: &AvlTree<i64>) -> Vec<&Node<i64>> {
    let mut out = Vec::new();
    let mut stack: Vec<&Node<i64>> = tree.root().into_iter().collect();
    while let Some(node) = stack.pop() {
        out.push(node);
        stack.extend(node.right());
        stack.extend(node.left());
    }
    out
}
