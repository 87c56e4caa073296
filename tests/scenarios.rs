//! Concrete engine and session scenarios

mod common;

use avlviz::{Rotation, TraversalOrder};
use common::*;
use test_case::test_case;

#[test_case([10, 20, 30], Rotation::RR ; "ascending keys rotate left")]
#[test_case([30, 20, 10], Rotation::LL ; "descending keys rotate right")]
#[test_case([30, 10, 20], Rotation::LR ; "zig zag left right")]
#[test_case([10, 30, 20], Rotation::RL ; "zig zag right left")]
fn three_keys_rebalance_to_middle(keys: [i64; 3], expected: Rotation) {
    let mut tree = tree_with(&keys[..2]);
    let report = tree.insert(keys[2]);

    assert!(report.changed);
    assert_eq!(report.rotations, vec![expected]);
    assert_eq!(root_key(&tree), Some(20));
    assert_eq!(tree.height(), 2);
    assert_eq!(tree.inorder().collect::<Vec<_>>(), vec![10, 20, 30]);
    assert_valid(&tree);
}

#[test]
fn two_child_delete_uses_successor() {
    let mut tree = tree_with(&[20, 10, 30, 5, 15]);
    let report = tree.delete(10);

    assert!(report.changed);
    assert_eq!(tree.inorder().collect::<Vec<_>>(), vec![5, 15, 20, 30]);
    assert_eq!(tree.preorder().collect::<Vec<_>>(), vec![20, 15, 5, 30]);
    assert_eq!(tree.size(), 4);
    assert_valid(&tree);
}

#[test]
fn sequential_seven_is_perfect() {
    let tree = tree_with(&[1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(tree.height(), 3);
    assert_eq!(root_key(&tree), Some(4));
    assert_eq!(tree.preorder().collect::<Vec<_>>(), vec![4, 2, 1, 3, 6, 5, 7]);
    assert_valid(&tree);
}

#[test]
fn undo_then_redo_restores_state() {
    let mut session = session_with(&[5, 3, 8]);

    assert!(session.undo());
    assert_eq!(session.root().map(|n| n.key()), Some(5));
    assert_eq!(session.size(), 2);
    assert_eq!(session.traverse(TraversalOrder::Inorder), vec![3, 5]);

    assert!(session.redo());
    assert_eq!(session.size(), 3);
    assert_eq!(session.traverse(TraversalOrder::Inorder), vec![3, 5, 8]);
}

#[test]
fn delete_leaf_and_single_child() {
    let mut tree = tree_with(&[20, 10, 30, 25]);

    // 30 has only a left child: 25 takes its place
    tree.delete(30);
    assert_eq!(tree.preorder().collect::<Vec<_>>(), vec![20, 10, 25]);

    tree.delete(10);
    assert_eq!(tree.preorder().collect::<Vec<_>>(), vec![20, 25]);
    assert_valid(&tree);

    tree.delete(20);
    tree.delete(25);
    assert!(tree.is_empty());
    assert_eq!(tree.height(), 0);
}

#[test]
fn rotations_keep_identities() {
    let mut tree = tree_with(&[10, 20]);
    let ids: Vec<_> = [10, 20]
        .iter()
        .map(|&key| tree.search(key).map(|n| n.id()))
        .collect();

    tree.insert(30);
    assert_eq!(tree.search(10).map(|n| n.id()), ids[0]);
    assert_eq!(tree.search(20).map(|n| n.id()), ids[1]);
}

#[test]
fn search_reports_identity_without_mutation() {
    let mut session = session_with(&[4, 2, 6]);
    let before = session.fingerprint();

    let hit = session.search(2);
    assert!(hit.is_some());
    assert_eq!(hit, session.tree().search(2).map(|n| n.id()));
    assert_eq!(session.search(5), None);
    assert_eq!(session.fingerprint(), before);
    assert_eq!(session.history().len(), 5);
}

#[test]
fn insert_needs_at_most_one_rebalance() {
    let mut tree = tree_with(&[]);
    for key in [50, 25, 75, 10, 30, 60, 80, 5, 15, 27, 55, 1, 3, 2, 4, 26] {
        let report = tree.insert(key);
        assert!(report.rotations.len() <= 1, "insert {key}: {:?}", report.rotations);
        assert_valid(&tree);
    }
}
