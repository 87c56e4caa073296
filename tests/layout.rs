//! Layout engine tests

mod common;

use avlviz::layout::compute_layout;
use avlviz::{AvlTree, BoundingBox, LayoutConfig, NodePosition, TreeLayout};
use common::*;
use proptest::prelude::*;

fn position_of(tree: &AvlTree<i64>, layout: &TreeLayout, key: i64) -> NodePosition {
    let id = tree.search(key).map(|n| n.id()).expect("key present");
    *layout.position(id).expect("node positioned")
}

#[test]
fn three_node_tree_positions() {
    let tree = tree_with(&[10, 20, 30]);
    let layout = compute_layout(tree.root(), &LayoutConfig::default());

    assert_eq!(position_of(&tree, &layout, 20), NodePosition { x: 0.0, y: 50.0, level: 0 });
    assert_eq!(position_of(&tree, &layout, 10), NodePosition { x: -40.0, y: 150.0, level: 1 });
    assert_eq!(position_of(&tree, &layout, 30), NodePosition { x: 40.0, y: 150.0, level: 1 });

    assert_eq!(layout.connections.len(), 2);
    assert_eq!(
        layout.bounds,
        BoundingBox {
            min_x: -40.0,
            min_y: 50.0,
            width: 140.0,
            height: 160.0
        }
    );
}

#[test]
fn perfect_tree_spreads_evenly() {
    let tree = tree_with(&[1, 2, 3, 4, 5, 6, 7]);
    let layout = compute_layout(tree.root(), &LayoutConfig::default());

    let xs: Vec<f64> = (1..=7).map(|key| position_of(&tree, &layout, key).x).collect();
    assert_eq!(xs, vec![-120.0, -80.0, -40.0, 0.0, 40.0, 80.0, 120.0]);
    assert_eq!(position_of(&tree, &layout, 1).y, 250.0);
    assert_eq!(layout.bounds.height, 260.0);
}

#[test]
fn custom_spacing_scales_offsets() {
    let tree = tree_with(&[10, 20, 30]);
    let config = LayoutConfig::default()
        .with_min_sibling_distance(200.0)
        .with_level_height(40.0)
        .with_origin(500.0, 0.0);
    let layout = TreeLayout::compute(tree.root(), &config);

    assert_eq!(position_of(&tree, &layout, 20), NodePosition { x: 500.0, y: 0.0, level: 0 });
    assert_eq!(position_of(&tree, &layout, 10), NodePosition { x: 400.0, y: 40.0, level: 1 });
    assert_eq!(position_of(&tree, &layout, 30), NodePosition { x: 600.0, y: 40.0, level: 1 });
}

#[test]
fn layout_follows_rotations() {
    let mut session = session_with(&[10, 20]);
    let before = session.layout();
    session.insert(30);
    let after = session.layout();

    // 10 was the root before the rotation and is a left child after it
    let ten = session.tree().search(10).map(|n| n.id()).expect("present");
    assert_eq!(before.position(ten).map(|p| p.level), Some(0));
    assert_eq!(after.position(ten).map(|p| p.level), Some(1));
}

#[test]
fn empty_tree_has_empty_layout() {
    let session = new_session();
    let layout = session.layout();
    assert!(layout.is_empty());
    assert_eq!(layout.bounds, BoundingBox::default());
}

proptest! {
    #[test]
    fn layout_matches_tree_structure(keys in proptest::collection::vec(-500i64..500, 0..120)) {
        let tree = tree_with(&keys);
        let config = LayoutConfig::default();
        let layout = compute_layout(tree.root(), &config);

        prop_assert_eq!(layout.len(), tree.size());
        prop_assert_eq!(layout.connections.len(), tree.size().saturating_sub(1));

        for edge in &layout.connections {
            prop_assert_eq!(edge.to.level, edge.from.level + 1);
            prop_assert_eq!(edge.to.y - edge.from.y, config.level_height);
            prop_assert!(edge.length() > 0.0);
        }

        for node in nodes(&tree) {
            let here = layout.position(node.id()).expect("positioned");
            if let Some(left) = node.left() {
                prop_assert!(layout.position(left.id()).expect("positioned").x < here.x);
            }
            if let Some(right) = node.right() {
                prop_assert!(layout.position(right.id()).expect("positioned").x > here.x);
            }
            if let (Some(left), Some(right)) = (node.left(), node.right()) {
                let gap = layout.position(right.id()).expect("positioned").x
                    - layout.position(left.id()).expect("positioned").x;
                prop_assert!(gap >= config.min_sibling_distance);
            }
        }

        // Pure function of the snapshot
        prop_assert_eq!(compute_layout(tree.root(), &config), layout);
    }
}
