//! Shared generators for concept trees and routes.

use proptest::prelude::*;

use concept_engine::{ConceptNode, ConceptTree, Route};

const IDS: &[&str] = &["a", "b", "c", "d", "e", "f"];

fn leaf(allow_exclusive: bool) -> impl Strategy<Value = ConceptNode> {
    (
        any::<bool>(),
        proptest::sample::subsequence(IDS, 0..=2),
        any::<bool>(),
    )
        .prop_map(move |(checked, require, exclusive)| {
            let node = ConceptNode::new("n", "Node")
                .checked(checked)
                .with_require(require.iter().copied());
            if allow_exclusive && exclusive {
                node.exclusive()
            } else {
                node
            }
        })
}

/// Random tree up to four levels deep with up to four children per node.
pub fn tree(allow_exclusive: bool) -> impl Strategy<Value = ConceptTree> {
    let node = leaf(allow_exclusive).prop_recursive(3, 48, 4, move |inner| {
        (leaf(allow_exclusive), proptest::collection::vec(inner, 1..=4))
            .prop_map(|(node, children)| node.with_children(children))
    });
    proptest::collection::vec(node, 1..=4).prop_map(ConceptTree::new)
}

/// Follow `seeds` down the tree, stopping at a leaf or when seeds run out.
pub fn pick_route(tree: &ConceptTree, seeds: &[usize]) -> Route {
    let mut indices = Vec::new();
    let mut level = tree.roots.as_slice();
    for seed in seeds {
        if level.is_empty() {
            break;
        }
        let index = seed % level.len();
        indices.push(index);
        level = level[index].children();
    }
    Route::new(indices)
}

/// A tree plus a route that addresses one of its nodes.
pub fn tree_and_route(allow_exclusive: bool) -> impl Strategy<Value = (ConceptTree, Route)> {
    (
        tree(allow_exclusive),
        proptest::collection::vec(any::<usize>(), 1..=4),
    )
        .prop_map(|(tree, seeds)| {
            let route = pick_route(&tree, &seeds);
            (tree, route)
        })
}
