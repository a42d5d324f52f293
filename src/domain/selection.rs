//! Derives the fragment ids to display from the checked concepts.

use std::collections::{BTreeSet, HashSet};

use super::node::{ConceptNode, ConceptTree};

/// Union of the `require` ids of every checked node.
///
/// A checked node contributes its ids and its children are visited; each
/// child's own flag gates its contribution. Unchecked nodes contribute
/// nothing and their subtrees are skipped.
pub fn resolve_fragment_ids(tree: &ConceptTree) -> BTreeSet<String> {
    ordered_fragment_ids(tree).into_iter().collect()
}

/// Same ids as [`resolve_fragment_ids`], deduplicated in depth-first
/// first-seen order.
pub fn ordered_fragment_ids(tree: &ConceptTree) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut ordered = Vec::new();
    collect(&tree.roots, &mut seen, &mut ordered);
    ordered
}

fn collect<'a>(nodes: &'a [ConceptNode], seen: &mut HashSet<&'a str>, out: &mut Vec<String>) {
    for node in nodes {
        if !node.checked {
            continue;
        }
        for id in node.require() {
            if seen.insert(id.as_str()) {
                out.push(id.clone());
            }
        }
        collect(node.children(), seen, out);
    }
}
