//! Flattened, depth-limited view of the concept tree.

use std::collections::BTreeSet;

use serde::Serialize;
use tracing::warn;

use crate::error::ConceptError;

use super::fragments::FragmentDictionary;
use super::node::{ConceptNode, ConceptTree};
use super::route::Route;

/// Deepest route the outline renders.
pub const MAX_DEPTH: usize = 5;

/// One visible line of the outline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutlineRow {
    pub route: Route,
    /// 0 for root nodes
    pub depth: usize,
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub checked: bool,
    pub has_children: bool,
    pub expanded: bool,
    /// Parent has `exclusiveChildren` set
    pub exclusive_parent: bool,
}

/// Which nodes show their children.
#[derive(Debug, Clone, Copy)]
pub enum Expansion<'a> {
    All,
    Keys(&'a BTreeSet<String>),
}

impl Expansion<'_> {
    fn contains(&self, route: &Route) -> bool {
        match self {
            Expansion::All => true,
            Expansion::Keys(keys) => keys.contains(&route.key()),
        }
    }
}

/// Depth-first rows, descending only into expanded nodes.
///
/// Subtrees whose route would exceed `max_depth` render empty and log a
/// `DepthExceeded` diagnostic.
pub fn visible_rows(tree: &ConceptTree, expansion: Expansion<'_>, max_depth: usize) -> Vec<OutlineRow> {
    let mut rows = Vec::new();
    push_rows(&tree.roots, &Route::root(), false, expansion, max_depth, &mut rows);
    rows
}

fn push_rows(
    nodes: &[ConceptNode],
    parent: &Route,
    exclusive_parent: bool,
    expansion: Expansion<'_>,
    max_depth: usize,
    rows: &mut Vec<OutlineRow>,
) {
    if parent.len() >= max_depth {
        let err = ConceptError::DepthExceeded {
            route: parent.key(),
            limit: max_depth,
        };
        warn!("{err}");
        return;
    }

    for (index, node) in nodes.iter().enumerate() {
        let route = parent.child(index);
        let has_children = !node.children().is_empty();
        let expanded = has_children && expansion.contains(&route);

        rows.push(OutlineRow {
            route: route.clone(),
            depth: parent.len(),
            id: node.id.clone(),
            title: node.title.clone(),
            description: node.description.clone(),
            checked: node.checked,
            has_children,
            expanded,
            exclusive_parent,
        });

        if expanded {
            push_rows(
                node.children(),
                &route,
                node.is_exclusive(),
                expansion,
                max_depth,
                rows,
            );
        }
    }
}

/// Every missing fragment reference and depth violation in the assets.
pub fn validate(
    tree: &ConceptTree,
    dictionary: &FragmentDictionary,
    max_depth: usize,
) -> Vec<ConceptError> {
    let mut problems = Vec::new();
    let mut reported = BTreeSet::new();
    validate_level(
        &tree.roots,
        &Route::root(),
        dictionary,
        max_depth,
        &mut reported,
        &mut problems,
    );
    problems
}

fn validate_level(
    nodes: &[ConceptNode],
    parent: &Route,
    dictionary: &FragmentDictionary,
    max_depth: usize,
    reported: &mut BTreeSet<String>,
    problems: &mut Vec<ConceptError>,
) {
    if nodes.is_empty() {
        return;
    }
    if parent.len() >= max_depth {
        problems.push(ConceptError::DepthExceeded {
            route: parent.key(),
            limit: max_depth,
        });
        return;
    }

    for (index, node) in nodes.iter().enumerate() {
        for id in node.require() {
            if !dictionary.contains(id) && reported.insert(id.clone()) {
                problems.push(ConceptError::MissingFragment { id: id.clone() });
            }
        }
        validate_level(
            node.children(),
            &parent.child(index),
            dictionary,
            max_depth,
            reported,
            problems,
        );
    }
}
