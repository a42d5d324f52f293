//! Applies a checkbox click to a concept tree.
//!
//! Rules:
//! - A concept can be enabled or disabled
//! - When a child concept is enabled, all its ancestors are enabled too
//! - Under an exclusive parent only one child can be enabled; the others are
//!   disabled
//!
//! The input tree is never modified. Every call returns a fresh snapshot.

use tracing::{debug, warn};

use crate::error::{ConceptError, ConceptResult};

use super::node::{node_at, ConceptNode, ConceptTree};
use super::route::Route;

/// Toggle the node at `route`.
///
/// Returns the new tree and a copy of the toggled node as it is in the new
/// tree. An empty route, an out-of-range index, or a route that passes
/// through a leaf is `InvalidRoute`.
pub fn mutate(tree: &ConceptTree, route: &Route) -> ConceptResult<(ConceptTree, ConceptNode)> {
    let invalid = || {
        let err = ConceptError::InvalidRoute { route: route.key() };
        warn!("{err}");
        err
    };

    let Some((&target, ancestors)) = route.indices().split_last() else {
        return Err(invalid());
    };

    let mut next = tree.clone();

    if ancestors.is_empty() {
        let node = next.roots.get_mut(target).ok_or_else(invalid)?;
        node.checked = !node.checked;
        let toggled = node.clone();
        debug!(route = %route, checked = toggled.checked, "toggled root concept");
        return Ok((next, toggled));
    }

    // Resolve against the caller's tree first so a bad route leaves nothing
    // half-applied.
    let enabling = {
        let parent = node_at(&tree.roots, ancestors).ok_or_else(invalid)?;
        let siblings = parent.children.as_deref().ok_or_else(invalid)?;
        let child = siblings.get(target).ok_or_else(invalid)?;
        !child.checked
    };

    let parent = walk_ancestors(&mut next.roots, ancestors, enabling).ok_or_else(invalid)?;
    let exclusive = parent.is_exclusive();
    let siblings = parent.children.as_deref_mut().ok_or_else(invalid)?;

    if exclusive {
        for (index, sibling) in siblings.iter_mut().enumerate() {
            if index != target {
                sibling.checked = false;
            }
        }
    }

    let child = siblings.get_mut(target).ok_or_else(invalid)?;
    child.checked = !child.checked;
    let toggled = child.clone();

    debug!(
        route = %route,
        checked = toggled.checked,
        exclusive,
        "toggled concept"
    );
    Ok((next, toggled))
}

/// Descend along `ancestors`, checking each visited node when `enable` is
/// set. Returns the last visited node, the parent of the click target.
fn walk_ancestors<'a>(
    nodes: &'a mut [ConceptNode],
    ancestors: &[usize],
    enable: bool,
) -> Option<&'a mut ConceptNode> {
    let (&first, rest) = ancestors.split_first()?;
    let node = nodes.get_mut(first)?;
    if enable {
        node.checked = true;
    }
    if rest.is_empty() {
        return Some(node);
    }
    walk_ancestors(node.children.as_deref_mut()?, rest, enable)
}
