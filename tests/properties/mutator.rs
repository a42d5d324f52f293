//! Property tests for the tree mutator.

use proptest::prelude::*;

use concept_engine::{mutate, Route};

use super::strategies::tree_and_route;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Any route that addresses a node is accepted.
    #[test]
    fn property_valid_routes_mutate((tree, route) in tree_and_route(true)) {
        prop_assert!(mutate(&tree, &route).is_ok());
    }

    /// PROPERTY: The toggled node flips and is returned as stored in the new tree.
    #[test]
    fn property_target_flips((tree, route) in tree_and_route(true)) {
        let before = tree.node(&route).unwrap().checked;
        let (next, toggled) = mutate(&tree, &route).unwrap();

        prop_assert_eq!(toggled.checked, !before);
        prop_assert_eq!(next.node(&route), Some(&toggled));
    }

    /// PROPERTY: Checking a node checks every proper ancestor.
    #[test]
    fn property_upward_implication((tree, route) in tree_and_route(true)) {
        let (next, toggled) = mutate(&tree, &route).unwrap();
        if toggled.checked {
            let indices = route.indices();
            for len in 1..indices.len() {
                let ancestor = Route::from(&indices[..len]);
                prop_assert!(next.node(&ancestor).unwrap().checked, "ancestor {} unchecked", ancestor);
            }
        }
    }

    /// PROPERTY: Under an exclusive parent, every sibling ends unchecked.
    #[test]
    fn property_exclusive_siblings_cleared((tree, route) in tree_and_route(true)) {
        let Some(parent_route) = route.parent() else {
            return Ok(());
        };
        let (next, _) = mutate(&tree, &route).unwrap();
        let parent = next.node(&parent_route).unwrap();
        if parent.is_exclusive() {
            let target = *route.indices().last().unwrap();
            for (index, sibling) in parent.children().iter().enumerate() {
                if index != target {
                    prop_assert!(!sibling.checked);
                }
            }
        }
    }

    /// PROPERTY: The caller's tree is never modified.
    #[test]
    fn property_no_aliasing((tree, route) in tree_and_route(true)) {
        let snapshot = tree.clone();
        let _ = mutate(&tree, &route);
        prop_assert_eq!(tree, snapshot);
    }

    /// PROPERTY: Routes past the last child are rejected and leave nothing changed.
    #[test]
    fn property_out_of_range_rejected((tree, route) in tree_and_route(true), extra in 0usize..3) {
        let mut indices = route.indices().to_vec();
        let last = indices.len() - 1;
        let siblings = match route.parent() {
            Some(parent) => tree.node(&parent).unwrap().children().len(),
            None => tree.roots.len(),
        };
        indices[last] = siblings + extra;

        let snapshot = tree.clone();
        prop_assert!(mutate(&tree, &Route::new(indices)).is_err());
        prop_assert_eq!(tree, snapshot);
    }
}
