//! Property tests for the selection resolver.

use proptest::prelude::*;

use concept_engine::{mutate, ordered_fragment_ids, resolve_fragment_ids};

use super::strategies::tree_and_route;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Without exclusive parents, checking only adds ids and
    /// unchecking only removes them.
    #[test]
    fn property_selection_monotonic((tree, route) in tree_and_route(false)) {
        let before = resolve_fragment_ids(&tree);
        let (next, toggled) = mutate(&tree, &route).unwrap();
        let after = resolve_fragment_ids(&next);

        if toggled.checked {
            prop_assert!(before.is_subset(&after));
        } else {
            prop_assert!(after.is_subset(&before));
        }
    }

    /// PROPERTY: Ordered ids hold the same set without duplicates.
    #[test]
    fn property_ordered_ids_match_set((tree, _route) in tree_and_route(true)) {
        let ordered = ordered_fragment_ids(&tree);
        let set = resolve_fragment_ids(&tree);

        prop_assert_eq!(ordered.len(), set.len());
        prop_assert!(ordered.iter().all(|id| set.contains(id)));
    }
}
