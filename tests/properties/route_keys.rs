//! Property tests for route key encoding.

use proptest::prelude::*;

use concept_engine::{encode_key, Route};

fn indices() -> impl Strategy<Value = Vec<usize>> {
    proptest::collection::vec(0usize..10_000, 1..=6)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Decoding a key yields the original route.
    #[test]
    fn property_key_round_trip(indices in indices()) {
        let key = encode_key(&indices);
        let route = Route::from_key(&key).unwrap();
        prop_assert_eq!(route.indices(), indices.as_slice());
    }

    /// PROPERTY: Distinct routes never share a key.
    #[test]
    fn property_key_injective(a in indices(), b in indices()) {
        prop_assume!(a != b);
        prop_assert_ne!(encode_key(&a), encode_key(&b));
    }

    /// PROPERTY: Parsing arbitrary text never panics.
    #[test]
    fn property_from_key_never_panics(key in "(?s).{0,32}") {
        let _ = Route::from_key(&key);
    }
}

#[test]
fn example_key() {
    assert_eq!(encode_key(&[1, 0, 2]), "1-0-2");
}
