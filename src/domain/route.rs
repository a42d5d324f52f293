//! Routes address a node by its child indices from the root list.
//!
//! A route is rendered as a dash-joined key (`"1-0-2"`) which identifies the
//! node in expansion and selection bookkeeping.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::{ConceptError, ConceptResult};

/// Separator between indices in a route key. Never part of a decimal index.
pub const KEY_SEPARATOR: char = '-';

/// Join indices into a route key.
pub fn encode_key(indices: &[usize]) -> String {
    indices
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(&KEY_SEPARATOR.to_string())
}

/// Path of child indices from the root list to one node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Route(Vec<usize>);

impl Route {
    pub fn new(indices: Vec<usize>) -> Self {
        Self(indices)
    }

    /// The empty route, parent of every root node.
    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Route of the `index`-th child of this node.
    pub fn child(&self, index: usize) -> Self {
        let mut indices = self.0.clone();
        indices.push(index);
        Self(indices)
    }

    /// Route of the parent node, `None` for roots and the empty route.
    pub fn parent(&self) -> Option<Self> {
        match self.0.split_last() {
            Some((_, rest)) if !rest.is_empty() => Some(Self(rest.to_vec())),
            _ => None,
        }
    }

    pub fn key(&self) -> String {
        encode_key(&self.0)
    }

    /// Parse a key produced by [`Route::key`].
    pub fn from_key(key: &str) -> ConceptResult<Self> {
        let invalid = || ConceptError::InvalidRouteKey {
            key: key.to_string(),
        };

        if key.is_empty() {
            return Err(invalid());
        }

        key.split(KEY_SEPARATOR)
            .map(|segment| {
                // `usize::from_str` accepts a leading '+', keys never carry one
                if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(invalid());
                }
                segment.parse::<usize>().map_err(|_| invalid())
            })
            .collect::<ConceptResult<Vec<_>>>()
            .map(Self)
    }
}

impl From<Vec<usize>> for Route {
    fn from(indices: Vec<usize>) -> Self {
        Self(indices)
    }
}

impl From<&[usize]> for Route {
    fn from(indices: &[usize]) -> Self {
        Self(indices.to_vec())
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}

impl FromStr for Route {
    type Err = ConceptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s.trim())
    }
}

impl Serialize for Route {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_key_joins_with_dashes() {
        assert_eq!(encode_key(&[1, 0, 2]), "1-0-2");
        assert_eq!(Route::new(vec![1, 0, 2]).key(), "1-0-2");
    }

    #[test]
    fn encode_key_single_index() {
        assert_eq!(encode_key(&[7]), "7");
    }

    #[test]
    fn multi_digit_indices_do_not_collide() {
        assert_ne!(encode_key(&[1, 12]), encode_key(&[11, 2]));
        assert_ne!(encode_key(&[11]), encode_key(&[1, 1]));
    }

    #[test]
    fn from_key_parses_back() {
        let route = Route::from_key("1-0-2").unwrap();
        assert_eq!(route.indices(), &[1, 0, 2]);
    }

    #[test]
    fn from_key_rejects_malformed_keys() {
        for key in ["", "-", "1-", "-1", "1--2", "a", "1-b", "+1", "1 2"] {
            assert!(
                matches!(
                    Route::from_key(key),
                    Err(ConceptError::InvalidRouteKey { .. })
                ),
                "expected '{key}' to be rejected"
            );
        }
    }

    #[test]
    fn from_str_trims_whitespace() {
        let route: Route = " 0-1 ".parse().unwrap();
        assert_eq!(route, Route::new(vec![0, 1]));
    }

    #[test]
    fn parent_and_child_navigation() {
        let route = Route::new(vec![1, 0]);
        assert_eq!(route.child(3).key(), "1-0-3");
        assert_eq!(route.parent(), Some(Route::new(vec![1])));
        assert_eq!(Route::new(vec![1]).parent(), None);
        assert_eq!(Route::root().parent(), None);
    }

    #[test]
    fn display_matches_key() {
        assert_eq!(Route::new(vec![4, 2]).to_string(), "4-2");
    }
}
