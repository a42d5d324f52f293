//! Concept tree data model.

use serde::{Deserialize, Serialize};

use crate::error::{ConceptError, ConceptResult};

use super::route::Route;

/// A selectable concept.
///
/// Field names follow the JSON asset (`exclusiveChildren`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConceptNode {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub checked: bool,
    /// Fragment ids contributed while this node is checked
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub require: Option<Vec<String>>,
    /// Tooltip text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// At most one direct child may be checked
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclusive_children: Option<bool>,
    /// `None` marks a leaf
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<ConceptNode>>,
}

impl ConceptNode {
    /// Create an unchecked leaf
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            checked: false,
            require: None,
            description: None,
            exclusive_children: None,
            children: None,
        }
    }

    pub fn with_require<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.require = Some(ids.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_children(mut self, children: Vec<ConceptNode>) -> Self {
        self.children = Some(children);
        self
    }

    pub fn exclusive(mut self) -> Self {
        self.exclusive_children = Some(true);
        self
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Child nodes, empty for leaves
    pub fn children(&self) -> &[ConceptNode] {
        self.children.as_deref().unwrap_or(&[])
    }

    /// Required fragment ids, empty when absent
    pub fn require(&self) -> &[String] {
        self.require.as_deref().unwrap_or(&[])
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    pub fn is_exclusive(&self) -> bool {
        self.exclusive_children.unwrap_or(false)
    }
}

/// The root list of concepts.
///
/// Serialized as a bare array. Deserializes from either a bare array or an
/// object wrapping the array in a `tree` field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ConceptTree {
    pub roots: Vec<ConceptNode>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ConceptTreeDe {
    Bare(Vec<ConceptNode>),
    Wrapped { tree: Vec<ConceptNode> },
}

impl<'de> Deserialize<'de> for ConceptTree {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        match ConceptTreeDe::deserialize(deserializer)? {
            ConceptTreeDe::Bare(roots) | ConceptTreeDe::Wrapped { tree: roots } => {
                Ok(Self { roots })
            }
        }
    }
}

impl ConceptTree {
    pub fn new(roots: Vec<ConceptNode>) -> Self {
        Self { roots }
    }

    /// Parse a tree asset. `source_name` only appears in the error.
    pub fn from_json(json: &str, source_name: &str) -> ConceptResult<Self> {
        serde_json::from_str(json).map_err(|e| ConceptError::AssetParse {
            source_name: source_name.to_string(),
            message: e.to_string(),
        })
    }

    /// Node addressed by `route`, `None` when it does not resolve.
    pub fn node(&self, route: &Route) -> Option<&ConceptNode> {
        node_at(&self.roots, route.indices())
    }

    /// Number of levels, 0 for an empty tree
    pub fn depth(&self) -> usize {
        fn level_depth(nodes: &[ConceptNode]) -> usize {
            nodes
                .iter()
                .map(|n| 1 + level_depth(n.children()))
                .max()
                .unwrap_or(0)
        }
        level_depth(&self.roots)
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}

pub(crate) fn node_at<'a>(nodes: &'a [ConceptNode], indices: &[usize]) -> Option<&'a ConceptNode> {
    let (&first, rest) = indices.split_first()?;
    let node = nodes.get(first)?;
    if rest.is_empty() {
        return Some(node);
    }
    node_at(node.children.as_deref()?, rest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_array() {
        let tree = ConceptTree::from_json(
            r#"[{"id": "a", "title": "A", "checked": true}]"#,
            "inline",
        )
        .unwrap();
        assert_eq!(tree.roots.len(), 1);
        assert!(tree.roots[0].checked);
        assert!(tree.roots[0].is_leaf());
    }

    #[test]
    fn parses_wrapped_tree_object() {
        let tree = ConceptTree::from_json(
            r#"{"tree": [{"id": "a", "title": "A", "exclusiveChildren": true, "children": []}]}"#,
            "inline",
        )
        .unwrap();
        assert!(tree.roots[0].is_exclusive());
        assert!(!tree.roots[0].is_leaf());
        assert!(tree.roots[0].children().is_empty());
    }

    #[test]
    fn checked_defaults_to_false() {
        let tree = ConceptTree::from_json(r#"[{"id": "a", "title": "A"}]"#, "inline").unwrap();
        assert!(!tree.roots[0].checked);
    }

    #[test]
    fn malformed_asset_reports_source_name() {
        let err = ConceptTree::from_json(r#"[{"title": "no id"}]"#, "tree.json").unwrap_err();
        match err {
            ConceptError::AssetParse { source_name, .. } => assert_eq!(source_name, "tree.json"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn serializes_with_camel_case_and_skips_absent_fields() {
        let tree = ConceptTree::new(vec![ConceptNode::new("a", "A")
            .exclusive()
            .with_children(vec![ConceptNode::new("b", "B")])]);
        let json = serde_json::to_string(&tree).unwrap();
        assert_eq!(
            json,
            r#"[{"id":"a","title":"A","checked":false,"exclusiveChildren":true,"children":[{"id":"b","title":"B","checked":false}]}]"#
        );
    }

    #[test]
    fn node_lookup_by_route() {
        let tree = ConceptTree::new(vec![
            ConceptNode::new("a", "A"),
            ConceptNode::new("b", "B").with_children(vec![ConceptNode::new("b0", "B0")]),
        ]);
        assert_eq!(tree.node(&Route::new(vec![1, 0])).unwrap().id, "b0");
        assert!(tree.node(&Route::new(vec![0, 0])).is_none());
        assert!(tree.node(&Route::new(vec![2])).is_none());
        assert!(tree.node(&Route::root()).is_none());
    }

    #[test]
    fn depth_counts_levels() {
        let tree = ConceptTree::new(vec![ConceptNode::new("a", "A").with_children(vec![
            ConceptNode::new("b", "B").with_children(vec![ConceptNode::new("c", "C")]),
        ])]);
        assert_eq!(tree.depth(), 3);
        assert_eq!(ConceptTree::default().depth(), 0);
    }
}
