//! Fragment dictionary and text composition.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{ConceptError, ConceptResult};

/// A named block of explanatory text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextFragment {
    pub title: String,
    pub text: String,
}

impl TextFragment {
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
        }
    }
}

/// Read-only mapping from fragment id to text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FragmentDictionary {
    entries: HashMap<String, TextFragment>,
}

impl FragmentDictionary {
    pub fn from_json(json: &str, source_name: &str) -> ConceptResult<Self> {
        serde_json::from_str(json).map_err(|e| ConceptError::AssetParse {
            source_name: source_name.to_string(),
            message: e.to_string(),
        })
    }

    pub fn get(&self, id: &str) -> Option<&TextFragment> {
        self.entries.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, TextFragment)> for FragmentDictionary {
    fn from_iter<T: IntoIterator<Item = (K, TextFragment)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// One resolved fragment in the output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComposedSection<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub text: &'a str,
}

/// Text output for a selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComposedText<'a> {
    pub sections: Vec<ComposedSection<'a>>,
    /// Ids without a dictionary entry, skipped
    pub missing: Vec<String>,
}

impl ComposedText<'_> {
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Clipboard payload: `title\ntext\n\n` per section.
    pub fn copy_text(&self) -> String {
        self.sections
            .iter()
            .map(|s| format!("{}\n{}\n\n", s.title, s.text))
            .collect()
    }
}

/// Look up `ids` in order. Missing ids are logged and skipped.
pub fn compose<'a>(dictionary: &'a FragmentDictionary, ids: &'a [String]) -> ComposedText<'a> {
    let mut sections = Vec::with_capacity(ids.len());
    let mut missing = Vec::new();

    for id in ids {
        match dictionary.get(id) {
            Some(fragment) => sections.push(ComposedSection {
                id: id.as_str(),
                title: fragment.title.as_str(),
                text: fragment.text.as_str(),
            }),
            None => {
                let err = ConceptError::MissingFragment { id: id.clone() };
                warn!("{err}");
                missing.push(id.clone());
            }
        }
    }

    ComposedText { sections, missing }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> FragmentDictionary {
        [
            ("x", TextFragment::new("X title", "X body")),
            ("y", TextFragment::new("Y title", "Y body\nsecond line")),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn parses_dictionary_json() {
        let dict = FragmentDictionary::from_json(
            r#"{"x": {"title": "X", "text": "body"}}"#,
            "text.json",
        )
        .unwrap();
        assert_eq!(dict.len(), 1);
        assert_eq!(dict.get("x").unwrap().text, "body");
        assert!(dict.get("nope").is_none());
    }

    #[test]
    fn rejects_fragment_without_text() {
        let err = FragmentDictionary::from_json(r#"{"x": {"title": "X"}}"#, "text.json")
            .unwrap_err();
        assert_eq!(err.kind(), "asset_parse");
    }

    #[test]
    fn compose_keeps_order_and_skips_missing() {
        let dict = dictionary();
        let ids = vec!["y".to_string(), "gone".to_string(), "x".to_string()];
        let composed = compose(&dict, &ids);

        let order: Vec<_> = composed.sections.iter().map(|s| s.id).collect();
        assert_eq!(order, vec!["y", "x"]);
        assert_eq!(composed.missing, vec!["gone"]);
    }

    #[test]
    fn copy_text_format() {
        let dict = dictionary();
        let ids = vec!["x".to_string(), "y".to_string()];
        let composed = compose(&dict, &ids);
        assert_eq!(
            composed.copy_text(),
            "X title\nX body\n\nY title\nY body\nsecond line\n\n"
        );
    }

    #[test]
    fn compose_empty_selection() {
        let dict = dictionary();
        let composed = compose(&dict, &[]);
        assert!(composed.is_empty());
        assert_eq!(composed.copy_text(), "");
    }
}
