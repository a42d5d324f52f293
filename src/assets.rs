//! Static tree and fragment assets.
//!
//! Both assets are compiled into the binary and can be replaced by files on
//! disk. They are read once at startup and never written.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::domain::{ConceptTree, FragmentDictionary};
use crate::error::ConceptResult;

/// Tree asset shipped with the binary
pub const BUNDLED_TREE: &str = include_str!("../assets/tree.json");
/// Fragment dictionary shipped with the binary
pub const BUNDLED_TEXT: &str = include_str!("../assets/text.json");

#[derive(Debug, Clone)]
pub struct Assets {
    pub tree: ConceptTree,
    pub fragments: FragmentDictionary,
}

impl Assets {
    pub fn bundled() -> ConceptResult<Self> {
        Self::load(None, None)
    }

    /// Load each asset from its path, or fall back to the bundled copy.
    pub fn load(tree_path: Option<&Path>, text_path: Option<&Path>) -> ConceptResult<Self> {
        let tree = match tree_path {
            Some(path) => {
                info!(path = %path.display(), "loading concept tree");
                ConceptTree::from_json(&fs::read_to_string(path)?, &path.display().to_string())?
            }
            None => ConceptTree::from_json(BUNDLED_TREE, "bundled tree.json")?,
        };

        let fragments = match text_path {
            Some(path) => {
                info!(path = %path.display(), "loading fragment dictionary");
                FragmentDictionary::from_json(
                    &fs::read_to_string(path)?,
                    &path.display().to_string(),
                )?
            }
            None => FragmentDictionary::from_json(BUNDLED_TEXT, "bundled text.json")?,
        };

        debug!(
            roots = tree.roots.len(),
            depth = tree.depth(),
            fragments = fragments.len(),
            "assets loaded"
        );
        Ok(Self { tree, fragments })
    }
}
