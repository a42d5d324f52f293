//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::MAX_DEPTH;
use crate::error::ConceptResult;

use super::loader::{self, ConfigWarning};

/// Asset file overrides. Relative paths resolve against the config file.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AssetsConfig {
    #[serde(default)]
    pub tree: Option<PathBuf>,

    #[serde(default)]
    pub text: Option<PathBuf>,
}

/// Tree view configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ViewConfig {
    /// Route keys expanded at startup
    #[serde(default = "default_expanded")]
    pub expanded: Vec<String>,

    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            expanded: default_expanded(),
            max_depth: default_max_depth(),
        }
    }
}

fn default_expanded() -> Vec<String> {
    vec!["0".to_string(), "1".to_string(), "1-0".to_string()]
}

fn default_max_depth() -> usize {
    MAX_DEPTH
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Full configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub assets: AssetsConfig,

    #[serde(default)]
    pub view: ViewConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> ConceptResult<Self> {
        loader::load_with_warnings(path).map(|(config, _)| config)
    }

    /// Load configuration and collect unknown-key warnings
    pub fn load_with_warnings(path: &Path) -> ConceptResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Depth limit for the outline, never below one level
    pub fn max_depth(&self) -> usize {
        self.view.max_depth.max(1)
    }

    /// Make relative asset paths relative to `base`.
    pub fn resolve_paths(mut self, base: &Path) -> Self {
        let resolve = |p: PathBuf| if p.is_relative() { base.join(p) } else { p };
        self.assets.tree = self.assets.tree.map(resolve);
        self.assets.text = self.assets.text.map(resolve);
        self
    }
}
