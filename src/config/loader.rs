//! Configuration discovery and loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ConceptError, ConceptResult};

use super::types::{ColorMode, Config};

/// Config file looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "concept-engine.toml";
/// Directory below the user config dir
pub const USER_CONFIG_DIR: &str = "concept-engine";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> ConceptResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ConceptError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    let base = path.parent().unwrap_or_else(|| Path::new("."));
    Ok((config.resolve_paths(base), warnings))
}

/// Find the config file to use when none is given explicitly.
///
/// Looks for `concept-engine.toml` in `cwd`, then
/// `<config dir>/concept-engine/config.toml`.
pub fn discover(cwd: &Path, get_env: impl Fn(&str) -> Option<String>) -> Option<PathBuf> {
    let project_config = cwd.join(PROJECT_CONFIG_FILE);
    if project_config.is_file() {
        return Some(project_config);
    }

    let user_config = user_config_dir(&get_env)?
        .join(USER_CONFIG_DIR)
        .join("config.toml");
    if user_config.is_file() {
        return Some(user_config);
    }

    None
}

/// Apply environment variable overrides (CONCEPT_ENGINE_* prefix)
pub fn with_env_overrides(mut config: Config, get_env: impl Fn(&str) -> Option<String>) -> Config {
    if let Some(tree) = get_env("CONCEPT_ENGINE_TREE").filter(|v| !v.is_empty()) {
        debug!(tree = %tree, "tree asset overridden by environment");
        config.assets.tree = Some(PathBuf::from(tree));
    }

    if let Some(text) = get_env("CONCEPT_ENGINE_TEXT").filter(|v| !v.is_empty()) {
        debug!(text = %text, "text asset overridden by environment");
        config.assets.text = Some(PathBuf::from(text));
    }

    if let Some(color) = get_env("CONCEPT_ENGINE_COLOR") {
        config.output.color = match color.to_lowercase().as_str() {
            "always" => ColorMode::Always,
            "never" => ColorMode::Never,
            _ => ColorMode::Auto,
        };
    }

    if let Some(val) = get_env("CONCEPT_ENGINE_UNICODE") {
        config.output.unicode = val.to_lowercase() != "false" && val != "0";
    }

    config
}

fn user_config_dir(get_env: &impl Fn(&str) -> Option<String>) -> Option<PathBuf> {
    get_env("XDG_CONFIG_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "assets",
        "tree",
        "text",
        "view",
        "expanded",
        "max_depth",
        "output",
        "color",
        "unicode",
    ];

    CANDIDATES
        .iter()
        .map(|candidate| (candidate, levenshtein(unknown, candidate)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
