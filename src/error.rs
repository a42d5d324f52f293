//! Error types for the concept engine
//!
//! Uses `thiserror` for library errors. Route, fragment and depth errors are
//! recovered where they occur and only logged; asset and config errors
//! propagate to the binary.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for concept engine operations
pub type ConceptResult<T> = Result<T, ConceptError>;

/// Main error type for concept engine operations
#[derive(Error, Debug)]
pub enum ConceptError {
    /// Route does not resolve to a node of the current tree
    #[error("route '{route}' does not address a node in the concept tree")]
    InvalidRoute { route: String },

    /// Route key is not a dash-separated list of indices
    #[error("invalid route key '{key}' - expected indices like '1-0-2'")]
    InvalidRouteKey { key: String },

    /// A `require` entry has no fragment in the dictionary
    #[error("linked text was not found: {id}")]
    MissingFragment { id: String },

    /// Tree is nested deeper than the outline can show
    #[error("tree is nested too deeply below '{route}' (limit: {limit} levels)")]
    DepthExceeded { route: String, limit: usize },

    /// Tree or fragment asset could not be parsed
    #[error("invalid asset {source_name}: {message}")]
    AssetParse {
        source_name: String,
        message: String,
    },

    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConceptError {
    /// Short machine-readable name, used by `--json` output.
    pub fn kind(&self) -> &'static str {
        match self {
            ConceptError::InvalidRoute { .. } => "invalid_route",
            ConceptError::InvalidRouteKey { .. } => "invalid_route_key",
            ConceptError::MissingFragment { .. } => "missing_fragment",
            ConceptError::DepthExceeded { .. } => "depth_exceeded",
            ConceptError::AssetParse { .. } => "asset_parse",
            ConceptError::InvalidConfig { .. } => "invalid_config",
            ConceptError::Io(_) => "io",
        }
    }
}
