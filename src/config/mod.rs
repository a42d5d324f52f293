//! Configuration module
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (CONCEPT_ENGINE_*)
//! 3. Config file (`--config`, `./concept-engine.toml`, or
//!    `~/.config/concept-engine/config.toml`)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    discover, load_with_warnings, with_env_overrides, ConfigWarning, PROJECT_CONFIG_FILE,
    USER_CONFIG_DIR,
};
pub use types::{AssetsConfig, ColorMode, Config, OutputConfig, ViewConfig};
