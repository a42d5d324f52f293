//! Subcommand implementations.
//!
//! Every command starts from a [`Workspace`]: resolved config, loaded
//! assets, and the terminal context.

pub mod browse;
pub mod check;
pub mod render;
pub mod tree;

use std::path::PathBuf;

use anyhow::{Context, Result};
use concept_engine::config::{self, Config};
use concept_engine::{Assets, Interaction, Route, Session};
use tracing::debug;

use crate::cli::Cli;
use crate::ui::context::UiContext;
use crate::ui::output::print_config_warnings;

pub struct Workspace {
    pub config: Config,
    pub config_path: Option<PathBuf>,
    pub assets: Assets,
    pub ui: UiContext,
}

impl Workspace {
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        let get_env = |key: &str| std::env::var(key).ok();

        let config_path = cli
            .config
            .clone()
            .or_else(|| config::discover(&cwd, get_env));

        let (config, warnings) = match &config_path {
            Some(path) => {
                debug!(path = %path.display(), "loading config");
                Config::load_with_warnings(path)
                    .with_context(|| format!("failed to load config {}", path.display()))?
            }
            None => (Config::default(), Vec::new()),
        };

        let mut config = config::with_env_overrides(config, get_env);
        if let Some(tree) = &cli.tree {
            config.assets.tree = Some(tree.clone());
        }
        if let Some(text) = &cli.text {
            config.assets.text = Some(text.clone());
        }

        let ui = UiContext::new(cli.json, cli.verbose, cli.color, &config);
        if !warnings.is_empty() {
            print_config_warnings(&warnings, &ui);
        }

        let assets = Assets::load(config.assets.tree.as_deref(), config.assets.text.as_deref())
            .context("failed to load concept assets")?;

        Ok(Self {
            config,
            config_path,
            assets,
            ui,
        })
    }

    /// Fresh session over the loaded tree with the configured expansion.
    pub fn session(&self) -> Session {
        Session::new(self.assets.tree.clone()).with_expanded(self.config.view.expanded.clone())
    }
}

/// Click the checkbox at each route in order. Invalid routes are no-ops.
pub fn apply_toggles(mut session: Session, toggles: &[Route]) -> Session {
    for route in toggles {
        session.apply(route, Interaction::Checkbox);
    }
    session
}

#[cfg(test)]
mod tests {
    use super::*;
    use concept_engine::{ConceptNode, ConceptTree};

    #[test]
    fn toggles_apply_in_order() {
        let session = Session::new(ConceptTree::new(vec![ConceptNode::new("a", "A")
            .with_children(vec![ConceptNode::new("a1", "A1").with_require(["x"])])]));

        let toggled = apply_toggles(
            session,
            &[Route::new(vec![0, 0]), Route::new(vec![5]), Route::new(vec![0])],
        );

        assert!(!toggled.tree().roots[0].checked);
        assert!(toggled.tree().roots[0].children()[0].checked);
        assert!(toggled.fragment_ids().is_empty());
    }
}
