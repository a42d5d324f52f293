use anyhow::{bail, Result};

use super::Workspace;
use crate::ui::widgets::concept_tree::{run_interactive, ConceptMenu};

pub fn cmd_browse(workspace: &Workspace) -> Result<()> {
    if workspace.ui.json {
        bail!("browse is interactive; use 'render --json' or 'tree --json' for scripted output");
    }
    if !workspace.ui.caps.is_tty {
        bail!("browse needs an interactive terminal; try 'concept-engine tree' or 'concept-engine render'");
    }

    let mut menu = ConceptMenu::new(
        workspace.session(),
        &workspace.assets.fragments,
        workspace.config.max_depth(),
    );
    run_interactive(&mut menu, &workspace.ui)?;

    let text = menu.copy_text();
    if !text.is_empty() {
        print!("{text}");
    }
    Ok(())
}
