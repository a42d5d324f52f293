use anyhow::Result;
use concept_engine::domain::{visible_rows, Expansion};
use concept_engine::Route;
use serde_json::json;

use super::{apply_toggles, Workspace};
use crate::ui::views::outline::render_outline;

pub fn cmd_tree(workspace: &Workspace, toggles: &[Route]) -> Result<()> {
    let session = apply_toggles(workspace.session(), toggles);
    let rows = visible_rows(
        session.tree(),
        Expansion::All,
        workspace.config.max_depth(),
    );
    let ids = session.fragment_ids();

    if workspace.ui.json {
        crate::ui::json::emit(&json!({
            "rows": rows,
            "ids": ids,
        }))?;
        return Ok(());
    }

    print!("{}", render_outline(&rows, ids.len(), &workspace.ui));
    Ok(())
}
