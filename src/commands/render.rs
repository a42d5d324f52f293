use anyhow::Result;
use concept_engine::{compose, Route};
use serde_json::json;

use super::{apply_toggles, Workspace};
use crate::ui::views::output::render_text_output;

pub fn cmd_render(workspace: &Workspace, toggles: &[Route]) -> Result<()> {
    let session = apply_toggles(workspace.session(), toggles);
    let ids = session.fragment_ids();
    let composed = compose(&workspace.assets.fragments, &ids);

    if workspace.ui.json {
        crate::ui::json::emit(&json!({
            "ids": ids,
            "sections": &composed.sections,
            "missing": &composed.missing,
            "copy_text": composed.copy_text(),
        }))?;
        return Ok(());
    }

    print!("{}", render_text_output(&composed, &workspace.ui));
    Ok(())
}
