use anyhow::Result;
use concept_engine::domain::validate;
use serde_json::json;

use super::Workspace;
use crate::ui::views::check::{render_check_report, AssetStats};

/// Validate the loaded assets. Returns `false` when problems were found.
pub fn cmd_check(workspace: &Workspace) -> Result<bool> {
    let tree = &workspace.assets.tree;
    let fragments = &workspace.assets.fragments;
    let problems = validate(tree, fragments, workspace.config.max_depth());

    let stats = AssetStats {
        concepts: count_nodes(&tree.roots),
        depth: tree.depth(),
        fragments: fragments.len(),
    };

    if workspace.ui.json {
        let items: Vec<_> = problems
            .iter()
            .map(|p| json!({ "kind": p.kind(), "message": p.to_string() }))
            .collect();
        crate::ui::json::emit(&json!({
            "config": workspace.config_path,
            "concepts": stats.concepts,
            "depth": stats.depth,
            "fragments": stats.fragments,
            "problems": items,
            "success": problems.is_empty(),
        }))?;
    } else {
        let report = render_check_report(
            stats,
            workspace.config_path.as_deref(),
            &problems,
            &workspace.ui,
        );
        print!("{report}");
    }

    Ok(problems.is_empty())
}

fn count_nodes(nodes: &[concept_engine::ConceptNode]) -> usize {
    nodes
        .iter()
        .map(|n| 1 + count_nodes(n.children()))
        .sum()
}
