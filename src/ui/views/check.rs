use std::path::Path;

use concept_engine::ConceptError;

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::{ColoredText, SemanticColor};

/// Asset sizes shown above the problem list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetStats {
    pub concepts: usize,
    pub depth: usize,
    pub fragments: usize,
}

/// `config` is the file the settings came from, `None` for built-in defaults.
pub fn render_check_report(
    stats: AssetStats,
    config: Option<&Path>,
    problems: &[ConceptError],
    ctx: &UiContext,
) -> String {
    let config = config.map_or_else(
        || "built-in defaults".to_string(),
        |path| path.display().to_string(),
    );

    let mut out = String::new();
    out.push_str(&ColoredText::plain("Concept Engine Check").bold().render(ctx.color));
    out.push('\n');
    out.push_str(&format!("  Config:    {config}\n"));
    out.push_str(&format!(
        "  Concepts:  {}\n  Depth:     {}\n  Fragments: {}\n\n",
        stats.concepts, stats.depth, stats.fragments
    ));

    for problem in problems {
        out.push_str(&format!(
            "{} {}\n",
            Icon::Error.colored(ctx.color, ctx.unicode),
            problem
        ));
    }
    if !problems.is_empty() {
        out.push('\n');
    }

    let summary = if problems.is_empty() {
        format!(
            "{} {}",
            Icon::Success.colored(ctx.color, ctx.unicode),
            ColoredText::colored("All checks passed", SemanticColor::Success).render(ctx.color)
        )
    } else {
        let noun = if problems.len() == 1 { "problem" } else { "problems" };
        format!(
            "{} {}",
            Icon::Error.colored(ctx.color, ctx.unicode),
            ColoredText::colored(
                format!("Check FAILED: {} {}", problems.len(), noun),
                SemanticColor::Error
            )
            .render(ctx.color)
        )
    };
    out.push_str(&summary);
    out.push('\n');
    out
}
