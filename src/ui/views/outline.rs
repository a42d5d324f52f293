use concept_engine::domain::OutlineRow;

use crate::ui::context::UiContext;
use crate::ui::primitives::text::{ColoredText, SemanticColor};
use crate::ui::widgets::concept_tree::render::render_rows;

/// Static outline for the `tree` command
pub fn render_outline(rows: &[OutlineRow], fragment_count: usize, ctx: &UiContext) -> String {
    let mut out = render_rows(rows, None, ctx);
    let checked = rows.iter().filter(|r| r.checked).count();
    out.push('\n');
    out.push_str(
        &ColoredText::colored(
            format!(
                "{} of {} concepts checked, {} text fragments selected",
                checked,
                rows.len(),
                fragment_count
            ),
            SemanticColor::Dim,
        )
        .render(ctx.color),
    );
    out.push('\n');
    out
}
