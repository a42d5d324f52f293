use concept_engine::domain::ComposedText;

use crate::ui::context::UiContext;
use crate::ui::primitives::text::{truncate_to_width, wrap_to_width, ColoredText, SemanticColor};

/// Shown in place of the text when nothing is selected
pub const EMPTY_PLACEHOLDER: &str = "Check a concept to see its text here.";

/// Render composed text: bold title, body, blank line per section.
pub fn render_text_output(composed: &ComposedText<'_>, ctx: &UiContext) -> String {
    let mut out = String::new();
    out.push_str(&ColoredText::plain("Text output:").bold().render(ctx.color));
    out.push_str("\n\n");

    if composed.is_empty() {
        out.push_str(&ColoredText::colored(EMPTY_PLACEHOLDER, SemanticColor::Dim).render(ctx.color));
        out.push_str("\n\n");
        return out;
    }

    for section in &composed.sections {
        out.push_str(&ColoredText::plain(section.title).bold().render(ctx.color));
        out.push('\n');
        out.push_str(section.text);
        out.push_str("\n\n");
    }
    out
}

/// The same output as [`render_text_output`], split into screen lines.
/// Titles are cut and bodies wrapped to the context width.
pub fn text_pane_lines(composed: &ComposedText<'_>, ctx: &UiContext) -> Vec<String> {
    let width = ctx.width();
    let mut lines = vec![
        ColoredText::plain("Text output:").bold().render(ctx.color),
        String::new(),
    ];

    if composed.is_empty() {
        let placeholder = truncate_to_width(EMPTY_PLACEHOLDER, width, ctx.unicode);
        lines.push(ColoredText::colored(placeholder, SemanticColor::Dim).render(ctx.color));
        return lines;
    }

    for section in &composed.sections {
        let title = truncate_to_width(section.title, width, ctx.unicode);
        lines.push(ColoredText::plain(title).bold().render(ctx.color));
        lines.extend(wrap_to_width(section.text, width));
        lines.push(String::new());
    }
    lines
}
