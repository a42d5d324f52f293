//! Terminal rendering functions for the concept tree.
//!
//! This module renders outline rows, the tooltip line, and the help bar to
//! strings for terminal output.

use concept_engine::domain::OutlineRow;
use unicode_width::UnicodeWidthStr;

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::{truncate_to_width, ColoredText, SemanticColor};

/// Leading cursor column of a row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// No cursor column (static output)
    Hidden,
    Active,
    Inactive,
}

/// Render a single outline row to a string
pub fn render_row(row: &OutlineRow, marker: Marker, ctx: &UiContext) -> String {
    let cursor = match marker {
        Marker::Hidden => String::new(),
        Marker::Active => format!("{} ", Icon::Cursor.colored(ctx.color, ctx.unicode)),
        Marker::Inactive => String::from("  "),
    };
    let indent = "  ".repeat(row.depth);

    // Expansion icon (only for rows with children)
    let expand_icon = if row.has_children {
        let icon = if row.expanded {
            Icon::Expanded
        } else {
            Icon::Collapsed
        };
        format!("{} ", icon.colored(ctx.color, ctx.unicode))
    } else {
        String::from("  ")
    };

    let checkbox = Icon::checkbox(row.checked, row.exclusive_parent);

    // Cursor and expand columns are two cells each
    let prefix_width = match marker {
        Marker::Hidden => 0,
        Marker::Active | Marker::Inactive => 2,
    } + indent.len()
        + 2
        + checkbox.render(ctx.unicode).width()
        + 1;
    let title = truncate_to_width(
        &row.title,
        ctx.width().saturating_sub(prefix_width),
        ctx.unicode,
    );
    let title = if marker == Marker::Active {
        ColoredText::plain(title).bold().render(ctx.color)
    } else {
        title
    };

    format!(
        "{}{}{}{} {}",
        cursor,
        indent,
        expand_icon,
        checkbox.colored(ctx.color, ctx.unicode),
        title
    )
}

/// Render rows one per line
pub fn render_rows(rows: &[OutlineRow], cursor: Option<usize>, ctx: &UiContext) -> String {
    let mut out = String::new();
    for (i, row) in rows.iter().enumerate() {
        let marker = match cursor {
            None => Marker::Hidden,
            Some(c) if c == i => Marker::Active,
            Some(_) => Marker::Inactive,
        };
        out.push_str(&render_row(row, marker, ctx));
        out.push('\n');
    }
    out
}

/// Description of the row under the cursor, empty when it has none
pub fn render_tooltip(row: Option<&OutlineRow>, ctx: &UiContext) -> String {
    let Some(description) = row.and_then(|r| r.description.as_deref()) else {
        return String::new();
    };
    let icon = Icon::Tooltip.render(ctx.unicode);
    let text = truncate_to_width(
        description,
        ctx.width().saturating_sub(icon.width() + 1),
        ctx.unicode,
    );
    format!(
        "{} {}",
        Icon::Tooltip.colored(ctx.color, ctx.unicode),
        ColoredText::colored(text, SemanticColor::Dim).render(ctx.color)
    )
}

/// Render the help bar showing keyboard shortcuts
pub fn render_help_bar(supports_unicode: bool) -> String {
    let arrows = if supports_unicode {
        "(Use ↑↓ to navigate, →← to expand/collapse)"
    } else {
        "(Use Up/Down to navigate, Right/Left to expand/collapse)"
    };
    format!(
        "[Space] Toggle    [Enter] Open/Close    [c] Copy    [q] Quit\n{}",
        arrows
    )
}
