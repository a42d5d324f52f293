//! ConceptMenu state management and action handling.
//!
//! The menu owns the session and a cursor over the visible rows. Every
//! click is delegated to [`Session::apply`].

use concept_engine::domain::{compose, visible_rows, Expansion, FragmentDictionary, OutlineRow};
use concept_engine::{Interaction, Session};
use unicode_width::UnicodeWidthStr;

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::{truncate_to_width, ColoredText, SemanticColor};
use crate::ui::theme;
use crate::ui::views::output::text_pane_lines;

use super::render::{render_help_bar, render_row, render_tooltip, Marker};

/// Menu action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeAction {
    /// Move cursor up
    Up,
    /// Move cursor down
    Down,
    /// Click the checkbox of the current row
    Toggle,
    /// Click the current row itself
    Activate,
    /// Open the current row
    Expand,
    /// Close the current row, or jump to its parent
    Collapse,
    /// Copy the composed text
    Copy,
    /// Leave the menu
    Quit,
}

/// What the caller has to do after an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuOutcome {
    Continue,
    /// Put this text on the clipboard
    Copy(String),
    Quit,
}

/// Status line shown below the text output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub success: bool,
}

pub struct ConceptMenu<'a> {
    session: Session,
    fragments: &'a FragmentDictionary,
    max_depth: usize,
    cursor: usize,
    rows: Vec<OutlineRow>,
    notice: Option<Notice>,
}

impl<'a> ConceptMenu<'a> {
    pub fn new(session: Session, fragments: &'a FragmentDictionary, max_depth: usize) -> Self {
        let mut menu = Self {
            session,
            fragments,
            max_depth,
            cursor: 0,
            rows: Vec::new(),
            notice: None,
        };
        menu.rebuild_rows();
        menu
    }

    /// Recompute visible rows and keep the cursor on the selected node.
    fn rebuild_rows(&mut self) {
        self.rows = visible_rows(
            self.session.tree(),
            Expansion::Keys(self.session.expanded()),
            self.max_depth,
        );

        if let Some(selected) = self.session.selected() {
            if let Some(pos) = self.rows.iter().position(|r| r.route.key() == selected) {
                self.cursor = pos;
            }
        }
        if !self.rows.is_empty() && self.cursor >= self.rows.len() {
            self.cursor = self.rows.len() - 1;
        }
    }

    pub fn rows(&self) -> &[OutlineRow] {
        &self.rows
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor
    }

    pub fn current_row(&self) -> Option<&OutlineRow> {
        self.rows.get(self.cursor)
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn set_notice(&mut self, message: impl Into<String>, success: bool) {
        self.notice = Some(Notice {
            message: message.into(),
            success,
        });
    }

    /// Clipboard payload for the current selection
    pub fn copy_text(&self) -> String {
        let ids = self.session.fragment_ids();
        compose(self.fragments, &ids).copy_text()
    }

    /// Handle a menu action
    pub fn handle_action(&mut self, action: TreeAction) -> MenuOutcome {
        if action != TreeAction::Copy {
            self.notice = None;
        }

        match action {
            TreeAction::Up => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            TreeAction::Down => {
                if self.cursor + 1 < self.rows.len() {
                    self.cursor += 1;
                }
            }
            TreeAction::Toggle => self.interact(Interaction::Checkbox),
            TreeAction::Activate => self.interact(Interaction::Row),
            TreeAction::Expand => {
                if self
                    .current_row()
                    .is_some_and(|r| r.has_children && !r.expanded)
                {
                    self.interact(Interaction::Row);
                }
            }
            TreeAction::Collapse => {
                let Some((expanded, parent)) =
                    self.current_row().map(|r| (r.expanded, r.route.parent()))
                else {
                    return MenuOutcome::Continue;
                };
                if expanded {
                    self.interact(Interaction::Row);
                } else if let Some(parent) = parent {
                    if let Some(pos) = self.rows.iter().position(|r| r.route == parent) {
                        self.cursor = pos;
                    }
                }
            }
            TreeAction::Copy => return MenuOutcome::Copy(self.copy_text()),
            TreeAction::Quit => return MenuOutcome::Quit,
        }
        MenuOutcome::Continue
    }

    fn interact(&mut self, interaction: Interaction) {
        let Some(route) = self.current_row().map(|r| r.route.clone()) else {
            return;
        };
        self.session.apply(&route, interaction);
        self.rebuild_rows();
    }

    /// Render the whole screen, one terminal line per `\n`.
    ///
    /// The header, the rows around the cursor, the notice and the help bar
    /// always fit in `ctx.caps.height`. Only the text pane is clipped.
    pub fn render(&self, ctx: &UiContext) -> String {
        let width = ctx.width();
        let rule = theme::rule(width.min(100), ctx.unicode);

        let header = vec![
            ColoredText::colored("Configuration Engine", SemanticColor::Info)
                .bold()
                .render(ctx.color),
            String::new(),
        ];

        let tooltip = render_tooltip(self.current_row(), ctx);
        let tooltip = (!tooltip.is_empty()).then_some(tooltip);

        let mut footer = vec![rule.clone()];
        if let Some(notice) = &self.notice {
            footer.push(render_notice(notice, ctx));
        }
        footer.extend(
            render_help_bar(ctx.unicode)
                .lines()
                .map(|line| truncate_to_width(line, width, ctx.unicode)),
        );

        // Header, tooltip, the rule under the tree, and the footer
        let fixed = header.len() + usize::from(tooltip.is_some()) + 1 + footer.len();
        let rest = usize::from(ctx.caps.height).saturating_sub(fixed);

        let tree_budget = rest
            .saturating_sub(MIN_PANE_LINES)
            .max(1)
            .min(self.rows.len())
            .min(rest);
        let first = self
            .cursor
            .saturating_sub(tree_budget / 2)
            .min(self.rows.len() - tree_budget);

        let mut lines = header;
        for (offset, row) in self.rows[first..first + tree_budget].iter().enumerate() {
            let marker = if first + offset == self.cursor {
                Marker::Active
            } else {
                Marker::Inactive
            };
            lines.push(render_row(row, marker, ctx));
        }
        lines.extend(tooltip);
        lines.push(rule);

        let ids = self.session.fragment_ids();
        let composed = compose(self.fragments, &ids);
        lines.extend(clip_pane(
            text_pane_lines(&composed, ctx),
            rest - tree_budget,
            ctx,
        ));

        lines.extend(footer);
        lines.join("\n")
    }
}

/// Lines the text pane keeps before the tree gets more room
const MIN_PANE_LINES: usize = 3;

fn render_notice(notice: &Notice, ctx: &UiContext) -> String {
    let (icon, color) = if notice.success {
        (Icon::Success, SemanticColor::Success)
    } else {
        (Icon::Warning, SemanticColor::Warning)
    };
    let message = truncate_to_width(
        &notice.message,
        ctx.width().saturating_sub(icon.render(ctx.unicode).width() + 1),
        ctx.unicode,
    );
    format!(
        "{} {}",
        icon.colored(ctx.color, ctx.unicode),
        ColoredText::colored(message, color).render(ctx.color)
    )
}

/// Keep at most `budget` pane lines, ending with a count of the hidden ones.
fn clip_pane(mut lines: Vec<String>, budget: usize, ctx: &UiContext) -> Vec<String> {
    while lines.last().is_some_and(String::is_empty) {
        lines.pop();
    }
    if lines.len() <= budget {
        return lines;
    }
    if budget == 0 {
        return Vec::new();
    }

    let hidden = lines.len() - (budget - 1);
    lines.truncate(budget - 1);
    let ellipsis = if ctx.unicode { "…" } else { "..." };
    lines.push(
        ColoredText::colored(format!("{ellipsis} {hidden} more lines"), SemanticColor::Dim)
            .render(ctx.color),
    );
    lines
}
