use crossterm::style::Stylize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SemanticColor {
    Success,
    Error,
    Warning,
    Info,
    Dim,
}

/// Text with an optional semantic color, rendered only when color is on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColoredText {
    text: String,
    color: Option<SemanticColor>,
    bold: bool,
}

impl ColoredText {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: None,
            bold: false,
        }
    }

    pub fn colored(text: impl Into<String>, color: SemanticColor) -> Self {
        Self {
            text: text.into(),
            color: Some(color),
            bold: false,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn render(&self, supports_color: bool) -> String {
        if !supports_color {
            return self.text.clone();
        }

        let color = match self.color {
            Some(SemanticColor::Success) => Some(theme::colors::SUCCESS),
            Some(SemanticColor::Error) => Some(theme::colors::ERROR),
            Some(SemanticColor::Warning) => Some(theme::colors::WARNING),
            Some(SemanticColor::Info) => Some(theme::colors::INFO),
            Some(SemanticColor::Dim) => Some(theme::colors::DIM),
            None => None,
        };

        let mut styled = self.text.as_str().stylize();
        if let Some(color) = color {
            styled = styled.with(color);
        }
        if self.bold {
            styled = styled.bold();
        }
        format!("{}", styled)
    }
}

/// Cut `text` to at most `max_width` terminal cells, marking the cut with
/// an ellipsis.
pub fn truncate_to_width(text: &str, max_width: usize, supports_unicode: bool) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }

    let ellipsis = if supports_unicode { "…" } else { "..." };
    let budget = max_width.saturating_sub(ellipsis.width());

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push_str(ellipsis);
    out
}

/// Greedy word wrap to `width` terminal cells. Embedded newlines start a
/// new line; a word wider than `width` is split by character.
pub fn wrap_to_width(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut line = String::new();
        let mut used = 0;

        for word in paragraph.split_whitespace() {
            let word_width = word.width();
            if used > 0 && used + 1 + word_width <= width {
                line.push(' ');
                line.push_str(word);
                used += 1 + word_width;
                continue;
            }
            if used > 0 {
                lines.push(std::mem::take(&mut line));
                used = 0;
            }
            if word_width <= width {
                line.push_str(word);
                used = word_width;
                continue;
            }
            for ch in word.chars() {
                let w = ch.width().unwrap_or(0);
                if used + w > width && used > 0 {
                    lines.push(std::mem::take(&mut line));
                    used = 0;
                }
                line.push(ch);
                used += w;
            }
        }
        lines.push(line);
    }
    lines
}
