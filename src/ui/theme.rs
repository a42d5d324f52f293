use crossterm::style::Color;

/// Design tokens for the terminal UI.
///
/// Design constraints:
/// - Only 5 semantic colors (`colors::*`)
/// - All icons and separators must be sourced from this module
pub mod colors {
    use super::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
    pub const INFO: Color = Color::Cyan;
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const CURSOR: &str = "❯";

    // Checkbox states.
    pub const CHECKED: &str = "●";
    pub const UNCHECKED: &str = "○";

    // Children of an exclusive parent.
    pub const RADIO_ON: &str = "◉";
    pub const RADIO_OFF: &str = "◯";

    // Tree expansion.
    pub const EXPANDED: &str = "▼";
    pub const COLLAPSED: &str = "▶";

    pub const TOOLTIP: &str = "ℹ";
    pub const COPY: &str = "📋";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const CURSOR: &str = ">";

    pub const CHECKED: &str = "[x]";
    pub const UNCHECKED: &str = "[ ]";

    pub const RADIO_ON: &str = "(*)";
    pub const RADIO_OFF: &str = "( )";

    pub const EXPANDED: &str = "v";
    pub const COLLAPSED: &str = ">";

    pub const TOOLTIP: &str = "[i]";
    pub const COPY: &str = "[COPY]";
}

pub mod separators {
    pub const HORIZONTAL: &str = "─";
    pub const HORIZONTAL_ASCII: &str = "-";
}

/// Horizontal rule of `width` cells.
pub fn rule(width: usize, supports_unicode: bool) -> String {
    let unit = if supports_unicode {
        separators::HORIZONTAL
    } else {
        separators::HORIZONTAL_ASCII
    };
    unit.repeat(width)
}
