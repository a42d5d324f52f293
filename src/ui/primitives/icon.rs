use crossterm::style::Stylize;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Cursor,
    Checked,
    Unchecked,
    RadioOn,
    RadioOff,
    Expanded,
    Collapsed,
    Tooltip,
    Copy,
}

impl Icon {
    /// Checkbox icon for a row; rows under an exclusive parent use radio icons.
    pub fn checkbox(checked: bool, exclusive: bool) -> Self {
        match (exclusive, checked) {
            (true, true) => Icon::RadioOn,
            (true, false) => Icon::RadioOff,
            (false, true) => Icon::Checked,
            (false, false) => Icon::Unchecked,
        }
    }

    pub fn render(&self, supports_unicode: bool) -> &'static str {
        use theme::{icons, icons_ascii};

        match (supports_unicode, self) {
            (true, Icon::Success) => icons::SUCCESS,
            (true, Icon::Error) => icons::ERROR,
            (true, Icon::Warning) => icons::WARNING,
            (true, Icon::Cursor) => icons::CURSOR,
            (true, Icon::Checked) => icons::CHECKED,
            (true, Icon::Unchecked) => icons::UNCHECKED,
            (true, Icon::RadioOn) => icons::RADIO_ON,
            (true, Icon::RadioOff) => icons::RADIO_OFF,
            (true, Icon::Expanded) => icons::EXPANDED,
            (true, Icon::Collapsed) => icons::COLLAPSED,
            (true, Icon::Tooltip) => icons::TOOLTIP,
            (true, Icon::Copy) => icons::COPY,
            (false, Icon::Success) => icons_ascii::SUCCESS,
            (false, Icon::Error) => icons_ascii::ERROR,
            (false, Icon::Warning) => icons_ascii::WARNING,
            (false, Icon::Cursor) => icons_ascii::CURSOR,
            (false, Icon::Checked) => icons_ascii::CHECKED,
            (false, Icon::Unchecked) => icons_ascii::UNCHECKED,
            (false, Icon::RadioOn) => icons_ascii::RADIO_ON,
            (false, Icon::RadioOff) => icons_ascii::RADIO_OFF,
            (false, Icon::Expanded) => icons_ascii::EXPANDED,
            (false, Icon::Collapsed) => icons_ascii::COLLAPSED,
            (false, Icon::Tooltip) => icons_ascii::TOOLTIP,
            (false, Icon::Copy) => icons_ascii::COPY,
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Success | Icon::Checked | Icon::RadioOn => theme::colors::SUCCESS,
            Icon::Error => theme::colors::ERROR,
            Icon::Warning => theme::colors::WARNING,
            Icon::Cursor | Icon::Tooltip | Icon::Copy => theme::colors::INFO,
            Icon::Unchecked | Icon::RadioOff | Icon::Expanded | Icon::Collapsed => {
                theme::colors::DIM
            }
        };
        format!("{}", s.with(color))
    }
}
