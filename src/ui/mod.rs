//! Terminal presentation: capabilities, theme, primitives, widgets, views.

pub mod clipboard;
pub mod context;
pub mod json;
pub mod output;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
pub mod widgets;
