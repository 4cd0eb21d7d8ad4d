//! Color constants and styles for the quiz TUI

use crate::scoring::Dimension;
use ratatui::prelude::*;

pub const TITLE_COLOR: Color = Color::Magenta;
pub const MUTED: Color = Color::Gray;
pub const TEXT: Color = Color::White;

pub const PROGRESS_FILLED: Color = Color::Magenta;
pub const PROGRESS_EMPTY: Color = Color::Indexed(238);

pub const OPTION_SELECTED: Style = Style::new()
    .fg(Color::White)
    .bg(Color::Indexed(54))
    .add_modifier(Modifier::BOLD);
pub const OPTION_INDEX: Color = Color::LightMagenta;

pub const CODE_STYLE: Style = Style::new()
    .fg(Color::White)
    .bg(Color::Magenta)
    .add_modifier(Modifier::BOLD);

pub const ERROR_COLOR: Color = Color::Red;

pub const STATUS_BAR_BG: Color = Color::Indexed(236);
pub const STATUS_KEY_COLOR: Color = Color::LightMagenta;
pub const FLASH_SUCCESS: Color = Color::Green;
pub const FLASH_ERROR: Color = Color::Red;

/// Accent per result card: purple, pink, blue, indigo
pub fn dimension_color(dimension: Dimension) -> Color {
    match dimension {
        Dimension::Energy => Color::Magenta,
        Dimension::Information => Color::LightMagenta,
        Dimension::Decisions => Color::Blue,
        Dimension::Lifestyle => Color::Indexed(63),
    }
}
