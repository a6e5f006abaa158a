use ratatui::{layout::Rect, widgets::Block as BlockWidget};

pub use self::{board_display::*, key_binding_display::*};

mod board_display;
mod key_binding_display;

mod color {
    use ratatui::style::Color;

    pub const BOARD: Color = Color::Rgb(222, 184, 135);
    pub const GRID: Color = Color::Rgb(120, 90, 50);
    pub const BLACK: Color = Color::Rgb(0, 0, 0);
    pub const WHITE: Color = Color::Rgb(255, 255, 255);
    pub const GRAY: Color = Color::Rgb(127, 127, 127);
    pub const CURSOR: Color = Color::Rgb(90, 140, 200);
    pub const RED: Color = Color::Rgb(220, 40, 40);
    pub const YELLOW: Color = Color::Rgb(255, 215, 0);
}

pub mod style {
    use ratatui::style::{Color, Modifier, Style};

    use super::color;

    const fn fg_bg(fg: Color, bg: Color) -> Style {
        Style::new().fg(fg).bg(bg)
    }

    pub const DEFAULT: Style = fg_bg(color::WHITE, color::BLACK);
    pub const BOARD: Style = fg_bg(color::GRID, color::BOARD);
    pub const CURSOR: Style = Style::new().bg(color::CURSOR);
    pub const HUMAN: Style = Style::new().fg(color::BLACK);
    pub const AI: Style = Style::new().fg(color::WHITE);
    pub const MARKER: Style = Style::new().fg(color::RED).add_modifier(Modifier::BOLD);
    pub const REMOVING: Style = Style::new().fg(color::RED).add_modifier(Modifier::SLOW_BLINK);
    pub const HINT: Style = Style::new().fg(color::GRAY);
    pub const GAME_OVER: Style = fg_bg(color::BLACK, color::YELLOW);
}

fn block_vertical_margin(block: Option<&BlockWidget>) -> u16 {
    let dummy_rect = Rect::new(0, 0, 100, 100);
    let inner_rect = block.map_or(dummy_rect, |block| block.inner(dummy_rect));
    dummy_rect.height - inner_rect.height
}

fn block_horizontal_margin(block: Option<&BlockWidget>) -> u16 {
    let dummy_rect = Rect::new(0, 0, 100, 100);
    let inner_rect = block.map_or(dummy_rect, |block| block.inner(dummy_rect));
    dummy_rect.width - inner_rect.width
}
