use ratatui::{layout::Rect, widgets::Block as BlockWidget};

pub use self::{die_display::*, game_display::*, grid_display::*};

mod die_display;
mod game_display;
mod grid_display;

mod color {
    use ratatui::style::Color;

    pub const YELLOW: Color = Color::Rgb(255, 255, 0);
    pub const ORANGE: Color = Color::Rgb(255, 127, 0);
    pub const RED: Color = Color::Rgb(255, 0, 0);
    pub const MAGENTA: Color = Color::Rgb(255, 0, 255);
    pub const GRAY: Color = Color::Rgb(127, 127, 127);
    pub const DARK_GRAY: Color = Color::Rgb(48, 48, 48);
    pub const BLACK: Color = Color::Rgb(0, 0, 0);
    pub const WHITE: Color = Color::Rgb(255, 255, 255);
}

pub mod style {
    use ratatui::style::{Color, Modifier, Style};

    use crate::ui::widgets::color;

    const fn fg_bg(fg: Color, bg: Color) -> Style {
        Style::new().fg(fg).bg(bg)
    }

    pub const DEFAULT: Style = fg_bg(color::WHITE, color::BLACK);
    pub const EMPTY_SLOT: Style = fg_bg(color::GRAY, color::DARK_GRAY);

    /// Dice styles indexed by how many dice in the column share the face.
    pub const SINGLE_DIE: Style = fg_bg(color::BLACK, color::WHITE);
    pub const PAIR_DIE: Style = fg_bg(color::BLACK, color::YELLOW).add_modifier(Modifier::BOLD);
    pub const TRIPLE_DIE: Style = fg_bg(color::WHITE, color::ORANGE).add_modifier(Modifier::BOLD);
    pub const PENDING_DIE: Style = fg_bg(color::BLACK, color::MAGENTA).add_modifier(Modifier::BOLD);

    pub const LAST_MOVE: Style = Style::new().fg(color::YELLOW).add_modifier(Modifier::BOLD);
    pub const HINT: Style = Style::new().fg(color::GRAY);
    pub const ERROR: Style = Style::new().fg(color::RED);
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
