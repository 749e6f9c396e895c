use knucklebones_engine::{DieCounts, Face};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::Style,
    widgets::{Paragraph, Widget},
};

use crate::ui::widgets::style;

const FACE_SYMBOLS: [&str; Face::LEN] = ["1", "2", "3", "4", "5", "6"];

/// One die slot, drawn as a filled box with the face in the middle.
#[derive(Debug, Clone, Copy)]
pub struct DieDisplay {
    style: Style,
    symbol: &'static str,
}

impl DieDisplay {
    pub const fn new(style: Style, symbol: &'static str) -> Self {
        Self { style, symbol }
    }

    pub const fn width() -> u16 {
        5
    }

    pub const fn height() -> u16 {
        3
    }

    pub const fn empty() -> Self {
        Self::new(style::EMPTY_SLOT, "·")
    }

    /// A placed die, emphasized by how many dice in its column show the same face.
    pub fn die(face: Face, matches: u8) -> Self {
        let style = match matches {
            0 | 1 => style::SINGLE_DIE,
            2 => style::PAIR_DIE,
            _ => style::TRIPLE_DIE,
        };
        Self::new(style, symbol(face))
    }

    /// The rolled die waiting to be placed.
    pub fn pending(face: Face) -> Self {
        Self::new(style::PENDING_DIE, symbol(face))
    }

    pub fn from_slot(slot: Option<Face>, counts: &DieCounts) -> Self {
        slot.map_or_else(Self::empty, |face| Self::die(face, counts.count(face)))
    }
}

fn symbol(face: Face) -> &'static str {
    FACE_SYMBOLS[usize::from(face.value() - Face::MIN)]
}

impl Widget for DieDisplay {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &DieDisplay {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, self.style);
        Paragraph::new(self.symbol)
            .style(self.style)
            .centered()
            .render(area.centered_vertically(Constraint::Length(1)), buf);
    }
}
