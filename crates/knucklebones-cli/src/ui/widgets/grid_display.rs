use std::iter;

use knucklebones_engine::{COLUMN_CAPACITY, GRID_COLUMNS, Grid};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    text::Line,
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};

use crate::ui::widgets::{DieDisplay, style};

/// One player's 3x3 grid with the column scores along its outer edge.
///
/// A flipped grid draws its first slot at the bottom so both players' dice
/// stack outward from the center of the table.
#[derive(Debug)]
pub struct GridDisplay<'a> {
    grid: &'a Grid,
    flipped: bool,
    highlight: Option<usize>,
    block: Option<BlockWidget<'a>>,
}

impl<'a> GridDisplay<'a> {
    pub fn new(grid: &'a Grid) -> Self {
        Self {
            grid,
            flipped: false,
            highlight: None,
            block: None,
        }
    }

    pub fn flipped(self, flipped: bool) -> Self {
        Self { flipped, ..self }
    }

    /// Marks the score of `column`, typically the last column played.
    pub fn highlight(self, column: Option<usize>) -> Self {
        Self {
            highlight: column,
            ..self
        }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub fn width(&self) -> u16 {
        cells_width() + super::block_horizontal_margin(self.block.as_ref())
    }

    pub fn height(&self) -> u16 {
        cells_height() + 1 + super::block_vertical_margin(self.block.as_ref())
    }
}

#[expect(clippy::cast_possible_truncation)]
const fn cells_width() -> u16 {
    GRID_COLUMNS as u16 * (DieDisplay::width() + 1) - 1
}

#[expect(clippy::cast_possible_truncation)]
const fn cells_height() -> u16 {
    COLUMN_CAPACITY as u16 * (DieDisplay::height() + 1) - 1
}

impl Widget for GridDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &GridDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let vertical = if self.flipped {
            [Constraint::Length(1), Constraint::Length(cells_height())]
        } else {
            [Constraint::Length(cells_height()), Constraint::Length(1)]
        };
        let [first, second] = Layout::vertical(vertical).areas(area);
        let (cells_area, score_area) = if self.flipped {
            (second, first)
        } else {
            (first, second)
        };

        let horizontal = Layout::horizontal([Constraint::Length(DieDisplay::width()); GRID_COLUMNS])
            .flex(Flex::Center)
            .spacing(1);
        let rows = Layout::vertical([Constraint::Length(DieDisplay::height()); COLUMN_CAPACITY])
            .spacing(1);

        let column_areas = cells_area.layout::<GRID_COLUMNS>(&horizontal);
        let score_areas = score_area.layout::<GRID_COLUMNS>(&horizontal);
        let scores = self.grid.column_scores();

        for (index, column) in self.grid.columns().iter().enumerate() {
            let counts = column.die_counts();
            let mut cells = column_areas[index].layout::<COLUMN_CAPACITY>(&rows);
            if self.flipped {
                cells.reverse();
            }
            for (cell, slot) in iter::zip(cells, column.slots()) {
                DieDisplay::from_slot(*slot, &counts).render(cell, buf);
            }

            let score_style = if self.highlight == Some(index) {
                style::LAST_MOVE
            } else {
                style::DEFAULT
            };
            Line::styled(scores[index].to_string(), score_style)
                .centered()
                .render(score_areas[index], buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use knucklebones_engine::Face;

    use super::*;

    fn render(display: &GridDisplay<'_>) -> Buffer {
        let area = Rect::new(0, 0, display.width(), display.height());
        let mut buf = Buffer::empty(area);
        display.render(area, &mut buf);
        buf
    }

    fn rows_of(buf: &Buffer, symbol: &str) -> Vec<u16> {
        buf.area
            .positions()
            .filter(|pos| buf[(pos.x, pos.y)].symbol() == symbol)
            .map(|pos| pos.y)
            .collect()
    }

    fn sample_grid() -> Grid {
        let mut grid = Grid::EMPTY;
        grid.add_die(0, Face::SIX).unwrap();
        grid.add_die(0, Face::TWO).unwrap();
        grid
    }

    #[test]
    fn test_size_without_block() {
        let grid = Grid::EMPTY;
        let display = GridDisplay::new(&grid);
        assert_eq!(display.width(), 17);
        assert_eq!(display.height(), 12);
    }

    #[test]
    fn test_size_with_border() {
        let grid = Grid::EMPTY;
        let display = GridDisplay::new(&grid).block(BlockWidget::bordered());
        assert_eq!(display.width(), 19);
        assert_eq!(display.height(), 14);
    }

    #[test]
    fn test_first_slot_sits_at_top() {
        let grid = sample_grid();
        let buf = render(&GridDisplay::new(&grid));
        let six = rows_of(&buf, "6");
        let two = rows_of(&buf, "2");
        assert_eq!(six, vec![1]);
        assert_eq!(two, vec![5]);
        // column score 6 + 2
        assert_eq!(rows_of(&buf, "8"), vec![11]);
    }

    #[test]
    fn test_flipped_grid_stacks_upward() {
        let grid = sample_grid();
        let buf = render(&GridDisplay::new(&grid).flipped(true));
        assert_eq!(rows_of(&buf, "6"), vec![10]);
        assert_eq!(rows_of(&buf, "2"), vec![6]);
        assert_eq!(rows_of(&buf, "8"), vec![0]);
    }

    #[test]
    fn test_highlighted_score() {
        let grid = sample_grid();
        let buf = render(&GridDisplay::new(&grid).highlight(Some(0)));
        assert_eq!(buf[(2, 11)].symbol(), "8");
        assert_eq!(buf[(2, 11)].fg, style::LAST_MOVE.fg.unwrap());
    }
}
