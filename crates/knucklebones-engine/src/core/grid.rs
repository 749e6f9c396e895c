use arrayvec::ArrayVec;

use crate::{Column, Face, MoveError};

/// Number of columns in a player's grid.
pub const GRID_COLUMNS: usize = 3;

/// Column indices a player may place into, in ascending order.
pub type Moves = ArrayVec<usize, GRID_COLUMNS>;

/// A player's board: three independent [`Column`]s, indexed `0..3`.
///
/// The grid is full when every column is full, which ends the game.
///
/// # Example
///
/// ```
/// use knucklebones_engine::{Face, Grid};
///
/// let mut grid = Grid::EMPTY;
/// grid.add_die(1, Face::SIX).unwrap();
/// assert_eq!(grid.score(), 6);
/// assert_eq!(grid.possible_moves().as_slice(), &[0, 1, 2]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Grid {
    columns: [Column; GRID_COLUMNS],
}

impl Grid {
    pub const EMPTY: Self = Self {
        columns: [Column::EMPTY; GRID_COLUMNS],
    };

    #[must_use]
    pub const fn from_columns(columns: [Column; GRID_COLUMNS]) -> Self {
        Self { columns }
    }

    #[must_use]
    pub const fn columns(&self) -> &[Column; GRID_COLUMNS] {
        &self.columns
    }

    #[must_use]
    pub fn column(&self, index: usize) -> Option<&Column> {
        self.columns.get(index)
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.columns.iter().all(Column::is_full)
    }

    /// Returns the total number of dice on the grid.
    #[must_use]
    pub fn dice_count(&self) -> usize {
        self.columns.iter().map(Column::len).sum()
    }

    /// Places a die into the given column.
    pub fn add_die(&mut self, column: usize, face: Face) -> Result<(), MoveError> {
        self.columns
            .get_mut(column)
            .ok_or(MoveError::InvalidColumn { column })?
            .add_die(face)
            .map_err(|_| MoveError::ColumnFull { column })
    }

    /// Returns the indices of every column that still has room.
    ///
    /// The list is empty exactly when the grid is full.
    #[must_use]
    pub fn possible_moves(&self) -> Moves {
        self.columns
            .iter()
            .enumerate()
            .filter(|(_, column)| !column.is_full())
            .map(|(index, _)| index)
            .collect()
    }

    #[must_use]
    pub fn column_scores(&self) -> [u32; GRID_COLUMNS] {
        self.columns.map(|column| column.score())
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.columns.iter().map(Column::score).sum()
    }

    /// Removes every die showing `face` from the given column.
    ///
    /// Returns the number of dice removed; an out-of-range index removes
    /// nothing.
    pub fn negate(&mut self, column: usize, face: Face) -> usize {
        self.columns
            .get_mut(column)
            .map_or(0, |column| column.negate(face))
    }
}
