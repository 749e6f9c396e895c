pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("die face must be between 1 and 6, got {value}")]
pub struct InvalidFaceError {
    value: u8,
}

impl InvalidFaceError {
    /// Returns the rejected value.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.value
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("no empty slot left in column")]
pub struct ColumnFullError;

/// Reasons a move is rejected.
///
/// A rejected move never changes the game state.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::IsVariant,
)]
pub enum MoveError {
    #[display("game is already over")]
    GameOver,
    #[display("column {column} is out of range")]
    InvalidColumn { column: usize },
    #[display("column {column} is full")]
    ColumnFull { column: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MatchError {
    #[display("{player} policy did not choose a column")]
    NoMoveChosen { player: Player },
    #[display("{player} policy chose an illegal column: {source}")]
    IllegalMove { player: Player, source: MoveError },
}
