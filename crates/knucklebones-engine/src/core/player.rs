use rand::{
    Rng,
    distr::{Distribution, StandardUniform},
};
use serde::{Deserialize, Serialize};

/// One of the two seats at the table.
///
/// `First` is index 0 and `Second` is index 1.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    derive_more::Display,
    derive_more::IsVariant,
    Serialize,
    Deserialize,
)]
pub enum Player {
    #[display("player 0")]
    First,
    #[display("player 1")]
    Second,
}

impl Player {
    pub const ALL: [Self; 2] = [Self::First, Self::Second];

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
        }
    }

    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::First),
            1 => Some(Self::Second),
            _ => None,
        }
    }

    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }
}

/// Fair coin flip between the two players.
impl Distribution<Player> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Player {
        if rng.random() {
            Player::First
        } else {
            Player::Second
        }
    }
}
