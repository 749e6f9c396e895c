//! Turn resolution and automated play.
//!
//! This module drives the data structures in [`crate::core`]:
//!
//! - [`Game`] - Both grids, the turn, the pending die, and move validation
//! - [`Dice`] / [`DiceSeed`] - Seedable source of rolls and the opening coin flip
//! - [`MovePolicy`] - Column choice for automated players
//! - [`play_turn`] / [`play_out`] - Run one turn or a whole match with policies
//!
//! # Turn Flow
//!
//! 1. The driver reads [`Game::available_moves`] for the active player
//! 2. A column is chosen, by a person or a [`MovePolicy`]
//! 3. [`Game::player_move`] places the die and negates the opponent's column
//! 4. A new die is rolled and the turn passes, unless a grid just filled
//!
//! # Example
//!
//! ```
//! use knucklebones_engine::{DiceSeed, Game, RandomPolicy, play_out};
//!
//! let mut game = Game::with_seed(DiceSeed::from_u64(7));
//! let mut policies = [RandomPolicy::with_seed(1), RandomPolicy::with_seed(2)];
//! let record = play_out(&mut game, &mut policies).unwrap();
//!
//! assert!(game.game_over());
//! assert_eq!(record.scores, game.scores());
//! ```

pub use self::{dice::*, game::*, playout::*, policy::*};

mod dice;
mod game;
mod playout;
mod policy;
