use serde::{Deserialize, Serialize};

use crate::{Dice, DiceSeed, Face, Grid, MoveError, Moves, Player};

/// Whether a game still accepts moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant, Serialize, Deserialize)]
pub enum GameState {
    InProgress,
    Over,
}

/// Final outcome of a finished game, decided by grid score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant, Serialize, Deserialize)]
pub enum GameResult {
    Winner(Player),
    Draw,
}

impl GameResult {
    fn from_scores(scores: [u32; 2]) -> Self {
        match scores[0].cmp(&scores[1]) {
            std::cmp::Ordering::Greater => Self::Winner(Player::First),
            std::cmp::Ordering::Less => Self::Winner(Player::Second),
            std::cmp::Ordering::Equal => Self::Draw,
        }
    }
}

/// What an accepted move did to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// Player who placed the die.
    pub player: Player,
    /// Column the die went into, on both grids.
    pub column: usize,
    /// Face that was placed.
    pub face: Face,
    /// Number of opponent dice removed from the same column.
    pub removed: usize,
    /// Whether this move filled a grid and ended the game.
    pub game_over: bool,
}

/// Starting position for [`Game::from_setup`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSetup {
    pub grids: [Grid; 2],
    pub turn: Player,
    pub pending_die: Face,
}

impl GameSetup {
    /// Empty grids with the given player to move and die to place.
    #[must_use]
    pub const fn new(turn: Player, pending_die: Face) -> Self {
        Self {
            grids: [Grid::EMPTY; 2],
            turn,
            pending_die,
        }
    }

    #[must_use]
    pub fn with_grid(mut self, player: Player, grid: Grid) -> Self {
        self.grids[player.index()] = grid;
        self
    }
}

/// A single match between two players.
///
/// The game owns both grids, whose turn it is, and the die waiting to be
/// placed. Each accepted [`Game::player_move`] places the die for the active
/// player, strips matching dice from the opponent's column, and then (unless
/// the move filled a grid) rolls a new die and passes the turn.
///
/// Once either grid is full the game is over: the turn and pending die are
/// frozen and every further move is rejected.
///
/// # Example
///
/// ```
/// use knucklebones_engine::Game;
///
/// let mut game = Game::new();
/// while !game.game_over() {
///     let column = game.available_moves()[0];
///     game.player_move(column).unwrap();
/// }
/// assert!(game.result().is_some());
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    grids: [Grid; 2],
    turn: Player,
    pending_die: Face,
    dice: Dice,
    move_count: usize,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Starts a new game with a random seed.
    #[must_use]
    pub fn new() -> Self {
        Self::from_dice(Dice::new())
    }

    /// Like [`Self::new`], but with a specific seed for reproducible games.
    #[must_use]
    pub fn with_seed(seed: DiceSeed) -> Self {
        Self::from_dice(Dice::with_seed(seed))
    }

    fn from_dice(mut dice: Dice) -> Self {
        let turn = dice.coin();
        let pending_die = dice.roll();
        Self::from_setup_with_dice(GameSetup::new(turn, pending_die), dice)
    }

    /// Starts from a given position. Later rolls come from `seed`.
    #[must_use]
    pub fn from_setup(setup: GameSetup, seed: DiceSeed) -> Self {
        Self::from_setup_with_dice(setup, Dice::with_seed(seed))
    }

    fn from_setup_with_dice(setup: GameSetup, dice: Dice) -> Self {
        let GameSetup {
            grids,
            turn,
            pending_die,
        } = setup;
        log::debug!("new game: seed {}, {turn} starts with a {pending_die}", dice.seed());
        Self {
            grids,
            turn,
            pending_die,
            dice,
            move_count: 0,
        }
    }

    #[must_use]
    pub const fn seed(&self) -> DiceSeed {
        self.dice.seed()
    }

    #[must_use]
    pub const fn grid(&self, player: Player) -> &Grid {
        &self.grids[player.index()]
    }

    #[must_use]
    pub const fn grids(&self) -> &[Grid; 2] {
        &self.grids
    }

    /// Returns the player who places the pending die.
    #[must_use]
    pub const fn turn(&self) -> Player {
        self.turn
    }

    #[must_use]
    pub const fn pending_die(&self) -> Face {
        self.pending_die
    }

    /// Returns the number of accepted moves so far.
    #[must_use]
    pub const fn move_count(&self) -> usize {
        self.move_count
    }

    #[must_use]
    pub fn state(&self) -> GameState {
        if self.game_over() {
            GameState::Over
        } else {
            GameState::InProgress
        }
    }

    #[must_use]
    pub fn game_over(&self) -> bool {
        self.grids.iter().any(Grid::is_full)
    }

    /// Columns the active player may place into; empty once the game is over.
    #[must_use]
    pub fn available_moves(&self) -> Moves {
        if self.game_over() {
            return Moves::new();
        }
        self.grid(self.turn).possible_moves()
    }

    #[must_use]
    pub fn valid_move(&self, column: usize) -> bool {
        self.check_move(column).is_ok()
    }

    /// Explains why a move would be rejected, without applying it.
    pub fn check_move(&self, column: usize) -> Result<(), MoveError> {
        if self.game_over() {
            return Err(MoveError::GameOver);
        }
        let target = self
            .grid(self.turn)
            .column(column)
            .ok_or(MoveError::InvalidColumn { column })?;
        if target.is_full() {
            return Err(MoveError::ColumnFull { column });
        }
        Ok(())
    }

    /// Plays the pending die into `column` for the active player.
    ///
    /// The opponent loses every die of the same face from their matching
    /// column. If neither grid is full afterwards, a new die is rolled and
    /// the turn passes; otherwise the game ends with the turn and die left
    /// as they were.
    ///
    /// A rejected move leaves the game untouched.
    pub fn player_move(&mut self, column: usize) -> Result<MoveOutcome, MoveError> {
        if let Err(err) = self.check_move(column) {
            log::debug!("rejected move by {} into column {column}: {err}", self.turn);
            return Err(err);
        }

        let player = self.turn;
        let face = self.pending_die;
        self.grids[player.index()].add_die(column, face)?;
        let removed = self.grids[player.opponent().index()].negate(column, face);
        self.move_count += 1;
        log::debug!(
            "move {}: {player} placed {face} in column {column}, removing {removed}",
            self.move_count
        );

        let game_over = self.game_over();
        if game_over {
            let [first, second] = self.scores();
            log::info!(
                "game over after {} moves: {first} to {second}",
                self.move_count
            );
        } else {
            self.pending_die = self.dice.roll();
            self.turn = player.opponent();
        }

        Ok(MoveOutcome {
            player,
            column,
            face,
            removed,
            game_over,
        })
    }

    #[must_use]
    pub fn score(&self, player: Player) -> u32 {
        self.grid(player).score()
    }

    /// Returns both scores, indexed by player.
    #[must_use]
    pub fn scores(&self) -> [u32; 2] {
        self.grids.map(|grid| grid.score())
    }

    /// Returns the outcome once the game is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.game_over()
            .then(|| GameResult::from_scores(self.scores()))
    }
}
