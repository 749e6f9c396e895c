use knucklebones_engine::{
    DiceSeed, Game, GameResult, MatchError, MoveError, MoveOutcome, Player, RandomPolicy,
    play_turn,
};
use rand::{Rng as _, SeedableRng as _, rngs::StdRng};

/// Wins and draws across the games of one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    wins: [u32; 2],
    draws: u32,
}

impl Tally {
    pub fn record(&mut self, result: GameResult) {
        match result {
            GameResult::Winner(player) => self.wins[player.index()] += 1,
            GameResult::Draw => self.draws += 1,
        }
    }

    pub fn wins(&self, player: Player) -> u32 {
        self.wins[player.index()]
    }

    pub fn draws(&self) -> u32 {
        self.draws
    }
}

/// The game on screen together with everything needed to start the next one.
///
/// Every game's dice seed is drawn from one session generator, so a session
/// started from the same seed replays the same sequence of games.
#[derive(Debug)]
pub struct Table {
    game: Game,
    seeds: StdRng,
    policy: RandomPolicy,
    last_move: Option<MoveOutcome>,
    tally: Tally,
}

impl Table {
    pub fn new(seed: Option<u64>) -> Self {
        let mut seeds = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        let game = Game::with_seed(seeds.random::<DiceSeed>());
        Self::from_parts(game, seeds)
    }

    /// Seats a prepared game, with later games seeded deterministically.
    #[cfg(test)]
    pub fn with_game(game: Game) -> Self {
        Self::from_parts(game, StdRng::seed_from_u64(0))
    }

    fn from_parts(game: Game, mut seeds: StdRng) -> Self {
        let policy = RandomPolicy::with_seed(seeds.random());
        log::info!("new game with seed {}", game.seed());
        Self {
            game,
            seeds,
            policy,
            last_move: None,
            tally: Tally::default(),
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn last_move(&self) -> Option<&MoveOutcome> {
        self.last_move.as_ref()
    }

    pub fn tally(&self) -> &Tally {
        &self.tally
    }

    /// Abandons the current game and deals a fresh one.
    pub fn restart(&mut self) {
        self.game = Game::with_seed(self.seeds.random());
        self.last_move = None;
        log::info!("new game with seed {}", self.game.seed());
    }

    /// Places the pending die for whoever is to move.
    pub fn place(&mut self, column: usize) -> Result<MoveOutcome, MoveError> {
        let outcome = self.game.player_move(column)?;
        self.record(outcome);
        Ok(outcome)
    }

    /// Lets the random policy move for whoever is to move.
    pub fn auto_move(&mut self) -> Result<MoveOutcome, MatchError> {
        let outcome = play_turn(&mut self.game, &mut self.policy)?;
        self.record(outcome);
        Ok(outcome)
    }

    fn record(&mut self, outcome: MoveOutcome) {
        if outcome.game_over
            && let Some(result) = self.game.result()
        {
            self.tally.record(result);
        }
        self.last_move = Some(outcome);
    }
}
