use serde::{Deserialize, Serialize};

use crate::{DiceSeed, Game, GameResult, MatchError, MoveOutcome, MovePolicy, Player};

/// Full log of a finished automated match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub seed: DiceSeed,
    pub first_player: Player,
    pub moves: Vec<MoveOutcome>,
    pub scores: [u32; 2],
    pub result: GameResult,
}

impl MatchRecord {
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.moves.len()
    }
}

/// Asks `policy` for a column and plays it for the active player.
///
/// Nothing is applied if the policy declines or picks an illegal column.
pub fn play_turn<P>(game: &mut Game, policy: &mut P) -> Result<MoveOutcome, MatchError>
where
    P: MovePolicy + ?Sized,
{
    let player = game.turn();
    let moves = game.available_moves();
    let column = policy
        .choose_move(player, game.pending_die(), &moves)
        .ok_or(MatchError::NoMoveChosen { player })?;
    game.player_move(column)
        .map_err(|source| MatchError::IllegalMove { player, source })
}

/// Plays `game` to the end, letting `policies[i]` move for player `i`.
///
/// A game that is already over yields a record with no moves.
pub fn play_out<P>(game: &mut Game, policies: &mut [P; 2]) -> Result<MatchRecord, MatchError>
where
    P: MovePolicy,
{
    let first_player = game.turn();
    let mut moves = Vec::new();
    while !game.game_over() {
        let policy = &mut policies[game.turn().index()];
        moves.push(play_turn(game, policy)?);
    }

    let scores = game.scores();
    let result = game.result().unwrap_or(GameResult::Draw);
    Ok(MatchRecord {
        seed: game.seed(),
        first_player,
        moves,
        scores,
        result,
    })
}
