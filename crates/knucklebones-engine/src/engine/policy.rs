use rand::{SeedableRng as _, seq::IndexedRandom as _};
use rand_pcg::Pcg32;

use crate::{Face, Player};

/// Chooses a column for automated play.
///
/// A policy sees the active player, the die they must place, and the legal
/// columns in ascending order. It returns one of those columns, or `None`
/// if it cannot decide.
pub trait MovePolicy {
    fn choose_move(&mut self, player: Player, face: Face, moves: &[usize]) -> Option<usize>;
}

impl<P> MovePolicy for &mut P
where
    P: MovePolicy + ?Sized,
{
    fn choose_move(&mut self, player: Player, face: Face, moves: &[usize]) -> Option<usize> {
        (**self).choose_move(player, face, moves)
    }
}

impl<P> MovePolicy for Box<P>
where
    P: MovePolicy + ?Sized,
{
    fn choose_move(&mut self, player: Player, face: Face, moves: &[usize]) -> Option<usize> {
        (**self).choose_move(player, face, moves)
    }
}

/// Picks uniformly among the legal columns.
#[derive(Debug, Clone)]
pub struct RandomPolicy {
    rng: Pcg32,
}

impl Default for RandomPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomPolicy {
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: Pcg32::from_rng(&mut rand::rng()),
        }
    }

    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }
}

impl MovePolicy for RandomPolicy {
    fn choose_move(&mut self, _player: Player, _face: Face, moves: &[usize]) -> Option<usize> {
        moves.choose(&mut self.rng).copied()
    }
}

/// Always takes the lowest-numbered legal column.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstAvailablePolicy;

impl MovePolicy for FirstAvailablePolicy {
    fn choose_move(&mut self, _player: Player, _face: Face, moves: &[usize]) -> Option<usize> {
        moves.first().copied()
    }
}

/// Adapts a closure into a [`MovePolicy`].
///
/// ```
/// use knucklebones_engine::{Face, FnPolicy, MovePolicy, Player};
///
/// let mut last = FnPolicy(|_: Player, _: Face, moves: &[usize]| moves.last().copied());
/// assert_eq!(last.choose_move(Player::First, Face::ONE, &[0, 2]), Some(2));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FnPolicy<F>(pub F);

impl<F> MovePolicy for FnPolicy<F>
where
    F: FnMut(Player, Face, &[usize]) -> Option<usize>,
{
    fn choose_move(&mut self, player: Player, face: Face, moves: &[usize]) -> Option<usize> {
        (self.0)(player, face, moves)
    }
}
