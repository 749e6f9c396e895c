use std::fmt::{self, Write as _};

use rand::{
    Rng, SeedableRng as _,
    distr::{Distribution, StandardUniform},
};
use rand_pcg::Pcg32;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Face, Player};

/// Seed for deterministic dice.
///
/// A 128-bit seed that fixes the starting player and every roll of a game.
/// Serialized as a 32-character lowercase hex string.
///
/// # Example
///
/// ```
/// use knucklebones_engine::{DiceSeed, Game};
/// use rand::Rng as _;
///
/// let seed: DiceSeed = rand::rng().random();
///
/// let game1 = Game::with_seed(seed);
/// let game2 = Game::with_seed(seed);
/// assert_eq!(game1.turn(), game2.turn());
/// assert_eq!(game1.pending_die(), game2.pending_die());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiceSeed([u8; 16]);

impl DiceSeed {
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Expands a 64-bit number into a seed, for seeds typed on a command line.
    #[must_use]
    pub const fn from_u64(value: u64) -> Self {
        Self((value as u128).to_be_bytes())
    }

    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }
}

impl fmt::Display for DiceSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", u128::from_be_bytes(self.0))
    }
}

impl Serialize for DiceSeed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut hex_str = String::with_capacity(2 * self.0.len());
        write!(&mut hex_str, "{self}").map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&hex_str)
    }
}

impl<'de> Deserialize<'de> for DiceSeed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex_str = String::deserialize(deserializer)?;
        if hex_str.len() != 32 {
            return Err(serde::de::Error::custom(format!(
                "invalid hex: expected 32 characters, got {}",
                hex_str.len()
            )));
        }
        let num = u128::from_str_radix(&hex_str, 16)
            .map_err(|e| serde::de::Error::custom(format!("invalid hex: {hex_str} ({e})")))?;
        Ok(Self(num.to_be_bytes()))
    }
}

impl Distribution<DiceSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> DiceSeed {
        let mut seed = [0; 16];
        rng.fill(&mut seed);
        DiceSeed(seed)
    }
}

/// The randomness a game draws on: the opening coin flip and every roll.
#[derive(Debug, Clone)]
pub struct Dice {
    rng: Pcg32,
    seed: DiceSeed,
}

impl Default for Dice {
    fn default() -> Self {
        Self::new()
    }
}

impl Dice {
    /// Creates dice with a seed drawn from the thread-local generator.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(rand::rng().random())
    }

    #[must_use]
    pub fn with_seed(seed: DiceSeed) -> Self {
        Self {
            rng: Pcg32::from_seed(seed.0),
            seed,
        }
    }

    #[must_use]
    pub const fn seed(&self) -> DiceSeed {
        self.seed
    }

    /// Rolls a uniform face in `1..=6`.
    pub fn roll(&mut self) -> Face {
        self.rng.random()
    }

    /// Picks the starting player uniformly.
    pub fn coin(&mut self) -> Player {
        self.rng.random()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_rolls() {
        let seed = DiceSeed::from_u64(42);
        let mut a = Dice::with_seed(seed);
        let mut b = Dice::with_seed(seed);
        assert_eq!(a.coin(), b.coin());
        for _ in 0..100 {
            assert_eq!(a.roll(), b.roll());
        }
    }

    #[test]
    fn test_different_seeds_differ() {
        let mut a = Dice::with_seed(DiceSeed::from_u64(1));
        let mut b = Dice::with_seed(DiceSeed::from_u64(2));
        let rolls_a: Vec<_> = (0..20).map(|_| a.roll()).collect();
        let rolls_b: Vec<_> = (0..20).map(|_| b.roll()).collect();
        assert_ne!(rolls_a, rolls_b);
    }

    #[test]
    fn test_coin_lands_both_ways() {
        let mut dice = Dice::with_seed(DiceSeed::from_u64(3));
        let flips: Vec<_> = (0..64).map(|_| dice.coin()).collect();
        assert!(flips.contains(&Player::First));
        assert!(flips.contains(&Player::Second));
    }

    mod dice_seed_serialization {
        use super::*;

        #[test]
        fn test_roundtrip_random_seed() {
            let seed: DiceSeed = rand::rng().random();
            let serialized = serde_json::to_string(&seed).unwrap();
            let deserialized: DiceSeed = serde_json::from_str(&serialized).unwrap();
            assert_eq!(seed, deserialized);
        }

        #[test]
        fn test_from_u64_format() {
            let seed = DiceSeed::from_u64(0xff);
            assert_eq!(
                serde_json::to_string(&seed).unwrap(),
                "\"000000000000000000000000000000ff\""
            );
            assert_eq!(seed.to_string(), "000000000000000000000000000000ff");
        }

        #[test]
        fn test_deserialize_uppercase_hex() {
            let json = "\"0123456789ABCDEFFEDCBA9876543210\"";
            let deserialized: DiceSeed = serde_json::from_str(json).unwrap();
            assert_eq!(
                deserialized.as_bytes(),
                &[
                    0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF, 0xFE, 0xDC, 0xBA, 0x98, 0x76,
                    0x54, 0x32, 0x10,
                ]
            );
        }

        #[test]
        fn test_reject_wrong_length() {
            let result: Result<DiceSeed, _> = serde_json::from_str("\"abc\"");
            assert!(result.is_err());
        }

        #[test]
        fn test_reject_invalid_chars() {
            let result: Result<DiceSeed, _> =
                serde_json::from_str("\"0123456789abcdefghijklmnopqrstuv\"");
            assert!(result.is_err());
        }
    }
}
