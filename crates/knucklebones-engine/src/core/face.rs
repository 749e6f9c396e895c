use rand::{
    Rng,
    distr::{Distribution, StandardUniform},
};
use serde::{Deserialize, Serialize};

use crate::InvalidFaceError;

/// The pip count of a rolled die.
///
/// A `Face` always holds a value in `1..=6`. Empty slots are modelled as
/// `Option<Face>::None` rather than a reserved value.
///
/// # Example
///
/// ```
/// use knucklebones_engine::Face;
///
/// let face = Face::new(4).unwrap();
/// assert_eq!(face.value(), 4);
/// assert!(Face::new(7).is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Face(u8);

impl Face {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 6;
    /// Number of distinct faces.
    pub const LEN: usize = 6;

    pub const ONE: Self = Self(1);
    pub const TWO: Self = Self(2);
    pub const THREE: Self = Self(3);
    pub const FOUR: Self = Self(4);
    pub const FIVE: Self = Self(5);
    pub const SIX: Self = Self(6);

    pub const ALL: [Self; Self::LEN] = [
        Self::ONE,
        Self::TWO,
        Self::THREE,
        Self::FOUR,
        Self::FIVE,
        Self::SIX,
    ];

    /// Creates a face from its pip count.
    pub const fn new(value: u8) -> Result<Self, InvalidFaceError> {
        if value < Self::MIN || value > Self::MAX {
            return Err(InvalidFaceError { value });
        }
        Ok(Self(value))
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Face {
    type Error = InvalidFaceError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Face> for u8 {
    fn from(face: Face) -> Self {
        face.0
    }
}

impl From<Face> for u32 {
    fn from(face: Face) -> Self {
        u32::from(face.0)
    }
}

/// Uniform roll over all six faces.
impl Distribution<Face> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Face {
        Face(rng.random_range(Face::MIN..=Face::MAX))
    }
}
