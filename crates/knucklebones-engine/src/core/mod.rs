pub use self::{column::*, face::*, grid::*, player::*};

pub(crate) mod column;
pub(crate) mod face;
pub(crate) mod grid;
pub(crate) mod player;
