use std::fmt;

use arrayvec::ArrayVec;

use crate::{ColumnFullError, Face};

/// Number of slots in a column.
pub const COLUMN_CAPACITY: usize = 3;

/// A 3-slot stack of dice owned by one player.
///
/// Dice are always left-packed: occupied slots come first and empty slots
/// trail. Insertion fills the first empty slot, and [`Column::negate`]
/// compacts the remaining dice after removal.
///
/// # Scoring
///
/// Each die scores its face multiplied by the number of dice in the column
/// showing the same face, so a face appearing `c` times contributes
/// `face * c * c`.
///
/// ```
/// use knucklebones_engine::{Column, Face};
///
/// let column = Column::from_dice([Face::FOUR, Face::FOUR, Face::FOUR]).unwrap();
/// assert_eq!(column.score(), 36);
///
/// let column = Column::from_dice([Face::TWO, Face::TWO, Face::FIVE]).unwrap();
/// assert_eq!(column.score(), 2 * 4 + 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Column {
    slots: [Option<Face>; COLUMN_CAPACITY],
}

impl Column {
    pub const EMPTY: Self = Self {
        slots: [None; COLUMN_CAPACITY],
    };

    /// Builds a column by adding the given dice in order.
    pub fn from_dice<I>(dice: I) -> Result<Self, ColumnFullError>
    where
        I: IntoIterator<Item = Face>,
    {
        let mut column = Self::EMPTY;
        for face in dice {
            column.add_die(face)?;
        }
        Ok(column)
    }

    /// Returns the raw slots, occupied ones first.
    #[must_use]
    pub const fn slots(&self) -> &[Option<Face>; COLUMN_CAPACITY] {
        &self.slots
    }

    /// Returns an iterator over the dice in slot order.
    pub fn dice(&self) -> impl Iterator<Item = Face> + '_ {
        self.slots.iter().flatten().copied()
    }

    /// Returns the number of occupied slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Places a die into the first empty slot.
    pub fn add_die(&mut self, face: Face) -> Result<(), ColumnFullError> {
        let slot = self
            .slots
            .iter_mut()
            .find(|slot| slot.is_none())
            .ok_or(ColumnFullError)?;
        *slot = Some(face);
        Ok(())
    }

    /// Counts how many dice show each distinct face.
    #[must_use]
    pub fn die_counts(&self) -> DieCounts {
        let mut counts = DieCounts::default();
        for face in self.dice() {
            counts.increment(face);
        }
        counts
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.die_counts()
            .iter()
            .map(|(face, count)| {
                let count = u32::from(count);
                u32::from(face) * count * count
            })
            .sum()
    }

    /// Removes every die showing `face` and re-packs the rest.
    ///
    /// Returns the number of dice removed. The relative order of the
    /// remaining dice is kept.
    pub fn negate(&mut self, face: Face) -> usize {
        let before = self.len();
        let mut packed = [None; COLUMN_CAPACITY];
        for (slot, die) in packed
            .iter_mut()
            .zip(self.dice().filter(|die| *die != face))
        {
            *slot = Some(die);
        }
        self.slots = packed;
        before - self.len()
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, slot) in self.slots.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            match slot {
                Some(face) => write!(f, "{face}")?,
                None => write!(f, "-")?,
            }
        }
        write!(f, "]")
    }
}

/// Occurrence count of each distinct face in a column.
///
/// Faces are listed in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DieCounts {
    counts: ArrayVec<(Face, u8), COLUMN_CAPACITY>,
    max_count: u8,
}

impl DieCounts {
    fn increment(&mut self, face: Face) {
        let count = match self.counts.iter().position(|(f, _)| *f == face) {
            Some(i) => {
                self.counts[i].1 += 1;
                self.counts[i].1
            }
            None => {
                self.counts.push((face, 1));
                1
            }
        };
        self.max_count = self.max_count.max(count);
    }

    /// Returns how many dice show `face` (0 if absent).
    #[must_use]
    pub fn count(&self, face: Face) -> u8 {
        self.counts
            .iter()
            .find(|(f, _)| *f == face)
            .map_or(0, |(_, count)| *count)
    }

    /// Returns the highest count among all faces, or 0 for an empty column.
    #[must_use]
    pub const fn max_count(&self) -> u8 {
        self.max_count
    }

    /// Returns the number of distinct faces.
    #[must_use]
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Face, u8)> + '_ {
        self.counts.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use rand::{Rng as _, SeedableRng as _};
    use rand_pcg::Pcg32;

    use super::*;

    fn column(dice: &[u8]) -> Column {
        Column::from_dice(dice.iter().map(|v| Face::new(*v).unwrap())).unwrap()
    }

    fn assert_left_packed(column: &Column) {
        let slots = column.slots();
        assert_eq!(slots.len(), COLUMN_CAPACITY);
        let first_empty = slots
            .iter()
            .position(Option::is_none)
            .unwrap_or(COLUMN_CAPACITY);
        assert!(
            slots[first_empty..].iter().all(Option::is_none),
            "gap in {column}"
        );
    }

    #[test]
    fn test_empty_column() {
        let column = Column::EMPTY;
        assert!(column.is_empty());
        assert!(!column.is_full());
        assert_eq!(column.len(), 0);
        assert_eq!(column.score(), 0);
        assert_eq!(column.die_counts().max_count(), 0);
        assert_eq!(column.to_string(), "[-, -, -]");
    }

    #[test]
    fn test_add_die_fills_left_to_right() {
        let mut column = Column::EMPTY;
        column.add_die(Face::THREE).unwrap();
        assert_eq!(column.slots(), &[Some(Face::THREE), None, None]);
        column.add_die(Face::ONE).unwrap();
        assert_eq!(column.slots(), &[Some(Face::THREE), Some(Face::ONE), None]);
        column.add_die(Face::SIX).unwrap();
        assert!(column.is_full());
        assert_eq!(column.to_string(), "[3, 1, 6]");
    }

    #[test]
    fn test_add_die_on_full_column_fails_without_change() {
        let mut column = column(&[1, 2, 3]);
        let before = column;
        assert_eq!(column.add_die(Face::FOUR), Err(ColumnFullError));
        assert_eq!(column, before);
    }

    #[test]
    fn test_die_counts() {
        let counts = column(&[5, 2, 5]).die_counts();
        assert_eq!(counts.count(Face::FIVE), 2);
        assert_eq!(counts.count(Face::TWO), 1);
        assert_eq!(counts.count(Face::ONE), 0);
        assert_eq!(counts.max_count(), 2);
        assert_eq!(counts.distinct(), 2);
        assert_eq!(
            counts.iter().collect::<Vec<_>>(),
            vec![(Face::FIVE, 2), (Face::TWO, 1)]
        );
    }

    #[test]
    fn test_score_three_of_a_kind() {
        for face in Face::ALL {
            let column = Column::from_dice([face; 3]).unwrap();
            let f = u32::from(face);
            assert_eq!(column.score(), 9 * f);
        }
        assert_eq!(column(&[4, 4, 4]).score(), 36);
        assert_eq!(column(&[1, 1, 1]).score(), 9);
    }

    #[test]
    fn test_score_pair_plus_single() {
        for f in Face::ALL {
            for g in Face::ALL.into_iter().filter(|g| *g != f) {
                let column = Column::from_dice([f, g, f]).unwrap();
                let (fv, gv) = (u32::from(f), u32::from(g));
                assert_eq!(column.score(), 4 * fv + gv);
            }
        }
        assert_eq!(column(&[1, 3, 1]).score(), 7);
    }

    #[test]
    fn test_score_all_distinct_is_sum() {
        assert_eq!(column(&[1, 3, 6]).score(), 10);
        assert_eq!(column(&[2]).score(), 2);
    }

    #[test]
    fn test_negate_removes_all_matching() {
        let mut column = column(&[5, 5]);
        assert_eq!(column.negate(Face::FIVE), 2);
        assert_eq!(column.slots(), &[None, None, None]);
    }

    #[test]
    fn test_negate_compacts_and_keeps_order() {
        let mut column = column(&[2, 4, 3]);
        assert_eq!(column.negate(Face::TWO), 1);
        assert_eq!(column.slots(), &[Some(Face::FOUR), Some(Face::THREE), None]);

        let mut column = self::column(&[6, 1, 6]);
        assert_eq!(column.negate(Face::SIX), 2);
        assert_eq!(column.slots(), &[Some(Face::ONE), None, None]);
    }

    #[test]
    fn test_negate_absent_face_is_noop() {
        let mut column = column(&[1, 2]);
        let before = column;
        assert_eq!(column.negate(Face::SIX), 0);
        assert_eq!(column, before);
    }

    #[test]
    fn test_random_operations_keep_invariants() {
        let mut rng = Pcg32::seed_from_u64(0x5eed);
        for _ in 0..200 {
            let mut column = Column::EMPTY;
            for _ in 0..30 {
                let face: Face = rng.random();
                if !column.is_full() && rng.random_bool(0.6) {
                    let before = column.len();
                    column.add_die(face).unwrap();
                    assert_eq!(column.len(), before + 1);
                    assert!(column.dice().any(|d| d == face));
                } else {
                    let before = column.len();
                    let others: Vec<Face> = column.dice().filter(|d| *d != face).collect();
                    let removed = column.negate(face);
                    assert_eq!(removed, before - others.len());
                    assert!(column.dice().all(|d| d != face));
                    assert_eq!(column.dice().collect::<Vec<_>>(), others);
                }
                assert_left_packed(&column);
                assert_eq!(column.is_full(), column.len() == COLUMN_CAPACITY);
            }
        }
    }
}
