//! Person model and the bitmask used to represent sets of people.
//!
//! Every person gets a stable index `0..n` for the duration of one solve.
//! A day's remote set is stored as a [`PersonMask`]: bit `p` set means
//! person `p` works remotely that day.

use serde::{Deserialize, Serialize};

/// Widest roster a [`PersonMask`] can represent.
pub const MAX_PEOPLE: usize = u64::BITS as usize;

/// A member of the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Bit position in every [`PersonMask`] of the solve.
    pub index: usize,
    /// Display name (also used to resolve forbidden days).
    pub name: String,
}

impl Person {
    /// Creates a person at the given bit position.
    pub fn new(index: usize, name: impl Into<String>) -> Self {
        Self {
            index,
            name: name.into(),
        }
    }

    /// Builds an indexed roster from names, in the given order.
    pub fn roster<I, S>(names: I) -> Vec<Person>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        names
            .into_iter()
            .enumerate()
            .map(|(i, name)| Person::new(i, name))
            .collect()
    }
}

/// Set of people encoded as a bit vector over person indices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonMask(u64);

impl PersonMask {
    /// The empty set (nobody remote).
    pub const EMPTY: PersonMask = PersonMask(0);

    /// Wraps raw bits.
    #[inline]
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    /// Raw bits.
    #[inline]
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// Whether person `index` is in the set.
    #[inline]
    pub fn contains(self, index: usize) -> bool {
        index < MAX_PEOPLE && (self.0 >> index) & 1 == 1
    }

    /// Returns a copy with person `index` added.
    ///
    /// # Panics
    /// Panics if `index >= MAX_PEOPLE`.
    #[inline]
    pub fn with(self, index: usize) -> Self {
        assert!(index < MAX_PEOPLE, "person index {index} exceeds mask width");
        Self(self.0 | (1u64 << index))
    }

    /// Number of people in the set.
    #[inline]
    pub fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Whether the set is empty.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Whether any bit at or above `width` is set.
    #[inline]
    pub fn exceeds_width(self, width: usize) -> bool {
        width < MAX_PEOPLE && (self.0 >> width) != 0
    }

    /// Iterates the person indices in the set, lowest first.
    pub fn iter(self) -> impl Iterator<Item = usize> {
        let mut rest = self.0;
        std::iter::from_fn(move || {
            if rest == 0 {
                return None;
            }
            let index = rest.trailing_zeros() as usize;
            rest &= rest - 1;
            Some(index)
        })
    }
}

impl FromIterator<usize> for PersonMask {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        iter.into_iter().fold(PersonMask::EMPTY, PersonMask::with)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_indices() {
        let people = Person::roster(["Ayoub", "Sara", "Omar"]);
        assert_eq!(people.len(), 3);
        assert_eq!(people[1], Person::new(1, "Sara"));
        assert_eq!(people[2].index, 2);
    }

    #[test]
    fn test_mask_membership() {
        let mask: PersonMask = [0, 3, 5].into_iter().collect();
        assert_eq!(mask.bits(), 0b101001);
        assert!(mask.contains(3));
        assert!(!mask.contains(1));
        assert!(!mask.contains(200));
        assert_eq!(mask.count(), 3);
        assert_eq!(mask.iter().collect::<Vec<_>>(), vec![0, 3, 5]);
    }

    #[test]
    fn test_mask_width() {
        let mask = PersonMask::from_bits(0b1000);
        assert!(mask.exceeds_width(3));
        assert!(!mask.exceeds_width(4));
        assert!(!PersonMask::from_bits(u64::MAX).exceeds_width(MAX_PEOPLE));
    }

    #[test]
    fn test_mask_high_bit() {
        let mask = PersonMask::EMPTY.with(63);
        assert!(mask.contains(63));
        assert_eq!(mask.iter().collect::<Vec<_>>(), vec![63]);
    }
}
