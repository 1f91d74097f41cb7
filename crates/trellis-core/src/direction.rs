//! The four cardinal directions and 4-bit direction sets.
//!
//! Directions follow the screen convention of [`Tile`]: `Down` points
//! toward increasing y. Each direction occupies one bit so that a
//! [`DirectionSet`] packs into a nibble, in counter-clockwise order
//! starting from `Right`.

use std::fmt;
use std::ops::{BitAnd, BitOr, BitXor, Not};

use crate::tile::Tile;
use crate::vec2::Vec2;

/// One of the four cardinal directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    /// Toward increasing x.
    Right = 0b0001,
    /// Toward decreasing y.
    Up = 0b0010,
    /// Toward decreasing x.
    Left = 0b0100,
    /// Toward increasing y.
    Down = 0b1000,
}

impl Direction {
    /// All four directions in counter-clockwise order from `Right`.
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Up,
        Direction::Left,
        Direction::Down,
    ];

    /// The unit tile step in this direction.
    pub const fn unit(self) -> Tile {
        match self {
            Direction::Right => Tile::RIGHT,
            Direction::Up => Tile::UP,
            Direction::Left => Tile::LEFT,
            Direction::Down => Tile::DOWN,
        }
    }

    /// The unit movement vector in this direction.
    pub fn vector(self) -> Vec2 {
        Vec2::from(self.unit())
    }

    /// The opposite direction.
    pub const fn reverse(self) -> Direction {
        match self {
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Left => Direction::Right,
            Direction::Down => Direction::Up,
        }
    }

    /// The single mask bit of this direction.
    pub const fn bit(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Right => "Right",
            Direction::Up => "Up",
            Direction::Left => "Left",
            Direction::Down => "Down",
        };
        write!(f, "{name}")
    }
}

/// A set of cardinal directions packed into four bits.
///
/// Out-of-range bits are masked off on construction, so every value is
/// canonical and set equality is bit equality.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct DirectionSet(u8);

impl DirectionSet {
    /// The empty set.
    pub const EMPTY: DirectionSet = DirectionSet(0b0000);
    /// The set of all four directions.
    pub const FULL: DirectionSet = DirectionSet(0b1111);

    /// Build a set from raw bits; bits outside the low nibble are dropped.
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & Self::FULL.0)
    }

    /// The raw nibble.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Whether `direction` is a member.
    pub const fn contains(self, direction: Direction) -> bool {
        self.0 & direction.bit() != 0
    }

    /// Add a direction.
    pub fn insert(&mut self, direction: Direction) {
        self.0 |= direction.bit();
    }

    /// Remove a direction.
    pub fn remove(&mut self, direction: Direction) {
        self.0 &= !direction.bit();
    }

    /// Flip a direction's membership.
    pub fn toggle(&mut self, direction: Direction) {
        self.0 ^= direction.bit();
    }

    /// A copy of the set with one extra direction.
    #[must_use]
    pub const fn with(self, direction: Direction) -> Self {
        Self(self.0 | direction.bit())
    }

    /// Number of member directions.
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Whether the set has no members.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Member directions in [`Direction::ALL`] order.
    pub fn iter(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |d| self.contains(*d))
    }

    /// The summed unit vectors of the members.
    ///
    /// Opposite members cancel, so `Right | Left` sums to zero and
    /// `Right | Up` gives the diagonal `(1, -1)`.
    pub fn vector(self) -> Vec2 {
        self.iter()
            .fold(Vec2::ZERO, |acc, direction| acc + direction.vector())
    }
}

impl From<Direction> for DirectionSet {
    fn from(direction: Direction) -> Self {
        DirectionSet(direction.bit())
    }
}

impl FromIterator<Direction> for DirectionSet {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        iter.into_iter()
            .fold(DirectionSet::EMPTY, DirectionSet::with)
    }
}

impl BitOr for DirectionSet {
    type Output = DirectionSet;

    fn bitor(self, rhs: DirectionSet) -> DirectionSet {
        DirectionSet(self.0 | rhs.0)
    }
}

impl BitAnd for DirectionSet {
    type Output = DirectionSet;

    fn bitand(self, rhs: DirectionSet) -> DirectionSet {
        DirectionSet(self.0 & rhs.0)
    }
}

impl BitXor for DirectionSet {
    type Output = DirectionSet;

    fn bitxor(self, rhs: DirectionSet) -> DirectionSet {
        DirectionSet(self.0 ^ rhs.0)
    }
}

impl Not for DirectionSet {
    type Output = DirectionSet;

    fn not(self) -> DirectionSet {
        DirectionSet::from_bits(!self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ── Direction ───────────────────────────────────────────────

    #[test]
    fn units_are_unit_steps() {
        assert_eq!(Direction::Right.unit(), Tile::new(1, 0));
        assert_eq!(Direction::Up.unit(), Tile::new(0, -1));
        assert_eq!(Direction::Left.unit(), Tile::new(-1, 0));
        assert_eq!(Direction::Down.unit(), Tile::new(0, 1));
    }

    #[test]
    fn reverse_negates_unit() {
        for d in Direction::ALL {
            assert_eq!(d.reverse().unit(), -d.unit());
        }
    }

    #[test]
    fn vector_matches_unit() {
        for d in Direction::ALL {
            assert_eq!(d.vector().floor(), d.unit());
        }
    }

    // ── DirectionSet ────────────────────────────────────────────

    #[test]
    fn insert_remove_toggle() {
        let mut set = DirectionSet::EMPTY;
        set.insert(Direction::Up);
        set.insert(Direction::Left);
        assert!(set.contains(Direction::Up));
        assert!(!set.contains(Direction::Right));
        assert_eq!(set.len(), 2);

        set.remove(Direction::Up);
        assert!(!set.contains(Direction::Up));

        set.toggle(Direction::Up);
        set.toggle(Direction::Left);
        assert!(set.contains(Direction::Up));
        assert!(!set.contains(Direction::Left));
    }

    #[test]
    fn iter_follows_all_order() {
        let set = DirectionSet::from(Direction::Down).with(Direction::Right);
        let members: Vec<Direction> = set.iter().collect();
        assert_eq!(members, vec![Direction::Right, Direction::Down]);
    }

    #[test]
    fn set_operators() {
        let rl = DirectionSet::from(Direction::Right) | DirectionSet::from(Direction::Left);
        assert_eq!(rl.len(), 2);
        assert_eq!(rl & DirectionSet::from(Direction::Right), Direction::Right.into());
        assert_eq!(!DirectionSet::EMPTY, DirectionSet::FULL);
        assert_eq!(rl ^ DirectionSet::FULL, DirectionSet::from(Direction::Up).with(Direction::Down));
    }

    #[test]
    fn opposite_members_cancel_in_vector() {
        let rl = DirectionSet::from(Direction::Right).with(Direction::Left);
        assert_eq!(rl.vector(), Vec2::ZERO);
        let diag = DirectionSet::from(Direction::Right).with(Direction::Up);
        assert_eq!(diag.vector(), Vec2::new(1.0, -1.0));
    }

    #[test]
    fn from_bits_masks_high_bits() {
        assert_eq!(DirectionSet::from_bits(0xF0), DirectionSet::EMPTY);
        assert_eq!(DirectionSet::from_bits(0xFF), DirectionSet::FULL);
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        #[test]
        fn reverse_is_involutive(i in 0usize..4) {
            let d = Direction::ALL[i];
            prop_assert_eq!(d.reverse().reverse(), d);
        }

        #[test]
        fn len_counts_members(bits in 0u8..16) {
            let set = DirectionSet::from_bits(bits);
            prop_assert_eq!(set.len(), set.iter().count());
            let rebuilt: DirectionSet = set.iter().collect();
            prop_assert_eq!(rebuilt, set);
        }
    }
}
