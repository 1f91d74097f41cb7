//! Integer tile coordinates and inclusive tile rectangles.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// One cell of the integer board grid.
///
/// Equality and hashing are value-based. The y axis grows downward
/// (screen convention): [`Tile::DOWN`] is `(0, 1)` and [`Tile::UP`] is
/// `(0, -1)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tile {
    /// Column index.
    pub x: i32,
    /// Row index.
    pub y: i32,
}

impl Tile {
    /// The origin tile `(0, 0)`.
    pub const ZERO: Tile = Tile::new(0, 0);
    /// Unit step toward increasing x.
    pub const RIGHT: Tile = Tile::new(1, 0);
    /// Unit step toward decreasing y.
    pub const UP: Tile = Tile::new(0, -1);
    /// Unit step toward decreasing x.
    pub const LEFT: Tile = Tile::new(-1, 0);
    /// Unit step toward increasing y.
    pub const DOWN: Tile = Tile::new(0, 1);

    /// Create a tile from column and row indices.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Tile {
    type Output = Tile;

    fn add(self, rhs: Tile) -> Tile {
        Tile::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Tile {
    fn add_assign(&mut self, rhs: Tile) {
        *self = *self + rhs;
    }
}

impl Sub for Tile {
    type Output = Tile;

    fn sub(self, rhs: Tile) -> Tile {
        Tile::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Tile {
    fn sub_assign(&mut self, rhs: Tile) {
        *self = *self - rhs;
    }
}

impl Neg for Tile {
    type Output = Tile;

    fn neg(self) -> Tile {
        Tile::new(-self.x, -self.y)
    }
}

impl Mul<i32> for Tile {
    type Output = Tile;

    fn mul(self, rhs: i32) -> Tile {
        Tile::new(self.x * rhs, self.y * rhs)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// An inclusive, axis-aligned rectangle of tiles.
///
/// Both corners are part of the rectangle, so a single-tile bounds has
/// `width() == height() == 1`. Construction normalizes the corners, so
/// `min()` is always componentwise `<= max()`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Bounds {
    min: Tile,
    max: Tile,
}

impl Bounds {
    /// Bounds spanning the rectangle between two corner tiles, in any
    /// corner order.
    pub fn new(a: Tile, b: Tile) -> Self {
        Self {
            min: Tile::new(a.x.min(b.x), a.y.min(b.y)),
            max: Tile::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Degenerate bounds covering a single tile.
    pub const fn of(tile: Tile) -> Self {
        Self {
            min: tile,
            max: tile,
        }
    }

    /// Componentwise minimum corner.
    pub const fn min(&self) -> Tile {
        self.min
    }

    /// Componentwise maximum corner.
    pub const fn max(&self) -> Tile {
        self.max
    }

    /// Number of tile columns covered, inclusive of both edges.
    pub fn width(&self) -> i64 {
        i64::from(self.max.x) - i64::from(self.min.x) + 1
    }

    /// Number of tile rows covered, inclusive of both edges.
    pub fn height(&self) -> i64 {
        i64::from(self.max.y) - i64::from(self.min.y) + 1
    }

    /// Whether `tile` lies inside the rectangle.
    pub fn contains(&self, tile: Tile) -> bool {
        tile.x >= self.min.x && tile.x <= self.max.x && tile.y >= self.min.y && tile.y <= self.max.y
    }

    /// The smallest bounds covering both `self` and `other`.
    pub fn union(&self, other: Bounds) -> Bounds {
        Bounds {
            min: Tile::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: Tile::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }

    /// The smallest bounds covering `self` and one extra tile.
    pub fn expand(&self, tile: Tile) -> Bounds {
        self.union(Bounds::of(tile))
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}..{}]", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ── Tile arithmetic ─────────────────────────────────────────

    #[test]
    fn tile_add_sub_neg() {
        let a = Tile::new(2, -3);
        let b = Tile::new(-1, 5);
        assert_eq!(a + b, Tile::new(1, 2));
        assert_eq!(a - b, Tile::new(3, -8));
        assert_eq!(-a, Tile::new(-2, 3));
        assert_eq!(a * 3, Tile::new(6, -9));
    }

    #[test]
    fn tile_unit_constants_cancel() {
        assert_eq!(Tile::RIGHT + Tile::LEFT, Tile::ZERO);
        assert_eq!(Tile::UP + Tile::DOWN, Tile::ZERO);
    }

    #[test]
    fn tile_display() {
        assert_eq!(Tile::new(-4, 7).to_string(), "(-4, 7)");
    }

    // ── Bounds ──────────────────────────────────────────────────

    #[test]
    fn bounds_normalizes_corners() {
        let b = Bounds::new(Tile::new(3, -1), Tile::new(-2, 4));
        assert_eq!(b.min(), Tile::new(-2, -1));
        assert_eq!(b.max(), Tile::new(3, 4));
        assert_eq!(b.width(), 6);
        assert_eq!(b.height(), 6);
    }

    #[test]
    fn bounds_single_tile() {
        let b = Bounds::of(Tile::new(5, 5));
        assert_eq!(b.width(), 1);
        assert_eq!(b.height(), 1);
        assert!(b.contains(Tile::new(5, 5)));
        assert!(!b.contains(Tile::new(5, 6)));
    }

    #[test]
    fn bounds_union_covers_both() {
        let a = Bounds::of(Tile::new(0, 0));
        let b = Bounds::of(Tile::new(3, -2));
        let u = a.union(b);
        assert_eq!(u.min(), Tile::new(0, -2));
        assert_eq!(u.max(), Tile::new(3, 0));
    }

    #[test]
    fn bounds_expand_is_union_with_single_tile() {
        let b = Bounds::of(Tile::ZERO).expand(Tile::new(-1, 2));
        assert!(b.contains(Tile::ZERO));
        assert!(b.contains(Tile::new(-1, 2)));
        assert_eq!(b.width(), 2);
        assert_eq!(b.height(), 3);
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        #[test]
        fn bounds_contains_both_corners(
            ax in -1000i32..1000, ay in -1000i32..1000,
            bx in -1000i32..1000, by in -1000i32..1000,
        ) {
            let b = Bounds::new(Tile::new(ax, ay), Tile::new(bx, by));
            prop_assert!(b.contains(Tile::new(ax, ay)));
            prop_assert!(b.contains(Tile::new(bx, by)));
        }

        #[test]
        fn bounds_union_is_commutative(
            ax in -100i32..100, ay in -100i32..100,
            bx in -100i32..100, by in -100i32..100,
        ) {
            let a = Bounds::of(Tile::new(ax, ay));
            let b = Bounds::of(Tile::new(bx, by));
            prop_assert_eq!(a.union(b), b.union(a));
        }
    }
}
