//! The change-notification type carried from a body to its board.

use smallvec::SmallVec;

use crate::tile::Tile;

/// Coordinate payload of a single change notification.
///
/// Single-tile adds/removes and small whole-body shifts stay inline;
/// larger bodies spill to the heap transparently.
pub type TileList = SmallVec<[Tile; 4]>;

/// One positions-changed notification emitted by a body.
///
/// A body appends these to its change log on every mutation while it is
/// linked to a board; the board drains the log synchronously and folds
/// each entry into its tile index. Bulk clears are a distinct [`Reset`]
/// variant rather than a sentinel in the added/removed lists, and pure
/// reorderings carry no spatial information at all.
///
/// [`Reset`]: BodyChange::Reset
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BodyChange {
    /// The listed tiles became occupied by the body.
    Added(TileList),
    /// The listed tiles are no longer occupied by the body.
    Removed(TileList),
    /// All positions were dropped at once; the index must forget the
    /// body everywhere it appears.
    Reset,
    /// The positions were reordered without any spatial change. Index
    /// maintenance ignores this entirely.
    Reordered,
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn small_payloads_stay_inline() {
        let tiles: TileList = smallvec![Tile::ZERO, Tile::RIGHT, Tile::UP, Tile::DOWN];
        assert!(!tiles.spilled());
    }

    #[test]
    fn variants_compare_by_payload() {
        let a = BodyChange::Added(smallvec![Tile::new(1, 2)]);
        let b = BodyChange::Added(smallvec![Tile::new(1, 2)]);
        assert_eq!(a, b);
        assert_ne!(a, BodyChange::Removed(smallvec![Tile::new(1, 2)]));
        assert_ne!(BodyChange::Reset, BodyChange::Reordered);
    }
}
