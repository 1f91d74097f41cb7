//! The positional state of one structure: occupied tiles plus offset.

use indexmap::IndexSet;
use smallvec::smallvec;

use trellis_core::{BoardId, Bounds, BodyChange, Direction, Tile, TileList, Vec2};

use crate::error::LinkError;

/// The positions and sub-tile offset owned by one structure.
///
/// Positions are always whole tiles; the offset carries the fractional
/// remainder of continuous movement. [`translate`](Body::translate)
/// keeps the two consistent by folding whole-tile steps of the offset
/// back into the position set, preserving the world-space placement
/// `position + offset` of every tile.
///
/// While linked to a board, every mutation appends a [`BodyChange`] to
/// an internal change log; the board drains the log synchronously after
/// each mediated mutation. An unlinked body mutates freely and logs
/// nothing.
///
/// # Examples
///
/// ```
/// use trellis_board::Body;
/// use trellis_core::{Tile, Vec2};
///
/// let mut body = Body::new();
/// body.add(Vec2::new(0.2, 0.7)); // floors to (0, 0)
/// body.translate(Vec2::new(1.05, 0.0)); // one whole-tile shift right
/// assert!(body.contains(Tile::new(1, 0)));
/// assert!((body.offset().x - 0.05).abs() < 1e-6);
/// ```
#[derive(Debug, Default)]
pub struct Body {
    positions: IndexSet<Tile>,
    offset: Vec2,
    board: Option<BoardId>,
    pending: Vec<BodyChange>,
}

impl Body {
    /// Margin tolerated around the tile boundary before a shift fires.
    ///
    /// After normalization each offset axis rests in the unit-length
    /// half-open band `[-OFFSET_MARGIN, 1 - OFFSET_MARGIN)`, so the
    /// normal form is canonical and floating-point error at a tile
    /// boundary cannot flip a position back and forth.
    pub const OFFSET_MARGIN: f32 = 0.1;

    /// Lower edge of the offset resting band, inclusive.
    pub const OFFSET_MIN: f32 = -Self::OFFSET_MARGIN;

    /// Upper edge of the offset resting band, exclusive.
    pub const OFFSET_MAX: f32 = 1.0 - Self::OFFSET_MARGIN;

    /// An empty, unlinked body at zero offset.
    pub fn new() -> Self {
        Self::default()
    }

    /// A body pre-populated with the given tiles, unlinked, zero offset.
    pub fn from_tiles(tiles: impl IntoIterator<Item = Tile>) -> Self {
        Self {
            positions: tiles.into_iter().collect(),
            ..Self::default()
        }
    }

    // ── Position mutation ───────────────────────────────────────

    /// Occupy the tile containing `position`.
    ///
    /// The position is floored to its tile. Silent no-op when the tile
    /// is already occupied.
    pub fn add(&mut self, position: Vec2) {
        self.add_tile(position.floor());
    }

    /// Occupy a tile directly. Silent no-op when already occupied.
    pub fn add_tile(&mut self, tile: Tile) {
        if self.positions.insert(tile) {
            self.log(BodyChange::Added(smallvec![tile]));
        }
    }

    /// Vacate the tile containing `position`.
    ///
    /// The position is floored to its tile. Silent no-op when the tile
    /// is not occupied.
    pub fn remove(&mut self, position: Vec2) {
        self.remove_tile(position.floor());
    }

    /// Vacate a tile directly. Silent no-op when not occupied.
    pub fn remove_tile(&mut self, tile: Tile) {
        if self.positions.shift_remove(&tile) {
            self.log(BodyChange::Removed(smallvec![tile]));
        }
    }

    /// Drop every position at once. The offset is untouched.
    ///
    /// Logs a single [`BodyChange::Reset`] rather than one removal per
    /// tile. No-op when already empty.
    pub fn clear_positions(&mut self) {
        if !self.positions.is_empty() {
            self.positions.clear();
            self.log(BodyChange::Reset);
        }
    }

    /// Sort the positions for deterministic export order.
    ///
    /// Logs [`BodyChange::Reordered`], which carries no spatial
    /// information and is ignored by index maintenance.
    pub fn sort_positions(&mut self) {
        self.positions.sort_unstable();
        self.log(BodyChange::Reordered);
    }

    // ── Movement ────────────────────────────────────────────────

    /// Accumulate a movement vector into the offset, then normalize.
    ///
    /// While an offset axis lies outside the resting band
    /// `[OFFSET_MIN, OFFSET_MAX)`, the whole position set shifts one
    /// tile and the offset moves one unit the opposite way, preserving
    /// the world-space placement of every tile. Each shift moves the
    /// offending axis exactly one unit toward the band, so the loop
    /// terminates with both axes in range simultaneously.
    pub fn translate(&mut self, vector: Vec2) {
        self.offset += vector;
        while self.offset.x < Self::OFFSET_MIN {
            self.shift(Direction::Right);
        }
        while self.offset.y < Self::OFFSET_MIN {
            self.shift(Direction::Down);
        }
        while self.offset.x >= Self::OFFSET_MAX {
            self.shift(Direction::Left);
        }
        while self.offset.y >= Self::OFFSET_MAX {
            self.shift(Direction::Up);
        }
    }

    /// Translate by one whole tile in `direction`.
    pub fn step(&mut self, direction: Direction) {
        self.translate(direction.vector());
    }

    /// Move the offset one unit in `direction` and every position one
    /// tile the opposite way.
    fn shift(&mut self, direction: Direction) {
        self.offset += direction.vector();
        let step = -direction.unit();
        if self.positions.is_empty() {
            return;
        }
        let old: TileList = self.positions.iter().copied().collect();
        self.positions = old.iter().map(|&tile| tile + step).collect();
        let moved: TileList = self.positions.iter().copied().collect();
        self.log(BodyChange::Removed(old));
        self.log(BodyChange::Added(moved));
    }

    // ── Board linking ───────────────────────────────────────────

    /// Record `board` as the owner of this body's index entries.
    ///
    /// Called by the board during registration. No-op when already
    /// linked to the same board; refused when linked to a different
    /// one, since two boards indexing one body would corrupt both.
    pub fn link(&mut self, board: BoardId) -> Result<(), LinkError> {
        match self.board {
            Some(current) if current != board => Err(LinkError::AlreadyLinked {
                current,
                requested: board,
            }),
            _ => {
                self.board = Some(board);
                Ok(())
            }
        }
    }

    /// Clear the board back-reference.
    ///
    /// Called by the board during unregistration; refused unless the
    /// caller is the currently linked board. Any undrained changes are
    /// discarded, as no subscriber remains to consume them.
    pub fn unlink(&mut self, board: BoardId) -> Result<(), LinkError> {
        match self.board {
            Some(current) if current == board => {
                self.board = None;
                self.pending.clear();
                Ok(())
            }
            current => Err(LinkError::NotLinked {
                current,
                requested: board,
            }),
        }
    }

    // ── Queries ─────────────────────────────────────────────────

    /// The occupied tiles in insertion order.
    pub fn positions(&self) -> impl Iterator<Item = Tile> + '_ {
        self.positions.iter().copied()
    }

    /// Whether `tile` is occupied.
    pub fn contains(&self, tile: Tile) -> bool {
        self.positions.contains(&tile)
    }

    /// Number of occupied tiles.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether no tile is occupied.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// The current sub-tile offset.
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// The board this body is linked to, if any.
    pub fn board(&self) -> Option<BoardId> {
        self.board
    }

    /// The smallest tile rectangle covering every position, or `None`
    /// for an empty body.
    pub fn bounds(&self) -> Option<Bounds> {
        let mut tiles = self.positions.iter().copied();
        let first = Bounds::of(tiles.next()?);
        Some(tiles.fold(first, |acc, tile| acc.expand(tile)))
    }

    // ── Change log ──────────────────────────────────────────────

    /// Drain the pending change log.
    ///
    /// Consumed by the board after every mediated mutation; rarely
    /// useful elsewhere. Always empty for an unlinked body.
    pub fn take_changes(&mut self) -> Vec<BodyChange> {
        std::mem::take(&mut self.pending)
    }

    fn log(&mut self, change: BodyChange) {
        if self.board.is_some() {
            self.pending.push(change);
        }
    }
}
