//! The board: registered structures and the derived tile index.

use indexmap::IndexMap;
use smallvec::SmallVec;

use trellis_core::{BoardId, BodyChange, Bounds, StructureId, SubscriptionId, Tile};

use crate::body::Body;
use crate::error::RegisterError;
use crate::structural::Structural;

/// Occupants of one tile. Most tiles hold one or two structures.
type Bucket = SmallVec<[StructureId; 2]>;

/// A board: the registry of structures and the tile → occupants index.
///
/// The board owns every registered structure outright, so all mutation
/// of a registered body passes through [`with_body_mut`], which applies
/// the body's change notifications to the index before returning. The
/// index therefore never drifts: a structure appears in a tile's bucket
/// exactly when its body occupies that tile, and no empty bucket is
/// ever retained.
///
/// All internal collections are insertion-ordered, so queries like
/// [`inspect`] and [`structure_ids`] return deterministic orderings.
///
/// [`with_body_mut`]: Board::with_body_mut
/// [`inspect`]: Board::inspect
/// [`structure_ids`]: Board::structure_ids
///
/// # Examples
///
/// ```
/// use trellis_board::Board;
/// use trellis_core::{Tile, Vec2};
/// use trellis_test_utils::Block;
///
/// let mut board = Board::new();
/// let id = board
///     .register(Box::new(Block::from_tiles("vine", [Tile::new(0, 0)])))
///     .unwrap();
/// assert_eq!(board.inspect(Tile::new(0, 0)), vec![id]);
///
/// board.with_body_mut(id, |body| body.add(Vec2::new(1.0, 0.0))).unwrap();
/// assert_eq!(board.inspect(Tile::new(1, 0)), vec![id]);
/// ```
pub struct Board {
    id: BoardId,
    structures: IndexMap<StructureId, Box<dyn Structural>>,
    tiles: IndexMap<Tile, Bucket>,
    subscriptions: IndexMap<StructureId, SubscriptionId>,
    next_structure: u64,
}

impl Board {
    /// An empty board with a fresh [`BoardId`].
    pub fn new() -> Self {
        Self {
            id: BoardId::next(),
            structures: IndexMap::new(),
            tiles: IndexMap::new(),
            subscriptions: IndexMap::new(),
            next_structure: 0,
        }
    }

    /// This board's identity, as stored in linked bodies.
    pub fn id(&self) -> BoardId {
        self.id
    }

    // ── Registration ────────────────────────────────────────────

    /// Register a structure, taking ownership of it.
    ///
    /// Links the structure's body to this board, indexes every tile the
    /// body currently occupies, and opens a change-notification
    /// subscription. Returns the minted [`StructureId`] handle.
    ///
    /// The one failure mode is a body still linked to another board;
    /// the error hands the structure back untouched. Registering the
    /// same structure twice is impossible by construction, since
    /// registration consumes it.
    pub fn register(
        &mut self,
        mut structure: Box<dyn Structural>,
    ) -> Result<StructureId, RegisterError> {
        if let Err(kind) = structure.body_mut().link(self.id) {
            return Err(RegisterError::new(kind, structure));
        }
        let id = StructureId(self.next_structure);
        self.next_structure += 1;
        for tile in structure.body().positions() {
            self.tiles.entry(tile).or_default().push(id);
        }
        let _ = self.subscriptions.insert(id, SubscriptionId::next());
        let _ = self.structures.insert(id, structure);
        Ok(id)
    }

    /// Unregister a structure and hand it back.
    ///
    /// Removes the structure from every tile bucket it occupies
    /// (dropping buckets that empty out), closes its subscription, and
    /// unlinks its body. Returns `None` (no-op) for an unknown ID.
    pub fn unregister(&mut self, id: StructureId) -> Option<Box<dyn Structural>> {
        let mut structure = self.structures.shift_remove(&id)?;
        let occupied: Vec<Tile> = structure.body().positions().collect();
        for tile in occupied {
            self.remove_occupant(tile, id);
        }
        let subscription = self.subscriptions.shift_remove(&id);
        debug_assert!(
            subscription.is_some(),
            "registered structure {id} had no subscription"
        );
        if structure.body_mut().unlink(self.id).is_err() {
            panic!("body of structure {id} lost its board link while registered");
        }
        Some(structure)
    }

    /// Drop every structure at once, returning them in registration
    /// order.
    ///
    /// This is the bulk path: the whole tile index and subscription
    /// table are discarded in one step instead of tearing down each
    /// structure coordinate by coordinate. Every returned structure is
    /// unlinked and free to register elsewhere.
    pub fn clear(&mut self) -> Vec<Box<dyn Structural>> {
        self.tiles.clear();
        self.subscriptions.clear();
        let board = self.id;
        self.structures
            .drain(..)
            .map(|(id, mut structure)| {
                if structure.body_mut().unlink(board).is_err() {
                    panic!("body of structure {id} lost its board link while registered");
                }
                structure
            })
            .collect()
    }

    // ── Mediated mutation ───────────────────────────────────────

    /// Mutate a registered structure's body, then synchronously fold
    /// its change notifications into the tile index.
    ///
    /// Returns `None` (no-op) for an unknown ID, otherwise the
    /// closure's result. By the time this returns, the index reflects
    /// every mutation the closure made; no intermediate state is ever
    /// observable.
    ///
    /// # Panics
    ///
    /// Panics if the closure tampers with the body's link state. A
    /// registered body that no longer names this board cannot be
    /// indexed correctly, and failing fast beats silent corruption.
    pub fn with_body_mut<R>(
        &mut self,
        id: StructureId,
        f: impl FnOnce(&mut Body) -> R,
    ) -> Option<R> {
        let board = self.id;
        let structure = self.structures.get_mut(&id)?;
        let output = f(structure.body_mut());
        let body = structure.body_mut();
        assert!(
            body.board() == Some(board),
            "body of structure {id} unlinked during a mediated mutation"
        );
        let changes = body.take_changes();
        for change in changes {
            self.apply(id, change);
        }
        Some(output)
    }

    /// Fold one change notification into the index.
    ///
    /// Additions ensure a bucket and append, never replace: a tile
    /// hosting several structures keeps all of them. Changes arrive in
    /// log order, so a whole-body shift removes the old tiles before
    /// adding the new ones.
    fn apply(&mut self, id: StructureId, change: BodyChange) {
        match change {
            BodyChange::Added(tiles) => {
                for tile in tiles {
                    let bucket = self.tiles.entry(tile).or_default();
                    if !bucket.contains(&id) {
                        bucket.push(id);
                    }
                }
            }
            BodyChange::Removed(tiles) => {
                for tile in tiles {
                    self.remove_occupant(tile, id);
                }
            }
            BodyChange::Reset => {
                self.tiles.retain(|_, bucket| {
                    bucket.retain(|occupant| *occupant != id);
                    !bucket.is_empty()
                });
            }
            BodyChange::Reordered => {}
        }
    }

    fn remove_occupant(&mut self, tile: Tile, id: StructureId) {
        if let Some(bucket) = self.tiles.get_mut(&tile) {
            bucket.retain(|occupant| *occupant != id);
            if bucket.is_empty() {
                let _ = self.tiles.shift_remove(&tile);
            }
        }
    }

    // ── Queries ─────────────────────────────────────────────────

    /// Snapshot of the structures occupying `tile`, in the order they
    /// arrived there. Empty when the tile is vacant. Never a live view
    /// into the index.
    pub fn inspect(&self, tile: Tile) -> Vec<StructureId> {
        self.tiles
            .get(&tile)
            .map(|bucket| bucket.to_vec())
            .unwrap_or_default()
    }

    /// Number of registered structures.
    pub fn len(&self) -> usize {
        self.structures.len()
    }

    /// Whether no structure is registered.
    pub fn is_empty(&self) -> bool {
        self.structures.is_empty()
    }

    /// Whether `id` names a registered structure.
    pub fn contains(&self, id: StructureId) -> bool {
        self.structures.contains_key(&id)
    }

    /// The registered structure behind `id`.
    pub fn structure(&self, id: StructureId) -> Option<&dyn Structural> {
        self.structures.get(&id).map(|boxed| boxed.as_ref())
    }

    /// Read access to a registered structure's body.
    pub fn body(&self, id: StructureId) -> Option<&Body> {
        self.structure(id).map(Structural::body)
    }

    /// The active subscription handle for `id`, if registered.
    pub fn subscription(&self, id: StructureId) -> Option<SubscriptionId> {
        self.subscriptions.get(&id).copied()
    }

    /// Registered structure IDs in registration order.
    pub fn structure_ids(&self) -> impl Iterator<Item = StructureId> + '_ {
        self.structures.keys().copied()
    }

    /// Every tile with at least one occupant.
    ///
    /// The no-empty-buckets invariant makes this exactly the index key
    /// set.
    pub fn occupied_tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        self.tiles.keys().copied()
    }

    /// The smallest tile rectangle covering every occupied tile, or
    /// `None` for an empty index.
    pub fn bounds(&self) -> Option<Bounds> {
        let mut tiles = self.occupied_tiles();
        let first = Bounds::of(tiles.next()?);
        Some(tiles.fold(first, |acc, tile| acc.expand(tile)))
    }
}

impl std::fmt::Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Board")
            .field("id", &self.id)
            .field("structures", &self.structures.len())
            .field("occupied_tiles", &self.tiles.len())
            .finish()
    }
}
