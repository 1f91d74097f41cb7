//! The capability trait through which a board reaches an entity's body.

use crate::body::Body;

/// A registrable game entity occupying one or more board tiles.
///
/// This is the only surface the board touches: read access for index
/// construction and teardown, write access for the mediated mutation
/// path. The back-reference to the owning board is served by
/// [`Body::board`], so implementors carry no board state of their own.
/// No inheritance hierarchy is required; anything holding a [`Body`]
/// qualifies.
pub trait Structural {
    /// The positional state owned by this structure.
    fn body(&self) -> &Body;

    /// Mutable access to the positional state.
    fn body_mut(&mut self) -> &mut Body;
}
