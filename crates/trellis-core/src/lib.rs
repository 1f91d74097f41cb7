//! Core types for the Trellis board substrate.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the grid geometry ([`Tile`], [`Vec2`], [`Bounds`]), the cardinal
//! direction model ([`Direction`], [`DirectionSet`]), strongly-typed
//! identifiers, and the change-notification type ([`BodyChange`]) that
//! carries position updates from a body to the board index.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod change;
pub mod direction;
pub mod id;
pub mod tile;
pub mod vec2;

pub use change::{BodyChange, TileList};
pub use direction::{Direction, DirectionSet};
pub use id::{BoardId, StructureId, SubscriptionId};
pub use tile::{Bounds, Tile};
pub use vec2::Vec2;
