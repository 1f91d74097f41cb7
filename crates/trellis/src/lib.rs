//! Trellis: a tile-board simulation substrate.
//!
//! This is the top-level facade crate that re-exports the public API
//! from the Trellis sub-crates. For most users, adding `trellis` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use trellis::prelude::*;
//!
//! // A structure is anything that exposes a Body.
//! #[derive(Default)]
//! struct Planter {
//!     body: Body,
//! }
//!
//! impl Structural for Planter {
//!     fn body(&self) -> &Body {
//!         &self.body
//!     }
//!     fn body_mut(&mut self) -> &mut Body {
//!         &mut self.body
//!     }
//! }
//!
//! // Register it on a board and move it around.
//! let mut planter = Planter::default();
//! planter.body_mut().add_tile(Tile::new(0, 0));
//!
//! let mut board = Board::new();
//! let id = board.register(Box::new(planter)).unwrap();
//!
//! board.with_body_mut(id, |body| body.translate(Vec2::new(1.4, 0.0))).unwrap();
//!
//! assert_eq!(board.inspect(Tile::new(1, 0)), vec![id]);
//! let body = board.body(id).unwrap();
//! assert!((body.offset().x - 0.4).abs() < 1e-5);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `trellis-core` | Tiles, vectors, directions, IDs, change notifications |
//! | [`board`] | `trellis-board` | [`board::Body`], [`board::Board`], the [`board::Structural`] trait |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core geometry and identifier types (`trellis-core`).
///
/// Contains [`types::Tile`] and [`types::Vec2`] coordinates,
/// [`types::Direction`] and [`types::DirectionSet`], the ID types, and
/// the [`types::BodyChange`] notification enum.
pub use trellis_core as types;

/// Bodies, boards, and the spatial index (`trellis-board`).
///
/// The heart of the substrate: [`board::Body`] tracks a structure's
/// tiles and sub-tile offset, [`board::Board`] owns registered
/// structures and keeps the tile → occupants index consistent.
pub use trellis_board as board;

/// Common imports for typical Trellis usage.
///
/// ```rust
/// use trellis::prelude::*;
/// ```
pub mod prelude {
    // Geometry
    pub use trellis_core::{Bounds, Direction, DirectionSet, Tile, Vec2};

    // IDs and notifications
    pub use trellis_core::{BoardId, BodyChange, StructureId, SubscriptionId};

    // Board substrate
    pub use trellis_board::{Board, Body, LinkError, RegisterError, Structural};
}
