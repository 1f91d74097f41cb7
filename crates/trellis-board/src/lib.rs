//! Multi-tile bodies and the board-level spatial index.
//!
//! A [`Body`] owns the set of integer tiles one structure occupies plus
//! a continuous sub-tile offset that is normalized back into whole-tile
//! shifts. A [`Board`] owns the registered structures and derives a
//! tile → occupants index from their bodies, kept consistent through a
//! synchronous change-notification protocol: every mutation of a
//! registered body flows through [`Board::with_body_mut`], which drains
//! the body's change log and folds it into the index before returning.
//!
//! Structures are reached only through the narrow [`Structural`]
//! capability; the board never names concrete entity types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod board;
pub mod body;
pub mod error;
pub mod structural;

pub use board::Board;
pub use body::Body;
pub use error::{LinkError, RegisterError};
pub use structural::Structural;
