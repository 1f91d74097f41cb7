//! Test fixtures for Trellis development.
//!
//! Provides [`Block`], a minimal [`Structural`] implementation for
//! exercising board registration and the tile index in tests.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use trellis_board::{Body, Structural};
use trellis_core::Tile;

/// The simplest possible structure: a labelled body and nothing else.
///
/// `label` exists so tests can tell fixtures apart after they come
/// back out of a board as `Box<dyn Structural>`.
#[derive(Debug, Default)]
pub struct Block {
    label: String,
    body: Body,
}

impl Block {
    /// An empty block with the given label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            body: Body::new(),
        }
    }

    /// A block whose body occupies `tiles`.
    pub fn from_tiles(label: impl Into<String>, tiles: impl IntoIterator<Item = Tile>) -> Self {
        Self {
            label: label.into(),
            body: Body::from_tiles(tiles),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl Structural for Block {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }
}
