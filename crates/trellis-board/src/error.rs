//! Error types for body linking and structure registration.

use std::error::Error;
use std::fmt;

use trellis_core::BoardId;

use crate::structural::Structural;

/// Errors from the link/unlink guards on a body.
///
/// These are the system's one class of true failure: precondition
/// violations that would silently corrupt a board's tile index if
/// allowed through. Ordinary invalid input (duplicate adds, removing an
/// absent tile, unregistering an unknown ID) is a documented no-op
/// instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkError {
    /// The body is already linked to a different board.
    AlreadyLinked {
        /// The board the body is currently linked to.
        current: BoardId,
        /// The board that attempted the link.
        requested: BoardId,
    },
    /// The body is not linked to the board attempting to unlink it.
    NotLinked {
        /// The board the body is currently linked to, if any.
        current: Option<BoardId>,
        /// The board that attempted the unlink.
        requested: BoardId,
    },
}

impl fmt::Display for LinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyLinked { current, requested } => {
                write!(
                    f,
                    "body is already linked to board {current}, refused link to board {requested}"
                )
            }
            Self::NotLinked { current: Some(current), requested } => {
                write!(
                    f,
                    "body is linked to board {current}, refused unlink by board {requested}"
                )
            }
            Self::NotLinked { current: None, requested } => {
                write!(f, "body is not linked, refused unlink by board {requested}")
            }
        }
    }
}

impl Error for LinkError {}

/// A rejected registration, carrying the structure back to the caller.
///
/// `register` consumes the structure by value; when the body's link
/// guard refuses (it is still linked to another board), the structure
/// must not be lost, so the error returns it via
/// [`into_structure`](RegisterError::into_structure).
pub struct RegisterError {
    kind: LinkError,
    structure: Box<dyn Structural>,
}

impl RegisterError {
    pub(crate) fn new(kind: LinkError, structure: Box<dyn Structural>) -> Self {
        Self { kind, structure }
    }

    /// The link violation that caused the rejection.
    pub fn kind(&self) -> LinkError {
        self.kind
    }

    /// Recover the rejected structure.
    pub fn into_structure(self) -> Box<dyn Structural> {
        self.structure
    }
}

impl fmt::Debug for RegisterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterError")
            .field("kind", &self.kind)
            .field("structure", &"<dyn Structural>")
            .finish()
    }
}

impl fmt::Display for RegisterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "registration rejected: {}", self.kind)
    }
}

impl Error for RegisterError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.kind)
    }
}
