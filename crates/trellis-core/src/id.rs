//! Strongly-typed identifiers for boards, structures, and subscriptions.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique [`BoardId`] allocation.
static BOARD_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Counter for unique [`SubscriptionId`] allocation.
static SUBSCRIPTION_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique per-instance identifier for a board.
///
/// Allocated from a monotonic atomic counter via [`BoardId::next`]. A
/// body stores this as a plain lookup key when linked, never as an
/// owning reference, so no reference cycle between a body and its board
/// can form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoardId(u64);

impl BoardId {
    /// Allocate a fresh, unique board ID. Thread-safe.
    pub fn next() -> Self {
        Self(BOARD_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for BoardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifies a structure registered on a board.
///
/// Minted by the board at registration from a per-board sequence;
/// `StructureId(n)` is the n-th structure that board ever registered.
/// IDs are never reused within one board's lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StructureId(pub u64);

impl fmt::Display for StructureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for StructureId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// Handle for one active change-notification subscription.
///
/// A board holds exactly one per registered structure and drops it on
/// unregistration, making unsubscription deterministic and inspectable.
/// Allocated from a monotonic atomic counter via [`SubscriptionId::next`],
/// so a handle is never confused with one from an earlier registration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    /// Allocate a fresh, unique subscription ID. Thread-safe.
    pub fn next() -> Self {
        Self(SUBSCRIPTION_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
