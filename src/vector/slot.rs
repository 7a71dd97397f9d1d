//! Slot state tags for the tombstone vector

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle tag of a single physical slot.
///
/// Legal transitions: `Empty -> Busy` on a write, `Busy -> Deleted` on an
/// erase or pop, `Deleted -> Busy` when a push reuses a tombstoned edge
/// slot, and `Deleted -> Empty` only through a full compaction that rewrites
/// the buffer. The storage engine is the only place that performs them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlotState {
    /// Never written since the last rebuild
    Empty,
    /// Holds a live element
    Busy,
    /// Holds a tombstoned element awaiting compaction
    Deleted,
}

impl SlotState {
    /// True for slots that count toward the logical size
    pub fn is_live(self) -> bool {
        self == SlotState::Busy
    }

    /// True for tombstoned slots
    pub fn is_deleted(self) -> bool {
        self == SlotState::Deleted
    }
}

impl fmt::Display for SlotState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            SlotState::Empty => "empty",
            SlotState::Busy => "busy",
            SlotState::Deleted => "deleted",
        };
        write!(f, "{}", tag)
    }
}
