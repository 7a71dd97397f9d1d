//! Tombstone Vector
//!
//! A dynamic array that defers the cost of removal. Erased slots are
//! tombstoned in place and swept out in one pass once they reach a fixed
//! fraction of the written range.
//!
//! # Architecture
//!
//! ```text
//! TombVec<T>
//!   └─→ SlotBuffer<T>
//!         ├─→ data:   [ 7 | 3 | 9 | 4 | . | . ]   one value per written slot
//!         ├─→ states: [ B | D | B | B | E | E ]   Busy / Deleted / Empty
//!         ├─→ GrowthPolicy  → capacity in steps of 15
//!         └─→ compaction    → deleted/used >= 0.15 sweeps tombstones
//!
//! Cursor / CursorMut → physical position + borrow of the parent
//! Iter / IterMut / IntoIter → live elements in logical order
//! ```
//!
//! Logical indices count live slots only; a forward scan of the state tags
//! maps them to physical slots. Edge tombstones (slot 0 and the last written
//! slot) are reused by pushes in O(1); interior tombstones wait for the
//! sweep.

pub mod bench;
pub mod cursor;
pub mod policy;
pub mod slot;
pub mod tombvec;

mod storage;

pub use cursor::{Cursor, CursorMut, IntoIter, Iter, IterMut};
pub use policy::GrowthPolicy;
pub use slot::SlotState;
pub use tombvec::{TombVec, VecStats};
