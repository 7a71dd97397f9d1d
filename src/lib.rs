// TombVec - a dynamic array with tombstone deletion
// Removals mark slots and defer physical compaction until a threshold is crossed

#![warn(rust_2018_idioms)]

pub mod algorithms;
pub mod vector;

// Re-exports for convenience
pub use algorithms::{search_all, search_begin, search_end, shuffle, shuffle_with, tv_sort};
pub use vector::{Cursor, CursorMut, GrowthPolicy, SlotState, TombVec, VecStats};

/// TombVec error types
pub mod error {
    use thiserror::Error;

    #[derive(Error, Debug)]
    pub enum Error {
        #[error("Empty container: {0}")]
        EmptyContainer(String),

        #[error("Index out of range: {0}")]
        IndexOutOfRange(String),

        #[error("Cursor out of range: {0}")]
        OutOfRange(String),

        #[error("Element not found: {0}")]
        ElementNotFound(String),

        #[error("Mismatched containers: {0}")]
        MismatchedContainer(String),

        #[error("Invalid construction: {0}")]
        InvalidConstruction(String),
    }

    pub type Result<T> = std::result::Result<T, Error>;
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
