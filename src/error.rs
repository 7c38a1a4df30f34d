//! The error type shared by every fallible operation in this crate.

use thiserror::Error;

/// Convenience alias for results produced by this crate.
pub type Result<T, E = TreeError> = std::result::Result<T, E>;

/// Errors returned when a query or build step is handed input it cannot honor.
///
/// Operations that simply find nothing to do (inserting a duplicate, deleting an absent key)
/// report that in their return value instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TreeError {
    /// Asked for the `k`th smallest element of a tree holding fewer than `k` elements (or `k` was 0).
    #[error("rank {k} is out of range for a tree of {len} elements")]
    RankOutOfRange {
        /// Requested 1-indexed rank.
        k: usize,
        /// Number of elements in the tree.
        len: usize,
    },

    /// A position outside `[0, len)` of the logical array.
    #[error("index {index} is out of bounds for length {len}")]
    IndexOutOfBounds {
        /// Offending index.
        index: usize,
        /// Logical length of the array.
        len: usize,
    },

    /// A range whose lower end lies past its upper end.
    #[error("invalid range: low {low} is greater than high {high}")]
    InvalidRange {
        /// Inclusive lower end.
        low: usize,
        /// Inclusive upper end.
        high: usize,
    },

    /// A level-order slot holds a value but no node is left to adopt it.
    #[error("slot {position} holds a value but has no parent")]
    OrphanedSlot {
        /// Zero-based position of the slot in the input.
        position: usize,
    },

    /// Serialized state that breaks the invariants of the structure it claims to be.
    #[error("malformed {structure}: {reason}")]
    Malformed {
        /// Structure being restored.
        structure: &'static str,
        /// Broken invariant.
        reason: &'static str,
    },
}
