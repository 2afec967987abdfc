//! Error types for shelf arrangement.

use thiserror::Error;

/// Errors raised by scoring, ordering and arrangement operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShelfError {
    /// A computed affinity came out negative.
    ///
    /// Unreachable with a non-negative compatibility table.
    #[error("affinity between '{a}' and '{b}' is negative ({value})")]
    InvalidScore {
        /// Name of the first item.
        a: String,
        /// Name of the second item.
        b: String,
        /// The offending value.
        value: i64,
    },

    /// Strategy id outside `{1, 2, 3}`.
    #[error("unknown strategy id {0}; expected 1 (exact), 2 (local search) or 3 (greedy)")]
    UnknownStrategy(i64),

    /// No item with this name in the ordered sequence or working set.
    #[error("item '{0}' not found")]
    ItemNotFound(String),

    /// Ordering was requested for zero items.
    #[error("cannot order an empty item set")]
    EmptyInput,

    /// Item failed construction checks.
    #[error("invalid item: {0}")]
    InvalidItem(String),

    /// Two items in a working set share a name.
    #[error("item '{0}' is already in the working set")]
    DuplicateItem(String),

    /// Attribute name not present in the catalog.
    #[error("unknown attribute '{0}'")]
    UnknownAttribute(String),

    /// Type id does not index into the compatibility table.
    #[error("type id {type_id} out of range for a {size}x{size} compatibility table")]
    TypeIdOutOfRange {
        /// The requested id.
        type_id: usize,
        /// Table dimension.
        size: usize,
    },

    /// Compatibility table rows are empty or not square.
    #[error("invalid compatibility table: {0}")]
    InvalidTable(String),

    /// 1-based position outside `1..=len`.
    #[error("position {position} out of range 1..={len}")]
    PositionOutOfRange {
        /// Requested 1-based position.
        position: usize,
        /// Length of the ordered sequence.
        len: usize,
    },

    /// Strategy configuration rejected by `validate`.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result alias for shelf operations.
pub type Result<T> = std::result::Result<T, ShelfError>;
