//! Custom error types for the symdel crate.

use thiserror::Error;

/// The primary error type for all operations in this crate.
///
/// Errors surface at two boundaries only: dictionary creation
/// (configuration) and dictionary loading (I/O, resource exhaustion).
/// Lookup never fails; it returns an empty suggestion list instead.
#[derive(Debug, Error)]
pub enum Error {
    /// An error originating from I/O operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The requested maximum edit distance is outside the supported range.
    #[error("max edit distance must be between 1 and 3, got {0}")]
    InvalidMaxDistance(u32),

    /// The requested prefix length cannot be used for delete enumeration.
    #[error("prefix length must be at least 1, got {0}")]
    InvalidPrefixLength(u32),

    /// The string arena ran out of room during a load pass.
    ///
    /// The dictionary remains valid for lookup against everything admitted
    /// before the failing line.
    #[error("string arena exhausted: needed {needed} more bytes ({used}/{capacity} used)")]
    ArenaExhausted {
        needed: usize,
        used: usize,
        capacity: usize,
    },

    /// Every slot of the delete index is occupied.
    #[error("delete index is full: all {slots} slots occupied")]
    DeleteIndexFull { slots: usize },
}

/// A convenience `Result` type alias using the crate's `Error` type.
pub type Result<T> = std::result::Result<T, Error>;
