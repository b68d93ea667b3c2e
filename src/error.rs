//! Error types for StockDB
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using StockError
pub type Result<T> = std::result::Result<T, StockError>;

/// Unified error type for StockDB operations
#[derive(Debug, Error)]
pub enum StockError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Store Errors
    // -------------------------------------------------------------------------
    #[error("Store is full: all {capacity} slots are occupied")]
    StoreFull { capacity: usize },

    #[error("Slot {0} is not occupied")]
    NotOccupied(i64),

    #[error("Invalid slot index {index}: must be in 0..{capacity}")]
    InvalidIndex { index: i64, capacity: usize },

    #[error("Corrupt store: {0}")]
    CorruptStore(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl StockError {
    /// Whether the error is an ordinary outcome the caller can report and move
    /// past (full store, empty slot, bad index), as opposed to a storage fault.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            StockError::StoreFull { .. }
                | StockError::NotOccupied(_)
                | StockError::InvalidIndex { .. }
        )
    }
}
