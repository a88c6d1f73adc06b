//! Error types for SeatBit
//!
//! Provides a unified error type for all operations.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using SeatError
pub type Result<T> = std::result::Result<T, SeatError>;

/// Unified error type for SeatBit operations
#[derive(Debug, Error)]
pub enum SeatError {
    // -------------------------------------------------------------------------
    // Storage Faults
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to initialize seat store at {}: {source}", path.display())]
    StoreInit {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Row offset {offset} out of range (store holds {len} rows)")]
    OffsetOutOfRange { offset: u64, len: u64 },

    // -------------------------------------------------------------------------
    // Validation Errors
    // -------------------------------------------------------------------------
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    // -------------------------------------------------------------------------
    // Conflict Errors
    // -------------------------------------------------------------------------
    #[error("Seats already booked in row {row} (mask {mask:#010b})")]
    SeatsTaken { row: usize, mask: u8 },

    #[error("No booked seats to cancel in row {row} (mask {mask:#010b})")]
    SeatsNotBooked { row: usize, mask: u8 },
}

impl SeatError {
    /// True for failures of the storage medium, as opposed to rejected requests
    pub fn is_storage_fault(&self) -> bool {
        matches!(
            self,
            SeatError::Io(_) | SeatError::StoreInit { .. } | SeatError::OffsetOutOfRange { .. }
        )
    }

    /// True for booking/cancellation conflicts against the current row state
    pub fn is_conflict(&self) -> bool {
        matches!(self, SeatError::SeatsTaken { .. } | SeatError::SeatsNotBooked { .. })
    }
}
