//! # SeatBit
//!
//! A seat reservation store for a fixed-size venue with:
//! - One byte per row, one bit per seat
//! - Per-row locking with lazily created locks
//! - Atomic read-modify-write seat toggling
//! - Durable single-byte file access
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 Caller (CLI / threads)                       │
//! │             book("A1", 2) / cancel("A1", 2)                  │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                   Seat Coordinator                           │
//! │     validate → row lock → read / mask / write → unlock       │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │ Lock Table  │          │  Row Store  │
//!   │  (DashMap)  │          │ (seats.dat) │
//!   └─────────────┘          └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod layout;
pub mod storage;
pub mod coordinator;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{SeatError, Result};
pub use config::{Config, SyncMode};
pub use coordinator::{Action, SeatCoordinator};
pub use layout::{SeatRange, ROWS, SEATS_PER_ROW};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of SeatBit
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
