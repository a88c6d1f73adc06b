//! Storage Module
//!
//! Durable, byte-addressable storage for the seat map.
//!
//! ## Responsibilities
//! - Create and zero-fill the seat file on first use
//! - Read and write single row bytes in place
//! - Sync every row write before returning
//!
//! ## File Format
//! ```text
//! ┌────────┬────────┬────────┬─────┬────────┐
//! │ Row A  │ Row B  │ Row C  │ ... │ Row T  │
//! │ 1 byte │ 1 byte │ 1 byte │     │ 1 byte │
//! └────────┴────────┴────────┴─────┴────────┘
//! ```
//! Bit `j` (least-significant first) of byte `i` is seat `j` of row `i`.
//! The file is never appended to or truncated after initialization.

mod row_store;

pub use row_store::RowStore;
