//! Seat Coordinator
//!
//! Validates booking requests and applies them to the row store.
//!
//! ## Responsibilities
//! - Parse and validate seat tokens before touching any lock or file
//! - Serialize all modifications to one row through that row's lock
//! - Translate seat ranges to bit masks and enforce booking invariants
//! - Collapse outcomes to a boolean at the caller boundary

use std::path::Path;
use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::Mutex;
use tracing::{debug, error, info};

use crate::config::Config;
use crate::error::{Result, SeatError};
use crate::layout::{self, SeatRange, ROWS};
use crate::storage::RowStore;

/// Kind of modification applied to a seat range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Mark the seats as booked
    Book,

    /// Mark the seats as available again
    Cancel,
}

/// Coordinates bookings over one seat store
///
/// ## Concurrency Model: One Lock Per Row
///
/// - Every read-modify-write of a row byte happens under that row's lock
/// - Rows never share a lock, so requests for different rows run in parallel
/// - The lock table is populated lazily with an atomic get-or-insert, so
///   two first-time requests for the same row always get the same lock
///
/// One coordinator should back a given store path for the lifetime of the
/// process. Construct it once at startup and share it (e.g. in an `Arc`).
pub struct SeatCoordinator {
    /// Byte-level access to the seat file
    store: RowStore,

    /// Row offset → row lock (entries are never removed)
    row_locks: DashMap<usize, Arc<Mutex<()>>>,
}

impl SeatCoordinator {
    /// Open or create the seat store described by `config`
    ///
    /// If the seat file does not exist it is created with every seat
    /// available. An existing file is used as-is. Failing to create the
    /// file is fatal for the caller: no request can be served without it.
    pub fn open(config: Config) -> Result<Self> {
        let store = RowStore::new(&config.data_path, config.sync_mode);

        if store.exists() {
            info!(path = %store.path().display(), "Opened existing seat store");
        } else {
            store.initialize(ROWS)?;
            info!(path = %store.path().display(), rows = ROWS, "Created seat store");
        }

        Ok(Self {
            store,
            row_locks: DashMap::with_capacity(ROWS),
        })
    }

    /// Open with a path (convenience method)
    ///
    /// Uses default config with the specified data file. Handy for
    /// isolated stores in tests.
    pub fn open_path(path: &Path) -> Result<Self> {
        Self::open(Config::builder().data_path(path).build())
    }

    /// Book `count` seats starting at `seat` (e.g. `"A1"`)
    ///
    /// Returns `false` for invalid requests, seats already taken and
    /// storage faults alike.
    pub fn book(&self, seat: &str, count: i64) -> bool {
        self.collapse(Action::Book, seat, self.try_book(seat, count))
    }

    /// Cancel `count` seats starting at `seat` (e.g. `"A1"`)
    ///
    /// Fails if none of the targeted seats is currently booked.
    pub fn cancel(&self, seat: &str, count: i64) -> bool {
        self.collapse(Action::Cancel, seat, self.try_cancel(seat, count))
    }

    /// Book seats, keeping the failure kind
    pub fn try_book(&self, seat: &str, count: i64) -> Result<()> {
        self.modify_seats(seat, count, Action::Book)
    }

    /// Cancel seats, keeping the failure kind
    pub fn try_cancel(&self, seat: &str, count: i64) -> Result<()> {
        self.modify_seats(seat, count, Action::Cancel)
    }

    /// Read the current byte of a row under its lock
    pub fn row_bits(&self, row: char) -> Result<u8> {
        let index = layout::row_index(row).ok_or_else(|| {
            SeatError::InvalidRequest(format!("row {row:?} is outside the venue"))
        })?;

        let lock = self.row_lock(index);
        let _guard = lock.lock();
        self.store.read_byte(index as u64)
    }

    /// Path of the seat data file
    pub fn path(&self) -> &Path {
        self.store.path()
    }

    /// Number of rows that have been touched so far
    pub fn lock_count(&self) -> usize {
        self.row_locks.len()
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    /// Validate, lock the row, and run the read-modify-write cycle
    fn modify_seats(&self, seat: &str, count: i64, action: Action) -> Result<()> {
        // Rejections here must not create a lock entry or touch the file
        let range = SeatRange::parse(seat, count)?;

        let lock = self.row_lock(range.row);
        let _guard = lock.lock();
        self.modify_row(&range, action)
    }

    /// Read-modify-write of one row byte (row lock must be held)
    fn modify_row(&self, range: &SeatRange, action: Action) -> Result<()> {
        let current = self.store.read_byte(range.offset())?;
        let mask = range.mask();

        let updated = match action {
            Action::Book => {
                if current & mask != 0 {
                    return Err(SeatError::SeatsTaken {
                        row: range.row,
                        mask,
                    });
                }
                current | mask
            }
            Action::Cancel => {
                if current & mask == 0 {
                    return Err(SeatError::SeatsNotBooked {
                        row: range.row,
                        mask,
                    });
                }
                current & !mask
            }
        };

        self.store.write_byte(range.offset(), updated)?;

        debug!(
            ?action,
            row = range.row,
            before = current,
            after = updated,
            "Row updated"
        );
        Ok(())
    }

    /// Get or create the lock for a row
    ///
    /// The map shard is released before the caller blocks on the row lock.
    fn row_lock(&self, row: usize) -> Arc<Mutex<()>> {
        self.row_locks
            .entry(row)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    /// Turn an outcome into the boolean boundary value
    fn collapse(&self, action: Action, seat: &str, outcome: Result<()>) -> bool {
        match outcome {
            Ok(()) => true,
            Err(e) if e.is_storage_fault() => {
                error!(
                    ?action,
                    seat,
                    path = %self.store.path().display(),
                    "Failed to modify seat data file: {}",
                    e
                );
                false
            }
            Err(_) => false,
        }
    }
}
