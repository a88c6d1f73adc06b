//! Row Store
//!
//! Single-byte read/write primitives over the seat file.
//!
//! Every call opens the file, seeks, performs one read or write and
//! drops the handle before returning. No handle is shared between calls,
//! so callers only need the row lock to serialize access.

use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::SyncMode;
use crate::error::{Result, SeatError};

/// Byte-addressable store, one byte per row
#[derive(Debug, Clone)]
pub struct RowStore {
    /// Path of the seat file
    path: PathBuf,

    /// How writes are made durable
    sync_mode: SyncMode,
}

impl RowStore {
    /// Create a store handle for the given path (does not touch the file)
    pub fn new(path: impl Into<PathBuf>, sync_mode: SyncMode) -> Self {
        Self {
            path: path.into(),
            sync_mode,
        }
    }

    /// Create the seat file and fill it with `total_rows` zero bytes
    ///
    /// Overwrites an existing file. Callers that must preserve existing
    /// bookings check `exists()` first.
    pub fn initialize(&self, total_rows: usize) -> Result<()> {
        let init = || -> std::io::Result<()> {
            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&self.path)?;
            file.write_all(&vec![0u8; total_rows])?;
            file.sync_all()
        };

        init().map_err(|source| SeatError::StoreInit {
            path: self.path.clone(),
            source,
        })?;

        debug!(path = %self.path.display(), rows = total_rows, "Initialized seat store");
        Ok(())
    }

    /// Read the byte at `offset`
    pub fn read_byte(&self, offset: u64) -> Result<u8> {
        let mut file = File::open(&self.path)?;
        Self::check_offset(&file, offset)?;

        file.seek(SeekFrom::Start(offset))?;
        let mut buf = [0u8; 1];
        file.read_exact(&mut buf)?;
        Ok(buf[0])
    }

    /// Write `value` at `offset` and sync it before returning
    ///
    /// Never creates or extends the file: a missing file or an offset
    /// past the end is an error.
    pub fn write_byte(&self, offset: u64, value: u8) -> Result<()> {
        let mut file = OpenOptions::new().write(true).open(&self.path)?;
        Self::check_offset(&file, offset)?;

        file.seek(SeekFrom::Start(offset))?;
        file.write_all(&[value])?;

        match self.sync_mode {
            SyncMode::All => file.sync_all()?,
            SyncMode::Data => file.sync_data()?,
        }
        Ok(())
    }

    /// Whether the seat file exists
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Current size of the seat file in bytes (= number of rows)
    pub fn len(&self) -> Result<u64> {
        Ok(std::fs::metadata(&self.path)?.len())
    }

    /// Whether the seat file holds no rows
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    /// Path of the seat file
    pub fn path(&self) -> &Path {
        &self.path
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    fn check_offset(file: &File, offset: u64) -> Result<()> {
        let len = file.metadata()?.len();
        if offset >= len {
            return Err(SeatError::OffsetOutOfRange { offset, len });
        }
        Ok(())
    }
}
