//! Configuration for SeatBit
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

/// Main configuration for a seat store
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Path of the seat data file (one byte per row)
    /// Created and zero-filled on first open if it does not exist.
    pub data_path: PathBuf,

    // -------------------------------------------------------------------------
    // Durability Configuration
    // -------------------------------------------------------------------------
    /// How each row write is flushed to the medium before returning
    pub sync_mode: SyncMode,
}

/// Row write sync mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncMode {
    /// fsync data and metadata after every write (safest)
    All,

    /// fdatasync after every write (skips metadata; file size never changes)
    Data,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("seats.dat"),
            sync_mode: SyncMode::Data,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the seat data file path
    pub fn data_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_path = path.into();
        self
    }

    /// Set the write sync mode
    pub fn sync_mode(mut self, mode: SyncMode) -> Self {
        self.config.sync_mode = mode;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
