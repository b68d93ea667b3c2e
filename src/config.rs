//! Configuration for StockDB
//!
//! Centralized configuration with defaults matching the classic
//! `database.dat` layout of 1000 slots.

use std::path::PathBuf;

use crate::error::{Result, StockError};
use crate::record::RECORD_SIZE;

/// Default number of slots in a data file
pub const DATABASE_MAX: usize = 1000;

/// Largest slot count whose file size and slot ids still fit in an `i64`
pub const MAX_CAPACITY: u64 = i64::MAX as u64 / RECORD_SIZE as u64;

/// Default data file name
pub const DATABASE_FILENAME: &str = "database.dat";

/// Main configuration for a StockDB store
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Path of the slot file. Created and preallocated on first open.
    pub data_file: PathBuf,

    /// Number of slots in the file. Fixed for the lifetime of the file;
    /// reopening with a different capacity fails size validation.
    pub capacity: usize,

    // -------------------------------------------------------------------------
    // Durability Configuration
    // -------------------------------------------------------------------------
    /// When slot writes are flushed to disk
    pub sync_strategy: SyncStrategy,
}

/// Sync strategy for slot writes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncStrategy {
    /// fsync after every slot write (safest, slowest)
    EveryWrite,

    /// fsync once when the store is closed
    OnClose,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DATABASE_FILENAME),
            capacity: DATABASE_MAX,
            sync_strategy: SyncStrategy::OnClose,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Check the configuration before any file is touched
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(StockError::Config(
                "capacity must be at least one slot".to_string(),
            ));
        }
        if self.capacity as u64 > MAX_CAPACITY {
            return Err(StockError::Config(format!(
                "capacity {} exceeds the maximum of {} slots",
                self.capacity, MAX_CAPACITY
            )));
        }
        if self.data_file.as_os_str().is_empty() {
            return Err(StockError::Config("data file path is empty".to_string()));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the data file path
    pub fn data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_file = path.into();
        self
    }

    /// Set the number of slots
    pub fn capacity(mut self, slots: usize) -> Self {
        self.config.capacity = slots;
        self
    }

    /// Set the sync strategy
    pub fn sync_strategy(mut self, strategy: SyncStrategy) -> Self {
        self.config.sync_strategy = strategy;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
