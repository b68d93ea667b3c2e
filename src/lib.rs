//! # StockDB
//!
//! A single-user stock control tool with:
//! - A preallocated file of fixed-size product slots
//! - Slot index as the product ID, reused after deletion
//! - Lowest-free-slot allocation by linear scan
//! - An interactive List / New / Edit / Delete menu
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Menu Session (cli)                      │
//! │            List / New / Edit / Delete / Quit                │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ create / get / update / delete / list
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                    RecordStore (store)                      │
//! │          bounds checks, slot allocation, file lock          │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ encode / decode
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                  Record codec (record)                      │
//! │              509-byte little-endian slots                   │
//! └─────────────────────────────────────────────────────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod record;
pub mod store;
pub mod cli;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{Result, StockError};
pub use config::{Config, SyncStrategy, DATABASE_MAX};
pub use record::{Record, Status, RECORD_SIZE};
pub use store::{RecordStore, SlotId};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of StockDB
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
