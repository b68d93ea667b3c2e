//! Record Module
//!
//! The product record and its fixed-width on-disk slot layout.
//!
//! ## Slot Format (509 bytes, little-endian)
//! ```text
//! ┌────────────┬──────────────────────────┬──────────────┬─────────────┐
//! │ Status (1) │ Description (500)        │ Quantity (4) │  Price (4)  │
//! │ 0=Empty    │ UTF-8, NUL-padded,       │ i32 LE       │ f32 LE      │
//! │ 1=Occupied │ at most 499 text bytes   │              │             │
//! └────────────┴──────────────────────────┴──────────────┴─────────────┘
//! ```

mod codec;

pub use codec::{decode_record, encode_record, truncate_description};

// =============================================================================
// Layout Constants
// =============================================================================

/// Size of the status byte
pub const STATUS_SIZE: usize = 1;

/// Size of the description field, terminator included
pub const DESCRIPTION_CAPACITY: usize = 500;

/// Longest description that survives a round trip (one byte is reserved for NUL)
pub const DESCRIPTION_MAX_LEN: usize = DESCRIPTION_CAPACITY - 1;

/// Size of the quantity field (i32)
pub const QUANTITY_SIZE: usize = 4;

/// Size of the price field (f32)
pub const PRICE_SIZE: usize = 4;

/// Total bytes per slot: 1 + 500 + 4 + 4 = 509
pub const RECORD_SIZE: usize = STATUS_SIZE + DESCRIPTION_CAPACITY + QUANTITY_SIZE + PRICE_SIZE;

// =============================================================================
// Record Types
// =============================================================================

/// Slot status flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Status {
    /// Free for allocation; the other fields carry no meaning
    Empty = 0,

    /// Holds a live product
    Occupied = 1,
}

impl Status {
    /// Parse a status byte. Only 0 and 1 are defined.
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0 => Some(Status::Empty),
            1 => Some(Status::Occupied),
            _ => None,
        }
    }
}

/// A product record as stored in one slot
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub status: Status,
    pub description: String,
    pub quantity: i32,
    pub price: f32,
}

impl Record {
    /// Create an occupied record
    pub fn new(description: impl Into<String>, quantity: i32, price: f32) -> Self {
        Self {
            status: Status::Occupied,
            description: description.into(),
            quantity,
            price,
        }
    }

    /// The record written into every slot of a fresh file
    pub fn empty() -> Self {
        Self {
            status: Status::Empty,
            description: String::new(),
            quantity: 0,
            price: 0.0,
        }
    }

    pub fn is_occupied(&self) -> bool {
        self.status == Status::Occupied
    }
}
