//! Store Module
//!
//! Durable, random-access storage for fixed-size product records.
//!
//! ## Responsibilities
//! - Create and preallocate the slot file on first open
//! - Validate the file size on every open
//! - Allocate the lowest free slot on insert (linear scan from slot 0)
//! - Read, overwrite and soft-delete slots by index
//! - Enumerate occupied slots in ascending index order
//!
//! ## File Format
//! ```text
//! ┌──────────────┬──────────────┬──────────────┬─────┬──────────────────┐
//! │ Slot 0 (509) │ Slot 1 (509) │ Slot 2 (509) │ ... │ Slot N-1 (509)   │
//! └──────────────┴──────────────┴──────────────┴─────┴──────────────────┘
//! ^ offset 0     ^ 509          ^ 1018
//! ```
//! The file always holds exactly `capacity` slots. It never grows or shrinks;
//! deleting a record only flips its status byte back to Empty.

mod iterator;
mod record_store;

pub use iterator::OccupiedSlots;
pub use record_store::RecordStore;

/// Zero-based slot position, doubling as the public product ID.
///
/// Signed so that user-supplied ids such as `-1` reach the bounds check and
/// fail with `InvalidIndex` instead of being unrepresentable.
pub type SlotId = i64;
