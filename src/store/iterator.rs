//! Occupied-slot iterator
//!
//! Sequential scan over the slot file, yielding only occupied slots.

use crate::error::Result;
use crate::record::Record;

use super::{RecordStore, SlotId};

/// Iterator over occupied slots in ascending index order
///
/// Each step takes the store lock for a single slot read, so other callers
/// may interleave writes between steps.
pub struct OccupiedSlots<'a> {
    store: &'a RecordStore,
    /// Next slot to read
    next_index: SlotId,
    /// One past the last slot
    end: SlotId,
}

impl<'a> OccupiedSlots<'a> {
    pub(super) fn new(store: &'a RecordStore) -> Self {
        Self {
            store,
            next_index: 0,
            end: store.capacity() as SlotId,
        }
    }
}

impl<'a> Iterator for OccupiedSlots<'a> {
    type Item = Result<(SlotId, Record)>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.next_index < self.end {
            let index = self.next_index;
            self.next_index += 1;

            match self.store.read_raw(index) {
                Ok(record) if record.is_occupied() => return Some(Ok((index, record))),
                Ok(_) => continue,
                Err(e) => {
                    // Stop after the first failure
                    self.next_index = self.end;
                    return Some(Err(e));
                }
            }
        }
        None
    }
}
